//! SUNAME WAVE events page.

use crate::data::biography::BIOGRAPHY;
use crate::pages::page_hero;
use suname_ui::*;
use zoon::*;

pub fn page() -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Gap::new().y(SPACING_32))
        .item(page_hero(
            "WAVE Events",
            Some("Not raves. Waves. Emotional release through dance culture."),
        ))
        .item(card().child(
            Column::new()
                .s(Gap::new().y(SPACING_16))
                .item(paragraph(
                    "WAVE events flood a city with light: one room, one continuous \
                     journey from the darkest low-frequency depths to pure sunlight \
                     euphoria. Every event ends brighter than it began.",
                ))
                .item(
                    El::new()
                        .s(Font::new()
                            .size(FONT_SIZE_16)
                            .italic()
                            .color_signal(text_muted()))
                        .child(Text::new(BIOGRAPHY.motto)),
                ),
        ))
}
