//! Interviews and press features.

use crate::pages::page_hero;
use suname_ui::*;
use zoon::*;

pub fn page() -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Gap::new().y(SPACING_32))
        .item(page_hero(
            "Interviews",
            Some("Conversations about the music and the movement."),
        ))
        .item(card().child(
            Column::new()
                .s(Gap::new().y(SPACING_8))
                .item(h4("Press features coming soon"))
                .item(paragraph(
                    "Interviews and media features will be collected here. For press \
                     inquiries, head to the contact page.",
                )),
        ))
}
