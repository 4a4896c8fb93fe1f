//! Music and releases page.

use crate::data::biography::BIOGRAPHY;
use crate::pages::{external_link, page_hero};
use suname_ui::*;
use zoon::*;

pub fn page() -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Gap::new().y(SPACING_32))
        .item(page_hero(
            "Music",
            Some("Latest tracks and releases across every platform."),
        ))
        .item(platforms_card())
}

fn platforms_card() -> impl Element {
    card().child(
        Column::new()
            .s(Gap::new().y(SPACING_16))
            .item(h4("Listen everywhere"))
            .item(paragraph(
                "Tech House, Melodic Techno, and Techno productions — streaming on all \
                 major platforms.",
            ))
            .item(
                Column::new().s(Gap::new().y(SPACING_8)).items(
                    BIOGRAPHY
                        .socials
                        .iter()
                        .filter(|link| {
                            matches!(link.name, "SoundCloud" | "Spotify" | "Apple Music" | "YouTube")
                        })
                        .map(|link| external_link(link.name, link.url)),
                ),
            ),
    )
}
