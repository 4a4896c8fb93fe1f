//! Live mixes listing.

use crate::data::biography::BIOGRAPHY;
use crate::pages::{external_link, page_hero};
use suname_ui::*;
use zoon::*;

pub fn page() -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Gap::new().y(SPACING_32))
        .item(page_hero(
            "Mixes",
            Some("Live sets and studio sessions, start to finish."),
        ))
        .items(BIOGRAPHY.mixes.iter().map(|mix| {
            card()
                .child(
                    Column::new()
                        .s(Gap::new().y(SPACING_8))
                        .item(h3(mix.title))
                        .item(paragraph(mix.description))
                        .item(external_link("Listen on SoundCloud", mix.url)),
                )
                .unify()
        }))
}
