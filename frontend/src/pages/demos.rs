//! Demo submission page.

use crate::data::biography::BIOGRAPHY;
use crate::pages::{external_link, page_hero};
use suname_ui::*;
use zoon::*;

pub fn page() -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Gap::new().y(SPACING_32))
        .item(page_hero(
            "Demos",
            Some("Producing Tech House, Melodic Techno, or Techno? Send it over."),
        ))
        .item(card().child(
            Column::new()
                .s(Gap::new().y(SPACING_16))
                .item(paragraph(
                    "Demos are reviewed in listening order. Finished, mixed-down tracks \
                     travel the fastest — send a private streaming link, not a file.",
                ))
                .item(external_link("Submit your demo", BIOGRAPHY.demo_link)),
        ))
}
