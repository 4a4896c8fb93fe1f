//! Electronic press kit: everything a promoter needs on one page.

use crate::data::biography::BIOGRAPHY;
use crate::pages::{external_link, page_hero};
use suname_ui::*;
use zoon::*;

pub fn page() -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Gap::new().y(SPACING_32))
        .item(page_hero("Electronic Press Kit", None))
        .item(bio_section())
        .item(facts_section())
        .item(contact_section())
}

fn bio_section() -> impl Element {
    card().child(
        Column::new()
            .s(Gap::new().y(SPACING_16))
            .item(h3("Biography"))
            .item(paragraph(BIOGRAPHY.bio))
            .items(BIOGRAPHY.full_bio.iter().map(|section| paragraph(*section))),
    )
}

fn facts_section() -> impl Element {
    card().child(
        Column::new()
            .s(Gap::new().y(SPACING_8))
            .item(h3("Quick facts"))
            .item(fact_row("Base", BIOGRAPHY.location))
            .item(fact_row("Genres", "Tech House / Melodic Techno / Techno"))
            .item(fact_row("Movement", BIOGRAPHY.movement_name))
            .item(fact_row("Motto", BIOGRAPHY.motto)),
    )
}

fn fact_row(label: &'static str, value: &'static str) -> impl Element {
    Row::new()
        .s(Gap::new().x(SPACING_12))
        .item(El::new().s(Width::exact(96)).child(small(label)))
        .item(paragraph(value))
}

fn contact_section() -> impl Element {
    card().child(
        Column::new()
            .s(Gap::new().y(SPACING_8))
            .item(h3("Booking contact"))
            .item(paragraph(BIOGRAPHY.booking_email))
            .item(
                Row::new().s(Gap::new().x(SPACING_16)).multiline().items(
                    BIOGRAPHY
                        .socials
                        .iter()
                        .map(|link| external_link(link.name, link.url)),
                ),
            ),
    )
}
