//! Tour dates page.

use crate::pages::page_hero;
use suname_ui::*;
use zoon::*;

struct TourDate {
    date: &'static str,
    venue: &'static str,
    city: &'static str,
}

static TOUR_DATES: &[TourDate] = &[];

pub fn page() -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Gap::new().y(SPACING_32))
        .item(page_hero("Tour", Some("Where the wave lands next.")))
        .item(dates_list())
}

fn dates_list() -> impl Element {
    if TOUR_DATES.is_empty() {
        return card()
            .child(
                Column::new()
                    .s(Gap::new().y(SPACING_8))
                    .item(h4("No public dates right now"))
                    .item(paragraph(
                        "New shows are announced on socials first. Follow along, or book \
                         SUNAME for your own event.",
                    )),
            )
            .unify();
    }

    Column::new()
        .s(Width::fill())
        .s(Gap::new().y(SPACING_12))
        .items(TOUR_DATES.iter().map(|tour_date| {
            card()
                .padding(SPACING_16)
                .child(
                    Row::new()
                        .s(Gap::new().x(SPACING_16))
                        .item(small(tour_date.date))
                        .item(paragraph(tour_date.venue))
                        .item(small(tour_date.city)),
                )
                .unify()
        }))
        .unify()
}
