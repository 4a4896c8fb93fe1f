//! Site header: wordmark plus navigation links.

use crate::router::Route;
use suname_ui::*;
use zoon::*;

const NAV_LINKS: &[(&str, Route)] = &[
    ("Music", Route::Music),
    ("Mixes", Route::Mixes),
    ("Tour", Route::Tour),
    ("Wave Events", Route::WaveEvents),
    ("Interviews", Route::Interviews),
    ("Demos", Route::Demos),
    ("EPK", Route::Epk),
    ("Bookings", Route::Bookings),
    ("Contact", Route::Contact),
];

pub fn header() -> impl Element {
    Row::new()
        .s(Width::fill())
        .s(Padding::new().x(SPACING_32).y(SPACING_16))
        .s(Gap::new().x(SPACING_24))
        .item(wordmark())
        .item(El::new().s(Width::fill()))
        .item(navigation())
}

fn wordmark() -> impl Element {
    Link::new()
        .s(font_display())
        .s(Font::new()
            .size(FONT_SIZE_24)
            .weight(FontWeight::Bold)
            .color_signal(text_primary()))
        .s(transition_colors())
        .label("SUNAME")
        .to(Route::Root)
}

fn navigation() -> impl Element {
    Row::new()
        .s(Gap::new().x(SPACING_16))
        .multiline()
        .items(NAV_LINKS.iter().map(|(label, route)| nav_link(label, *route)))
}

fn nav_link(label: &'static str, route: Route) -> impl Element {
    let (hovered, hovered_signal) = Mutable::new_and_signal(false);
    Link::new()
        .s(Font::new()
            .size(FONT_SIZE_14)
            .weight(FontWeight::Number(FONT_WEIGHT_5))
            .color_signal(
                map_ref! {
                    let primary = text_primary(),
                    let muted = text_secondary(),
                    let is_hovered = hovered_signal =>
                    if *is_hovered { *primary } else { *muted }
                },
            ))
        .s(transition_colors())
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .label(label)
        .to(route)
}
