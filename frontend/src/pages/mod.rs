//! Content pages, one module per route.

pub mod bookings;
pub mod contact;
pub mod demos;
pub mod epk;
pub mod home;
pub mod interviews;
pub mod mixes;
pub mod music;
pub mod not_found;
pub mod tour;
pub mod wave_events;

use crate::inquiry::InquiryForms;
use crate::router::PageId;
use suname_ui::*;
use zoon::*;

pub fn page(page_id: PageId, forms: &InquiryForms) -> impl Element + use<> {
    let content = match page_id {
        PageId::Home => home::page().unify(),
        PageId::Bookings => bookings::page(forms).unify(),
        PageId::Contact => contact::page(forms).unify(),
        PageId::Demos => demos::page().unify(),
        PageId::Tour => tour::page().unify(),
        PageId::Interviews => interviews::page().unify(),
        PageId::Mixes => mixes::page().unify(),
        PageId::Music => music::page().unify(),
        PageId::Epk => epk::page().unify(),
        PageId::WaveEvents => wave_events::page().unify(),
        PageId::NotFound => not_found::page().unify(),
    };

    El::new()
        .s(Width::fill())
        .s(Align::new().center_x())
        .s(Padding::new().x(SPACING_24).y(SPACING_48))
        .child(
            El::new()
                .s(Width::fill())
                .update_raw_el(|raw_el| raw_el.style("max-width", "880px"))
                .child(content),
        )
}

/// Shared hero block: page title plus an optional lead paragraph.
pub fn page_hero(title: &'static str, lead_text: Option<&'static str>) -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Gap::new().y(SPACING_16))
        .item(h1(title))
        .item_signal(always(lead_text).map(|lead_text| lead_text.map(lead)))
}

/// External link row used on the media pages.
pub fn external_link(label: &'static str, url: &'static str) -> impl Element {
    Link::new()
        .s(Font::new()
            .size(FONT_SIZE_16)
            .weight(FontWeight::Number(FONT_WEIGHT_5))
            .color_signal(accent()))
        .s(transition_colors())
        .label(label)
        .to(url)
        .new_tab(NewTab::new())
}
