//! The floating realm switch: the only user-facing writer of the realm.

use crate::realm::RealmContext;
use suname_ui::*;
use zoon::*;

pub fn realm_toggle(realm_context: &RealmContext) -> impl Element + use<> {
    let realm_toggle_requested_relay = realm_context.realm_toggle_requested_relay.clone();
    let (hovered, hovered_signal) = Mutable::new_and_signal(false);

    El::new()
        .s(Align::new().bottom().right())
        .s(Padding::all(SPACING_24))
        .update_raw_el(|raw_el| {
            raw_el
                .style("position", "fixed")
                .style("bottom", "0")
                .style("right", "0")
                .style("z-index", "900")
        })
        .child(
            Button::new()
                .s(Width::exact(52))
                .s(Height::exact(52))
                .s(RoundedCorners::all(CORNER_RADIUS_MAX))
                .s(Background::new().color_signal(surface_raised()))
                .s(Borders::all_signal(
                    surface_border().map(|color| Border::new().width(1).color(color)),
                ))
                .s(Shadows::with_signal(shadow_glow()))
                .s(Font::new().size(FONT_SIZE_24).color_signal(text_primary()))
                .s(transition_colors())
                .s(Cursor::new(CursorIcon::Pointer))
                .update_raw_el(move |raw_el| {
                    raw_el.style("transition", "transform 150ms ease-out").style_signal(
                        "transform",
                        hovered_signal.map(|is_hovered| if is_hovered { "scale(1.1)" } else { "scale(1)" }),
                    )
                })
                .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
                .label_signal(realm().map(|current| match current {
                    Realm::Dark => "☀",
                    Realm::Light => "☾",
                }))
                .update_raw_el(|raw_el| raw_el.attr("aria-label", "Toggle realm"))
                .on_press(move || realm_toggle_requested_relay.send(())),
        )
}
