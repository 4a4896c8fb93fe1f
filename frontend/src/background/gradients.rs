//! Realm-keyed gradient tables and the cross-fade helper the full-bleed
//! layers share.
//!
//! Browsers don't interpolate between gradient images, so a realm change
//! cross-fades two stacked layers by opacity instead of mutating one
//! background in place.

use suname_ui::{Realm, realm};
use zoon::*;

pub const SKY_DARK: &str = "linear-gradient(180deg, #000005 0%, #020510 20%, #080c1f 40%, #151a30 60%, #202840 80%, #080c1f 100%)";
pub const SKY_LIGHT: &str = "linear-gradient(180deg, #ff8c00 0%, #ff6f00 25%, #ff4f00 50%, #ff2a00 75%, #ff0000 100%)";

pub const HAZE_DARK: &str = "radial-gradient(ellipse at center top, rgba(30, 40, 60, 0.25), rgba(40, 50, 70, 0.18), transparent 75%)";
pub const HAZE_LIGHT: &str = "radial-gradient(ellipse at center top, rgba(255, 165, 0, 0.4), rgba(255, 140, 0, 0.3), transparent 85%)";

pub const MOON: &str = "radial-gradient(circle at 30% 30%, #f5f8ff 5%, #e6efff 25%, #d0e0ff 50%, #b3c7ff 75%, #94a5ff 100%)";
pub const SUN: &str = "radial-gradient(circle at 35% 35%, #fffbe6 0%, #fff0b3 20%, #ffd700 60%, #ffa500 100%)";

pub const MOON_GLOW: &str = "0 0 60px rgba(200, 210, 220, 0.8), inset -7px -7px 18px rgba(150, 170, 190, 0.5)";
pub const SUN_GLOW: &str = "0 0 140px rgba(255, 215, 0, 0.9), 0 0 240px rgba(255, 165, 0, 0.6), inset -5px -5px 12px rgba(255, 165, 0, 0.4)";

pub const MOON_HALO: &str = "radial-gradient(circle, transparent 40%, rgba(150, 170, 190, 0.1) 50%, transparent 80%)";
pub const SUN_HALO: &str = "radial-gradient(circle, transparent 30%, rgba(255, 140, 0, 0.35) 45%, rgba(255, 165, 0, 0.25) 70%, transparent 90%)";

pub const OCEAN_DARK: &str = "linear-gradient(to top, rgba(0, 0, 5, 0.98) 0%, rgba(10, 10, 25, 0.8) 30%, rgba(20, 20, 45, 0.6) 60%, rgba(30, 30, 65, 0.3) 90%, transparent 100%)";
pub const OCEAN_LIGHT: &str = "linear-gradient(to top, rgba(100, 50, 0, 0.9) 0%, rgba(200, 80, 0, 0.7) 25%, rgba(255, 150, 50, 0.4) 50%, rgba(80, 0, 20, 0.2) 75%, rgba(0, 50, 100, 0.1) 90%, transparent 100%)";

pub const SAND_DARK: &str = "linear-gradient(to top, rgba(15, 20, 25, 0.98) 0%, rgba(25, 30, 35, 0.9) 20%, rgba(40, 45, 50, 0.8) 40%, rgba(60, 65, 70, 0.65) 60%, rgba(75, 80, 85, 0.5) 80%, transparent 100%)";
pub const SAND_LIGHT: &str = "linear-gradient(to top, rgba(210, 150, 80, 1) 0%, rgba(230, 180, 120, 0.92) 15%, rgba(250, 210, 160, 0.72) 50%, rgba(255, 220, 170, 0.6) 70%, rgba(255, 240, 200, 0.45) 85%, transparent 100%)";

pub const SHORE_WAVE_DARK: &str = "linear-gradient(to top, rgba(5, 5, 10, 0.1) 0%, rgba(2, 2, 5, 0.05) 30%, transparent 100%)";
pub const SHORE_WAVE_LIGHT: &str = "linear-gradient(to top, rgba(255, 180, 80, 0.4) 0%, rgba(255, 120, 30, 0.2) 30%, transparent 100%)";

pub const TSUNAMI_DARK: &str = "linear-gradient(to right, rgba(0, 0, 15, 0.95) 0%, rgba(20, 20, 50, 0.85) 40%, rgba(40, 40, 80, 0.75) 80%, rgba(50, 50, 90, 0.7) 100%)";
pub const TSUNAMI_LIGHT: &str = "linear-gradient(to right, rgba(100, 40, 0, 0.95) 0%, rgba(220, 80, 0, 0.85) 40%, rgba(255, 120, 20, 0.75) 80%, rgba(255, 140, 40, 0.7) 100%)";

/// Pick one of two static style values by realm.
pub fn realm_style(dark: &'static str, light: &'static str) -> impl Signal<Item = &'static str> {
    realm().map(move |current| match current {
        Realm::Dark => dark,
        Realm::Light => light,
    })
}

/// Full-bleed element pair cross-fading by opacity on realm change.
pub fn cross_faded_fill(dark: &'static str, light: &'static str) -> impl Element {
    Stack::new()
        .s(Width::fill())
        .s(Height::fill())
        .layer(cross_fade_half(dark, Realm::Dark))
        .layer(cross_fade_half(light, Realm::Light))
}

fn cross_fade_half(background: &'static str, shown_in: Realm) -> impl Element {
    El::new()
        .s(Width::fill())
        .s(Height::fill())
        .update_raw_el(move |raw_el| {
            raw_el
                .style("background", background)
                .style("transition", "opacity 1000ms ease-in-out")
                .style_signal(
                    "opacity",
                    realm().map(move |current| if current == shown_in { "1" } else { "0" }),
                )
        })
}

pub fn sky_layer() -> impl Element {
    cross_faded_fill(SKY_DARK, SKY_LIGHT)
}

/// Atmospheric haze with a slow 9 s breathing loop.
pub fn haze_layer() -> impl Element {
    let breath = suname_ui::looping_oscillator(9.0);
    let opacity_signal = breath.signal().map(|phase| {
        let folded = suname_ui::triangle(phase);
        format!("{:.3}", suname_ui::lerp(folded, 0.6, 0.95))
    });
    let scale_signal = breath.signal().map(|phase| {
        let folded = suname_ui::triangle(phase);
        format!("scale({:.4})", suname_ui::lerp(folded, 1.0, 1.05))
    });

    El::new()
        .s(Width::fill())
        .s(Height::fill())
        .update_raw_el(move |raw_el| {
            raw_el
                .style_signal("background", realm_style(HAZE_DARK, HAZE_LIGHT))
                .style_signal("opacity", opacity_signal)
                .style_signal("transform", scale_signal)
        })
        .after_remove(move |_| drop(breath))
}
