// Shadow Token System

use super::realm::{realm, Realm};
use zoon::*;

/// Soft elevation for cards and panels floating over the backdrop.
pub fn shadow_panel() -> impl Signal<Item = Vec<Shadow>> {
    realm().map(|r| match r {
        Realm::Light => vec![
            Shadow::new().y(2).blur(8).color("rgba(120, 50, 0, 0.18)"),
            Shadow::new().y(8).blur(24).color("rgba(120, 50, 0, 0.12)"),
        ],
        Realm::Dark => vec![
            Shadow::new().y(2).blur(8).color("rgba(0, 0, 10, 0.45)"),
            Shadow::new().y(8).blur(24).color("rgba(0, 0, 10, 0.35)"),
        ],
    })
}

/// Accent glow used on primary buttons and the realm toggle.
pub fn shadow_glow() -> impl Signal<Item = Vec<Shadow>> {
    realm().map(|r| match r {
        Realm::Light => vec![Shadow::new().blur(18).color("oklch(55% 0.22 295 / 0.5)")],
        Realm::Dark => vec![Shadow::new().blur(18).color("oklch(70% 0.19 295 / 0.5)")],
    })
}
