// Color Token System
// Every color is a reactive signal keyed off the realm: night ocean blues
// for Dark, sunset oranges for Light.

use super::realm::{realm, Realm};
use zoon::*;

// Text scale

pub fn text_primary() -> impl Signal<Item = &'static str> {
    realm().map(|r| match r {
        Realm::Light => "oklch(22% 0.04 60)",
        Realm::Dark => "oklch(96% 0.01 260)",
    })
}

pub fn text_secondary() -> impl Signal<Item = &'static str> {
    realm().map(|r| match r {
        Realm::Light => "oklch(32% 0.05 55)",
        Realm::Dark => "oklch(85% 0.02 260)",
    })
}

pub fn text_muted() -> impl Signal<Item = &'static str> {
    realm().map(|r| match r {
        Realm::Light => "oklch(45% 0.05 55)",
        Realm::Dark => "oklch(70% 0.02 260)",
    })
}

// Brand accent (the violet from the artist's visual identity)

pub fn accent() -> impl Signal<Item = &'static str> {
    realm().map(|r| match r {
        Realm::Light => "oklch(55% 0.22 295)",
        Realm::Dark => "oklch(70% 0.19 295)",
    })
}

pub fn accent_soft() -> impl Signal<Item = &'static str> {
    realm().map(|r| match r {
        Realm::Light => "oklch(55% 0.22 295 / 0.25)",
        Realm::Dark => "oklch(70% 0.19 295 / 0.25)",
    })
}

// Glass surfaces layered over the animated backdrop

pub fn surface() -> impl Signal<Item = &'static str> {
    realm().map(|r| match r {
        Realm::Light => "oklch(98% 0.02 70 / 0.60)",
        Realm::Dark => "oklch(20% 0.04 265 / 0.60)",
    })
}

pub fn surface_raised() -> impl Signal<Item = &'static str> {
    realm().map(|r| match r {
        Realm::Light => "oklch(99% 0.01 70 / 0.80)",
        Realm::Dark => "oklch(25% 0.04 265 / 0.80)",
    })
}

pub fn surface_border() -> impl Signal<Item = &'static str> {
    realm().map(|r| match r {
        Realm::Light => "oklch(60% 0.08 55 / 0.40)",
        Realm::Dark => "oklch(60% 0.05 265 / 0.35)",
    })
}

// Form controls

pub fn input_background() -> impl Signal<Item = &'static str> {
    realm().map(|r| match r {
        Realm::Light => "oklch(99% 0.01 70 / 0.70)",
        Realm::Dark => "oklch(15% 0.03 265 / 0.70)",
    })
}

pub fn input_border() -> impl Signal<Item = &'static str> {
    realm().map(|r| match r {
        Realm::Light => "oklch(55% 0.08 55 / 0.50)",
        Realm::Dark => "oklch(55% 0.05 265 / 0.50)",
    })
}

pub fn input_border_focused() -> impl Signal<Item = &'static str> {
    accent()
}

// Notification banners

pub fn success_background() -> impl Signal<Item = &'static str> {
    realm().map(|r| match r {
        Realm::Light => "oklch(90% 0.08 150)",
        Realm::Dark => "oklch(30% 0.08 150)",
    })
}

pub fn success_border() -> impl Signal<Item = &'static str> {
    realm().map(|r| match r {
        Realm::Light => "oklch(50% 0.14 150)",
        Realm::Dark => "oklch(65% 0.14 150)",
    })
}

pub fn error_background() -> impl Signal<Item = &'static str> {
    realm().map(|r| match r {
        Realm::Light => "oklch(90% 0.07 30)",
        Realm::Dark => "oklch(30% 0.09 30)",
    })
}

pub fn error_border() -> impl Signal<Item = &'static str> {
    realm().map(|r| match r {
        Realm::Light => "oklch(50% 0.19 30)",
        Realm::Dark => "oklch(68% 0.19 30)",
    })
}

// Buttons

pub fn button_primary_background() -> impl Signal<Item = &'static str> {
    accent()
}

pub fn button_primary_text() -> impl Signal<Item = &'static str> {
    realm().map(|_| "oklch(98% 0.01 295)")
}

pub fn button_ghost_hover() -> impl Signal<Item = &'static str> {
    realm().map(|r| match r {
        Realm::Light => "oklch(90% 0.04 60 / 0.50)",
        Realm::Dark => "oklch(35% 0.04 265 / 0.50)",
    })
}
