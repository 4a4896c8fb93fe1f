//! Night-sky starfield: twinkling stars and the occasional shooting star.
//! Dark realm only.
//!
//! Per-star layout and timing come from `seeded_unit` keyed by the star's
//! index, so a remount lays the sky out exactly the same way. One shared
//! clock oscillator drives every star; each star folds its own period and
//! delay into the clock phase.

use shared::{seeded_range, seeded_unit};
use suname_ui::{Realm, lerp, realm, triangle};
use zoon::*;

const STAR_COUNT: usize = 120;
const SHOOTING_STAR_COUNT: usize = 4;

const SALT_SIZE: u64 = 0xA1;
const SALT_HUE: u64 = 0xA2;
const SALT_LEFT: u64 = 0xA3;
const SALT_TOP: u64 = 0xA4;
const SALT_PERIOD: u64 = 0xA5;
const SALT_DELAY: u64 = 0xA6;
const SALT_STREAK: u64 = 0xB1;

/// Shared clock: seconds since mount, wrapping hourly. The wrap glitch is
/// a single skipped twinkle cycle, invisible in practice.
const CLOCK_WRAP_SECONDS: f64 = 3600.0;

fn clock() -> Oscillator {
    suname_ui::looping_oscillator(CLOCK_WRAP_SECONDS)
}

pub fn starfield_layer() -> impl Element {
    El::new()
        .s(Width::fill())
        .s(Height::fill())
        .update_raw_el(|raw_el| raw_el.style("pointer-events", "none"))
        .child_signal(realm().map(|current| {
            matches!(current, Realm::Dark).then(night_sky)
        }))
}

fn night_sky() -> impl Element {
    let star_clock = clock();

    let mut layers = Vec::new();
    for index in 0..STAR_COUNT {
        layers.push(star(index as u64, &star_clock).unify());
    }
    for index in 0..SHOOTING_STAR_COUNT {
        layers.push(shooting_star(index as u64, &star_clock).unify());
    }

    Stack::new()
        .s(Width::fill())
        .s(Height::fill())
        .update_raw_el(|raw_el| raw_el.style("position", "relative"))
        .layers(layers)
        .after_remove(move |_| drop(star_clock))
}

fn star(index: u64, star_clock: &Oscillator) -> impl Element + use<> {
    let size_vw = seeded_range(index, SALT_SIZE, 0.15, 0.45);
    let hue = seeded_range(index, SALT_HUE, 220.0, 260.0);
    let left = seeded_unit(index, SALT_LEFT) * 100.0;
    let top = seeded_unit(index, SALT_TOP) * 70.0;
    let period = seeded_range(index, SALT_PERIOD, 2.0, 5.0);
    let delay = seeded_range(index, SALT_DELAY, 0.0, 4.0);

    let twinkle = star_clock.signal().map(move |phase| {
        let seconds = phase * CLOCK_WRAP_SECONDS;
        triangle(((seconds + delay) / period) % 1.0)
    });
    let opacity_signal = twinkle.map(|folded| format!("{:.3}", lerp(folded, 0.4, 1.0)));
    let scale_signal = star_clock.signal().map(move |phase| {
        let seconds = phase * CLOCK_WRAP_SECONDS;
        let folded = triangle(((seconds + delay) / period) % 1.0);
        format!("scale({:.3})", lerp(folded, 0.8, 1.4))
    });

    El::new().update_raw_el(move |raw_el| {
        raw_el
            .style("position", "absolute")
            .style("width", &format!("clamp(1px, {size_vw:.2}vw, 4px)"))
            .style("height", &format!("clamp(1px, {size_vw:.2}vw, 4px)"))
            .style("border-radius", "50%")
            .style("left", &format!("{left:.2}%"))
            .style("top", &format!("{top:.2}%"))
            .style("background", &format!("hsl({hue:.0}, 100%, 95%)"))
            .style("box-shadow", "0 0 8px rgba(255, 255, 255, 0.9)")
            .style_signal("opacity", opacity_signal)
            .style_signal("transform", scale_signal)
    })
}

/// A streak crossing the sky for ~2 s out of a 17–27 s cycle.
fn shooting_star(index: u64, star_clock: &Oscillator) -> impl Element + use<> {
    let period = seeded_range(index, SALT_STREAK, 17.0, 27.0);
    let offset = index as f64 * 7.0;
    let base_top = 10.0 + index as f64 * 25.0;
    const ACTIVE_SECONDS: f64 = 2.0;

    let progress = move |phase: f64| {
        let seconds = phase * CLOCK_WRAP_SECONDS;
        let cycle_seconds = (seconds + offset) % period;
        (cycle_seconds < ACTIVE_SECONDS).then(|| cycle_seconds / ACTIVE_SECONDS)
    };

    let left_signal = star_clock.signal().map(move |phase| match progress(phase) {
        Some(p) => format!("{:.2}%", lerp(p, -10.0, 110.0)),
        None => "-10%".to_string(),
    });
    let top_signal = star_clock.signal().map(move |phase| match progress(phase) {
        Some(p) => format!("{:.2}%", base_top + p * 25.0),
        None => format!("{base_top:.0}%"),
    });
    let opacity_signal = star_clock.signal().map(move |phase| match progress(phase) {
        Some(p) => format!("{:.3}", (4.0 * p).min(4.0 * (1.0 - p)).min(1.0)),
        None => "0".to_string(),
    });

    El::new().update_raw_el(move |raw_el| {
        raw_el
            .style("position", "absolute")
            .style("width", "clamp(2px, 0.4vw, 5px)")
            .style("height", "clamp(2px, 0.4vw, 5px)")
            .style("border-radius", "50%")
            .style("background", "white")
            .style(
                "box-shadow",
                "0 0 25px #ffffff, 2px 0 40px rgba(255, 255, 255, 0.8)",
            )
            .style_signal("left", left_signal)
            .style_signal("top", top_signal)
            .style_signal("opacity", opacity_signal)
    })
}
