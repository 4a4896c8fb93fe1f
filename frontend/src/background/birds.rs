//! Gliding birds, light realm only.
//!
//! Birds mount only while the transition sequencer is idle, so they never
//! pop in under a lightning flash. Flight paths are seeded per bird and
//! stable across remounts.

use crate::transition::RealmTransition;
use shared::{seeded_range, seeded_unit};
use suname_ui::{Realm, lerp, realm, triangle};
use zoon::*;

const BIRD_COUNT: usize = 6;

const SALT_LEFT: u64 = 0xC1;
const SALT_TOP: u64 = 0xC2;
const SALT_DURATION: u64 = 0xC3;
const SALT_DELAY: u64 = 0xC4;
const SALT_DRIFT: u64 = 0xC5;
const SALT_FLIP: u64 = 0xC6;

const CLOCK_WRAP_SECONDS: f64 = 3600.0;

pub fn birds_layer(transition: &RealmTransition) -> impl Element + use<> {
    let mount_signal = map_ref! {
        let current_realm = realm(),
        let settled = transition.settled_signal() =>
        matches!(current_realm, Realm::Light) && *settled
    };

    El::new()
        .s(Width::fill())
        .s(Height::fill())
        .update_raw_el(|raw_el| raw_el.style("pointer-events", "none"))
        .child_signal(mount_signal.dedupe().map(|mounted| mounted.then(flock)))
}

fn flock() -> impl Element {
    let flight_clock = suname_ui::looping_oscillator(CLOCK_WRAP_SECONDS);
    let flap_clock = suname_ui::looping_oscillator(1.5);

    let birds = (0..BIRD_COUNT)
        .map(|index| bird(index as u64, &flight_clock, &flap_clock).unify())
        .collect::<Vec<_>>();

    Stack::new()
        .s(Width::fill())
        .s(Height::fill())
        .update_raw_el(|raw_el| raw_el.style("position", "relative"))
        .layers(birds)
        .after_remove(move |_| {
            drop(flight_clock);
            drop(flap_clock);
        })
}

fn bird(index: u64, flight_clock: &Oscillator, flap_clock: &Oscillator) -> impl Element + use<> {
    let left = seeded_range(index, SALT_LEFT, 5.0, 75.0);
    let top = seeded_range(index, SALT_TOP, 15.0, 55.0);
    let duration = seeded_range(index, SALT_DURATION, 25.0, 40.0);
    let delay = seeded_range(index, SALT_DELAY, 0.0, 12.0);
    let travel = seeded_range(index, SALT_DRIFT, 400.0, 800.0);
    let drift = seeded_range(index, SALT_DRIFT.wrapping_add(1), -40.0, 40.0);
    let flip = if seeded_unit(index, SALT_FLIP) > 0.5 { 1.0 } else { -1.0 };

    let path_signal = flight_clock.signal().map(move |phase| {
        let seconds = phase * CLOCK_WRAP_SECONDS;
        let p = ((seconds + delay) / duration) % 1.0;
        let x = p * travel;
        let y = triangle(p) * drift;
        format!("translate({x:.1}px, {y:.1}px) scaleX({flip})")
    });
    let opacity_signal = flight_clock.signal().map(move |phase| {
        let seconds = phase * CLOCK_WRAP_SECONDS;
        let p = ((seconds + delay) / duration) % 1.0;
        format!("{:.3}", (4.0 * p).min(4.0 * (1.0 - p)).min(1.0))
    });
    let flap_signal = flap_clock.signal().map(|phase| {
        format!("rotate({:.1}deg)", lerp(triangle(phase), 8.0, 32.0))
    });
    let flap_signal_mirrored = flap_clock.signal().map(|phase| {
        format!("rotate(-{:.1}deg)", lerp(triangle(phase), 8.0, 32.0))
    });

    El::new()
        .update_raw_el(move |raw_el| {
            raw_el
                .style("position", "absolute")
                .style("left", &format!("{left:.1}%"))
                .style("top", &format!("{top:.1}%"))
                .style("filter", "drop-shadow(1px 1px 2px rgba(0, 0, 0, 0.2))")
                .style_signal("transform", path_signal)
                .style_signal("opacity", opacity_signal)
        })
        .child(
            // Two wing bars meeting in a shallow V, flapping in opposition.
            Row::new()
                .item(wing(flap_signal))
                .item(wing(flap_signal_mirrored)),
        )
}

fn wing(flap_signal: impl Signal<Item = String> + 'static) -> impl Element {
    El::new().update_raw_el(move |raw_el| {
        raw_el
            .style("width", "clamp(10px, 1.8vw, 22px)")
            .style("height", "clamp(2px, 0.3vw, 4px)")
            .style("border-radius", "50% 50% 0 0")
            .style("background", "rgba(0, 0, 0, 0.7)")
            .style("transform-origin", "center")
            .style_signal("transform", flap_signal)
    })
}
