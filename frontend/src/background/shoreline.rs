//! Ocean, shore wave bands, beach sand and the seeded beach details.

use super::gradients::{
    OCEAN_DARK, OCEAN_LIGHT, SAND_DARK, SAND_LIGHT, SHORE_WAVE_DARK, SHORE_WAVE_LIGHT,
    cross_faded_fill, realm_style,
};
use shared::{seeded_range, seeded_unit};
use suname_ui::{Realm, lerp, looping_oscillator, realm, triangle};
use zoon::*;

const FOOTPRINT_COUNT: usize = 18;
const SHELL_COUNT: usize = 12;

const SALT_LEFT: u64 = 0xD1;
const SALT_TOP: u64 = 0xD2;
const SALT_ANGLE: u64 = 0xD3;
const SALT_DELAY: u64 = 0xD4;
const SALT_TONE: u64 = 0xD5;
const SALT_SHAPE: u64 = 0xD6;

const CLOCK_WRAP_SECONDS: f64 = 3600.0;

/// Ocean band with a slow 10 s opacity swell.
pub fn ocean_layer() -> impl Element {
    let swell = looping_oscillator(10.0);
    let opacity_signal = swell
        .signal()
        .map(|phase| format!("{:.3}", lerp(triangle(phase), 0.95, 1.0)));

    El::new()
        .s(Width::fill())
        .s(Height::fill())
        .update_raw_el(|raw_el| raw_el.style("position", "relative").style("pointer-events", "none"))
        .child(
            El::new()
                .update_raw_el(move |raw_el| {
                    raw_el
                        .style("position", "absolute")
                        .style("bottom", "0")
                        .style("left", "0")
                        .style("right", "0")
                        .style("height", "clamp(25vh, 32vh, 35vh)")
                        .style_signal("opacity", opacity_signal)
                })
                .child(cross_faded_fill(OCEAN_DARK, OCEAN_LIGHT)),
        )
        .after_remove(move |_| drop(swell))
}

/// Beach sand band under the ocean edge.
pub fn sand_layer() -> impl Element {
    El::new()
        .s(Width::fill())
        .s(Height::fill())
        .update_raw_el(|raw_el| raw_el.style("position", "relative").style("pointer-events", "none"))
        .child(
            El::new()
                .update_raw_el(|raw_el| {
                    raw_el
                        .style("position", "absolute")
                        .style("bottom", "0")
                        .style("left", "0")
                        .style("right", "0")
                        .style("height", "clamp(12vh, 18vh, 22vh)")
                })
                .child(cross_faded_fill(SAND_DARK, SAND_LIGHT)),
        )
}

/// Two blurred wave lines bobbing against the sand on offset cycles.
pub fn shore_wave_layers() -> impl Element {
    let bob_front = looping_oscillator(4.0);
    let bob_back = looping_oscillator(5.0);

    let front_transform = bob_front.signal().map(|phase| {
        let folded = triangle(phase);
        format!(
            "translateY({:.2}%) scaleX({:.4})",
            lerp(folded, 0.0, -5.0),
            lerp(folded, 1.0, 1.05)
        )
    });
    let front_opacity = bob_front
        .signal()
        .map(|phase| format!("{:.3}", lerp(triangle(phase), 0.7, 0.9)));
    let back_transform = bob_back.signal().map(|phase| {
        let folded = triangle(phase);
        format!(
            "translateY({:.2}%) scaleX({:.4})",
            lerp(folded, 0.0, 7.0),
            lerp(folded, 1.0, 1.03)
        )
    });
    let back_opacity = bob_back
        .signal()
        .map(|phase| format!("{:.3}", lerp(triangle(phase), 0.5, 0.8)));

    El::new()
        .s(Width::fill())
        .s(Height::fill())
        .update_raw_el(|raw_el| raw_el.style("position", "relative").style("pointer-events", "none"))
        .child(
            Stack::new()
                .s(Width::fill())
                .s(Height::fill())
                .layer(shore_wave_band(
                    "calc(100% - clamp(12vh, 18vh, 22vh))",
                    "clamp(5vh, 7vh, 9vh)",
                    "blur(2px)",
                    front_transform,
                    front_opacity,
                ))
                .layer(shore_wave_band(
                    "calc(100% - clamp(12vh, 18vh, 22vh) + 2vh)",
                    "clamp(4vh, 6vh, 8vh)",
                    "blur(2.5px)",
                    back_transform,
                    back_opacity,
                )),
        )
        .after_remove(move |_| {
            drop(bob_front);
            drop(bob_back);
        })
}

fn shore_wave_band(
    top: &'static str,
    height: &'static str,
    blur: &'static str,
    transform_signal: impl Signal<Item = String> + 'static,
    opacity_signal: impl Signal<Item = String> + 'static,
) -> impl Element {
    El::new().update_raw_el(move |raw_el| {
        raw_el
            .style("position", "absolute")
            .style("left", "0")
            .style("right", "0")
            .style("top", top)
            .style("height", height)
            .style("filter", blur)
            .style("border-radius", "50% 50% 0 0 / 100% 100% 0 0")
            .style("transform-origin", "bottom center")
            .style(
                "mask-image",
                "linear-gradient(to top, transparent 0%, black 10%, black 90%, transparent 100%)",
            )
            .style_signal("background", realm_style(SHORE_WAVE_DARK, SHORE_WAVE_LIGHT))
            .style_signal("transform", transform_signal)
            .style_signal("opacity", opacity_signal)
    })
}

/// Footprints and shells strewn over the sand, each breathing slowly.
pub fn beach_details_layer() -> impl Element {
    let detail_clock = looping_oscillator(CLOCK_WRAP_SECONDS);

    let mut details = Vec::new();
    for index in 0..FOOTPRINT_COUNT {
        details.push(footprint(index as u64, &detail_clock).unify());
    }
    for index in 0..SHELL_COUNT {
        details.push(shell(index as u64, &detail_clock).unify());
    }

    El::new()
        .s(Width::fill())
        .s(Height::fill())
        .update_raw_el(|raw_el| raw_el.style("position", "relative").style("pointer-events", "none"))
        .child(
            El::new()
                .update_raw_el(|raw_el| {
                    raw_el
                        .style("position", "absolute")
                        .style("bottom", "0")
                        .style("left", "0")
                        .style("right", "0")
                        .style("height", "clamp(10vh, 15vh, 18vh)")
                })
                .child(
                    Stack::new()
                        .s(Width::fill())
                        .s(Height::fill())
                        .update_raw_el(|raw_el| raw_el.style("position", "relative"))
                        .layers(details),
                ),
        )
        .after_remove(move |_| drop(detail_clock))
}

fn breathing_opacity(
    detail_clock: &Oscillator,
    period: f64,
    delay: f64,
    min: f64,
    max: f64,
) -> impl Signal<Item = String> + use<> {
    detail_clock.signal().map(move |phase| {
        let seconds = phase * CLOCK_WRAP_SECONDS;
        let folded = triangle(((seconds + delay) / period) % 1.0);
        format!("{:.3}", lerp(folded, min, max))
    })
}

fn footprint(index: u64, detail_clock: &Oscillator) -> impl Element + use<> {
    let left = seeded_range(index, SALT_LEFT, 5.0, 90.0);
    let top = seeded_range(index, SALT_TOP, 15.0, 85.0);
    let angle = seeded_range(index, SALT_ANGLE, -15.0, 15.0);
    let delay = seeded_range(index, SALT_DELAY, 0.0, 8.0);
    let opacity_signal = breathing_opacity(detail_clock, 14.0, delay, 0.5, 0.9);

    El::new().update_raw_el(move |raw_el| {
        raw_el
            .style("position", "absolute")
            .style("width", "clamp(6px, 1.1vw, 18px)")
            .style("height", "clamp(3px, 0.6vw, 10px)")
            .style("border-radius", "50%")
            .style("left", &format!("{left:.1}%"))
            .style("top", &format!("{top:.1}%"))
            .style("filter", "blur(0.5px)")
            .style("transform", &format!("rotate({angle:.1}deg)"))
            .style_signal(
                "background",
                realm_style("rgba(50, 60, 75, 0.6)", "rgba(160, 80, 0, 0.55)"),
            )
            .style_signal("opacity", opacity_signal)
    })
}

fn shell(index: u64, detail_clock: &Oscillator) -> impl Element + use<> {
    let left = seeded_range(index, SALT_LEFT.wrapping_add(0x10), 4.0, 94.0);
    let top = seeded_range(index, SALT_TOP.wrapping_add(0x10), 20.0, 80.0);
    let delay = seeded_range(index, SALT_DELAY.wrapping_add(0x10), 0.0, 5.0);
    let dark_tone = seeded_range(index, SALT_TONE, 80.0, 95.0);
    let light_tone = seeded_range(index, SALT_TONE.wrapping_add(1), 70.0, 85.0);
    let rounded = seeded_unit(index, SALT_SHAPE) > 0.5;
    let opacity_signal = breathing_opacity(detail_clock, 9.0, delay, 0.7, 1.0);

    let dark_color = format!("hsl(230, 15%, {dark_tone:.0}%)");
    let light_color = format!("hsl(35, 60%, {light_tone:.0}%)");

    El::new().update_raw_el(move |raw_el| {
        raw_el
            .style("position", "absolute")
            .style("width", "clamp(3px, 0.8vw, 12px)")
            .style("height", "clamp(2px, 0.6vw, 8px)")
            .style("left", &format!("{left:.1}%"))
            .style("top", &format!("{top:.1}%"))
            .style(
                "border-radius",
                if rounded { "50%" } else { "35% 65% 65% 35% / 35% 35% 65% 65%" },
            )
            .style_signal(
                "background",
                realm().map(move |current| match current {
                    Realm::Dark => dark_color.clone(),
                    Realm::Light => light_color.clone(),
                }),
            )
            .style_signal("opacity", opacity_signal)
    })
}
