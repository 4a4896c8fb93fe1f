//! The celestial body: moon over the night ocean, sun over the sunset.
//!
//! One element serves both realms; only its gradient, glow and rotation
//! style switch with the realm. The pulse loops keep their phase across
//! realm changes.

use super::gradients::{MOON, MOON_GLOW, MOON_HALO, SUN, SUN_GLOW, SUN_HALO, realm_style};
use suname_ui::{Realm, lerp, looping_oscillator, realm, triangle};
use zoon::*;

pub fn celestial_body() -> impl Element {
    let pulse = looping_oscillator(6.0);
    let glow = looping_oscillator(5.0);
    // Full revolution for the sun; a slight wobble for the moon.
    let sun_spin = looping_oscillator(200.0);
    let moon_wobble = looping_oscillator(60.0);

    let transform_signal = map_ref! {
        let current_realm = realm(),
        let pulse_phase = pulse.signal(),
        let sun_phase = sun_spin.signal(),
        let moon_phase = moon_wobble.signal() => {
            let scale = lerp(triangle(*pulse_phase), 1.0, 1.07);
            let rotation = match current_realm {
                Realm::Dark => triangle(*moon_phase) * 5.0,
                Realm::Light => sun_phase * 360.0,
            };
            format!("scale({scale:.4}) rotate({rotation:.2}deg)")
        }
    };
    let opacity_signal = glow
        .signal()
        .map(|phase| format!("{:.3}", lerp(triangle(phase), 0.9, 1.0)));

    El::new()
        .s(Width::fill())
        .s(Height::fill())
        .update_raw_el(|raw_el| raw_el.style("position", "relative").style("pointer-events", "none"))
        .child(El::new().update_raw_el(move |raw_el| {
            raw_el
                .style("position", "absolute")
                .style("width", "clamp(70px, 12vw, 150px)")
                .style("height", "clamp(70px, 12vw, 150px)")
                .style("border-radius", "50%")
                .style("top", "clamp(10vh, 14vh, 18vh)")
                .style("right", "clamp(14vw, 18vw, 22vw)")
                .style_signal("background", realm_style(MOON, SUN))
                .style_signal("box-shadow", realm_style(MOON_GLOW, SUN_GLOW))
                .style_signal("filter", realm_style("blur(0.6px)", "blur(0.3px)"))
                .style_signal("transform", transform_signal)
                .style_signal("opacity", opacity_signal)
        }))
        .after_remove(move |_| {
            drop(pulse);
            drop(glow);
            drop(sun_spin);
            drop(moon_wobble);
        })
}

/// Soft halo ring behind the celestial body, breathing on its own cycle.
pub fn halo() -> impl Element {
    let breath = looping_oscillator(8.0);
    let transform_signal = breath.signal().map(|phase| {
        format!("scale({:.4})", lerp(triangle(phase), 1.0, 1.15))
    });
    let opacity_signal = breath
        .signal()
        .map(|phase| format!("{:.3}", lerp(triangle(phase), 0.6, 0.9)));

    El::new()
        .s(Width::fill())
        .s(Height::fill())
        .update_raw_el(|raw_el| raw_el.style("position", "relative").style("pointer-events", "none"))
        .child(El::new().update_raw_el(move |raw_el| {
            raw_el
                .style("position", "absolute")
                .style("width", "clamp(100px, 18vw, 220px)")
                .style("height", "clamp(100px, 18vw, 220px)")
                .style("border-radius", "50%")
                .style("top", "clamp(8vh, 12vh, 16vh)")
                .style("right", "clamp(11vw, 15vw, 19vw)")
                .style_signal("background", realm_style(MOON_HALO, SUN_HALO))
                .style_signal("transform", transform_signal)
                .style_signal("opacity", opacity_signal)
        }))
        .after_remove(move |_| drop(breath))
}
