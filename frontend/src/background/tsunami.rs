//! The periodic large-wave event.
//!
//! A coarse timer entirely independent of the realm: every 25 s the wave
//! becomes visible and sweeps the viewport for 8 s, then disappears until
//! the next cycle. Dropping the domain cancels the timer.

use super::gradients::{TSUNAMI_DARK, TSUNAMI_LIGHT, realm_style};
use crate::dataflow::Actor;
use zoon::*;

pub const WAVE_INTERVAL_MS: u32 = 25_000;
pub const WAVE_VISIBLE_MS: u32 = 8_000;

#[derive(Clone)]
pub struct TsunamiCycle {
    pub active_actor: Actor<bool>,
}

impl TsunamiCycle {
    pub fn new() -> Self {
        let active_actor = Actor::new(false, async move |state| {
            loop {
                Timer::sleep(WAVE_INTERVAL_MS).await;
                state.set_neq(true);
                Timer::sleep(WAVE_VISIBLE_MS).await;
                state.set_neq(false);
            }
        });
        Self { active_actor }
    }

    pub fn active_signal(&self) -> impl Signal<Item = bool> + use<> {
        self.active_actor.signal()
    }
}

pub fn tsunami_layer(cycle: &TsunamiCycle) -> impl Element + use<> {
    // Resting position is off-screen left; while active the band slides
    // across over the full visible window.
    let transform_signal = cycle
        .active_signal()
        .map(|active| if active { "translateX(110%)" } else { "translateX(-110%)" });
    let transition_signal = cycle.active_signal().map(|active| {
        if active {
            format!("transform {WAVE_VISIBLE_MS}ms linear, opacity 600ms ease-in")
        } else {
            "opacity 600ms ease-out".to_string()
        }
    });
    let opacity_signal = cycle
        .active_signal()
        .map(|active| if active { "0.85" } else { "0" });

    El::new()
        .s(Width::fill())
        .s(Height::fill())
        .update_raw_el(move |raw_el| {
            raw_el.style("position", "relative").style("pointer-events", "none")
        })
        .child(El::new().update_raw_el(move |raw_el| {
            raw_el
                .style("position", "absolute")
                .style("bottom", "clamp(10vh, 14vh, 18vh)")
                .style("left", "0")
                .style("right", "0")
                .style("height", "clamp(8vh, 12vh, 16vh)")
                .style("border-radius", "50% 50% 0 0 / 100% 100% 0 0")
                .style("filter", "blur(1px)")
                .style_signal("background", realm_style(TSUNAMI_DARK, TSUNAMI_LIGHT))
                .style_signal("transform", transform_signal)
                .style_signal("transition", transition_signal)
                .style_signal("opacity", opacity_signal)
        }))
}
