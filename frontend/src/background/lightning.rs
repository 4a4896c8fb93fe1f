//! Lightning burst and settle overlays, driven by the transition sequencer.
//!
//! The overlays render purely from sequencer state: exposures mount when a
//! sequence enters Flashing and unmount with the phase, cancelling their
//! timers with them.

use crate::transition::RealmTransition;
use shared::{FlashExposure, SETTLE_MS, TransitionPhase, flash_exposures};
use zoon::*;

pub fn lightning_layer(transition: &RealmTransition) -> impl Element + use<> {
    El::new()
        .s(Width::fill())
        .s(Height::fill())
        .update_raw_el(|raw_el| raw_el.style("pointer-events", "none"))
        .child_signal(transition.state_signal().map(|state| match state.phase {
            TransitionPhase::Flashing => Some(flash_burst(state.sequence).unify()),
            TransitionPhase::Settling => Some(settle_overlay().unify()),
            TransitionPhase::Idle => None,
        }))
}

/// The jittered exposures of one burst, seeded by the sequence number so a
/// re-render inside one burst keeps identical bolt placement.
fn flash_burst(sequence: u64) -> impl Element {
    let exposures = flash_exposures(sequence)
        .into_iter()
        .map(|exposure| exposure_element(exposure).unify())
        .collect::<Vec<_>>();

    Stack::new()
        .s(Width::fill())
        .s(Height::fill())
        .update_raw_el(|raw_el| raw_el.style("position", "relative"))
        .layers(exposures)
}

fn exposure_element(exposure: FlashExposure) -> impl Element {
    let opacity = Mutable::new(0.0_f64);

    let flash_task = Task::start_droppable({
        let opacity = opacity.clone();
        async move {
            Timer::sleep(exposure.delay_ms).await;
            opacity.set(exposure.peak_opacity);
            Timer::sleep(exposure.duration_ms).await;
            opacity.set(0.0);
        }
    });

    let background = format!(
        "radial-gradient(at {:.0}% {:.0}%, rgba(255, 255, 255, 0.95) 5%, transparent 15%), \
         radial-gradient(at {:.0}% {:.0}%, rgba(190, 225, 240, 0.75) 8%, transparent 20%)",
        exposure.origin_x_pct,
        exposure.origin_y_pct,
        100.0 - exposure.origin_x_pct,
        exposure.origin_y_pct * 1.5,
    );

    El::new()
        .s(Width::fill())
        .s(Height::fill())
        .update_raw_el(move |raw_el| {
            raw_el
                .style("position", "absolute")
                .style("inset", "0")
                .style("background", &background)
                .style("mix-blend-mode", "screen")
                .style("transition", "opacity 40ms linear")
                .style_signal("opacity", opacity.signal().map(|value| format!("{value:.3}")))
        })
        .after_remove(move |_| drop(flash_task))
}

/// Dim ambient wash fading out across the settle window.
fn settle_overlay() -> impl Element {
    let opacity = Mutable::new(0.25_f64);

    let fade_task = Task::start_droppable({
        let opacity = opacity.clone();
        async move {
            Timer::sleep(SETTLE_MS / 3).await;
            opacity.set(0.0);
        }
    });

    El::new()
        .s(Width::fill())
        .s(Height::fill())
        .update_raw_el(move |raw_el| {
            raw_el
                .style("position", "absolute")
                .style("inset", "0")
                .style("background-color", "rgba(0, 0, 0, 0.6)")
                .style(
                    "transition",
                    &format!("opacity {}ms ease-out", SETTLE_MS * 2 / 3),
                )
                .style_signal("opacity", opacity.signal().map(|value| format!("{value:.3}")))
        })
        .after_remove(move |_| drop(fade_task))
}
