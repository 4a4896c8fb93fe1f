//! Drifting glow particles.
//!
//! One canonical component: particle count and motion are configuration,
//! and positions are memoized through seeding so re-renders never reshuffle
//! the field.

use shared::seeded_range;
use suname_ui::{lerp, looping_oscillator, triangle};
use zoon::*;

const SALT_LEFT: u64 = 0xE1;
const SALT_TOP: u64 = 0xE2;
const SALT_SIZE: u64 = 0xE3;
const SALT_PERIOD: u64 = 0xE4;
const SALT_DELAY: u64 = 0xE5;

const CLOCK_WRAP_SECONDS: f64 = 3600.0;

#[derive(Clone, Copy, Debug)]
pub struct ParticleConfig {
    pub particle_count: usize,
    pub reduced_motion: bool,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            particle_count: 24,
            reduced_motion: false,
        }
    }
}

pub fn particle_field(config: ParticleConfig) -> impl Element {
    let drift_clock = looping_oscillator(CLOCK_WRAP_SECONDS);

    let particles = (0..config.particle_count)
        .map(|index| particle(index as u64, config, &drift_clock).unify())
        .collect::<Vec<_>>();

    Stack::new()
        .s(Width::fill())
        .s(Height::fill())
        .update_raw_el(|raw_el| {
            raw_el.style("position", "relative").style("pointer-events", "none")
        })
        .layers(particles)
        .after_remove(move |_| drop(drift_clock))
}

fn particle(index: u64, config: ParticleConfig, drift_clock: &Oscillator) -> impl Element + use<> {
    let left = seeded_range(index, SALT_LEFT, 0.0, 100.0);
    let top = seeded_range(index, SALT_TOP, 0.0, 100.0);
    let size = seeded_range(index, SALT_SIZE, 2.0, 6.0);
    let period = seeded_range(index, SALT_PERIOD, 8.0, 16.0);
    let delay = seeded_range(index, SALT_DELAY, 0.0, 10.0);
    let reduced_motion = config.reduced_motion;

    let drift_signal = drift_clock.signal().map(move |phase| {
        if reduced_motion {
            return "translateY(0)".to_string();
        }
        let seconds = phase * CLOCK_WRAP_SECONDS;
        let folded = triangle(((seconds + delay) / period) % 1.0);
        format!("translateY({:.1}px)", lerp(folded, 0.0, -18.0))
    });
    let opacity_signal = drift_clock.signal().map(move |phase| {
        if reduced_motion {
            return "0.3".to_string();
        }
        let seconds = phase * CLOCK_WRAP_SECONDS;
        let folded = triangle(((seconds + delay) / period) % 1.0);
        format!("{:.3}", lerp(folded, 0.15, 0.5))
    });

    El::new().update_raw_el(move |raw_el| {
        raw_el
            .style("position", "absolute")
            .style("width", &format!("{size:.1}px"))
            .style("height", &format!("{size:.1}px"))
            .style("border-radius", "50%")
            .style("left", &format!("{left:.1}%"))
            .style("top", &format!("{top:.1}%"))
            .style("background", "oklch(70% 0.19 295 / 0.8)")
            .style("filter", "blur(1px)")
            .style_signal("transform", drift_signal)
            .style_signal("opacity", opacity_signal)
    })
}
