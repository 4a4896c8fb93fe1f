//! Ambient background effects: the animated seaside scene behind every page.
//!
//! Each layer is an independent, self-scheduling loop. Layers read the realm
//! signal live for their colors but never reset their own animation phase on
//! a realm change; the only discontinuity is the lightning flash owned by
//! the transition sequencer.

pub mod birds;
pub mod celestial;
pub mod gradients;
pub mod lightning;
pub mod particles;
pub mod shoreline;
pub mod starfield;
pub mod tsunami;

use crate::transition::RealmTransition;
use zoon::*;

pub fn background_effects(
    transition: &RealmTransition,
    tsunami: &tsunami::TsunamiCycle,
) -> impl Element + use<> {
    Stack::new()
        .s(Width::fill())
        .s(Height::fill())
        .layer(gradients::sky_layer())
        .layer(gradients::haze_layer())
        .layer(celestial::halo())
        .layer(celestial::celestial_body())
        .layer(starfield::starfield_layer())
        .layer(birds::birds_layer(transition))
        .layer(particles::particle_field(particles::ParticleConfig::default()))
        .layer(shoreline::ocean_layer())
        .layer(shoreline::shore_wave_layers())
        .layer(shoreline::sand_layer())
        .layer(shoreline::beach_details_layer())
        .layer(tsunami::tsunami_layer(tsunami))
        .layer(lightning::lightning_layer(transition))
}
