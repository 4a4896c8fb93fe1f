// Animation Token System
// Built on MoonZoon's Oscillator/Transitions primitives.

use zoon::*;

// Animation Durations
pub const DURATION_FAST: u32 = 150;
pub const DURATION_NORMAL: u32 = 300;
pub const DURATION_SLOW: u32 = 500;
/// Background gradient cross-fade on realm change.
pub const DURATION_REALM_FADE: u32 = 1000;

pub use zoon::ease;

pub fn transition_fast() -> impl Style<'static> {
    Transitions::new([Transition::all().duration(DURATION_FAST)])
}

pub fn transition_normal() -> impl Style<'static> {
    Transitions::new([Transition::all().duration(DURATION_NORMAL)])
}

pub fn transition_colors() -> impl Style<'static> {
    Transitions::new([
        Transition::property("background-color").duration(DURATION_NORMAL),
        Transition::property("border-color").duration(DURATION_NORMAL),
        Transition::property("color").duration(DURATION_NORMAL),
    ])
}

pub fn transition_opacity() -> impl Style<'static> {
    Transitions::new([Transition::property("opacity").duration(DURATION_NORMAL)])
}

/// Looping sawtooth oscillator, phase 0..1 wrapping each `seconds`.
pub fn looping_oscillator(seconds: f64) -> Oscillator {
    let oscillator = Oscillator::new(Duration::milliseconds((seconds * 1000.0) as i64));
    oscillator.cycle_wrap();
    oscillator
}

/// Fold a wrapping 0..1 phase into a 0..1..0 triangle so breathing
/// animations return to their start without a visible jump.
pub fn triangle(phase: f64) -> f64 {
    if phase < 0.5 { phase * 2.0 } else { 2.0 - phase * 2.0 }
}

/// Remap a 0..1 phase onto `[min, max]`.
pub fn lerp(phase: f64, min: f64, max: f64) -> f64 {
    min + phase * (max - min)
}
