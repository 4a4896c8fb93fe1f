//! Realm transition sequencer.
//!
//! Edge-triggered on realm changes: each accepted toggle plays exactly one
//! Flashing → Settling → Idle sequence with fixed timing. A toggle landing
//! mid-sequence coalesces: the running sequence is cancelled and restarted,
//! so at most one sequence is ever active.

use crate::dataflow::Actor;
use futures::channel::mpsc::UnboundedReceiver;
use futures::{FutureExt, StreamExt, select};
use shared::{FLASH_TOTAL_MS, Realm, SETTLE_MS, TransitionPhase};
use zoon::*;

/// Sequencer state exposed to the overlay views. `sequence` counts started
/// sequences and seeds the jitter of that sequence's lightning exposures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionState {
    pub phase: TransitionPhase,
    pub sequence: u64,
}

impl TransitionState {
    fn idle() -> Self {
        Self {
            phase: TransitionPhase::Idle,
            sequence: 0,
        }
    }
}

#[derive(Clone)]
pub struct RealmTransition {
    pub state_actor: Actor<TransitionState>,
}

impl RealmTransition {
    pub fn new(mut realm_changed_stream: UnboundedReceiver<Realm>) -> Self {
        let state_actor = Actor::new(TransitionState::idle(), async move |state| {
            let mut sequence: u64 = 0;
            'waiting: while realm_changed_stream.next().await.is_some() {
                'sequence: loop {
                    sequence += 1;
                    state.set(TransitionState {
                        phase: TransitionPhase::Flashing,
                        sequence,
                    });
                    select! {
                        _ = Timer::sleep(FLASH_TOTAL_MS).fuse() => {}
                        change = realm_changed_stream.next() => {
                            if change.is_some() {
                                continue 'sequence;
                            }
                            break 'waiting;
                        }
                    }

                    state.set(TransitionState {
                        phase: TransitionPhase::Settling,
                        sequence,
                    });
                    select! {
                        _ = Timer::sleep(SETTLE_MS).fuse() => {}
                        change = realm_changed_stream.next() => {
                            if change.is_some() {
                                continue 'sequence;
                            }
                            break 'waiting;
                        }
                    }

                    state.set(TransitionState {
                        phase: TransitionPhase::Idle,
                        sequence,
                    });
                    break 'sequence;
                }
            }
        });

        Self { state_actor }
    }

    pub fn state_signal(&self) -> impl Signal<Item = TransitionState> + use<> {
        self.state_actor.signal()
    }

    pub fn phase_signal(&self) -> impl Signal<Item = TransitionPhase> + use<> {
        self.state_actor.signal().map(|state| state.phase).dedupe()
    }

    /// True outside a running sequence. Light-realm birds mount only while
    /// this holds, so they never appear mid-flash.
    pub fn settled_signal(&self) -> impl Signal<Item = bool> + use<> {
        self.phase_signal()
            .map(|phase| phase == TransitionPhase::Idle)
            .dedupe()
    }
}
