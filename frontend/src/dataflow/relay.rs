//! Event streaming Relay built on unbounded channels

use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};
use std::sync::{Arc, OnceLock};

/// Type-safe event stream from UI components to Actors.
///
/// Relays follow the `{source}_{event}_relay` naming pattern:
/// `realm_toggle_requested_relay`, `booking_submitted_relay`, ...
#[derive(Clone, Debug)]
pub struct Relay<T = ()>
where
    T: Clone + Send + Sync + 'static,
{
    sender: UnboundedSender<T>,
    #[cfg(debug_assertions)]
    emit_location: Arc<OnceLock<&'static std::panic::Location<'static>>>,
}

impl<T> Relay<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new() -> (Self, UnboundedReceiver<T>) {
        let (sender, receiver) = unbounded();
        (
            Relay {
                sender,
                #[cfg(debug_assertions)]
                emit_location: Arc::new(OnceLock::new()),
            },
            receiver,
        )
    }

    /// Send an event through the relay. Events are silently discarded when
    /// the receiver is gone; an orphaned decorative event is not an error.
    ///
    /// Debug builds enforce the single-source constraint: one relay, one
    /// call site.
    #[track_caller]
    pub fn send(&self, value: T) {
        #[cfg(debug_assertions)]
        {
            let caller = std::panic::Location::caller();
            if let Err(previous) = self.emit_location.set(caller) {
                assert!(
                    previous == caller,
                    "relay sent from two locations: first {previous}, now {caller}",
                );
            }
        }
        let _ = self.sender.unbounded_send(value);
    }

    /// Send without the single-source bookkeeping. Internal plumbing for
    /// Atom, whose setter is legitimately called from many places.
    pub(crate) fn send_unchecked(&self, value: T) {
        let _ = self.sender.unbounded_send(value);
    }
}

impl<T> Default for Relay<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// A disconnected relay that discards every event. Placeholder wiring
    /// for components whose events nothing consumes yet.
    fn default() -> Self {
        let (relay, _receiver) = Self::new();
        relay
    }
}

/// Channel-style constructor: `let (toggled_relay, mut toggled_stream) = relay();`
pub fn relay<T>() -> (Relay<T>, UnboundedReceiver<T>)
where
    T: Clone + Send + Sync + 'static,
{
    Relay::new()
}
