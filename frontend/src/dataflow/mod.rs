//! Dataflow primitives for reactive state management
//!
//! The Actor+Relay architecture: every piece of app state lives in an
//! [`Actor`] whose processing loop is the single place that state changes,
//! fed by [`Relay`] event streams named `{source}_{event}_relay`. [`Atom`]
//! wraps the same machinery for throwaway local UI state.

pub mod actor;
pub mod atom;
pub mod relay;

pub use actor::Actor;
pub use atom::Atom;
pub use relay::{Relay, relay};
