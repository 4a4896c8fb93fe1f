//! Local UI state Atom helper
//!
//! Atom wraps Actor+Relay for simple local component state: input drafts,
//! hover flags, dialog visibility. Domain state belongs in a domain Actor,
//! not here.

use crate::dataflow::{Actor, Relay, relay};
use futures::StreamExt;
use zoon::Signal;

#[derive(Clone, Debug)]
enum AtomUpdate<T> {
    Set(T),
    SetNeq(T),
}

#[derive(Clone, Debug)]
pub struct Atom<T>
where
    T: Clone + Send + Sync + 'static,
{
    actor: Actor<T>,
    setter: Relay<AtomUpdate<T>>,
}

impl<T> Atom<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(initial: T) -> Self
    where
        T: PartialEq,
    {
        let (setter, mut setter_stream) = relay();

        let actor = Actor::new(initial, async move |state| {
            while let Some(update) = setter_stream.next().await {
                match update {
                    AtomUpdate::Set(new_value) => state.set(new_value),
                    AtomUpdate::SetNeq(new_value) => state.set_neq(new_value),
                }
            }
        });

        Self { actor, setter }
    }

    pub fn set(&self, value: T) {
        self.setter.send_unchecked(AtomUpdate::Set(value));
    }

    /// Update only when the value actually differs, avoiding pointless
    /// signal emissions.
    pub fn set_neq(&self, value: T)
    where
        T: PartialEq,
    {
        self.setter.send_unchecked(AtomUpdate::SetNeq(value));
    }

    pub fn signal(&self) -> impl Signal<Item = T> + use<T> {
        self.actor.signal()
    }

    /// Current value, for event handlers only.
    pub fn get_cloned(&self) -> T {
        self.actor.get_cloned()
    }
}

impl<T> Default for Atom<T>
where
    T: Clone + Send + Sync + Default + PartialEq + 'static,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use futures::StreamExt;
    use zoon::SignalExt;

    #[tokio::test]
    async fn atom_set_and_signal() {
        let atom = Atom::new(42);

        let initial_value = atom.signal().to_stream().next().await.unwrap();
        assert_eq!(initial_value, 42);

        atom.set(100);
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        let updated_value = atom.signal().to_stream().next().await.unwrap();
        assert_eq!(updated_value, 100);
    }

    #[tokio::test]
    async fn atom_default_values() {
        let default_flag: Atom<bool> = Atom::default();
        let default_draft: Atom<String> = Atom::default();

        let flag = default_flag.signal().to_stream().next().await.unwrap();
        let draft = default_draft.signal().to_stream().next().await.unwrap();

        assert!(!flag);
        assert_eq!(draft, "");
    }
}
