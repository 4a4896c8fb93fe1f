//! Realm domain: the one authoritative Dark/Light value.
//!
//! Every consumer reads the realm through `suname_ui::realm()`; every
//! mutation goes through [`RealmContext::realm_toggle_requested_relay`].
//! The context persists each accepted toggle and republishes the change to
//! the transition sequencer.

use crate::dataflow::{Actor, Relay, relay};
use futures::StreamExt;
use shared::{Realm, resolve_initial_realm};
use zoon::*;

const STORAGE_KEY: &str = "suname-realm";

/// Persistence boundary for the visitor's last-chosen realm. Injectable so
/// tests can run against an in-memory fake.
pub trait RealmPreferences: Send + Sync + 'static {
    fn load(&self) -> Realm;
    fn save(&self, realm: Realm);
}

/// Browser-backed preferences: local storage first, then the OS
/// `prefers-color-scheme` query. Reads and writes never fail the caller.
pub struct LocalStoragePreferences;

impl RealmPreferences for LocalStoragePreferences {
    fn load(&self) -> Realm {
        let stored = local_storage()
            .get::<String>(STORAGE_KEY)
            .and_then(|result| result.ok());
        resolve_initial_realm(stored.as_deref(), os_prefers_dark())
    }

    fn save(&self, realm: Realm) {
        // Fire-and-forget; a full or blocked storage is not worth a banner.
        let _ = local_storage().insert(STORAGE_KEY, realm.as_str());
    }
}

fn os_prefers_dark() -> Option<bool> {
    let media_query = web_sys::window()?
        .match_media("(prefers-color-scheme: dark)")
        .ok()??;
    Some(media_query.matches())
}

fn to_ui_realm(realm: Realm) -> suname_ui::Realm {
    match realm {
        Realm::Dark => suname_ui::Realm::Dark,
        Realm::Light => suname_ui::Realm::Light,
    }
}

/// Self-contained realm domain.
#[derive(Clone)]
pub struct RealmContext {
    pub realm_actor: Actor<Realm>,

    /// The single toggle entry point, fed by the realm switch in the corner.
    pub realm_toggle_requested_relay: Relay,
}

impl RealmContext {
    /// Resolves the initial realm from preferences, seeds the token-level
    /// realm signal, and starts the toggle-processing loop.
    ///
    /// `realm_changed_relay` receives one event per accepted toggle; the
    /// transition sequencer consumes the paired stream.
    pub async fn new(
        preferences: impl RealmPreferences,
        realm_changed_relay: Relay<Realm>,
    ) -> Self {
        let initial_realm = preferences.load();
        suname_ui::init_realm(Some(to_ui_realm(initial_realm)), None);

        let (realm_toggle_requested_relay, mut toggle_stream) = relay();

        let realm_actor = Actor::new(initial_realm, async move |state| {
            let mut current_realm = initial_realm;
            while let Some(()) = toggle_stream.next().await {
                current_realm = current_realm.toggled();
                state.set(current_realm);
                preferences.save(current_realm);
                suname_ui::set_realm_without_callback(to_ui_realm(current_realm));
                realm_changed_relay.send(current_realm);
            }
        });

        Self {
            realm_actor,
            realm_toggle_requested_relay,
        }
    }

    pub fn realm_signal(&self) -> impl Signal<Item = Realm> + use<> {
        self.realm_actor.signal()
    }
}
