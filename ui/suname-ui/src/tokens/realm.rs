// Realm management: the single authoritative Dark/Light value every
// component subscribes to.

use zoon::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Realm {
    Dark,
    Light,
}

// Custom persistence function type
type RealmPersistenceFn = Option<Box<dyn Fn(Realm) + Send + Sync>>;

static REALM: Lazy<Mutable<Realm>> = Lazy::new(|| {
    Mutable::new(Realm::Dark) // initialized properly via init_realm
});

static CUSTOM_PERSISTENCE: Lazy<Mutable<RealmPersistenceFn>> = Lazy::new(|| Mutable::new(None));

const STORAGE_KEY: &str = "suname-realm";

/// Initialize the realm system with optional custom persistence.
/// If custom persistence is provided, localStorage is not touched.
pub fn init_realm(initial_realm: Option<Realm>, custom_persistence: RealmPersistenceFn) {
    CUSTOM_PERSISTENCE.set(custom_persistence);

    let realm_to_use = if let Some(realm) = initial_realm {
        realm
    } else if CUSTOM_PERSISTENCE.lock_ref().is_some() {
        Realm::Dark
    } else {
        let stored_realm = local_storage()
            .get(STORAGE_KEY)
            .unwrap_or(Ok(String::new()))
            .unwrap_or_default();

        match stored_realm.as_str() {
            "light" => Realm::Light,
            _ => Realm::Dark,
        }
    };

    REALM.set(realm_to_use);
}

/// Current realm as a signal for reactive updates.
pub fn realm() -> impl Signal<Item = Realm> {
    REALM.signal()
}

/// Set the realm and persist it using the configured method.
pub fn set_realm(new_realm: Realm) {
    REALM.set(new_realm);

    if let Some(ref persistence_fn) = CUSTOM_PERSISTENCE.lock_ref().as_ref() {
        persistence_fn(new_realm);
    } else {
        let realm_str = match new_realm {
            Realm::Light => "light",
            Realm::Dark => "dark",
        };
        let _ = local_storage().insert(STORAGE_KEY, realm_str);
    }
}

/// Current realm value (non-reactive).
pub fn current_realm() -> Realm {
    REALM.get()
}

/// Toggle between dark and light realms.
pub fn toggle_realm() {
    let new_realm = match current_realm() {
        Realm::Light => Realm::Dark,
        Realm::Dark => Realm::Light,
    };
    set_realm(new_realm);
}

/// Set the realm without triggering the persistence callback.
/// Used when syncing from an external source to prevent circular updates.
pub fn set_realm_without_callback(new_realm: Realm) {
    REALM.set(new_realm);
}
