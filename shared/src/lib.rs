use serde::{Serialize, Deserialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

// ===== MESSAGE TYPES =====

#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum UpMsg {
    SubmitBooking(BookingRequest),
    SubmitContact(ContactRequest),
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum DownMsg {
    InquiryAccepted { kind: InquiryKind },
    InquiryFailed { kind: InquiryKind, error: String },
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InquiryKind {
    Booking,
    Contact,
}

// ===== REALM =====

/// The site's boolean visual personality: night ocean vs. sunset beach.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Realm {
    Dark,
    Light,
}

impl Realm {
    pub fn toggled(self) -> Self {
        match self {
            Realm::Dark => Realm::Light,
            Realm::Light => Realm::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Realm::Dark => "dark",
            Realm::Light => "light",
        }
    }

    /// Unknown strings resolve to Dark so a corrupted preference can never fail.
    pub fn from_str(value: &str) -> Self {
        match value {
            "light" => Realm::Light,
            _ => Realm::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Realm::Dark)
    }
}

impl Default for Realm {
    fn default() -> Self {
        Realm::Dark
    }
}

/// Startup resolution order: persisted preference, then OS color-scheme
/// preference, then Dark.
pub fn resolve_initial_realm(stored: Option<&str>, os_prefers_dark: Option<bool>) -> Realm {
    match stored {
        Some(value) => Realm::from_str(value),
        None => match os_prefers_dark {
            Some(false) => Realm::Light,
            _ => Realm::Dark,
        },
    }
}

// ===== REALM TRANSITION =====

/// Phase of the flash/fade sequence played once per realm change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    Idle,
    Flashing,
    Settling,
}

/// Lightning burst window at the start of a transition.
pub const FLASH_TOTAL_MS: u32 = 300;
/// Ambient overlay fade after the burst.
pub const SETTLE_MS: u32 = 1200;

pub const fn transition_total_ms() -> u32 {
    FLASH_TOTAL_MS + SETTLE_MS
}

/// One lightning exposure inside the flash burst.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlashExposure {
    pub delay_ms: u32,
    pub duration_ms: u32,
    /// Bolt origin as viewport percentages.
    pub origin_x_pct: f64,
    pub origin_y_pct: f64,
    pub peak_opacity: f64,
}

pub const FLASH_EXPOSURE_COUNT: usize = 3;

/// Jittered exposure layout for one burst. Deterministic in `seed` so a
/// burst renders identically however many times the overlay re-renders.
pub fn flash_exposures(seed: u64) -> Vec<FlashExposure> {
    (0..FLASH_EXPOSURE_COUNT)
        .map(|index| {
            let slot = FLASH_TOTAL_MS / FLASH_EXPOSURE_COUNT as u32;
            let jitter = seeded_unit(index as u64, seed.wrapping_add(0x51C4));
            let duration = 50 + (seeded_unit(index as u64, seed.wrapping_add(0xF1A5)) * 80.0) as u32;
            FlashExposure {
                delay_ms: index as u32 * slot + (jitter * 40.0) as u32,
                duration_ms: duration.min(slot),
                origin_x_pct: seeded_unit(index as u64, seed.wrapping_add(0x0B01)) * 100.0,
                origin_y_pct: seeded_unit(index as u64, seed.wrapping_add(0x0B02)) * 40.0,
                peak_opacity: 0.7 + seeded_unit(index as u64, seed.wrapping_add(0x0B03)) * 0.25,
            }
        })
        .collect()
}

// ===== INQUIRIES =====

/// Booking form payload, proxied by the backend to the hosted form service.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub event_date: String,
    pub event_type: String,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InquiryError {
    MissingField(&'static str),
    InvalidEmail,
}

impl std::fmt::Display for InquiryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InquiryError::MissingField(field) => write!(f, "missing required field: {field}"),
            InquiryError::InvalidEmail => write!(f, "invalid email address"),
        }
    }
}

impl std::error::Error for InquiryError {}

fn require(field: &'static str, value: &str) -> Result<(), InquiryError> {
    if value.trim().is_empty() {
        Err(InquiryError::MissingField(field))
    } else {
        Ok(())
    }
}

/// Matches the browser's native email input check closely enough for the
/// required-field gate; the form service does its own validation.
fn check_email(value: &str) -> Result<(), InquiryError> {
    let trimmed = value.trim();
    let mut parts = trimmed.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    match parts.next() {
        Some(domain) if !local.is_empty() && domain.contains('.') && !domain.ends_with('.') => Ok(()),
        _ => Err(InquiryError::InvalidEmail),
    }
}

impl BookingRequest {
    pub fn validate(&self) -> Result<(), InquiryError> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        check_email(&self.email)?;
        require("event_date", &self.event_date)?;
        require("message", &self.message)?;
        Ok(())
    }

    /// Field list in the order the hosted form expects it.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.trim().to_string()),
            ("email", self.email.trim().to_string()),
            ("event_date", self.event_date.trim().to_string()),
            ("event_type", self.event_type.trim().to_string()),
            ("message", self.message.trim().to_string()),
        ]
    }
}

impl ContactRequest {
    pub fn validate(&self) -> Result<(), InquiryError> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        check_email(&self.email)?;
        require("message", &self.message)?;
        Ok(())
    }

    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.trim().to_string()),
            ("email", self.email.trim().to_string()),
            ("subject", self.subject.trim().to_string()),
            ("message", self.message.trim().to_string()),
        ]
    }
}

// ===== SEEDED VISUAL PARAMETERS =====

/// Stable pseudo-random fraction in `[0, 1)` derived from an element index
/// and a per-effect salt. Ambient effects compute their layout once from
/// this, so re-renders never reshuffle star or shell positions.
pub fn seeded_unit(index: u64, salt: u64) -> f64 {
    let mut hasher = DefaultHasher::new();
    index.hash(&mut hasher);
    salt.hash(&mut hasher);
    (hasher.finish() % 10_000) as f64 / 10_000.0
}

/// Linear remap of `seeded_unit` onto `[min, max)`.
pub fn seeded_range(index: u64, salt: u64, min: f64, max: f64) -> f64 {
    min + seeded_unit(index, salt) * (max - min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn realm_toggle_is_pure_boolean_flip() {
        let mut realm = Realm::Dark;
        for n in 1..=10 {
            realm = realm.toggled();
            let expected = if n % 2 == 0 { Realm::Dark } else { Realm::Light };
            assert_eq!(realm, expected);
        }
    }

    #[test]
    fn realm_string_round_trip() {
        for realm in [Realm::Dark, Realm::Light] {
            assert_eq!(Realm::from_str(realm.as_str()), realm);
        }
        assert_eq!(Realm::from_str("garbage"), Realm::Dark);
    }

    #[test]
    fn realm_serde_matches_storage_format() {
        assert_eq!(serde_json::to_string(&Realm::Dark).unwrap(), "\"dark\"");
        assert_eq!(serde_json::to_string(&Realm::Light).unwrap(), "\"light\"");
        let parsed: Realm = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(parsed, Realm::Light);
    }

    #[test]
    fn initial_realm_prefers_stored_value() {
        assert_eq!(resolve_initial_realm(Some("light"), Some(true)), Realm::Light);
        assert_eq!(resolve_initial_realm(Some("dark"), Some(false)), Realm::Dark);
    }

    #[test]
    fn initial_realm_falls_back_to_os_preference_then_dark() {
        assert_eq!(resolve_initial_realm(None, Some(true)), Realm::Dark);
        assert_eq!(resolve_initial_realm(None, Some(false)), Realm::Light);
        assert_eq!(resolve_initial_realm(None, None), Realm::Dark);
    }

    #[test]
    fn transition_schedule_is_fixed() {
        assert_eq!(transition_total_ms(), FLASH_TOTAL_MS + SETTLE_MS);
        let exposures = flash_exposures(7);
        assert_eq!(exposures.len(), FLASH_EXPOSURE_COUNT);
        for exposure in &exposures {
            assert!(exposure.delay_ms + exposure.duration_ms <= FLASH_TOTAL_MS + 40);
            assert!(exposure.peak_opacity <= 1.0);
        }
    }

    #[test]
    fn flash_exposures_are_deterministic_per_seed() {
        assert_eq!(flash_exposures(42), flash_exposures(42));
        assert_ne!(flash_exposures(1), flash_exposures(2));
    }

    #[test]
    fn booking_validation_requires_core_fields() {
        let mut request = BookingRequest {
            name: "Promoter".into(),
            email: "promoter@club.example".into(),
            event_date: "2026-09-12".into(),
            event_type: "Club Night".into(),
            message: "Headline slot, 2h set".into(),
        };
        assert!(request.validate().is_ok());

        request.email = "not-an-email".into();
        assert_eq!(request.validate(), Err(InquiryError::InvalidEmail));

        request.email = "promoter@club.example".into();
        request.message = "   ".into();
        assert_eq!(request.validate(), Err(InquiryError::MissingField("message")));
    }

    #[test]
    fn contact_validation_allows_empty_subject() {
        let request = ContactRequest {
            name: "Fan".into(),
            email: "fan@wave.example".into(),
            subject: String::new(),
            message: "Loved the Elixr set".into(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn form_fields_are_trimmed_and_ordered() {
        let request = BookingRequest {
            name: "  Promoter ".into(),
            email: " promoter@club.example ".into(),
            event_date: "2026-09-12".into(),
            event_type: "Festival".into(),
            message: " Main stage ".into(),
        };
        let fields = request.form_fields();
        assert_eq!(fields[0], ("name", "Promoter".to_string()));
        assert_eq!(fields[1].1, "promoter@club.example");
        assert_eq!(fields.last().unwrap().1, "Main stage");
    }

    #[test]
    fn seeded_values_are_stable_and_in_range() {
        for index in 0..200 {
            let a = seeded_unit(index, 0xBEAC);
            let b = seeded_unit(index, 0xBEAC);
            assert_eq!(a, b);
            assert!((0.0..1.0).contains(&a));
        }
        let low = seeded_range(3, 1, 2.0, 5.0);
        assert!((2.0..5.0).contains(&low));
    }
}
