//! SunameApp - self-contained Actor+Relay application shell.

use zoon::*;

use crate::background::{background_effects, tsunami::TsunamiCycle};
use crate::dataflow::relay;
use crate::header::header;
use crate::inquiry::InquiryForms;
use crate::notifications::Notifications;
use crate::realm::{LocalStoragePreferences, RealmContext};
use crate::realm_toggle::realm_toggle;
use crate::transition::RealmTransition;

/// Every long-lived domain of the site. Dropping the app drops the domains,
/// which cancels all of their pending timers and streams.
pub struct SunameApp {
    /// The authoritative Dark/Light realm and its single toggle entry point.
    pub realm: RealmContext,

    /// Flash/fade sequencer, edge-triggered by realm changes.
    pub transition: RealmTransition,

    /// The independent 25 s / 8 s large-wave cycle.
    pub tsunami: TsunamiCycle,

    /// Transient auto-dismissing banners.
    pub notifications: Notifications,

    /// Booking and contact form state plus the submission pipeline.
    pub forms: InquiryForms,
}

impl SunameApp {
    pub async fn new() -> Self {
        let (realm_changed_relay, realm_changed_stream) = relay();

        let realm = RealmContext::new(LocalStoragePreferences, realm_changed_relay).await;
        let transition = RealmTransition::new(realm_changed_stream);
        let tsunami = TsunamiCycle::new();
        let notifications = Notifications::new();
        let forms = InquiryForms::new(notifications.clone());

        crate::data::seo::inject_structured_data();

        Self {
            realm,
            transition,
            tsunami,
            notifications,
            forms,
        }
    }

    /// Root UI element: backdrop, scrolling content, floating chrome.
    pub fn root(&self) -> impl Element {
        Stack::new()
            .s(Height::screen())
            .s(Width::fill())
            .s(suname_ui::font_sans())
            .s(Background::new().color_signal(suname_ui::realm().map(|realm| {
                match realm {
                    suname_ui::Realm::Light => "rgb(255, 140, 0)",
                    suname_ui::Realm::Dark => "rgb(0, 0, 5)",
                }
            })))
            .layer(background_effects(&self.transition, &self.tsunami))
            .layer(self.content())
            .layer(realm_toggle(&self.realm))
            .layer(self.notifications.container())
    }

    fn content(&self) -> impl Element {
        let forms = self.forms.clone();
        Column::new()
            .s(Width::fill())
            .s(Height::fill())
            .s(Scrollbars::both())
            .item(header())
            .item(
                El::new()
                    .s(Width::fill())
                    .child_signal(
                        crate::router::page_id_signal()
                            .map(move |page_id| crate::pages::page(page_id, &forms)),
                    ),
            )
    }
}
