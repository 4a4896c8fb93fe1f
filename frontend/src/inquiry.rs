//! Inquiry domain: booking and contact form state plus submission flow.
//!
//! Field drafts live in Atoms so inputs stay controlled. A submission is
//! validated locally, handed to the backend proxy as an `UpMsg`, and
//! resolved by exactly one banner notification. Success clears the form;
//! failure leaves the visitor's draft untouched.

use crate::dataflow::{Actor, Atom, Relay, relay};
use crate::notifications::{NotificationKind, Notifications};
use futures::{StreamExt, select};
use shared::{BookingRequest, ContactRequest, DownMsg, InquiryKind, UpMsg};
use std::sync::Arc;
use zoon::*;

const SENT_MESSAGE: &str = "Your message has been sent";
const FAILED_MESSAGE: &str = "Something went wrong";

/// Controlled drafts for the booking form.
#[derive(Clone, Default)]
pub struct BookingFields {
    pub name: Atom<String>,
    pub email: Atom<String>,
    pub event_date: Atom<String>,
    pub event_type: Atom<String>,
    pub message: Atom<String>,
}

impl BookingFields {
    fn to_request(&self) -> BookingRequest {
        BookingRequest {
            name: self.name.get_cloned(),
            email: self.email.get_cloned(),
            event_date: self.event_date.get_cloned(),
            event_type: self.event_type.get_cloned(),
            message: self.message.get_cloned(),
        }
    }

    fn clear(&self) {
        self.name.set(String::new());
        self.email.set(String::new());
        self.event_date.set(String::new());
        self.event_type.set(String::new());
        self.message.set(String::new());
    }
}

/// Controlled drafts for the contact form.
#[derive(Clone, Default)]
pub struct ContactFields {
    pub name: Atom<String>,
    pub email: Atom<String>,
    pub subject: Atom<String>,
    pub message: Atom<String>,
}

impl ContactFields {
    fn to_request(&self) -> ContactRequest {
        ContactRequest {
            name: self.name.get_cloned(),
            email: self.email.get_cloned(),
            subject: self.subject.get_cloned(),
            message: self.message.get_cloned(),
        }
    }

    fn clear(&self) {
        self.name.set(String::new());
        self.email.set(String::new());
        self.subject.set(String::new());
        self.message.set(String::new());
    }
}

#[derive(Clone)]
pub struct InquiryForms {
    pub booking_fields: BookingFields,
    pub contact_fields: ContactFields,
    pub submitting: Atom<bool>,

    pub booking_submitted_relay: Relay,
    pub contact_submitted_relay: Relay,

    /// Backend resolutions, fed by the connection layer.
    pub inquiry_resolved_relay: Relay<DownMsg>,

    #[allow(dead_code)] // keeps the submission loop alive for the app's lifetime
    submission_actor: Actor<()>,
    #[allow(dead_code)] // keeps the transport loop alive for the app's lifetime
    transport_task: Arc<TaskHandle>,
}

impl InquiryForms {
    pub fn new(notifications: Notifications) -> Self {
        let booking_fields = BookingFields::default();
        let contact_fields = ContactFields::default();
        let submitting = Atom::new(false);

        let (booking_submitted_relay, mut booking_stream) = relay();
        let (contact_submitted_relay, mut contact_stream) = relay();
        let (inquiry_resolved_relay, mut resolved_stream) = relay();
        let (up_msg_queued_relay, mut up_msg_stream) = relay::<UpMsg>();

        // The Connection stays inside this one task; a transport-level
        // failure resolves a submission the same way a rejected proxy
        // call does.
        let transport_task = Arc::new(Task::start_droppable({
            let submitting = submitting.clone();
            let notifications = notifications.clone();
            let connection = crate::connection::create_connection(inquiry_resolved_relay.clone());
            async move {
                while let Some(up_msg) = up_msg_stream.next().await {
                    if connection.send_up_msg(up_msg).await.is_err() {
                        submitting.set(false);
                        notifications.show(NotificationKind::Error, FAILED_MESSAGE);
                    }
                }
            }
        }));

        let submission_actor = Actor::new((), {
            let booking_fields = booking_fields.clone();
            let contact_fields = contact_fields.clone();
            let submitting = submitting.clone();
            let notifications = notifications.clone();

            async move |_state| {
                let queue = move |up_msg: UpMsg| up_msg_queued_relay.send(up_msg);
                loop {
                    select! {
                        event = booking_stream.next() => {
                            let Some(()) = event else { break };
                            let request = booking_fields.to_request();
                            if request.validate().is_err() {
                                notifications.show(NotificationKind::Error, FAILED_MESSAGE);
                                continue;
                            }
                            submitting.set(true);
                            queue(UpMsg::SubmitBooking(request));
                        }
                        event = contact_stream.next() => {
                            let Some(()) = event else { break };
                            let request = contact_fields.to_request();
                            if request.validate().is_err() {
                                notifications.show(NotificationKind::Error, FAILED_MESSAGE);
                                continue;
                            }
                            submitting.set(true);
                            queue(UpMsg::SubmitContact(request));
                        }
                        resolution = resolved_stream.next() => {
                            let Some(down_msg) = resolution else { break };
                            submitting.set(false);
                            match down_msg {
                                DownMsg::InquiryAccepted { kind } => {
                                    notifications.show(NotificationKind::Success, SENT_MESSAGE);
                                    match kind {
                                        InquiryKind::Booking => booking_fields.clear(),
                                        InquiryKind::Contact => contact_fields.clear(),
                                    }
                                }
                                DownMsg::InquiryFailed { .. } => {
                                    notifications.show(NotificationKind::Error, FAILED_MESSAGE);
                                }
                            }
                        }
                    }
                }
            }
        });

        Self {
            booking_fields,
            contact_fields,
            submitting,
            booking_submitted_relay,
            contact_submitted_relay,
            inquiry_resolved_relay,
            submission_actor,
            transport_task,
        }
    }

    pub fn submitting_signal(&self) -> impl Signal<Item = bool> + use<> {
        self.submitting.signal()
    }
}
