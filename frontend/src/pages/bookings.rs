//! Booking inquiry page: the form submits through the backend proxy.

use crate::data::biography::BIOGRAPHY;
use crate::inquiry::InquiryForms;
use crate::pages::page_hero;
use suname_ui::*;
use zoon::*;

pub fn page(forms: &InquiryForms) -> impl Element + use<> {
    Column::new()
        .s(Width::fill())
        .s(Gap::new().y(SPACING_32))
        .item(page_hero(
            "Bookings",
            Some("Bring the SUNAME WAVE to your club, festival, or private event."),
        ))
        .item(booking_form(forms))
        .item(small(BIOGRAPHY.motto))
}

fn booking_form(forms: &InquiryForms) -> impl Element + use<> {
    let fields = forms.booking_fields.clone();
    let booking_submitted_relay = forms.booking_submitted_relay.clone();

    card().child(
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_20))
            .item(
                input()
                    .label("Name")
                    .placeholder("Your name")
                    .required(true)
                    .text_signal(fields.name.signal())
                    .on_change({
                        let name = fields.name.clone();
                        move |value| name.set_neq(value)
                    })
                    .build(),
            )
            .item(
                input()
                    .label("Email")
                    .placeholder("you@example.com")
                    .input_type(InputTypeKind::Email)
                    .required(true)
                    .text_signal(fields.email.signal())
                    .on_change({
                        let email = fields.email.clone();
                        move |value| email.set_neq(value)
                    })
                    .build(),
            )
            .item(
                input()
                    .label("Event date")
                    .placeholder("2026-09-12")
                    .required(true)
                    .text_signal(fields.event_date.signal())
                    .on_change({
                        let event_date = fields.event_date.clone();
                        move |value| event_date.set_neq(value)
                    })
                    .build(),
            )
            .item(
                input()
                    .label("Event type")
                    .placeholder("Club night, festival, private event...")
                    .text_signal(fields.event_type.signal())
                    .on_change({
                        let event_type = fields.event_type.clone();
                        move |value| event_type.set_neq(value)
                    })
                    .build(),
            )
            .item(
                textarea()
                    .label("Message")
                    .placeholder("Venue, set length, anything else we should know")
                    .required(true)
                    .text_signal(fields.message.signal())
                    .on_change({
                        let message = fields.message.clone();
                        move |value| message.set_neq(value)
                    })
                    .build(),
            )
            .item(
                button()
                    .label_signal(forms.submitting_signal().map(|submitting| {
                        if submitting { "Sending...".to_string() } else { "Send booking request".to_string() }
                    }))
                    .variant(ButtonVariant::Primary)
                    .size(ButtonSize::Large)
                    .disabled_signal(forms.submitting_signal())
                    .on_press(move || booking_submitted_relay.send(()))
                    .build(),
            )
            .item(small("Booking requests go straight to the SUNAME team.")),
    )
}
