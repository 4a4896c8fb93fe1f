//! General contact page.

use crate::data::biography::BIOGRAPHY;
use crate::inquiry::InquiryForms;
use crate::pages::{external_link, page_hero};
use suname_ui::*;
use zoon::*;

pub fn page(forms: &InquiryForms) -> impl Element + use<> {
    Column::new()
        .s(Width::fill())
        .s(Gap::new().y(SPACING_32))
        .item(page_hero(
            "Contact",
            Some("Management, press, or anything else — reach out."),
        ))
        .item(contact_form(forms))
        .item(contact_emails())
}

fn contact_form(forms: &InquiryForms) -> impl Element + use<> {
    let fields = forms.contact_fields.clone();
    let contact_submitted_relay = forms.contact_submitted_relay.clone();

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
                    .label("Subject")
                    .placeholder("What's this about?")
                    .text_signal(fields.subject.signal())
                    .on_change({
                        let subject = fields.subject.clone();
                        move |value| subject.set_neq(value)
                    })
                    .build(),
            )
            .item(
                textarea()
                    .label("Message")
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
                        if submitting { "Sending...".to_string() } else { "Send message".to_string() }
                    }))
                    .variant(ButtonVariant::Primary)
                    .size(ButtonSize::Large)
                    .disabled_signal(forms.submitting_signal())
                    .on_press(move || contact_submitted_relay.send(()))
                    .build(),
            ),
    )
}

fn contact_emails() -> impl Element {
    card().child(
        Column::new()
            .s(Gap::new().y(SPACING_8))
            .item(h4("Direct lines"))
            .item(
                Row::new()
                    .s(Gap::new().x(SPACING_8))
                    .item(small("Bookings:"))
                    .item(paragraph(BIOGRAPHY.booking_email)),
            )
            .item(
                Row::new()
                    .s(Gap::new().x(SPACING_8))
                    .item(small("Management:"))
                    .item(paragraph(BIOGRAPHY.management_email)),
            )
            .item(external_link("Designer: JimmyDesigns", BIOGRAPHY.designer_link)),
    )
}
