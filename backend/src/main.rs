use moon::*;
use shared::{BookingRequest, ContactRequest, DownMsg, InquiryKind, UpMsg};

// ===== CENTRALIZED DEBUG FLAGS =====
const DEBUG_BACKEND: bool = false; // Backend request/response debugging
const DEBUG_PROXY: bool = false; // Form-service proxy debugging

// Debug macro for easy toggling
macro_rules! debug_log {
    ($flag:expr, $($arg:tt)*) => {
        if $flag {
            println!($($arg)*);
        }
    };
}

// Hosted form endpoints, one per inquiry kind.
const BOOKING_FORM_ENDPOINT: &str = "https://formspree.io/f/xpwrwpyj";
const CONTACT_FORM_ENDPOINT: &str = "https://formspree.io/f/mnnvnpby";

async fn frontend() -> Frontend {
    Frontend::new()
        .title("SUNAME - Electronic Music Artist & DJ")
        .append_to_head(
            r#"<meta name="description" content="Official website of SUNAME - Electronic music artist and DJ from Florida. Experience the SUNAME WAVE movement.">"#,
        )
        .append_to_head(r#"<meta name="theme-color" content="#8B5CF6">"#)
}

async fn up_msg_handler(req: UpMsgRequest<UpMsg>) {
    let (session_id, cor_id) = (req.session_id, req.cor_id);

    match req.up_msg {
        UpMsg::SubmitBooking(request) => {
            debug_log!(DEBUG_BACKEND, "submit booking from {}", request.email);
            let down_msg = submit_booking(request).await;
            send_down_msg(down_msg, session_id, cor_id).await;
        }
        UpMsg::SubmitContact(request) => {
            debug_log!(DEBUG_BACKEND, "submit contact from {}", request.email);
            let down_msg = submit_contact(request).await;
            send_down_msg(down_msg, session_id, cor_id).await;
        }
    }
}

async fn submit_booking(request: BookingRequest) -> DownMsg {
    if let Err(error) = request.validate() {
        return DownMsg::InquiryFailed {
            kind: InquiryKind::Booking,
            error: error.to_string(),
        };
    }
    forward_to_form_service(BOOKING_FORM_ENDPOINT, InquiryKind::Booking, request.form_fields()).await
}

async fn submit_contact(request: ContactRequest) -> DownMsg {
    if let Err(error) = request.validate() {
        return DownMsg::InquiryFailed {
            kind: InquiryKind::Contact,
            error: error.to_string(),
        };
    }
    forward_to_form_service(CONTACT_FORM_ENDPOINT, InquiryKind::Contact, request.form_fields()).await
}

/// One form-encoded POST, no retries. Any 2xx is success; everything else,
/// including transport errors, resolves to a failure the frontend surfaces
/// as a single banner.
async fn forward_to_form_service(
    endpoint: &str,
    kind: InquiryKind,
    fields: Vec<(&'static str, String)>,
) -> DownMsg {
    let client = reqwest::Client::new();
    let response = client
        .post(endpoint)
        .header("Accept", "application/json")
        .form(&fields)
        .send()
        .await;

    match response {
        Ok(response) if response.status().is_success() => {
            debug_log!(DEBUG_PROXY, "form service accepted {kind:?}");
            DownMsg::InquiryAccepted { kind }
        }
        Ok(response) => {
            let status = response.status();
            debug_log!(DEBUG_PROXY, "form service rejected {kind:?}: {status}");
            DownMsg::InquiryFailed {
                kind,
                error: format!("form service responded with {status}"),
            }
        }
        Err(error) => {
            debug_log!(DEBUG_PROXY, "form service unreachable: {error}");
            DownMsg::InquiryFailed {
                kind,
                error: "form service unreachable".to_string(),
            }
        }
    }
}

async fn send_down_msg(msg: DownMsg, session_id: SessionId, cor_id: CorId) {
    if let Some(session) = sessions::by_session_id().wait_for(session_id).await {
        session.send_down_msg(&msg, cor_id).await;
    } else {
        // Session not found - likely disconnected
    }
}

#[moon::main]
async fn main() -> std::io::Result<()> {
    start(frontend, up_msg_handler, |_error| {}).await
}
