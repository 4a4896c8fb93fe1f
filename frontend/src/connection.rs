//! Backend connection wiring.
//!
//! The moon backend only proxies inquiry submissions, so every `DownMsg`
//! funnels into the inquiry domain's resolution relay.

use crate::dataflow::Relay;
use shared::{DownMsg, UpMsg};
use zoon::*;

pub fn create_connection(inquiry_resolved_relay: Relay<DownMsg>) -> Connection<UpMsg, DownMsg> {
    Connection::new(move |down_msg, _cor_id| {
        inquiry_resolved_relay.send(down_msg);
    })
}
