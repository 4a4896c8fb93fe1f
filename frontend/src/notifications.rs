//! Transient banner notifications.
//!
//! One banner at a time, auto-dismissed after a fixed delay. A banner
//! arriving while another is visible replaces it and restarts the timer.

use crate::dataflow::{Actor, Relay, relay};
use futures::{FutureExt, StreamExt, select};
use suname_ui::*;
use zoon::*;

pub const BANNER_AUTO_DISMISS_MS: u32 = 3000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BannerNotification {
    pub message: String,
    pub kind: NotificationKind,
}

#[derive(Clone)]
pub struct Notifications {
    pub banner_actor: Actor<Option<BannerNotification>>,
    banner_shown_relay: Relay<BannerNotification>,
}

impl Notifications {
    pub fn new() -> Self {
        let (banner_shown_relay, mut banner_stream) = relay();

        let banner_actor = Actor::new(None, async move |state| {
            while let Some(banner) = banner_stream.next().await {
                let mut banner = banner;
                'showing: loop {
                    state.set(Some(banner.clone()));
                    select! {
                        _ = Timer::sleep(BANNER_AUTO_DISMISS_MS).fuse() => {
                            state.set(None);
                            break 'showing;
                        }
                        next = banner_stream.next() => match next {
                            Some(next_banner) => {
                                banner = next_banner;
                                continue 'showing;
                            }
                            None => {
                                state.set(None);
                                break 'showing;
                            }
                        }
                    }
                }
            }
        });

        Self {
            banner_actor,
            banner_shown_relay,
        }
    }

    /// The one entry point for showing a banner; keeps the relay
    /// single-sourced however many domains report outcomes.
    pub fn show(&self, kind: NotificationKind, message: impl Into<String>) {
        self.banner_shown_relay.send(BannerNotification {
            message: message.into(),
            kind,
        });
    }

    /// Fixed overlay rendering the current banner, if any.
    pub fn container(&self) -> impl Element + use<> {
        El::new()
            .s(Align::new().top().center_x())
            .s(Padding::new().top(SPACING_24))
            .update_raw_el(|raw_el| {
                raw_el
                    .style("position", "fixed")
                    .style("top", "0")
                    .style("left", "0")
                    .style("right", "0")
                    .style("pointer-events", "none")
                    .style("z-index", "1000")
            })
            .child_signal(
                self.banner_actor
                    .signal()
                    .map(|banner| banner.map(banner_element)),
            )
    }
}

fn banner_element(banner: BannerNotification) -> impl Element {
    let is_success = banner.kind == NotificationKind::Success;
    Row::new()
        .s(Gap::new().x(SPACING_8))
        .s(Padding::new().x(SPACING_24).y(SPACING_12))
        .s(Background::new().color_signal(if is_success {
            success_background().boxed()
        } else {
            error_background().boxed()
        }))
        .s(Borders::all_signal(
            if is_success {
                success_border().boxed()
            } else {
                error_border().boxed()
            }
            .map(|color| Border::new().width(1).color(color)),
        ))
        .s(RoundedCorners::all(CORNER_RADIUS_MAX))
        .s(Shadows::with_signal(shadow_panel()))
        .item(
            El::new()
                .s(Font::new()
                    .size(FONT_SIZE_16)
                    .weight(FontWeight::Number(FONT_WEIGHT_5))
                    .color_signal(text_primary()))
                .child(Text::new(banner.message)),
        )
}
