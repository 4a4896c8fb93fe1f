//! SUNAME site entry point.

use std::sync::OnceLock;
use zoon::*;

mod app;
mod background;
mod connection;
mod data;
mod dataflow;
mod header;
mod inquiry;
mod notifications;
mod pages;
mod realm;
mod realm_toggle;
mod router;
mod transition;

/// Keeps the startup task alive.
static MAIN_TASK: OnceLock<TaskHandle> = OnceLock::new();

/// Keeps the app's domains (and their timers) alive for the session.
static APP: OnceLock<app::SunameApp> = OnceLock::new();

pub fn main() {
    let handle = Task::start_droppable(async {
        let app = app::SunameApp::new().await;
        let _ = APP.set(app);
        let app = APP.get().unwrap_throw();

        // Touch the router so route handling starts with the app.
        router::router();

        let root_element = app.root();
        start_app("app", move || root_element);
    });
    let _ = MAIN_TASK.set(handle);
}
