use axum::{extract::State, response::Html};
use axum_macros::debug_handler;

use crate::{
    AppState,
    sys::{Snapshot, mb},
    uptime::format_uptime,
};

pub const PATH: &str = "/";

/// Fixed deployment region shown on the dashboard.
const REGION: &str = "us-east-1";

const TEMPLATE: &str = include_str!("dashboard.html");

/// Fill the embedded template with the values read at render time.
pub fn render(uptime_secs: u64, snapshot: &Snapshot) -> String {
    TEMPLATE
        .replace("{{uptime}}", &format_uptime(uptime_secs))
        .replace("{{hostname}}", &snapshot.hostname)
        .replace("{{free_mb}}", &mb(snapshot.free_memory).to_string())
        .replace("{{region}}", REGION)
}

#[debug_handler]
#[tracing::instrument(skip(state))]
pub async fn handler(State(state): State<AppState>) -> Html<String> {
    Html(render(
        state.started_at.elapsed_secs(),
        &Snapshot::capture(),
    ))
}
