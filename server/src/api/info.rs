use axum::{Json, extract::State, response::IntoResponse};
use axum_macros::debug_handler;
use serde::Serialize;

use crate::{
    AppState,
    sys::{Snapshot, fmt_mb},
};

pub const PATH: &str = "/api/info";

pub const APP_NAME: &str = "hoststat";

#[derive(Debug, Serialize)]
pub struct ResponseBody {
    pub app: &'static str,
    pub deployed: bool,
    pub uptime: u64,
    pub hostname: String,
    pub platform: &'static str,
    pub memory: MemoryInfo,
}

#[derive(Debug, Serialize)]
pub struct MemoryInfo {
    pub total: String,
    pub free: String,
}

impl ResponseBody {
    pub fn capture(uptime: u64) -> Self {
        let snapshot = Snapshot::capture();

        Self {
            app: APP_NAME,
            deployed: true,
            uptime,
            hostname: snapshot.hostname,
            platform: snapshot.platform,
            memory: MemoryInfo {
                total: fmt_mb(snapshot.total_memory),
                free: fmt_mb(snapshot.free_memory),
            },
        }
    }
}

#[debug_handler]
#[tracing::instrument(skip(state), ret)]
pub async fn handler(State(state): State<AppState>) -> ResponseBody {
    ResponseBody::capture(state.started_at.elapsed_secs())
}

impl IntoResponse for ResponseBody {
    fn into_response(self) -> axum::response::Response {
        Json(self).into_response()
    }
}
