use axum::{Json, response::IntoResponse};
use axum_macros::debug_handler;
use serde::Serialize;
use time::{OffsetDateTime, format_description::well_known::Iso8601};

use crate::error::InternalError;

pub const PATH: &str = "/health";

#[derive(Debug, Serialize)]
pub struct ResponseBody {
    pub status: &'static str,
    pub timestamp: String,
}

#[debug_handler]
#[tracing::instrument(ret)]
pub async fn handler() -> Result<ResponseBody, InternalError> {
    let timestamp = OffsetDateTime::now_utc().format(&Iso8601::DATE_TIME_OFFSET)?;

    Ok(ResponseBody {
        status: "healthy",
        timestamp,
    })
}

impl IntoResponse for ResponseBody {
    fn into_response(self) -> axum::response::Response {
        Json(self).into_response()
    }
}
