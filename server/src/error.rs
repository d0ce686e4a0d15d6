use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Faults no handler is expected to hit: logged in full server-side,
/// opaque `500` to the client.
#[derive(Debug)]
pub struct InternalError(pub anyhow::Error);

impl IntoResponse for InternalError {
    fn into_response(self) -> Response {
        tracing::error!("{:?}", self.0);
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

impl<E> From<E> for InternalError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
