use axum::{
    body::{Body, to_bytes},
    http::{Request, Response},
    middleware::Next,
    response::IntoResponse,
};

/// A 5xx should leave the handler with nothing but a status.
/// If a body with internal details slips through anyway, log it here and
/// strip it before it reaches the client.
pub async fn mw_scrub_5xx(request: Request<Body>, next: Next) -> Response<Body> {
    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        match to_bytes(response.into_body(), usize::MAX).await {
            Ok(content) if !content.is_empty() => tracing::error!("{:?}", content),
            Err(e) => tracing::error!("unable to read 5xx response body :: {:?}", e),
            _ => {}
        }

        return status.into_response();
    }

    response
}
