mod api;
mod error;
mod middleware;
mod span;
mod sys;
mod uptime;

use std::net::SocketAddr;

use axum::{Router, middleware::from_fn, routing::get};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

pub use uptime::{StartTime, format_uptime};

#[derive(Debug)]
pub struct ServerOpts {
    pub port: u16,
}

/// The only shared state: the instant the process came up.
/// Read-only after startup, so handlers never need a lock.
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    pub started_at: StartTime,
}

pub fn server(state: AppState) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(span::span))
        .layer(CorsLayer::permissive())
        .layer(from_fn(middleware::mw_scrub_5xx));

    Router::new()
        .route(api::dashboard::PATH, get(api::dashboard::handler))
        .route(api::health::PATH, get(api::health::handler))
        .route(api::info::PATH, get(api::info::handler))
        .with_state(state)
        .layer(middleware)
}

pub async fn serve(opts: ServerOpts) -> Result<(), ServerError> {
    tracing::info!("{:?}", opts);

    let state = AppState {
        started_at: StartTime::now(),
    };

    let app = server(state).into_make_service();

    let addr = SocketAddr::from(([0, 0, 0, 0], opts.port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

#[derive(thiserror::Error, Debug)]
pub enum ServerError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
}
