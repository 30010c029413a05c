//! HTTP front end: a single `GET /` route backed by [`JokeService`].

use crate::core::orchestrator::{JokeService, StageError};
use crate::core::{JokeProvider, NameProvider};
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

impl IntoResponse for StageError {
    fn into_response(self) -> Response {
        tracing::error!(stage = ?self.stage, "Joke request failed: {}", self.source);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            self.stage.client_message(),
        )
            .into_response()
    }
}

/// Logs when a request is dropped before the joke was produced.
///
/// hyper drops the handler future once the client disconnects, which in turn
/// drops (and aborts) whichever upstream call is in flight.
struct InFlight {
    finished: bool,
}

impl InFlight {
    fn start() -> Self {
        Self { finished: false }
    }

    fn finish(mut self) {
        self.finished = true;
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if !self.finished {
            tracing::warn!("Client went away, abandoning upstream calls");
        }
    }
}

async fn get_joke<N, J>(
    State(service): State<Arc<JokeService<N, J>>>,
) -> Result<String, StageError>
where
    N: NameProvider + 'static,
    J: JokeProvider + 'static,
{
    let guard = InFlight::start();
    let outcome = service.tell_joke().await;
    guard.finish();
    outcome
}

/// Request ID middleware - adds unique ID to each request for tracing
async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        uri = %uri,
    );

    let response = next.run(request).instrument(span).await;

    info!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        status = %response.status().as_u16(),
        duration_ms = start.elapsed().as_millis(),
        "Request completed"
    );

    response
}

pub fn router<N, J>(service: JokeService<N, J>) -> Router
where
    N: NameProvider + 'static,
    J: JokeProvider + 'static,
{
    Router::new()
        .route("/", get(get_joke::<N, J>))
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .with_state(Arc::new(service))
}

/// Serves `app` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

/// Resolves on Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully...");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down gracefully...");
        },
    }
}
