//! HTTP transport.
//!
//! Exposes the resolver as a secret extension: the CI server posts a signed
//! JSON request to `/` and receives the secret, or a 404 carrying the
//! reason it was refused.

pub mod signature;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};
use zeroize::Zeroizing;

use crate::core::domain::Request;
use crate::core::{resolve, Store};
use crate::error::Result;
use self::signature::Signature;

/// Shared state for request handlers.
///
/// The store is a read-only snapshot, so handlers never lock.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn Store>,
    secret: Arc<Zeroizing<String>>,
}

impl AppState {
    /// Create handler state from a store and the shared signing secret.
    pub fn new(store: Arc<dyn Store>, secret: Zeroizing<String>) -> Self {
        Self {
            store,
            secret: Arc::new(secret),
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", post(find_secret))
        .route("/healthz", get(healthz))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Bind to an address and serve until Ctrl-C.
///
/// # Errors
///
/// Returns `Error::Io` if the address cannot be bound or the server fails.
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(address = %addr, "server listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("received shutdown signal");
}

async fn healthz() -> &'static str {
    "OK"
}

async fn find_secret(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let signature = match Signature::from_headers(&headers) {
        Ok(signature) => signature,
        Err(e) => {
            debug!(error = %e, "invalid or missing signature");
            return (StatusCode::BAD_REQUEST, "Invalid or Missing Signature").into_response();
        }
    };

    if let Err(e) = signature.verify(state.secret.as_bytes(), &method, &uri, &headers, &body) {
        warn!(error = %e, key_id = %signature.key_id, "invalid signature");
        return (StatusCode::BAD_REQUEST, "Invalid Signature").into_response();
    }

    let request: Request = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            debug!(error = %e, "cannot decode request body");
            return (StatusCode::BAD_REQUEST, "Invalid Input").into_response();
        }
    };

    match resolve(state.store.as_ref(), &request) {
        Ok(secret) => Json(secret).into_response(),
        Err(e) => {
            debug!(path = %request.path, name = %request.name, error = %e, "cannot find secret");
            (StatusCode::NOT_FOUND, e.to_string()).into_response()
        }
    }
}
