//! HTTP surface of the in-memory todo service.
//!
//! # Overview
//! Routes `/api/v1/todos` CRUD plus `/health` onto a shared `TodoStore`.
//! Every response is JSON and carries permissive CORS headers.
//!
//! # Design
//! - `AppState` is cloned into every handler; clones share one store.
//! - Handlers validate the path id and body themselves so that malformed
//!   input always yields `400 {"error": ...}` rather than axum's defaults.
//! - `router` takes its state explicitly so tests can run isolated stores.

pub mod config;
pub mod cors;
pub mod error;
pub mod handlers;
pub mod responses;
pub mod telemetry;

use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tokio::{net::TcpListener, signal};
use todo_core::TodoStore;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::DEFAULT_SERVICE_NAME;

#[derive(Debug, Clone)]
pub struct AppState {
    pub store: TodoStore,
    pub service_name: Arc<str>,
}

impl AppState {
    pub fn new(store: TodoStore, service_name: impl Into<Arc<str>>) -> Self {
        Self {
            store,
            service_name: service_name.into(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(TodoStore::new(), DEFAULT_SERVICE_NAME)
    }
}

/// Router over a fresh, empty store.
pub fn app() -> Router {
    router(AppState::default())
}

pub fn router(state: AppState) -> Router {
    let v1 = Router::new()
        .route(
            "/todos",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route(
            "/todos/{id}",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        );

    Router::new()
        .nest("/api/v1", v1)
        .route("/health", get(handlers::health))
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(middleware::from_fn(cors::cors))
        .layer(TraceLayer::new_for_http())
}

/// Serves `state` on `listener` until Ctrl-C or SIGTERM.
pub async fn run(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutting down");
}
