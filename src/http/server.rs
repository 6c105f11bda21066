//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, timeout, request ID)
//! - Dispatch page requests to the route table
//! - Bind server to listener and stop on shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::{header, Method, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ShellConfig;
use crate::http::api::{get_selection, put_selection, SELECTION_PATH};
use crate::http::request::UuidRequestId;
use crate::observability::metrics;
use crate::routing::RouteTable;
use crate::store::SelectionStore;
use crate::views::{self, RenderContext};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
    pub store: SelectionStore,
}

/// HTTP server hosting the application shell.
pub struct HttpServer {
    router: Router,
    config: ShellConfig,
}

impl HttpServer {
    pub fn new(config: ShellConfig, routes: RouteTable, store: SelectionStore) -> Self {
        let state = AppState {
            routes: Arc::new(routes),
            store,
        };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ShellConfig, state: AppState) -> Router {
        Router::new()
            .route(SELECTION_PATH, get(get_selection).put(put_selection))
            .fallback(page_handler)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
    }

    /// The configured router, for serving or driving directly in tests.
    pub fn app(&self) -> Router {
        self.router.clone()
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Serve until Ctrl+C or `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Resolve the path against the route table and render the matched views.
async fn page_handler(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            [(header::ALLOW, "GET, HEAD")],
        )
            .into_response();
    }

    let route = state.routes.resolve(uri.path());
    metrics::record_navigation(route.name());

    let html = views::render(&RenderContext {
        route: &route,
        routes: &state.routes,
        store: &state.store,
    });

    let status = if route.is_fallback() {
        tracing::debug!(path = %uri.path(), "No page matched, rendering not-found view");
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };

    (status, Html(html)).into_response()
}

/// Wait for Ctrl+C or an explicit shutdown.
async fn shutdown_signal(mut shutdown: broadcast::Receiver<()>) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        _ = ctrl_c => {}
        _ = shutdown.recv() => {}
    }
    tracing::info!("Shutdown signal received");
}
