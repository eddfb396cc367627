//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router for the demo CRUD resource
//! - Wire up middleware (parameter monitor, timeout, request ID, trace)
//! - Bind the server to a listener and serve with graceful shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::{middleware, Router};
use dashmap::DashMap;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::config::MonitorConfig;
use crate::http::handlers::{
    create_item, delete_item, get_item, list_items, update_item, Item,
};
use crate::http::middleware::{monitor_middleware, ParameterMonitor};
use crate::lifecycle::shutdown_signal;
use crate::trace::TraceSink;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DashMap<Uuid, Item>>,
}

/// HTTP server hosting the demo resource behind the parameter monitor.
pub struct HttpServer {
    router: Router,
    config: MonitorConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and trace
    /// sink.
    pub fn new(config: MonitorConfig, sink: Arc<dyn TraceSink>) -> Self {
        let monitor = Arc::new(ParameterMonitor::new(config.trace.clone(), sink));
        let router = Self::build_router(&config, monitor);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// The monitor sits closest to the handlers (route params are
    /// resolved by then); the ambient stack wraps it with `TraceLayer`
    /// outermost.
    fn build_router(config: &MonitorConfig, monitor: Arc<ParameterMonitor>) -> Router {
        let state = AppState {
            store: Arc::new(DashMap::new()),
        };

        Router::new()
            .route("/api/items", get(list_items).post(create_item))
            .route(
                "/api/items/{id}",
                get(get_item).put(update_item).delete(delete_item),
            )
            .with_state(state)
            .layer(middleware::from_fn_with_state(monitor, monitor_middleware))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    ))),
            )
    }

    /// Run the server, accepting connections on the given listener.
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

    /// Get a reference to the config.
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }
}
