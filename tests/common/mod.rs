//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use param_monitor::config::MonitorConfig;
use param_monitor::http::HttpServer;
use param_monitor::lifecycle::Shutdown;
use param_monitor::trace::{TraceEntry, TraceSink};
use tokio::net::TcpListener;

/// Sink that records every emitted line for assertions.
#[derive(Default)]
pub struct CollectorSink {
    lines: Mutex<Vec<String>>,
}

impl CollectorSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    /// Lines whose path starts with the given prefix, in emission order.
    #[allow(dead_code)]
    pub fn lines_with_prefix(&self, prefix: &str) -> Vec<String> {
        let full = format!("[ParameterMonitor] {prefix}");
        self.lines()
            .into_iter()
            .filter(|line| line.starts_with(&full))
            .collect()
    }

    #[allow(dead_code)]
    pub fn clear(&self) {
        self.lines.lock().unwrap().clear();
    }
}

impl TraceSink for CollectorSink {
    fn emit(&self, entry: &TraceEntry) {
        self.lines.lock().unwrap().push(entry.to_string());
    }
}

/// Start the demo server on an ephemeral port.
#[allow(dead_code)]
pub async fn start_demo_server(
    config: MonitorConfig,
    sink: Arc<CollectorSink>,
) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let server = HttpServer::new(config, sink);
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (addr, shutdown)
}

/// Serve an arbitrary router on an ephemeral port.
#[allow(dead_code)]
pub async fn start_router(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    addr
}
