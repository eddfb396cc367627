//! Demo application for the parameter monitoring middleware.
//!
//! Hosts a small in-memory CRUD resource behind the monitor and prints
//! every trace line to stdout, where the wire format is greppable:
//!
//! ```text
//! param-monitor --trace-all
//! curl -s 'localhost:8080/api/items?count=3'
//! # [ParameterMonitor] request.query.count = 3
//! # [ParameterMonitor] response.statusCode = 200
//! ```

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use param_monitor::config::loader::load_config;
use param_monitor::config::{MonitorConfig, TraceOptions};
use param_monitor::http::HttpServer;
use param_monitor::lifecycle::Shutdown;
use param_monitor::observability::init_logging;
use param_monitor::trace::WriterSink;

#[derive(Debug, Parser)]
#[command(name = "param-monitor", about = "Parameter monitoring demo server")]
struct Args {
    /// Path to a TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured bind address.
    #[arg(long)]
    bind: Option<String>,

    /// Enable every trace switch, like the original test app.
    #[arg(long)]
    trace_all: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => MonitorConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }
    if args.trace_all {
        config.trace = TraceOptions::all();
    }

    init_logging(&config.logging);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let shutdown = Shutdown::new();

    let sink = Arc::new(WriterSink::new(io::stdout()));
    let server = HttpServer::new(config, sink);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
