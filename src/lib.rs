//! HTTP parameter monitoring middleware for axum services.
//!
//! Sits in the middle of the request pipeline and emits one structured
//! trace line per parameter flowing through a request (route values,
//! query string, headers, cookies, JSON body) and its response (headers,
//! status code, JSON body), without the handlers participating and
//! without perturbing a single byte they read or write.
//!
//! ```text
//! [ParameterMonitor] request.route.id = 42
//! [ParameterMonitor] request.query.verbose = true
//! [ParameterMonitor] request.body.user.address.city = Reykjavik
//! [ParameterMonitor] response.statusCode = 200
//! ```
//!
//! The middleware is wired like any axum stage:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use axum::{middleware, Router};
//! use param_monitor::config::TraceOptions;
//! use param_monitor::http::{monitor_middleware, ParameterMonitor};
//! use param_monitor::trace::TracingSink;
//!
//! let options = TraceOptions::configure(|opts| {
//!     opts.request_body = true;
//!     opts.response_body = true;
//! });
//! let monitor = Arc::new(ParameterMonitor::new(options, Arc::new(TracingSink)));
//!
//! let app: Router = Router::new()
//!     .layer(middleware::from_fn_with_state(monitor, monitor_middleware));
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod trace;

pub use config::{MonitorConfig, TraceOptions};
pub use http::{monitor_middleware, HttpServer, ParameterMonitor};
pub use lifecycle::Shutdown;
pub use trace::{TraceEntry, TraceSink};
