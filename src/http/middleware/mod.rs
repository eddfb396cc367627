//! Middleware layer.
//!
//! Cross-cutting stages wired around the router with
//! `axum::middleware::from_fn_with_state`; each stage receives the
//! request and a `Next` continuation it invokes exactly once.

pub mod monitor;

pub use monitor::{monitor_middleware, ParameterMonitor};
