//! HTTP subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, layer stack)
//!     → middleware/monitor.rs (pre-invocation tracing)
//!     → capture.rs (body buffering and replay)
//!     → handlers.rs (demo CRUD resource)
//!     → middleware/monitor.rs (post-invocation tracing)
//!     → Send to client
//! ```

pub mod capture;
pub mod handlers;
pub mod middleware;
pub mod server;

pub use middleware::{monitor_middleware, ParameterMonitor};
pub use server::HttpServer;
