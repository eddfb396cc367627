//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → MonitorConfig (validated, immutable)
//!     → shared with the server and middleware
//! ```
//!
//! # Design Decisions
//! - Config is immutable once the server starts; trace switches never
//!   change mid-request
//! - All fields have defaults so a minimal (or absent) config works
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::{ListenerConfig, LoggingConfig, MonitorConfig, TimeoutConfig, TraceOptions};
