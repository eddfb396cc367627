//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via the `tracing` facade
//! - Trace entry emission is a separate concern (see [`crate::trace`]);
//!   this module only owns the process-wide subscriber

pub mod logging;

pub use logging::init_logging;
