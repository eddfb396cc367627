//! Lifecycle management subsystem.
//!
//! # Design Decisions
//! - One broadcast channel coordinates shutdown across tasks
//! - Ctrl-C and a programmatic trigger are equivalent signals

pub mod shutdown;

pub use shutdown::{shutdown_signal, Shutdown};
