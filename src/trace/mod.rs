//! Parameter tracing subsystem.
//!
//! # Data Flow
//! ```text
//! Request/response data (middleware)
//!     → flatten.rs (nested JSON → dotted-path scalars)
//!     → entry.rs (one (path, value) observation)
//!     → sink.rs (append-only destination, one line per entry)
//! ```
//!
//! # Design Decisions
//! - Entries are emitted, never retained; the subsystem holds no state
//! - The sink is injected at construction, no process-global writer
//! - Sink failures are isolated; they never abort the request

pub mod entry;
pub mod flatten;
pub mod sink;

pub use entry::TraceEntry;
pub use flatten::flatten;
pub use sink::{TraceSink, TracingSink, WriterSink};
