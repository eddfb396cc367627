//! Trace sinks.
//!
//! # Responsibilities
//! - Receive emitted entries, one line per entry
//! - Stay safe for uncoordinated concurrent emits across requests
//!
//! # Design Decisions
//! - Sink is a capability injected into the monitor, not ambient state
//! - A failing sink is logged and ignored; it must not abort the request

use std::io::Write;
use std::sync::Mutex;

use crate::trace::entry::TraceEntry;

/// Append-only destination for trace entries.
pub trait TraceSink: Send + Sync {
    fn emit(&self, entry: &TraceEntry);
}

/// Sink that routes entries through the `tracing` facade.
///
/// Lines land wherever the process subscriber sends the
/// `param_monitor` target.
#[derive(Debug, Default)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn emit(&self, entry: &TraceEntry) {
        tracing::info!(target: "param_monitor", "{entry}");
    }
}

/// Line-oriented sink over any writer (stdout, a file, a pipe).
pub struct WriterSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }
}

impl<W: Write + Send> TraceSink for WriterSink<W> {
    fn emit(&self, entry: &TraceEntry) {
        let Ok(mut writer) = self.writer.lock() else {
            return;
        };
        if let Err(err) = writeln!(writer, "{entry}") {
            tracing::warn!(error = %err, "trace sink write failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_writer_sink_writes_one_line_per_entry() {
        let sink = WriterSink::new(Vec::new());
        sink.emit(&TraceEntry::new("request.query.id", Some("7".into())));
        sink.emit(&TraceEntry::new("response.statusCode", Some("200".into())));

        let buffer = sink.writer.into_inner().unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "[ParameterMonitor] request.query.id = 7\n\
             [ParameterMonitor] response.statusCode = 200\n"
        );
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writer_failure_is_swallowed() {
        let sink = WriterSink::new(FailingWriter);
        // Must not panic or propagate.
        sink.emit(&TraceEntry::new("request.route.id", Some("1".into())));
    }
}
