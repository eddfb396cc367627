//! A single trace observation.

use std::fmt;

/// Placeholder rendered when a traced value is null or absent.
///
/// Distinguishes "no value" from an empty string in the output stream.
pub const NULL_OR_EMPTY: &str = "nullOrEmpty";

/// One (path, value) observation extracted from a request or response.
///
/// The path is a dotted hierarchical key such as `request.body.user.city`
/// or `response.statusCode`. A `None` value means the source held an
/// explicit null.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEntry {
    pub path: String,
    pub value: Option<String>,
}

impl TraceEntry {
    pub fn new(path: impl Into<String>, value: Option<String>) -> Self {
        Self {
            path: path.into(),
            value,
        }
    }
}

/// The wire format other tooling greps against. Do not change.
impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[ParameterMonitor] {} = {}",
            self.path,
            self.value.as_deref().unwrap_or(NULL_OR_EMPTY)
        )
    }
}
