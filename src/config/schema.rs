//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! monitoring service. All types derive Serde traits for deserialization
//! from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the parameter monitoring service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MonitorConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Logging settings.
    pub logging: LoggingConfig,

    /// Which request/response sources are traced.
    pub trace: TraceOptions,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Whole-request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Subscriber filter directive, overridable via `RUST_LOG`.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "param_monitor=debug,tower_http=info".to_string(),
        }
    }
}

/// Per-source trace switches.
///
/// Safe by default, verbose by opt-in: only route values, the query
/// string, and the response status are traced unless a switch is turned
/// on, since headers and bodies may carry sensitive data.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TraceOptions {
    /// Route variables matched by the router.
    pub route: bool,

    /// Query string parameters.
    pub query: bool,

    /// Request headers.
    pub request_headers: bool,

    /// Request cookies.
    pub request_cookies: bool,

    /// JSON request bodies.
    pub request_body: bool,

    /// JSON response bodies.
    pub response_body: bool,

    /// Response headers.
    pub response_headers: bool,

    /// Response status code.
    pub response_status: bool,
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self {
            route: true,
            query: true,
            request_headers: false,
            request_cookies: false,
            request_body: false,
            response_body: false,
            response_headers: false,
            response_status: true,
        }
    }
}

impl TraceOptions {
    /// Defaults mutated by a setup callback:
    ///
    /// ```
    /// use param_monitor::config::TraceOptions;
    ///
    /// let options = TraceOptions::configure(|opts| {
    ///     opts.request_body = true;
    /// });
    /// assert!(options.request_body && options.route);
    /// ```
    pub fn configure(setup: impl FnOnce(&mut Self)) -> Self {
        let mut options = Self::default();
        setup(&mut options);
        options
    }

    /// Every switch on. Used by the demo app and tests.
    pub fn all() -> Self {
        Self {
            route: true,
            query: true,
            request_headers: true,
            request_cookies: true,
            request_body: true,
            response_body: true,
            response_headers: true,
            response_status: true,
        }
    }
}
