//! Parameter monitoring middleware.
//!
//! # Responsibilities
//! - Trace route values, query parameters, headers, cookies and JSON
//!   bodies flowing through a request, per the configured switches
//! - Trace response headers, status code and JSON body after the
//!   downstream stage completes
//! - Never perturb what the handler or the client observes
//!
//! # Design Decisions
//! - One middleware invocation per request, strictly sequential; the
//!   `Next` continuation is invoked exactly once
//! - Body tracing activates only for `application/json` content
//! - Parse and sink failures are contained here; handler errors are not
//!   caught and propagate unchanged

use std::sync::Arc;

use axum::extract::{FromRequestParts, RawPathParams, Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use serde_json::Value;
use url::form_urlencoded;

use crate::config::TraceOptions;
use crate::http::capture;
use crate::trace::{flatten, TraceEntry, TraceSink};

/// Per-request trace orchestrator.
///
/// Holds the immutable switch set and the injected sink; shared across
/// requests behind an `Arc`.
pub struct ParameterMonitor {
    options: TraceOptions,
    sink: Arc<dyn TraceSink>,
}

impl ParameterMonitor {
    pub fn new(options: TraceOptions, sink: Arc<dyn TraceSink>) -> Self {
        Self { options, sink }
    }

    pub fn options(&self) -> &TraceOptions {
        &self.options
    }

    /// Drive one request through the trace sequence.
    async fn process(&self, req: Request, next: Next) -> Response {
        let (mut parts, body) = req.into_parts();

        // 1. Pre-invocation sources, in fixed order.
        if self.options.route {
            if let Ok(params) = RawPathParams::from_request_parts(&mut parts, &()).await {
                for (name, value) in params.iter() {
                    self.emit(format!("request.route.{name}"), Some(value.to_string()));
                }
            }
        }

        if self.options.query {
            if let Some(query) = parts.uri.query() {
                for (key, value) in form_urlencoded::parse(query.as_bytes()) {
                    self.emit(format!("request.query.{key}"), Some(value.into_owned()));
                }
            }
        }

        if self.options.request_headers {
            self.trace_headers(&parts.headers, "request");
        }

        if self.options.request_cookies {
            for (name, value) in cookie_pairs(&parts.headers) {
                self.emit(format!("request.cookies.{name}"), Some(value));
            }
        }

        let mut req = Request::from_parts(parts, body);

        // 2. Request body, buffered and replayed so the handler reads the
        //    original bytes. Non-JSON bodies are never buffered.
        if self.options.request_body && capture::is_json_content_type(req.headers()) {
            match capture::buffer_request(req).await {
                Ok((rebuilt, bytes)) => {
                    self.trace_body_bytes(&bytes, "request.body");
                    req = rebuilt;
                }
                Err(rejection) => return rejection,
            }
        }

        // 3. Invoke the downstream stage, inside response capture when the
        //    response body is traced.
        let response = if self.options.response_body {
            match capture::buffer_response(next.run(req).await).await {
                Ok((parts, bytes)) => {
                    if capture::is_json_content_type(&parts.headers) {
                        self.trace_body_bytes(&bytes, "response.body");
                    }
                    capture::replay_response(parts, bytes)
                }
                Err(rejection) => rejection,
            }
        } else {
            next.run(req).await
        };

        // 4. Post-invocation sources: headers first, then status.
        if self.options.response_headers {
            self.trace_headers(response.headers(), "response");
        }

        if self.options.response_status {
            self.emit(
                "response.statusCode".to_string(),
                Some(response.status().as_u16().to_string()),
            );
        }

        response
    }

    fn trace_headers(&self, headers: &HeaderMap, scope: &str) {
        for (name, value) in headers.iter() {
            let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
            self.emit(format!("{scope}.headers.{name}"), Some(value));
        }
    }

    fn trace_body_bytes(&self, bytes: &[u8], base_path: &str) {
        if bytes.is_empty() {
            return;
        }
        match serde_json::from_slice::<Value>(bytes) {
            Ok(root) => {
                for entry in flatten(&root, base_path) {
                    self.sink.emit(&entry);
                }
            }
            Err(err) => {
                tracing::debug!(path = base_path, error = %err, "body is not parseable JSON, skipping");
            }
        }
    }

    fn emit(&self, path: String, value: Option<String>) {
        self.sink.emit(&TraceEntry::new(path, value));
    }
}

/// Cookie pairs from every `Cookie` header, in order of appearance.
fn cookie_pairs(headers: &HeaderMap) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for header in headers.get_all(axum::http::header::COOKIE) {
        let Ok(raw) = header.to_str() else { continue };
        for pair in raw.split(';') {
            let pair = pair.trim();
            if pair.is_empty() {
                continue;
            }
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            pairs.push((name.to_string(), value.to_string()));
        }
    }
    pairs
}

/// Middleware entry point, wired with
/// `axum::middleware::from_fn_with_state(monitor, monitor_middleware)`.
pub async fn monitor_middleware(
    State(monitor): State<Arc<ParameterMonitor>>,
    req: Request,
    next: Next,
) -> Response {
    monitor.process(req, next).await
}
