//! Non-destructive body capture.
//!
//! # Responsibilities
//! - Buffer a request body and hand the handler a byte-identical replay
//! - Buffer a response body produced downstream before it reaches the
//!   client
//! - Gate JSON parsing on the declared content type
//!
//! # Design Decisions
//! - Capture is a buffered copy, not a stream rewind: the body is
//!   collected into `Bytes` and the request/response is rebuilt over the
//!   same buffer, so consumers see exactly the original byte sequence
//! - No size limit of our own; the runtime's limits apply
//! - A transport failure while collecting is the one error that surfaces,
//!   since the real consumer could not have read the body either

use axum::body::{to_bytes, Body, Bytes};
use axum::extract::Request;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};

const JSON_MIME_TYPE: &str = "application/json";

/// True when the declared content type is JSON (`application/json`,
/// optionally with parameters), ASCII case-insensitive.
pub(crate) fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| {
            value
                .get(..JSON_MIME_TYPE.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(JSON_MIME_TYPE))
        })
}

/// Buffer the request body and rebuild the request over the buffered
/// bytes, so the downstream stage reads the body as if it were never
/// touched. Returns the buffered copy for tracing.
pub(crate) async fn buffer_request(req: Request) -> Result<(Request, Bytes), Response> {
    let (parts, body) = req.into_parts();
    match to_bytes(body, usize::MAX).await {
        Ok(bytes) => {
            let req = Request::from_parts(parts, Body::from(bytes.clone()));
            Ok((req, bytes))
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to read request body");
            Err(StatusCode::BAD_REQUEST.into_response())
        }
    }
}

/// Buffer the response body produced by the downstream stage. The caller
/// inspects the bytes and must rebuild the response over the same buffer
/// with [`replay_response`].
pub(crate) async fn buffer_response(
    res: Response,
) -> Result<(axum::http::response::Parts, Bytes), Response> {
    let (parts, body) = res.into_parts();
    match to_bytes(body, usize::MAX).await {
        Ok(bytes) => Ok((parts, bytes)),
        Err(err) => {
            tracing::error!(error = %err, "failed to read response body");
            Err(StatusCode::INTERNAL_SERVER_ERROR.into_response())
        }
    }
}

/// Forward the buffered bytes to the client, byte for byte.
pub(crate) fn replay_response(parts: axum::http::response::Parts, bytes: Bytes) -> Response {
    Response::from_parts(parts, Body::from(bytes))
}
