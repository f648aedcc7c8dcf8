use lambda_http::{http::StatusCode, Body, Response};
use serde::Serialize;

use crate::error::ProfileError;
use crate::types::ErrorResponse;

const ALLOW_HEADERS: &str =
    "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token";
const ALLOW_METHODS: &str = "GET,PUT,OPTIONS";

/// Serialize `body` and attach the fixed header set.
///
/// Every response leaves through here, error paths included.
pub fn json<T: Serialize>(status: StatusCode, body: &T) -> Result<Response<Body>, ProfileError> {
    let response = Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Headers", ALLOW_HEADERS)
        .header("Access-Control-Allow-Methods", ALLOW_METHODS)
        .body(serde_json::to_string(body)?.into())?;
    Ok(response)
}

pub fn error(status: StatusCode, message: &str) -> Result<Response<Body>, ProfileError> {
    json(
        status,
        &ErrorResponse {
            error: message.to_string(),
            request_id: None,
        },
    )
}

/// Generic 500 body. Fault detail stays in the log, keyed by `request_id`;
/// the caller only sees the correlation id.
pub fn internal_error(request_id: &str) -> Result<Response<Body>, ProfileError> {
    json(
        StatusCode::INTERNAL_SERVER_ERROR,
        &ErrorResponse {
            error: "Internal server error".to_string(),
            request_id: Some(request_id.to_string()),
        },
    )
}
