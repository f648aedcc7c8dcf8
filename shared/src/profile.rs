use lambda_http::{http::StatusCode, Body, Response};

use crate::error::ProfileError;
use crate::identity::VerifiedIdentity;
use crate::response;
use crate::types::{ProfileResponse, UpdateProfileResponse};

const PROFILE_RETRIEVED: &str = "Profile retrieved successfully";
const PROFILE_UPDATED: &str = "Profile updated successfully";

/// Return the caller's profile, synthesized from the authorizer claims.
pub fn get_profile(identity: &VerifiedIdentity) -> Result<Response<Body>, ProfileError> {
    let profile = ProfileResponse {
        user_id: identity.user_id.clone(),
        email: identity.email.clone(),
        name: identity.name.clone(),
        message: PROFILE_RETRIEVED.to_string(),
        claims: identity.claims.clone(),
    };

    response::json(StatusCode::OK, &profile)
}

/// Echo the submitted field set back to the caller.
///
/// Nothing is persisted: there is no profile store behind this function, so
/// the "update" is a structural echo of whatever JSON the caller sent. An
/// absent body is treated as the empty object.
pub fn update_profile(
    identity: &VerifiedIdentity,
    body: &Body,
) -> Result<Response<Body>, ProfileError> {
    let raw = match body {
        Body::Text(text) => text.as_str(),
        Body::Binary(bytes) => std::str::from_utf8(bytes).unwrap_or(""),
        Body::Empty => "{}",
    };

    let updated_fields: serde_json::Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!("Rejecting profile update, body is not valid JSON: {}", err);
            return response::error(StatusCode::BAD_REQUEST, "Invalid JSON in request body");
        }
    };

    let updated = UpdateProfileResponse {
        user_id: identity.user_id.clone(),
        email: identity.email.clone(),
        updated_fields,
        message: PROFILE_UPDATED.to_string(),
    };

    response::json(StatusCode::OK, &updated)
}
