use aws_lambda_events::apigw::ApiGatewayRequestAuthorizer;
use lambda_http::{Request, RequestExt};
use std::collections::HashMap;

const DEFAULT_USER_ID: &str = "unknown";
const DEFAULT_EMAIL: &str = "unknown";
const DEFAULT_NAME: &str = "Unknown User";

/// Identity established upstream by the API Gateway authorizer.
///
/// The gateway has already validated the token before this Lambda runs, so
/// the claims carried here are trusted as-is. Handlers take this type rather
/// than a raw claims map so that the trust boundary is visible in their
/// signatures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedIdentity {
    pub user_id: String,
    pub email: String,
    pub name: String,
    /// Full claims mapping, verbatim.
    pub claims: HashMap<String, String>,
}

impl VerifiedIdentity {
    /// Extract the authorizer claims from the request context and resolve
    /// the well-known claim names.
    pub fn from_request(event: &Request) -> Self {
        Self::from_claims(authorizer_claims(event))
    }

    pub fn from_claims(claims: HashMap<String, String>) -> Self {
        let user_id = claim_or(&claims, "sub", DEFAULT_USER_ID);
        let email = claim_or(&claims, "email", DEFAULT_EMAIL);
        let name = claim_or(&claims, "name", DEFAULT_NAME);
        Self {
            user_id,
            email,
            name,
            claims,
        }
    }
}

fn claim_or(claims: &HashMap<String, String>, name: &str, fallback: &str) -> String {
    claims
        .get(name)
        .cloned()
        .unwrap_or_else(|| fallback.to_string())
}

/// Pull the claims mapping out of the gateway request context.
///
/// HTTP APIs (v2) with a JWT authorizer put the claims on `authorizer.jwt`;
/// REST APIs (v1) with a Cognito authorizer nest a JSON object under the
/// authorizer's `claims` key. A request with neither yields an empty map.
fn authorizer_claims(event: &Request) -> HashMap<String, String> {
    let authorizer = match event
        .request_context_ref()
        .and_then(|context| context.authorizer())
    {
        Some(authorizer) => authorizer,
        None => return HashMap::new(),
    };

    if let Some(jwt) = authorizer.jwt.as_ref() {
        return jwt.claims.clone();
    }

    rest_claims(authorizer)
}

fn rest_claims(authorizer: &ApiGatewayRequestAuthorizer) -> HashMap<String, String> {
    authorizer
        .fields
        .get("claims")
        .and_then(|value| value.as_object())
        .map(|object| {
            object
                .iter()
                .filter_map(|(name, value)| {
                    value.as_str().map(|s| (name.clone(), s.to_string()))
                })
                .collect()
        })
        .unwrap_or_default()
}
