use lambda_http::{
    http::{Method, StatusCode},
    Body, Error, Request, RequestExt, Response,
};
use profile_shared::error::ProfileError;
use profile_shared::identity::VerifiedIdentity;
use profile_shared::{profile, response};
use uuid::Uuid;

/// Main Lambda handler - dispatches on HTTP method and owns the single
/// recovery boundary for unexpected faults.
pub(crate) async fn function_handler(event: Request) -> Result<Response<Body>, Error> {
    tracing::info!("Profile Lambda invoked - Method: {}", event.method());

    match handle(&event) {
        Ok(response) => Ok(response),
        Err(err) => {
            let request_id = correlation_id(&event);
            tracing::error!("Error processing request {}: {}", request_id, err);
            Ok(response::internal_error(&request_id)?)
        }
    }
}

fn handle(event: &Request) -> Result<Response<Body>, ProfileError> {
    let identity = VerifiedIdentity::from_request(event);

    match event.method() {
        &Method::GET => profile::get_profile(&identity),
        &Method::PUT => profile::update_profile(&identity, event.body()),
        // CORS preflight terminates at the gateway; OPTIONS lands here with
        // every other unsupported method.
        other => response::error(
            StatusCode::METHOD_NOT_ALLOWED,
            &format!("Method {} not allowed", other),
        ),
    }
}

/// Correlation id for the 500 path: the Lambda request id when the runtime
/// provides one, a fresh UUID otherwise (local invocations, tests).
fn correlation_id(event: &Request) -> String {
    let context = event.lambda_context();
    if context.request_id.is_empty() {
        Uuid::new_v4().to_string()
    } else {
        context.request_id
    }
}
