use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ========== PROFILE ==========
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub user_id: String,
    pub email: String,
    pub name: String,
    pub message: String,
    pub claims: HashMap<String, String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileResponse {
    pub user_id: String,
    pub email: String,
    pub updated_fields: serde_json::Value,
    pub message: String,
}

// ========== ERRORS ==========
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}
