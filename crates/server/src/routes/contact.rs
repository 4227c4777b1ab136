use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use models::validate;

use crate::errors::ApiError;
use crate::state::ServerState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub success: bool,
    pub message_id: i32,
    pub message: &'static str,
}

/// Contact-form submission: validate, persist, acknowledge with the
/// assigned message id.
pub async fn submit(
    State(state): State<ServerState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<ContactResponse>), ApiError> {
    let new = validate::message(&body)?;
    let stored = state.store.create_message(new).await?;
    Ok((
        StatusCode::CREATED,
        Json(ContactResponse {
            success: true,
            message_id: stored.id,
            message: "Your message has been sent successfully.",
        }),
    ))
}
