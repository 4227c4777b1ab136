use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use models::{skill, validate};

use crate::errors::ApiError;
use crate::state::ServerState;

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<skill::Model>>, ApiError> {
    let skills = state.store.skills().await?;
    Ok(Json(skills))
}

pub async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<skill::Model>, ApiError> {
    let id: i32 = id.parse().map_err(|_| ApiError::InvalidId("Skill"))?;
    match state.store.skill(id).await? {
        Some(skill) => Ok(Json(skill)),
        None => Err(ApiError::NotFound("Skill")),
    }
}

pub async fn create(
    State(state): State<ServerState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<skill::Model>), ApiError> {
    let new = validate::skill(&body)?;
    let created = state.store.create_skill(new).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
