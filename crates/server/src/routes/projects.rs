use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use models::{project, validate};

use crate::errors::ApiError;
use crate::state::ServerState;

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<project::Model>>, ApiError> {
    let projects = state.store.projects().await?;
    Ok(Json(projects))
}

/// The id is parsed by hand so a non-numeric segment yields the API's
/// own 400 body and never reaches storage.
pub async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<project::Model>, ApiError> {
    let id: i32 = id.parse().map_err(|_| ApiError::InvalidId("Project"))?;
    match state.store.project(id).await? {
        Some(project) => Ok(Json(project)),
        None => Err(ApiError::NotFound("Project")),
    }
}

pub async fn create(
    State(state): State<ServerState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<project::Model>), ApiError> {
    let new = validate::project(&body)?;
    let created = state.store.create_project(new).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
