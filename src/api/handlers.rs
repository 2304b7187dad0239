/*!
 * Request handlers for the content API.
 *
 * All read endpoints serve views over the immutable content document; the
 * status endpoints are the only write path and append to the SQLite log.
 */

use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::content::{Hook, Script, ScriptType, VisualStyle};
use crate::store::StatusCheck;

use super::AppState;
use super::error::{ApiError, ApiResult};

/// Payload for creating a status check
#[derive(Debug, Deserialize)]
pub struct StatusCheckCreate {
    /// Caller-supplied client name
    pub client_name: String,
}

/// GET /api/ -- service greeting
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "hookline API" }))
}

/// GET /api/visual-styles -- all visual styles
pub async fn get_visual_styles(State(state): State<AppState>) -> Json<Vec<VisualStyle>> {
    Json(state.query.visual_styles().to_vec())
}

/// GET /api/hooks -- all hooks
pub async fn get_hooks(State(state): State<AppState>) -> Json<Vec<Hook>> {
    Json(state.query.hooks().to_vec())
}

/// GET /api/hooks/{category} -- hooks matching a category slug
///
/// An unknown slug is a miss, not an error: the response is an empty array.
pub async fn get_hooks_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Json<Vec<Hook>> {
    Json(state.query.hooks_by_category(&category))
}

/// GET /api/scripts -- all scripts
pub async fn get_scripts(State(state): State<AppState>) -> Json<Vec<Script>> {
    Json(state.query.scripts().to_vec())
}

/// GET /api/scripts/{script_type} -- scripts with the given type tag
///
/// The type must be one of the closed set; anything else is a 400.
pub async fn get_scripts_by_type(
    State(state): State<AppState>,
    Path(script_type): Path<String>,
) -> ApiResult<Json<Vec<Script>>> {
    let parsed = script_type
        .parse::<ScriptType>()
        .map_err(|_| ApiError::BadRequest(format!("Invalid script type: {}", script_type)))?;

    Ok(Json(state.query.scripts_by_type(parsed)))
}

/// POST /api/status -- record a status check
pub async fn create_status_check(
    State(state): State<AppState>,
    Json(input): Json<StatusCheckCreate>,
) -> ApiResult<Json<StatusCheck>> {
    let check = StatusCheck::new(input.client_name);
    state.status.insert(&check).await?;
    Ok(Json(check))
}

/// GET /api/status -- list recorded status checks
pub async fn list_status_checks(State(state): State<AppState>) -> ApiResult<Json<Vec<StatusCheck>>> {
    let checks = state.status.list().await?;
    Ok(Json(checks))
}
