//! GET/POST /api/typebots

use crate::api::{ApiError, AppState};
use crate::auth::AuthedUser;
use axum::{
    Json,
    extract::{Query, State},
};
use botflow_core::models::Typebot;
use botflow_core::services::typebots::{self as typebot_service, CreateTypebotPayload, TypebotListItem};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTypebotsQuery {
    pub workspace_id: Option<String>,
    /// Comma-separated typebot ids to fetch.
    pub typebot_ids: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypebotsResponse {
    pub typebots: Vec<TypebotListItem>,
}

pub async fn list_typebots(
    State(state): State<AppState>,
    AuthedUser(user): AuthedUser,
    Query(query): Query<ListTypebotsQuery>,
) -> Result<Json<TypebotsResponse>, ApiError> {
    let typebots = typebot_service::list_typebots(
        &state,
        &user,
        query.workspace_id.as_deref(),
        query.typebot_ids.as_deref(),
    )
    .await?;
    Ok(Json(TypebotsResponse { typebots }))
}

pub async fn create_typebot(
    State(state): State<AppState>,
    AuthedUser(user): AuthedUser,
    Json(payload): Json<CreateTypebotPayload>,
) -> Result<Json<Typebot>, ApiError> {
    let typebot = typebot_service::create_typebot(&state, &user, payload).await?;
    Ok(Json(typebot))
}
