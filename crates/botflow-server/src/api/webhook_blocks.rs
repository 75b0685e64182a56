//! GET /api/typebots/{typebot_id}/webhookBlocks

use crate::api::{ApiError, AppState};
use crate::auth::AuthedUser;
use axum::{
    Json,
    extract::{Path, State},
};
use botflow_core::flow::WebhookBlockSummary;
use botflow_core::services::webhook_blocks as webhook_blocks_service;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookBlocksResponse {
    pub webhook_blocks: Vec<WebhookBlockSummary>,
}

pub async fn list_webhook_blocks(
    State(state): State<AppState>,
    AuthedUser(user): AuthedUser,
    Path(typebot_id): Path<String>,
) -> Result<Json<WebhookBlocksResponse>, ApiError> {
    let webhook_blocks =
        webhook_blocks_service::list_webhook_blocks(&state, &user, &typebot_id).await?;
    Ok(Json(WebhookBlocksResponse { webhook_blocks }))
}
