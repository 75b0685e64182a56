//! DELETE /api/typebots/{typebot_id}/results

use crate::api::{ApiError, AppState};
use crate::auth::AuthedUser;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
};
use botflow_core::services::results as results_service;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResultsQuery {
    /// Comma-separated result ids. Omitted or empty deletes every result
    /// under the typebot.
    pub result_ids: Option<String>,
}

pub async fn delete_results(
    State(state): State<AppState>,
    AuthedUser(user): AuthedUser,
    Path(typebot_id): Path<String>,
    Query(query): Query<DeleteResultsQuery>,
) -> Result<StatusCode, ApiError> {
    results_service::delete_results(&state, &user, &typebot_id, query.result_ids.as_deref())
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;
    use botflow_core::AppCore;
    use botflow_core::models::{
        ChatResult, Plan, Typebot, User, Workspace, WorkspaceMember, WorkspaceRole,
    };
    use chrono::Utc;
    use std::sync::Arc;

    fn member() -> User {
        User {
            id: "u1".to_string(),
            email: "jo@acme.test".to_string(),
            name: None,
            image: None,
        }
    }

    async fn create_test_app() -> AppState {
        let core = Arc::new(AppCore::in_memory());
        core.store
            .upsert_workspace(&Workspace {
                id: "ws-1".to_string(),
                name: "Acme".to_string(),
                plan: Plan::Free,
                members: vec![WorkspaceMember {
                    user_id: "u1".to_string(),
                    role: WorkspaceRole::Member,
                }],
            })
            .await
            .unwrap();
        core.store
            .create_typebot(&Typebot {
                id: "tb-1".to_string(),
                name: "Survey".to_string(),
                workspace_id: "ws-1".to_string(),
                folder_id: None,
                groups: vec![],
                variables: vec![],
                webhooks: vec![],
                collaborators: vec![],
                theme: Default::default(),
                settings: Default::default(),
                is_archived: false,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
            .await
            .unwrap();
        for id in ["r1", "r2", "r3"] {
            core.store
                .create_result(&ChatResult {
                    id: id.to_string(),
                    typebot_id: "tb-1".to_string(),
                    created_at: Utc::now(),
                    is_completed: false,
                })
                .await
                .unwrap();
        }
        core
    }

    #[tokio::test]
    async fn test_delete_subset_returns_no_content() {
        let app = create_test_app().await;

        let status = delete_results(
            State(app.clone()),
            AuthedUser(member()),
            Path("tb-1".to_string()),
            Query(DeleteResultsQuery {
                result_ids: Some("r1,r2".to_string()),
            }),
        )
        .await
        .unwrap();

        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(app.store.list_results("tb-1").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_omitted_ids_delete_all() {
        let app = create_test_app().await;

        delete_results(
            State(app.clone()),
            AuthedUser(member()),
            Path("tb-1".to_string()),
            Query(DeleteResultsQuery { result_ids: None }),
        )
        .await
        .unwrap();

        assert!(app.store.list_results("tb-1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_stranger_gets_404_and_nothing_is_deleted() {
        let app = create_test_app().await;
        let stranger = User {
            id: "u9".to_string(),
            email: "x@other.test".to_string(),
            name: None,
            image: None,
        };

        let error = delete_results(
            State(app.clone()),
            AuthedUser(stranger),
            Path("tb-1".to_string()),
            Query(DeleteResultsQuery { result_ids: None }),
        )
        .await
        .unwrap_err();

        assert_eq!(error.into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(app.store.list_results("tb-1").await.unwrap().len(), 3);
    }
}
