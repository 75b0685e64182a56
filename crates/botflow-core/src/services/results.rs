//! Bulk result deletion.

use crate::AppCore;
use crate::access::AccessLevel;
use crate::error::Result;
use crate::models::{ResultFilter, User};
use crate::services::{parse_id_list, typebots};
use tracing::info;

/// Delete results under a typebot the user can write to. `result_ids` is the
/// raw comma-separated query input; when it carries no meaningful ids, every
/// result under the typebot goes away.
pub async fn delete_results(
    core: &AppCore,
    user: &User,
    typebot_id: &str,
    result_ids: Option<&str>,
) -> Result<u64> {
    let typebot =
        typebots::get_accessible_typebot(core, user, typebot_id, AccessLevel::Write).await?;

    let filter = ResultFilter::new(typebot.id.as_str(), parse_id_list(result_ids));
    let deleted = core.store.delete_results(&filter).await?;
    info!(typebot_id = %typebot.id, deleted, "Deleted results");
    Ok(deleted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::{
        ChatResult, CollaborationType, Collaborator, Plan, Typebot, Workspace, WorkspaceMember,
        WorkspaceRole,
    };
    use chrono::Utc;

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            email: format!("{id}@acme.test"),
            name: None,
            image: None,
        }
    }

    async fn seeded_core() -> AppCore {
        let core = AppCore::in_memory();
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
                collaborators: vec![Collaborator {
                    user_id: "u-reader".to_string(),
                    access: CollaborationType::Read,
                }],
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
    async fn deletes_explicit_subset() {
        let core = seeded_core().await;
        let deleted = delete_results(&core, &user("u1"), "tb-1", Some("r1,r2"))
            .await
            .unwrap();
        assert_eq!(deleted, 2);

        let remaining = core.store.list_results("tb-1").await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, "r3");
    }

    #[tokio::test]
    async fn empty_id_list_deletes_everything() {
        let core = seeded_core().await;
        let deleted = delete_results(&core, &user("u1"), "tb-1", Some("")).await.unwrap();
        assert_eq!(deleted, 3);
        assert!(core.store.list_results("tb-1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn read_only_collaborator_cannot_delete() {
        let core = seeded_core().await;
        let result = delete_results(&core, &user("u-reader"), "tb-1", None).await;
        assert!(matches!(result, Err(Error::NotFound(_))));
        assert_eq!(core.store.list_results("tb-1").await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn unknown_typebot_is_not_found() {
        let core = seeded_core().await;
        let result = delete_results(&core, &user("u1"), "tb-missing", None).await;
        assert!(matches!(result, Err(Error::NotFound(_))));
    }
}
