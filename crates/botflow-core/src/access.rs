//! Document access rules.
//!
//! A user can read a typebot when they belong to its workspace or hold any
//! collaborator grant on it; writing needs membership or a write-capable
//! grant. Callers report denied access as "not found" so that probing for
//! document ids leaks nothing.

use crate::models::{CollaborationType, Typebot, Workspace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessLevel {
    Read,
    Write,
}

pub fn can_access(
    user_id: &str,
    typebot: &Typebot,
    workspace: Option<&Workspace>,
    level: AccessLevel,
) -> bool {
    if let Some(workspace) = workspace
        && workspace.members.iter().any(|m| m.user_id == user_id)
    {
        return true;
    }
    typebot.collaborators.iter().any(|collaborator| {
        collaborator.user_id == user_id
            && match level {
                AccessLevel::Read => true,
                AccessLevel::Write => matches!(
                    collaborator.access,
                    CollaborationType::Write | CollaborationType::FullAccess
                ),
            }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Collaborator, Plan, WorkspaceMember, WorkspaceRole};
    use chrono::Utc;

    fn typebot_with_collaborators(collaborators: Vec<Collaborator>) -> Typebot {
        Typebot {
            id: "tb-001".to_string(),
            name: "Test".to_string(),
            workspace_id: "ws-001".to_string(),
            folder_id: None,
            groups: vec![],
            variables: vec![],
            webhooks: vec![],
            collaborators,
            theme: Default::default(),
            settings: Default::default(),
            is_archived: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn workspace_with_member(user_id: &str) -> Workspace {
        Workspace {
            id: "ws-001".to_string(),
            name: "Acme".to_string(),
            plan: Plan::Free,
            members: vec![WorkspaceMember {
                user_id: user_id.to_string(),
                role: WorkspaceRole::Member,
            }],
        }
    }

    #[test]
    fn workspace_member_can_read_and_write() {
        let typebot = typebot_with_collaborators(vec![]);
        let workspace = workspace_with_member("u1");
        assert!(can_access("u1", &typebot, Some(&workspace), AccessLevel::Read));
        assert!(can_access("u1", &typebot, Some(&workspace), AccessLevel::Write));
    }

    #[test]
    fn read_collaborator_cannot_write() {
        let typebot = typebot_with_collaborators(vec![Collaborator {
            user_id: "u2".to_string(),
            access: CollaborationType::Read,
        }]);
        assert!(can_access("u2", &typebot, None, AccessLevel::Read));
        assert!(!can_access("u2", &typebot, None, AccessLevel::Write));
    }

    #[test]
    fn write_collaborator_can_write() {
        let typebot = typebot_with_collaborators(vec![Collaborator {
            user_id: "u2".to_string(),
            access: CollaborationType::Write,
        }]);
        assert!(can_access("u2", &typebot, None, AccessLevel::Write));
    }

    #[test]
    fn stranger_has_no_access() {
        let typebot = typebot_with_collaborators(vec![]);
        let workspace = workspace_with_member("u1");
        assert!(!can_access("u9", &typebot, Some(&workspace), AccessLevel::Read));
        assert!(!can_access("u9", &typebot, None, AccessLevel::Read));
    }
}
