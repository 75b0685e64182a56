//! Typebot listing and creation, plus the shared "fetch with access check"
//! helper the other procedures build on.

use crate::AppCore;
use crate::access::{self, AccessLevel};
use crate::error::{Error, Result};
use crate::models::{
    Avatar, Block, ChatTheme, Collaborator, GeneralSettings, Group, Plan, Settings, Theme, Typebot,
    User, Variable, Webhook, Workspace,
};
use crate::services::parse_id_list;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fetch a typebot the user may access at the given level.
///
/// A missing document and a denied one both come back as NotFound so the
/// response never confirms whether an id exists.
pub async fn get_accessible_typebot(
    core: &AppCore,
    user: &User,
    typebot_id: &str,
    level: AccessLevel,
) -> Result<Typebot> {
    let Some(typebot) = core.store.get_typebot(typebot_id).await? else {
        return Err(Error::typebot_not_found());
    };
    let workspace = core.store.get_workspace(&typebot.workspace_id).await?;
    if !access::can_access(&user.id, &typebot, workspace.as_ref(), level) {
        return Err(Error::typebot_not_found());
    }
    Ok(typebot)
}

/// Listing shape: the dashboard needs names and graph contents, not the full
/// document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypebotListItem {
    pub id: String,
    pub name: String,
    pub groups: Vec<Group>,
    pub variables: Vec<Variable>,
}

impl From<Typebot> for TypebotListItem {
    fn from(typebot: Typebot) -> Self {
        Self {
            id: typebot.id,
            name: typebot.name,
            groups: typebot.groups,
            variables: typebot.variables,
        }
    }
}

/// List the requested typebots the user can read, newest first. Archived
/// documents and documents the user has no grant on are dropped without
/// comment.
pub async fn list_typebots(
    core: &AppCore,
    user: &User,
    workspace_id: Option<&str>,
    typebot_ids: Option<&str>,
) -> Result<Vec<TypebotListItem>> {
    if workspace_id.is_none_or(|id| id.trim().is_empty()) {
        return Err(Error::BadRequest("workspaceId is required".to_string()));
    }

    let ids = parse_id_list(typebot_ids);
    let candidates = core.store.list_typebots(ids.as_deref()).await?;

    let mut workspaces: HashMap<String, Option<Workspace>> = HashMap::new();
    let mut visible = Vec::new();
    for typebot in candidates {
        if typebot.is_archived {
            continue;
        }
        let workspace = match workspaces.get(&typebot.workspace_id) {
            Some(cached) => cached.clone(),
            None => {
                let fetched = core.store.get_workspace(&typebot.workspace_id).await?;
                workspaces.insert(typebot.workspace_id.clone(), fetched.clone());
                fetched
            }
        };
        if access::can_access(&user.id, &typebot, workspace.as_ref(), AccessLevel::Read) {
            visible.push(typebot);
        }
    }

    visible.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(visible.into_iter().map(TypebotListItem::from).collect())
}

/// Creation input: either a full document (carries `groups`) or a bare seed
/// from the dashboard. An explicit union instead of probing the payload for
/// properties at runtime.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CreateTypebotPayload {
    Complete(Box<CompleteTypebot>),
    Seed(TypebotSeed),
}

impl CreateTypebotPayload {
    pub fn workspace_id(&self) -> &str {
        match self {
            CreateTypebotPayload::Complete(doc) => &doc.workspace_id,
            CreateTypebotPayload::Seed(seed) => &seed.workspace_id,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteTypebot {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub workspace_id: String,
    pub groups: Vec<Group>,
    #[serde(default)]
    pub folder_id: Option<String>,
    #[serde(default)]
    pub variables: Vec<Variable>,
    #[serde(default)]
    pub webhooks: Vec<Webhook>,
    #[serde(default)]
    pub collaborators: Vec<Collaborator>,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub settings: Settings,
    /// Deprecated reference still sent by old clients; accepted here and
    /// dropped by the converter.
    #[serde(default)]
    pub published_typebot_id: Option<String>,
}

impl CompleteTypebot {
    fn into_typebot(self) -> Typebot {
        let now = Utc::now();
        Typebot {
            id: self.id.unwrap_or_else(new_typebot_id),
            name: self.name,
            workspace_id: self.workspace_id,
            folder_id: self.folder_id,
            groups: self.groups,
            variables: self.variables,
            webhooks: self.webhooks,
            collaborators: self.collaborators,
            theme: self.theme,
            settings: self.settings,
            is_archived: false,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypebotSeed {
    #[serde(default = "default_typebot_name")]
    pub name: String,
    pub workspace_id: String,
    #[serde(default)]
    pub folder_id: Option<String>,
}

fn default_typebot_name() -> String {
    "My typebot".to_string()
}

fn new_typebot_id() -> String {
    format!("tb_{}", uuid::Uuid::new_v4())
}

/// Expand a seed into a full document: one start group, the creator's avatar
/// as host avatar, branding forced on for free-plan workspaces.
pub fn parse_new_typebot(
    seed: TypebotSeed,
    owner_avatar_url: Option<String>,
    is_branding_enabled: bool,
) -> Typebot {
    let now = Utc::now();
    Typebot {
        id: new_typebot_id(),
        name: seed.name,
        workspace_id: seed.workspace_id,
        folder_id: seed.folder_id,
        groups: vec![Group {
            id: format!("g_{}", uuid::Uuid::new_v4()),
            title: "Start".to_string(),
            blocks: vec![Block::Start {
                id: format!("b_{}", uuid::Uuid::new_v4()),
                label: "Start".to_string(),
            }],
        }],
        variables: vec![],
        webhooks: vec![],
        collaborators: vec![],
        theme: Theme {
            chat: ChatTheme {
                host_avatar: owner_avatar_url.map(|url| Avatar {
                    is_enabled: true,
                    url: Some(url),
                }),
            },
        },
        settings: Settings {
            general: GeneralSettings {
                is_branding_enabled,
            },
        },
        is_archived: false,
        created_at: now,
        updated_at: now,
    }
}

pub async fn create_typebot(
    core: &AppCore,
    user: &User,
    payload: CreateTypebotPayload,
) -> Result<Typebot> {
    let Some(workspace) = core.store.get_workspace(payload.workspace_id()).await? else {
        return Err(Error::NotFound("Couldn't find workspace".to_string()));
    };

    let typebot = match payload {
        CreateTypebotPayload::Complete(doc) => doc.into_typebot(),
        CreateTypebotPayload::Seed(seed) => parse_new_typebot(
            seed,
            user.image.clone(),
            workspace.plan == Plan::Free,
        ),
    };

    core.store.create_typebot(&typebot).await?;
    Ok(typebot)
}
