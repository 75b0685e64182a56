//! Typebot document model: the flow graph a builder edits.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single conversational flow: groups of blocks plus the webhook and
/// variable definitions they reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typebot {
    pub id: String,
    pub name: String,
    pub workspace_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
    #[serde(default)]
    pub groups: Vec<Group>,
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
    #[serde(default)]
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Named, ordered container of blocks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// A single step in a flow, tagged by `type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Block {
    Start {
        id: String,
        label: String,
    },
    Text {
        id: String,
        #[serde(default)]
        content: serde_json::Value,
    },
    Input {
        id: String,
        #[serde(default)]
        options: serde_json::Value,
    },
    Condition {
        id: String,
        #[serde(default)]
        options: serde_json::Value,
    },
    /// References a webhook definition by id. The reference may dangle; that
    /// is a valid state, not an error.
    Webhook {
        id: String,
        webhook_id: String,
    },
}

impl Block {
    pub fn id(&self) -> &str {
        match self {
            Block::Start { id, .. }
            | Block::Text { id, .. }
            | Block::Input { id, .. }
            | Block::Condition { id, .. }
            | Block::Webhook { id, .. } => id,
        }
    }
}

/// External HTTP target a webhook block can invoke.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// Per-document grant for users outside the owning workspace.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collaborator {
    pub user_id: String,
    pub access: CollaborationType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CollaborationType {
    Read,
    Write,
    FullAccess,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    #[serde(default)]
    pub chat: ChatTheme,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatTheme {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_avatar: Option<Avatar>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Avatar {
    pub is_enabled: bool,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub general: GeneralSettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralSettings {
    #[serde(default)]
    pub is_branding_enabled: bool,
}
