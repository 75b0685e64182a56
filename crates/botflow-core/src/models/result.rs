//! Chat result model and the deletion filter built from request input.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded run of a typebot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResult {
    pub id: String,
    pub typebot_id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_completed: bool,
}

/// Filter for bulk result deletion: always scoped to one typebot, optionally
/// narrowed to an explicit id subset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultFilter {
    pub typebot_id: String,
    pub ids: Option<Vec<String>>,
}

impl ResultFilter {
    /// An empty id list carries no restriction, so it is normalized away.
    pub fn new(typebot_id: impl Into<String>, ids: Option<Vec<String>>) -> Self {
        Self {
            typebot_id: typebot_id.into(),
            ids: ids.filter(|ids| !ids.is_empty()),
        }
    }

    pub fn all_of(typebot_id: impl Into<String>) -> Self {
        Self::new(typebot_id, None)
    }

    pub fn matches(&self, result: &ChatResult) -> bool {
        if result.typebot_id != self.typebot_id {
            return false;
        }
        match &self.ids {
            Some(ids) => ids.iter().any(|id| *id == result.id),
            None => true,
        }
    }
}
