//! Flow-graph traversal: locating the webhook blocks a caller can subscribe
//! to inside a typebot's groups.

use crate::models::{Block, Group, Webhook};
use serde::{Deserialize, Serialize};

/// One subscribable webhook block, with its resolved target URL when the
/// referenced webhook definition exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookBlockSummary {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Walk groups in order, blocks in order within each group, and collect every
/// webhook block. A dangling `webhook_id` just leaves `url` empty.
pub fn webhook_blocks(groups: &[Group], webhooks: &[Webhook]) -> Vec<WebhookBlockSummary> {
    let mut found = Vec::new();
    for group in groups {
        for block in &group.blocks {
            let Block::Webhook { id, webhook_id } = block else {
                continue;
            };
            let url = webhooks
                .iter()
                .find(|webhook| webhook.id == *webhook_id)
                .and_then(|webhook| webhook.url.clone());
            found.push(WebhookBlockSummary {
                id: id.clone(),
                label: format!("{} > {}", group.title, id),
                url,
            });
        }
    }
    found
}
