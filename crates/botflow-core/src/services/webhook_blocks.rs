//! Listing the webhook blocks of a typebot a user can read.

use crate::AppCore;
use crate::access::AccessLevel;
use crate::error::Result;
use crate::flow::{self, WebhookBlockSummary};
use crate::models::User;
use crate::services::typebots;

pub async fn list_webhook_blocks(
    core: &AppCore,
    user: &User,
    typebot_id: &str,
) -> Result<Vec<WebhookBlockSummary>> {
    let typebot =
        typebots::get_accessible_typebot(core, user, typebot_id, AccessLevel::Read).await?;
    Ok(flow::webhook_blocks(&typebot.groups, &typebot.webhooks))
}
