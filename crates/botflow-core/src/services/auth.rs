//! Bearer-token resolution against stored sessions.

use crate::AppCore;
use crate::error::{Error, Result};
use crate::models::User;

pub async fn authenticate(core: &AppCore, token: &str) -> Result<User> {
    let Some(session) = core.store.get_session(token).await? else {
        return Err(Error::Unauthenticated);
    };
    let Some(user) = core.store.get_user(&session.user_id).await? else {
        // Session outlived its user; treat it as invalid.
        return Err(Error::Unauthenticated);
    };
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Session;
    use chrono::Utc;

    #[tokio::test]
    async fn unknown_token_is_rejected() {
        let core = AppCore::in_memory();
        let result = authenticate(&core, "nope").await;
        assert!(matches!(result, Err(Error::Unauthenticated)));
    }

    #[tokio::test]
    async fn stored_session_resolves_its_user() {
        let core = AppCore::in_memory();
        core.store
            .upsert_user(&User {
                id: "u1".to_string(),
                email: "jo@acme.test".to_string(),
                name: None,
                image: None,
            })
            .await
            .unwrap();
        core.store
            .create_session(&Session {
                token: "tok-1".to_string(),
                user_id: "u1".to_string(),
                created_at: Utc::now(),
            })
            .await
            .unwrap();

        let user = authenticate(&core, "tok-1").await.unwrap();
        assert_eq!(user.id, "u1");
    }
}
