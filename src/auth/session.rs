use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::Claim;

/// Revoked session ids, kept until the token would have expired anyway.
#[derive(Default)]
pub struct SessionRegistry {
    revoked: RwLock<HashMap<Uuid, usize>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn revoke(&self, claim: &Claim) {
        let now = usize::try_from(Utc::now().timestamp()).unwrap_or_default();
        let mut revoked = self.revoked.write().await;

        revoked.retain(|_, exp| *exp > now);
        revoked.insert(claim.jti, claim.exp);
    }

    pub async fn is_revoked(&self, jti: &Uuid) -> bool {
        self.revoked.read().await.contains_key(jti)
    }
}
