use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Sessions live for a day; admins log back in after that.
pub const SESSION_TTL_HOURS: i64 = 24;

/// One authenticated admin session, keyed by its opaque bearer token.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user_id: i32,
    pub username: String,
    pub expires_at: DateTime<Utc>,
}

/// Per-client session registry. Each login issues its own token, so one
/// admin's login never authenticates anyone else's requests.
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Session>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::with_ttl(Duration::hours(SESSION_TTL_HOURS))
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Issue a fresh session for a verified user. Expired entries are swept
    /// here so the map stays proportional to the number of live sessions.
    pub async fn issue(&self, user_id: i32, username: &str) -> Session {
        let session = Session {
            token: Uuid::new_v4().simple().to_string(),
            user_id,
            username: username.to_string(),
            expires_at: Utc::now() + self.ttl,
        };

        let mut sessions = self.sessions.write().await;
        let now = Utc::now();
        sessions.retain(|_, s| s.expires_at > now);
        sessions.insert(session.token.clone(), session.clone());
        session
    }

    /// Look up a live session. Expired sessions read as absent.
    pub async fn get(&self, token: &str) -> Option<Session> {
        let sessions = self.sessions.read().await;
        let session = sessions.get(token)?;
        if session.expires_at <= Utc::now() {
            return None;
        }
        Some(session.clone())
    }

    /// Drop a session. Returns whether one existed; revoking an unknown or
    /// already-revoked token is a no-op.
    pub async fn revoke(&self, token: &str) -> bool {
        self.sessions.write().await.remove(token).is_some()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn issued_session_is_retrievable() {
        let store = SessionStore::new();
        let session = store.issue(1, "admin").await;

        let found = store.get(&session.token).await.unwrap();
        assert_eq!(found.user_id, 1);
        assert_eq!(found.username, "admin");
    }

    #[tokio::test]
    async fn each_login_gets_its_own_token() {
        let store = SessionStore::new();
        let a = store.issue(1, "admin").await;
        let b = store.issue(1, "admin").await;

        assert_ne!(a.token, b.token);
        // Revoking one leaves the other live.
        assert!(store.revoke(&a.token).await);
        assert!(store.get(&b.token).await.is_some());
    }

    #[tokio::test]
    async fn revoke_is_idempotent() {
        let store = SessionStore::new();
        let session = store.issue(1, "admin").await;

        assert!(store.revoke(&session.token).await);
        assert!(!store.revoke(&session.token).await);
        assert!(store.get(&session.token).await.is_none());
    }

    #[tokio::test]
    async fn expired_session_reads_as_absent() {
        let store = SessionStore::with_ttl(Duration::seconds(-1));
        let session = store.issue(1, "admin").await;

        assert!(store.get(&session.token).await.is_none());
    }

    #[tokio::test]
    async fn unknown_token_is_absent() {
        let store = SessionStore::new();
        assert!(store.get("no-such-token").await.is_none());
    }
}
