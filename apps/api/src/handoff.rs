//! Session handoff — passes the brand test's Holland code to the career-fit
//! check without a round trip through stored results.
//!
//! The producer writes once per session; the consumer reads once, which
//! removes the entry. Carried in `AppState` as `Arc<dyn HandoffStore>`.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandoffPayload {
    pub holland: String,
}

#[derive(Debug, Error)]
pub enum HandoffError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Malformed handoff payload: {0}")]
    Payload(#[from] serde_json::Error),
}

#[async_trait]
pub trait HandoffStore: Send + Sync {
    async fn put(&self, session_id: &str, payload: &HandoffPayload) -> Result<(), HandoffError>;

    /// Returns and removes the payload for `session_id`.
    async fn take(&self, session_id: &str) -> Result<Option<HandoffPayload>, HandoffError>;
}

/// Publishes a composite code for `session_id`. Failures become a warning.
pub async fn publish_best_effort(
    store: &dyn HandoffStore,
    session_id: &str,
    holland: &str,
    warnings: &mut Vec<String>,
) {
    if holland.is_empty() {
        return;
    }
    let payload = HandoffPayload {
        holland: holland.to_string(),
    };
    if let Err(e) = store.put(session_id, &payload).await {
        warn!("Failed to publish handoff for session {session_id}: {e}");
        warnings.push("Your Holland code could not be passed to the career-fit check.".to_string());
    }
}

/// Consumes the handoff for `session_id` as a list of Holland letters.
/// A missing entry or a store failure yields an empty list.
pub async fn take_best_effort(
    store: &dyn HandoffStore,
    session_id: &str,
    warnings: &mut Vec<String>,
) -> Vec<String> {
    match store.take(session_id).await {
        Ok(Some(payload)) => payload.holland.chars().map(|c| c.to_string()).collect(),
        Ok(None) => Vec::new(),
        Err(e) => {
            warn!("Failed to read handoff for session {session_id}: {e}");
            warnings.push("Your brand-test Holland code could not be loaded.".to_string());
            Vec::new()
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Redis
// ────────────────────────────────────────────────────────────────────────────

pub struct RedisHandoffStore {
    client: redis::Client,
    ttl_secs: u64,
}

impl RedisHandoffStore {
    pub fn new(client: redis::Client, ttl_secs: u64) -> Self {
        Self { client, ttl_secs }
    }

    fn key(session_id: &str) -> String {
        format!("handoff:{session_id}")
    }
}

#[async_trait]
impl HandoffStore for RedisHandoffStore {
    async fn put(&self, session_id: &str, payload: &HandoffPayload) -> Result<(), HandoffError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let body = serde_json::to_string(payload)?;
        redis::cmd("SET")
            .arg(Self::key(session_id))
            .arg(body)
            .arg("EX")
            .arg(self.ttl_secs)
            .query_async::<_, ()>(&mut conn)
            .await?;
        debug!("Stored handoff for session {session_id}");
        Ok(())
    }

    async fn take(&self, session_id: &str) -> Result<Option<HandoffPayload>, HandoffError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let body: Option<String> = redis::cmd("GETDEL")
            .arg(Self::key(session_id))
            .query_async(&mut conn)
            .await?;
        Ok(body.map(|b| serde_json::from_str(&b)).transpose()?)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct InMemoryHandoffStore {
    entries: Mutex<HashMap<String, HandoffPayload>>,
}

impl InMemoryHandoffStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HandoffStore for InMemoryHandoffStore {
    async fn put(&self, session_id: &str, payload: &HandoffPayload) -> Result<(), HandoffError> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(session_id.to_string(), payload.clone());
        Ok(())
    }

    async fn take(&self, session_id: &str) -> Result<Option<HandoffPayload>, HandoffError> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        Ok(entries.remove(session_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_is_read_once() {
        let store = InMemoryHandoffStore::new();
        let payload = HandoffPayload {
            holland: "IEC".to_string(),
        };
        store.put("s1", &payload).await.unwrap();
        assert_eq!(store.take("s1").await.unwrap(), Some(payload));
        assert_eq!(store.take("s1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_in_memory_later_write_supersedes() {
        let store = InMemoryHandoffStore::new();
        for code in ["RIA", "SEC"] {
            store
                .put(
                    "s",
                    &HandoffPayload {
                        holland: code.to_string(),
                    },
                )
                .await
                .unwrap();
        }
        assert_eq!(store.take("s").await.unwrap().unwrap().holland, "SEC");
    }

    struct BrokenStore;

    #[async_trait]
    impl HandoffStore for BrokenStore {
        async fn put(&self, _: &str, _: &HandoffPayload) -> Result<(), HandoffError> {
            Err(serde_json::from_str::<HandoffPayload>("{").unwrap_err().into())
        }
        async fn take(&self, _: &str) -> Result<Option<HandoffPayload>, HandoffError> {
            Err(serde_json::from_str::<HandoffPayload>("[]").unwrap_err().into())
        }
    }

    #[tokio::test]
    async fn test_take_splits_letters() {
        let store = InMemoryHandoffStore::new();
        let mut warnings = Vec::new();
        publish_best_effort(&store, "s", "IAS", &mut warnings).await;
        let letters = take_best_effort(&store, "s", &mut warnings).await;
        assert_eq!(letters, vec!["I", "A", "S"]);
        assert!(warnings.is_empty());
    }

    #[tokio::test]
    async fn test_empty_code_is_not_published() {
        let store = InMemoryHandoffStore::new();
        let mut warnings = Vec::new();
        publish_best_effort(&store, "s", "", &mut warnings).await;
        assert_eq!(store.take("s").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_store_failures_become_warnings() {
        let mut warnings = Vec::new();
        publish_best_effort(&BrokenStore, "s", "RIA", &mut warnings).await;
        let letters = take_best_effort(&BrokenStore, "s", &mut warnings).await;
        assert!(letters.is_empty());
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn test_payload_schema() {
        let json = serde_json::to_string(&HandoffPayload {
            holland: "RIA".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"holland":"RIA"}"#);
        assert_eq!(RedisHandoffStore::key("abc"), "handoff:abc");
    }
}
