//! Display-name persistence for the greeting surface.

use crate::error::StoreError;
use crate::kv::KeyValueStore;
use log::info;

/// Fixed adapter key holding the display name.
pub(crate) const USERNAME_KEY: &str = "username";

/// Persists and retrieves the single display-name string.
pub struct IdentityStore<K> {
    kv: K,
}

impl<K: KeyValueStore> IdentityStore<K> {
    /// Create an identity store over the given key-value adapter.
    pub fn new(kv: K) -> Self {
        Self { kv }
    }

    /// Persist the display name, trimmed. Empty after trimming is rejected.
    ///
    /// Returns the stored form.
    pub async fn set_name(&self, name: &str) -> Result<String, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::Validation(
                "display name must not be empty".to_string(),
            ));
        }
        self.kv.set(USERNAME_KEY, name.to_string()).await?;
        info!("display name stored (len={})", name.len());
        Ok(name.to_string())
    }

    /// The stored display name, if one was ever set.
    pub async fn name(&self) -> Result<Option<String>, StoreError> {
        self.kv.get(USERNAME_KEY).await
    }
}

#[cfg(test)]
mod tests {
    use super::IdentityStore;
    use crate::error::StoreError;
    use crate::kv::FileKeyValueStore;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[tokio::test]
    async fn name_is_absent_until_set() {
        let temp = tempdir().expect("tempdir");
        let identity = IdentityStore::new(FileKeyValueStore::new(temp.path()).expect("kv"));
        assert_eq!(identity.name().await.expect("name"), None);
    }

    #[tokio::test]
    async fn set_name_trims_before_storing() {
        let temp = tempdir().expect("tempdir");
        let identity = IdentityStore::new(FileKeyValueStore::new(temp.path()).expect("kv"));
        let stored = identity.set_name("  Ada  ").await.expect("set");
        assert_eq!(stored, "Ada");
        assert_eq!(identity.name().await.expect("name"), Some("Ada".to_string()));
    }

    #[tokio::test]
    async fn rejects_whitespace_only_name() {
        let temp = tempdir().expect("tempdir");
        let identity = IdentityStore::new(FileKeyValueStore::new(temp.path()).expect("kv"));
        let err = identity.set_name("   ").await.expect_err("must fail");
        assert!(matches!(err, StoreError::Validation(_)), "got {err:?}");
        assert_eq!(identity.name().await.expect("name"), None);
    }
}
