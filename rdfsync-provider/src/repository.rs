//! Repository boundary
//!
//! The repository is an external collaborator keyed by `(provider, url)`.
//! The core assumes each call is atomic from its perspective but gets no
//! multi-call transaction; reconciliation is eventually consistent across
//! passes.

use crate::error::RepositoryError;
use crate::record::ContentRecord;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::fmt::Debug;

/// Result type for repository calls
pub type RepoResult<T> = std::result::Result<T, RepositoryError>;

/// Structured content repository consumed by the sync core
///
/// All calls may fail with a repository-layer error; during a pass such a
/// failure aborts the remainder of the pass.
pub trait ContentRepository: Debug + Send + Sync {
    /// Whether a record exists for `(provider, url)`
    fn exists(&self, provider: &str, url: &str) -> RepoResult<bool>;

    /// Fetch a record, if present
    fn get(&self, provider: &str, url: &str) -> RepoResult<Option<ContentRecord>>;

    /// Store a new record
    fn add(&self, record: &ContentRecord) -> RepoResult<()>;

    /// Replace an existing record
    fn update(&self, record: &ContentRecord) -> RepoResult<()>;

    /// Remove the record for `(provider, url)`
    fn remove(&self, provider: &str, url: &str) -> RepoResult<()>;

    /// Enumerate every record stored for a provider
    fn list_all(&self, provider: &str) -> RepoResult<Vec<ContentRecord>>;
}

/// In-memory repository for tests and embedding
///
/// Keyed by `(provider, url)` in a `BTreeMap`, so `list_all` enumerates in
/// stable URL order.
#[derive(Debug, Default)]
pub struct MemoryContentRepository {
    records: RwLock<BTreeMap<(String, String), ContentRecord>>,
}

impl MemoryContentRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored records across providers
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether the repository holds no records
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl ContentRepository for MemoryContentRepository {
    fn exists(&self, provider: &str, url: &str) -> RepoResult<bool> {
        Ok(self
            .records
            .read()
            .contains_key(&(provider.to_string(), url.to_string())))
    }

    fn get(&self, provider: &str, url: &str) -> RepoResult<Option<ContentRecord>> {
        Ok(self
            .records
            .read()
            .get(&(provider.to_string(), url.to_string()))
            .cloned())
    }

    fn add(&self, record: &ContentRecord) -> RepoResult<()> {
        let key = (record.provider.clone(), record.url.clone());
        let mut records = self.records.write();
        if records.contains_key(&key) {
            return Err(RepositoryError::new(format!(
                "record already exists: {}",
                record.url
            )));
        }
        records.insert(key, record.clone());
        Ok(())
    }

    fn update(&self, record: &ContentRecord) -> RepoResult<()> {
        let key = (record.provider.clone(), record.url.clone());
        let mut records = self.records.write();
        if !records.contains_key(&key) {
            return Err(RepositoryError::new(format!(
                "no record to update: {}",
                record.url
            )));
        }
        records.insert(key, record.clone());
        Ok(())
    }

    fn remove(&self, provider: &str, url: &str) -> RepoResult<()> {
        let key = (provider.to_string(), url.to_string());
        if self.records.write().remove(&key).is_none() {
            return Err(RepositoryError::new(format!("no record to remove: {url}")));
        }
        Ok(())
    }

    fn list_all(&self, provider: &str) -> RepoResult<Vec<ContentRecord>> {
        Ok(self
            .records
            .read()
            .iter()
            .filter(|((p, _), _)| p == provider)
            .map(|(_, record)| record.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(url: &str) -> ContentRecord {
        ContentRecord::new(url, "provider", "Animal", 1)
    }

    #[test]
    fn test_crud_round_trip() {
        let repo = MemoryContentRepository::new();
        assert!(!repo.exists("provider", "urn:a").unwrap());

        repo.add(&record("urn:a")).unwrap();
        assert!(repo.exists("provider", "urn:a").unwrap());
        assert_eq!(repo.get("provider", "urn:a").unwrap().unwrap().url, "urn:a");

        let mut updated = record("urn:a");
        updated.modification_date = 2;
        repo.update(&updated).unwrap();
        assert_eq!(
            repo.get("provider", "urn:a").unwrap().unwrap().modification_date,
            2
        );

        repo.remove("provider", "urn:a").unwrap();
        assert!(!repo.exists("provider", "urn:a").unwrap());
    }

    #[test]
    fn test_add_duplicate_fails() {
        let repo = MemoryContentRepository::new();
        repo.add(&record("urn:a")).unwrap();
        assert!(repo.add(&record("urn:a")).is_err());
    }

    #[test]
    fn test_update_missing_fails() {
        let repo = MemoryContentRepository::new();
        assert!(repo.update(&record("urn:a")).is_err());
    }

    #[test]
    fn test_list_all_is_per_provider() {
        let repo = MemoryContentRepository::new();
        repo.add(&record("urn:a")).unwrap();
        repo.add(&record("urn:b")).unwrap();

        let mut other = record("urn:c");
        other.provider = "other".to_string();
        repo.add(&other).unwrap();

        let records = repo.list_all("provider").unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.provider == "provider"));
    }
}
