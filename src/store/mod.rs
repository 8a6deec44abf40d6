//! Flat-file collection store
//!
//! Each named collection is one JSON file holding the full record sequence.
//! Reads that fail for any reason yield an empty collection so a missing or
//! corrupt file behaves like an empty library; the underlying failure is
//! reported on the diagnostic channel instead. Writes serialize the whole
//! sequence and overwrite the file, best-effort.

use std::marker::PhantomData;
use std::path::PathBuf;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::{Mutex, MutexGuard};

use crate::error::{AppError, AppResult};

/// Record with a store-assigned integer id
pub trait Identified {
    fn id(&self) -> i32;
}

/// Next id for a collection: max existing id + 1, or 1 when empty.
/// Ids are never reused after deletion.
pub fn next_id<T: Identified>(records: &[T]) -> i32 {
    records.iter().map(Identified::id).max().unwrap_or(0) + 1
}

/// Handle to the data directory holding all collections
#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    /// Open the store rooted at the given directory, creating it if needed
    pub fn open(root: impl Into<PathBuf>) -> AppResult<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)
            .map_err(|e| AppError::Storage(format!("cannot create data dir {}: {}", root.display(), e)))?;
        Ok(Self { root })
    }

    /// Get a typed handle to the named collection
    pub fn collection<T>(&self, name: &'static str) -> Collection<T> {
        Collection {
            name,
            path: self.root.join(format!("{}.json", name)),
            lock: Arc::new(Mutex::new(())),
            _marker: PhantomData,
        }
    }
}

/// A named, file-backed sequence of records
#[derive(Debug)]
pub struct Collection<T> {
    name: &'static str,
    path: PathBuf,
    lock: Arc<Mutex<()>>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            path: self.path.clone(),
            lock: Arc::clone(&self.lock),
            _marker: PhantomData,
        }
    }
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Acquire this collection's exclusive lock. Callers mutating the
    /// collection must hold the guard across the whole load-modify-save span.
    pub async fn lock(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().await
    }

    /// Read the full collection. Any failure yields an empty sequence.
    pub async fn load(&self) -> Vec<T> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(collection = self.name, "collection file not present, treating as empty");
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(collection = self.name, error = %e, "error reading collection, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(collection = self.name, error = %e, "error parsing collection, treating as empty");
                Vec::new()
            }
        }
    }

    /// Serialize the full sequence and overwrite the collection file
    pub async fn save(&self, records: &[T]) -> AppResult<()> {
        let bytes = serde_json::to_vec_pretty(records)
            .map_err(|e| AppError::Storage(format!("cannot serialize collection {}: {}", self.name, e)))?;

        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|e| AppError::Storage(format!("cannot write collection {}: {}", self.name, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Rec {
        id: i32,
        label: String,
    }

    impl Identified for Rec {
        fn id(&self) -> i32 {
            self.id
        }
    }

    fn rec(id: i32, label: &str) -> Rec {
        Rec { id, label: label.to_string() }
    }

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        let recs: Vec<Rec> = store.collection::<Rec>("nothing").load().await;
        assert!(recs.is_empty());
    }

    #[tokio::test]
    async fn corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        std::fs::write(dir.path().join("broken.json"), b"{not json").unwrap();
        let recs: Vec<Rec> = store.collection::<Rec>("broken").load().await;
        assert!(recs.is_empty());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        let coll = store.collection::<Rec>("recs");

        let records = vec![rec(1, "one"), rec(2, "two")];
        coll.save(&records).await.unwrap();
        assert_eq!(coll.load().await, records);
    }

    #[tokio::test]
    async fn save_overwrites_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        let coll = store.collection::<Rec>("recs");

        coll.save(&[rec(1, "one"), rec(2, "two")]).await.unwrap();
        coll.save(&[rec(2, "two")]).await.unwrap();
        assert_eq!(coll.load().await, vec![rec(2, "two")]);
    }

    #[test]
    fn next_id_is_max_plus_one() {
        assert_eq!(next_id::<Rec>(&[]), 1);
        assert_eq!(next_id(&[rec(1, "a"), rec(7, "b"), rec(3, "c")]), 8);
    }
}
