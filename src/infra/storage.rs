use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::error::AppError;

/// File-backed collection store: one JSON array file per collection, named
/// after the collection key (`academicEvents.json`, `jobs.json`, ...).
///
/// Records are parsed individually on load; a record that fails to parse is
/// skipped rather than trusted or allowed to poison the whole collection.
pub struct LocalStore {
    dir: PathBuf,
    lock: Mutex<()>,
}

impl LocalStore {
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, AppError> {
        fs::create_dir_all(dir.as_ref()).map_err(|e| {
            AppError::Storage(format!("cannot create {}: {e}", dir.as_ref().display()))
        })?;
        Ok(Self {
            dir: dir.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        })
    }

    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, AppError> {
        let _guard = self.lock.lock().unwrap();
        self.read_records(key)
    }

    /// Read-modify-write under the store lock.
    pub fn update<T, R, F>(&self, key: &str, apply: F) -> Result<R, AppError>
    where
        T: DeserializeOwned + Serialize,
        F: FnOnce(&mut Vec<T>) -> Result<R, AppError>,
    {
        let _guard = self.lock.lock().unwrap();
        let mut records = self.read_records(key)?;
        let result = apply(&mut records)?;

        let path = self.path(key);
        let json =
            serde_json::to_string_pretty(&records).map_err(|e| AppError::Storage(e.to_string()))?;
        fs::write(&path, json)
            .map_err(|e| AppError::Storage(format!("cannot write {}: {e}", path.display())))?;
        Ok(result)
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn read_records<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, AppError> {
        let path = self.path(key);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&path)
            .map_err(|e| AppError::Storage(format!("cannot read {}: {e}", path.display())))?;

        let values: Vec<Value> = serde_json::from_str(&raw).unwrap_or_default();
        Ok(values
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value(value) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!("Skipping malformed record {} in '{}': {}", index, key, e);
                    None
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::user::User;

    struct TempDir(PathBuf);

    impl TempDir {
        fn new() -> Self {
            let dir = std::env::temp_dir().join(format!("campus-store-{}", uuid::Uuid::new_v4()));
            Self(dir)
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn missing_collection_is_empty() {
        let dir = TempDir::new();
        let store = LocalStore::open(&dir.0).unwrap();
        let users: Vec<User> = store.load("currentUser").unwrap();
        assert!(users.is_empty());
    }

    #[test]
    fn roundtrips_records() {
        let dir = TempDir::new();
        let store = LocalStore::open(&dir.0).unwrap();
        let user = User::new("Ada".to_string(), "ada@example.edu".to_string());
        let id = user.id.clone();
        store
            .update("currentUser", move |records: &mut Vec<User>| {
                records.push(user);
                Ok(())
            })
            .unwrap();

        let users: Vec<User> = store.load("currentUser").unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, id);
    }

    #[test]
    fn malformed_records_are_skipped() {
        let dir = TempDir::new();
        let store = LocalStore::open(&dir.0).unwrap();
        fs::write(
            dir.0.join("currentUser.json"),
            r#"[
                {"id": "u1", "name": "Ada", "email": "ada@example.edu", "createdAt": "2024-10-01T00:00:00Z"},
                {"id": "u2", "name": 42},
                "not even an object"
            ]"#,
        )
        .unwrap();

        let users: Vec<User> = store.load("currentUser").unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, "u1");
    }

    #[test]
    fn unreadable_file_is_an_empty_collection() {
        let dir = TempDir::new();
        let store = LocalStore::open(&dir.0).unwrap();
        fs::write(dir.0.join("jobs.json"), "{ this is not json").unwrap();
        let jobs: Vec<crate::domain::models::job::Job> = store.load("jobs").unwrap();
        assert!(jobs.is_empty());
    }
}
