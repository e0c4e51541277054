use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::error::{GateError, Result};

/// On-disk form of the admin credential
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CredentialRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_password: Option<String>,
}

impl CredentialRecord {
    pub fn new(digest: impl Into<String>) -> Self {
        Self {
            admin_password: Some(digest.into()),
        }
    }

    /// The stored digest, if present and non-empty
    pub fn digest(&self) -> Option<&str> {
        self.admin_password
            .as_deref()
            .filter(|digest| !digest.is_empty())
    }
}

/// JSON file holding at most one admin credential.
///
/// The file existing is what marks a credential as set. There is no
/// locking: two processes writing or removing the same file race.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if an admin credential is stored
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the stored digest
    pub fn read_digest(&self) -> Result<String> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(GateError::NoCredentialConfigured)
            }
            Err(e) => return Err(GateError::Storage(e)),
        };

        let record: CredentialRecord = serde_json::from_str(&content)?;
        record
            .digest()
            .map(str::to_string)
            .ok_or(GateError::MalformedRecord)
    }

    /// Replace whatever is stored with `digest`
    pub fn write_digest(&self, digest: &str) -> Result<()> {
        let data = serde_json::to_string(&CredentialRecord::new(digest))?;
        fs::write(&self.path, data)?;
        Ok(())
    }

    /// Delete the credential file; `Ok(false)` when there was none
    pub fn remove(&self) -> Result<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(GateError::Storage(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test_store() -> (CredentialStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = CredentialStore::new(dir.path().join(".admin_config.json"));
        (store, dir)
    }

    #[test]
    fn test_write_and_read_digest() {
        let (store, _dir) = setup_test_store();
        assert!(!store.exists());

        store.write_digest("abc123").unwrap();
        assert!(store.exists());
        assert_eq!(store.read_digest().unwrap(), "abc123");

        let raw = fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value, serde_json::json!({ "admin_password": "abc123" }));
    }

    #[test]
    fn test_write_overwrites() {
        let (store, _dir) = setup_test_store();
        store.write_digest("first").unwrap();
        store.write_digest("second").unwrap();
        assert_eq!(store.read_digest().unwrap(), "second");
    }

    #[test]
    fn test_missing_file() {
        let (store, _dir) = setup_test_store();
        assert!(matches!(
            store.read_digest(),
            Err(GateError::NoCredentialConfigured)
        ));
    }

    #[test]
    fn test_malformed_records() {
        let (store, _dir) = setup_test_store();

        for content in ["{}", r#"{"admin_password": null}"#, r#"{"admin_password": ""}"#, r#"{"other": "x"}"#] {
            fs::write(store.path(), content).unwrap();
            assert!(
                matches!(store.read_digest(), Err(GateError::MalformedRecord)),
                "content {}",
                content
            );
        }
    }

    #[test]
    fn test_whitespace_digest_is_returned_as_stored() {
        let (store, _dir) = setup_test_store();
        fs::write(store.path(), r#"{"admin_password": "   "}"#).unwrap();
        assert_eq!(store.read_digest().unwrap(), "   ");
    }

    #[test]
    fn test_corrupt_record() {
        let (store, _dir) = setup_test_store();
        fs::write(store.path(), "not json").unwrap();
        assert!(matches!(store.read_digest(), Err(GateError::CorruptRecord(_))));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (store, _dir) = setup_test_store();
        assert!(!store.remove().unwrap());

        store.write_digest("abc").unwrap();
        assert!(store.remove().unwrap());
        assert!(!store.exists());
        assert!(!store.remove().unwrap());
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let store = CredentialStore::new(dir.path().join("missing").join("cfg.json"));
        assert!(matches!(store.write_digest("abc"), Err(GateError::Storage(_))));
    }
}
