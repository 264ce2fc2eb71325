//! File-backed record stores.
//!
//! Each collection lives whole in memory and is rewritten to its backing
//! file after every mutation. There is no incremental persistence and no
//! atomic-rename safety; a missing file simply means an empty collection.

use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use thiserror::Error;
use uuid::Uuid;

mod contacts;
mod tasks;

pub use contacts::{ContactBook, CONTACTS_FILE};
pub use tasks::{TaskList, TASKS_FILE};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Name cannot be empty.")]
    NameRequired,
    #[error("Phone cannot be empty.")]
    PhoneRequired,
    #[error("Invalid phone number format: {0}")]
    InvalidPhone(String),
    #[error("Invalid email format: {0}")]
    InvalidEmail(String),
    #[error("A contact named \"{0}\" already exists.")]
    DuplicateName(String),
    #[error("Task description cannot be empty.")]
    DescriptionRequired,
    #[error("Task is already marked as complete.")]
    AlreadyCompleted,
    #[error("No record found for id {0}.")]
    NotFound(Uuid),
    #[error("could not decode store file: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Read a whole collection. A missing file is an empty collection, not an
/// error.
fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    Ok(serde_json::from_slice(&bytes)?)
}

/// Serialize a whole collection over its backing file.
fn write_records<T: Serialize>(path: &Path, records: &[T]) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let records: Vec<crate::models::Task> =
            read_records(&dir.path().join("nothing.json")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{not json").unwrap();
        let result: Result<Vec<crate::models::Task>, _> = read_records(&path);
        assert!(matches!(result, Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        let tasks = vec![crate::models::Task::new("one".to_string())];
        write_records(&path, &tasks).unwrap();
        let loaded: Vec<crate::models::Task> = read_records(&path).unwrap();
        assert_eq!(loaded, tasks);
    }
}
