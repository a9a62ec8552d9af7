//! JSON snapshot persistence
//!
//! The snapshot is a full overwrite: last writer wins, no merge with prior
//! contents and no temp-file swap.

use async_trait::async_trait;
use std::path::PathBuf;
use worksnap_core::{Error, Result, WorkshopRecord};

#[async_trait]
pub trait SnapshotWriter: Send + Sync {
    /// Persist the full record list, replacing any prior snapshot.
    async fn write(&self, records: &[WorkshopRecord]) -> Result<()>;
}

/// Writes the record list as an indented JSON array at a fixed path
pub struct JsonSnapshotWriter {
    path: PathBuf,
}

impl JsonSnapshotWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SnapshotWriter for JsonSnapshotWriter {
    async fn write(&self, records: &[WorkshopRecord]) -> Result<()> {
        let json = serde_json::to_vec_pretty(records)?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(Error::Persistence)?;
        tracing::info!(path = %self.path.display(), count = records.len(), "Snapshot written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn record(id: u64, title: &str) -> WorkshopRecord {
        WorkshopRecord {
            id,
            title: title.to_string(),
            description: String::new(),
            subscription_count: 0,
            score: 1.0,
            preview_url: String::new(),
            author: String::new(),
            created_at: DateTime::from_timestamp(0, 0).unwrap(),
            updated_at: DateTime::from_timestamp(0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn writes_indented_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("LOG.JSON");

        let writer = JsonSnapshotWriter::new(&path);
        writer.write(&[record(1, "a"), record(2, "b")]).await.unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("[\n"), "expected indented output");
        let parsed: Vec<WorkshopRecord> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].title, "b");
    }

    #[tokio::test]
    async fn overwrites_prior_snapshot_entirely() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("LOG.JSON");
        std::fs::write(&path, r#"[{"stale": "snapshot from an earlier run"}]"#).unwrap();

        let writer = JsonSnapshotWriter::new(&path);
        writer.write(&[record(3, "fresh")]).await.unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(!text.contains("stale"));
        let parsed: Vec<WorkshopRecord> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].id, 3);
    }

    #[tokio::test]
    async fn empty_list_persists_as_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("LOG.JSON");

        JsonSnapshotWriter::new(&path).write(&[]).await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[tokio::test]
    async fn io_failure_surfaces_as_persistence_error() {
        let dir = tempfile::tempdir().unwrap();
        // Target is a directory, so the write must fail
        let writer = JsonSnapshotWriter::new(dir.path());

        let err = writer.write(&[record(1, "a")]).await.unwrap_err();
        assert!(matches!(err, Error::Persistence(_)));
    }
}
