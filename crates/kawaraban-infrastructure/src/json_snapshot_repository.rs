//! File-backed session snapshot repository.
//!
//! Stores the snapshot as a single JSON document. Writes go through a
//! temporary file followed by a rename so a crash mid-write never leaves
//! a torn document behind. The loader enforces the 24-hour retention:
//! a stale snapshot is treated exactly like a missing one.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;

use kawaraban_core::error::{KawarabanError, Result};
use kawaraban_core::snapshot::{SessionSnapshot, SnapshotRepository};

use crate::dto::SessionSnapshotDto;

/// JSON-file implementation of [`SnapshotRepository`].
pub struct JsonSnapshotRepository {
    path: PathBuf,
}

impl JsonSnapshotRepository {
    /// Creates a repository storing its document at `path`.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn tmp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

#[async_trait]
impl SnapshotRepository for JsonSnapshotRepository {
    async fn save(&self, snapshot: &SessionSnapshot) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let dto = SessionSnapshotDto::from(snapshot);
        let json = serde_json::to_string_pretty(&dto)?;

        // tmp file + rename keeps the document whole under crashes.
        let tmp = self.tmp_path();
        tokio::fs::write(&tmp, json.as_bytes()).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    async fn load(&self) -> Result<Option<SessionSnapshot>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(KawarabanError::from(err)),
        };

        let dto: SessionSnapshotDto = serde_json::from_str(&raw)?;
        let snapshot = SessionSnapshot::from(dto);

        if snapshot.is_stale(Utc::now()) {
            tracing::info!(
                saved_at = %snapshot.saved_at,
                "ignoring stale session snapshot"
            );
            return Ok(None);
        }
        Ok(Some(snapshot))
    }

    async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(KawarabanError::from(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use kawaraban_core::session::SessionState;
    use tempfile::TempDir;

    fn repository(dir: &TempDir) -> JsonSnapshotRepository {
        JsonSnapshotRepository::new(dir.path().join("snapshot.json"))
    }

    fn snapshot_saved_at(saved_at: chrono::DateTime<Utc>) -> SessionSnapshot {
        let mut state = SessionState::new();
        state.select_month(3).unwrap();
        state.select_layout("magazine-3col").unwrap();
        state.comment = "🎎 ひな祭り 🎎".to_string();
        SessionSnapshot::from_state(&state, saved_at)
    }

    #[tokio::test]
    async fn test_save_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let repo = repository(&dir);

        let snapshot = snapshot_saved_at(Utc::now());
        repo.save(&snapshot).await.unwrap();

        let loaded = repo.load().await.unwrap().expect("snapshot should load");
        assert_eq!(loaded, snapshot);
    }

    #[tokio::test]
    async fn test_load_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let repo = repository(&dir);
        assert!(repo.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_load_rejects_thirty_hour_old_snapshot() {
        let dir = TempDir::new().unwrap();
        let repo = repository(&dir);

        let snapshot = snapshot_saved_at(Utc::now() - Duration::hours(30));
        repo.save(&snapshot).await.unwrap();

        assert!(repo.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_replaces_previous_snapshot() {
        let dir = TempDir::new().unwrap();
        let repo = repository(&dir);

        repo.save(&snapshot_saved_at(Utc::now())).await.unwrap();
        let mut second = snapshot_saved_at(Utc::now());
        second.event_title = "差し替え".to_string();
        repo.save(&second).await.unwrap();

        let loaded = repo.load().await.unwrap().unwrap();
        assert_eq!(loaded.event_title, "差し替え");
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let repo = repository(&dir);

        repo.clear().await.unwrap();
        repo.save(&snapshot_saved_at(Utc::now())).await.unwrap();
        repo.clear().await.unwrap();
        assert!(repo.load().await.unwrap().is_none());
    }
}
