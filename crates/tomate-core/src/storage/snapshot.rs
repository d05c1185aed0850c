//! The durable snapshot: `{tasks, settings}` as one JSON document.
//!
//! Loading never fails startup -- a missing, unreadable, or corrupt file is
//! logged and replaced by defaults, and the in-memory state is authoritative
//! for the rest of the session. Saving writes the complete snapshot to a
//! temp file and renames it over the old one, so a crash mid-write cannot
//! corrupt previously saved data.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

use super::data_dir;
use crate::error::PersistenceError;
use crate::settings::Settings;
use crate::task::TaskStore;

const SNAPSHOT_FILE: &str = "tomate.json";

/// Everything that survives a restart. Selected date, calendar month, and
/// timer state are session-only and deliberately absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub tasks: TaskStore,
    #[serde(default)]
    pub settings: Settings,
}

/// Handle on the snapshot file.
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Store at the default location, `data_dir()/tomate.json`.
    pub fn open() -> io::Result<Self> {
        Ok(Self {
            path: data_dir()?.join(SNAPSHOT_FILE),
        })
    }

    /// Store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the snapshot, falling back to defaults on any failure.
    ///
    /// Settings with zero durations (written before validation existed) are
    /// normalized to defaults.
    pub fn load(&self) -> Snapshot {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Snapshot::default();
            }
            Err(err) => {
                warn!(path = %self.path.display(), %err, "failed to read snapshot, using defaults");
                return Snapshot::default();
            }
        };
        match serde_json::from_str::<Snapshot>(&content) {
            Ok(mut snapshot) => {
                snapshot.settings = snapshot.settings.normalized();
                snapshot
            }
            Err(err) => {
                warn!(path = %self.path.display(), %err, "snapshot is corrupt, using defaults");
                Snapshot::default()
            }
        }
    }

    /// Persist the complete snapshot via write-to-temp-then-rename.
    pub fn save(&self, snapshot: &Snapshot) -> Result<(), PersistenceError> {
        let content = serde_json::to_string_pretty(snapshot)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(|source| PersistenceError::WriteFailed {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| PersistenceError::WriteFailed {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::ReminderMode;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn save_then_load_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::at(dir.path().join("tomate.json"));

        let mut snapshot = Snapshot::default();
        snapshot.tasks.add_task("water plants", date(2026, 2, 14)).unwrap();
        snapshot.settings.reminder_mode = ReminderMode::Both;
        store.save(&snapshot).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.tasks.len(), 1);
        assert!(loaded.tasks.has_task_on(date(2026, 2, 14)));
        assert_eq!(loaded.settings.reminder_mode, ReminderMode::Both);
        // No temp file left behind.
        assert!(!dir.path().join("tomate.json.tmp").exists());
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::at(dir.path().join("absent.json"));
        let snapshot = store.load();
        assert!(snapshot.tasks.is_empty());
        assert_eq!(snapshot.settings, Settings::default());
    }

    #[test]
    fn corrupt_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tomate.json");
        fs::write(&path, "{ not json").unwrap();
        let snapshot = SnapshotStore::at(&path).load();
        assert!(snapshot.tasks.is_empty());
        assert_eq!(snapshot.settings, Settings::default());
    }

    #[test]
    fn zero_durations_are_normalized_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tomate.json");
        fs::write(
            &path,
            r#"{"tasks": [], "settings": {"work_seconds": 0, "short_break_seconds": 120, "long_break_seconds": 900, "reminder_mode": "sound"}}"#,
        )
        .unwrap();
        let snapshot = SnapshotStore::at(&path).load();
        assert_eq!(snapshot.settings.work_seconds, 1500);
        assert_eq!(snapshot.settings.short_break_seconds, 120);
        assert_eq!(snapshot.settings.reminder_mode, ReminderMode::Sound);
    }

    #[test]
    fn negative_duration_rejects_the_whole_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tomate.json");
        fs::write(
            &path,
            r#"{"tasks": [], "settings": {"work_seconds": -5, "short_break_seconds": 300, "long_break_seconds": 900, "reminder_mode": "none"}}"#,
        )
        .unwrap();
        let snapshot = SnapshotStore::at(&path).load();
        assert_eq!(snapshot.settings, Settings::default());
    }

    #[test]
    fn snapshot_wire_format_has_tasks_and_settings() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::at(dir.path().join("tomate.json"));
        let mut snapshot = Snapshot::default();
        snapshot.tasks.add_task("x", date(2026, 1, 2)).unwrap();
        store.save(&snapshot).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert!(raw["tasks"].is_array());
        assert_eq!(raw["tasks"][0]["date"], "2026-01-02");
        assert_eq!(raw["settings"]["work_seconds"], 1500);
    }

    #[test]
    fn save_replaces_previous_content_atomically() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::at(dir.path().join("tomate.json"));
        let mut snapshot = Snapshot::default();
        snapshot.tasks.add_task("first", date(2026, 1, 1)).unwrap();
        store.save(&snapshot).unwrap();
        snapshot.tasks.add_task("second", date(2026, 1, 1)).unwrap();
        store.save(&snapshot).unwrap();
        assert_eq!(store.load().tasks.len(), 2);
    }
}
