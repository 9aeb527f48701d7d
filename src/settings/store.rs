use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::config::AppPaths;
use crate::error::{AppError, AppResult};

const BACKUP_STAMP_FORMAT: &str = "%Y-%m-%dT%H-%M-%S";

/// Access to the live settings file.
pub trait SettingsStore {
    fn path(&self) -> &Path;
    fn exists(&self) -> bool;
    fn read(&self) -> AppResult<Vec<u8>>;
    /// Copies the live file aside. Returns `None` when there is nothing to back up.
    fn backup(&self, stamp: &str) -> AppResult<Option<PathBuf>>;
    fn install(&self, template: &Path) -> AppResult<()>;
}

#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    paths: AppPaths,
}

impl FileSettingsStore {
    pub fn new(paths: AppPaths) -> Self {
        Self { paths }
    }

    fn unused_backup_path(&self, stamp: &str) -> PathBuf {
        let base = self.paths.backup_file(stamp);
        if !base.exists() {
            return base;
        }

        let mut n = 1;
        loop {
            let mut name = OsString::from(base.as_os_str());
            name.push(format!(".{n}"));
            let candidate = PathBuf::from(name);
            if !candidate.exists() {
                return candidate;
            }
            n += 1;
        }
    }
}

impl SettingsStore for FileSettingsStore {
    fn path(&self) -> &Path {
        self.paths.settings_file()
    }

    fn exists(&self) -> bool {
        self.path().is_file()
    }

    fn read(&self) -> AppResult<Vec<u8>> {
        Ok(fs::read(self.path())?)
    }

    fn backup(&self, stamp: &str) -> AppResult<Option<PathBuf>> {
        if !self.exists() {
            debug!(path = %self.path().display(), "no settings file to back up");
            return Ok(None);
        }

        let target = self.unused_backup_path(stamp);
        fs::copy(self.path(), &target).map_err(|source| AppError::Backup {
            path: target.clone(),
            source,
        })?;

        info!(backup = %target.display(), "backed up settings");
        Ok(Some(target))
    }

    fn install(&self, template: &Path) -> AppResult<()> {
        let target = self.path();
        let install_error = |source: std::io::Error| AppError::Install {
            path: target.to_path_buf(),
            source,
        };

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(install_error)?;
        }
        fs::copy(template, target).map_err(install_error)?;

        info!(template = %template.display(), target = %target.display(), "installed template");
        Ok(())
    }
}

/// Backup timestamp: UTC, whole seconds, filesystem-safe separators.
pub fn backup_stamp(now: DateTime<Utc>) -> String {
    now.format(BACKUP_STAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn store() -> (tempfile::TempDir, FileSettingsStore) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileSettingsStore::new(AppPaths::for_root(dir.path()));
        (dir, store)
    }

    #[test]
    fn formats_stamp_without_fraction_or_zone() {
        let now = Utc
            .with_ymd_and_hms(2026, 2, 16, 9, 5, 7)
            .single()
            .expect("valid time")
            + chrono::Duration::milliseconds(789);
        assert_eq!(backup_stamp(now), "2026-02-16T09-05-07");
    }

    #[test]
    fn backup_without_settings_is_noop() {
        let (_dir, store) = store();
        assert!(store.backup("2026-02-16T09-05-07").expect("backup").is_none());
    }

    #[test]
    fn backup_copies_bytes() {
        let (_dir, store) = store();
        fs::create_dir_all(store.path().parent().expect("parent")).expect("mkdir");
        fs::write(store.path(), b"{\"env\":{}}").expect("write");

        let backup = store
            .backup("2026-02-16T09-05-07")
            .expect("backup")
            .expect("backup path");
        assert!(
            backup
                .to_string_lossy()
                .ends_with("settings.json.backup.2026-02-16T09-05-07")
        );
        assert_eq!(fs::read(backup).expect("read"), b"{\"env\":{}}");
    }

    #[test]
    fn same_second_backups_do_not_clobber() {
        let (_dir, store) = store();
        fs::create_dir_all(store.path().parent().expect("parent")).expect("mkdir");
        fs::write(store.path(), "first").expect("write");
        let first = store.backup("stamp").expect("backup").expect("path");

        fs::write(store.path(), "second").expect("write");
        let second = store.backup("stamp").expect("backup").expect("path");

        assert_ne!(first, second);
        assert!(second.to_string_lossy().ends_with("settings.json.backup.stamp.1"));
        assert_eq!(fs::read_to_string(first).expect("read"), "first");
        assert_eq!(fs::read_to_string(second).expect("read"), "second");
    }

    #[test]
    fn install_creates_claude_dir() {
        let (dir, store) = store();
        let template = dir.path().join("template.json");
        fs::write(&template, "{\"permissions\":{}}").expect("write");

        store.install(&template).expect("install");
        assert_eq!(store.read().expect("read"), b"{\"permissions\":{}}");
    }

    #[test]
    fn install_reports_missing_template() {
        let (dir, store) = store();
        let err = store
            .install(&dir.path().join("missing.json"))
            .expect_err("install should fail");
        assert!(matches!(err, AppError::Install { .. }));
    }
}
