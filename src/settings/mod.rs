pub mod document;
pub mod store;

pub use document::{DocumentError, EnvVar, SettingsDocument, SettingsSummary, raw_preview};
pub use store::{FileSettingsStore, SettingsStore, backup_stamp};
