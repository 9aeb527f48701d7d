use std::path::PathBuf;

use crate::config::{self, AppPaths};
use crate::error::AppResult;
use crate::output::Output;
use crate::settings::FileSettingsStore;

#[derive(Debug)]
pub struct AppContext {
    pub paths: AppPaths,
    pub store: FileSettingsStore,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(root: Option<PathBuf>, user: bool, json: bool) -> AppResult<Self> {
        let paths = config::resolve_root(root, user)?;
        Ok(Self::with_paths(paths, json))
    }

    pub fn with_paths(paths: AppPaths, json: bool) -> Self {
        let store = FileSettingsStore::new(paths.clone());
        let output = Output::new(json);

        Self {
            paths,
            store,
            output,
        }
    }
}
