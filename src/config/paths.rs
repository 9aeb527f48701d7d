use std::path::{Path, PathBuf};

use crate::config::TEMPLATE_EXTENSION;

const CLAUDE_DIR: &str = ".claude";
const TEMPLATES_DIR: &str = "templates";
const SETTINGS_FILE: &str = "settings.json";
const BACKUP_MARKER: &str = "backup";

#[derive(Debug, Clone)]
pub struct AppPaths {
    claude_dir: PathBuf,
    templates_dir: PathBuf,
    settings_file: PathBuf,
}

impl AppPaths {
    /// Paths for a project root; `<root>/.claude` holds everything.
    pub fn for_root(root: impl AsRef<Path>) -> Self {
        Self::for_claude_dir(root.as_ref().join(CLAUDE_DIR))
    }

    fn for_claude_dir(claude_dir: PathBuf) -> Self {
        let templates_dir = claude_dir.join(TEMPLATES_DIR);
        let settings_file = claude_dir.join(SETTINGS_FILE);

        Self {
            claude_dir,
            templates_dir,
            settings_file,
        }
    }

    pub fn claude_dir(&self) -> &Path {
        &self.claude_dir
    }

    pub fn templates_dir(&self) -> &Path {
        &self.templates_dir
    }

    pub fn settings_file(&self) -> &Path {
        &self.settings_file
    }

    pub fn category_dir(&self, category: &str) -> PathBuf {
        self.templates_dir.join(category)
    }

    pub fn flat_template(&self, name: &str) -> PathBuf {
        self.templates_dir.join(template_file_name(name))
    }

    pub fn category_template(&self, category: &str, name: &str) -> PathBuf {
        self.category_dir(category).join(template_file_name(name))
    }

    pub fn backup_file(&self, stamp: &str) -> PathBuf {
        let mut name = self
            .settings_file
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| SETTINGS_FILE.into());
        name.push(format!(".{BACKUP_MARKER}.{stamp}"));
        self.settings_file.with_file_name(name)
    }
}

fn template_file_name(name: &str) -> String {
    format!("{name}.{TEMPLATE_EXTENSION}")
}
