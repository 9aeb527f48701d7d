use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::commands::list;
use crate::config::AppPaths;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::output::{Marker, marked};
use crate::settings::{SettingsStore, backup_stamp};
use crate::templates::{self, TemplateCatalog};

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SwitchOutcome {
    Switched {
        template: String,
        template_path: PathBuf,
        settings_path: PathBuf,
        backup: Option<PathBuf>,
    },
    NotFound {
        template: String,
        available: TemplateCatalog,
    },
    BackupFailed {
        template: String,
        backup_path: PathBuf,
        error: String,
    },
    InstallFailed {
        template: String,
        settings_path: PathBuf,
        backup: Option<PathBuf>,
        error: String,
    },
}

pub fn run(ctx: &AppContext, name: &str) -> AppResult<()> {
    let outcome = perform(&ctx.paths, &ctx.store, name, Utc::now())?;
    ctx.output.emit(&render(&outcome), &outcome)
}

/// Resolves `name`, backs up the live settings, then copies the template
/// over them. Each step completes before the next starts and nothing is
/// rolled back.
///
/// Not-found, backup and copy failures are reported as outcomes rather
/// than errors.
pub fn perform(
    paths: &AppPaths,
    store: &impl SettingsStore,
    name: &str,
    now: DateTime<Utc>,
) -> AppResult<SwitchOutcome> {
    let template = name.to_string();

    let Some(template_path) = templates::resolve(paths, name) else {
        return Ok(SwitchOutcome::NotFound {
            template,
            available: TemplateCatalog::scan(paths)?,
        });
    };

    let backup = match store.backup(&backup_stamp(now)) {
        Ok(backup) => backup,
        Err(AppError::Backup { path, source }) => {
            debug!(
                backup = %path.display(),
                error = %source,
                "backup failed, settings left untouched"
            );
            return Ok(SwitchOutcome::BackupFailed {
                template,
                backup_path: path,
                error: source.to_string(),
            });
        }
        Err(err) => return Err(err),
    };

    let settings_path = store.path().to_path_buf();
    match store.install(&template_path) {
        Ok(()) => Ok(SwitchOutcome::Switched {
            template,
            template_path,
            settings_path,
            backup,
        }),
        Err(AppError::Install { source, .. }) => Ok(SwitchOutcome::InstallFailed {
            template,
            settings_path,
            backup,
            error: source.to_string(),
        }),
        Err(err) => Err(err),
    }
}

pub fn render(outcome: &SwitchOutcome) -> Vec<String> {
    match outcome {
        SwitchOutcome::Switched {
            template,
            template_path,
            settings_path,
            backup,
        } => {
            let mut lines = backup_line(backup.as_deref());
            lines.extend([
                marked(Marker::Success, &format!("Switched to template: {template}")),
                String::new(),
                format!("Template: {}", template_path.display()),
                format!("Target: {}", settings_path.display()),
                String::new(),
                marked(
                    Marker::Warning,
                    "Remember to restart Claude Code for changes to take effect!",
                ),
            ]);
            lines
        }
        SwitchOutcome::NotFound {
            template,
            available,
        } => {
            let mut lines = vec![
                marked(Marker::Error, &format!("Template not found: {template}")),
                String::new(),
            ];
            lines.extend(list::render(available));
            lines
        }
        SwitchOutcome::BackupFailed { error, .. } => vec![marked(
            Marker::Error,
            &format!("Failed to back up current settings: {error}"),
        )],
        SwitchOutcome::InstallFailed { backup, error, .. } => {
            let mut lines = backup_line(backup.as_deref());
            lines.push(marked(
                Marker::Error,
                &format!("Failed to switch template: {error}"),
            ));
            lines
        }
    }
}

fn backup_line(backup: Option<&Path>) -> Vec<String> {
    backup
        .map(|path| {
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            marked(
                Marker::Success,
                &format!("Backed up current settings to: {file_name}"),
            )
        })
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::plain;

    #[test]
    fn renders_success_with_backup() {
        plain();
        let outcome = SwitchOutcome::Switched {
            template: "dev-full".to_string(),
            template_path: PathBuf::from("/p/.claude/templates/development/dev-full.json"),
            settings_path: PathBuf::from("/p/.claude/settings.json"),
            backup: Some(PathBuf::from(
                "/p/.claude/settings.json.backup.2026-02-16T10-00-00",
            )),
        };

        assert_eq!(
            render(&outcome),
            [
                "✓ Backed up current settings to: settings.json.backup.2026-02-16T10-00-00",
                "✓ Switched to template: dev-full",
                "",
                "Template: /p/.claude/templates/development/dev-full.json",
                "Target: /p/.claude/settings.json",
                "",
                "⚠ Remember to restart Claude Code for changes to take effect!",
            ]
        );
    }

    #[test]
    fn renders_not_found_with_listing() {
        plain();
        let outcome = SwitchOutcome::NotFound {
            template: "nope".to_string(),
            available: TemplateCatalog::default(),
        };

        assert_eq!(
            render(&outcome),
            ["✗ Template not found: nope", "", "Available templates:", ""]
        );
    }

    #[test]
    fn renders_install_failure_after_backup() {
        plain();
        let outcome = SwitchOutcome::InstallFailed {
            template: "dev-full".to_string(),
            settings_path: PathBuf::from("/p/.claude/settings.json"),
            backup: Some(PathBuf::from("/p/.claude/settings.json.backup.x")),
            error: "Permission denied (os error 13)".to_string(),
        };

        assert_eq!(
            render(&outcome),
            [
                "✓ Backed up current settings to: settings.json.backup.x",
                "✗ Failed to switch template: Permission denied (os error 13)",
            ]
        );
    }
}
