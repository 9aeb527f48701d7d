use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::context::AppContext;
use crate::error::AppResult;
use crate::output::{Marker, header, marked};
use crate::settings::{SettingsDocument, SettingsStore, SettingsSummary, raw_preview};

const PREVIEW_LINES: usize = 20;

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CurrentReport {
    Missing {
        path: PathBuf,
    },
    Parsed {
        path: PathBuf,
        summary: SettingsSummary,
    },
    Unparsed {
        path: PathBuf,
        error: String,
        preview: Vec<String>,
    },
}

pub fn run(ctx: &AppContext) -> AppResult<()> {
    let report = inspect(&ctx.store)?;
    ctx.output.emit(&render(&report), &report)
}

/// Reads the live settings file without modifying anything.
pub fn inspect(store: &impl SettingsStore) -> AppResult<CurrentReport> {
    let path = store.path().to_path_buf();
    if !store.exists() {
        return Ok(CurrentReport::Missing { path });
    }

    let bytes = store.read()?;
    let raw = String::from_utf8_lossy(&bytes);

    let report = match SettingsDocument::parse(&raw) {
        Ok(document) => CurrentReport::Parsed {
            path,
            summary: document.summary(),
        },
        Err(err) => {
            debug!(path = %path.display(), error = %err, "settings file could not be parsed");
            CurrentReport::Unparsed {
                path,
                error: err.to_string(),
                preview: raw_preview(&raw, PREVIEW_LINES),
            }
        }
    };

    Ok(report)
}

pub fn render(report: &CurrentReport) -> Vec<String> {
    match report {
        CurrentReport::Missing { path } => vec![marked(
            Marker::Error,
            &format!("No settings file found at: {}", path.display()),
        )],
        CurrentReport::Parsed { path, summary } => {
            let mut lines = current_file_heading(path);
            lines.push(header("Permissions:"));
            lines.push(format!("  Allowed: {} rules", summary.allowed));
            lines.push(format!("  Denied: {} rules", summary.denied));

            if let Some(env) = &summary.env {
                lines.push(String::new());
                lines.push(header("Environment variables:"));
                lines.extend(env.iter().map(|var| format!("  {} = {}", var.name, var.value)));
            }

            if let Some(servers) = &summary.mcp_servers {
                lines.push(String::new());
                lines.push(header("MCP Servers:"));
                lines.extend(servers.iter().map(|server| format!("  {server}")));
            }

            lines
        }
        CurrentReport::Unparsed { path, preview, .. } => {
            let mut lines = current_file_heading(path);
            lines.push(marked(
                Marker::Warning,
                "Could not parse JSON. Showing raw content:",
            ));
            lines.extend(preview.iter().cloned());
            lines
        }
    }
}

fn current_file_heading(path: &Path) -> Vec<String> {
    vec![
        marked(
            Marker::Info,
            &format!("Current settings file: {}", path.display()),
        ),
        String::new(),
    ]
}
