pub mod json;
pub mod text;

use serde::Serialize;

use crate::error::AppResult;

pub use text::{Marker, header, marked};

/// Turns off ANSI styling for the whole test process. Rendering tests compare
/// plain text and never re-enable color.
#[cfg(test)]
pub(crate) fn plain() {
    colored::control::set_override(false);
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(json: bool) -> Self {
        let mode = if json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };
        Self { mode }
    }

    pub fn emit<T: Serialize>(&self, lines: &[String], json_value: &T) -> AppResult<()> {
        match self.mode {
            OutputMode::Text => text::print_line(&lines.join("\n")),
            OutputMode::Json => json::print(json_value),
        }
    }
}
