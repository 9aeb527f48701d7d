use std::io::{self, Write};

use colored::Colorize;

use crate::error::AppResult;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Marker {
    Success,
    Error,
    Warning,
    Info,
}

pub fn marked(marker: Marker, message: &str) -> String {
    match marker {
        Marker::Success => format!("✓ {message}").green().to_string(),
        Marker::Error => format!("✗ {message}").red().to_string(),
        Marker::Warning => format!("⚠ {message}").yellow().to_string(),
        Marker::Info => message.cyan().to_string(),
    }
}

pub fn header(title: &str) -> String {
    title.yellow().to_string()
}

pub fn print_line(line: &str) -> AppResult<()> {
    write_line(&mut io::stdout().lock(), line)
}

pub fn write_line(out: &mut impl Write, line: &str) -> AppResult<()> {
    writeln!(out, "{line}")?;
    out.flush()?;
    Ok(())
}
