use crate::cli::PROGRAM;
use crate::error::AppResult;
use crate::output::{Marker, marked, text};

pub fn run() -> AppResult<()> {
    text::print_line(&usage(PROGRAM).join("\n"))
}

pub fn usage(program: &str) -> Vec<String> {
    vec![
        marked(Marker::Info, "Claude Code Permission Switcher"),
        String::new(),
        format!("Usage: {program} <command> [template]"),
        String::new(),
        "Commands:".to_string(),
        "  <template>      Switch to the specified template".to_string(),
        "  list            List all available templates".to_string(),
        "  current         Show current settings".to_string(),
        "  help            Show this help message".to_string(),
        String::new(),
        "Examples:".to_string(),
        format!("  {program} dev-full"),
        format!("  {program} qa-manual"),
        format!("  {program} prod-readonly"),
    ]
}
