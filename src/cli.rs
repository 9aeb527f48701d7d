use std::path::PathBuf;

use clap::{ArgAction, Parser};

pub const PROGRAM: &str = "switch-env";

#[derive(Debug, Parser)]
#[command(
    name = PROGRAM,
    about = "Switch Claude Code settings between templates",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    #[arg(
        long,
        value_name = "DIR",
        conflicts_with = "user",
        help = "Project root containing .claude (defaults to the current directory)"
    )]
    pub root: Option<PathBuf>,
    #[arg(long, help = "Use the user-level ~/.claude directory")]
    pub user: bool,
    #[arg(long, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[arg(
        value_name = "COMMAND",
        default_value = "help",
        allow_hyphen_values = true,
        help = "Template name, or one of list, current, help"
    )]
    pub command: String,
    #[arg(value_name = "TEMPLATE", hide = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Command {
    Switch(String),
    List,
    Current,
    Help,
}

impl Command {
    /// Reserved words select a command; anything else names a template.
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "list" => Self::List,
            "current" => Self::Current,
            "help" | "--help" | "-h" => Self::Help,
            name => Self::Switch(name.to_string()),
        }
    }
}
