use tracing::debug;

use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;

pub fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        root,
        user,
        json,
        verbose: _,
        command,
        rest,
    } = cli;

    if !rest.is_empty() {
        debug!(?rest, "ignoring extra arguments");
    }

    let command = Command::from_arg(&command);
    if command == Command::Help {
        return commands::help::run();
    }

    let ctx = AppContext::bootstrap(root, user, json)?;
    debug!(root = %ctx.paths.claude_dir().display(), ?command, "dispatching");

    match command {
        Command::Switch(name) => commands::switch::run(&ctx, &name),
        Command::List => commands::list::run(&ctx),
        Command::Current => commands::current::run(&ctx),
        Command::Help => commands::help::run(),
    }
}
