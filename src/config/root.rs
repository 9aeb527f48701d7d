use std::path::PathBuf;

use crate::config::AppPaths;
use crate::error::{AppError, AppResult};

/// Resolves which `.claude` directory to operate on.
///
/// `--user` selects `~/.claude`; otherwise an explicit `--root` wins over
/// the current working directory.
pub fn resolve_root(root: Option<PathBuf>, user: bool) -> AppResult<AppPaths> {
    if user {
        let home = dirs::home_dir()
            .ok_or_else(|| AppError::Config("unable to resolve home directory".to_string()))?;
        return Ok(AppPaths::for_root(home));
    }

    let root = match root {
        Some(root) if !root.as_os_str().is_empty() => root,
        _ => std::env::current_dir()?,
    };

    Ok(AppPaths::for_root(root))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn explicit_root_is_used_verbatim() {
        let paths = resolve_root(Some(PathBuf::from("/srv/app")), false).expect("root resolves");
        assert_eq!(paths.settings_file(), Path::new("/srv/app/.claude/settings.json"));
    }

    #[test]
    fn empty_root_falls_back_to_current_dir() {
        let cwd = std::env::current_dir().expect("cwd");
        let paths = resolve_root(Some(PathBuf::new()), false).expect("root resolves");
        assert_eq!(paths.claude_dir(), cwd.join(".claude"));
    }
}
