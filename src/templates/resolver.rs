use std::path::PathBuf;

use tracing::{debug, trace};

use crate::config::{AppPaths, CATEGORIES};

/// Finds the template file for `name`.
///
/// The flat templates directory is checked first, then each category in
/// [`CATEGORIES`] order. The first existing file wins.
pub fn resolve(paths: &AppPaths, name: &str) -> Option<PathBuf> {
    let candidates = std::iter::once(paths.flat_template(name)).chain(
        CATEGORIES
            .iter()
            .map(|category| paths.category_template(category, name)),
    );

    for candidate in candidates {
        trace!(path = %candidate.display(), "probing template");
        if candidate.is_file() {
            debug!(template = name, path = %candidate.display(), "resolved template");
            return Some(candidate);
        }
    }

    debug!(template = name, "template not found");
    None
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use super::*;

    fn write(path: &Path, body: &str) {
        fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        fs::write(path, body).expect("write");
    }

    #[test]
    fn flat_location_shadows_categories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = AppPaths::for_root(dir.path());
        write(&paths.flat_template("dev-full"), "{}");
        write(&paths.category_template("development", "dev-full"), "{}");

        assert_eq!(resolve(&paths, "dev-full"), Some(paths.flat_template("dev-full")));
    }

    #[test]
    fn earlier_category_wins() {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = AppPaths::for_root(dir.path());
        write(&paths.category_template("production", "shared"), "{}");
        write(&paths.category_template("testing", "shared"), "{}");

        assert_eq!(
            resolve(&paths, "shared"),
            Some(paths.category_template("testing", "shared"))
        );
    }

    #[test]
    fn finds_template_in_last_category() {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = AppPaths::for_root(dir.path());
        write(&paths.category_template("specialized", "audit"), "{}");

        assert_eq!(
            resolve(&paths, "audit"),
            Some(paths.category_template("specialized", "audit"))
        );
    }

    #[test]
    fn missing_everywhere_is_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = AppPaths::for_root(dir.path());
        write(&paths.category_template("development", "dev-full"), "{}");

        assert_eq!(resolve(&paths, "dev"), None);
    }
}
