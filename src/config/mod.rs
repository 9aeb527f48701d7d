pub mod paths;
pub mod root;

pub use paths::AppPaths;
pub use root::resolve_root;

/// Template categories, in resolution and listing order.
pub const CATEGORIES: [&str; 4] = ["development", "testing", "production", "specialized"];

pub const TEMPLATE_EXTENSION: &str = "json";
