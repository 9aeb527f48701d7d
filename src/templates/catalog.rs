use std::fs;

use serde::Serialize;
use tracing::debug;

use crate::config::{AppPaths, CATEGORIES, TEMPLATE_EXTENSION};
use crate::error::AppResult;

#[derive(Debug, Clone, Default, Serialize)]
pub struct TemplateCatalog {
    pub categories: Vec<CategoryListing>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryListing {
    pub category: String,
    pub templates: Vec<String>,
}

impl TemplateCatalog {
    /// Scans the category directories. The flat templates directory is not
    /// enumerated, and template names keep directory enumeration order.
    pub fn scan(paths: &AppPaths) -> AppResult<Self> {
        let mut categories = Vec::new();

        for category in CATEGORIES {
            let dir = paths.category_dir(category);
            if !dir.is_dir() {
                debug!(category, "skipping missing category directory");
                continue;
            }

            let mut templates = Vec::new();
            for entry in fs::read_dir(&dir)? {
                let file_name = entry?.file_name();
                if let Some(name) = template_name(&file_name.to_string_lossy()) {
                    templates.push(name.to_string());
                }
            }

            categories.push(CategoryListing {
                category: category.to_string(),
                templates,
            });
        }

        Ok(Self { categories })
    }
}

fn template_name(file_name: &str) -> Option<&str> {
    file_name
        .strip_suffix(TEMPLATE_EXTENSION)
        .and_then(|stem| stem.strip_suffix('.'))
}
