pub mod catalog;
pub mod resolver;

pub use catalog::{CategoryListing, TemplateCatalog};
pub use resolver::resolve;
