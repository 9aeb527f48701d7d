use crate::context::AppContext;
use crate::error::AppResult;
use crate::output::{Marker, header, marked};
use crate::templates::TemplateCatalog;

pub fn run(ctx: &AppContext) -> AppResult<()> {
    let catalog = TemplateCatalog::scan(&ctx.paths)?;
    ctx.output.emit(&render(&catalog), &catalog)
}

pub fn render(catalog: &TemplateCatalog) -> Vec<String> {
    let mut lines = vec![marked(Marker::Info, "Available templates:"), String::new()];

    for listing in &catalog.categories {
        let title = format!("{}:", listing.category.to_uppercase());
        lines.push(format!("  {}", header(&title)));
        lines.extend(
            listing
                .templates
                .iter()
                .map(|template| format!("    - {template}")),
        );
        lines.push(String::new());
    }

    lines
}
