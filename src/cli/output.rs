//! Output formatting utilities

use crate::domain::Page;

/// Format the page collection as one row per page
pub fn format_page_list(pages: &[Page]) -> String {
    if pages.is_empty() {
        return "No pages found".to_string();
    }

    let mut rows = Vec::new();
    for page in pages {
        rows.push(format!(
            "{}  {}  {}",
            page.updated_at.format("%Y-%m-%d %H:%M"),
            page.id,
            page.title
        ));
    }
    rows.join("\n")
}

/// Format a single page with its metadata header
pub fn format_page(page: &Page) -> String {
    format!(
        "Title: {}\nCreated: {}\nUpdated: {}\n\n{}",
        page.title,
        page.created_at.to_rfc3339(),
        page.updated_at.to_rfc3339(),
        page.content
    )
}
