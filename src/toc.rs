//! GitHub-flavored markdown anchor/slug generation for the typedef index.

/// Generate an index link for a heading title.
pub fn render_toc_link(text: &str) -> String {
    format!("[{}](#{})", text, github_slug(text))
}

/// Generate an index list item.
pub fn render_toc_item(title: &str) -> String {
    format!("* {}", render_toc_link(title))
}

/// GitHub heading anchor slug generation.
///
/// - lowercase
/// - drop everything that isn't alphanumeric, space, or hyphen
/// - replace spaces with hyphens
fn github_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() || c == ' ' || c == '-' {
            slug.push(c);
        }
    }
    slug.replace(' ', "-")
}
