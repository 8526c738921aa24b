//! Markdown to HTML

use crate::error::ContentError;

/// Render a markdown body with GitHub-flavoured extensions
///
/// Raw HTML in the source is escaped, not passed through.
pub fn render_markdown(source: &str) -> Result<String, ContentError> {
    markdown::to_html_with_options(source, &markdown::Options::gfm()).map_err(|e| ContentError::Render(e.to_string()))
}
