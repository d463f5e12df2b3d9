use crate::application::dto::EnumerationResponse;
use crate::shared::Result;

/// DependencyFormatter port for rendering an enumeration
///
/// This port abstracts the formatting logic for different output
/// formats (JSON, Markdown, etc.).
pub trait DependencyFormatter {
    /// Formats an enumeration response
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format(&self, response: &EnumerationResponse) -> Result<String>;
}
