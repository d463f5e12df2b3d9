use crate::application::dto::EnumerationResponse;
use crate::ports::outbound::DependencyFormatter;
use crate::shared::Result;

/// JsonFormatter adapter for machine-readable output
///
/// Serializes the whole response; each dependency keeps the descriptor
/// shape (`name`, `version`, `path`, `errors`, `metadata.type`,
/// `metadata.homepage`) with absent values as `null`.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyFormatter for JsonFormatter {
    fn format(&self, response: &EnumerationResponse) -> Result<String> {
        let mut output = serde_json::to_string_pretty(response)
            .map_err(|e| anyhow::anyhow!("Failed to serialize dependencies to JSON: {}", e))?;
        output.push('\n');
        Ok(output)
    }
}
