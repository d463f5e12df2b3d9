use crate::application::dto::EnumerationResponse;
use crate::dependency_discovery::domain::Dependency;
use crate::ports::outbound::DependencyFormatter;
use crate::shared::Result;

/// Markdown table header for dependency information
const TABLE_HEADER: &str = "| Package | Version | Checkout Path | Homepage |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|---------|---------|---------------|----------|\n";

/// MarkdownFormatter adapter for a human-readable dependency report
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn format_homepage(homepage: Option<&str>) -> String {
        match homepage {
            Some(url) => format!("[{}]({})", Self::escape_markdown_table_cell(url), url),
            None => "N/A".to_string(),
        }
    }

    fn render_header(&self, output: &mut String, response: &EnumerationResponse) {
        output.push_str("# Swift Package Dependencies\n\n");
        output.push_str(&format!(
            "- Project: `{}`\n- Source: `{}`\n- Generated: {}\n\n",
            response.project_root.display(),
            response.source_type,
            response.generated_at.to_rfc3339()
        ));
    }

    fn render_dependencies(&self, output: &mut String, dependencies: &[Dependency]) {
        output.push_str("## Dependencies\n\n");
        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);

        for dependency in dependencies {
            let path = dependency
                .path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "N/A".to_string());

            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(dependency.name()),
                Self::escape_markdown_table_cell(dependency.version().unwrap_or("N/A")),
                Self::escape_markdown_table_cell(&path),
                Self::format_homepage(dependency.homepage()),
            ));
        }
        output.push('\n');
    }

    fn render_errors(&self, output: &mut String, dependencies: &[Dependency]) {
        let failed: Vec<&Dependency> = dependencies.iter().filter(|d| d.has_errors()).collect();
        if failed.is_empty() {
            return;
        }

        output.push_str("## Errors\n\n");
        for dependency in failed {
            for error in dependency.errors() {
                output.push_str(&format!("- **{}**: {}\n", dependency.name(), error));
            }
        }
        output.push('\n');
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyFormatter for MarkdownFormatter {
    fn format(&self, response: &EnumerationResponse) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, response);

        if !response.active {
            output.push_str("_The swift source does not apply to this project._\n");
            return Ok(output);
        }

        self.render_dependencies(&mut output, &response.dependencies);
        self.render_errors(&mut output, &response.dependencies);
        Ok(output)
    }
}
