//! Reporters: renderings of an assessment result.
//!
//! 3 formats: JSON, console, Markdown.

pub mod console;
pub mod json;
pub mod markdown;

use crate::pipeline::AssessmentResult;

/// Trait for report generation.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, result: &AssessmentResult) -> Result<String, String>;
}

/// Create a reporter by format name.
pub fn create_reporter(format: &str) -> Option<Box<dyn Reporter>> {
    match format {
        "json" => Some(Box::new(json::JsonReporter::default())),
        "console" => Some(Box::new(console::ConsoleReporter::default())),
        "markdown" | "md" => Some(Box::new(markdown::MarkdownReporter)),
        _ => None,
    }
}

/// List all available reporter format names.
pub fn available_formats() -> &'static [&'static str] {
    &["json", "console", "markdown"]
}

/// `0.734` → `73.4%`.
pub(crate) fn percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}
