//! JSON reporter: the full result, machine-readable.

use super::Reporter;
use crate::pipeline::AssessmentResult;

pub struct JsonReporter {
    pub pretty: bool,
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, result: &AssessmentResult) -> Result<String, String> {
        if self.pretty {
            serde_json::to_string_pretty(result).map_err(|e| e.to_string())
        } else {
            serde_json::to_string(result).map_err(|e| e.to_string())
        }
    }
}
