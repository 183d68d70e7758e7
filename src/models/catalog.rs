//! Model catalog and notification records
//!
//! Provider-neutral shapes returned by the catalog client and the
//! notification publisher, plus the text rendering used by the CLI.

use std::fmt;

/// Summary of a hosted foundation model
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModelSummary {
    pub model_id: String,
    pub model_name: String,
    pub provider_name: Option<String>,
    pub input_modalities: Vec<String>,
    pub output_modalities: Vec<String>,
}

impl fmt::Display for ModelSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Model ID: {}", self.model_id)?;
        writeln!(f, "Model Name: {}", self.model_name)?;
        writeln!(
            f,
            "Provider: {}",
            self.provider_name.as_deref().unwrap_or("N/A")
        )?;
        writeln!(f, "Input Modalities: [{}]", self.input_modalities.join(", "))?;
        write!(f, "Output Modalities: [{}]", self.output_modalities.join(", "))
    }
}

/// Render a model listing for the given region
pub fn render_model_listing(region: &str, models: &[ModelSummary]) -> String {
    let mut out = format!("Region : {}\n", region);
    out.push_str("Available Foundation Models:\n");
    out.push_str(&"-".repeat(50));
    out.push('\n');
    for model in models {
        out.push_str(&model.to_string());
        out.push('\n');
        out.push_str(&"-".repeat(30));
        out.push('\n');
    }
    out
}

/// Acknowledgement returned after publishing a notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReceipt {
    pub message_id: String,
}
