use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::OutputSchema;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub system_instruction: String,
    pub output_schema: Option<OutputSchema>,
    pub temperature: Option<f64>,
    pub model_id: Option<String>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, system_instruction: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system_instruction: system_instruction.into(),
            output_schema: None,
            temperature: None,
            model_id: None,
        }
    }

    pub fn with_schema(mut self, schema: OutputSchema) -> Self {
        self.output_schema = Some(schema);
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    pub fn is_schema_mode(&self) -> bool {
        self.output_schema.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GenerationResult {
    Structured(Value),
    Text(String),
}

impl GenerationResult {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            GenerationResult::Text(text) => Some(text),
            GenerationResult::Structured(_) => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            GenerationResult::Text(text) => Some(text),
            GenerationResult::Structured(_) => None,
        }
    }

    pub fn into_structured(self) -> Option<Value> {
        match self {
            GenerationResult::Structured(value) => Some(value),
            GenerationResult::Text(_) => None,
        }
    }
}

/// Splits a numbered-list answer into steps, dropping the `1.` style prefixes.
pub fn numbered_steps(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let digits = line.chars().take_while(char::is_ascii_digit).count();
            match line[digits..].strip_prefix('.') {
                Some(rest) if digits > 0 => rest.trim_start().to_string(),
                _ => line.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let request = GenerationRequest::new("Optimize a route", "You are a logistics expert.")
            .with_temperature(0.2)
            .with_model("gemini-2.5-pro");
        assert_eq!(request.temperature, Some(0.2));
        assert_eq!(request.model_id.as_deref(), Some("gemini-2.5-pro"));
        assert!(!request.is_schema_mode());
    }

    #[test]
    fn test_numbered_steps() {
        let text = "1. Jl. Melawai No. 12\n2.  Apt. Senopati Unit 5B\n\nDrive safe";
        assert_eq!(
            numbered_steps(text),
            vec!["Jl. Melawai No. 12", "Apt. Senopati Unit 5B", "Drive safe"]
        );
    }

    #[test]
    fn test_numbered_steps_keeps_lines_without_number_prefix() {
        assert_eq!(numbered_steps(".5 kg rice"), vec![".5 kg rice"]);
        assert_eq!(numbered_steps("Jl. Melawai 12"), vec!["Jl. Melawai 12"]);
    }

    #[test]
    fn test_numbered_steps_strips_any_leading_number() {
        assert_eq!(numbered_steps("2024. A good year"), vec!["A good year"]);
    }

    #[test]
    fn test_result_accessors() {
        let text = GenerationResult::Text("Nasi Goreng".into());
        assert_eq!(text.as_text(), Some("Nasi Goreng"));
        assert_eq!(text.clone().into_structured(), None);
        assert_eq!(text.into_text().as_deref(), Some("Nasi Goreng"));
    }
}
