pub mod gemini;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

pub use gemini::GeminiGenerator;

/// Event facts the provider turns into display copy.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct DescriptionInput {
    pub title: String,
    pub venue: String,
    pub start_date: String,
    pub end_date: String,
    pub cost_type: String,
}

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Google API Key not configured.")]
    NotConfigured,
    #[error("{0}")]
    Provider(String),
}

/// External generative-text provider behind a trait so handlers can be
/// exercised with a scripted implementation.
#[async_trait]
pub trait DescriptionGenerator: Send + Sync {
    async fn generate(&self, input: &DescriptionInput) -> Result<String, GeneratorError>;
}

pub(crate) fn build_prompt(input: &DescriptionInput) -> String {
    format!(
        "Generate an engaging event description for the following details:\n\n\
         Title: {}\nVenue: {}\nStart Date: {}\nEnd Date: {}\nCost: {}\n\n\
         Make it attractive, clear, and suitable for display on an event management platform.",
        input.title, input.venue, input.start_date, input.end_date, input.cost_type
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_carries_every_field() {
        let input = DescriptionInput {
            title: "Autumn Expo".to_string(),
            venue: "City Hall".to_string(),
            start_date: "2026-09-01".to_string(),
            end_date: "2026-09-02".to_string(),
            cost_type: "Free".to_string(),
        };
        let prompt = build_prompt(&input);
        assert!(prompt.contains("Title: Autumn Expo"));
        assert!(prompt.contains("Venue: City Hall"));
        assert!(prompt.contains("Start Date: 2026-09-01"));
        assert!(prompt.contains("End Date: 2026-09-02"));
        assert!(prompt.contains("Cost: Free"));
    }
}
