//! World Analysis Service - LLM-backed world description analysis
//!
//! Takes a free-text world description and asks the LLM to propose attribute
//! and skill templates for it. The model is instructed to answer with a
//! single JSON object; the first JSON object found in the raw completion is
//! deserialized into [`WorldAnalysis`].

use serde::{Deserialize, Serialize};

use crate::application::ports::outbound::LlmPort;
use crate::domain::value_objects::Difficulty;

/// Attribute template proposed for a world
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeSuggestion {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Skill template proposed for a world
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillSuggestion {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub description: Option<String>,
}

/// Structured result of analyzing a world description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldAnalysis {
    pub attributes: Vec<AttributeSuggestion>,
    pub skills: Vec<SkillSuggestion>,
}

/// Errors that can occur while analyzing a world description
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// Error from the underlying LLM client
    #[error("LLM error: {0}")]
    Llm(String),
    /// Error parsing the LLM response
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Service that derives attribute/skill suggestions from a world description
pub struct WorldAnalysisService<L: LlmPort> {
    llm: L,
}

impl<L: LlmPort> WorldAnalysisService<L> {
    pub fn new(llm: L) -> Self {
        Self { llm }
    }

    /// Analyze a world description into attribute and skill suggestions
    ///
    /// The caller is responsible for rejecting blank input before this is
    /// invoked; the service assumes a meaningful description.
    pub async fn analyze_world_description(
        &self,
        description: &str,
    ) -> Result<WorldAnalysis, AnalysisError> {
        let prompt = self.build_analysis_prompt(description);

        let response = self
            .llm
            .generate_content(&prompt)
            .await
            .map_err(|e| AnalysisError::Llm(e.to_string()))?;

        self.parse_analysis(&response.content)
    }

    /// Build the instruction prompt for the analysis call
    fn build_analysis_prompt(&self, description: &str) -> String {
        let mut prompt = String::new();

        prompt.push_str(
            "You are a tabletop RPG world designer. Analyze the following world \
             description and propose the attribute and skill templates that \
             characters in this world should have.\n\n",
        );
        prompt.push_str("WORLD DESCRIPTION:\n");
        prompt.push_str(description);
        prompt.push_str("\n\n");
        prompt.push_str(
            "Respond with a single JSON object and nothing else, in this shape:\n",
        );
        prompt.push_str(
            "{\"attributes\": [{\"name\": \"...\", \"category\": \"...\"}], \
             \"skills\": [{\"name\": \"...\", \"category\": \"...\", \
             \"difficulty\": \"easy|medium|hard\"}]}\n",
        );
        prompt.push_str("Propose 4-8 attributes and 6-12 skills fitting the setting.\n");

        prompt
    }

    /// Parse the model's raw completion into a structured analysis
    fn parse_analysis(&self, content: &str) -> Result<WorldAnalysis, AnalysisError> {
        let json = extract_json_object(content).ok_or_else(|| {
            AnalysisError::Parse("No JSON object found in LLM response".to_string())
        })?;

        serde_json::from_str(json).map_err(|e| AnalysisError::Parse(e.to_string()))
    }
}

/// Extract the first top-level JSON object from free-form model output
///
/// Models wrap JSON in prose or code fences often enough that a plain
/// `from_str` on the whole completion is unreliable.
pub(crate) fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if start >= end {
        return None;
    }
    Some(&text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::outbound::GeneratedContent;

    /// Mock LLM returning a canned completion
    struct MockLlm {
        content: String,
    }

    #[async_trait::async_trait]
    impl LlmPort for MockLlm {
        type Error = std::io::Error;

        async fn generate_content(
            &self,
            _prompt: &str,
        ) -> Result<GeneratedContent, Self::Error> {
            Ok(GeneratedContent {
                content: self.content.clone(),
                finish_reason: "stop".to_string(),
                prompt_tokens: 10,
                completion_tokens: 20,
            })
        }
    }

    /// Mock LLM that always fails
    struct FailingLlm;

    #[async_trait::async_trait]
    impl LlmPort for FailingLlm {
        type Error = std::io::Error;

        async fn generate_content(
            &self,
            _prompt: &str,
        ) -> Result<GeneratedContent, Self::Error> {
            Err(std::io::Error::other("model unavailable"))
        }
    }

    #[tokio::test]
    async fn parses_json_wrapped_in_prose() {
        let service = WorldAnalysisService::new(MockLlm {
            content: r#"Here is my analysis:
{"attributes": [{"name": "Grit", "category": "Physical"}],
 "skills": [{"name": "Tracking", "category": "Survival", "difficulty": "hard"}]}
Hope this helps!"#
                .to_string(),
        });

        let analysis = service
            .analyze_world_description("A frozen frontier")
            .await
            .unwrap();

        assert_eq!(analysis.attributes.len(), 1);
        assert_eq!(analysis.attributes[0].name, "Grit");
        assert_eq!(analysis.skills[0].difficulty, Difficulty::Hard);
    }

    #[tokio::test]
    async fn missing_difficulty_defaults_to_medium() {
        let service = WorldAnalysisService::new(MockLlm {
            content: r#"{"attributes": [], "skills": [{"name": "Haggling", "category": "Social"}]}"#
                .to_string(),
        });

        let analysis = service
            .analyze_world_description("A merchant republic")
            .await
            .unwrap();

        assert_eq!(analysis.skills[0].difficulty, Difficulty::Medium);
    }

    #[tokio::test]
    async fn non_json_response_is_a_parse_error() {
        let service = WorldAnalysisService::new(MockLlm {
            content: "I cannot help with that.".to_string(),
        });

        let err = service
            .analyze_world_description("A world")
            .await
            .unwrap_err();

        assert!(matches!(err, AnalysisError::Parse(_)));
    }

    #[tokio::test]
    async fn llm_failure_carries_the_underlying_message() {
        let service = WorldAnalysisService::new(FailingLlm);

        let err = service
            .analyze_world_description("A world")
            .await
            .unwrap_err();

        match err {
            AnalysisError::Llm(msg) => assert_eq!(msg, "model unavailable"),
            other => panic!("Expected Llm error, got {:?}", other),
        }
    }

    #[test]
    fn extract_json_object_handles_fences_and_garbage() {
        assert_eq!(
            extract_json_object("```json\n{\"a\": 1}\n```"),
            Some("{\"a\": 1}")
        );
        assert_eq!(extract_json_object("no json here"), None);
        assert_eq!(extract_json_object("} backwards {"), None);
    }
}
