//! Character Generation Service - LLM-backed character creation
//!
//! Two entry points: raw prompt-based generation, which hands the model's
//! completion straight back to the caller, and world-based generation, which
//! builds a world-aware prompt, parses the model's JSON draft, and reconciles
//! the draft against the world's attribute/skill templates.

use serde::Deserialize;

use crate::application::ports::outbound::{GeneratedContent, LlmPort};
use crate::application::services::analysis_service::extract_json_object;
use crate::domain::entities::{
    Character, CharacterAttribute, CharacterSkill, World, DEFAULT_CHARACTER_TYPE,
};

/// Request for world-based character generation
#[derive(Debug, Clone)]
pub struct GenerateCharacterRequest {
    pub world: World,
    /// Names already taken in this world, to steer the model away from collisions
    pub existing_names: Vec<String>,
    pub suggested_name: Option<String>,
    /// Free-form tag recorded on the character ("original" when unspecified)
    pub character_type: Option<String>,
}

/// Errors that can occur while generating characters
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// Error from the underlying LLM client
    #[error("LLM error: {0}")]
    Llm(String),
    /// Error parsing the LLM response
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Draft character as the model emits it, before reconciliation
#[derive(Debug, Deserialize)]
struct CharacterDraft {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    attributes: Vec<DraftEntry>,
    #[serde(default)]
    skills: Vec<DraftEntry>,
}

#[derive(Debug, Deserialize)]
struct DraftEntry {
    name: String,
    #[serde(default)]
    value: Option<i32>,
    #[serde(default)]
    category: Option<String>,
}

/// Default value for attributes the model leaves out
const DEFAULT_ATTRIBUTE_VALUE: i32 = 10;
/// Default level for skills the model leaves out
const DEFAULT_SKILL_LEVEL: i32 = 0;

/// Service for generating characters with an LLM
pub struct CharacterGenerationService<L: LlmPort> {
    llm: L,
}

impl<L: LlmPort> CharacterGenerationService<L> {
    pub fn new(llm: L) -> Self {
        Self { llm }
    }

    /// Generate raw content from a free-text prompt
    ///
    /// The completion is returned unprocessed along with its token and
    /// finish-reason metadata.
    pub async fn generate_from_prompt(
        &self,
        prompt: &str,
    ) -> Result<GeneratedContent, GenerationError> {
        self.llm
            .generate_content(prompt)
            .await
            .map_err(|e| GenerationError::Llm(e.to_string()))
    }

    /// Generate a character that fits the given world
    pub async fn generate_character(
        &self,
        request: GenerateCharacterRequest,
    ) -> Result<Character, GenerationError> {
        let prompt = self.build_character_prompt(&request);

        let response = self
            .llm
            .generate_content(&prompt)
            .await
            .map_err(|e| GenerationError::Llm(e.to_string()))?;

        let draft = self.parse_draft(&response.content)?;
        Ok(self.reconcile(draft, &request))
    }

    /// Build the instruction prompt for world-based generation
    fn build_character_prompt(&self, request: &GenerateCharacterRequest) -> String {
        let world = &request.world;
        let mut prompt = String::new();

        prompt.push_str(&format!(
            "You are creating a character for the world \"{}\".\n",
            world.name
        ));
        if !world.description.is_empty() {
            prompt.push_str(&format!("WORLD DESCRIPTION: {}\n", world.description));
        }
        prompt.push('\n');

        if !world.attributes.is_empty() {
            prompt.push_str("ATTRIBUTES (assign a value 1-20 to each):\n");
            for attr in &world.attributes {
                prompt.push_str(&format!("- {} ({})\n", attr.name, attr.category));
            }
            prompt.push('\n');
        }

        if !world.skills.is_empty() {
            prompt.push_str("SKILLS (assign a level 0-10 to each):\n");
            for skill in &world.skills {
                prompt.push_str(&format!(
                    "- {} ({}, {})\n",
                    skill.name, skill.category, skill.difficulty
                ));
            }
            prompt.push('\n');
        }

        match &request.suggested_name {
            Some(name) => {
                prompt.push_str(&format!("Name the character \"{}\".\n", name));
            }
            None => {
                prompt.push_str("Invent a fitting name for the character.\n");
            }
        }

        if !request.existing_names.is_empty() {
            prompt.push_str(&format!(
                "These names are already taken, do not reuse them: {}\n",
                request.existing_names.join(", ")
            ));
        }

        prompt.push_str(
            "\nRespond with a single JSON object and nothing else, in this shape:\n\
             {\"name\": \"...\", \"description\": \"...\", \
             \"attributes\": [{\"name\": \"...\", \"value\": 10}], \
             \"skills\": [{\"name\": \"...\", \"value\": 2}]}\n",
        );

        prompt
    }

    /// Parse the model's raw completion into a draft character
    fn parse_draft(&self, content: &str) -> Result<CharacterDraft, GenerationError> {
        let json = extract_json_object(content).ok_or_else(|| {
            GenerationError::Parse("No JSON object found in LLM response".to_string())
        })?;

        serde_json::from_str(json).map_err(|e| GenerationError::Parse(e.to_string()))
    }

    /// Turn a draft into a Character linked to the world's templates
    ///
    /// World templates drive the entry list: every template becomes a linked
    /// entry, taking the draft's value when the model supplied one. Draft
    /// entries the world does not define are appended unlinked, so nothing
    /// the model invented is silently dropped.
    fn reconcile(&self, draft: CharacterDraft, request: &GenerateCharacterRequest) -> Character {
        let world = &request.world;
        let character_type = request
            .character_type
            .clone()
            .unwrap_or_else(|| DEFAULT_CHARACTER_TYPE.to_string());

        let mut character = Character::new(world.id, draft.name)
            .with_description(draft.description)
            .with_character_type(character_type);

        for template in &world.attributes {
            let value = draft
                .attributes
                .iter()
                .find(|e| e.name.eq_ignore_ascii_case(&template.name))
                .and_then(|e| e.value)
                .unwrap_or(DEFAULT_ATTRIBUTE_VALUE);

            character.attributes.push(
                CharacterAttribute::new(template.name.clone(), value).linked_to(template.id),
            );
        }

        for entry in &draft.attributes {
            let known = world
                .attributes
                .iter()
                .any(|t| t.name.eq_ignore_ascii_case(&entry.name));
            if !known {
                let mut attr = CharacterAttribute::new(
                    entry.name.clone(),
                    entry.value.unwrap_or(DEFAULT_ATTRIBUTE_VALUE),
                );
                attr.category = entry.category.clone();
                character.attributes.push(attr);
            }
        }

        for template in &world.skills {
            let level = draft
                .skills
                .iter()
                .find(|e| e.name.eq_ignore_ascii_case(&template.name))
                .and_then(|e| e.value)
                .unwrap_or(DEFAULT_SKILL_LEVEL);

            character
                .skills
                .push(CharacterSkill::new(template.name.clone(), level).linked_to(template.id));
        }

        for entry in &draft.skills {
            let known = world
                .skills
                .iter()
                .any(|t| t.name.eq_ignore_ascii_case(&entry.name));
            if !known {
                let mut skill = CharacterSkill::new(
                    entry.name.clone(),
                    entry.value.unwrap_or(DEFAULT_SKILL_LEVEL),
                );
                skill.category = entry.category.clone();
                character.skills.push(skill);
            }
        }

        character
    }
}
