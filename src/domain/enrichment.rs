//! Character sheet enrichment
//!
//! Derives display-ready attribute and skill records by merging a character's
//! entries with its world's templates. A character entry resolves to a world
//! template by explicit link id when one is present, otherwise by exact name.
//! An entry with no match is normal: it falls back to the character's own
//! category, then to "General" (and `Difficulty::Medium` for skills).
//!
//! Enriched records are computed on demand for rendering and never persisted.

use crate::domain::entities::{
    AttributeDefinition, Character, SkillDefinition, World,
};
use crate::domain::value_objects::{AttributeId, Difficulty, SkillId};

/// Category used when neither the world nor the character names one
pub const DEFAULT_CATEGORY: &str = "General";

/// Display-ready attribute record
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedAttribute {
    pub id: AttributeId,
    pub name: String,
    pub base_value: i32,
    pub modified_value: i32,
    pub category: String,
}

/// Display-ready skill record
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedSkill {
    pub id: SkillId,
    pub name: String,
    pub level: i32,
    pub category: String,
    pub difficulty: Difficulty,
}

/// Shape shared by the world's attribute and skill templates
///
/// The id-then-name resolution lives in one place so attribute and skill
/// enrichment cannot drift in tie-break behavior.
trait Template {
    type Id: PartialEq + Copy;

    fn id(&self) -> Self::Id;
    fn name(&self) -> &str;
}

impl Template for AttributeDefinition {
    type Id = AttributeId;

    fn id(&self) -> AttributeId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Template for SkillDefinition {
    type Id = SkillId;

    fn id(&self) -> SkillId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Resolve a character entry against the world's templates
///
/// An explicit link id always wins over a name match, even when a name match
/// also exists. This guards against two templates sharing a display name. A
/// linked entry whose id matches nothing resolves to nothing; there is no
/// name fallback for stale links. Name matching is exact and case-sensitive.
fn resolve_template<'a, T: Template>(
    templates: &'a [T],
    link: Option<T::Id>,
    name: &str,
) -> Option<&'a T> {
    if let Some(id) = link {
        return templates.iter().find(|t| t.id() == id);
    }
    templates.iter().find(|t| t.name() == name)
}

/// Enrich a character's attributes with world-level categories
///
/// Output preserves the character's attribute order and length. Inputs are
/// not mutated.
pub fn enrich_attributes(character: &Character, world: &World) -> Vec<EnrichedAttribute> {
    character
        .attributes
        .iter()
        .map(|attr| {
            let template =
                resolve_template(&world.attributes, attr.world_attribute_id, &attr.name);
            let category = template
                .map(|t| t.category.clone())
                .or_else(|| attr.category.clone())
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

            EnrichedAttribute {
                id: attr.id,
                name: attr.name.clone(),
                base_value: attr.base_value,
                modified_value: attr.modified_value,
                category,
            }
        })
        .collect()
}

/// Enrich a character's skills with world-level categories and difficulties
///
/// Same resolution strategy as attributes; difficulty additionally defaults
/// to medium when no world skill is found.
pub fn enrich_skills(character: &Character, world: &World) -> Vec<EnrichedSkill> {
    character
        .skills
        .iter()
        .map(|skill| {
            let template = resolve_template(&world.skills, skill.world_skill_id, &skill.name);
            let category = template
                .map(|t| t.category.clone())
                .or_else(|| skill.category.clone())
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
            let difficulty = template.map(|t| t.difficulty).unwrap_or_default();

            EnrichedSkill {
                id: skill.id,
                name: skill.name.clone(),
                level: skill.level,
                category,
                difficulty,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{CharacterAttribute, CharacterSkill};

    fn sample_world() -> World {
        World::new("Ashfall")
            .with_attribute(AttributeDefinition::new("Strength", "Physical"))
            .with_attribute(AttributeDefinition::new("Cunning", "Mental"))
            .with_skill(SkillDefinition::new("Swordplay", "Combat", Difficulty::Hard))
            .with_skill(SkillDefinition::new("Haggling", "Social", Difficulty::Easy))
    }

    #[test]
    fn attributes_preserve_order_and_length() {
        let world = sample_world();
        let character = Character::new(world.id, "Mira")
            .with_attribute(CharacterAttribute::new("Cunning", 14))
            .with_attribute(CharacterAttribute::new("Strength", 9))
            .with_attribute(CharacterAttribute::new("Luck", 11));

        let enriched = enrich_attributes(&character, &world);

        assert_eq!(enriched.len(), character.attributes.len());
        let names: Vec<_> = enriched.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Cunning", "Strength", "Luck"]);
    }

    #[test]
    fn link_id_wins_over_name_collision() {
        let mut world = sample_world();
        // Two templates sharing a display name; only the id disambiguates
        let shadow = AttributeDefinition::new("Strength", "Spiritual");
        let shadow_id = shadow.id;
        world.attributes.push(shadow);

        let character = Character::new(world.id, "Mira")
            .with_attribute(CharacterAttribute::new("Strength", 9).linked_to(shadow_id));

        let enriched = enrich_attributes(&character, &world);
        assert_eq!(enriched[0].category, "Spiritual");
    }

    #[test]
    fn name_fallback_when_unlinked() {
        let world = sample_world();
        let character = Character::new(world.id, "Mira")
            .with_attribute(CharacterAttribute::new("Cunning", 14));

        let enriched = enrich_attributes(&character, &world);
        assert_eq!(enriched[0].category, "Mental");
    }

    #[test]
    fn name_matching_is_case_sensitive() {
        let world = sample_world();
        let character = Character::new(world.id, "Mira")
            .with_attribute(CharacterAttribute::new("cunning", 14));

        let enriched = enrich_attributes(&character, &world);
        assert_eq!(enriched[0].category, DEFAULT_CATEGORY);
    }

    #[test]
    fn stale_link_does_not_fall_back_to_name() {
        let world = sample_world();
        // Linked to an id the world no longer defines, even though the name
        // would match a template
        let character = Character::new(world.id, "Mira").with_attribute(
            CharacterAttribute::new("Strength", 9).linked_to(AttributeId::new()),
        );

        let enriched = enrich_attributes(&character, &world);
        assert_eq!(enriched[0].category, DEFAULT_CATEGORY);
    }

    #[test]
    fn unmatched_attribute_prefers_own_category() {
        let world = sample_world();
        let character = Character::new(world.id, "Mira")
            .with_attribute(CharacterAttribute::new("Luck", 11).with_category("Fate"));

        let enriched = enrich_attributes(&character, &world);
        assert_eq!(enriched[0].category, "Fate");
    }

    #[test]
    fn unmatched_attribute_defaults_to_general() {
        let world = sample_world();
        let character =
            Character::new(world.id, "Mira").with_attribute(CharacterAttribute::new("Luck", 11));

        let enriched = enrich_attributes(&character, &world);
        assert_eq!(enriched[0].category, DEFAULT_CATEGORY);
    }

    #[test]
    fn attribute_values_carry_through() {
        let world = sample_world();
        let character = Character::new(world.id, "Mira").with_attribute(
            CharacterAttribute::new("Strength", 9).with_modified_value(12),
        );

        let enriched = enrich_attributes(&character, &world);
        assert_eq!(enriched[0].base_value, 9);
        assert_eq!(enriched[0].modified_value, 12);
    }

    #[test]
    fn skills_resolve_difficulty_from_world() {
        let world = sample_world();
        let character = Character::new(world.id, "Mira")
            .with_skill(CharacterSkill::new("Swordplay", 3))
            .with_skill(CharacterSkill::new("Haggling", 1));

        let enriched = enrich_skills(&character, &world);
        assert_eq!(enriched[0].difficulty, Difficulty::Hard);
        assert_eq!(enriched[0].category, "Combat");
        assert_eq!(enriched[1].difficulty, Difficulty::Easy);
        assert_eq!(enriched[1].category, "Social");
    }

    #[test]
    fn unmatched_skill_defaults_to_medium_and_general() {
        let world = sample_world();
        let character =
            Character::new(world.id, "Mira").with_skill(CharacterSkill::new("Whittling", 2));

        let enriched = enrich_skills(&character, &world);
        assert_eq!(enriched[0].difficulty, Difficulty::Medium);
        assert_eq!(enriched[0].category, DEFAULT_CATEGORY);
    }

    #[test]
    fn skill_link_id_wins_over_name_collision() {
        let mut world = sample_world();
        let shadow = SkillDefinition::new("Swordplay", "Ceremonial", Difficulty::Easy);
        let shadow_id = shadow.id;
        world.skills.push(shadow);

        let character = Character::new(world.id, "Mira")
            .with_skill(CharacterSkill::new("Swordplay", 3).linked_to(shadow_id));

        let enriched = enrich_skills(&character, &world);
        assert_eq!(enriched[0].category, "Ceremonial");
        assert_eq!(enriched[0].difficulty, Difficulty::Easy);
    }

    #[test]
    fn skills_preserve_order_and_length() {
        let world = sample_world();
        let character = Character::new(world.id, "Mira")
            .with_skill(CharacterSkill::new("Haggling", 1))
            .with_skill(CharacterSkill::new("Whittling", 2))
            .with_skill(CharacterSkill::new("Swordplay", 3));

        let enriched = enrich_skills(&character, &world);
        assert_eq!(enriched.len(), 3);
        let names: Vec<_> = enriched.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Haggling", "Whittling", "Swordplay"]);
    }

    #[test]
    fn inputs_are_not_mutated() {
        let world = sample_world();
        let character = Character::new(world.id, "Mira")
            .with_attribute(CharacterAttribute::new("Strength", 9))
            .with_skill(CharacterSkill::new("Swordplay", 3));

        let _ = enrich_attributes(&character, &world);
        let _ = enrich_skills(&character, &world);

        assert_eq!(character.attributes[0].category, None);
        assert_eq!(character.skills[0].category, None);
        assert_eq!(world.attributes.len(), 2);
        assert_eq!(world.skills.len(), 2);
    }
}
