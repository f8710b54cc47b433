//! Query refinement suggestions and active-filter labels.

use crate::types::EntityRecord;

/// Most suggestions ever returned for one query.
pub const MAX_SUGGESTIONS: usize = 5;

/// Propose refined queries based on which entity categories are present.
///
/// Rules fire independently and their output is concatenated in rule
/// order, truncated to [`MAX_SUGGESTIONS`]:
///
/// 1. trait but no pet type: suggest adding "dog" / "cat";
/// 2. color but no pet type: suggest adding "puppy" / "kitten";
/// 3. pet type with neither trait nor color: suggest adding a temperament.
///
/// Queries shorter than two characters get no suggestions.
pub fn suggest(query: &str, entities: &EntityRecord) -> Vec<String> {
    let query = query.trim();
    if query.chars().count() < 2 {
        return Vec::new();
    }

    let mut suggestions = Vec::new();

    let has_trait = !entities.traits.is_empty();
    let has_color = !entities.colors.is_empty();
    let has_pet_type = entities.pet_type.is_some();

    if has_trait && !has_pet_type {
        suggestions.push(format!("{query} dog"));
        suggestions.push(format!("{query} cat"));
    }

    if has_color && !has_pet_type {
        suggestions.push(format!("{query} puppy"));
        suggestions.push(format!("{query} kitten"));
    }

    if has_pet_type && !has_trait && !has_color {
        suggestions.push(format!("{query} friendly"));
        suggestions.push(format!("{query} playful"));
        suggestions.push(format!("{query} calm"));
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

/// Human-readable labels for every populated entity category.
///
/// One label per category in the fixed order type, color, size, traits,
/// age, breed; multi-valued categories are comma-joined. Total over any
/// record: a populated category is never omitted.
pub fn describe(entities: &EntityRecord) -> Vec<String> {
    let mut labels = Vec::new();

    if let Some(pet_type) = &entities.pet_type {
        labels.push(format!("Type: {}", title_case(pet_type)));
    }

    if !entities.colors.is_empty() {
        labels.push(format!("Color: {}", title_case_list(&entities.colors)));
    }

    if let Some(size) = &entities.size {
        labels.push(format!("Size: {}", title_case(size)));
    }

    if !entities.traits.is_empty() {
        labels.push(format!("Traits: {}", title_case_list(&entities.traits)));
    }

    if let Some(age) = &entities.age {
        labels.push(format!("Age: {}", title_case(age)));
    }

    if let Some(breed) = &entities.breed {
        labels.push(format!("Breed: {}", title_case(breed)));
    }

    labels
}

fn title_case_list(values: &[String]) -> String {
    values
        .iter()
        .map(|v| title_case(v))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Capitalize the first letter of each whitespace-separated word.
fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entities(
        pet_type: Option<&str>,
        colors: &[&str],
        traits: &[&str],
    ) -> EntityRecord {
        EntityRecord {
            pet_type: pet_type.map(str::to_string),
            colors: colors.iter().map(|c| c.to_string()).collect(),
            traits: traits.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn trait_without_pet_type_suggests_species() {
        let suggestions = suggest("friendly", &entities(None, &[], &["friendly"]));
        assert_eq!(suggestions, vec!["friendly dog", "friendly cat"]);
    }

    #[test]
    fn color_without_pet_type_suggests_young_animals() {
        let suggestions = suggest("black", &entities(None, &["black"], &[]));
        assert_eq!(suggestions, vec!["black puppy", "black kitten"]);
    }

    #[test]
    fn trait_and_color_trigger_both_rules_capped_at_five() {
        let suggestions = suggest("friendly black", &entities(None, &["black"], &["friendly"]));
        assert_eq!(
            suggestions,
            vec![
                "friendly black dog",
                "friendly black cat",
                "friendly black puppy",
                "friendly black kitten",
            ]
        );
        assert!(suggestions.len() <= MAX_SUGGESTIONS);
    }

    #[test]
    fn bare_pet_type_suggests_temperaments() {
        let suggestions = suggest("dog", &entities(Some("dog"), &[], &[]));
        assert_eq!(suggestions, vec!["dog friendly", "dog playful", "dog calm"]);
    }

    #[test]
    fn pet_type_with_trait_gets_no_suggestions() {
        let suggestions = suggest("friendly dog", &entities(Some("dog"), &[], &["friendly"]));
        assert!(suggestions.is_empty());
    }

    #[test]
    fn short_query_gets_no_suggestions() {
        // Even with extractable entities, a one-character query is too
        // little to refine.
        assert!(suggest("x", &entities(None, &[], &["friendly"])).is_empty());
        assert!(suggest("", &EntityRecord::empty()).is_empty());
    }

    #[test]
    fn describe_orders_and_title_cases() {
        let record = EntityRecord {
            pet_type: Some("dog".into()),
            colors: vec!["black".into(), "white".into()],
            ..Default::default()
        };
        assert_eq!(describe(&record), vec!["Type: Dog", "Color: Black, White"]);
    }

    #[test]
    fn describe_covers_every_populated_category() {
        let record = EntityRecord {
            pet_type: Some("cat".into()),
            colors: vec!["cream".into()],
            size: Some("small".into()),
            traits: vec!["calm".into(), "cuddly".into()],
            age: Some("senior".into()),
            breed: Some("maine coon".into()),
            keywords: vec!["indoor".into()],
        };
        assert_eq!(
            describe(&record),
            vec![
                "Type: Cat",
                "Color: Cream",
                "Size: Small",
                "Traits: Calm, Cuddly",
                "Age: Senior",
                "Breed: Maine Coon",
            ]
        );
    }

    #[test]
    fn describe_empty_record_is_empty() {
        assert!(describe(&EntityRecord::empty()).is_empty());
    }
}
