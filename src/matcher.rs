//! Turns raw OCR text into candidate tokens and fuzzy-matches them against a
//! profile's ingredients.

use strsim::levenshtein;

use crate::config::MatchingConfig;
use crate::model::{Ingredient, ObservedTypes};
use crate::normalize::normalize_str;

/// Converts raw multi-line OCR text into normalized candidate tokens.
///
/// Blank-line pairs are collapsed, words of `min_token_len` characters or fewer
/// are dropped from every line, then each surviving line longer than
/// `min_token_len` is normalized. Tokens that normalize down to `min_token_len`
/// characters or fewer are dropped as well, so a line such as `"Eg."` that
/// survives the first length check yields no token. Line order is preserved.
pub fn tokens_from_text(raw: &str, config: &MatchingConfig) -> Vec<String> {
    let min_len = config.min_token_len;

    raw.replace("\n\n", "\n")
        .split('\n')
        .map(|line| drop_short_words(line, min_len))
        .filter(|line| line.chars().count() > min_len)
        .map(|line| normalize_str(&line))
        .filter(|token| token.chars().count() > min_len)
        .collect()
}

/// Removes space-separated words with `min_len` characters or fewer
fn drop_short_words(line: &str, min_len: usize) -> String {
    line.split(' ')
        .filter(|word| word.chars().count() > min_len)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether any token is within the edit-distance budget of the ingredient
pub fn is_observed(ingredient: &Ingredient, tokens: &[String], max_distance: usize) -> bool {
    tokens
        .iter()
        .any(|token| levenshtein(token, &ingredient.norm_name) < max_distance)
}

/// Groups every ingredient matched by at least one token under its type.
///
/// Ingredients are visited in catalog order, so the names inside each bucket
/// follow catalog order regardless of where the tokens appeared on screen. A
/// single token may match several ingredients; all of them are recorded.
pub fn resolve(
    tokens: &[String],
    ingredients: &[Ingredient],
    config: &MatchingConfig,
) -> ObservedTypes {
    let mut observed = ObservedTypes::new();

    for ingredient in ingredients {
        if is_observed(ingredient, tokens, config.max_distance) {
            observed.record(&ingredient.ingredient_type, &ingredient.name);
        }
    }

    observed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_tokens_from_text() {
        let raw = "Apple x3\n\n@ Red Pepper\nok\n\n\nRoast Beef !!\n";
        let result = tokens_from_text(raw, &MatchingConfig::default());
        assert_eq!(result, vec!["apple", "reo_pepper", "roast_beef"]);
    }

    #[test]
    fn test_tokens_from_garbage_text() {
        let result = tokens_from_text("~ | ;;\n..\n\n", &MatchingConfig::default());
        assert!(result.is_empty());
    }

    #[test]
    fn test_tokens_dropped_after_normalization() {
        // "(?)!" survives the length check but normalizes to nothing
        let result = tokens_from_text("(?)!\nPear", &MatchingConfig::default());
        assert_eq!(result, vec!["pear"]);
    }

    #[test]
    fn test_short_token_after_normalization_is_dropped() {
        // "Eg." passes the line filter but normalizes to the two-character "eg"
        let result = tokens_from_text("Eg.\nEgg", &MatchingConfig::default());
        assert_eq!(result, vec!["egg"]);
    }

    #[test]
    fn test_match_threshold_boundary() {
        let tomato = Ingredient::new("Tomato", "tomato", "veg");
        let config = MatchingConfig::default();

        assert!(is_observed(&tomato, &tokens(&["tomate"]), config.max_distance));
        assert!(is_observed(&tomato, &tokens(&["tomaxy"]), config.max_distance));
        assert!(!is_observed(&tomato, &tokens(&["tomxyz"]), config.max_distance));
        assert!(!is_observed(&tomato, &[], config.max_distance));
    }

    #[test]
    fn test_resolve_uses_catalog_order() {
        let ingredients = vec![
            Ingredient::new("Carrot", "carrot", "veg"),
            Ingredient::new("Beef", "beef", "meat"),
            Ingredient::new("Onion", "onlon", "veg"),
            Ingredient::new("Apple", "apple", "fruit"),
        ];

        // OCR order differs from catalog order
        let observed = resolve(
            &tokens(&["onlon", "beef", "carrot"]),
            &ingredients,
            &MatchingConfig::default(),
        );

        assert_eq!(
            observed.get("veg").unwrap(),
            &["Carrot".to_string(), "Onion".to_string()]
        );
        assert_eq!(observed.get("meat").unwrap(), &["Beef".to_string()]);
        assert!(!observed.contains("fruit"));
    }

    #[test]
    fn test_one_token_can_match_many_ingredients() {
        let ingredients = vec![
            Ingredient::new("Pear", "pear", "fruit"),
            Ingredient::new("Peas", "peas", "veg"),
        ];

        let observed = resolve(&tokens(&["pea"]), &ingredients, &MatchingConfig::default());

        assert_eq!(observed.get("fruit").unwrap(), &["Pear".to_string()]);
        assert_eq!(observed.get("veg").unwrap(), &["Peas".to_string()]);
    }

    #[test]
    fn test_resolve_with_no_tokens() {
        let ingredients = vec![Ingredient::new("Apple", "apple", "fruit")];
        let observed = resolve(&[], &ingredients, &MatchingConfig::default());
        assert!(observed.is_empty());
    }
}
