use serde::{Deserialize, Serialize};

/// A concrete ingredient that can appear in the crafting menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Display name shown to the player
    pub name: String,
    /// Name run through [`crate::normalize::normalize_str`]; compared against OCR tokens
    #[serde(default)]
    pub norm_name: String,
    /// Category label used by meal rules
    #[serde(rename = "type")]
    pub ingredient_type: String,
}

impl Ingredient {
    pub fn new(
        name: impl Into<String>,
        norm_name: impl Into<String>,
        ingredient_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            norm_name: norm_name.into(),
            ingredient_type: ingredient_type.into(),
        }
    }
}

/// A craftable combination expressed over ingredient types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealRule {
    #[serde(alias = "ingredient1")]
    pub ingredient_type_1: String,
    #[serde(alias = "ingredient2")]
    pub ingredient_type_2: String,
    pub effect: String,
}

impl MealRule {
    pub fn new(
        ingredient_type_1: impl Into<String>,
        ingredient_type_2: impl Into<String>,
        effect: impl Into<String>,
    ) -> Self {
        Self {
            ingredient_type_1: ingredient_type_1.into(),
            ingredient_type_2: ingredient_type_2.into(),
            effect: effect.into(),
        }
    }

    /// Whether both slots need the same ingredient type
    pub fn is_same_type(&self) -> bool {
        self.ingredient_type_1 == self.ingredient_type_2
    }
}

/// Ingredients and meal rules of one selectable profile.
///
/// Both lists are kept in declared order: matching appends names in ingredient
/// order and recipes are emitted in meal order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileCatalog {
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub meals: Vec<MealRule>,
}

/// A resolved recipe ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeInstance {
    pub ingredient1: String,
    pub ingredient2: String,
    pub effect: String,
}

/// Ingredient names observed in one extraction run, grouped by type.
///
/// Buckets keep first-insertion order and names inside a bucket keep the order
/// they were recorded in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ObservedTypes {
    buckets: Vec<TypeBucket>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeBucket {
    #[serde(rename = "type")]
    pub ingredient_type: String,
    pub names: Vec<String>,
}

impl ObservedTypes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `name` to the bucket of `ingredient_type`, creating the bucket if needed
    pub fn record(&mut self, ingredient_type: &str, name: &str) {
        match self
            .buckets
            .iter_mut()
            .find(|b| b.ingredient_type == ingredient_type)
        {
            Some(bucket) => bucket.names.push(name.to_string()),
            None => self.buckets.push(TypeBucket {
                ingredient_type: ingredient_type.to_string(),
                names: vec![name.to_string()],
            }),
        }
    }

    pub fn get(&self, ingredient_type: &str) -> Option<&[String]> {
        self.buckets
            .iter()
            .find(|b| b.ingredient_type == ingredient_type)
            .map(|b| b.names.as_slice())
    }

    pub fn contains(&self, ingredient_type: &str) -> bool {
        self.get(ingredient_type).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeBucket> {
        self.buckets.iter()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observed_types_keeps_insertion_order() {
        let mut observed = ObservedTypes::new();
        observed.record("veg", "Carrot");
        observed.record("meat", "Beef");
        observed.record("veg", "Onion");

        let types: Vec<&str> = observed.iter().map(|b| b.ingredient_type.as_str()).collect();
        assert_eq!(types, vec!["veg", "meat"]);
        assert_eq!(
            observed.get("veg").unwrap(),
            &["Carrot".to_string(), "Onion".to_string()]
        );
        assert!(observed.get("fruit").is_none());
        assert_eq!(observed.len(), 2);
    }

    #[test]
    fn test_meal_rule_accepts_legacy_field_names() {
        let json = r#"{"ingredient1": "fruit", "ingredient2": "meat", "effect": "Strength"}"#;
        let rule: MealRule = serde_json::from_str(json).unwrap();
        assert_eq!(rule, MealRule::new("fruit", "meat", "Strength"));
        assert!(!rule.is_same_type());
    }

    #[test]
    fn test_ingredient_type_field_is_named_type() {
        let json = r#"{"name": "Apple", "norm_name": "apple", "type": "fruit"}"#;
        let ingredient: Ingredient = serde_json::from_str(json).unwrap();
        assert_eq!(ingredient.ingredient_type, "fruit");

        let back = serde_json::to_value(&ingredient).unwrap();
        assert_eq!(back["type"], "fruit");
    }
}
