use crate::model::{MealRule, ObservedTypes, RecipeInstance};

/// Resolves meal rules against the observed ingredient types.
///
/// Rules are visited in catalog order and each satisfiable rule yields exactly
/// one recipe:
/// - different types take the first name of each type's bucket;
/// - same-type rules take the first two distinct names of the bucket and are
///   skipped when fewer than two were observed.
///
/// Rules needing a type that was not observed are skipped.
pub fn combine(observed: &ObservedTypes, meals: &[MealRule]) -> Vec<RecipeInstance> {
    meals
        .iter()
        .filter_map(|meal| resolve_meal(observed, meal))
        .collect()
}

fn resolve_meal(observed: &ObservedTypes, meal: &MealRule) -> Option<RecipeInstance> {
    let first = observed.get(&meal.ingredient_type_1)?;
    let second = observed.get(&meal.ingredient_type_2)?;

    let (ingredient1, ingredient2) = if meal.is_same_type() {
        first_two_distinct(first)?
    } else {
        (first.first()?, second.first()?)
    };

    Some(RecipeInstance {
        ingredient1: ingredient1.clone(),
        ingredient2: ingredient2.clone(),
        effect: meal.effect.clone(),
    })
}

/// First name of the bucket and the next name that differs from it.
///
/// A repeated display name is skipped rather than filling the second slot, so
/// this is not a plain pick of the first two bucket positions.
fn first_two_distinct(names: &[String]) -> Option<(&String, &String)> {
    let first = names.first()?;
    let second = names.iter().find(|name| *name != first)?;
    Some((first, second))
}
