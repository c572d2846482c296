use crate::config::EmissionFactors;
use crate::models::meal::{MealSelection, MealSlot};
use crate::models::submission::Submission;

/// Emissions of a single consumed meal.
///
/// Every item contributes its own factor; in an organic meal each item is
/// reduced independently by the organic multiplier.
pub fn meal_emissions(meal: &MealSelection, f: &EmissionFactors) -> f64 {
    meal.items
        .iter()
        .map(|item| {
            let value = f.food.factor(*item);
            if meal.organic {
                value * f.organic_reduction
            } else {
                value
            }
        })
        .sum()
}

/// Emissions of one slot; a skipped meal contributes zero.
pub fn slot_emissions(submission: &Submission, slot: MealSlot, f: &EmissionFactors) -> f64 {
    submission
        .meal(slot)
        .map_or(0.0, |meal| meal_emissions(meal, f))
}

/// Daily diet emissions: sum of the per-slot partial sums.
pub fn diet_emissions(submission: &Submission, f: &EmissionFactors) -> f64 {
    MealSlot::ALL
        .iter()
        .map(|slot| slot_emissions(submission, *slot, f))
        .sum()
}
