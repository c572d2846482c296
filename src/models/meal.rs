use super::food::FoodItem;

/// Meal slots of a day, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snacks,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
            MealSlot::Snacks => "Snacks",
        }
    }
}

/// What was eaten in a consumed meal slot.
///
/// A slot that was skipped has no `MealSelection` at all; an empty `items`
/// list means the meal was consumed but nothing was selected. Each item
/// appears at most once, in the order it was first picked.
#[derive(Debug, Clone, PartialEq)]
pub struct MealSelection {
    pub slot: MealSlot,
    pub items: Vec<FoodItem>,
    pub organic: bool,
}

impl MealSelection {
    pub fn new(slot: MealSlot, items: Vec<FoodItem>, organic: bool) -> Self {
        let mut unique: Vec<FoodItem> = Vec::with_capacity(items.len());
        for item in items {
            if !unique.contains(&item) {
                unique.push(item);
            }
        }

        Self {
            slot,
            items: unique,
            organic,
        }
    }
}
