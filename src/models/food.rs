use clap::ValueEnum;

/// The fixed list of food items a meal can be composed of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum FoodItem {
    RiceGrains,
    VegetablesPulses,
    Dairy,
    VeganProtein,
    Eggs,
    Chicken,
    Fish,
    RedMeat,
    ProcessedFood,
}

impl FoodItem {
    pub const ALL: [FoodItem; 9] = [
        FoodItem::RiceGrains,
        FoodItem::VegetablesPulses,
        FoodItem::Dairy,
        FoodItem::VeganProtein,
        FoodItem::Eggs,
        FoodItem::Chicken,
        FoodItem::Fish,
        FoodItem::RedMeat,
        FoodItem::ProcessedFood,
    ];

    /// Human readable label (as shown in reports).
    pub fn label(&self) -> &'static str {
        match self {
            FoodItem::RiceGrains => "Rice / grains",
            FoodItem::VegetablesPulses => "Vegetables / pulses",
            FoodItem::Dairy => "Dairy (milk, paneer, curd)",
            FoodItem::VeganProtein => "Vegan protein (tofu, soy, legumes)",
            FoodItem::Eggs => "Eggs",
            FoodItem::Chicken => "Chicken",
            FoodItem::Fish => "Fish",
            FoodItem::RedMeat => "Red meat (mutton/beef)",
            FoodItem::ProcessedFood => "Processed / fast food",
        }
    }
}
