//! Emission factors, benchmarks and advisory thresholds.
//!
//! The values are illustrative kg CO₂ constants. Every field can be overridden
//! in the configuration file; missing fields keep the defaults below.

use crate::models::food::FoodItem;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmissionFactors {
    pub public_transport_per_km: f64,
    pub private_transport_per_km: f64,
    pub laptop_per_hour: f64,
    pub mobile_per_hour: f64,
    pub ai_per_hour: f64,
    /// Multiplier applied to every item of an organic meal.
    pub organic_reduction: f64,
    pub food: FoodFactors,
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self {
            public_transport_per_km: 0.05,
            private_transport_per_km: 0.18,
            laptop_per_hour: 0.05,
            mobile_per_hour: 0.01,
            ai_per_hour: 0.02,
            organic_reduction: 0.85,
            food: FoodFactors::default(),
        }
    }
}

/// kg CO₂ per meal-item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoodFactors {
    pub rice_grains: f64,
    pub vegetables_pulses: f64,
    pub dairy: f64,
    pub vegan_protein: f64,
    pub eggs: f64,
    pub chicken: f64,
    pub fish: f64,
    pub red_meat: f64,
    pub processed_food: f64,
}

impl Default for FoodFactors {
    fn default() -> Self {
        Self {
            rice_grains: 0.8,
            vegetables_pulses: 0.6,
            dairy: 1.5,
            vegan_protein: 1.2,
            eggs: 1.8,
            chicken: 3.2,
            fish: 2.5,
            red_meat: 6.0,
            processed_food: 4.0,
        }
    }
}

impl FoodFactors {
    pub fn factor(&self, item: FoodItem) -> f64 {
        match item {
            FoodItem::RiceGrains => self.rice_grains,
            FoodItem::VegetablesPulses => self.vegetables_pulses,
            FoodItem::Dairy => self.dairy,
            FoodItem::VeganProtein => self.vegan_protein,
            FoodItem::Eggs => self.eggs,
            FoodItem::Chicken => self.chicken,
            FoodItem::Fish => self.fish,
            FoodItem::RedMeat => self.red_meat,
            FoodItem::ProcessedFood => self.processed_food,
        }
    }
}

/// Reference levels printed next to the result, in kg CO₂/day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Benchmarks {
    pub average: f64,
    /// Suggestions are only given above this level.
    pub recommended: f64,
}

impl Default for Benchmarks {
    fn default() -> Self {
        Self {
            average: 8.0,
            recommended: 5.0,
        }
    }
}

/// Sub-thresholds gating the individual suggestions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisoryThresholds {
    /// kg CO₂/day of food
    pub diet: f64,
    /// kg CO₂/day of devices
    pub device: f64,
    /// hours/day of AI usage (not emissions)
    pub ai_hours: f64,
}

impl Default for AdvisoryThresholds {
    fn default() -> Self {
        Self {
            diet: 4.0,
            device: 2.0,
            ai_hours: 3.0,
        }
    }
}
