use super::education::EducationLevel;
use super::meal::{MealSelection, MealSlot};
use super::transport::TransportMode;

/// One filled-in form, built per `calc` invocation and discarded after the
/// record has been stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub name: String,
    pub education: EducationLevel,
    pub city: String,
    pub transport: TransportMode,
    pub distance_km: u8,
    /// Consumed meals only. At most one selection per slot.
    pub meals: Vec<MealSelection>,
    pub laptop_hours: u8,
    pub mobile_hours: u8,
    /// `None` when AI usage was declined.
    pub ai_hours: Option<u8>,
}

impl Submission {
    /// Selection for a slot, or `None` when that meal was skipped.
    pub fn meal(&self, slot: MealSlot) -> Option<&MealSelection> {
        self.meals.iter().find(|m| m.slot == slot)
    }

    /// AI hours, zero when AI usage was declined.
    pub fn ai_hours_or_zero(&self) -> u8 {
        self.ai_hours.unwrap_or(0)
    }
}
