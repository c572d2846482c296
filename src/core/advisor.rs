//! Advisory rule engine.
//!
//! Evaluated once the breakdown is known. Rules are independent and are
//! always reported in the same order.

use crate::config::{AdvisoryThresholds, Benchmarks};
use crate::models::breakdown::EmissionBreakdown;
use crate::models::transport::TransportMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suggestion {
    PreferPublicTransport,
    ReduceAnimalAndProcessedFood,
    IncreasePlantProtein,
    ReduceScreenTime,
    LimitAiQueries,
}

impl Suggestion {
    pub fn message(&self) -> &'static str {
        match self {
            Suggestion::PreferPublicTransport => "Prefer public or shared transport.",
            Suggestion::ReduceAnimalAndProcessedFood => {
                "Reduce animal-based and processed food items."
            }
            Suggestion::IncreasePlantProtein => "Increase plant-based or vegan protein sources.",
            Suggestion::ReduceScreenTime => "Reduce screen time and energy use.",
            Suggestion::LimitAiQueries => "Limit unnecessary AI queries.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advice {
    WithinLimits,
    /// Footprint above the recommended level; may still carry no suggestion
    /// when no sub-threshold is exceeded.
    AboveLimits(Vec<Suggestion>),
}

impl Advice {
    pub fn headline(&self) -> &'static str {
        match self {
            Advice::WithinLimits => "Your footprint is within sustainable limits.",
            Advice::AboveLimits(_) => {
                "Your footprint is above sustainable levels. Suggested actions:"
            }
        }
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        match self {
            Advice::WithinLimits => &[],
            Advice::AboveLimits(s) => s,
        }
    }
}

/// Inputs of the rule set that are not part of the breakdown.
#[derive(Debug, Clone, Copy)]
pub struct AdviceInput {
    pub transport: TransportMode,
    pub ai_hours: u8,
}

pub fn advise(
    breakdown: &EmissionBreakdown,
    input: AdviceInput,
    benchmarks: &Benchmarks,
    thresholds: &AdvisoryThresholds,
) -> Advice {
    if breakdown.total <= benchmarks.recommended {
        return Advice::WithinLimits;
    }

    let mut out = Vec::new();

    if input.transport == TransportMode::Private {
        out.push(Suggestion::PreferPublicTransport);
    }
    if breakdown.diet > thresholds.diet {
        out.push(Suggestion::ReduceAnimalAndProcessedFood);
        out.push(Suggestion::IncreasePlantProtein);
    }
    if breakdown.device > thresholds.device {
        out.push(Suggestion::ReduceScreenTime);
    }
    if f64::from(input.ai_hours) > thresholds.ai_hours {
        out.push(Suggestion::LimitAiQueries);
    }

    Advice::AboveLimits(out)
}
