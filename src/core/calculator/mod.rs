//! Emissions aggregator.
//!
//! Pure functions: a submission and a set of factors in, a breakdown out.

pub mod device;
pub mod diet;
pub mod transport;

use crate::config::EmissionFactors;
use crate::models::breakdown::EmissionBreakdown;
use crate::models::submission::Submission;

pub use device::{ai_emissions, device_emissions};
pub use diet::{diet_emissions, meal_emissions};
pub use transport::transport_emissions;

/// Compute all components of a submission. No rounding happens here.
pub fn compute(submission: &Submission, f: &EmissionFactors) -> EmissionBreakdown {
    EmissionBreakdown::from_parts(
        transport_emissions(submission.transport, submission.distance_km, f),
        diet_emissions(submission, f),
        device_emissions(submission.laptop_hours, submission.mobile_hours, f),
        ai_emissions(submission.ai_hours, f),
    )
}

#[cfg(test)]
pub(crate) fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
