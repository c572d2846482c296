//! Synthetic training data for the regression utility.
//!
//! Six fixed students with a deterministic linear target. Nothing in the
//! calculator reads this file.

use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Feature columns, in file and model order.
pub const FEATURES: [&str; 4] = ["distance_km", "meals", "laptop_hours", "mobile_hours"];

const DISTANCE_KM: [u32; 6] = [5, 10, 2, 15, 8, 20];
const MEALS: [u32; 6] = [3, 3, 2, 3, 3, 4];
const LAPTOP_HOURS: [u32; 6] = [4, 5, 3, 6, 4, 7];
const MOBILE_HOURS: [u32; 6] = [3, 4, 2, 5, 3, 6];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentSample {
    pub distance_km: u32,
    pub meals: u32,
    pub laptop_hours: u32,
    pub mobile_hours: u32,
    pub total_co2: f64,
}

impl StudentSample {
    /// Sample with the target derived from the toy formula.
    pub fn new(distance_km: u32, meals: u32, laptop_hours: u32, mobile_hours: u32) -> Self {
        let total_co2 = f64::from(distance_km) * 0.18
            + f64::from(meals) * 2.5
            + f64::from(laptop_hours) * 0.05
            + f64::from(mobile_hours) * 0.01;
        Self {
            distance_km,
            meals,
            laptop_hours,
            mobile_hours,
            total_co2,
        }
    }

    pub fn features(&self) -> Vec<f64> {
        vec![
            f64::from(self.distance_km),
            f64::from(self.meals),
            f64::from(self.laptop_hours),
            f64::from(self.mobile_hours),
        ]
    }
}

pub fn synthetic_samples() -> Vec<StudentSample> {
    (0..DISTANCE_KM.len())
        .map(|i| StudentSample::new(DISTANCE_KM[i], MEALS[i], LAPTOP_HOURS[i], MOBILE_HOURS[i]))
        .collect()
}

/// Write samples as CSV, header included.
pub fn write_samples(path: &Path, samples: &[StudentSample]) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for s in samples {
        wtr.serialize(s)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn read_samples(path: &Path) -> AppResult<Vec<StudentSample>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut out = Vec::new();
    for row in rdr.deserialize() {
        out.push(row?);
    }
    Ok(out)
}
