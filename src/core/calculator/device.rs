use crate::config::EmissionFactors;

pub fn device_emissions(laptop_hours: u8, mobile_hours: u8, f: &EmissionFactors) -> f64 {
    f64::from(laptop_hours) * f.laptop_per_hour + f64::from(mobile_hours) * f.mobile_per_hour
}

/// AI emissions; declined usage (`None`) is zero.
pub fn ai_emissions(ai_hours: Option<u8>, f: &EmissionFactors) -> f64 {
    ai_hours.map_or(0.0, |h| f64::from(h) * f.ai_per_hour)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calculator::approx_eq;

    #[test]
    fn laptop_and_mobile() {
        let f = EmissionFactors::default();
        assert!(approx_eq(device_emissions(6, 4, &f), 0.34));
        assert_eq!(device_emissions(0, 0, &f), 0.0);
    }

    #[test]
    fn ai_declined_or_used() {
        let f = EmissionFactors::default();
        assert_eq!(ai_emissions(None, &f), 0.0);
        assert_eq!(ai_emissions(Some(0), &f), 0.0);
        assert!(approx_eq(ai_emissions(Some(2), &f), 0.04));
    }
}
