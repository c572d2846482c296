use crate::config::EmissionFactors;
use crate::models::transport::TransportMode;

/// Commute emissions: distance × per-km factor of the chosen mode.
pub fn transport_emissions(mode: TransportMode, distance_km: u8, f: &EmissionFactors) -> f64 {
    let per_km = match mode {
        TransportMode::Public => f.public_transport_per_km,
        TransportMode::Private => f.private_transport_per_km,
    };
    f64::from(distance_km) * per_km
}
