/// Per-component emissions of one submission, in kg CO₂/day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmissionBreakdown {
    pub transport: f64,
    pub diet: f64,
    pub device: f64,
    pub ai: f64,
    pub total: f64,
}

impl EmissionBreakdown {
    /// Build a breakdown from its components; the total is always their sum.
    pub fn from_parts(transport: f64, diet: f64, device: f64, ai: f64) -> Self {
        Self {
            transport,
            diet,
            device,
            ai,
            total: transport + diet + device + ai,
        }
    }
}
