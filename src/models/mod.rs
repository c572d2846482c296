pub mod breakdown;
pub mod education;
pub mod food;
pub mod meal;
pub mod submission;
pub mod transport;
