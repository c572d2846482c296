pub mod advisor;
pub mod calc;
pub mod calculator;
pub mod dataset;
pub mod log;
pub mod report;
pub mod train;
