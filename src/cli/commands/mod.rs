pub mod calc;
pub mod config;
pub mod dataset;
pub mod db;
pub mod init;
pub mod log;
pub mod train;
