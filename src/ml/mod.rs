pub mod regression;

pub use regression::LinearRegression;
