use crate::core::dataset::{FEATURES, read_samples};
use crate::errors::AppResult;
use crate::ml::LinearRegression;
use crate::ui::messages::{header, info, success};
use crate::utils::table::{Column, Table};
use std::path::Path;

pub struct TrainLogic;

impl TrainLogic {
    /// Fit the regression on a CSV dataset and save it as JSON.
    pub fn train(data: &Path, model_path: &Path) -> AppResult<LinearRegression> {
        info(format!("Reading dataset: {}", data.display()));
        let samples = read_samples(data)?;

        let rows: Vec<Vec<f64>> = samples.iter().map(|s| s.features()).collect();
        let targets: Vec<f64> = samples.iter().map(|s| s.total_co2).collect();

        let model = LinearRegression::fit(&FEATURES, &rows, &targets)?;
        let mse = model.mse(&rows, &targets);

        header(format!("Linear regression ({} samples)", samples.len()));
        print!("{}", Self::render(&model));
        println!("MSE: {:.6}", mse);
        println!();

        model.save(model_path)?;
        success(format!(
            "Regression model trained and saved: {}",
            model_path.display()
        ));

        Ok(model)
    }

    fn render(model: &LinearRegression) -> String {
        let mut table = Table::new(vec![Column::left("Feature"), Column::right("Coefficient")]);
        for (name, coef) in model.features.iter().zip(&model.coefficients) {
            table.add_row(vec![name.clone(), format!("{:.6}", coef)]);
        }
        table.add_row(vec!["(intercept)".into(), format!("{:.6}", model.intercept)]);
        table.render()
    }
}
