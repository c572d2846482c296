use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::train::TrainLogic;
use crate::db::log::ttlog_to_path_or_warn;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Train { data, model } = cmd {
        let model_path = expand_tilde(model);
        let fitted = TrainLogic::train(&expand_tilde(data), &model_path)?;

        ttlog_to_path_or_warn(
            &cfg.database_path(),
            "train",
            &model_path.to_string_lossy(),
            &format!(
                "Linear regression saved (intercept {:.4})",
                fitted.intercept
            ),
        );
    }
    Ok(())
}
