use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dataset::{synthetic_samples, write_samples};
use crate::db::log::ttlog_to_path_or_warn;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dataset { file } = cmd {
        let path = expand_tilde(file);
        let samples = synthetic_samples();
        write_samples(&path, &samples)?;
        success(format!("{} created ({} rows)", path.display(), samples.len()));

        ttlog_to_path_or_warn(
            &cfg.database_path(),
            "dataset",
            &path.to_string_lossy(),
            &format!("Synthetic dataset written ({} rows)", samples.len()),
        );
    }
    Ok(())
}
