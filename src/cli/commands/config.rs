use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success, warning};
use std::path::Path;
use std::process::Command;

fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

fn run_editor(editor: &str, path: &Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            if !path.exists() {
                return Err(AppError::Config(format!(
                    "{} not found, run `footprint init` first",
                    path.display()
                )));
            }

            let fallback = default_editor();
            let requested = editor.clone().unwrap_or_else(|| fallback.clone());

            if run_editor(&requested, &path) {
                success(format!(
                    "Configuration file edited successfully using '{}'",
                    requested
                ));
            } else {
                warning(format!(
                    "Editor '{}' not available, falling back to '{}'",
                    requested, fallback
                ));

                if run_editor(&fallback, &path) {
                    success(format!(
                        "Configuration file edited successfully using fallback '{}'",
                        fallback
                    ));
                } else {
                    error(format!(
                        "Failed to edit configuration file using fallback '{}'",
                        fallback
                    ));
                    return Err(AppError::Other(format!(
                        "no usable editor for {}",
                        path.display()
                    )));
                }
            }

            // Reject an edit that leaves the file unreadable
            Config::load_from(&path)?;
        }
    }

    Ok(())
}
