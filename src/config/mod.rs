use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod factors;

pub use factors::{AdvisoryThresholds, Benchmarks, EmissionFactors, FoodFactors};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default)]
    pub factors: EmissionFactors,
    #[serde(default)]
    pub benchmarks: Benchmarks,
    #[serde(default)]
    pub thresholds: AdvisoryThresholds,
}

fn default_database() -> String {
    "footprint.db".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            factors: EmissionFactors::default(),
            benchmarks: Benchmarks::default(),
            thresholds: AdvisoryThresholds::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("footprint")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".footprint")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("footprint.conf")
    }

    /// Load configuration from the standard location, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from an explicit path.
    /// Missing keys fall back to their defaults.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        Self::parse(&content)
            .map_err(|e| AppError::Config(format!("failed to parse {}: {}", path.display(), e)))
    }

    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty file deserializes to unit, not to a map
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(content)
    }

    /// Database path with `~/` expanded.
    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }

    /// Initialize configuration and database files.
    /// Returns the path of the configured database.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        let path = Self::config_file();

        let existing = if path.exists() {
            Some(Self::load_from(&path)?)
        } else {
            None
        };
        let rewrite = existing.is_none() || custom_db.is_some();
        let config = Self::for_init(existing, custom_db);

        // Write config file, unless an existing one is already up to date
        if !is_test {
            if rewrite {
                fs::create_dir_all(&dir)?;
                let yaml = serde_yaml::to_string(&config)?;
                let mut file = fs::File::create(&path)?;
                file.write_all(yaml.as_bytes())?;
                println!("✅ Config file: {:?}", path);
            } else {
                println!("✅ Config file: {:?} (kept)", path);
            }
        }

        let db_path = config.database_path();
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(db_path)
    }

    /// Configuration `init` settles on: an existing file is kept as is,
    /// except for the database when one is given explicitly.
    fn for_init(existing: Option<Config>, custom_db: Option<String>) -> Config {
        let mut config = existing.unwrap_or_default();
        if let Some(db) = custom_db {
            config.database = db;
        }
        config
    }
}
