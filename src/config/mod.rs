use crate::core::booking::HourBounds;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_opening_hour")]
    pub opening_hour: u32,
    #[serde(default = "default_closing_hour")]
    pub closing_hour: u32,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// JSON credential list replacing the bundled one.
    #[serde(default)]
    pub users_file: Option<String>,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_opening_hour() -> u32 {
    9
}
fn default_closing_hour() -> u32 {
    21
}
fn default_page_size() -> usize {
    10
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            opening_hour: default_opening_hour(),
            closing_hour: default_closing_hour(),
            page_size: default_page_size(),
            users_file: None,
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// `~/.studybook`, or `./.studybook` when no home directory is known.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".studybook")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("studybook.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("studybook.sqlite")
    }

    /// Load the configuration file, or defaults when it does not exist.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.hour_bounds()?;
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    pub fn hour_bounds(&self) -> AppResult<HourBounds> {
        HourBounds::new(self.opening_hour, self.closing_hour)
    }

    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    /// Create the config directory, the config file (unless `is_test`) and
    /// an empty database file. Returns the database path.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<String> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => crate::utils::path::expand_tilde(name),
            None => Self::database_file(),
        };

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            config
                .save_to(&Self::config_file())
                .map_err(|e| AppError::Config(format!("cannot write config file: {e}")))?;
        }

        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(config.database)
    }
}
