use std::{env, fs::File, path::Path};

use serde::Deserialize;

use crate::error::{Result, StatusError};

const CONFIG_FILENAME: &str = "supvisors-status.yml";
const CONFIG_DIR: &str = "/etc/supvisors-status";

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

fn default_log_level() -> String {
    "info".to_string()
}

fn default_snapshot() -> String {
    "snapshot.yml".to_string()
}

fn default_reconcile() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_snapshot")]
    pub snapshot: String,

    #[serde(default = "default_reconcile")]
    pub reconcile: bool,
}

impl Config {
    pub fn new() -> Result<Self> {
        let pwd = env::current_dir()?;
        let cwd_config_path = pwd.join(CONFIG_FILENAME);

        if cwd_config_path.is_file() {
            return Self::from_path(&cwd_config_path);
        }

        let etc_config_path = Path::new(CONFIG_DIR).join(CONFIG_FILENAME);

        if etc_config_path.is_file() {
            return Self::from_path(&etc_config_path);
        }

        Err(StatusError::ConfigNotFound {
            checked: vec![
                cwd_config_path.display().to_string(),
                etc_config_path.display().to_string(),
            ],
        })
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let config: Config = serde_yaml::from_reader(file)?;

        Ok(config)
    }

    pub fn validate(self) -> Result<Self> {
        if self.snapshot.trim().is_empty() {
            return Err(StatusError::invalid_config("snapshot path is empty"));
        }

        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(StatusError::invalid_config(format!(
                "unknown log level \"{}\", expected one of {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(self)
    }
}
