use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatusError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("config file not found, checked: {}", .checked.join(" and "))]
    ConfigNotFound { checked: Vec<String> },

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl StatusError {
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig(message.into())
    }
}

pub type Result<T> = std::result::Result<T, StatusError>;
