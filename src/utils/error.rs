use thiserror::Error;

#[derive(Error, Debug)]
pub enum StudentError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl StudentError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError(_) => "Check that the file exists and is readable",
            Self::SerializationError(_) => {
                "Report this as a bug; student data should always serialize"
            }
            Self::ConfigValidationError { .. } => "Make sure the file is valid TOML",
            Self::InvalidConfigValueError { .. } => {
                "Fix the highlighted value in the configuration"
            }
            Self::MissingConfigError { .. } => "Add the missing field to the configuration",
        }
    }
}

pub type Result<T> = std::result::Result<T, StudentError>;
