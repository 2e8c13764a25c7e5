use crate::domain::model::Category;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PassError {
    #[error("Word source unavailable for {category}: {message}")]
    SourceUnavailable { category: Category, message: String },

    #[error("Invalid response from word source for {category}: {message}")]
    InvalidResponse { category: Category, message: String },

    #[error("Insufficient {category} pool: found {found}, need at least {minimum}")]
    InsufficientPool {
        category: Category,
        found: usize,
        minimum: usize,
    },

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

impl PassError {
    /// 只有暫時性的不可用才值得重試，格式錯誤的回應重試也不會變好
    pub fn is_retryable(&self) -> bool {
        matches!(self, PassError::SourceUnavailable { .. })
    }

    /// Load and reachability failures may be covered by the embedded word list.
    pub fn allows_fallback(&self) -> bool {
        matches!(
            self,
            PassError::SourceUnavailable { .. } | PassError::InsufficientPool { .. }
        )
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            PassError::ConfigValidationError { .. }
                | PassError::InvalidConfigValueError { .. }
                | PassError::MissingConfigError { .. }
        )
    }

    /// 複製一份錯誤給同一次載入的其他等待者；IO/序列化錯誤保留種類與訊息
    pub fn duplicate(&self) -> PassError {
        match self {
            PassError::SourceUnavailable { category, message } => PassError::SourceUnavailable {
                category: *category,
                message: message.clone(),
            },
            PassError::InvalidResponse { category, message } => PassError::InvalidResponse {
                category: *category,
                message: message.clone(),
            },
            PassError::InsufficientPool {
                category,
                found,
                minimum,
            } => PassError::InsufficientPool {
                category: *category,
                found: *found,
                minimum: *minimum,
            },
            PassError::IoError(e) => PassError::IoError(std::io::Error::new(e.kind(), e.to_string())),
            PassError::SerializationError(e) => PassError::SerializationError(
                serde_json::Error::io(std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())),
            ),
            PassError::ConfigValidationError { field, message } => PassError::ConfigValidationError {
                field: field.clone(),
                message: message.clone(),
            },
            PassError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => PassError::InvalidConfigValueError {
                field: field.clone(),
                value: value.clone(),
                reason: reason.clone(),
            },
            PassError::MissingConfigError { field } => PassError::MissingConfigError {
                field: field.clone(),
            },
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PassError::SourceUnavailable { .. } => {
                "The dictionary service could not be reached. Please try again.".to_string()
            }
            PassError::InvalidResponse { .. } => {
                "The dictionary service returned unusable data.".to_string()
            }
            PassError::InsufficientPool { category, .. } => {
                format!("Not enough {}s are available to build a password.", category)
            }
            PassError::IoError(_) | PassError::SerializationError(_) => {
                "A local file could not be read or written.".to_string()
            }
            _ if self.is_config_error() => format!("Configuration problem: {}", self),
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PassError::SourceUnavailable { .. } => {
                "Check network access to the dictionary backend or enable the fallback word list"
            }
            PassError::InvalidResponse { .. } => {
                "Verify the backend URL points at a JSON word list or word service"
            }
            PassError::InsufficientPool { .. } => {
                "Refill the word cache, lower source.min_pool_size or enable the fallback word list"
            }
            PassError::IoError(_) => "Check that the cache directory exists and is readable",
            PassError::SerializationError(_) => "Cache files must be flat JSON arrays of words",
            _ => "Fix the configuration file or environment overrides and restart",
        }
    }
}

pub type Result<T> = std::result::Result<T, PassError>;
