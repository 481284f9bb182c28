use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid month or day format")]
    InvalidFormat { month: String, day: String },

    #[error("{field} must be between 1 and {max}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        max: u32,
    },

    #[error("No message found for {month}/{day}")]
    NotFound { month: String, day: String },

    #[error("Card data unavailable from {source_name}: {reason}")]
    DataUnavailable { source_name: String, reason: String },

    #[error("No cards configured for year {year}")]
    EmptyTable { year: i32 },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Client,
    NotFound,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::InvalidFormat { .. } | AppError::OutOfRange { .. } => ErrorCategory::Client,
            AppError::NotFound { .. } => ErrorCategory::NotFound,
            AppError::DataUnavailable { .. } | AppError::EmptyTable { .. } => ErrorCategory::Data,
            AppError::ConfigError { .. } | AppError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            AppError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Client | ErrorCategory::NotFound => ErrorSeverity::Low,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 客戶端錯誤 (4xx) 可以直接把訊息回傳給呼叫者
    pub fn is_client_error(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Client | ErrorCategory::NotFound
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::DataUnavailable { source_name, .. } => {
                format!("Could not read the motivation cards from {}", source_name)
            }
            AppError::EmptyTable { year } => {
                format!("The card table has no entries for {}", year)
            }
            AppError::ConfigError { .. } | AppError::InvalidConfigValueError { .. } => {
                format!("The server configuration is invalid: {}", self)
            }
            AppError::IoError(e) => format!("A system error occurred: {}", e),
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AppError::InvalidFormat { .. } => "Use numeric month and day values, e.g. /api/date/01/15",
            AppError::OutOfRange { .. } => "Pick a date that exists in the calendar",
            AppError::NotFound { .. } => "Try another date or check the data file",
            AppError::DataUnavailable { .. } => {
                "Check that the data file exists and contains valid JSON"
            }
            AppError::EmptyTable { .. } => {
                "Add at least one card for the configured year to the data file"
            }
            AppError::ConfigError { .. } | AppError::InvalidConfigValueError { .. } => {
                "Review the command line flags and the TOML config file"
            }
            AppError::IoError(_) => "Check that the listen address is free and accessible",
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
