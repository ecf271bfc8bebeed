use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Producer task finished without sending a message")]
    ProducerDropped,

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl DemoError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::IoError(e) => format!("Could not write demo output: {}", e),
            DemoError::ProducerDropped => {
                "The background task ended before delivering its message".to_string()
            }
            DemoError::InvalidConfigValueError { field, reason, .. } => {
                format!("Option --{} is invalid: {}", field.replace('_', "-"), reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DemoError::IoError(_) => "Check that stdout is open and writable",
            DemoError::ProducerDropped => "Re-run with --verbose to see the producer's log",
            DemoError::InvalidConfigValueError { .. } => "Run with --help to see accepted values",
        }
    }

    /// 根據錯誤類型決定退出碼
    pub fn exit_code(&self) -> i32 {
        match self {
            DemoError::InvalidConfigValueError { .. } => 1,
            DemoError::ProducerDropped => 2,
            DemoError::IoError(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
