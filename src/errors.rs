use serde::Serialize;
use std::fmt;

/// Class of an execution failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A tool could not be initialized
    ToolInit,
    /// The execution engine or the language model failed
    Engine,
    /// The produced text could not be decoded
    Encoding,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorKind::ToolInit => "tool_init",
            ErrorKind::Engine => "engine",
            ErrorKind::Encoding => "encoding",
        };
        write!(f, "{}", label)
    }
}

/// Failure of a crew execution, carrying its class and a human readable message
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ExecutionError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ExecutionError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn tool_init(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ToolInit, message)
    }

    pub fn engine(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Engine, message)
    }

    pub fn encoding(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Encoding, message)
    }
}

impl From<crate::llm::LlmError> for ExecutionError {
    fn from(err: crate::llm::LlmError) -> Self {
        match err {
            crate::llm::LlmError::Encoding(_) => Self::encoding(err.to_string()),
            other => Self::engine(other.to_string()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
