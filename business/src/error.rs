use thiserror::Error;

/// Error taxonomy of the mock API, mirroring what an HTTP backend would
/// return: a 404 for unknown ids and a 500 for the simulated transient
/// failures that exercise the error-handling UI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("User not found")]
    NotFound,

    #[error("{message}")]
    Server { message: String },
}

impl ApiError {
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server {
            message: message.into(),
        }
    }

    /// Numeric status code equivalent.
    pub fn status(&self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::Server { .. } => 500,
        }
    }
}
