use thiserror::Error;

/// Fallback used when a failed response carries no readable `message`
pub const DEFAULT_ERROR_MESSAGE: &str = "Lead status could not be updated.";

/// Errors returned by the lead status client
#[derive(Error, Debug)]
pub enum LeadStatusError {
    /// The server answered with a non-2xx status
    #[error("{message}")]
    Application { status: u16, message: String },

    /// Raised by the HTTP transport (DNS, connect, TLS, request building)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx body that could not be parsed as the requested type
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("base URL must not contain a query or fragment: {0}")]
    UnsupportedBaseUrl(String),
}

impl LeadStatusError {
    pub fn application(status: u16, message: impl Into<String>) -> Self {
        LeadStatusError::Application {
            status,
            message: message.into(),
        }
    }

    /// HTTP status of an application error
    pub fn status_code(&self) -> Option<u16> {
        match self {
            LeadStatusError::Application { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_application(&self) -> bool {
        matches!(self, LeadStatusError::Application { .. })
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, LeadStatusError::Transport(_))
    }

    /// Error code for JSON output
    pub fn error_code(&self) -> &'static str {
        match self {
            LeadStatusError::Application { .. } => "APPLICATION_ERROR",
            LeadStatusError::Transport(_) => "TRANSPORT_ERROR",
            LeadStatusError::Decode(_) => "INVALID_RESPONSE",
            LeadStatusError::InvalidBaseUrl(_) | LeadStatusError::UnsupportedBaseUrl(_) => {
                "INVALID_BASE_URL"
            }
        }
    }
}
