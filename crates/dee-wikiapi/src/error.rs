use thiserror::Error;

/// Errors surfaced by [`crate::WikiClient`].
#[derive(Debug, Error)]
pub enum WikiError {
    /// The Wiki API answered with a status outside `200..300`.
    #[error("Wiki request was unsuccessful (status code {status} {status_text})")]
    Http { status: u16, status_text: String },

    /// Any other fault raised while issuing or interpreting a call.
    #[error("Internal wiki client error for '{term}' at {endpoint}: {source}")]
    Internal {
        term: String,
        endpoint: String,
        #[source]
        source: Fault,
    },

    #[error("HTTP client could not be created")]
    ClientBuild(#[source] reqwest::Error),
}

impl WikiError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Http { .. } => "HTTP_ERROR",
            Self::Internal { .. } => "INTERNAL_ERROR",
            Self::ClientBuild(_) => "CLIENT_BUILD_FAILED",
        }
    }

    /// Attaches the call context to a pipeline fault. Status failures pass through unwrapped.
    pub(crate) fn from_fault(fault: Fault, term: &str, endpoint: &str) -> Self {
        match fault {
            Fault::Status {
                status,
                status_text,
            } => Self::Http {
                status,
                status_text,
            },
            source => Self::Internal {
                term: term.to_string(),
                endpoint: endpoint.to_string(),
                source,
            },
        }
    }
}

/// Underlying cause of a failed call, before the query context is attached.
#[derive(Debug, Error)]
pub enum Fault {
    #[error("HTTP status {status} {status_text}")]
    Status { status: u16, status_text: String },
    #[error("invalid endpoint URL")]
    Endpoint(#[from] url::ParseError),
    #[error("request failed")]
    Network(#[from] reqwest::Error),
    #[error("response JSON could not be interpreted")]
    Json(#[from] serde_json::Error),
    #[error("unexpected response shape: {0}")]
    Shape(&'static str),
    #[error("batched responses are not supported")]
    BatchUnsupported,
    #[error("image could not be decoded")]
    Image(#[from] image::ImageError),
}
