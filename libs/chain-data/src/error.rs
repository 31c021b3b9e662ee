use thiserror::Error;

/// Problems with the environment that must be fixed before any fetch
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing `{0}` environment variable")]
    MissingEnvVar(String),

    #[error("`{0}` still contains a placeholder value")]
    PlaceholderValue(String),

    #[error("Invalid value for `{var}`: `{value}`")]
    InvalidValue { var: String, value: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Failure of an external indexing service
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("{service} request failed: {message}")]
    Request {
        service: &'static str,
        message: String,
    },

    #[error("{service} responded with HTTP {status}")]
    HttpStatus { service: &'static str, status: u16 },

    #[error("{service} returned an error: {message}")]
    Api {
        service: &'static str,
        message: String,
    },

    #[error("{service} response could not be decoded: {message}")]
    Decode {
        service: &'static str,
        message: String,
    },
}

impl SourceError {
    /// Name of the service that failed
    pub fn service(&self) -> &'static str {
        match self {
            SourceError::Request { service, .. }
            | SourceError::HttpStatus { service, .. }
            | SourceError::Api { service, .. }
            | SourceError::Decode { service, .. } => service,
        }
    }
}
