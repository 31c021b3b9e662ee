use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid API_PORT: `{0}`")]
    InvalidPort(String),
}
