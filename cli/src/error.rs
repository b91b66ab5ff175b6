use booking::{FieldError, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("unknown locale `{0}`; expected en-US or es-AR")]
    InvalidLocale(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status}: {message}")]
    ServerError { status: u16, message: String },
    #[error("could not read {path}: {source}")]
    ReadInput {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not read confirmation: {0}")]
    Prompt(#[source] std::io::Error),
    #[error(transparent)]
    Field(#[from] FieldError),
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("reservation write failed: {0}")]
    WriteFailed(String),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
