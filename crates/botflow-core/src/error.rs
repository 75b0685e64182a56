//! Service error taxonomy, mapped to HTTP statuses by the server crate.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Covers both missing documents and denied access.
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("Unauthorized")]
    Unauthenticated,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn typebot_not_found() -> Self {
        Error::NotFound("Typebot not found".to_string())
    }
}
