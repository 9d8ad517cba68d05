use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    /// Field-level rule failed; carries the client-facing message.
    #[error("{0}")]
    Validation(String),
}
