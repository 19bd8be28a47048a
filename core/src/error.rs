use thiserror::Error;

/// The reply did not follow the two-marker output convention.
pub const FORMAT_ERROR_MESSAGE: &str = "출력 형식이 올바르지 않습니다.";

/// Ways a definition request can fail.
#[derive(Debug, Error)]
pub enum DefineError {
    /// The model replied, but without a category line or a description line.
    #[error("{}", FORMAT_ERROR_MESSAGE)]
    Format,

    /// The call to the model itself failed (transport, provider, or empty reply).
    #[error("{0}")]
    Upstream(anyhow::Error),
}
