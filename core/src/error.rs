use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// Boundary rejection. The command layer recovers this into a
    /// structured INVALID_INPUT response; it never crosses the wire
    /// as a panic.
    #[error("invalid input in '{field}': {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// A sampling utility was asked to pick from an empty pool.
    /// This means the content pack upstream is misconfigured — fail
    /// loudly instead of degrading silently.
    #[error("cannot sample from an empty pool")]
    EmptyPool,

    #[error("content pack misconfigured: {reason}")]
    ContentMisconfigured { reason: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
