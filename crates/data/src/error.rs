//! Result and Error types for the nuclear data module

/// Type alias for `Result<T, data::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `nact-data` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    /// Failure reading or deserialising CSV content
    #[error("failed CSV operation")]
    Csv(#[from] csv::Error),

    /// No usable activation reactions after filtering bad records
    #[error("activation table contains no usable records")]
    EmptyActivationTable,

    /// Reaction channel text was not recognised
    #[error("failed to infer reaction from \"{0}\"")]
    FailedToInferReaction(String),

    /// Limit kind text was not recognised
    #[error("failed to infer limit kind from \"{0}\"")]
    FailedToInferLimitKind(String),
}
