//! Result and Error types for the nuclide module

/// Type alias for `Result<T, nuclide::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for `nact-nuclide`
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Text could not be read as any supported identifier form
    #[error("failed to parse \"{text}\" into a nuclide")]
    FailedParseToNuclide { text: String },
}
