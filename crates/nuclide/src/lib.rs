//! Canonical nuclide identities and identifier parsing
//!
#![doc = include_str!("../readme.md")]

// Modules
mod error;
mod nuclide;
mod parsers;

// Re-exports of anything important with in-lined documentation for simplicity
#[doc(inline)]
pub use nuclide::{IsomerState, Nuclide};

#[doc(inline)]
pub use error::{Error, Result};
