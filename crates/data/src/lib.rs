//! Nuclear data records and the immutable activation data store
//!
#![doc = include_str!("../readme.md")]

// Modules
pub mod constants;
mod common;
mod error;
mod load;
mod record;
mod store;

// Re-exports of anything important with in-lined documentation for simplicity
#[doc(inline)]
pub use common::{LimitKind, ReactionKind};

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use record::{ActivationRecord, DecayRecord, LimitRecord};

#[doc(inline)]
pub use store::{ActivationEdge, DataStore, DecayEdge, NaturalIsotope};

#[doc(inline)]
pub use load::{read_activation_file, read_decay_file, read_limit_file, read_store};
