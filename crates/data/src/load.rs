//! CSV readers for the library files
//!
//! This is the thin loader boundary over hand-edited data files. Rows that
//! fail to deserialise are dropped with a warning so a single bad edit
//! never takes down the whole library.

// standard library
use std::path::Path;

// external crates
use log::warn;
use serde::de::DeserializeOwned;

// internal modules
use crate::error::Result;
use crate::record::{ActivationRecord, DecayRecord, LimitRecord};
use crate::store::DataStore;

/// Read the activation reaction table
///
/// The `path` takes anything that can be turned into a `Path` reference,
/// such as a [&str], [String], [Path], etc...
///
/// ```rust, no_run
/// # use nact_data::read_activation_file;
/// let records = read_activation_file("path/to/activation.csv").unwrap();
/// ```
pub fn read_activation_file<P: AsRef<Path>>(path: P) -> Result<Vec<ActivationRecord>> {
    read_records(path)
}

/// Read the decay link table
pub fn read_decay_file<P: AsRef<Path>>(path: P) -> Result<Vec<DecayRecord>> {
    read_records(path)
}

/// Read the clearance/exemption limit table
pub fn read_limit_file<P: AsRef<Path>>(path: P) -> Result<Vec<LimitRecord>> {
    read_records(path)
}

/// Read all three library files straight into a [DataStore]
///
/// ```rust, no_run
/// # use nact_data::read_store;
/// let store = read_store(
///     "path/to/activation.csv",
///     "path/to/decay.csv",
///     "path/to/limits.csv",
/// )
/// .unwrap();
/// ```
pub fn read_store<P: AsRef<Path>>(activation: P, decay: P, limits: P) -> Result<DataStore> {
    DataStore::from_records(
        &read_activation_file(activation)?,
        &read_decay_file(decay)?,
        &read_limit_file(limits)?,
    )
}

/// Deserialise every readable row, dropping bad ones with a diagnostic
fn read_records<P, R>(path: P) -> Result<Vec<R>>
where
    P: AsRef<Path>,
    R: DeserializeOwned,
{
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)?;

    let mut records = Vec::new();
    for (row, result) in reader.deserialize().enumerate() {
        match result {
            Ok(record) => records.push(record),
            // +2 for the header line and 1-based numbering
            Err(e) => warn!("dropped row {} of {}: {e}", row + 2, path.display()),
        }
    }
    Ok(records)
}
