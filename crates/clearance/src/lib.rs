//! Waste compliance evaluation and maximum impurity derivation
//!
#![doc = include_str!("../readme.md")]

// Modules
mod compliance;
mod ppm;

// Re-exports of anything important with in-lined documentation for simplicity
#[doc(inline)]
pub use compliance::{
    compliance, ComplianceReport, ComplianceRow, ComplianceSummary, WasteScenario,
    EFFECTIVELY_NEVER,
};

#[doc(inline)]
pub use ppm::{max_ppm, PpmRow, PpmScenario};
