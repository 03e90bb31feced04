//! Chain enumeration and the analytic Bateman activation solver
//!
#![doc = include_str!("../readme.md")]

// Modules
mod bateman;
mod chain;
mod solve;

// Re-exports of anything important with in-lined documentation for simplicity
#[doc(inline)]
pub use solve::{
    solve, solve_element, solve_nuclide, sort_descending, ActivationProduct, Contribution,
    ElementProduct, Ranked, SortProperty, DEFAULT_DEPTH,
};
