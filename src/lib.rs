//! `nact` is a semi-modular toolkit for neutron activation and waste
//! clearance analysis
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use nact_utils as utils;

#[cfg(feature = "clearance")]
#[cfg_attr(docsrs, doc(cfg(feature = "clearance")))]
#[doc(inline)]
pub use nact_clearance as clearance;

#[cfg(feature = "data")]
#[cfg_attr(docsrs, doc(cfg(feature = "data")))]
#[doc(inline)]
pub use nact_data as data;

#[cfg(feature = "nuclide")]
#[cfg_attr(docsrs, doc(cfg(feature = "nuclide")))]
#[doc(inline)]
pub use nact_nuclide as nuclide;

#[cfg(feature = "solver")]
#[cfg_attr(docsrs, doc(cfg(feature = "solver")))]
#[doc(inline)]
pub use nact_solver as solver;
