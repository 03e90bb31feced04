//! Common enums shared by records, the store and the solvers

// external crates
use serde::{Deserialize, Serialize};

// internal modules
use crate::error::{Error, Result};

/// Reaction channel for an edge in the transmutation graph
///
/// Only single-daughter thermal channels are modelled: the neutron capture
/// reactions plus radioactive decay. The `FromStr` trait accepts the usual
/// spellings found in library files, with or without brackets and with
/// either Greek or Latin letters:
///
/// ```rust
/// # use nact_data::ReactionKind;
/// # use std::str::FromStr;
/// assert_eq!(ReactionKind::from_str("nγ").unwrap(), ReactionKind::NGamma);
/// assert_eq!(ReactionKind::from_str("(n,g)").unwrap(), ReactionKind::NGamma);
/// assert_eq!(ReactionKind::from_str("n-alpha").unwrap(), ReactionKind::NAlpha);
/// ```
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReactionKind {
    /// Radiative capture (n,γ)
    NGamma,
    /// Proton emission (n,p)
    NProton,
    /// Alpha emission (n,α)
    NAlpha,
    /// Radioactive decay
    Decay,
}

impl std::fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let symbol = match self {
            ReactionKind::NGamma => "(n,g)",
            ReactionKind::NProton => "(n,p)",
            ReactionKind::NAlpha => "(n,a)",
            ReactionKind::Decay => "decay",
        };
        write!(f, "{symbol}")
    }
}

impl std::str::FromStr for ReactionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        // strip brackets/separators and map greek letters before matching
        let normalised: String = s
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .map(|c| match c {
                'γ' => 'g',
                'α' => 'a',
                c => c,
            })
            .collect();

        match normalised.as_str() {
            "ng" | "ngamma" => Ok(ReactionKind::NGamma),
            "np" | "nproton" => Ok(ReactionKind::NProton),
            "na" | "nalpha" => Ok(ReactionKind::NAlpha),
            "decay" => Ok(ReactionKind::Decay),
            _ => Err(Error::FailedToInferReaction(s.to_string())),
        }
    }
}

/// Which regulatory limit vector to evaluate against
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LimitKind {
    /// Specific activity below which material may be released from
    /// regulatory control
    #[default]
    Clearance,
    /// Specific activity below the scope of regulation entirely
    Exemption,
}

impl std::fmt::Display for LimitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let kind = match self {
            LimitKind::Clearance => "clearance",
            LimitKind::Exemption => "exemption",
        };
        write!(f, "{kind}")
    }
}

impl std::str::FromStr for LimitKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "clearance" => Ok(LimitKind::Clearance),
            "exemption" => Ok(LimitKind::Exemption),
            _ => Err(Error::FailedToInferLimitKind(s.to_string())),
        }
    }
}
