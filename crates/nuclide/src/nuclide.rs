//! Common data structures

// external crates
use serde::{Deserialize, Serialize};

// nact modules
use nact_utils::{capitalise, f};

// internal modules
use crate::error::Error;
use crate::parsers::nuclide_from_str;

/// Variants of excited states
///
/// A nuclide is either in the ground state or some excited state.
///
/// Excited states use the slightly more standardised ENSDF notation, where
/// `m1` is the first excited state, `m2` the second, and so on. The first
/// excited state is by far the most common and is displayed with the bare
/// `m` tag, so `Tc-99m` rather than `Tc-99m1`.
///
/// FISPACT-II style tags (`m`, `n`) are accepted on input and mapped onto
/// the numbered states, though this is not guaranteed to be a 1:1 mapping
/// for every nuclide in every library.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum IsomerState {
    /// Ground state
    #[default]
    Ground,
    /// Excited state `m<n>`
    Excited(u8),
}

impl std::fmt::Display for IsomerState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let state = match self {
            IsomerState::Ground => String::from(""),
            IsomerState::Excited(1) => String::from("m"),
            IsomerState::Excited(e) => f!("m{e}"),
        };
        write!(f, "{state}")
    }
}

/// Definition for a particular nuclide
///
/// The identity is the canonical triple of element symbol, mass number and
/// isomeric state. Equality, ordering and hashing all follow the triple, so
/// a [Nuclide] can key any of the standard maps directly.
///
/// The `TryFrom` trait is implemented for core string types and will try to
/// parse them into a nuclide. Two identifier forms are understood:
///
/// - `<element><separator><mass><state>` => Co60, co-60, Co_60m1
/// - `<mass>[m]<element>` => 60Co, 99mTc
///
/// Separators `-` and `_` are optional and letter case is normalised, so
/// `lu177`, `Lu-177` and `177lu` are all the same identity.
///
/// ```rust
/// # use nact_nuclide::{Nuclide, IsomerState};
/// assert_eq!(
///     Nuclide::try_from("eu-152m2").unwrap(),
///     Nuclide {
///         symbol: "Eu".to_string(),
///         mass: 152,
///         state: IsomerState::Excited(2)
///     }
/// );
/// ```
#[derive(
    Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "String", try_from = "String")]
pub struct Nuclide {
    /// Element symbol, always Title-cased
    pub symbol: String,
    /// Mass number (Z+N, total nucleons)
    pub mass: u32,
    /// Excited state status
    pub state: IsomerState,
}

impl Nuclide {
    /// Build a nuclide from its parts, normalising the symbol case
    ///
    /// ```rust
    /// # use nact_nuclide::{Nuclide, IsomerState};
    /// let cobalt = Nuclide::new("co", 60, IsomerState::Ground);
    /// assert_eq!(cobalt.name(), "Co-60");
    /// ```
    pub fn new(symbol: &str, mass: u32, state: IsomerState) -> Self {
        Self {
            symbol: capitalise(symbol),
            mass,
            state,
        }
    }

    /// The canonical display name for the nuclide
    ///
    /// Formatted as `<Symbol>-<mass><state>` for consistency with the rest
    /// of the toolkit and the data libraries it reads.
    ///
    /// ```rust
    /// # use nact_nuclide::{Nuclide, IsomerState};
    /// let tc99m = Nuclide::new("tc", 99, IsomerState::Excited(1));
    /// assert_eq!(tc99m.name(), "Tc-99m");
    /// ```
    pub fn name(&self) -> String {
        f!("{}-{}{}", self.symbol, self.mass, self.state)
    }
}

impl std::fmt::Display for Nuclide {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<Nuclide> for String {
    fn from(nuclide: Nuclide) -> Self {
        nuclide.name()
    }
}

impl TryFrom<&str> for Nuclide {
    type Error = crate::Error;

    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        let (_, nuclide) = nuclide_from_str(s).map_err(|_| Error::FailedParseToNuclide {
            text: s.to_string(),
        })?;

        Ok(nuclide)
    }
}

impl TryFrom<String> for Nuclide {
    type Error = crate::Error;
    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        s.as_str().try_into()
    }
}

impl TryFrom<&String> for Nuclide {
    type Error = crate::Error;
    fn try_from(s: &String) -> std::result::Result<Self, Self::Error> {
        s.as_str().try_into()
    }
}
