//! The immutable nuclear data store

// standard library
use std::collections::HashMap;
use std::str::FromStr;

// external crates
use log::warn;
use serde::{Deserialize, Serialize};

// nact modules
use nact_nuclide::{IsomerState, Nuclide};

// internal modules
use crate::common::{LimitKind, ReactionKind};
use crate::constants::{BARN_TO_CM2, LAMBDA_FLOOR};
use crate::error::{Error, Result};
use crate::record::{ActivationRecord, DecayRecord, LimitRecord};

/// An activation edge out of a parent nuclide
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ActivationEdge {
    /// Nuclide produced by the reaction
    pub daughter: Nuclide,
    /// Thermal cross section (barns)
    pub cross_section: f64,
    /// Reaction channel
    pub reaction: ReactionKind,
}

/// A decay edge out of a parent nuclide
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DecayEdge {
    /// Nuclide populated by the decay
    pub daughter: Nuclide,
    /// Fraction of parent decays populating this daughter, in (0,1]
    pub branching: f64,
}

/// A naturally occurring isotope of an element
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct NaturalIsotope {
    /// Mass number
    pub mass: u32,
    /// Natural abundance fraction, in (0,1]
    pub abundance: f64,
}

/// Clearance/exemption pair for one nuclide, `None` meaning unregulated
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy)]
struct LimitPair {
    clearance: Option<f64>,
    exemption: Option<f64>,
}

/// Everything the solvers need to know about a nuclear data library
///
/// A [DataStore] is built once from record slices and never mutates
/// afterwards. It holds the transmutation graph (activation and decay
/// edges), decay constants, natural abundances and regulatory limits, plus
/// the per-nuclide total cross section cache used for removal rates.
///
/// Records that cannot be interpreted are dropped individually with a
/// warning; construction only fails when no usable activation reaction
/// survives at all.
///
/// ```rust
/// # use nact_data::{ActivationRecord, DataStore};
/// let records = vec![ActivationRecord {
///     symbol: "Co".to_string(),
///     mass: 59,
///     daughter: "Co-60".to_string(),
///     reaction: "nγ".to_string(),
///     cross_section: 37.18,
///     daughter_lambda: 4.167e-9,
///     ..Default::default()
/// }];
///
/// let store = DataStore::from_records(&records, &[], &[]).unwrap();
/// let cobalt = "Co-59".try_into().unwrap();
/// assert_eq!(store.total_sigma_out(&cobalt), 37.18);
/// ```
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct DataStore {
    /// Activation edges keyed by parent
    activation: HashMap<Nuclide, Vec<ActivationEdge>>,
    /// Decay edges keyed by parent
    decay: HashMap<Nuclide, Vec<DecayEdge>>,
    /// Decay constants (1/s), every known nuclide has an entry
    lambda: HashMap<Nuclide, f64>,
    /// Total activation cross section out of each parent (barns)
    sigma_out: HashMap<Nuclide, f64>,
    /// Natural isotopes keyed by element symbol, in record order
    abundances: HashMap<String, Vec<NaturalIsotope>>,
    /// Regulatory limits keyed by nuclide
    limits: HashMap<Nuclide, LimitPair>,
}

impl DataStore {
    /// Build a store from parsed library records
    ///
    /// Individual records are dropped with a `warn!` diagnostic when their
    /// nuclide identifiers or reaction channel cannot be read. The only
    /// fatal condition is an activation table with no usable records.
    pub fn from_records(
        activation: &[ActivationRecord],
        decay: &[DecayRecord],
        limits: &[LimitRecord],
    ) -> Result<Self> {
        let mut store = Self::default();

        for record in activation {
            store.add_activation(record);
        }
        if store.activation.is_empty() {
            return Err(Error::EmptyActivationTable);
        }

        for record in decay {
            store.add_decay(record);
        }
        for record in limits {
            store.add_limit(record);
        }

        Ok(store)
    }

    /// Activation edges out of a parent, empty when none are known
    pub fn activation_edges_from(&self, parent: &Nuclide) -> &[ActivationEdge] {
        self.activation.get(parent).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Decay edges out of a parent, empty when none are known
    pub fn decay_edges_from(&self, parent: &Nuclide) -> &[DecayEdge] {
        self.decay.get(parent).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Decay constant (1/s), 0 for stable or unknown nuclides
    ///
    /// Vanishingly small library values are treated as stable rather than
    /// producing meaningless activities.
    pub fn lambda(&self, nuclide: &Nuclide) -> f64 {
        match self.lambda.get(nuclide) {
            Some(&lambda) if lambda > LAMBDA_FLOOR => lambda,
            _ => 0.0,
        }
    }

    /// Half-life in seconds, `None` for stable or unknown nuclides
    pub fn half_life(&self, nuclide: &Nuclide) -> Option<f64> {
        let lambda = self.lambda(nuclide);
        (lambda > 0.0).then(|| std::f64::consts::LN_2 / lambda)
    }

    /// Total activation cross section out of a parent (barns)
    pub fn total_sigma_out(&self, parent: &Nuclide) -> f64 {
        self.sigma_out.get(parent).copied().unwrap_or(0.0)
    }

    /// Total probability rate per atom of leaving this nuclide (1/s)
    ///
    /// Combines decay and further activation under the given thermal flux
    /// (n/cm2/s).
    pub fn removal_rate(&self, nuclide: &Nuclide, flux: f64) -> f64 {
        self.lambda(nuclide) + flux * self.total_sigma_out(nuclide) * BARN_TO_CM2
    }

    /// Natural isotopes of an element, empty when the element is unknown
    pub fn isotopes_of(&self, element: &str) -> &[NaturalIsotope] {
        self.abundances
            .get(&nact_utils::capitalise(element))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Regulatory limit (Bq/g), `None` when the nuclide is unregulated
    ///
    /// The two limit kinds fall back to unregulated independently.
    pub fn limit(&self, nuclide: &Nuclide, kind: LimitKind) -> Option<f64> {
        let pair = self.limits.get(nuclide)?;
        match kind {
            LimitKind::Clearance => pair.clearance,
            LimitKind::Exemption => pair.exemption,
        }
    }

    /// Sorted names of every nuclide known to the store
    pub fn nuclide_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.lambda.keys().map(Nuclide::name).collect();
        names.sort();
        names.dedup();
        names
    }

    /// Sorted symbols of every element with natural abundance data
    pub fn element_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.abundances.keys().cloned().collect();
        names.sort();
        names
    }

    fn add_activation(&mut self, record: &ActivationRecord) {
        if record.symbol.trim().is_empty() || record.mass == 0 {
            warn!(
                "dropped activation record with invalid parent \"{}-{}\"",
                record.symbol, record.mass
            );
            return;
        }
        let parent = Nuclide::new(record.symbol.trim(), record.mass, IsomerState::Ground);

        let daughter = match Nuclide::try_from(record.daughter.as_str()) {
            Ok(daughter) => daughter,
            Err(e) => {
                warn!("dropped activation record for {parent}: {e}");
                return;
            }
        };

        let reaction = match ReactionKind::from_str(&record.reaction) {
            Ok(ReactionKind::Decay) => {
                warn!("dropped activation record for {parent}: decay channel in activation table");
                return;
            }
            Ok(reaction) => reaction,
            Err(e) => {
                warn!("dropped activation record for {parent}: {e}");
                return;
            }
        };

        let cross_section = record.cross_section.max(0.0);
        *self.sigma_out.entry(parent.clone()).or_insert(0.0) += cross_section;
        self.set_lambda(&daughter, record.daughter_lambda);
        self.set_lambda(&parent, 0.0);

        if record.abundance > 0.0 {
            let isotopes = self.abundances.entry(parent.symbol.clone()).or_default();
            if !isotopes.iter().any(|i| i.mass == parent.mass) {
                isotopes.push(NaturalIsotope {
                    mass: parent.mass,
                    abundance: record.abundance.min(1.0),
                });
            }
        }

        self.activation.entry(parent).or_default().push(ActivationEdge {
            daughter,
            cross_section,
            reaction,
        });
    }

    fn add_decay(&mut self, record: &DecayRecord) {
        let parent = match Nuclide::try_from(record.parent.as_str()) {
            Ok(parent) => parent,
            Err(e) => {
                warn!("dropped decay record: {e}");
                return;
            }
        };
        let daughter = match Nuclide::try_from(record.daughter.as_str()) {
            Ok(daughter) => daughter,
            Err(e) => {
                warn!("dropped decay record for {parent}: {e}");
                return;
            }
        };

        if record.branching <= 0.0 {
            warn!("dropped decay record for {parent}: branching ratio must be positive");
            return;
        }
        if record.branching > 1.0 {
            warn!("clamped branching ratio {} for {parent}", record.branching);
        }

        self.set_lambda(&parent, record.parent_lambda);
        self.set_lambda(&daughter, record.daughter_lambda);

        self.decay.entry(parent).or_default().push(DecayEdge {
            daughter,
            branching: record.branching.min(1.0),
        });
    }

    fn add_limit(&mut self, record: &LimitRecord) {
        let nuclide = match Nuclide::try_from(record.nuclide.as_str()) {
            Ok(nuclide) => nuclide,
            Err(e) => {
                warn!("dropped limit record: {e}");
                return;
            }
        };

        // non-positive limits are as meaningless as missing ones
        let pair = LimitPair {
            clearance: record.clearance.filter(|limit| *limit > 0.0),
            exemption: record.exemption.filter(|limit| *limit > 0.0),
        };

        self.set_lambda(&nuclide, 0.0);
        self.limits.insert(nuclide, pair);
    }

    /// Register a decay constant, preferring the first non-zero value seen
    fn set_lambda(&mut self, nuclide: &Nuclide, lambda: f64) {
        let entry = self.lambda.entry(nuclide.clone()).or_insert(0.0);
        if *entry == 0.0 && lambda > 0.0 {
            *entry = lambda;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activation(symbol: &str, mass: u32, daughter: &str, xs: f64) -> ActivationRecord {
        ActivationRecord {
            symbol: symbol.to_string(),
            mass,
            daughter: daughter.to_string(),
            reaction: "nγ".to_string(),
            cross_section: xs,
            ..Default::default()
        }
    }

    #[test]
    fn empty_table_fails() {
        assert!(matches!(
            DataStore::from_records(&[], &[], &[]),
            Err(Error::EmptyActivationTable)
        ));
    }

    #[test]
    fn bad_records_drop_without_failing() {
        let records = vec![
            activation("Co", 59, "Co-60", 37.18),
            activation("", 59, "Co-60", 1.0),
            activation("Co", 59, "not a nuclide", 1.0),
        ];
        let store = DataStore::from_records(&records, &[], &[]).unwrap();

        let cobalt = Nuclide::new("Co", 59, IsomerState::Ground);
        assert_eq!(store.activation_edges_from(&cobalt).len(), 1);
    }

    #[test]
    fn removal_rate_combines_decay_and_activation() {
        let records = vec![activation("Co", 59, "Co-60", 37.18)];
        let decays = vec![DecayRecord {
            parent: "Co-60".to_string(),
            daughter: "Ni-60".to_string(),
            branching: 1.0,
            parent_lambda: 4.167e-9,
            daughter_lambda: 0.0,
        }];
        let store = DataStore::from_records(&records, &decays, &[]).unwrap();

        let parent = Nuclide::new("Co", 59, IsomerState::Ground);
        let flux = 1.0e14;
        let expected = flux * 37.18 * BARN_TO_CM2;
        assert!((store.removal_rate(&parent, flux) - expected).abs() < 1e-25);

        let daughter = Nuclide::new("Co", 60, IsomerState::Ground);
        assert_eq!(store.removal_rate(&daughter, flux), 4.167e-9);
        assert_eq!(store.lambda(&daughter), 4.167e-9);
    }

    #[test]
    fn limits_fall_back_independently() {
        let records = vec![activation("Co", 59, "Co-60", 37.18)];
        let limits = vec![LimitRecord {
            nuclide: "Co-60".to_string(),
            clearance: Some(0.1),
            exemption: None,
        }];
        let store = DataStore::from_records(&records, &[], &limits).unwrap();

        let cobalt60 = Nuclide::new("Co", 60, IsomerState::Ground);
        assert_eq!(store.limit(&cobalt60, LimitKind::Clearance), Some(0.1));
        assert_eq!(store.limit(&cobalt60, LimitKind::Exemption), None);
    }

    #[test]
    fn tiny_lambda_treated_as_stable() {
        let mut record = activation("Lu", 176, "Lu-177", 2090.0);
        record.daughter_lambda = 1.0e-41;
        let store = DataStore::from_records(&[record], &[], &[]).unwrap();

        let lutetium = Nuclide::new("Lu", 177, IsomerState::Ground);
        assert_eq!(store.lambda(&lutetium), 0.0);
        assert!(store.half_life(&lutetium).is_none());
    }
}
