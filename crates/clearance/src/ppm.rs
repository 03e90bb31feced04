//! Maximum permissible impurity concentrations

// standard library
use std::collections::HashMap;

// external crates
use itertools::Itertools;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

// nact modules
use nact_data::{DataStore, LimitKind, ReactionKind};
use nact_nuclide::Nuclide;
use nact_solver::solve_element;
use nact_utils::{capitalise, ValueExt};

/// Elements scoring below this against the limits are considered inert
const INERT_THRESHOLD: f64 = 1.0e-30;

/// Pathways claiming less than this share of an element are dropped (%)
const MIN_SHARE_PCT: f64 = 1.0e-3;

/// A max-ppm study over a set of candidate impurity elements
///
/// Fractions default to 1.0 (100 %) when an element has no entry. The
/// waste fraction scales the effective dilution of an element's activity;
/// the element fraction is carried through to the report untouched for
/// downstream attribution.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct PpmScenario {
    /// Candidate impurity elements by symbol
    pub elements: Vec<String>,
    /// Thermal neutron flux (n/cm2/s)
    pub flux: f64,
    /// Irradiation time (s)
    pub irradiation_time: f64,
    /// Cooling time (s)
    pub cooling_time: f64,
    /// Mass of the waste package the activity dilutes into (g)
    pub waste_mass: f64,
    /// Sample mass in the beam (g)
    pub sample_mass: f64,
    /// Which limit vector to evaluate against
    pub limit: LimitKind,
    /// Elemental fraction of the total per element, in (0,1]
    pub element_fractions: HashMap<String, f64>,
    /// Waste fraction per element, in (0,1]
    pub waste_fractions: HashMap<String, f64>,
}

/// Concentration ceiling for one contributing pathway of one element
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PpmRow {
    /// Element under study
    pub element: String,
    /// Natural isotope the pathway starts from
    pub parent: Nuclide,
    /// Channel of the first edge of the pathway
    pub reaction: Option<ReactionKind>,
    /// Regulated product nuclide at the end of the pathway
    pub nuclide: Nuclide,
    /// The limit evaluated against (Bq/g)
    pub limit: f64,
    /// Concentration at which this pathway alone hits the limit (ppm)
    pub max_ppm: f64,
    /// Share of the element's limit use from this pathway (%)
    pub share: f64,
    /// Product nuclide dominating the element's limit use
    pub limiting: Nuclide,
    /// Concentration at which the element as a whole hits the limit (ppm)
    pub element_max_ppm: f64,
    /// Waste fraction used for the ceilings (%)
    pub waste_fraction: f64,
    /// Elemental fraction of the total, reporting metadata only (%)
    pub element_fraction: f64,
}

impl std::fmt::Display for PpmRow {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:<3} {:<10} -> {:<10} {} ppm (element {} ppm, {:.3} %)",
            self.element,
            self.parent.name(),
            self.nuclide.name(),
            self.max_ppm.sci(4, 2),
            self.element_max_ppm.sci(4, 2),
            self.share
        )
    }
}

/// Derive the maximum permissible concentration for each candidate element
///
/// Each element is activated at unit mass so every pathway row doubles as
/// a specific activity in Bq per gram of element. Scoring those against
/// the limit vector and inverting the compliance sum yields the element
/// ceiling; single pathways invert to per-pathway ceilings the same way.
/// Elements that produce nothing regulated are skipped as inert.
///
/// Rows come back grouped by element in ascending order with the largest
/// share first within each group.
pub fn max_ppm(store: &DataStore, scenario: &PpmScenario) -> Vec<PpmRow> {
    let mut rows: Vec<PpmRow> = Vec::new();

    for element in &scenario.elements {
        let element = capitalise(element);
        let element_fraction = fraction(&scenario.element_fractions, &element);
        let waste_fraction = fraction(&scenario.waste_fractions, &element);

        // unit mass, one row per contributing pathway
        let products = solve_element(
            store,
            &element,
            1.0,
            scenario.flux,
            scenario.irradiation_time,
            scenario.cooling_time,
            false,
        );

        // score every regulated pathway against its limit
        let scored: Vec<(nact_solver::ElementProduct, f64, f64)> = products
            .into_iter()
            .filter_map(|product| {
                let limit = store.limit(&product.nuclide, scenario.limit)?;
                let fraction = product.activity / limit;
                Some((product, fraction, limit))
            })
            .collect();

        let total: f64 = scored.iter().map(|(_, fraction, _)| fraction).sum();
        if total <= INERT_THRESHOLD {
            debug!("{element} is inert against the {} limits", scenario.limit);
            continue;
        }

        let scale = 1.0e6 * scenario.waste_mass / (scenario.sample_mass * waste_fraction);
        let element_max_ppm = scale / total;

        // the product nuclide with the largest aggregated share limits the
        // element, regardless of how many pathways feed it
        let limiting = scored
            .iter()
            .map(|(product, fraction, _)| (product.nuclide.clone(), *fraction))
            .into_grouping_map()
            .sum()
            .into_iter()
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap().then_with(|| b.0.cmp(&a.0)))
            .map(|(nuclide, _)| nuclide)
            .unwrap();

        for (product, fraction, limit) in scored {
            let share = fraction / total * 100.0;
            if share < MIN_SHARE_PCT {
                continue;
            }
            rows.push(PpmRow {
                element: element.clone(),
                parent: product.parent,
                reaction: product.reaction,
                nuclide: product.nuclide,
                limit,
                max_ppm: scale / fraction,
                share,
                limiting: limiting.clone(),
                element_max_ppm,
                waste_fraction: waste_fraction * 100.0,
                element_fraction: element_fraction * 100.0,
            });
        }
    }

    // group by element ascending, largest share first within each group
    rows.sort_by(|a, b| {
        a.element
            .cmp(&b.element)
            .then_with(|| b.share.partial_cmp(&a.share).unwrap())
    });
    rows
}

/// Look up a per-element fraction, defaulting to 100 %
fn fraction(fractions: &HashMap<String, f64>, element: &str) -> f64 {
    let value = fractions.get(element).copied().unwrap_or(1.0);
    if value > 0.0 && value <= 1.0 {
        value
    } else {
        warn!("ignoring fraction {value} for {element}, using 1.0");
        1.0
    }
}
