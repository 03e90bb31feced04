//! The two-phase irradiation/cooling solver and element expansion

// standard library
use std::collections::HashMap;

// external crates
use log::{debug, warn};
use serde::{Deserialize, Serialize};

// nact modules
use nact_data::constants::AVOGADRO;
use nact_data::{DataStore, ReactionKind};
use nact_nuclide::{IsomerState, Nuclide};
use nact_utils::ValueExt;

// internal modules
use crate::bateman::terminal_atoms;
use crate::chain::{enumerate_chains, Chain};

/// Default maximum number of edges in an enumerated chain
pub const DEFAULT_DEPTH: usize = 6;

/// Product rows at or below this activity are dropped (Bq)
const ACTIVITY_CUTOFF: f64 = 1.0e-20;

/// How a product was reached from the starting nuclide
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contribution {
    /// First generation, at most one edge from the start
    Direct,
    /// Deeper chains through intermediate nuclides
    Secondary,
}

impl std::fmt::Display for Contribution {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let label = match self {
            Contribution::Direct => "direct",
            Contribution::Secondary => "secondary",
        };
        write!(f, "{label}")
    }
}

/// One product nuclide reached along one pathway
///
/// Emitted by [solve] and [solve_nuclide]. Several rows may share a
/// terminal nuclide when independent pathways converge on it; they are
/// deliberately kept apart so the pathway attribution survives. Use
/// [solve_element] with `merge` for the aggregated view.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ActivationProduct {
    /// The product nuclide
    pub nuclide: Nuclide,
    /// Activity at the end of the scenario (Bq)
    pub activity: f64,
    /// Atom count at the end of the scenario
    pub atoms: f64,
    /// Cross section of the first activation edge (barns), 0 for pure
    /// decay pathways
    pub cross_section: f64,
    /// Channel of the first edge, `None` for the remaining-parent row
    pub reaction: Option<ReactionKind>,
    /// Compact pathway, e.g. `Co-59 -(n,g)-> Co-60`
    pub pathway: String,
    /// First generation or deeper
    pub contribution: Contribution,
}

impl std::fmt::Display for ActivationProduct {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:<10} {} Bq  {} atoms  [{}]",
            self.nuclide.name(),
            self.activity.sci(4, 2),
            self.atoms.sci(4, 2),
            self.pathway
        )
    }
}

/// One product row of an element solve, tagged with its source isotope
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ElementProduct {
    /// Natural isotope the pathway starts from
    ///
    /// After merging this holds the dominant contributor; the remaining
    /// provenance is lost by design.
    pub parent: Nuclide,
    /// The product nuclide
    pub nuclide: Nuclide,
    /// Activity at the end of the scenario (Bq)
    pub activity: f64,
    /// Atom count at the end of the scenario
    pub atoms: f64,
    /// Cross section of the first activation edge (barns)
    pub cross_section: f64,
    /// Channel of the first edge, `None` for the remaining-parent row
    pub reaction: Option<ReactionKind>,
    /// Compact pathway of the dominant contributor
    pub pathway: String,
    /// First generation or deeper
    pub contribution: Contribution,
}

/// Rankable result properties
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SortProperty {
    /// Order by activity (Bq)
    Activity,
    /// Order by atom count
    Atoms,
}

/// Common ranking interface over the product row types
pub trait Ranked {
    /// Value of the given property for this row
    fn value(&self, property: SortProperty) -> f64;
}

impl Ranked for ActivationProduct {
    fn value(&self, property: SortProperty) -> f64 {
        match property {
            SortProperty::Activity => self.activity,
            SortProperty::Atoms => self.atoms,
        }
    }
}

impl Ranked for ElementProduct {
    fn value(&self, property: SortProperty) -> f64 {
        match property {
            SortProperty::Activity => self.activity,
            SortProperty::Atoms => self.atoms,
        }
    }
}

/// Sort product rows in descending order by property
pub fn sort_descending<T: Ranked>(rows: &mut [T], property: SortProperty) {
    rows.sort_by(|a, b| b.value(property).partial_cmp(&a.value(property)).unwrap());
}

/// Solve an irradiation/cooling scenario for a single starting nuclide
///
/// The target accepts any identifier form understood by [Nuclide]. Mass is
/// the sample mass in grams, flux the thermal neutron flux in n/cm2/s, and
/// both times are in seconds. Unknown identifiers and nuclides with no
/// pathways both produce an empty result.
///
/// ```rust, ignore
/// // two weeks in-core, no cooling
/// let products = solve(&store, "Lu-176", 1.0, 2.2e14, 14.0 * 86400.0, 0.0);
/// for row in &products {
///     println!("{row}");
/// }
/// ```
pub fn solve(
    store: &DataStore,
    target: &str,
    mass: f64,
    flux: f64,
    irradiation_time: f64,
    cooling_time: f64,
) -> Vec<ActivationProduct> {
    match Nuclide::try_from(target) {
        Ok(nuclide) => solve_nuclide(
            store,
            &nuclide,
            mass,
            flux,
            irradiation_time,
            cooling_time,
            1.0,
            DEFAULT_DEPTH,
        ),
        Err(e) => {
            warn!("{e}");
            Vec::new()
        }
    }
}

/// [solve] with explicit abundance scaling and chain depth
///
/// The irradiation phase enumerates chains under the given flux and grows
/// each to the end of irradiation. When a cooling time is set, every
/// surviving terminal re-enumerates under zero flux, seeded with the atoms
/// it accumulated, and the cooling pathway is appended to the irradiation
/// pathway. Results are sorted by activity, largest first.
#[allow(clippy::too_many_arguments)]
pub fn solve_nuclide(
    store: &DataStore,
    start: &Nuclide,
    mass: f64,
    flux: f64,
    irradiation_time: f64,
    cooling_time: f64,
    abundance: f64,
    depth: usize,
) -> Vec<ActivationProduct> {
    let atoms = mass * abundance * AVOGADRO / start.mass as f64;
    if !atoms.is_finite() || atoms <= 0.0 {
        return Vec::new();
    }

    // irradiation phase
    let chains = enumerate_chains(store, start, flux, depth);
    debug!("{} chains from {start} at flux {flux}", chains.len());

    let mut grown: Vec<(Chain, f64)> = chains
        .into_iter()
        .filter_map(|chain| {
            let n = terminal_atoms(atoms, &chain.rates, &chain.removal, irradiation_time);
            (n > 0.0).then_some((chain, n))
        })
        .collect();

    // cooling phase: restart from every surviving terminal at zero flux
    if cooling_time > 0.0 {
        grown = grown
            .into_iter()
            .flat_map(|(irradiation, n)| {
                enumerate_chains(store, irradiation.terminal(), 0.0, depth)
                    .into_iter()
                    .filter_map(|tail| {
                        let cooled = terminal_atoms(n, &tail.rates, &tail.removal, cooling_time);
                        (cooled > 0.0).then(|| (irradiation.join(&tail), cooled))
                    })
                    .collect::<Vec<_>>()
            })
            .collect();
    }

    let mut products: Vec<ActivationProduct> = grown
        .into_iter()
        .filter_map(|(chain, n)| {
            let nuclide = chain.terminal().clone();
            let activity = n * store.lambda(&nuclide);
            (activity > ACTIVITY_CUTOFF).then(|| ActivationProduct {
                activity,
                atoms: n,
                cross_section: chain.first_activation_sigma(),
                reaction: chain.reactions.first().copied(),
                pathway: chain.descriptor(),
                contribution: if chain.edge_count() <= 1 {
                    Contribution::Direct
                } else {
                    Contribution::Secondary
                },
                nuclide,
            })
        })
        .collect();

    sort_descending(&mut products, SortProperty::Activity);
    products
}

/// Solve a scenario for every natural isotope of an element
///
/// The element mass is split over its natural isotopes by abundance and
/// each isotope solved in turn. With `merge` set, rows converging on the
/// same product nuclide are combined by summing atoms and activity; the
/// pathway fields keep those of the dominant contributor. Elements without
/// abundance data yield an empty result.
pub fn solve_element(
    store: &DataStore,
    element: &str,
    mass: f64,
    flux: f64,
    irradiation_time: f64,
    cooling_time: f64,
    merge: bool,
) -> Vec<ElementProduct> {
    let mut rows = Vec::new();

    for isotope in store.isotopes_of(element) {
        let parent = Nuclide::new(element, isotope.mass, IsomerState::Ground);
        let products = solve_nuclide(
            store,
            &parent,
            mass * isotope.abundance,
            flux,
            irradiation_time,
            cooling_time,
            1.0,
            DEFAULT_DEPTH,
        );

        rows.extend(products.into_iter().map(|p| ElementProduct {
            parent: parent.clone(),
            nuclide: p.nuclide,
            activity: p.activity,
            atoms: p.atoms,
            cross_section: p.cross_section,
            reaction: p.reaction,
            pathway: p.pathway,
            contribution: p.contribution,
        }));
    }

    sort_descending(&mut rows, SortProperty::Activity);
    if merge {
        rows = merge_terminals(rows);
        sort_descending(&mut rows, SortProperty::Activity);
    }
    rows
}

/// Combine rows sharing a terminal nuclide by summing atoms and activity
///
/// Rows arrive sorted by activity, so the representative fields are always
/// those of the dominant pathway.
fn merge_terminals(rows: Vec<ElementProduct>) -> Vec<ElementProduct> {
    let mut merged: Vec<ElementProduct> = Vec::new();
    let mut index: HashMap<Nuclide, usize> = HashMap::new();

    for row in rows {
        match index.get(&row.nuclide) {
            Some(&i) => {
                merged[i].activity += row.activity;
                merged[i].atoms += row.atoms;
            }
            None => {
                index.insert(row.nuclide.clone(), merged.len());
                merged.push(row);
            }
        }
    }
    merged
}

impl std::fmt::Display for ElementProduct {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:<10} {} Bq  from {}  [{}]",
            self.nuclide.name(),
            self.activity.sci(4, 2),
            self.parent.name(),
            self.pathway
        )
    }
}
