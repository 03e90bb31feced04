//! Compliance evaluation against clearance/exemption limits

// standard library
use std::collections::BTreeMap;

// external crates
use log::debug;
use serde::{Deserialize, Serialize};

// nact modules
use nact_data::constants::SECONDS_PER_DAY;
use nact_data::{DataStore, LimitKind};
use nact_nuclide::Nuclide;
use nact_solver::solve_element;
use nact_utils::ValueExt;

/// Sentinel for a waste that effectively never clears (100 years or more)
pub const EFFECTIVELY_NEVER: f64 = -1.0;

/// Cooling estimates beyond this horizon report [EFFECTIVELY_NEVER] (days)
const CLEARANCE_HORIZON_DAYS: f64 = 36_525.0;

/// An irradiated waste package to evaluate
///
/// Impurities are elemental concentrations in ppm by mass of the sample.
/// The optional main element stands for the bulk of the sample itself and
/// enters the evaluation at full sample mass. The waste mass is the total
/// package the sample activity is diluted into.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct WasteScenario {
    /// Elemental impurities as (symbol, ppm by mass) pairs
    pub impurities: Vec<(String, f64)>,
    /// Bulk element of the sample itself, if evaluated
    pub main_element: Option<String>,
    /// Sample mass in the beam (g)
    pub sample_mass: f64,
    /// Thermal neutron flux (n/cm2/s)
    pub flux: f64,
    /// Irradiation time (s)
    pub irradiation_time: f64,
    /// Cooling time (s)
    pub cooling_time: f64,
    /// Mass of the waste package the activity dilutes into (g)
    pub waste_mass: f64,
    /// Which limit vector to evaluate against
    pub limit: LimitKind,
}

/// Evaluation detail for one regulated product nuclide
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ComplianceRow {
    /// The regulated nuclide
    pub nuclide: Nuclide,
    /// Total activity in the sample (Bq)
    pub activity: f64,
    /// Specific activity over the waste package (Bq/g)
    pub specific_activity: f64,
    /// The limit evaluated against (Bq/g)
    pub limit: f64,
    /// Fraction of the limit used up
    pub fraction: f64,
}

/// Bottom line of a compliance evaluation
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ComplianceSummary {
    /// Sum over all regulated nuclides of specific activity over limit
    pub sum_index: f64,
    /// Whether the sum index is at or below one
    pub is_compliant: bool,
    /// Estimated cooling time until compliant (days)
    ///
    /// 0 when already compliant, [EFFECTIVELY_NEVER] when the dominant
    /// nuclide is stable or the estimate runs past a century. The estimate
    /// assumes decay is governed by the dominant nuclide's decay constant,
    /// so treat it as an indication rather than a guarantee for mixtures
    /// with comparable fractions and disparate half-lives.
    pub days_to_clear: f64,
    /// Nuclide using up the largest fraction of its limit
    pub dominant: Option<Nuclide>,
}

/// Full outcome of a compliance evaluation
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ComplianceReport {
    /// Per-nuclide detail, ranked by limit fraction
    pub rows: Vec<ComplianceRow>,
    /// The bottom line
    pub summary: ComplianceSummary,
}

impl ComplianceReport {
    /// Serialise the report to a JSON string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl std::fmt::Display for ComplianceReport {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(
            f,
            "sum index {} => {}",
            self.summary.sum_index.sci(4, 2),
            if self.summary.is_compliant {
                "compliant"
            } else {
                "not compliant"
            }
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "  {:<10} {} Bq/g of {} Bq/g ({} of limit)",
                row.nuclide.name(),
                row.specific_activity.sci(4, 2),
                row.limit.sci(4, 2),
                row.fraction.sci(4, 2)
            )?;
        }
        Ok(())
    }
}

/// Evaluate a waste scenario against the selected limit vector
///
/// Every impurity is activated through [solve_element] and the terminal
/// activities are pooled into a per-nuclide inventory. Nuclides without a
/// limit of the selected kind drop out of the sums entirely. Elements
/// unknown to the store contribute nothing rather than failing the whole
/// evaluation.
pub fn compliance(store: &DataStore, scenario: &WasteScenario) -> ComplianceReport {
    // active set: impurities plus the bulk element at full sample mass
    let mut active: Vec<(String, f64)> = scenario.impurities.clone();
    if let Some(main) = &scenario.main_element {
        active.push((main.clone(), 1.0e6));
    }

    // pool terminal activities into a per-nuclide inventory (Bq)
    let mut inventory: BTreeMap<Nuclide, f64> = BTreeMap::new();
    for (element, ppm) in &active {
        let mass = ppm * scenario.sample_mass * 1.0e-6;
        if mass <= 0.0 {
            continue;
        }
        let products = solve_element(
            store,
            element,
            mass,
            scenario.flux,
            scenario.irradiation_time,
            scenario.cooling_time,
            true,
        );
        debug!("{element}: {} product nuclides at {ppm} ppm", products.len());
        for product in products {
            *inventory.entry(product.nuclide).or_insert(0.0) += product.activity;
        }
    }

    // fraction of limit used up per regulated nuclide
    let mut rows: Vec<ComplianceRow> = Vec::new();
    let mut sum_index = 0.0;
    for (nuclide, activity) in inventory {
        let Some(limit) = store.limit(&nuclide, scenario.limit) else {
            continue;
        };
        let specific_activity = activity / scenario.waste_mass;
        let fraction = specific_activity / limit;
        sum_index += fraction;
        rows.push(ComplianceRow {
            nuclide,
            activity,
            specific_activity,
            limit,
            fraction,
        });
    }
    rows.sort_by(|a, b| b.fraction.partial_cmp(&a.fraction).unwrap());

    let dominant = rows.first().map(|row| row.nuclide.clone());
    let is_compliant = sum_index <= 1.0;
    let days_to_clear = if is_compliant {
        0.0
    } else {
        cooling_estimate(store, sum_index, dominant.as_ref())
    };

    ComplianceReport {
        rows,
        summary: ComplianceSummary {
            sum_index,
            is_compliant,
            days_to_clear,
            dominant,
        },
    }
}

/// Days until the sum index decays to one, by the dominant nuclide alone
fn cooling_estimate(store: &DataStore, sum_index: f64, dominant: Option<&Nuclide>) -> f64 {
    let lambda = dominant.map(|n| store.lambda(n)).unwrap_or(0.0);
    if lambda <= 0.0 {
        return EFFECTIVELY_NEVER;
    }

    let days = sum_index.ln() / lambda / SECONDS_PER_DAY;
    if days.is_finite() && days <= CLEARANCE_HORIZON_DAYS {
        days
    } else {
        EFFECTIVELY_NEVER
    }
}
