//! Typed records at the loader boundary
//!
//! These mirror the columns of the library CSV files. The sources are
//! frequently hand-edited, so every numeric field goes through a tolerant
//! parser: `,` decimal separators and scientific notation are accepted, and
//! anything malformed reads as zero rather than failing the row.

// external crates
use serde::{Deserialize, Deserializer, Serialize};

/// A single activation reaction from the activation table
///
/// The parent is always a ground-state nuclide given by symbol and mass
/// number; the daughter is free text in any identifier form accepted by
/// [Nuclide](nact_nuclide::Nuclide). Columns other than the ones below are
/// ignored.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct ActivationRecord {
    /// Element symbol of the parent, e.g. 'Co'
    #[serde(rename = "Symbol")]
    pub symbol: String,

    /// Mass number of the parent
    #[serde(rename = "A", deserialize_with = "flexible_u32")]
    pub mass: u32,

    /// Identifier of the nuclide produced
    #[serde(rename = "Daughter_Isotope")]
    pub daughter: String,

    /// Reaction channel, e.g. "nγ"
    #[serde(rename = "Reaction")]
    pub reaction: String,

    /// Thermal cross section (barns)
    #[serde(rename = "Max_XS", deserialize_with = "flexible_f64")]
    pub cross_section: f64,

    /// Decay constant of the daughter (1/s), 0 when stable or unknown
    #[serde(rename = "Decay_Constant_Lambda", deserialize_with = "flexible_f64")]
    pub daughter_lambda: f64,

    /// Natural abundance fraction of the parent, 0 when not listed
    #[serde(rename = "Abundance", deserialize_with = "flexible_f64")]
    pub abundance: f64,
}

/// A single decay link from the decay table
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct DecayRecord {
    /// Identifier of the decaying nuclide
    #[serde(rename = "Parent_Isotope")]
    pub parent: String,

    /// Identifier of the nuclide populated by the decay
    #[serde(rename = "Child_Isotope")]
    pub daughter: String,

    /// Fraction of parent decays populating this daughter, in (0,1]
    #[serde(rename = "Branching_Ratio", deserialize_with = "flexible_f64")]
    pub branching: f64,

    /// Decay constant of the parent (1/s)
    #[serde(rename = "Parent_Lambda", deserialize_with = "flexible_f64")]
    pub parent_lambda: f64,

    /// Decay constant of the daughter (1/s), 0 when stable
    #[serde(rename = "Child_Lambda", deserialize_with = "flexible_f64")]
    pub daughter_lambda: f64,
}

/// Regulatory limits for a single nuclide
///
/// Either limit may be blank independently of the other, meaning the
/// nuclide is unregulated for that kind.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct LimitRecord {
    /// Identifier of the regulated nuclide
    #[serde(rename = "Isotope")]
    pub nuclide: String,

    /// Clearance limit (Bq/g), blank for unregulated
    #[serde(rename = "Limit_Clearance_Bq_g", deserialize_with = "flexible_option")]
    pub clearance: Option<f64>,

    /// Exemption limit (Bq/g), blank for unregulated
    #[serde(rename = "Limit_Exemption_Bq_g", deserialize_with = "flexible_option")]
    pub exemption: Option<f64>,
}

/// Read a numeric field the way the library files actually write them
///
/// ```text
/// "2090"      -> 2090.0
/// "1,2068e-6" -> 1.2068e-6
/// "garbage"   -> 0.0
/// ""          -> 0.0
/// ```
pub(crate) fn parse_flexible(text: &str) -> f64 {
    text.trim().replace(',', ".").parse().unwrap_or(0.0)
}

fn flexible_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let text: Option<String> = Option::deserialize(deserializer)?;
    Ok(parse_flexible(text.as_deref().unwrap_or("")))
}

fn flexible_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let text: Option<String> = Option::deserialize(deserializer)?;
    Ok(parse_flexible(text.as_deref().unwrap_or("")) as u32)
}

/// As [flexible_f64], but an empty field is a missing value, not zero
fn flexible_option<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let text: Option<String> = Option::deserialize(deserializer)?;
    match text.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => Ok(Some(parse_flexible(value))),
    }
}
