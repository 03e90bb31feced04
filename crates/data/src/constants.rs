//! Physical constants shared across the toolkit

/// Avogadro constant (atoms/mol), 2019 SI exact value
pub const AVOGADRO: f64 = 6.02214076e23;

/// One barn in cm2
pub const BARN_TO_CM2: f64 = 1.0e-24;

/// Seconds in a day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Decay constants at or below this are treated as stable (1/s)
pub const LAMBDA_FLOOR: f64 = 1.0e-40;
