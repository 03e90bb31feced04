//! Common utility for extended `std` types
//!
//! These are left public for convenience.
//!
//! Prettier formatting for scientific numbers and capitalised nuclide
//! symbols are useful across every crate in the toolkit.

// Alias for the format! macro
pub use std::format as f;

/// Capilalises the first letter in a string
///
/// Everything after the first letter is lowered, so mixed-case element
/// symbols normalise cleanly.
///
/// ```rust
/// # use nact_utils::capitalise;
/// assert_eq!(capitalise("co"), "Co".to_string());
/// assert_eq!(capitalise("LU"), "Lu".to_string());
/// ```
pub fn capitalise(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        Some(f) => f.to_uppercase().collect::<String>() + c.as_str().to_lowercase().as_str(),
        None => String::new(),
    }
}

/// Consistent scientific notation for report values
pub trait ValueExt {
    /// Scientific representation with a fixed mantissa precision and a
    /// zero-padded signed exponent
    ///
    /// The default `LowerExp` output varies the exponent width, which makes
    /// for ragged report columns. Activities and atom counts span many
    /// orders of magnitude, so everything is printed the same way instead.
    ///
    /// ```rust
    /// # use nact_utils::ValueExt;
    /// assert_eq!((6.02214076e23).sci(4, 2), "6.0221e+23".to_string());
    /// assert_eq!((-1.0).sci(5, 2), "-1.00000e+00".to_string());
    /// ```
    fn sci(&self, precision: usize, exp_pad: usize) -> String;
}

impl ValueExt for f64 {
    fn sci(&self, precision: usize, exp_pad: usize) -> String {
        let text = f!("{self:.precision$e}");
        // split "1.2068e-6" into the mantissa and the signed exponent
        let (mantissa, exponent) = text.split_once('e').unwrap();
        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exponent),
        };
        f!("{mantissa}e{sign}{digits:0>exp_pad$}")
    }
}
