//! Closed-form Bateman integration of a single linear chain

/// Removal rates closer than this are treated as degenerate (1/s)
const DEGENERACY_PROXIMITY: f64 = 1.0e-12;

/// Perturbation applied to lift a degenerate removal rate (1/s)
const DEGENERACY_LIFT: f64 = 1.0e-13;

/// Smallest denominator magnitude allowed after the lift
const MIN_DENOMINATOR: f64 = 1.0e-50;

/// Terminal atom counts below this are discarded
const ATOM_FLOOR: f64 = 1.0e-25;

/// Atoms at the terminal node of a linear chain after time `t`
///
/// Evaluates the classical Bateman solution for a chain with `n` nodes,
/// per-edge transfer coefficients `rates` (length n-1) and per-node removal
/// rates `removal` (length n), starting from `n0` atoms at the head and
/// none deeper:
///
/// ```text
/// N(t) = n0 * (k1 * ... * k_{n-1}) * sum_i exp(-mu_i t) / prod_{j!=i} (mu_j - mu_i)
/// ```
///
/// The closed form has removable singularities when two removal rates
/// coincide, so near-equal rates are lifted apart by a small epsilon before
/// the denominators are formed. The induced error is far below engineering
/// tolerance for activities, which span many orders of magnitude.
///
/// Output is always finite and non-negative; counts below the atom floor
/// collapse to zero.
pub(crate) fn terminal_atoms(n0: f64, rates: &[f64], removal: &[f64], time: f64) -> f64 {
    debug_assert_eq!(removal.len(), rates.len() + 1);

    // a chain with a dead edge transfers nothing
    if rates.iter().any(|k| *k == 0.0) {
        return 0.0;
    }

    // the single node chain is pure removal
    if rates.is_empty() {
        return floor(n0 * (-removal[0] * time).exp());
    }

    // deeper nodes start empty
    if time <= 0.0 {
        return 0.0;
    }

    let mut mu = removal.to_vec();
    lift_degeneracies(&mut mu);

    let mut sum = 0.0;
    for i in 0..mu.len() {
        let mut denominator = 1.0;
        for j in 0..mu.len() {
            if j != i {
                denominator *= mu[j] - mu[i];
            }
        }
        if denominator.abs() < MIN_DENOMINATOR {
            denominator = MIN_DENOMINATOR * denominator.signum();
        }
        sum += (-mu[i] * time).exp() / denominator;
    }

    let coefficient: f64 = n0 * rates.iter().product::<f64>();
    floor(coefficient * sum)
}

/// Clamp non-finite, negative and sub-floor counts to zero
fn floor(atoms: f64) -> f64 {
    if atoms.is_finite() && atoms >= ATOM_FLOOR {
        atoms
    } else {
        0.0
    }
}

/// Separate near-equal removal rates by lifting the later entry once
///
/// Rates too large for the lift to register fall through to the
/// denominator clamp instead.
fn lift_degeneracies(mu: &mut [f64]) {
    for i in 1..mu.len() {
        if mu[..i]
            .iter()
            .any(|earlier| (mu[i] - earlier).abs() < DEGENERACY_PROXIMITY)
        {
            mu[i] += DEGENERACY_LIFT;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const N0: f64 = 1.0e21;

    fn relative(a: f64, b: f64) -> f64 {
        (a - b).abs() / b.abs().max(1e-300)
    }

    #[test]
    fn trivial_chain_is_pure_removal() {
        let lambda: f64 = 1.2068e-6;
        let t: f64 = 3.0 * 86400.0;
        let expected = N0 * (-lambda * t).exp();
        assert!(relative(terminal_atoms(N0, &[], &[lambda], t), expected) < 1e-12);

        // stable nuclide never loses atoms
        assert_eq!(terminal_atoms(N0, &[], &[0.0], t), N0);
    }

    #[test]
    fn two_node_chain_matches_hand_expansion() {
        // saturation of a daughter under constant production
        let k = 4.0e-9;
        let mu0: f64 = 5.0e-9;
        let mu1: f64 = 2.0e-6;
        let t: f64 = 14.0 * 86400.0;

        let expected = N0 * k * ((-mu0 * t).exp() / (mu1 - mu0) + (-mu1 * t).exp() / (mu0 - mu1));
        let actual = terminal_atoms(N0, &[k], &[mu0, mu1], t);
        assert!(relative(actual, expected) < 1e-12);
    }

    #[test]
    fn branch_conservation_under_pure_decay() {
        // single decay edge with beta = 1 onto a stable daughter: every
        // atom leaving the parent arrives at the daughter
        let lambda_p = 3.2054e-5;
        let t = 6.0 * 3600.0;

        let parent = terminal_atoms(N0, &[], &[lambda_p], t);
        let daughter = terminal_atoms(N0, &[lambda_p], &[lambda_p, 0.0], t);

        assert!(relative(parent, N0 * (-lambda_p * t).exp()) < 1e-9);
        assert!(relative(daughter, N0 * (1.0 - (-lambda_p * t).exp())) < 1e-9);
        assert!(relative(parent + daughter, N0) < 1e-9);
    }

    #[test]
    fn degenerate_rates_stay_finite() {
        // identical removal rates hit the removable singularity head-on
        let mu = 1.0e-6;
        let atoms = terminal_atoms(N0, &[1.0e-6], &[mu, mu], 1.0e6);
        assert!(atoms.is_finite());
        assert!(atoms > 0.0);

        // the lifted result should track the analytic limit k*t*exp(-mu*t)
        let limit = N0 * 1.0e-6 * 1.0e6 * (-mu * 1.0e6_f64).exp();
        assert!(relative(atoms, limit) < 1e-4);
    }

    #[test]
    fn large_degenerate_rates_terminate() {
        // above a few hundred per second the lift is below one ulp of the
        // rate; the denominator clamp has to carry these instead
        let atoms = terminal_atoms(N0, &[1.0e3], &[1.0e3, 1.0e3], 10.0);
        assert!(atoms.is_finite());
        assert!(atoms >= 0.0);
    }

    #[test]
    fn zero_rate_short_circuits() {
        assert_eq!(terminal_atoms(N0, &[0.0], &[1e-6, 1e-6], 1e6), 0.0);
        assert_eq!(terminal_atoms(N0, &[1e-9, 0.0], &[1e-6, 1e-5, 1e-4], 1e6), 0.0);
    }

    #[test]
    fn deeper_nodes_start_empty() {
        assert_eq!(terminal_atoms(N0, &[1e-6], &[1e-6, 1e-5], 0.0), 0.0);
    }

    #[test]
    fn output_never_negative() {
        // sweep a few decades of time over a three node chain
        let rates = [2.3e-5, 4.0e-9];
        let removal = [2.5e-5, 4.2e-9, 7.7e-13];
        for exponent in 0..12 {
            let t = 10.0_f64.powi(exponent);
            let atoms = terminal_atoms(N0, &rates, &removal, t);
            assert!(atoms.is_finite());
            assert!(atoms >= 0.0);
        }
    }
}
