//! The mixing objective: color-matching error plus soft constraint
//! penalties, with its analytic gradient.

use nalgebra::{DMatrix, DVector};

/// Weight of the soft sum-to-one penalty `SUM_PENALTY * (sum(w) - 1)^2`.
///
/// The minimizer is unconstrained, so the simplex constraint is enforced
/// softly here and made exact by post-normalization in the driver.
pub(crate) const SUM_PENALTY: f64 = 100.0;

/// Flat penalty added for every weight below [`STARVATION_THRESHOLD`].
///
/// This biases the optimizer away from dropping a palette color to zero,
/// preferring visually balanced mixes over subset selection. It is a
/// modeling trade-off, not sparsity control: it can make truly-optimal
/// few-color mixes harder to reach.
pub(crate) const STARVATION_PENALTY: f64 = 1000.0;

/// Weights below this threshold count as starved.
pub(crate) const STARVATION_THRESHOLD: f64 = 0.01;

/// Constant subtracted from the gradient of a starved component.
///
/// The starvation penalty is a step function with zero derivative almost
/// everywhere; this nudge is its stand-in, a fixed descent direction that
/// pushes starved weights back above the threshold where the flat penalty
/// disappears.
pub(crate) const STARVATION_NUDGE: f64 = 2000.0;

/// The scalar error minimized by the solver, bound to one palette matrix
/// and target vector.
///
/// Given weights `w`, palette matrix `C` (rows = palette entries, columns
/// = the 3 color-space axes) and target `t`:
///
/// ```text
/// f(w) = ||C'w - t||^2                     color-matching error
///      + SUM_PENALTY * (sum(w) - 1)^2      soft simplex constraint
///      + STARVATION_PENALTY * #{i : w_i < STARVATION_THRESHOLD}
/// ```
///
/// The gradient of the two smooth terms is exact:
/// `2 C (C'w - t) + 2 SUM_PENALTY (sum(w) - 1)` per component, with the
/// starvation nudge added for components below the threshold.
pub(crate) struct Objective<'a> {
    colors: &'a DMatrix<f64>,
    target: &'a DVector<f64>,
}

impl<'a> Objective<'a> {
    pub(crate) fn new(colors: &'a DMatrix<f64>, target: &'a DVector<f64>) -> Self {
        debug_assert!(colors.nrows() > 0, "empty palettes are rejected upstream");
        debug_assert_eq!(colors.ncols(), target.len());
        Self { colors, target }
    }

    /// The mixed color estimate `C'w` for the given weights.
    pub(crate) fn mixed(&self, weights: &DVector<f64>) -> DVector<f64> {
        self.colors.transpose() * weights
    }

    /// Evaluate the objective at `weights`.
    pub(crate) fn value(&self, weights: &DVector<f64>) -> f64 {
        let residual = self.mixed(weights) - self.target;
        let distance = residual.norm_squared();

        let sum = weights.sum();
        let sum_penalty = SUM_PENALTY * (sum - 1.0) * (sum - 1.0);

        let starved = weights
            .iter()
            .filter(|&&w| w < STARVATION_THRESHOLD)
            .count();
        let starvation_penalty = starved as f64 * STARVATION_PENALTY;

        distance + sum_penalty + starvation_penalty
    }

    /// Evaluate the analytic gradient at `weights`, as a dense vector of
    /// the same length.
    pub(crate) fn gradient(&self, weights: &DVector<f64>) -> DVector<f64> {
        let residual = self.mixed(weights) - self.target;
        // d/dw ||C'w - t||^2 = 2 C (C'w - t)
        let mut grad = self.colors * residual * 2.0;

        // d/dw SUM_PENALTY (sum(w) - 1)^2: identical for every component.
        let sum_term = 2.0 * SUM_PENALTY * (weights.sum() - 1.0);
        for i in 0..grad.len() {
            grad[i] += sum_term;
            if weights[i] < STARVATION_THRESHOLD {
                grad[i] -= STARVATION_NUDGE;
            }
        }
        grad
    }
}
