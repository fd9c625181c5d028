//! Minimizer driver: restarted Nelder-Mead direct search over the mixing
//! objective, plus result normalization.
//!
//! The near-zero penalty makes the objective discontinuous, which defeats
//! line-searched gradient methods (steps collapse against the threshold
//! wall before the match residual is driven out). A simplex search crawls
//! along the kink instead, but a single Nelder-Mead run can itself
//! collapse onto a non-optimal point, so the driver rebuilds a full-size
//! simplex around each converged result until a restart stops improving
//! it. The analytic gradient is still evaluated at the solution as a
//! convergence diagnostic.

use nalgebra::{DMatrix, DVector};

use crate::error::MixError;

use super::objective::Objective;

/// Total iteration budget shared across all restarts; exhausting it
/// without convergence is reported as non-convergence.
const MAX_ITERATIONS: usize = 50_000;

/// Upper bound on simplex restarts.
const MAX_RESTARTS: usize = 30;

/// Convergence of one simplex run: relative spread of objective values
/// across the simplex.
const SPREAD_TOLERANCE: f64 = 1e-10;

/// Convergence of the restart loop: the minimum relative improvement a
/// restart must deliver for the search to continue.
const RESTART_TOLERANCE: f64 = 1e-9;

/// Per-coordinate offset of the initial simplex around its start point.
const INITIAL_SIMPLEX_STEP: f64 = 0.1;

// Standard Nelder-Mead coefficients.
const REFLECTION: f64 = 1.0;
const EXPANSION: f64 = 2.0;
const CONTRACTION: f64 = 0.5;
const SHRINK: f64 = 0.5;

/// A converged, normalized solve result.
#[derive(Debug, Clone)]
pub(crate) struct Solution {
    /// Non-negative (in practice) weights summing to exactly 1, one per
    /// palette row.
    pub weights: DVector<f64>,
    /// Final objective value before normalization.
    pub objective: f64,
}

/// One simplex vertex with its cached objective value.
struct Vertex {
    point: DVector<f64>,
    value: f64,
}

/// Run one Nelder-Mead search from a full-size simplex around `start`,
/// drawing iterations from the shared `budget`, and return the best
/// vertex once the simplex's value spread has converged.
fn run_simplex(
    objective: &Objective<'_>,
    start: &DVector<f64>,
    budget: &mut usize,
) -> Result<Vertex, MixError> {
    let n = start.len();
    let mut simplex: Vec<Vertex> = Vec::with_capacity(n + 1);
    simplex.push(Vertex {
        value: objective.value(start),
        point: start.clone(),
    });
    for i in 0..n {
        let mut point = start.clone();
        point[i] += INITIAL_SIMPLEX_STEP;
        simplex.push(Vertex {
            value: objective.value(&point),
            point,
        });
    }
    if let Some(vertex) = simplex.iter().find(|v| !v.value.is_finite()) {
        return Err(MixError::Optimization(format!(
            "objective is not finite at the initial simplex (value: {})",
            vertex.value
        )));
    }

    while *budget > 0 {
        *budget -= 1;

        // Best first, worst last. Values are finite here, so the ordering
        // is total.
        simplex.sort_by(|a, b| a.value.total_cmp(&b.value));

        let best = simplex[0].value;
        let worst = simplex[n].value;
        if (worst - best).abs() <= SPREAD_TOLERANCE * (1.0 + best.abs()) {
            return Ok(simplex.swap_remove(0));
        }

        // Centroid of all vertices except the worst.
        let mut centroid = DVector::zeros(n);
        for vertex in &simplex[..n] {
            centroid += &vertex.point;
        }
        centroid /= n as f64;

        let second_worst = simplex[n - 1].value;
        let reflected = &centroid + (&centroid - &simplex[n].point) * REFLECTION;
        let reflected_value = objective.value(&reflected);

        if reflected_value < best {
            // Reflection found a new best; try going further.
            let expanded = &centroid + (&reflected - &centroid) * EXPANSION;
            let expanded_value = objective.value(&expanded);
            simplex[n] = if expanded_value < reflected_value {
                Vertex {
                    point: expanded,
                    value: expanded_value,
                }
            } else {
                Vertex {
                    point: reflected,
                    value: reflected_value,
                }
            };
            continue;
        }

        if reflected_value < second_worst {
            simplex[n] = Vertex {
                point: reflected,
                value: reflected_value,
            };
            continue;
        }

        // Contract toward the better of the worst vertex and its
        // reflection.
        let contracted = if reflected_value < worst {
            &centroid + (&reflected - &centroid) * CONTRACTION
        } else {
            &centroid + (&simplex[n].point - &centroid) * CONTRACTION
        };
        let contracted_value = objective.value(&contracted);
        if contracted_value < worst.min(reflected_value) {
            simplex[n] = Vertex {
                point: contracted,
                value: contracted_value,
            };
            continue;
        }

        // Contraction failed: shrink every vertex toward the best.
        let best_point = simplex[0].point.clone();
        for vertex in &mut simplex[1..] {
            vertex.point = &best_point + (&vertex.point - &best_point) * SHRINK;
            vertex.value = objective.value(&vertex.point);
            if !vertex.value.is_finite() {
                return Err(MixError::Optimization(format!(
                    "objective became non-finite during search (value: {})",
                    vertex.value
                )));
            }
        }
    }

    simplex.sort_by(|a, b| a.value.total_cmp(&b.value));
    Err(MixError::Optimization(format!(
        "no convergence within the iteration budget (objective: {:.6e})",
        simplex[0].value
    )))
}

/// Minimize the mixing objective for the given palette matrix and target.
///
/// Weights start uniform at `1/n`. Each simplex run follows the classic
/// Nelder-Mead cycle (reflect, expand, contract, shrink); when a run
/// converges, a fresh full-size simplex is rebuilt around its best point
/// and the search continues until a restart no longer improves the value.
/// The search is fully deterministic: identical inputs give identical
/// results.
///
/// On success the best vertex's weights are normalized to sum exactly
/// to 1 (mandatory: the soft penalty only drives the sum near 1).
///
/// # Errors
///
/// [`MixError::Optimization`] on a non-finite objective, a degenerate
/// (vanishing or non-finite) final weight sum, or an exhausted iteration
/// or restart budget.
pub(crate) fn solve(colors: &DMatrix<f64>, target: &DVector<f64>) -> Result<Solution, MixError> {
    let n = colors.nrows();
    let objective = Objective::new(colors, target);

    let uniform = DVector::from_element(n, 1.0 / n as f64);
    let mut budget = MAX_ITERATIONS;
    let mut best = run_simplex(&objective, &uniform, &mut budget)?;

    let mut restarts = 0;
    loop {
        let candidate = run_simplex(&objective, &best.point, &mut budget)?;
        let improved = best.value - candidate.value > RESTART_TOLERANCE * (1.0 + best.value.abs());
        if candidate.value < best.value {
            best = candidate;
        }
        restarts += 1;
        if !improved {
            break;
        }
        if restarts >= MAX_RESTARTS {
            return Err(MixError::Optimization(format!(
                "no convergence after {restarts} simplex restarts (objective: {:.6e})",
                best.value
            )));
        }
    }

    let Vertex {
        point: mut weights,
        value,
    } = best;

    let sum = weights.sum();
    if !sum.is_finite() || sum.abs() < f64::EPSILON {
        return Err(MixError::Optimization(format!(
            "degenerate weight sum after optimization (sum: {sum})"
        )));
    }
    weights /= sum;

    tracing::debug!(
        iterations = MAX_ITERATIONS - budget,
        restarts,
        objective = value,
        weight_sum = sum,
        gradient_norm = objective.gradient(&weights).norm(),
        "Solver converged"
    );

    Ok(Solution {
        weights,
        objective: value,
    })
}
