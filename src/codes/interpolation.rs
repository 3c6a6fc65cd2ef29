//! Multivariate interpolation on the full grid `F^m`.
//!
//! The `m`-variable problem is reduced to univariate Lagrange interpolation
//! along the last variable. For every assignment of the first `m - 1`
//! variables, the values along the last axis determine a univariate
//! polynomial of degree `< d` with `d = min(order + 1, q)`. Collecting its
//! `k`-th coefficient over all assignments yields a new evaluation vector on
//! `F^(m-1)`, which is interpolated recursively with degree bound
//! `order - k` and then multiplied by `x_{m-1}^k`.
//!
//! Coefficients are accumulated as plain exponent/value pairs; only the
//! top-level call builds an [`MPoly`].

use alloc::vec;
use alloc::vec::Vec;

use log::trace;

use crate::algebra::field::FiniteField;
use crate::codes::parameters::grid_size;
use crate::error::{Error, Result};
use crate::structures::mpoly::MPoly;
use crate::structures::poly::LagrangeBasis;

/// Recover the polynomial of total degree at most `order` in `num_vars`
/// variables whose values on the grid are `evaluation`.
///
/// `evaluation` must hold one value per grid point, in grid order. If it is
/// the evaluation vector of such a polynomial, that polynomial is returned.
/// Otherwise the result is some deterministic polynomial of total degree at
/// most `order` whose evaluation differs from the input.
///
/// # Errors
///
/// - [`Error::LengthMismatch`] if `evaluation.len() != q^num_vars`.
/// - [`Error::InvalidField`] if `F` is not a valid field.
///
/// # Example
///
/// ```
/// use muller::codes::interpolate;
/// use muller::Fp;
///
/// type F3 = Fp<3>;
///
/// let word: Vec<F3> = [1, 2, 0, 0, 2, 1, 1, 1, 1].map(F3::new).to_vec();
/// let p = interpolate(&word, 2, 2).unwrap();
/// assert_eq!(p.to_string(), "x0*x1 + x1^2 + x0 + x1 + 1");
/// ```
pub fn interpolate<F: FiniteField>(
    evaluation: &[F],
    num_vars: usize,
    order: usize,
) -> Result<MPoly<F>> {
    F::validate().map_err(|reason| Error::InvalidField { reason })?;

    let q = usize::try_from(F::ORDER).map_err(|_| Error::InvalidField {
        reason: "field size does not fit in usize",
    })?;
    let expected = grid_size(q, num_vars)?;
    if evaluation.len() != expected {
        return Err(Error::LengthMismatch {
            expected,
            got: evaluation.len(),
        });
    }

    let interpolator = Interpolator::new(q, order)?;
    let mut terms = Vec::new();
    let mut exponents = vec![0; num_vars];
    interpolator.run(evaluation, num_vars, order, &mut exponents, &mut terms);

    Ok(MPoly::from_terms(num_vars, terms))
}

/// Lagrange bases on the first `d` field elements, for every `d` the
/// recursion can ask for.
struct Interpolator<F> {
    q: usize,
    bases: Vec<LagrangeBasis<F>>,
}

impl<F: FiniteField> Interpolator<F> {
    fn new(q: usize, order: usize) -> Result<Self> {
        let max_nodes = order.saturating_add(1).min(q);
        let nodes: Vec<F> = F::elements().take(max_nodes).collect();
        let bases = (1..=max_nodes)
            .map(|d| {
                LagrangeBasis::new(&nodes[..d]).ok_or(Error::InvalidField {
                    reason: "canonical element order repeats an element",
                })
            })
            .collect::<Result<_>>()?;
        Ok(Self { q, bases })
    }

    /// Interpolate `evaluation` on `F^num_vars` and push the resulting terms.
    ///
    /// `exponents` carries the powers already fixed for the variables at or
    /// beyond `num_vars`; entries below `num_vars` are zero on entry and exit.
    fn run(
        &self,
        evaluation: &[F],
        num_vars: usize,
        order: usize,
        exponents: &mut Vec<usize>,
        terms: &mut Vec<(Vec<usize>, F)>,
    ) {
        if num_vars == 0 || order == 0 {
            if !evaluation[0].is_zero() {
                terms.push((exponents.clone(), evaluation[0]));
            }
            return;
        }

        let d = (order + 1).min(self.q);
        let n_by_q = evaluation.len() / self.q;
        let basis = &self.bases[d - 1];
        trace!(
            "interpolating {} slices on {} nodes, {} variables, order {}",
            n_by_q,
            d,
            num_vars,
            order
        );

        // coefficients[k][i]: coefficient of x_{m-1}^k in slice i
        let mut coefficients = vec![vec![F::ZERO; n_by_q]; d];
        let mut values = Vec::with_capacity(d);
        for i in 0..n_by_q {
            values.clear();
            values.extend((0..d).map(|j| evaluation[i + j * n_by_q]));
            let univariate = basis.interpolate(&values);
            for (k, row) in coefficients.iter_mut().enumerate() {
                row[i] = univariate.coeff(k);
            }
        }

        let last = num_vars - 1;
        for (k, row) in coefficients.iter().enumerate() {
            if row.iter().all(|c| c.is_zero()) {
                continue;
            }
            exponents[last] = k;
            self.run(row, last, order - k, exponents, terms);
        }
        exponents[last] = 0;
    }
}
