//! The evaluation grid `F^m`.
//!
//! Points are listed like an odometer whose lowest digit is variable 0:
//! the point `(a_0, …, a_{m-1})` sits at index `Σ index(a_j) · q^j`. Generator
//! matrix columns, polynomial evaluation and interpolation all rely on this
//! order.

use alloc::vec;
use alloc::vec::Vec;

use crate::algebra::field::FiniteField;
use crate::structures::mpoly::MPoly;

/// Iterator over the points of `F^num_vars` in grid order.
///
/// # Example
///
/// ```
/// use muller::codes::Grid;
/// use muller::Fp;
///
/// let points: Vec<Vec<u64>> = Grid::<Fp<3>>::new(2)
///     .map(|p| p.iter().map(|x| x.value()).collect())
///     .take(4)
///     .collect();
/// assert_eq!(points, [[0, 0], [1, 0], [2, 0], [0, 1]]);
/// ```
#[derive(Debug, Clone)]
pub struct Grid<F> {
    point: Vec<F>,
    done: bool,
}

impl<F: FiniteField> Grid<F> {
    pub fn new(num_vars: usize) -> Self {
        Self {
            point: vec![F::first(); num_vars],
            done: false,
        }
    }

    /// Step to the next point; `false` once every point has been visited.
    fn advance(&mut self) -> bool {
        for x in self.point.iter_mut() {
            match x.next() {
                Some(next) => {
                    *x = next;
                    return true;
                }
                None => *x = F::first(),
            }
        }
        false
    }
}

impl<F: FiniteField> Iterator for Grid<F> {
    type Item = Vec<F>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.point.clone();
        self.done = !self.advance();
        Some(current)
    }
}

/// `∏_j point_j^{exponents_j}`, with the empty product equal to one.
pub fn eval_monomial<F: FiniteField>(exponents: &[usize], point: &[F]) -> F {
    exponents
        .iter()
        .zip(point)
        .filter(|(&e, _)| e > 0)
        .fold(F::ONE, |acc, (&e, &x)| acc * x.pow(e as u64))
}

/// Values of `p` at every point of `F^num_vars`, in grid order.
pub fn evaluate<F: FiniteField>(p: &MPoly<F>, num_vars: usize) -> Vec<F> {
    Grid::new(num_vars).map(|point| p.eval(&point)).collect()
}
