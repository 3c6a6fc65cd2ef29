//! Canonical enumeration of the bounded-degree monomial basis.
//!
//! A monomial of total degree `t` is identified with a sorted sequence of
//! `t` variable slots, e.g. `x0^2 * x2` is `[0, 0, 2]`. Monomials are listed
//! by ascending total degree and, within one degree, in lexicographic order
//! of their slot sequences. Each variable appears at most `cap` times,
//! where `cap = min(order, q - 1)`, since `x^q = x` on every point of the
//! field.
//!
//! Over GF(3) with two variables and order 2 the sequence is
//! `1, x0, x1, x0^2, x0*x1, x1^2`.

use alloc::vec;
use alloc::vec::Vec;

/// Restartable enumerator of exponent vectors of the monomial basis.
///
/// Exponent vectors have one entry per variable. The enumerator is lazy:
/// [`Monomials::next_after`] derives each monomial from its predecessor so
/// the basis never has to be held in memory at once.
///
/// # Example
///
/// ```
/// use muller::codes::Monomials;
///
/// let basis: Vec<Vec<usize>> = Monomials::new(2, 2, 3).collect();
/// assert_eq!(
///     basis,
///     [[0, 0], [1, 0], [0, 1], [2, 0], [1, 1], [0, 2]]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Monomials {
    num_vars: usize,
    order: usize,
    cap: usize,
    pending: Option<Vec<usize>>,
}

impl Monomials {
    /// Monomials in `num_vars` variables of total degree at most `order`
    /// over a field of size `field_size`.
    pub fn new(num_vars: usize, order: usize, field_size: u64) -> Self {
        let q_minus_one = usize::try_from(field_size.saturating_sub(1)).unwrap_or(usize::MAX);
        let cap = order.min(q_minus_one);
        let mut monomials = Self {
            num_vars,
            order,
            cap,
            pending: None,
        };
        monomials.pending = Some(monomials.first());
        monomials
    }

    /// Whether `exponents` is a member of the basis: one entry per variable,
    /// no entry above `min(order, q - 1)` and total degree at most `order`.
    pub fn contains(&self, exponents: &[usize]) -> bool {
        exponents.len() == self.num_vars
            && exponents.iter().all(|&e| e <= self.cap)
            && exponents.iter().sum::<usize>() <= self.order
    }

    /// The degree-0 monomial `1`.
    pub fn first(&self) -> Vec<usize> {
        vec![0; self.num_vars]
    }

    /// The monomial following `exponents`, or `None` if it is the last one
    /// or not a member of the basis at all.
    pub fn next_after(&self, exponents: &[usize]) -> Option<Vec<usize>> {
        if !self.contains(exponents) {
            return None;
        }
        let slots = to_slots(exponents);
        let degree = slots.len();

        // Rightmost slot that can grow while the tail is still fillable. Only
        // the smallest increment needs trying: a larger value leaves fewer
        // admissible values for the tail.
        for i in (0..degree).rev() {
            let v = slots[i] + 1;
            if v >= self.num_vars {
                continue;
            }
            let mut candidate = slots[..i].to_vec();
            candidate.push(v);
            if self.fill(&mut candidate, degree) {
                return Some(self.to_exponents(&candidate));
            }
        }

        if degree >= self.order {
            return None;
        }
        let mut slots = Vec::with_capacity(degree + 1);
        self.fill(&mut slots, degree + 1)
            .then(|| self.to_exponents(&slots))
    }

    /// Extend sorted `slots` to `len` entries with the smallest admissible values.
    fn fill(&self, slots: &mut Vec<usize>, len: usize) -> bool {
        let mut v = slots.last().copied().unwrap_or(0);
        let mut used = slots.iter().rev().take_while(|&&s| s == v).count();
        if used > self.cap {
            return false;
        }

        while slots.len() < len {
            if used == self.cap {
                v += 1;
                used = 0;
            }
            if v >= self.num_vars || self.cap == 0 {
                return false;
            }
            slots.push(v);
            used += 1;
        }
        true
    }

    fn to_exponents(&self, slots: &[usize]) -> Vec<usize> {
        let mut exponents = vec![0; self.num_vars];
        for &s in slots {
            exponents[s] += 1;
        }
        exponents
    }
}

fn to_slots(exponents: &[usize]) -> Vec<usize> {
    exponents
        .iter()
        .enumerate()
        .flat_map(|(var, &e)| core::iter::repeat(var).take(e))
        .collect()
}

impl Iterator for Monomials {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.pending.take()?;
        self.pending = self.next_after(&current);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::CodeParameters;

    fn collect(num_vars: usize, order: usize, q: u64) -> Vec<Vec<usize>> {
        Monomials::new(num_vars, order, q).collect()
    }

    #[test]
    fn gf3_order2_two_vars() {
        assert_eq!(
            collect(2, 2, 3),
            [
                vec![0, 0],
                vec![1, 0],
                vec![0, 1],
                vec![2, 0],
                vec![1, 1],
                vec![0, 2]
            ]
        );
    }

    #[test]
    fn binary_caps_exponents_at_one() {
        let basis = collect(4, 2, 2);
        assert_eq!(basis.len(), 11);
        assert!(basis.iter().all(|e| e.iter().all(|&x| x <= 1)));
        assert_eq!(basis[5], [1, 1, 0, 0]);
        assert_eq!(basis[10], [0, 0, 1, 1]);
    }

    #[test]
    fn grouped_by_ascending_degree() {
        let basis = collect(3, 3, 5);
        let degrees: Vec<usize> = basis.iter().map(|e| e.iter().sum()).collect();
        assert!(degrees.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(basis.len(), 20); // C(6, 3)
    }

    #[test]
    fn distinct_and_bounded() {
        let basis = collect(3, 2, 3);
        for (i, a) in basis.iter().enumerate() {
            assert!(a.iter().sum::<usize>() <= 2);
            for b in &basis[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn count_matches_dimension() {
        for q in [2u64, 3, 4, 5, 7] {
            for m in 0..4 {
                for r in 0..(q as usize) {
                    let dim = CodeParameters::qary(q, r, m).unwrap().dimension;
                    assert_eq!(collect(m, r, q).len(), dim, "q={} r={} m={}", q, r, m);
                }
            }
        }
        for m in 0..7 {
            for r in 0..=m {
                let dim = CodeParameters::binary(r, m).unwrap().dimension;
                assert_eq!(collect(m, r, 2).len(), dim, "r={} m={}", r, m);
            }
        }
    }

    #[test]
    fn degenerate_sizes() {
        assert_eq!(collect(0, 3, 5), [Vec::<usize>::new()]);
        assert_eq!(collect(3, 0, 5), [vec![0, 0, 0]]);
    }

    #[test]
    fn restartable() {
        let m = Monomials::new(2, 2, 3);
        let a: Vec<_> = m.clone().collect();
        let b: Vec<_> = m.collect();
        assert_eq!(a, b);
    }

    #[test]
    fn successor_of_last_is_none() {
        let m = Monomials::new(2, 2, 3);
        assert_eq!(m.next_after(&[0, 2]), None);
        assert_eq!(m.next_after(&m.first()), Some(vec![1, 0]));
    }

    #[test]
    fn successor_rejects_foreign_exponents() {
        let m = Monomials::new(2, 2, 3);
        assert_eq!(m.next_after(&[0, 0, 1]), None);
        assert_eq!(m.next_after(&[3, 0]), None);
        assert_eq!(m.next_after(&[2, 1]), None);
        assert_eq!(m.next_after(&[1]), None);

        // x^2 is outside the binary basis even though its degree fits
        let binary = Monomials::new(3, 2, 2);
        assert!(!binary.contains(&[2, 0, 0]));
        assert_eq!(binary.next_after(&[2, 0, 0]), None);
        assert!(binary.contains(&[1, 0, 1]));
    }

    #[test]
    fn every_listed_monomial_is_contained() {
        let m = Monomials::new(3, 4, 3);
        assert!(m.clone().all(|e| m.contains(&e)));
        assert!(!m.contains(&[3, 0, 0]));
    }
}
