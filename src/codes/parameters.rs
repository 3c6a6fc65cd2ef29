//! Closed-form parameters of Reed-Muller codes.

use alloc::format;

use crate::error::{Error, Result};
use crate::utils::{binomial, binomial_sum};

/// Which family of formulas describes a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Regime {
    /// Any field size, `order < q`.
    QAry,
    /// `q = 2`, `order <= num_vars`.
    Binary,
}

/// `(length, dimension, minimum_distance)` of a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodeParameters {
    pub length: usize,
    pub dimension: usize,
    pub minimum_distance: usize,
}

impl CodeParameters {
    /// Parameters of the q-ary code of `order` in `num_vars` variables over a field of size `q`.
    ///
    /// - `length = q^m`
    /// - `dimension = C(m + r, r)`
    /// - `minimum_distance = (q - r) · q^(m-1)`, or `1` when `m = 0`
    ///
    /// # Example
    ///
    /// ```
    /// use muller::codes::CodeParameters;
    ///
    /// let p = CodeParameters::qary(3, 2, 2).unwrap();
    /// assert_eq!((p.length, p.dimension, p.minimum_distance), (9, 6, 3));
    /// ```
    pub fn qary(q: u64, order: usize, num_vars: usize) -> Result<Self> {
        if order as u64 >= q {
            return Err(Error::OrderTooLarge {
                order,
                bound: format!("less than {}", q),
            });
        }
        let q = usize::try_from(q).map_err(|_| Error::InvalidParameter {
            reason: format!("field size {} does not fit in usize", q),
        })?;

        let length = grid_size(q, num_vars)?;
        let dimension = num_vars
            .checked_add(order)
            .and_then(|n| binomial(n, order))
            .ok_or_else(|| overflow("dimension", order, num_vars))?;
        let minimum_distance = match num_vars {
            0 => 1,
            // (q - r) * q^(m-1) <= q^m = length, so no overflow here
            _ => (q - order) * (length / q),
        };

        Ok(Self {
            length,
            dimension,
            minimum_distance,
        })
    }

    /// Parameters of the binary code of `order` in `num_vars` variables.
    ///
    /// - `length = 2^m`
    /// - `dimension = Σ_{i=0}^{r} C(m, i)`
    /// - `minimum_distance = 2^(m - r)`
    ///
    /// # Example
    ///
    /// ```
    /// use muller::codes::CodeParameters;
    ///
    /// let p = CodeParameters::binary(2, 4).unwrap();
    /// assert_eq!((p.length, p.dimension, p.minimum_distance), (16, 11, 4));
    /// ```
    pub fn binary(order: usize, num_vars: usize) -> Result<Self> {
        if order > num_vars {
            return Err(Error::OrderTooLarge {
                order,
                bound: format!("at most the number of variables {}", num_vars),
            });
        }

        let length = grid_size(2, num_vars)?;
        let dimension =
            binomial_sum(num_vars, order).ok_or_else(|| overflow("dimension", order, num_vars))?;
        // 2^(m - r) divides 2^m
        let minimum_distance = length >> order;

        Ok(Self {
            length,
            dimension,
            minimum_distance,
        })
    }
}

/// `q^num_vars`, the number of points of `F^m`.
pub(crate) fn grid_size(q: usize, num_vars: usize) -> Result<usize> {
    u32::try_from(num_vars)
        .ok()
        .and_then(|m| q.checked_pow(m))
        .ok_or_else(|| Error::InvalidParameter {
            reason: format!("code length {}^{} overflows usize", q, num_vars),
        })
}

fn overflow(what: &str, order: usize, num_vars: usize) -> Error {
    Error::InvalidParameter {
        reason: format!(
            "{} overflows usize for order {} and {} variables",
            what, order, num_vars
        ),
    }
}
