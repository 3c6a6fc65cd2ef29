//! Dense row-major matrices over a field.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;

use crate::algebra::field::Field;
use crate::algebra::ring::Ring;
use crate::error::{Error, Result};

/// A `rows × cols` matrix stored row by row in one flat buffer.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Matrix<F> {
    rows: usize,
    cols: usize,
    data: Vec<F>,
}

impl<F: Ring> Matrix<F> {
    /// Zero matrix of the given shape.
    pub fn zero(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![F::ZERO; rows * cols],
        }
    }

    /// Fill a `rows × cols` matrix in row-major order from `data`.
    ///
    /// Extra data is ignored, missing data is treated as zero.
    pub fn init(rows: usize, cols: usize, data: impl IntoIterator<Item = F>) -> Self {
        let mut out = Self::zero(rows, cols);
        for (slot, x) in out.data.iter_mut().zip(data) {
            *slot = x;
        }
        out
    }

    /// Build a matrix from explicit rows.
    ///
    /// Every row must have the length of the first; an empty list gives a
    /// `0 × 0` matrix.
    pub fn from_rows(rows: Vec<Vec<F>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().find(|r| r.len() != cols) {
            return Err(Error::DimensionMismatch {
                expected: cols,
                got: bad.len(),
            });
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data: rows.into_iter().flatten().collect(),
        })
    }

    pub const fn nrows(&self) -> usize {
        self.rows
    }

    pub const fn ncols(&self) -> usize {
        self.cols
    }

    /// Entry `(i, j)`, or `None` when out of range.
    pub fn get(&self, i: usize, j: usize) -> Option<F> {
        (i < self.rows && j < self.cols).then(|| self.data[i * self.cols + j])
    }

    /// Row `i`, or `None` when out of range.
    pub fn row(&self, i: usize) -> Option<&[F]> {
        (i < self.rows).then(|| &self[i])
    }

    /// Iterate over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[F]> + '_ {
        (0..self.rows).map(move |i| &self[i])
    }

    /// Row vector times matrix: `v · self`.
    ///
    /// `v` must have exactly `nrows()` entries.
    pub fn vec_mul(&self, v: &[F]) -> Result<Vec<F>> {
        if v.len() != self.rows {
            return Err(Error::DimensionMismatch {
                expected: self.rows,
                got: v.len(),
            });
        }

        let mut out = vec![F::ZERO; self.cols];
        for (&c, row) in v.iter().zip(self.rows()) {
            if c.is_zero() {
                continue;
            }
            for (acc, &x) in out.iter_mut().zip(row) {
                *acc = *acc + c * x;
            }
        }
        Ok(out)
    }
}

impl<F: Field> Matrix<F> {
    /// Rank, by Gaussian elimination on a copy.
    pub fn rank(&self) -> usize {
        let mut m = self.data.clone();
        let cols = self.cols;
        let mut rank = 0;

        for col in 0..cols {
            if rank == self.rows {
                break;
            }
            let Some(pivot) = (rank..self.rows).find(|&r| !m[r * cols + col].is_zero()) else {
                continue;
            };
            for j in 0..cols {
                m.swap(pivot * cols + j, rank * cols + j);
            }

            // pivot is non-zero, so the inverse exists
            let Some(inv) = m[rank * cols + col].inverse() else {
                continue;
            };
            for r in (rank + 1)..self.rows {
                let factor = m[r * cols + col] * inv;
                if factor.is_zero() {
                    continue;
                }
                for j in col..cols {
                    m[r * cols + j] = m[r * cols + j] - factor * m[rank * cols + j];
                }
            }
            rank += 1;
        }
        rank
    }
}

impl<F> Index<usize> for Matrix<F> {
    type Output = [F];

    fn index(&self, i: usize) -> &Self::Output {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }
}

impl<F> Index<(usize, usize)> for Matrix<F> {
    type Output = F;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.data[i * self.cols + j]
    }
}

impl<F: fmt::Display> fmt::Display for Matrix<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (j, x) in self[i].iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", x)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

impl<F: fmt::Debug> fmt::Debug for Matrix<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for x in &self[i] {
                write!(f, "{:?} ", x)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::fp::Fp;
    use alloc::string::ToString;

    type F3 = Fp<3>;

    fn f(values: &[u64]) -> Vec<F3> {
        values.iter().map(|&v| F3::new(v)).collect()
    }

    #[test]
    fn from_rows_rejects_ragged() {
        let err = Matrix::from_rows(vec![f(&[1, 2]), f(&[1])]).unwrap_err();
        assert_eq!(err, Error::DimensionMismatch { expected: 2, got: 1 });
    }

    #[test]
    fn shape_and_access() {
        let m = Matrix::from_rows(vec![f(&[1, 2, 0]), f(&[0, 1, 1])]).unwrap();
        assert_eq!((m.nrows(), m.ncols()), (2, 3));
        assert_eq!(m.get(1, 2), Some(F3::ONE));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.row(0), Some(f(&[1, 2, 0]).as_slice()));
        assert_eq!(m.rows().count(), 2);
        assert_eq!(m[(0, 1)], F3::new(2));
    }

    #[test]
    fn vec_mul_combines_rows() {
        let m = Matrix::from_rows(vec![f(&[1, 2, 0]), f(&[0, 1, 1])]).unwrap();
        // 2*[1 2 0] + 1*[0 1 1] = [2 5 1] = [2 2 1]
        assert_eq!(m.vec_mul(&f(&[2, 1])).unwrap(), f(&[2, 2, 1]));
        assert_eq!(
            m.vec_mul(&f(&[1])),
            Err(Error::DimensionMismatch { expected: 2, got: 1 })
        );
    }

    #[test]
    fn rank_detects_dependency() {
        let full = Matrix::from_rows(vec![f(&[1, 2, 0]), f(&[0, 1, 1])]).unwrap();
        assert_eq!(full.rank(), 2);

        // third row = first + second
        let dep = Matrix::from_rows(vec![f(&[1, 2, 0]), f(&[0, 1, 1]), f(&[1, 0, 1])]).unwrap();
        assert_eq!(dep.rank(), 2);
        assert_eq!(Matrix::<F3>::zero(2, 2).rank(), 0);
    }

    #[test]
    fn init_pads_with_zero() {
        let m = Matrix::init(2, 2, f(&[1, 2, 1]));
        assert_eq!(m.row(1), Some(f(&[1, 0]).as_slice()));
    }

    #[test]
    fn display_rows() {
        let m = Matrix::from_rows(vec![f(&[1, 1, 1]), f(&[0, 1, 2])]).unwrap();
        assert_eq!(m.to_string(), "[1 1 1]\n[0 1 2]");
    }
}
