//! Dense integer matrix product over closed-form inputs.

use anyhow::{Context, Result, anyhow, ensure};
use tracing::debug;

/// Largest dimension whose worst-case entry sum (`2 * size^5`) stays inside `i64`.
pub const MAX_EXACT_SIZE: usize = 4_096;

/// Row-major `size x size` matrix of `i64`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    size: usize,
    data: Vec<i64>,
}

impl Matrix {
    /// Fill every cell from `f(row, col)`. Allocation failure surfaces as an error.
    pub fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> i64) -> Result<Self> {
        let len = size
            .checked_mul(size)
            .ok_or_else(|| anyhow!("matrix dimension {} overflows the element count", size))?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .with_context(|| format!("allocate {}x{} matrix", size, size))?;
        for i in 0..size {
            for j in 0..size {
                data.push(f(i, j));
            }
        }
        Ok(Self { size, data })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.data[row * self.size + col]
    }

    pub fn row(&self, row: usize) -> &[i64] {
        &self.data[row * self.size..(row + 1) * self.size]
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.data
    }

    /// `c[i][j] = sum_k a[i][k] * b[k][j]`, i outer, j middle, k inner.
    pub fn multiply(&self, rhs: &Matrix) -> Result<Matrix> {
        ensure!(
            self.size == rhs.size,
            "cannot multiply {0}x{0} by {1}x{1}",
            self.size,
            rhs.size
        );
        let n = self.size;
        Matrix::from_fn(n, |i, j| {
            let row = self.row(i);
            let mut sum = 0i64;
            for (k, a) in row.iter().enumerate() {
                sum += a * rhs.data[k * n + j];
            }
            sum
        })
    }

    pub fn sum(&self) -> i64 {
        self.data.iter().sum()
    }
}

/// `a[i][j] = i + j`
pub fn left_operand(size: usize) -> Result<Matrix> {
    Matrix::from_fn(size, |i, j| i as i64 + j as i64)
}

/// `b[i][j] = i - j`
pub fn right_operand(size: usize) -> Result<Matrix> {
    Matrix::from_fn(size, |i, j| i as i64 - j as i64)
}

/// Sum of all entries of `a * b` computed without building either matrix.
///
/// Expanding `(i + k)(k - j)` over the cube leaves `n^2 * sum(k^2) - n * sum(k)^2`.
pub fn closed_form_sum(size: usize) -> Option<i64> {
    let n = size as i128;
    if n == 0 {
        return Some(0);
    }
    // Huge sizes overflow even i128; those have no exact i64 answer either.
    let s1 = n.checked_mul(n - 1)? / 2;
    let s2 = (n - 1).checked_mul(n)?.checked_mul(2 * n - 1)? / 6;
    let squares = n.checked_mul(n)?.checked_mul(s2)?;
    let cross = n.checked_mul(s1)?.checked_mul(s1)?;
    i64::try_from(squares.checked_sub(cross)?).ok()
}

/// Build both operands, multiply, and sum the product.
pub fn run(size: usize) -> Result<i64> {
    ensure!(
        size <= MAX_EXACT_SIZE,
        "matrix size {} exceeds the exact i64 range (max {})",
        size,
        MAX_EXACT_SIZE
    );
    let a = left_operand(size)?;
    let b = right_operand(size)?;
    let c = a.multiply(&b)?;
    let total = c.sum();
    debug!(size, total, "matrix product summed");
    Ok(total)
}
