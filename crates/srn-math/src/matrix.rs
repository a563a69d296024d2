//! Dense row-major matrix type for output projections
//!
//! Reaction network models fill a caller-allocated P×N matrix with the
//! linear map from full state to observed quantities; engines apply it with
//! [`Matrix::multiply_vector`]. Storage is row-major, matching the order the
//! projection rows are written in.

use crate::{Float, MathError, Result};
use core::ops::{Index, IndexMut};

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dense row-major matrix of [`Float`] values
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Matrix {
    data: Vec<Float>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Create a new matrix with given dimensions, initialized to zero
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Create matrix from data vector (row-major order)
    pub fn from_vec(data: Vec<Float>, rows: usize, cols: usize) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(MathError::DimensionMismatch {
                expected: rows * cols,
                got: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Create matrix from nested vector
    pub fn from_nested_vec(data: Vec<Vec<Float>>) -> Result<Self> {
        if data.is_empty() {
            return Ok(Self::zeros(0, 0));
        }

        let rows = data.len();
        let cols = data[0].len();

        for row in &data {
            if row.len() != cols {
                return Err(MathError::DimensionMismatch {
                    expected: cols,
                    got: row.len(),
                });
            }
        }

        let flat_data: Vec<Float> = data.into_iter().flatten().collect();
        Self::from_vec(flat_data, rows, cols)
    }

    /// Get matrix dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Get number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get reference to internal data
    pub fn data(&self) -> &[Float] {
        &self.data
    }

    /// Get mutable reference to internal data
    pub fn data_mut(&mut self) -> &mut [Float] {
        &mut self.data
    }

    /// Get element at position (row, col)
    pub fn get(&self, row: usize, col: usize) -> Result<Float> {
        if row >= self.rows || col >= self.cols {
            return Err(MathError::IndexOutOfBounds {
                index: row * self.cols + col,
                len: self.data.len(),
            });
        }
        Ok(self.data[row * self.cols + col])
    }

    /// Set element at position (row, col)
    pub fn set(&mut self, row: usize, col: usize, value: Float) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(MathError::IndexOutOfBounds {
                index: row * self.cols + col,
                len: self.data.len(),
            });
        }
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    /// Fill matrix with given value
    pub fn fill(&mut self, value: Float) {
        for x in &mut self.data {
            *x = value;
        }
    }

    /// Get row as vector
    pub fn row(&self, row: usize) -> Result<Vec<Float>> {
        if row >= self.rows {
            return Err(MathError::IndexOutOfBounds {
                index: row,
                len: self.rows,
            });
        }

        let start = row * self.cols;
        let end = start + self.cols;
        Ok(self.data[start..end].to_vec())
    }

    /// Matrix-vector multiplication
    pub fn multiply_vector(&self, vec: &[Float]) -> Result<Vec<Float>> {
        if self.cols != vec.len() {
            return Err(MathError::DimensionMismatch {
                expected: self.cols,
                got: vec.len(),
            });
        }

        let mut result = vec![0.0; self.rows];
        for i in 0..self.rows {
            for j in 0..self.cols {
                result[i] += self[(i, j)] * vec[j];
            }
        }

        Ok(result)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Float;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_creation() {
        let m = Matrix::zeros(3, 2);
        assert_eq!(m.shape(), (3, 2));
        assert_eq!(m.data().len(), 6);

        let m = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
        assert_eq!(m[(1, 0)], 3.0);

        assert!(Matrix::from_vec(vec![1.0, 2.0, 3.0], 2, 2).is_err());
    }

    #[test]
    fn test_from_nested_vec() {
        let m = Matrix::from_nested_vec(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m[(1, 0)], 4.0);

        let ragged = Matrix::from_nested_vec(vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(ragged.is_err());
    }

    #[test]
    fn test_checked_access() {
        let mut m = Matrix::zeros(1, 8);
        assert!(m.set(0, 7, 1.0).is_ok());
        assert_eq!(m.get(0, 7), Ok(1.0));
        assert!(m.get(1, 0).is_err());
        assert!(m.set(0, 8, 1.0).is_err());
    }

    #[test]
    fn test_row_and_fill() {
        let mut m = Matrix::zeros(2, 3);
        m.fill(2.0);
        assert_eq!(m.row(1).unwrap(), vec![2.0, 2.0, 2.0]);
        assert!(m.row(2).is_err());
    }

    #[test]
    fn test_multiply_vector() {
        // Selector row picks out the last state entry
        let mut proj = Matrix::zeros(1, 4);
        proj[(0, 3)] = 1.0;

        let out = proj.multiply_vector(&[5.0, 6.0, 7.0, 8.0]).unwrap();
        assert_eq!(out, vec![8.0]);

        assert!(proj.multiply_vector(&[1.0, 2.0]).is_err());
    }
}
