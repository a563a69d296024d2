//! Dense vector type for states, parameters, and propensities
//!
//! This module provides the caller-allocated numeric vector that reaction
//! network models read species counts from and write propensities into.
//! Access is either checked (`get`/`set`, returning [`MathError`]) or
//! unchecked via `Index`/`IndexMut` for hot loops that have already
//! validated lengths.

use crate::{Float, MathError, Result};
use core::ops::{Index, IndexMut};

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dense vector of [`Float`] values
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vector {
    data: Vec<Float>,
}

impl Vector {
    /// Create a new vector with given length, initialized to zero
    pub fn zeros(length: usize) -> Self {
        Self {
            data: vec![0.0; length],
        }
    }

    /// Create a new vector with given length, initialized to ones
    pub fn ones(length: usize) -> Self {
        Self {
            data: vec![1.0; length],
        }
    }

    /// Create vector from data
    pub fn from_vec(data: Vec<Float>) -> Self {
        Self { data }
    }

    /// Create vector from slice
    pub fn from_slice(data: &[Float]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Get vector length
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if vector is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get reference to internal data
    pub fn data(&self) -> &[Float] {
        &self.data
    }

    /// Get mutable reference to internal data
    pub fn data_mut(&mut self) -> &mut [Float] {
        &mut self.data
    }

    /// Get element at index
    pub fn get(&self, index: usize) -> Result<Float> {
        if index >= self.data.len() {
            return Err(MathError::IndexOutOfBounds {
                index,
                len: self.data.len(),
            });
        }
        Ok(self.data[index])
    }

    /// Set element at index
    pub fn set(&mut self, index: usize, value: Float) -> Result<()> {
        if index >= self.data.len() {
            return Err(MathError::IndexOutOfBounds {
                index,
                len: self.data.len(),
            });
        }
        self.data[index] = value;
        Ok(())
    }

    /// Fill vector with given value
    pub fn fill(&mut self, value: Float) {
        for x in &mut self.data {
            *x = value;
        }
    }

    /// Sum all elements
    pub fn sum(&self) -> Float {
        self.data.iter().sum()
    }

    /// Dot product with another vector
    pub fn dot(&self, other: &Vector) -> Result<Float> {
        if self.len() != other.len() {
            return Err(MathError::DimensionMismatch {
                expected: self.len(),
                got: other.len(),
            });
        }
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| a * b)
            .sum())
    }

    /// Element-wise addition
    pub fn add(&self, other: &Vector) -> Result<Vector> {
        if self.len() != other.len() {
            return Err(MathError::DimensionMismatch {
                expected: self.len(),
                got: other.len(),
            });
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| a + b)
            .collect();
        Ok(Vector::from_vec(data))
    }

    /// Element-wise subtraction
    pub fn sub(&self, other: &Vector) -> Result<Vector> {
        if self.len() != other.len() {
            return Err(MathError::DimensionMismatch {
                expected: self.len(),
                got: other.len(),
            });
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| a - b)
            .collect();
        Ok(Vector::from_vec(data))
    }

    /// Scalar multiplication in place
    pub fn scale(&mut self, scalar: Float) {
        for x in &mut self.data {
            *x *= scalar;
        }
    }

    /// Get minimum value
    pub fn min(&self) -> Option<Float> {
        self.data.iter().copied().reduce(Float::min)
    }

    /// Get maximum value
    pub fn max(&self) -> Option<Float> {
        self.data.iter().copied().reduce(Float::max)
    }

    /// Iterate over elements
    pub fn iter(&self) -> core::slice::Iter<'_, Float> {
        self.data.iter()
    }
}

impl Index<usize> for Vector {
    type Output = Float;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl From<Vec<Float>> for Vector {
    fn from(data: Vec<Float>) -> Self {
        Self::from_vec(data)
    }
}
