// src/access.rs

//! Indexable access contracts between the solver and caller-owned containers.
//!
//! The solver never commits to one matrix or vector type. Anything that can
//! hand out an element by index can be an input, and anything writable by
//! index can receive results. Adapters are provided for plain nested `Vec`s
//! and for the `nalgebra` and `ndarray` dense types.
//!
//! All traits speak `f64` at the boundary: the solver accumulates in double
//! precision internally and narrows to the container's element type only on
//! the final write.

use nalgebra::{DMatrix, DVector};
use ndarray::{Array1, Array2};

/// Scalar element of a caller-side container.
pub trait Element: Copy {
    fn to_f64(self) -> f64;
    fn from_f64(value: f64) -> Self;
}

impl Element for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }
}

impl Element for f32 {
    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

/// Read access to a square matrix.
///
/// The solver only ever reads the lower triangle (`col <= row`); the upper
/// triangle may be unpopulated or inconsistent and is never touched.
pub trait MatrixRead {
    fn get(&self, row: usize, col: usize) -> f64;
}

/// Write access to an eigenvalue container of length at least `order`.
pub trait VectorWrite {
    fn set(&mut self, index: usize, value: f64);
}

/// Write access to an eigenvector container of size at least
/// `order` x `order`. Row `j` receives the eigenvector paired with
/// eigenvalue `j`.
pub trait MatrixWrite {
    fn set(&mut self, row: usize, col: usize, value: f64);
}

impl<M: MatrixRead + ?Sized> MatrixRead for &M {
    #[inline]
    fn get(&self, row: usize, col: usize) -> f64 {
        (**self).get(row, col)
    }
}

impl<T: Element> MatrixRead for Vec<Vec<T>> {
    #[inline]
    fn get(&self, row: usize, col: usize) -> f64 {
        self[row][col].to_f64()
    }
}

impl<T: Element> MatrixRead for [Vec<T>] {
    #[inline]
    fn get(&self, row: usize, col: usize) -> f64 {
        self[row][col].to_f64()
    }
}

impl<T: Element> MatrixWrite for Vec<Vec<T>> {
    #[inline]
    fn set(&mut self, row: usize, col: usize, value: f64) {
        self[row][col] = T::from_f64(value);
    }
}

impl<T: Element> VectorWrite for Vec<T> {
    #[inline]
    fn set(&mut self, index: usize, value: f64) {
        self[index] = T::from_f64(value);
    }
}

impl<T: Element> VectorWrite for [T] {
    #[inline]
    fn set(&mut self, index: usize, value: f64) {
        self[index] = T::from_f64(value);
    }
}

impl<T: Element + nalgebra::Scalar> MatrixRead for DMatrix<T> {
    #[inline]
    fn get(&self, row: usize, col: usize) -> f64 {
        self[(row, col)].to_f64()
    }
}

impl<T: Element + nalgebra::Scalar> MatrixWrite for DMatrix<T> {
    #[inline]
    fn set(&mut self, row: usize, col: usize, value: f64) {
        self[(row, col)] = T::from_f64(value);
    }
}

impl<T: Element + nalgebra::Scalar> VectorWrite for DVector<T> {
    #[inline]
    fn set(&mut self, index: usize, value: f64) {
        self[index] = T::from_f64(value);
    }
}

impl<T: Element> MatrixRead for Array2<T> {
    #[inline]
    fn get(&self, row: usize, col: usize) -> f64 {
        self[[row, col]].to_f64()
    }
}

impl<T: Element> MatrixWrite for Array2<T> {
    #[inline]
    fn set(&mut self, row: usize, col: usize, value: f64) {
        self[[row, col]] = T::from_f64(value);
    }
}

impl<T: Element> VectorWrite for Array1<T> {
    #[inline]
    fn set(&mut self, index: usize, value: f64) {
        self[index] = T::from_f64(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_vec_round_trip() {
        let mut m = vec![vec![0.0_f64; 2]; 2];
        MatrixWrite::set(&mut m, 0, 1, 3.5);
        assert_eq!(MatrixRead::get(&m, 0, 1), 3.5);
    }

    #[test]
    fn f32_containers_narrow_on_write() {
        let mut v = vec![0.0_f32; 3];
        VectorWrite::set(&mut v, 2, 1.25);
        assert_eq!(v[2], 1.25_f32);

        let m = vec![vec![2.0_f32; 2]; 2];
        assert_eq!(MatrixRead::get(&m, 1, 1), 2.0);
    }

    #[test]
    fn nalgebra_and_ndarray_adapters() {
        let mut dm = DMatrix::<f64>::zeros(2, 2);
        MatrixWrite::set(&mut dm, 1, 0, -4.0);
        assert_eq!(MatrixRead::get(&dm, 1, 0), -4.0);

        let mut dv = DVector::<f64>::zeros(2);
        VectorWrite::set(&mut dv, 0, 7.0);
        assert_eq!(dv[0], 7.0);

        let mut a2 = Array2::<f64>::zeros((2, 2));
        MatrixWrite::set(&mut a2, 0, 0, 9.0);
        assert_eq!(MatrixRead::get(&a2, 0, 0), 9.0);

        let mut a1 = Array1::<f32>::zeros(2);
        VectorWrite::set(&mut a1, 1, 0.5);
        assert_eq!(a1[1], 0.5_f32);
    }
}
