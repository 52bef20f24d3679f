//! # Dense matrices
//!
//! Row major storage, one `Vec` per row. Rows can be removed cheaply, which is what the simplex
//! engine needs when it detects linearly dependent constraints.
use std::ops::{Index, IndexMut, Neg};

use index_utils::remove_indices;
use num_traits::Zero;

use crate::data::number_types::float::Real;

/// Uses a `Vec<Vec<F>>` as underlying data structure. Dimensions are fixed at creation, apart from
/// removing rows or leading columns.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix<F> {
    data: Vec<Vec<F>>,
    nr_columns: usize,
}

impl<F> DenseMatrix<F> {
    /// Create a `DenseMatrix` from the provided rows.
    ///
    /// The number of columns is given explicitly, such that a matrix without rows still has a
    /// width.
    pub fn new(data: Vec<Vec<F>>, nr_columns: usize) -> Self {
        debug_assert!(data.iter().all(|row| row.len() == nr_columns));

        Self { data, nr_columns }
    }

    /// Number of rows.
    pub fn nr_rows(&self) -> usize {
        self.data.len()
    }

    /// Number of columns.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Get all values in row `i`.
    pub fn row(&self, i: usize) -> &[F] {
        debug_assert!(i < self.nr_rows());

        &self.data[i]
    }

    /// Mutable access to row `i`.
    pub fn row_mut(&mut self, i: usize) -> &mut [F] {
        debug_assert!(i < self.nr_rows());

        &mut self.data[i]
    }

    /// Iterate over the rows in order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[F]> {
        self.data.iter().map(Vec::as_slice)
    }

    /// Remove rows.
    ///
    /// # Arguments
    ///
    /// * `indices`: Sorted, unique row indices.
    pub fn remove_rows(&mut self, indices: &[usize]) {
        debug_assert!(indices.is_sorted());
        debug_assert!(indices.iter().all(|&i| i < self.nr_rows()));

        remove_indices(&mut self.data, indices);
    }

    /// Remove the first `count` columns.
    pub fn remove_leading_columns(&mut self, count: usize) {
        debug_assert!(count <= self.nr_columns);

        for row in &mut self.data {
            row.drain(..count);
        }
        self.nr_columns -= count;
    }
}

impl<F: Copy> DenseMatrix<F> {
    /// Get all values in column `j`.
    pub fn column(&self, j: usize) -> impl Iterator<Item = F> + '_ {
        debug_assert!(j < self.nr_columns);

        self.data.iter().map(move |row| row[j])
    }
}

impl<F: Zero + Clone> DenseMatrix<F> {
    /// Create a dense matrix of zeros of dimension `nr_rows` x `nr_columns`.
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Self {
        Self {
            data: vec![vec![F::zero(); nr_columns]; nr_rows],
            nr_columns,
        }
    }
}

impl<F: Copy + Neg<Output = F>> DenseMatrix<F> {
    /// Multiply row `i` by minus one.
    pub fn change_row_sign(&mut self, i: usize) {
        debug_assert!(i < self.nr_rows());

        for value in &mut self.data[i] {
            *value = -*value;
        }
    }
}

impl<F: Real> DenseMatrix<F> {
    /// Compute `A x`.
    pub fn multiply(&self, x: &[F]) -> Vec<F> {
        debug_assert_eq!(x.len(), self.nr_columns);

        self.data.iter()
            .map(|row| row.iter().zip(x).fold(F::zero(), |total, (&a, &v)| total + a * v))
            .collect()
    }
}

impl<F> Index<(usize, usize)> for DenseMatrix<F> {
    type Output = F;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        debug_assert!(j < self.nr_columns);

        &self.data[i][j]
    }
}

impl<F> IndexMut<(usize, usize)> for DenseMatrix<F> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        debug_assert!(j < self.nr_columns);

        &mut self.data[i][j]
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_algebra::matrix::DenseMatrix;

    fn matrix() -> DenseMatrix<f64> {
        DenseMatrix::new(vec![
            vec![1., 2., 3.],
            vec![4., 5., 6.],
            vec![7., 8., 9.],
        ], 3)
    }

    #[test]
    fn access() {
        let m = matrix();

        assert_eq!(m.nr_rows(), 3);
        assert_eq!(m.nr_columns(), 3);
        assert_eq!(m[(1, 2)], 6.);
        assert_eq!(m.row(2), &[7., 8., 9.]);
        assert_eq!(m.column(1).collect::<Vec<_>>(), vec![2., 5., 8.]);
    }

    #[test]
    fn remove() {
        let mut m = matrix();
        m.remove_rows(&[0, 2]);
        assert_eq!(m, DenseMatrix::new(vec![vec![4., 5., 6.]], 3));

        m.remove_leading_columns(2);
        assert_eq!(m, DenseMatrix::new(vec![vec![6.]], 1));
    }

    #[test]
    fn multiply() {
        let mut m = matrix();
        assert_eq!(m.multiply(&[1., 0., -1.]), vec![-2., -2., -2.]);

        m.change_row_sign(1);
        assert_eq!(m.row(1), &[-4., -5., -6.]);
    }

    #[test]
    fn empty() {
        let m = DenseMatrix::<f64>::zeros(0, 4);

        assert_eq!(m.nr_columns(), 4);
        assert_eq!(m.multiply(&[1., 2., 3., 4.]), Vec::<f64>::new());
    }
}
