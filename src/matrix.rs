//! Dense matrices over a finite field with Gauss-Jordan elimination
//!
//! Cells live in one row-major buffer; row `r` occupies
//! `values[r * cols..(r + 1) * cols]`. Every cell is initialized at
//! construction, so the row operations never see an unset value.
//!
//! [`Matrix::reduced_row_echelon_form`] is built only from the three
//! elementary row operations and therefore preserves the row space. It does
//! not report singularity; callers inspect the reduced matrix instead (for
//! example with [`Matrix::pivot_columns`]).

use crate::field::{self, Field, FieldError};
use std::fmt;
use thiserror::Error;

/// Errors from matrix construction and whole-matrix operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Input rows have different lengths
    #[error("Row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Operand shapes are incompatible
    #[error("Cannot combine a {left_rows}x{left_cols} matrix with a {right_rows}x{right_cols} matrix")]
    DimensionMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    /// Operation requires a square matrix
    #[error("Matrix is {rows}x{cols}, expected a square matrix")]
    NotSquare { rows: usize, cols: usize },

    /// Matrix has no inverse
    #[error("Matrix is singular")]
    Singular,

    /// A cell value is not a field element, or field arithmetic failed
    #[error(transparent)]
    Field(#[from] FieldError),
}

/// Type alias for Result with MatrixError
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Mutable `rows x cols` matrix whose cells belong to one field
pub struct Matrix<'f, F: Field> {
    field: &'f F,
    rows: usize,
    cols: usize,
    values: Vec<F::Elem>,
}

impl<'f, F: Field> Matrix<'f, F> {
    /// Matrix with every cell set to zero
    pub fn zeros(field: &'f F, rows: usize, cols: usize) -> Self {
        Self {
            field,
            rows,
            cols,
            values: vec![field.zero(); rows * cols],
        }
    }

    /// `size x size` identity matrix
    pub fn identity(field: &'f F, size: usize) -> Self {
        Self::from_fn(field, size, size, |row, col| {
            if row == col {
                field.one()
            } else {
                field.zero()
            }
        })
    }

    /// Matrix whose cell `(row, col)` is `value(row, col)`
    pub fn from_fn(
        field: &'f F,
        rows: usize,
        cols: usize,
        mut value: impl FnMut(usize, usize) -> F::Elem,
    ) -> Self {
        let mut values = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                values.push(value(row, col));
            }
        }
        Self {
            field,
            rows,
            cols,
            values,
        }
    }

    /// Matrix from explicit rows, validating shape and every value
    pub fn from_rows(field: &'f F, rows: &[Vec<F::Elem>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut values = Vec::with_capacity(rows.len() * cols);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MatrixError::RaggedRows {
                    row: index,
                    expected: cols,
                    found: row.len(),
                });
            }
            for &value in row {
                values.push(field.check(value)?);
            }
        }
        Ok(Self {
            field,
            rows: rows.len(),
            cols,
            values,
        })
    }

    pub fn field(&self) -> &'f F {
        self.field
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.cols
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) out of bounds for a {}x{} matrix",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> F::Elem {
        self.values[self.index(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: F::Elem) {
        let index = self.index(row, col);
        self.values[index] = value;
    }

    /// Borrow one row as a slice
    pub fn row(&self, row: usize) -> &[F::Elem] {
        assert!(row < self.rows, "row {row} out of bounds");
        &self.values[row * self.cols..(row + 1) * self.cols]
    }

    /// Exchange rows `i` and `j`
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        assert!(i < self.rows && j < self.rows, "row index out of bounds");
        if i == j {
            return;
        }
        let (low, high) = (i.min(j), i.max(j));
        let (head, tail) = self.values.split_at_mut(high * self.cols);
        head[low * self.cols..(low + 1) * self.cols].swap_with_slice(&mut tail[..self.cols]);
    }

    /// `row[i] *= factor`
    pub fn multiply_row(&mut self, row: usize, factor: F::Elem) {
        assert!(row < self.rows, "row {row} out of bounds");
        let field = self.field;
        for value in &mut self.values[row * self.cols..(row + 1) * self.cols] {
            *value = field.multiply(*value, factor);
        }
    }

    /// `row[dest] += row[src] * factor`
    pub fn add_rows(&mut self, src: usize, dest: usize, factor: F::Elem) {
        assert!(src < self.rows && dest < self.rows, "row index out of bounds");
        let field = self.field;
        if field.is_zero(factor) {
            return;
        }
        for col in 0..self.cols {
            let source = self.values[src * self.cols + col];
            let target = &mut self.values[dest * self.cols + col];
            *target = field.add(*target, field.multiply(source, factor));
        }
    }

    /// Reduce in place to reduced row echelon form
    ///
    /// Only fails if the field cannot invert a nonzero pivot, which a
    /// correctly constructed field never does.
    pub fn reduced_row_echelon_form(&mut self) -> field::Result<()> {
        let field = self.field;

        // Forward elimination to row echelon form
        let mut pivots = 0;
        for col in 0..self.cols {
            if pivots >= self.rows {
                break;
            }
            let Some(pivot_row) = (pivots..self.rows).find(|&row| !field.is_zero(self.get(row, col)))
            else {
                continue;
            };
            self.swap_rows(pivots, pivot_row);
            let inverse = field.reciprocal(self.get(pivots, col))?;
            self.multiply_row(pivots, inverse);
            for row in pivots + 1..self.rows {
                let factor = field.negate(self.get(row, col));
                self.add_rows(pivots, row, factor);
            }
            pivots += 1;
        }

        // Back substitution
        for pivot_row in (0..pivots).rev() {
            let Some(pivot_col) =
                (0..self.cols).find(|&col| !field.is_zero(self.get(pivot_row, col)))
            else {
                continue;
            };
            for row in 0..pivot_row {
                let factor = field.negate(self.get(row, pivot_col));
                self.add_rows(pivot_row, row, factor);
            }
        }

        Ok(())
    }

    /// Column of the leading nonzero entry of each row, stopping at the
    /// first all-zero row
    ///
    /// Meaningful on a matrix in row echelon form.
    pub fn pivot_columns(&self) -> Vec<usize> {
        (0..self.rows)
            .map_while(|row| (0..self.cols).find(|&col| !self.field.is_zero(self.get(row, col))))
            .collect()
    }

    pub fn transpose(&self) -> Self {
        Self::from_fn(self.field, self.cols, self.rows, |row, col| self.get(col, row))
    }

    /// Matrix product `self * other`
    pub fn mul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(MatrixError::DimensionMismatch {
                left_rows: self.rows,
                left_cols: self.cols,
                right_rows: other.rows,
                right_cols: other.cols,
            });
        }
        let field = self.field;
        Ok(Self::from_fn(field, self.rows, other.cols, |row, col| {
            (0..self.cols).fold(field.zero(), |sum, k| {
                field.add(sum, field.multiply(self.get(row, k), other.get(k, col)))
            })
        }))
    }

    /// Replace this matrix by its inverse
    ///
    /// Leaves the matrix untouched on error.
    pub fn invert(&mut self) -> Result<()> {
        self.require_square()?;
        let field = self.field;
        let size = self.rows;

        let mut augmented = Self::from_fn(field, size, size * 2, |row, col| {
            if col < size {
                self.get(row, col)
            } else if col - size == row {
                field.one()
            } else {
                field.zero()
            }
        });
        augmented.reduced_row_echelon_form()?;

        for row in 0..size {
            for col in 0..size {
                let expected = if row == col { field.one() } else { field.zero() };
                if !field.equals(augmented.get(row, col), expected) {
                    return Err(MatrixError::Singular);
                }
            }
        }

        for row in 0..size {
            for col in 0..size {
                self.set(row, col, augmented.get(row, col + size));
            }
        }
        Ok(())
    }

    /// Determinant by Gaussian elimination on a copy
    pub fn determinant(&self) -> Result<F::Elem> {
        self.require_square()?;
        let field = self.field;
        let mut work = self.clone();
        let size = self.rows;
        let mut determinant = field.one();

        for col in 0..size {
            let Some(pivot_row) = (col..size).find(|&row| !field.is_zero(work.get(row, col)))
            else {
                return Ok(field.zero());
            };
            if pivot_row != col {
                work.swap_rows(col, pivot_row);
                determinant = field.negate(determinant);
            }
            let pivot = work.get(col, col);
            determinant = field.multiply(determinant, pivot);
            work.multiply_row(col, field.reciprocal(pivot)?);
            for row in col + 1..size {
                let factor = field.negate(work.get(row, col));
                work.add_rows(col, row, factor);
            }
        }
        Ok(determinant)
    }

    fn require_square(&self) -> Result<()> {
        if self.rows == self.cols {
            Ok(())
        } else {
            Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            })
        }
    }
}

impl<F: Field> Clone for Matrix<'_, F> {
    fn clone(&self) -> Self {
        Self {
            field: self.field,
            rows: self.rows,
            cols: self.cols,
            values: self.values.clone(),
        }
    }
}

impl<F: Field> PartialEq for Matrix<'_, F> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .values
                .iter()
                .zip(&other.values)
                .all(|(&x, &y)| self.field.equals(x, y))
    }
}

impl<F: Field> fmt::Debug for Matrix<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("values", &self.values)
            .finish()
    }
}

impl<F: Field> fmt::Display for Matrix<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let cells: Vec<String> = self.row(row).iter().map(|v| format!("{v:?}")).collect();
            writeln!(f, "[{}]", cells.join(", "))?;
        }
        Ok(())
    }
}
