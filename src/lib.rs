//! Finite field arithmetic, Gauss-Jordan elimination and a Reed-Solomon codec
//!
//! - [`field`]: the [`Field`](field::Field) trait with prime, binary and
//!   table-driven binary fields
//! - [`matrix`]: dense matrices over any field, reduced row echelon form,
//!   inversion and determinants
//! - [`reed_solomon`]: systematic encoder and syndrome decoder built on both
//!
//! The library never installs a logger; decode progress is reported through
//! the `log` facade at `debug` and `trace` level.

pub mod field;
pub mod matrix;
pub mod reed_solomon;

pub use field::{BinaryField, Field, FieldError, PrimeField, TableField};
pub use matrix::{Matrix, MatrixError};
pub use reed_solomon::{ReedSolomon, ReedSolomonBuilder, RsError};
