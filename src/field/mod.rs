//! Finite field arithmetic
//!
//! Every field implements the [`Field`] trait: identities, addition,
//! negation, multiplication and reciprocals over an associated element type.
//! Three implementations are provided:
//!
//! - [`PrimeField`]: integers modulo a prime `p`
//! - [`BinaryField`]: GF(2^n) with carry-less multiplication reduced by an
//!   irreducible modulus
//! - [`TableField`]: GF(2^n) for n <= 16 using log/antilog lookup tables,
//!   which requires a primitive modulus
//!
//! Elements are plain values with no back-reference to their field. Values
//! coming from outside the crate should go through [`Field::check`] before
//! arithmetic; the arithmetic methods only `debug_assert!` membership.

use std::fmt::Debug;

pub mod binary;
pub mod error;
pub mod prime;
pub mod table;

pub use binary::BinaryField;
pub use error::{FieldError, Result};
pub use prime::PrimeField;
pub use table::TableField;

/// A finite field with a fixed set of operations over `Self::Elem`
pub trait Field {
    /// Element representation
    type Elem: Copy + Eq + Debug + Send + Sync;

    /// Additive identity
    fn zero(&self) -> Self::Elem;

    /// Multiplicative identity
    fn one(&self) -> Self::Elem;

    /// Number of elements in the field
    fn order(&self) -> u64;

    /// Whether `x` is a valid element of this field
    fn is_element(&self, x: Self::Elem) -> bool;

    /// Validate a value, returning it unchanged if it belongs to the field
    fn check(&self, x: Self::Elem) -> Result<Self::Elem> {
        if self.is_element(x) {
            Ok(x)
        } else {
            Err(FieldError::NotAnElement {
                value: format!("{x:?}"),
                order: self.order(),
            })
        }
    }

    fn equals(&self, x: Self::Elem, y: Self::Elem) -> bool {
        x == y
    }

    fn is_zero(&self, x: Self::Elem) -> bool {
        self.equals(x, self.zero())
    }

    fn negate(&self, x: Self::Elem) -> Self::Elem;

    fn add(&self, x: Self::Elem, y: Self::Elem) -> Self::Elem;

    fn subtract(&self, x: Self::Elem, y: Self::Elem) -> Self::Elem {
        self.add(x, self.negate(y))
    }

    fn multiply(&self, x: Self::Elem, y: Self::Elem) -> Self::Elem;

    /// Multiplicative inverse; fails for the zero element
    fn reciprocal(&self, x: Self::Elem) -> Result<Self::Elem>;

    fn divide(&self, x: Self::Elem, y: Self::Elem) -> Result<Self::Elem> {
        Ok(self.multiply(x, self.reciprocal(y)?))
    }

    /// Raise `base` to a non-negative power by square-and-multiply
    fn pow(&self, base: Self::Elem, exponent: u64) -> Self::Elem {
        let mut result = self.one();
        let mut base = base;
        let mut exponent = exponent;
        while exponent != 0 {
            if exponent & 1 != 0 {
                result = self.multiply(result, base);
            }
            base = self.multiply(base, base);
            exponent >>= 1;
        }
        result
    }
}
