//! Error types for finite field construction and arithmetic

use thiserror::Error;

/// Errors that can occur while building a field or operating on its elements
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Prime field modulus is 0 or 1
    #[error("Field modulus {0} is too small")]
    ModulusTooSmall(u32),

    /// Prime field modulus has a nontrivial divisor
    #[error("Modulus {modulus} is not prime (divisible by {divisor})")]
    NotPrime { modulus: u32, divisor: u32 },

    /// Binary field modulus degree is outside the supported range
    #[error("Modulus {modulus:#x} has degree {degree}, supported degrees are 1..={max}")]
    UnsupportedDegree { modulus: u32, degree: u32, max: u32 },

    /// Binary field modulus factors over GF(2)
    #[error("Modulus {0:#x} is not irreducible over GF(2)")]
    ReducibleModulus(u32),

    /// The polynomial x does not generate the multiplicative group
    #[error("Modulus {0:#x} is not primitive")]
    NotPrimitive(u32),

    /// Value is outside the element range of the field
    #[error("Value {value} is not an element of a field of order {order}")]
    NotAnElement { value: String, order: u64 },

    /// Reciprocal or division by the zero element
    #[error("Division by zero")]
    DivisionByZero,
}

/// Type alias for Result with FieldError
pub type Result<T> = std::result::Result<T, FieldError>;
