//! Binary field GF(2^n) with bitwise polynomial arithmetic
//!
//! An element is an integer whose bit `i` is the coefficient of `x^i`. The
//! modulus is an irreducible polynomial of degree `n` stored with bit `n` set,
//! e.g. `0x11D` is x⁸ + x⁴ + x³ + x² + 1.

use super::{Field, FieldError, Result};

/// Largest supported modulus degree; elements and the modulus fit in a `u32`
pub const MAX_DEGREE: u32 = 31;

/// GF(2^n) modulo an irreducible polynomial
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryField {
    modulus: u32,
    size: u32,
}

impl BinaryField {
    /// Construct GF(2^n)/modulus, where `n` is the degree of `modulus`
    ///
    /// Fails if the degree is 0 or if the modulus factors over GF(2). Any
    /// `u32` has degree at most [`MAX_DEGREE`].
    pub fn new(modulus: u32) -> Result<Self> {
        if modulus < 2 {
            return Err(FieldError::UnsupportedDegree {
                modulus,
                degree: 0,
                max: MAX_DEGREE,
            });
        }
        let degree = degree(modulus);
        if !is_irreducible(modulus) {
            return Err(FieldError::ReducibleModulus(modulus));
        }
        Ok(Self {
            modulus,
            size: 1 << degree,
        })
    }

    pub fn modulus(&self) -> u32 {
        self.modulus
    }

    /// Degree `n` of the modulus
    pub fn degree(&self) -> u32 {
        degree(self.modulus)
    }

    /// Number of elements, `2^n`
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Reduce a polynomial of degree at most `n` into the element range
    pub(crate) fn reduce_once(&self, x: u32) -> u32 {
        if x >= self.size {
            x ^ self.modulus
        } else {
            x
        }
    }
}

/// Degree of a nonzero GF(2) polynomial
fn degree(x: u32) -> u32 {
    debug_assert_ne!(x, 0);
    u32::BITS - 1 - x.leading_zeros()
}

/// Polynomial long division over GF(2), returns `(quotient, remainder)`
pub(crate) fn divide_and_remainder(dividend: u32, divisor: u32) -> (u32, u32) {
    debug_assert_ne!(divisor, 0);
    let divisor_degree = degree(divisor);
    let mut remainder = dividend;
    let mut quotient = 0;
    while remainder != 0 && degree(remainder) >= divisor_degree {
        let shift = degree(remainder) - divisor_degree;
        remainder ^= divisor << shift;
        quotient |= 1 << shift;
    }
    (quotient, remainder)
}

/// Trial division by every polynomial of degree 1..=deg/2
fn is_irreducible(modulus: u32) -> bool {
    let half = degree(modulus) / 2;
    (2u32..(1 << (half + 1))).all(|divisor| divide_and_remainder(modulus, divisor).1 != 0)
}

impl Field for BinaryField {
    type Elem = u32;

    fn zero(&self) -> u32 {
        0
    }

    fn one(&self) -> u32 {
        1
    }

    fn order(&self) -> u64 {
        self.size as u64
    }

    fn is_element(&self, x: u32) -> bool {
        x < self.size
    }

    fn negate(&self, x: u32) -> u32 {
        debug_assert!(self.is_element(x));
        x
    }

    fn add(&self, x: u32, y: u32) -> u32 {
        debug_assert!(self.is_element(x) && self.is_element(y));
        x ^ y
    }

    fn subtract(&self, x: u32, y: u32) -> u32 {
        debug_assert!(self.is_element(x) && self.is_element(y));
        x ^ y
    }

    /// Russian peasant multiplication, reducing whenever `x` reaches `size`
    fn multiply(&self, x: u32, y: u32) -> u32 {
        debug_assert!(self.is_element(x) && self.is_element(y));
        let mut x = x;
        let mut y = y;
        let mut product = 0;
        while y != 0 {
            if y & 1 != 0 {
                product ^= x;
            }
            x = self.reduce_once(x << 1);
            y >>= 1;
        }
        product
    }

    /// Extended Euclidean algorithm over GF(2)[x]
    fn reciprocal(&self, x: u32) -> Result<u32> {
        debug_assert!(self.is_element(x));
        if x == 0 {
            return Err(FieldError::DivisionByZero);
        }

        // Invariant: s * x == a and t * x == b (mod modulus)
        let (mut a, mut b) = (self.modulus, x);
        let (mut s, mut t) = (0u32, 1u32);
        while b != 0 {
            let (quotient, remainder) = divide_and_remainder(a, b);
            // Only the first step can yield a quotient of full degree
            let quotient = self.reduce_once(quotient);
            (a, b) = (b, remainder);
            (s, t) = (t, s ^ self.multiply(quotient, t));
        }

        if a == 1 {
            Ok(s)
        } else {
            Err(FieldError::ReducibleModulus(self.modulus))
        }
    }
}
