//! Prime field Z/pZ

use super::{Field, FieldError, Result};

/// The field of integers modulo a prime `p`, elements in `[0, p)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimeField {
    modulus: u32,
}

impl PrimeField {
    /// Construct Z/pZ, rejecting moduli below 2 and composite moduli
    pub fn new(modulus: u32) -> Result<Self> {
        if modulus < 2 {
            return Err(FieldError::ModulusTooSmall(modulus));
        }
        if let Some(divisor) = smallest_divisor(modulus) {
            return Err(FieldError::NotPrime { modulus, divisor });
        }
        Ok(Self { modulus })
    }

    pub fn modulus(&self) -> u32 {
        self.modulus
    }
}

/// Smallest factor in `[2, sqrt(n)]`, if any
fn smallest_divisor(n: u32) -> Option<u32> {
    let n = n as u64;
    (2u64..)
        .take_while(|d| d * d <= n)
        .find(|d| n % d == 0)
        .map(|d| d as u32)
}

impl Field for PrimeField {
    type Elem = u32;

    fn zero(&self) -> u32 {
        0
    }

    fn one(&self) -> u32 {
        1
    }

    fn order(&self) -> u64 {
        self.modulus as u64
    }

    fn is_element(&self, x: u32) -> bool {
        x < self.modulus
    }

    fn negate(&self, x: u32) -> u32 {
        debug_assert!(self.is_element(x));
        if x == 0 {
            0
        } else {
            self.modulus - x
        }
    }

    fn add(&self, x: u32, y: u32) -> u32 {
        debug_assert!(self.is_element(x) && self.is_element(y));
        ((x as u64 + y as u64) % self.modulus as u64) as u32
    }

    fn subtract(&self, x: u32, y: u32) -> u32 {
        debug_assert!(self.is_element(x) && self.is_element(y));
        ((x as u64 + self.modulus as u64 - y as u64) % self.modulus as u64) as u32
    }

    fn multiply(&self, x: u32, y: u32) -> u32 {
        debug_assert!(self.is_element(x) && self.is_element(y));
        ((x as u64 * y as u64) % self.modulus as u64) as u32
    }

    /// Extended Euclidean algorithm on `(p, x)`
    fn reciprocal(&self, x: u32) -> Result<u32> {
        debug_assert!(self.is_element(x));
        if x == 0 {
            return Err(FieldError::DivisionByZero);
        }

        // Invariant: s * x == a and t * x == b (mod p)
        let (mut a, mut b) = (self.modulus as i64, x as i64);
        let (mut s, mut t) = (0i64, 1i64);
        while b != 0 {
            let quotient = a / b;
            (a, b) = (b, a - quotient * b);
            (s, t) = (t, s - quotient * t);
        }

        debug_assert_eq!(a, 1, "modulus {} is not prime", self.modulus);
        Ok(s.rem_euclid(self.modulus as i64) as u32)
    }
}
