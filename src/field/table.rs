//! Table-driven GF(2^n) arithmetic
//!
//! For a primitive modulus the polynomial `x` generates every nonzero element,
//! so multiplication and division reduce to adding and subtracting discrete
//! logarithms. Tables hold `2^n` entries each, which is why the degree is
//! capped at 16 (the PAR2 field 0x1100B is the largest practical case).
//!
//! Results are identical to [`BinaryField`] with the same modulus.

use super::binary::BinaryField;
use super::{Field, FieldError, Result};

/// Largest modulus degree accepted by [`TableField`]
pub const MAX_TABLE_DEGREE: u32 = 16;

/// GF(2^n) backed by log/antilog lookup tables
#[derive(Debug, Clone)]
pub struct TableField {
    field: BinaryField,
    log: Vec<u16>,
    antilog: Vec<u16>,
}

impl TableField {
    /// Build the tables for GF(2^n)/modulus
    ///
    /// Fails if the modulus is not a valid [`BinaryField`] modulus, if its
    /// degree exceeds [`MAX_TABLE_DEGREE`], or if it is not primitive.
    pub fn new(modulus: u32) -> Result<Self> {
        let field = BinaryField::new(modulus)?;
        let degree = field.degree();
        if degree > MAX_TABLE_DEGREE {
            return Err(FieldError::UnsupportedDegree {
                modulus,
                degree,
                max: MAX_TABLE_DEGREE,
            });
        }

        let count = field.size() as usize;
        let limit = count - 1;
        let generator = field.reduce_once(2);
        let mut log = vec![0u16; count];
        let mut antilog = vec![0u16; count];

        let mut b = 1u32;
        for l in 0..limit {
            if l > 0 && b == 1 {
                return Err(FieldError::NotPrimitive(modulus));
            }
            log[b as usize] = l as u16;
            antilog[l] = b as u16;
            b = field.multiply(b, generator);
        }
        if b != 1 {
            return Err(FieldError::NotPrimitive(modulus));
        }

        // log(0) is undefined; park it on the unused slot
        log[0] = limit as u16;
        antilog[limit] = 0;

        Ok(Self {
            field,
            log,
            antilog,
        })
    }

    pub fn modulus(&self) -> u32 {
        self.field.modulus()
    }

    /// Discrete logarithm of a nonzero element base `x`
    pub fn log(&self, x: u32) -> Option<u32> {
        debug_assert!(self.is_element(x));
        (x != 0).then(|| self.log[x as usize] as u32)
    }

    /// `x^exponent` where `x` is the field's primitive element
    pub fn antilog(&self, exponent: u64) -> u32 {
        self.antilog[(exponent % self.limit()) as usize] as u32
    }

    fn limit(&self) -> u64 {
        self.field.order() - 1
    }
}

impl Field for TableField {
    type Elem = u32;

    fn zero(&self) -> u32 {
        0
    }

    fn one(&self) -> u32 {
        1
    }

    fn order(&self) -> u64 {
        self.field.order()
    }

    fn is_element(&self, x: u32) -> bool {
        self.field.is_element(x)
    }

    fn negate(&self, x: u32) -> u32 {
        self.field.negate(x)
    }

    fn add(&self, x: u32, y: u32) -> u32 {
        self.field.add(x, y)
    }

    fn subtract(&self, x: u32, y: u32) -> u32 {
        self.field.subtract(x, y)
    }

    fn multiply(&self, x: u32, y: u32) -> u32 {
        debug_assert!(self.is_element(x) && self.is_element(y));
        if x == 0 || y == 0 {
            return 0;
        }
        let log_sum = self.log[x as usize] as u64 + self.log[y as usize] as u64;
        self.antilog(log_sum)
    }

    fn reciprocal(&self, x: u32) -> Result<u32> {
        debug_assert!(self.is_element(x));
        if x == 0 {
            return Err(FieldError::DivisionByZero);
        }
        Ok(self.antilog(self.limit() - self.log[x as usize] as u64))
    }

    fn divide(&self, x: u32, y: u32) -> Result<u32> {
        debug_assert!(self.is_element(x) && self.is_element(y));
        if y == 0 {
            return Err(FieldError::DivisionByZero);
        }
        if x == 0 {
            return Ok(0);
        }
        let log_diff =
            self.log[x as usize] as u64 + self.limit() - self.log[y as usize] as u64;
        Ok(self.antilog(log_diff))
    }

    fn pow(&self, base: u32, exponent: u64) -> u32 {
        debug_assert!(self.is_element(base));
        if exponent == 0 {
            return 1;
        }
        if base == 0 {
            return 0;
        }
        let log = self.log[base as usize] as u64;
        self.antilog(log * (exponent % self.limit()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_binary_field() {
        let table = TableField::new(0x11D).unwrap();
        let plain = BinaryField::new(0x11D).unwrap();
        for x in 0..256 {
            for y in (0..256).step_by(7) {
                assert_eq!(table.multiply(x, y), plain.multiply(x, y));
            }
            if x != 0 {
                assert_eq!(table.reciprocal(x), plain.reciprocal(x));
            }
        }
    }

    #[test]
    fn test_log_antilog_inverse() {
        let table = TableField::new(0x11D).unwrap();
        assert_eq!(table.log(0), None);
        for x in 1..256 {
            let l = table.log(x).unwrap();
            assert_eq!(table.antilog(l as u64), x);
        }
        assert_eq!(table.antilog(255), 1);
    }

    #[test]
    fn test_pow_edge_cases() {
        let table = TableField::new(0x1100B).unwrap();
        assert_eq!(table.pow(0, 0), 1);
        assert_eq!(table.pow(0, 5), 0);
        assert_eq!(table.pow(2, 65535), 1);
        assert_eq!(table.pow(2, 3), 8);
    }

    #[test]
    fn test_rejects_non_primitive_modulus() {
        // AES modulus is irreducible but x has order 51
        assert_eq!(TableField::new(0x11B).unwrap_err(), FieldError::NotPrimitive(0x11B));
    }

    #[test]
    fn test_rejects_large_degree() {
        // x^17 + x^3 + 1 is irreducible
        assert!(matches!(
            TableField::new(0x20009),
            Err(FieldError::UnsupportedDegree { degree: 17, .. })
        ));
    }

    #[test]
    fn test_divide() {
        let table = TableField::new(0x11D).unwrap();
        assert_eq!(table.divide(0, 9), Ok(0));
        assert_eq!(table.divide(9, 0), Err(FieldError::DivisionByZero));
        let q = table.divide(200, 17).unwrap();
        assert_eq!(table.multiply(q, 17), 200);
    }
}
