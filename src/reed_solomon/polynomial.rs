//! Polynomial helpers over a [`Field`]
//!
//! Polynomials are little-endian coefficient slices: index `i` holds the
//! coefficient of `x^i`. Monic polynomials are stored without their leading
//! one, so a slice of length `k` describes a degree-`k` polynomial.

use crate::field::Field;

/// Evaluate `poly` at `point` with Horner's method
pub fn evaluate<F: Field>(field: &F, poly: &[F::Elem], point: F::Elem) -> F::Elem {
    poly.iter()
        .rev()
        .fold(field.zero(), |acc, &coefficient| {
            field.add(field.multiply(acc, point), coefficient)
        })
}

/// The monic polynomial `∏ (x - root)`, leading coefficient omitted
pub fn monic_from_roots<F, I>(field: &F, roots: I) -> Vec<F::Elem>
where
    F: Field,
    I: IntoIterator<Item = F::Elem>,
{
    let mut product = vec![field.one()];
    for root in roots {
        let negated = field.negate(root);
        product.push(field.zero());
        for j in (0..product.len()).rev() {
            let shifted = if j > 0 { product[j - 1] } else { field.zero() };
            product[j] = field.add(shifted, field.multiply(negated, product[j]));
        }
    }
    product.pop();
    product
}

/// Remainder of `message(x) · x^k` divided by the monic degree-`k` `divisor`
///
/// Runs the division as a `k`-symbol shift register fed with the message
/// from its highest-degree coefficient down.
pub fn shifted_remainder<F: Field>(
    field: &F,
    message: &[F::Elem],
    divisor: &[F::Elem],
) -> Vec<F::Elem> {
    let Some(top) = divisor.len().checked_sub(1) else {
        return Vec::new();
    };
    let mut register = vec![field.zero(); divisor.len()];
    for &symbol in message.iter().rev() {
        let factor = field.add(symbol, register[top]);
        register.rotate_right(1);
        register[0] = field.zero();
        for (slot, &coefficient) in register.iter_mut().zip(divisor) {
            *slot = field.subtract(*slot, field.multiply(coefficient, factor));
        }
    }
    register
}
