//! Systematic Reed-Solomon encoder and syndrome decoder
//!
//! ## Codeword layout
//!
//! A codeword is the coefficient list of a polynomial `c(x)` (index `i` is the
//! coefficient of `x^i`). The first `ecc_len` symbols are parity, the last
//! `message_len` symbols are the message unchanged:
//!
//! ```text
//! c(x) = message(x) · x^ecc_len - (message(x) · x^ecc_len mod g(x))
//! g(x) = (x - α^0)(x - α^1)...(x - α^(ecc_len-1))
//! ```
//!
//! so every valid codeword vanishes at `α^0 .. α^(ecc_len-1)`, where `α` is
//! the configured generator.
//!
//! ## Decoding
//!
//! Peterson-Gorenstein-Zierler style, with both linear systems solved by
//! Gauss-Jordan elimination:
//!
//! 1. Syndromes `S_i = c(α^i)`; all zero means the codeword is accepted.
//! 2. Error locator `Λ(x)` from the `t × (t+1)` syndrome system.
//! 3. Error positions `i` where `Λ(α^-i) = 0`.
//! 4. Error magnitudes from the Vandermonde system `Σ e_k (α^loc_k)^r = S_r`.
//! 5. Subtract the magnitudes and re-check the syndromes.
//!
//! Any failure in steps 2-4 means the corruption exceeds what can be
//! corrected, and `decode` returns `Ok(None)`.

use super::error::{Result, RsError};
use super::polynomial::{evaluate, monic_from_roots, shifted_remainder};
use crate::field::Field;
use crate::matrix::Matrix;
use log::{debug, error, trace};

/// Validated codec dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecParams {
    pub message_len: usize,
    pub ecc_len: usize,
}

impl CodecParams {
    pub fn codeword_len(&self) -> usize {
        self.message_len + self.ecc_len
    }

    /// Largest number of symbol errors that can be corrected, `ecc_len / 2`
    pub fn max_correctable(&self) -> usize {
        self.ecc_len / 2
    }
}

/// Result of a successful decode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOutcome<E> {
    /// Recovered message symbols
    pub message: Vec<E>,
    /// Codeword positions whose symbols were changed, ascending
    pub corrected: Vec<usize>,
}

/// Reed-Solomon codec over an arbitrary field
///
/// Immutable after construction; `encode` and `decode` only allocate local
/// buffers, so one codec can be shared across threads.
#[derive(Debug, Clone)]
pub struct ReedSolomon<F: Field> {
    field: F,
    generator: F::Elem,
    generator_inverse: F::Elem,
    params: CodecParams,
    default_budget: usize,
    generator_polynomial: Vec<F::Elem>,
}

impl<F: Field> ReedSolomon<F> {
    /// Build a codec for `message_len` data symbols and `ecc_len` parity symbols
    ///
    /// The powers `generator^0 .. generator^(message_len + ecc_len - 1)` must
    /// all be distinct, i.e. the generator's multiplicative order must be at
    /// least the codeword length.
    pub fn new(field: F, generator: F::Elem, message_len: usize, ecc_len: usize) -> Result<Self> {
        if message_len == 0 {
            return Err(RsError::InvalidParameters(
                "message length must be positive".to_string(),
            ));
        }
        if ecc_len == 0 {
            return Err(RsError::InvalidParameters(
                "ECC length must be positive".to_string(),
            ));
        }
        let codeword_len = message_len.checked_add(ecc_len).ok_or_else(|| {
            RsError::InvalidParameters("codeword length overflows usize".to_string())
        })?;

        let generator = field.check(generator)?;
        if let Some(order) = order_below(&field, generator, codeword_len) {
            return Err(RsError::GeneratorOrderTooSmall {
                order,
                required: codeword_len,
            });
        }
        let generator_inverse = field.reciprocal(generator)?;

        let mut power = field.one();
        let roots = (0..ecc_len).map(|_| {
            let root = power;
            power = field.multiply(power, generator);
            root
        });
        let generator_polynomial = monic_from_roots(&field, roots);

        Ok(Self {
            field,
            generator,
            generator_inverse,
            params: CodecParams {
                message_len,
                ecc_len,
            },
            default_budget: ecc_len / 2,
            generator_polynomial,
        })
    }

    /// Lower the error budget `decode` uses when called with `None`
    pub(crate) fn with_default_budget(mut self, budget: usize) -> Result<Self> {
        self.default_budget = self.resolve_budget(Some(budget))?;
        Ok(self)
    }

    pub fn field(&self) -> &F {
        &self.field
    }

    pub fn generator(&self) -> F::Elem {
        self.generator
    }

    pub fn params(&self) -> CodecParams {
        self.params
    }

    pub fn message_len(&self) -> usize {
        self.params.message_len
    }

    pub fn ecc_len(&self) -> usize {
        self.params.ecc_len
    }

    pub fn codeword_len(&self) -> usize {
        self.params.codeword_len()
    }

    /// Error budget used by `decode` when none is given
    pub fn default_budget(&self) -> usize {
        self.default_budget
    }

    /// `g(x)` coefficients, little-endian, without the leading one
    pub fn generator_polynomial(&self) -> &[F::Elem] {
        &self.generator_polynomial
    }

    /// Encode `message_len` symbols into a `codeword_len` codeword
    ///
    /// The codeword is the negated remainder followed by the message.
    pub fn encode(&self, message: &[F::Elem]) -> Result<Vec<F::Elem>> {
        if message.len() != self.params.message_len {
            return Err(RsError::MessageLength {
                expected: self.params.message_len,
                actual: message.len(),
            });
        }
        self.check_symbols(message)?;

        let remainder = shifted_remainder(&self.field, message, &self.generator_polynomial);
        let mut codeword = Vec::with_capacity(self.codeword_len());
        codeword.extend(remainder.into_iter().map(|r| self.field.negate(r)));
        codeword.extend_from_slice(message);
        Ok(codeword)
    }

    /// Syndromes `c(generator^i)` for `i` in `0..ecc_len`
    pub fn syndromes(&self, codeword: &[F::Elem]) -> Result<Vec<F::Elem>> {
        self.check_codeword(codeword)?;
        Ok(self.compute_syndromes(codeword))
    }

    /// Whether `codeword` has all-zero syndromes
    pub fn is_codeword(&self, codeword: &[F::Elem]) -> Result<bool> {
        let syndromes = self.syndromes(codeword)?;
        Ok(syndromes.iter().all(|&s| self.field.is_zero(s)))
    }

    /// Recover the message from a possibly corrupted codeword
    ///
    /// `num_errors_to_correct` defaults to the codec's budget (normally
    /// `ecc_len / 2`). Zero means detection only. Returns `Ok(None)` when the
    /// errors cannot be corrected.
    pub fn decode(
        &self,
        codeword: &[F::Elem],
        num_errors_to_correct: Option<usize>,
    ) -> Result<Option<Vec<F::Elem>>> {
        Ok(self
            .decode_detailed(codeword, num_errors_to_correct)?
            .map(|outcome| outcome.message))
    }

    /// Like [`decode`](Self::decode), also reporting which positions changed
    pub fn decode_detailed(
        &self,
        codeword: &[F::Elem],
        num_errors_to_correct: Option<usize>,
    ) -> Result<Option<DecodeOutcome<F::Elem>>> {
        let budget = self.resolve_budget(num_errors_to_correct)?;
        self.check_codeword(codeword)?;
        let field = &self.field;
        let ecc_len = self.params.ecc_len;

        let syndromes = self.compute_syndromes(codeword);
        if syndromes.iter().all(|&s| field.is_zero(s)) {
            trace!("All syndromes zero, codeword accepted");
            return Ok(Some(DecodeOutcome {
                message: codeword[ecc_len..].to_vec(),
                corrected: Vec::new(),
            }));
        }
        debug!("Nonzero syndromes, attempting to correct up to {} errors", budget);

        if budget == 0 {
            debug!("Errors detected but correction is disabled");
            return Ok(None);
        }

        let Some(locator) = self.error_locator_polynomial(&syndromes, budget)? else {
            debug!("Error locator system is inconsistent");
            return Ok(None);
        };
        trace!("Error locator polynomial: {:?}", locator);

        let Some(locations) = self.find_error_locations(&locator, budget) else {
            debug!("Error locator roots do not match a correctable error pattern");
            return Ok(None);
        };
        debug!("Found {} error locations: {:?}", locations.len(), locations);

        let Some(values) = self.error_values(&locations, &syndromes)? else {
            debug!("Error value system has no unique solution");
            return Ok(None);
        };

        let mut repaired = codeword.to_vec();
        let mut corrected = Vec::with_capacity(locations.len());
        for (&location, &value) in locations.iter().zip(&values) {
            if !field.is_zero(value) {
                repaired[location] = field.subtract(repaired[location], value);
                corrected.push(location);
            }
        }

        if !self
            .compute_syndromes(&repaired)
            .iter()
            .all(|&s| field.is_zero(s))
        {
            error!(
                "Syndromes nonzero after correcting positions {:?}; field modulus or generator is inconsistent",
                corrected
            );
            return Err(RsError::CorrectionCheckFailed);
        }

        debug!("Corrected {} symbol errors", corrected.len());
        Ok(Some(DecodeOutcome {
            message: repaired.split_off(ecc_len),
            corrected,
        }))
    }

    fn resolve_budget(&self, requested: Option<usize>) -> Result<usize> {
        let budget = requested.unwrap_or(self.default_budget);
        let max = self.params.max_correctable();
        if budget > max {
            return Err(RsError::ErrorCountOutOfRange {
                requested: budget,
                max,
            });
        }
        Ok(budget)
    }

    fn check_codeword(&self, codeword: &[F::Elem]) -> Result<()> {
        if codeword.len() != self.codeword_len() {
            return Err(RsError::CodewordLength {
                expected: self.codeword_len(),
                actual: codeword.len(),
            });
        }
        self.check_symbols(codeword)
    }

    fn check_symbols(&self, symbols: &[F::Elem]) -> Result<()> {
        for &symbol in symbols {
            self.field.check(symbol)?;
        }
        Ok(())
    }

    fn compute_syndromes(&self, codeword: &[F::Elem]) -> Vec<F::Elem> {
        let field = &self.field;
        let mut point = field.one();
        (0..self.params.ecc_len)
            .map(|_| {
                let syndrome = evaluate(field, codeword, point);
                point = field.multiply(point, self.generator);
                syndrome
            })
            .collect()
    }

    /// Solve for `Λ(x) = 1 + Λ_1 x + ... + Λ_t x^t`
    ///
    /// Row `r` encodes `Σ_c S_(r+c) Λ_(t-c) = -S_(r+t)`. Unknowns without a
    /// pivot stay zero. `None` if the system is inconsistent.
    fn error_locator_polynomial(
        &self,
        syndromes: &[F::Elem],
        budget: usize,
    ) -> Result<Option<Vec<F::Elem>>> {
        let field = &self.field;
        let mut matrix = Matrix::from_fn(field, budget, budget + 1, |row, col| {
            let syndrome = syndromes[row + col];
            if col == budget {
                field.negate(syndrome)
            } else {
                syndrome
            }
        });
        matrix.reduced_row_echelon_form()?;

        let mut locator = vec![field.zero(); budget + 1];
        locator[0] = field.one();
        for (row, col) in matrix.pivot_columns().into_iter().enumerate() {
            if col == budget {
                return Ok(None);
            }
            locator[budget - col] = matrix.get(row, budget);
        }
        Ok(Some(locator))
    }

    /// Positions `i` with `Λ(generator^-i) = 0`
    ///
    /// `None` if there are no roots or more than `max_roots`.
    fn find_error_locations(&self, locator: &[F::Elem], max_roots: usize) -> Option<Vec<usize>> {
        let field = &self.field;
        let mut locations = Vec::new();
        let mut point = field.one();
        for position in 0..self.codeword_len() {
            if field.is_zero(evaluate(field, locator, point)) {
                if locations.len() >= max_roots {
                    return None;
                }
                locations.push(position);
            }
            point = field.multiply(point, self.generator_inverse);
        }
        (!locations.is_empty()).then_some(locations)
    }

    /// Solve `Σ_k e_k (generator^loc_k)^r = S_r` for every syndrome row `r`
    ///
    /// `None` unless the system is consistent with a unique solution.
    fn error_values(
        &self,
        locations: &[usize],
        syndromes: &[F::Elem],
    ) -> Result<Option<Vec<F::Elem>>> {
        let field = &self.field;
        let count = locations.len();
        let bases: Vec<F::Elem> = locations
            .iter()
            .map(|&location| field.pow(self.generator, location as u64))
            .collect();

        let mut matrix = Matrix::from_fn(field, syndromes.len(), count + 1, |row, col| {
            if col == count {
                syndromes[row]
            } else {
                field.pow(bases[col], row as u64)
            }
        });
        matrix.reduced_row_echelon_form()?;

        // A pivot in the augmented column means no solution
        if !field.is_zero(matrix.get(count, count)) {
            return Ok(None);
        }
        // Anything short of an identity block means no unique solution
        if (0..count).any(|i| !field.equals(matrix.get(i, i), field.one())) {
            return Ok(None);
        }
        Ok(Some((0..count).map(|i| matrix.get(i, count)).collect()))
    }
}

/// Multiplicative order of `x` if it is below `limit`; zero has order 0
fn order_below<F: Field>(field: &F, x: F::Elem, limit: usize) -> Option<u64> {
    if field.is_zero(x) {
        return Some(0);
    }
    let mut power = x;
    for order in 1..limit {
        if field.equals(power, field.one()) {
            return Some(order as u64);
        }
        power = field.multiply(power, x);
    }
    None
}
