//! Builder for [`ReedSolomon`] codecs
//!
//! Collects the codec parameters one at a time and validates them together in
//! [`ReedSolomonBuilder::build`].

use super::codec::ReedSolomon;
use super::error::{Result, RsError};
use crate::field::Field;

/// Step-by-step configuration for a [`ReedSolomon`] codec
pub struct ReedSolomonBuilder<F: Field> {
    field: F,
    generator: Option<F::Elem>,
    message_len: Option<usize>,
    ecc_len: Option<usize>,
    default_budget: Option<usize>,
}

impl<F: Field> ReedSolomonBuilder<F> {
    pub fn new(field: F) -> Self {
        Self {
            field,
            generator: None,
            message_len: None,
            ecc_len: None,
            default_budget: None,
        }
    }

    pub fn generator(mut self, generator: F::Elem) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn message_len(mut self, message_len: usize) -> Self {
        self.message_len = Some(message_len);
        self
    }

    pub fn ecc_len(mut self, ecc_len: usize) -> Self {
        self.ecc_len = Some(ecc_len);
        self
    }

    /// Error budget `decode` uses when called without one
    ///
    /// Defaults to `ecc_len / 2`. A smaller budget trades correction power
    /// for a lower chance of miscorrecting heavily damaged codewords.
    pub fn default_error_budget(mut self, budget: usize) -> Self {
        self.default_budget = Some(budget);
        self
    }

    /// Validate the configuration and build the codec
    pub fn build(self) -> Result<ReedSolomon<F>> {
        let generator = self
            .generator
            .ok_or(RsError::MissingParameter("generator"))?;
        let message_len = self
            .message_len
            .ok_or(RsError::MissingParameter("message_len"))?;
        let ecc_len = self.ecc_len.ok_or(RsError::MissingParameter("ecc_len"))?;

        let codec = ReedSolomon::new(self.field, generator, message_len, ecc_len)?;
        match self.default_budget {
            Some(budget) => codec.with_default_budget(budget),
            None => Ok(codec),
        }
    }
}

impl<F: Field> ReedSolomon<F> {
    /// Start configuring a codec over `field`
    pub fn builder(field: F) -> ReedSolomonBuilder<F> {
        ReedSolomonBuilder::new(field)
    }
}
