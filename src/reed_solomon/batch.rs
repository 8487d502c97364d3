//! Parallel encoding and decoding of independent blocks
//!
//! Each block is a separate codeword; blocks share the codec read-only and are
//! processed on the rayon thread pool. Results keep input order.

use super::codec::ReedSolomon;
use super::error::Result;
use crate::field::Field;
use rayon::prelude::*;

impl<F: Field + Sync> ReedSolomon<F> {
    /// Encode every message; any invalid message fails the whole batch
    pub fn encode_blocks(&self, messages: &[Vec<F::Elem>]) -> Result<Vec<Vec<F::Elem>>> {
        messages
            .par_iter()
            .map(|message| self.encode(message))
            .collect()
    }

    /// Decode every codeword with the same error budget
    ///
    /// Uncorrectable blocks come back as `None`; only precondition errors
    /// (bad lengths, bad symbols, bad budget) fail the batch.
    pub fn decode_blocks(
        &self,
        codewords: &[Vec<F::Elem>],
        num_errors_to_correct: Option<usize>,
    ) -> Result<Vec<Option<Vec<F::Elem>>>> {
        codewords
            .par_iter()
            .map(|codeword| self.decode(codeword, num_errors_to_correct))
            .collect()
    }
}
