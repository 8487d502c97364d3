//! Reed-Solomon error correction over an arbitrary finite field
//!
//! [`ReedSolomon`] encodes `message_len` symbols into a systematic codeword of
//! `message_len + ecc_len` symbols and decodes up to `ecc_len / 2` symbol
//! errors using syndromes and two Gauss-Jordan solves.
//!
//! ```
//! use gfcodec::field::BinaryField;
//! use gfcodec::reed_solomon::ReedSolomon;
//!
//! let field = BinaryField::new(0x11D).unwrap();
//! let rs = ReedSolomon::new(field, 0x02, 8, 5).unwrap();
//!
//! let message = vec![0x48, 0x65, 0x6C, 0x6C, 0x6F, 0x21, 0x00, 0xFF];
//! let mut codeword = rs.encode(&message).unwrap();
//! codeword[2] ^= 0x40;
//! codeword[12] = 0;
//!
//! assert_eq!(rs.decode(&codeword, None).unwrap(), Some(message));
//! ```

pub mod batch;
pub mod builder;
pub mod codec;
pub mod error;
pub mod polynomial;

pub use builder::ReedSolomonBuilder;
pub use codec::{CodecParams, DecodeOutcome, ReedSolomon};
pub use error::{Result, RsError};
