//! Randomized encode/corrupt/decode trials
//!
//! GF(2^8) with modulus 0x11D, generator 0x02, 8 message symbols and 5 ECC
//! symbols. Each trial corrupts between 0 and 2 symbols to new values and
//! must recover the message exactly.

use gfcodec::field::{BinaryField, Field};
use gfcodec::reed_solomon::ReedSolomon;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const TRIALS: usize = 2_000;

fn codec() -> ReedSolomon<BinaryField> {
    let field = BinaryField::new(0x11D).unwrap();
    ReedSolomon::new(field, 0x02, 8, 5).unwrap()
}

#[test]
fn test_gf256_random_trials() {
    let _ = env_logger::builder().is_test(true).try_init();
    let rs = codec();
    let mut rng = StdRng::seed_from_u64(0x11D);
    let mut positions: Vec<usize> = (0..rs.codeword_len()).collect();

    for trial in 0..TRIALS {
        let message: Vec<u32> = (0..rs.message_len())
            .map(|_| rng.random_range(0..256))
            .collect();
        let codeword = rs.encode(&message).unwrap();
        assert_eq!(&codeword[rs.ecc_len()..], &message[..]);

        let mut received = codeword.clone();
        let error_count = rng.random_range(0..=rs.ecc_len() / 2);
        positions.shuffle(&mut rng);
        for &position in &positions[..error_count] {
            received[position] ^= rng.random_range(1..256);
        }

        let decoded = rs.decode(&received, None).unwrap();
        assert_eq!(
            decoded.as_deref(),
            Some(&message[..]),
            "trial {trial}: {error_count} errors at {:?}",
            &positions[..error_count]
        );
    }
}

#[test]
fn test_every_pair_of_error_positions() {
    let rs = codec();
    let message = [0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x01, 0x02, 0x03];
    let codeword = rs.encode(&message).unwrap();

    for first in 0..rs.codeword_len() {
        for second in first + 1..rs.codeword_len() {
            let mut received = codeword.clone();
            received[first] ^= 0x01;
            received[second] ^= 0xFF;

            let outcome = rs.decode_detailed(&received, None).unwrap().unwrap();
            assert_eq!(outcome.message, message);
            assert_eq!(outcome.corrected, vec![first, second]);
        }
    }
}

#[test]
fn test_zero_syndromes_return_message_suffix() {
    let rs = codec();
    let field = rs.field();
    // Sum of two codewords is a codeword
    let a = rs.encode(&[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    let b = rs.encode(&[8, 7, 6, 5, 4, 3, 2, 1]).unwrap();
    let sum: Vec<u32> = a.iter().zip(&b).map(|(&x, &y)| field.add(x, y)).collect();

    assert!(rs.is_codeword(&sum).unwrap());
    for budget in 0..=2 {
        let outcome = rs.decode_detailed(&sum, Some(budget)).unwrap().unwrap();
        assert_eq!(outcome.message, &sum[5..]);
        assert!(outcome.corrected.is_empty());
    }
}

#[test]
fn test_syndromes_of_corrupted_codeword() {
    let rs = codec();
    let field = rs.field();
    let mut codeword = rs.encode(&[0; 8]).unwrap();
    codeword[4] = 0x37;

    // A single error e at position i gives S_j = e * (2^i)^j
    let syndromes = rs.syndromes(&codeword).unwrap();
    let base = field.pow(2, 4);
    for (j, &syndrome) in syndromes.iter().enumerate() {
        assert_eq!(syndrome, field.multiply(0x37, field.pow(base, j as u64)));
    }
    assert!(!rs.is_codeword(&codeword).unwrap());
}
