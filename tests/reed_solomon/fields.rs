//! Codecs over prime fields and 16-bit table fields

use gfcodec::field::{PrimeField, TableField};
use gfcodec::reed_solomon::{ReedSolomon, RsError};

#[test]
fn test_prime_field_corrects_up_to_bound() {
    let field = PrimeField::new(257).unwrap();
    let rs = ReedSolomon::new(field, 3, 20, 8).unwrap();
    let message: Vec<u32> = (0..20).map(|i| (i * 37 + 11) % 257).collect();
    let codeword = rs.encode(&message).unwrap();

    let mut received = codeword.clone();
    for (position, delta) in [(0, 1), (9, 100), (17, 256), (27, 5)] {
        received[position] = (received[position] + delta) % 257;
    }

    let outcome = rs.decode_detailed(&received, None).unwrap().unwrap();
    assert_eq!(outcome.message, message);
    assert_eq!(outcome.corrected, vec![0, 9, 17, 27]);
}

#[test]
fn test_prime_field_single_error_every_position() {
    let field = PrimeField::new(13).unwrap();
    // 2 is a primitive root mod 13, so codewords may be 12 long
    let rs = ReedSolomon::new(field, 2, 8, 4).unwrap();
    let message = [12, 0, 5, 7, 1, 1, 3, 9];
    let codeword = rs.encode(&message).unwrap();

    for position in 0..12 {
        for delta in 1..13 {
            let mut received = codeword.clone();
            received[position] = (received[position] + delta) % 13;
            let outcome = rs.decode_detailed(&received, None).unwrap().unwrap();
            assert_eq!(outcome.message, message);
            assert_eq!(outcome.corrected, vec![position]);
        }
    }
}

#[test]
fn test_gf65536_long_codeword() {
    let field = TableField::new(0x1100B).unwrap();
    let rs = ReedSolomon::builder(field)
        .generator(2)
        .message_len(200)
        .ecc_len(16)
        .build()
        .unwrap();
    let message: Vec<u32> = (0..200u32).map(|i| i.wrapping_mul(0x9E37) & 0xFFFF).collect();
    let codeword = rs.encode(&message).unwrap();

    let mut received = codeword.clone();
    for (k, position) in [3, 50, 51, 99, 120, 180, 199, 215].into_iter().enumerate() {
        received[position] ^= 0x1111 * (k as u32 + 1);
    }
    assert_eq!(rs.decode(&received, None).unwrap(), Some(message));
}

#[test]
fn test_budget_limits_correction() {
    let field = PrimeField::new(257).unwrap();
    let rs = ReedSolomon::new(field, 3, 10, 6).unwrap();
    let message = vec![42; 10];
    let mut received = rs.encode(&message).unwrap();
    received[2] = (received[2] + 1) % 257;
    received[8] = (received[8] + 1) % 257;

    assert_eq!(rs.decode(&received, Some(3)).unwrap(), Some(message.clone()));
    assert_eq!(rs.decode(&received, Some(2)).unwrap(), Some(message));
    assert_eq!(rs.decode(&received, Some(1)).unwrap(), None);
    assert_eq!(rs.decode(&received, Some(0)).unwrap(), None);
    assert_eq!(
        rs.decode(&received, Some(4)).unwrap_err(),
        RsError::ErrorCountOutOfRange {
            requested: 4,
            max: 3
        }
    );
}

#[test]
fn test_codec_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReedSolomon<PrimeField>>();
    assert_send_sync::<ReedSolomon<TableField>>();

    let field = TableField::new(0x11D).unwrap();
    let rs = ReedSolomon::new(field, 2, 6, 4).unwrap();
    std::thread::scope(|scope| {
        for seed in 0..4u32 {
            let rs = &rs;
            scope.spawn(move || {
                let message: Vec<u32> = (0..6).map(|i| (seed * 31 + i) % 256).collect();
                let mut codeword = rs.encode(&message).unwrap();
                codeword[seed as usize] ^= 0x77;
                assert_eq!(rs.decode(&codeword, None).unwrap(), Some(message));
            });
        }
    });
}
