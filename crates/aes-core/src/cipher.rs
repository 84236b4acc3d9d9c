//! Single-block encryption and decryption.
//!
//! Round steps are traced at `trace` level with the labels of the FIPS-197
//! Appendix C listings, so a run with `RUST_LOG=aes_core=trace` can be diffed
//! against the standard.

use log::{log_enabled, trace, Level};

use crate::block::Block;
use crate::key::KeySchedule;
use crate::state::State;

fn trace_step(round: usize, step: &str, value: &dyn core::fmt::Display) {
    trace!("round[{round:2}].{step:<7}{value}");
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &KeySchedule) -> Block {
    let tracing = log_enabled!(Level::Trace);
    let nr = round_keys.rounds();
    let mut state = State::from_bytes(block);

    if tracing {
        trace_step(0, "input", &state);
        trace_step(0, "k_sch", &hex::encode(round_keys.round_key(0)));
    }
    state.add_round_key(round_keys.round_key(0));

    for round in 1..nr {
        if tracing {
            trace_step(round, "start", &state);
        }
        state.sub_bytes();
        if tracing {
            trace_step(round, "s_box", &state);
        }
        state.shift_rows();
        if tracing {
            trace_step(round, "s_row", &state);
        }
        state.mix_columns();
        if tracing {
            trace_step(round, "m_col", &state);
            trace_step(round, "k_sch", &hex::encode(round_keys.round_key(round)));
        }
        state.add_round_key(round_keys.round_key(round));
    }

    if tracing {
        trace_step(nr, "start", &state);
    }
    state.sub_bytes();
    if tracing {
        trace_step(nr, "s_box", &state);
    }
    state.shift_rows();
    if tracing {
        trace_step(nr, "s_row", &state);
        trace_step(nr, "k_sch", &hex::encode(round_keys.round_key(nr)));
    }
    state.add_round_key(round_keys.round_key(nr));
    if tracing {
        trace_step(nr, "output", &state);
    }

    state.to_bytes()
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &KeySchedule) -> Block {
    let tracing = log_enabled!(Level::Trace);
    let nr = round_keys.rounds();
    let mut state = State::from_bytes(block);

    if tracing {
        trace_step(0, "iinput", &state);
        trace_step(0, "ik_sch", &hex::encode(round_keys.round_key(nr)));
    }
    state.add_round_key(round_keys.round_key(nr));

    for round in (1..nr).rev() {
        let step = nr - round;
        if tracing {
            trace_step(step, "istart", &state);
        }
        state.inv_shift_rows();
        if tracing {
            trace_step(step, "is_row", &state);
        }
        state.inv_sub_bytes();
        if tracing {
            trace_step(step, "is_box", &state);
            trace_step(step, "ik_sch", &hex::encode(round_keys.round_key(round)));
        }
        state.add_round_key(round_keys.round_key(round));
        if tracing {
            trace_step(step, "ik_add", &state);
        }
        state.inv_mix_columns();
    }

    if tracing {
        trace_step(nr, "istart", &state);
    }
    state.inv_shift_rows();
    if tracing {
        trace_step(nr, "is_row", &state);
    }
    state.inv_sub_bytes();
    if tracing {
        trace_step(nr, "is_box", &state);
        trace_step(nr, "ik_sch", &hex::encode(round_keys.round_key(0)));
    }
    state.add_round_key(round_keys.round_key(0));
    if tracing {
        trace_step(nr, "ioutput", &state);
    }

    state.to_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    const NIST_KEY: [u8; 32] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f, 0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18, 0x19, 0x1a, 0x1b, 0x1c, 0x1d,
        0x1e, 0x1f,
    ];
    const NIST_PLAIN: [u8; 16] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];
    const NIST_CIPHER_128: [u8; 16] = [
        0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5,
        0x5a,
    ];
    const NIST_CIPHER_192: [u8; 16] = [
        0xdd, 0xa9, 0x7c, 0xa4, 0x86, 0x4c, 0xdf, 0xe0, 0x6e, 0xaf, 0x70, 0xa0, 0xec, 0x0d, 0x71,
        0x91,
    ];
    const NIST_CIPHER_256: [u8; 16] = [
        0x8e, 0xa2, 0xb7, 0xca, 0x51, 0x67, 0x45, 0xbf, 0xea, 0xfc, 0x49, 0x90, 0x4b, 0x49, 0x60,
        0x89,
    ];

    fn vectors() -> [(usize, [u8; 16]); 3] {
        [
            (16, NIST_CIPHER_128),
            (24, NIST_CIPHER_192),
            (32, NIST_CIPHER_256),
        ]
    }

    #[test]
    fn encrypt_matches_nist_vectors() {
        for (key_len, expected) in vectors() {
            let round_keys = KeySchedule::new(&NIST_KEY[..key_len]).expect("valid key");
            let ct = encrypt_block(&NIST_PLAIN, &round_keys);
            assert_eq!(ct, expected, "AES-{}", key_len * 8);
        }
    }

    #[test]
    fn decrypt_matches_nist_vectors() {
        for (key_len, ciphertext) in vectors() {
            let round_keys = KeySchedule::new(&NIST_KEY[..key_len]).expect("valid key");
            let pt = decrypt_block(&ciphertext, &round_keys);
            assert_eq!(pt, NIST_PLAIN, "AES-{}", key_len * 8);
        }
    }

    #[test]
    fn fips_appendix_b_vector() {
        let key = hex::decode("2b7e151628aed2a6abf7158809cf4f3c").expect("hex");
        let plain: Block = hex::decode("3243f6a8885a308d313198a2e0370734")
            .expect("hex")
            .try_into()
            .expect("16 bytes");
        let round_keys = KeySchedule::new(&key).expect("valid key");
        let ct = encrypt_block(&plain, &round_keys);
        assert_eq!(hex::encode(ct), "3925841d02dc09fbdc118597196a0b32");
    }

    #[test]
    fn encrypt_decrypt_round_trip_random() {
        let mut rng = rand::thread_rng();
        for key_len in [16, 24, 32] {
            for _ in 0..50 {
                let mut key_bytes = vec![0u8; key_len];
                let mut block = [0u8; 16];
                rng.fill_bytes(&mut key_bytes);
                rng.fill_bytes(&mut block);
                let rks = KeySchedule::new(&key_bytes).expect("valid key");
                let ct = encrypt_block(&block, &rks);
                let pt = decrypt_block(&ct, &rks);
                assert_eq!(pt, block);
            }
        }
    }
}
