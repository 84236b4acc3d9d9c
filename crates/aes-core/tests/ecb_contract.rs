//! External contract of the ECB entry points, exercised through the public API only.

use aes_core::{
    decrypt, decrypt_block, encrypt, encrypt_block, padded_len, sbox, BlockCipherMode, Ecb,
    Error, KeySchedule, State,
};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

const PLAIN: [u8; 16] = [
    0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff,
];

fn sequential_key(len: usize) -> Vec<u8> {
    (0..len as u8).collect()
}

#[test]
fn known_answers_for_every_key_size() {
    let cases = [
        (16, "69c4e0d86a7b0430d8cdb78070b4c55a"),
        (24, "dda97ca4864cdfe06eaf70a0ec0d7191"),
        (32, "8ea2b7ca516745bfeafc49904b496089"),
    ];
    for (len, expected) in cases {
        let key = sequential_key(len);
        let ct = encrypt(&PLAIN, &key).expect("encrypt");
        assert_eq!(hex::encode(&ct), expected);
        assert_eq!(decrypt(&ct, &key).expect("decrypt"), PLAIN);
    }
}

#[test]
fn round_trip_zero_extends_to_block_multiple() {
    let mut rng = ChaCha20Rng::from_seed([50u8; 32]);
    for key_len in [16, 24, 32] {
        for _ in 0..16 {
            let mut key = vec![0u8; key_len];
            rng.fill_bytes(&mut key);
            let mut message = vec![0u8; rng.gen_range(0..80)];
            rng.fill_bytes(&mut message);

            let ct = encrypt(&message, &key).expect("encrypt");
            let pt = decrypt(&ct, &key).expect("decrypt");

            let mut expected = message.clone();
            expected.resize(padded_len(message.len()), 0);
            assert_eq!(pt, expected);
        }
    }
}

#[test]
fn fifteen_byte_key_fails_both_directions() {
    let key = [0u8; 15];
    assert_eq!(
        encrypt(&PLAIN, &key),
        Err(Error::InvalidKeyLength { found: 15 })
    );
    assert_eq!(
        Ecb.decrypt(&PLAIN, &key),
        Err(Error::InvalidKeyLength { found: 15 })
    );
    assert_eq!(
        Error::InvalidKeyLength { found: 15 }.to_string(),
        "invalid AES key length: expected 16, 24 or 32 bytes, got 15"
    );
}

#[test]
fn twenty_byte_message_is_two_blocks() {
    let key = sequential_key(16);
    let message: Vec<u8> = (0..20).collect();
    let ct = encrypt(&message, &key).expect("encrypt");
    assert_eq!(ct.len(), 32);

    let schedule = KeySchedule::new(&key).expect("valid key");
    let first: [u8; 16] = message[..16].try_into().expect("16 bytes");
    assert_eq!(ct[..16], encrypt_block(&first, &schedule));
}

#[test]
fn blocks_are_independent() {
    let key = sequential_key(32);
    let schedule = KeySchedule::new(&key).expect("valid key");
    let mut message = PLAIN.to_vec();
    message.extend_from_slice(&[0xee; 16]);
    message.extend_from_slice(&PLAIN);

    let ct = encrypt(&message, &key).expect("encrypt");
    for (chunk, ct_chunk) in message.chunks(16).zip(ct.chunks(16)) {
        let block: [u8; 16] = chunk.try_into().expect("16 bytes");
        assert_eq!(ct_chunk, encrypt_block(&block, &schedule));
        let ct_block: [u8; 16] = ct_chunk.try_into().expect("16 bytes");
        assert_eq!(decrypt_block(&ct_block, &schedule), block);
    }
}

#[test]
fn sbox_round_trip_and_state_involution() {
    for x in 0..=255u8 {
        assert_eq!(sbox::inv_sbox(sbox::sbox(x)), x);
    }

    let mut state = State::from_bytes(&PLAIN);
    let key: [u8; 16] = sequential_key(16).try_into().expect("16 bytes");
    state.add_round_key(&key);
    state.add_round_key(&key);
    assert_eq!(state.to_bytes(), PLAIN);
}
