//! Electronic Codebook mode.
//!
//! Every 16-byte chunk is encrypted independently with the same round keys, so
//! equal plaintext blocks produce equal ciphertext blocks. A trailing partial
//! plaintext chunk is zero-extended before encryption; the padding is not
//! recorded anywhere, so callers that need the exact original length must keep
//! it themselves.

use log::debug;

use crate::block::{padded_len, zero_extended, BLOCK_LEN};
use crate::cipher::{decrypt_block, encrypt_block};
use crate::error::Result;
use crate::key::KeySchedule;

/// A block cipher mode that turns a key and a byte buffer into a byte buffer.
pub trait BlockCipherMode {
    /// Encrypts `plaintext` under `key`.
    fn encrypt(&self, plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>>;

    /// Decrypts `ciphertext` under `key`.
    fn decrypt(&self, ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>>;
}

/// AES in ECB mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ecb;

impl Ecb {
    /// Encrypts with an already expanded schedule.
    ///
    /// The output is `plaintext.len()` rounded up to a multiple of 16.
    pub fn encrypt_with(&self, plaintext: &[u8], round_keys: &KeySchedule) -> Vec<u8> {
        let mut out = Vec::with_capacity(padded_len(plaintext.len()));
        for chunk in plaintext.chunks(BLOCK_LEN) {
            let block = zero_extended(chunk);
            out.extend_from_slice(&encrypt_block(&block, round_keys));
        }
        debug!(
            "ecb encrypt: {} blocks, AES-{}, zero-extended {} bytes",
            out.len() / BLOCK_LEN,
            round_keys.key_size().bits(),
            out.len() - plaintext.len()
        );
        out
    }

    /// Decrypts with an already expanded schedule.
    ///
    /// The output has the same length as `ciphertext`. A trailing partial
    /// chunk is zero-extended for decryption and the result truncated.
    pub fn decrypt_with(&self, ciphertext: &[u8], round_keys: &KeySchedule) -> Vec<u8> {
        let mut out = Vec::with_capacity(padded_len(ciphertext.len()));
        for chunk in ciphertext.chunks(BLOCK_LEN) {
            let block = zero_extended(chunk);
            out.extend_from_slice(&decrypt_block(&block, round_keys));
        }
        debug!(
            "ecb decrypt: {} blocks, AES-{}",
            out.len() / BLOCK_LEN,
            round_keys.key_size().bits()
        );
        out.truncate(ciphertext.len());
        out
    }
}

impl BlockCipherMode for Ecb {
    fn encrypt(&self, plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        let round_keys = KeySchedule::new(key)?;
        Ok(self.encrypt_with(plaintext, &round_keys))
    }

    fn decrypt(&self, ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        let round_keys = KeySchedule::new(key)?;
        Ok(self.decrypt_with(ciphertext, &round_keys))
    }
}

/// Encrypts `plaintext` with AES-ECB under a 16, 24 or 32 byte `key`.
pub fn encrypt(plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    Ecb.encrypt(plaintext, key)
}

/// Decrypts `ciphertext` with AES-ECB under a 16, 24 or 32 byte `key`.
pub fn decrypt(ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    Ecb.decrypt(ciphertext, key)
}
