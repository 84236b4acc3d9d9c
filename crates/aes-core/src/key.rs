//! Key sizes and the AES key schedule.

use log::debug;

use crate::block::{Block, BLOCK_LEN};
use crate::error::{Error, Result};
use crate::gf::xtime;
use crate::sbox::sbox;

/// Four bytes; the unit of key expansion.
pub type Word = [u8; 4];

/// Number of columns in the state, fixed at 4 by AES.
const NB: usize = 4;

/// Round count of AES-256, the largest schedule.
pub const MAX_ROUNDS: usize = 14;

/// Supported AES key sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeySize {
    /// 128-bit key, 10 rounds.
    Aes128,
    /// 192-bit key, 12 rounds.
    Aes192,
    /// 256-bit key, 14 rounds.
    Aes256,
}

impl KeySize {
    /// Selects the key size from a key length in bytes.
    pub fn from_key_len(len: usize) -> Result<Self> {
        match len {
            16 => Ok(Self::Aes128),
            24 => Ok(Self::Aes192),
            32 => Ok(Self::Aes256),
            found => Err(Error::InvalidKeyLength { found }),
        }
    }

    /// Key length in bytes.
    pub const fn key_len(self) -> usize {
        self.nk() * 4
    }

    /// Key length in 32-bit words (`Nk`).
    pub const fn nk(self) -> usize {
        match self {
            Self::Aes128 => 4,
            Self::Aes192 => 6,
            Self::Aes256 => 8,
        }
    }

    /// Number of rounds (`Nr = Nk + 6`).
    pub const fn nr(self) -> usize {
        self.nk() + 6
    }

    /// Key length in bits.
    pub const fn bits(self) -> usize {
        self.key_len() * 8
    }
}

/// Rotates a word left by one byte: `[a0, a1, a2, a3] -> [a1, a2, a3, a0]`.
#[inline]
pub fn rot_word(word: Word) -> Word {
    let [a0, a1, a2, a3] = word;
    [a1, a2, a3, a0]
}

/// Applies the S-box to each byte of a word.
#[inline]
pub fn sub_word(word: Word) -> Word {
    word.map(sbox)
}

/// Round constant word `[x^(pow-1), 0, 0, 0]` for `pow >= 1`.
pub fn round_constant(pow: usize) -> Word {
    let mut x_pow = 0x01;
    for _ in 1..pow {
        x_pow = xtime(x_pow);
    }
    [x_pow, 0, 0, 0]
}

fn xor_words(lhs: Word, rhs: Word) -> Word {
    [lhs[0] ^ rhs[0], lhs[1] ^ rhs[1], lhs[2] ^ rhs[2], lhs[3] ^ rhs[3]]
}

/// Expanded round keys for any supported key size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeySchedule {
    size: KeySize,
    round_keys: [Block; MAX_ROUNDS + 1],
}

impl KeySchedule {
    /// Validates `key` and expands it into `Nr + 1` round keys.
    pub fn new(key: &[u8]) -> Result<Self> {
        let size = KeySize::from_key_len(key.len())?;
        let nk = size.nk();
        let total_words = NB * (size.nr() + 1);

        let mut w = [[0u8; 4]; NB * (MAX_ROUNDS + 1)];
        for (word, chunk) in w.iter_mut().zip(key.chunks_exact(4)) {
            word.copy_from_slice(chunk);
        }

        for i in nk..total_words {
            let mut temp = w[i - 1];
            if i % nk == 0 {
                temp = xor_words(sub_word(rot_word(temp)), round_constant(i / nk));
            } else if nk > 6 && i % nk == 4 {
                temp = sub_word(temp);
            }
            w[i] = xor_words(w[i - nk], temp);
        }

        let mut round_keys = [[0u8; BLOCK_LEN]; MAX_ROUNDS + 1];
        for (round_key, words) in round_keys.iter_mut().zip(w[..total_words].chunks_exact(NB)) {
            for (dst, word) in round_key.chunks_exact_mut(4).zip(words) {
                dst.copy_from_slice(word);
            }
        }

        debug!(
            "expanded AES-{} key into {} round keys",
            size.bits(),
            size.nr() + 1
        );
        Ok(Self { size, round_keys })
    }

    /// Key size this schedule was built from.
    pub fn key_size(&self) -> KeySize {
        self.size
    }

    /// Number of rounds (`Nr`).
    pub fn rounds(&self) -> usize {
        self.size.nr()
    }

    /// Returns the round key at `round` (`0..=Nr`).
    ///
    /// # Panics
    ///
    /// Panics if `round > Nr`.
    #[inline]
    pub fn round_key(&self, round: usize) -> &Block {
        assert!(round <= self.rounds(), "round {round} out of range");
        &self.round_keys[round]
    }

    /// Iterates round keys `0..=Nr` in order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Block> + ExactSizeIterator {
        self.round_keys[..=self.rounds()].iter()
    }

    /// The full expanded key, `16 * (Nr + 1)` bytes.
    pub fn expanded_key(&self) -> Vec<u8> {
        self.iter().flatten().copied().collect()
    }

    /// Returns a cursor positioned at round key 0.
    pub fn cursor(&self) -> RoundKeyCursor<'_> {
        RoundKeyCursor {
            schedule: self,
            position: 0,
        }
    }
}

/// Walks a [`KeySchedule`] one round key at a time.
///
/// The position sits between round keys: `next_encrypt_round_key` yields the key
/// after it and advances, `next_decrypt_round_key` yields the key before it and
/// steps back. Reset before each block.
#[derive(Clone, Debug)]
pub struct RoundKeyCursor<'a> {
    schedule: &'a KeySchedule,
    position: usize,
}

impl<'a> RoundKeyCursor<'a> {
    /// Returns the next round key moving forward, or `None` past round `Nr`.
    pub fn next_encrypt_round_key(&mut self) -> Option<&'a Block> {
        if self.position > self.schedule.rounds() {
            return None;
        }
        let key = self.schedule.round_key(self.position);
        self.position += 1;
        Some(key)
    }

    /// Returns the round key behind the cursor moving backward, or `None` before round 0.
    pub fn next_decrypt_round_key(&mut self) -> Option<&'a Block> {
        if self.position == 0 {
            return None;
        }
        self.position -= 1;
        Some(self.schedule.round_key(self.position))
    }

    /// Moves the cursor to the start, so the next encrypt key is round 0.
    pub fn reset_forward(&mut self) {
        self.position = 0;
    }

    /// Moves the cursor to the end, so the next decrypt key is round `Nr`.
    pub fn reset_backward(&mut self) {
        self.position = self.schedule.rounds() + 1;
    }
}
