//! AES-128/192/256 built from GF(2^8) arithmetic, with an ECB block mode.
//!
//! The crate follows FIPS-197 directly and provides:
//! - Field arithmetic (`xtime`, multiplication, inversion) and the derived S-box.
//! - Key expansion for 16, 24 and 32 byte keys.
//! - The state matrix with the four round transformations and their inverses.
//! - Single-block encryption/decryption and message-level ECB.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod ecb;
mod error;
pub mod gf;
mod key;
pub mod sbox;
mod state;

pub use crate::block::{padded_len, Block, BLOCK_LEN};
pub use crate::cipher::{decrypt_block, encrypt_block};
pub use crate::ecb::{decrypt, encrypt, BlockCipherMode, Ecb};
pub use crate::error::{Error, Result};
pub use crate::key::{
    rot_word, round_constant, sub_word, KeySchedule, KeySize, RoundKeyCursor, Word, MAX_ROUNDS,
};
pub use crate::state::State;
