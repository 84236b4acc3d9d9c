//! Block representation helpers.

/// Length of an AES block in bytes.
pub const BLOCK_LEN: usize = 16;

/// AES block of 16 bytes.
pub type Block = [u8; BLOCK_LEN];

/// Rounds `len` up to the next multiple of [`BLOCK_LEN`].
#[inline]
pub const fn padded_len(len: usize) -> usize {
    len.div_ceil(BLOCK_LEN) * BLOCK_LEN
}

/// Copies up to 16 bytes of `chunk` into a fresh block, zero-filling the rest.
#[inline]
pub fn zero_extended(chunk: &[u8]) -> Block {
    let mut block = [0u8; BLOCK_LEN];
    let len = chunk.len().min(BLOCK_LEN);
    block[..len].copy_from_slice(&chunk[..len]);
    block
}
