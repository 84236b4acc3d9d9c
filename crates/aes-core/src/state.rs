//! The 4×4 AES state and its round transformations.

use core::fmt;

use crate::block::{Block, BLOCK_LEN};
use crate::gf::mul;
use crate::sbox::{inv_sbox, sbox};

const MIX: [[u8; 4]; 4] = [
    [0x02, 0x03, 0x01, 0x01],
    [0x01, 0x02, 0x03, 0x01],
    [0x01, 0x01, 0x02, 0x03],
    [0x03, 0x01, 0x01, 0x02],
];

const INV_MIX: [[u8; 4]; 4] = [
    [0x0e, 0x0b, 0x0d, 0x09],
    [0x09, 0x0e, 0x0b, 0x0d],
    [0x0d, 0x09, 0x0e, 0x0b],
    [0x0b, 0x0d, 0x09, 0x0e],
];

/// One block as a matrix of 4 rows and 4 columns.
///
/// Stored row-major; byte `k + 4 * i` of the linear block is row `k`, column `i`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct State {
    rows: [[u8; 4]; 4],
}

impl State {
    /// Builds a state from a 16-byte block.
    pub fn from_bytes(bytes: &Block) -> Self {
        let mut rows = [[0u8; 4]; 4];
        for (col, chunk) in bytes.chunks_exact(4).enumerate() {
            for (row, &byte) in chunk.iter().enumerate() {
                rows[row][col] = byte;
            }
        }
        Self { rows }
    }

    /// Flattens the state back into a 16-byte block.
    pub fn to_bytes(&self) -> Block {
        let mut bytes = [0u8; BLOCK_LEN];
        for (col, chunk) in bytes.chunks_exact_mut(4).enumerate() {
            for (row, byte) in chunk.iter_mut().enumerate() {
                *byte = self.rows[row][col];
            }
        }
        bytes
    }

    /// Reads the cell at `row`, `col`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.rows[row][col]
    }

    /// Applies the S-box to every cell.
    pub fn sub_bytes(&mut self) {
        for row in self.rows.iter_mut() {
            for cell in row.iter_mut() {
                *cell = sbox(*cell);
            }
        }
    }

    /// Applies the inverse S-box to every cell.
    pub fn inv_sub_bytes(&mut self) {
        for row in self.rows.iter_mut() {
            for cell in row.iter_mut() {
                *cell = inv_sbox(*cell);
            }
        }
    }

    /// Rotates row `r` left by `r` positions.
    pub fn shift_rows(&mut self) {
        for (r, row) in self.rows.iter_mut().enumerate() {
            row.rotate_left(r);
        }
    }

    /// Rotates row `r` left by `4 - r` positions, undoing [`State::shift_rows`].
    pub fn inv_shift_rows(&mut self) {
        for (r, row) in self.rows.iter_mut().enumerate() {
            row.rotate_left((4 - r) % 4);
        }
    }

    /// Multiplies every column by the MDS matrix for `{03}x^3 + {01}x^2 + {01}x + {02}`.
    pub fn mix_columns(&mut self) {
        for col in 0..4 {
            let mixed = multiply_column(&MIX, self.column(col));
            self.set_column(col, mixed);
        }
    }

    /// Multiplies every column by the inverse MDS matrix for `{0b}x^3 + {0d}x^2 + {09}x + {0e}`.
    pub fn inv_mix_columns(&mut self) {
        for col in 0..4 {
            let mixed = multiply_column(&INV_MIX, self.column(col));
            self.set_column(col, mixed);
        }
    }

    /// XORs a round key into the state using the same byte mapping as [`State::from_bytes`].
    pub fn add_round_key(&mut self, round_key: &Block) {
        for (col, chunk) in round_key.chunks_exact(4).enumerate() {
            for (row, &byte) in chunk.iter().enumerate() {
                self.rows[row][col] ^= byte;
            }
        }
    }

    fn column(&self, col: usize) -> [u8; 4] {
        [
            self.rows[0][col],
            self.rows[1][col],
            self.rows[2][col],
            self.rows[3][col],
        ]
    }

    fn set_column(&mut self, col: usize, column: [u8; 4]) {
        for (row, byte) in column.into_iter().enumerate() {
            self.rows[row][col] = byte;
        }
    }
}

/// Matrix-vector product over GF(2^8); the input column is copied, never updated in place.
fn multiply_column(matrix: &[[u8; 4]; 4], column: [u8; 4]) -> [u8; 4] {
    matrix.map(|coeffs| {
        coeffs
            .iter()
            .zip(column.iter())
            .fold(0u8, |acc, (&c, &a)| acc ^ mul(c, a))
    })
}

impl From<Block> for State {
    fn from(bytes: Block) -> Self {
        Self::from_bytes(&bytes)
    }
}

impl From<State> for Block {
    fn from(state: State) -> Self {
        state.to_bytes()
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.to_bytes()))
    }
}
