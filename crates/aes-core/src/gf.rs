//! Arithmetic in GF(2^8) modulo the AES polynomial `x^8 + x^4 + x^3 + x + 1`.
//!
//! Every function here is `const` so the lookup tables in [`crate::sbox`] can be
//! checked against (or rebuilt from) the same definitions at compile time.

/// The AES reduction polynomial `x^8 + x^4 + x^3 + x + 1` as a 9-bit value.
pub const REDUCTION_POLY: u16 = 0x011b;

/// Low byte of [`REDUCTION_POLY`], XORed in when a shift overflows bit 7.
const REDUCTION_LOW: u8 = 0x1b;

/// Returns true if `bit` (0-indexed from the least significant bit) is set in `value`.
#[inline]
pub const fn is_bit_set(value: u16, bit: u32) -> bool {
    value & (1 << bit) != 0
}

/// Multiplies a field element by `x`.
#[inline]
pub const fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if is_bit_set(byte as u16, 7) {
        shifted ^ REDUCTION_LOW
    } else {
        shifted
    }
}

/// Multiplies two field elements with the shift-and-add method.
pub const fn mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while a != 0 {
        if a & 1 != 0 {
            product ^= b;
        }
        b = xtime(b);
        a >>= 1;
    }
    product
}

/// Degree of a nonzero polynomial packed into a `u16`.
#[inline]
const fn degree(poly: u16) -> u32 {
    15 - poly.leading_zeros()
}

/// Returns the multiplicative inverse of `value`, mapping 0 to 0.
///
/// Runs the extended Euclidean algorithm over GF(2)[x] between the reduction
/// polynomial and `value`. Each row tracks `(remainder, coefficient on the
/// modulus, coefficient on the input)`; the row with the higher-degree
/// remainder is reduced by the other row shifted to the same degree until one
/// remainder becomes 1, at which point its input coefficient is the inverse.
pub const fn multiplicative_inverse(value: u8) -> u8 {
    if value == 0 {
        return 0;
    }

    let mut hi = [REDUCTION_POLY, 1, 0];
    let mut lo = [value as u16, 0, 1];

    while hi[0] != 1 && lo[0] != 1 {
        let deg_hi = degree(hi[0]);
        let deg_lo = degree(lo[0]);
        if deg_hi > deg_lo || (deg_hi == deg_lo && hi[0] > lo[0]) {
            let shift = deg_hi - deg_lo;
            hi[0] ^= lo[0] << shift;
            hi[1] ^= lo[1] << shift;
            hi[2] ^= lo[2] << shift;
        } else {
            let shift = deg_lo - deg_hi;
            lo[0] ^= hi[0] << shift;
            lo[1] ^= hi[1] << shift;
            lo[2] ^= hi[2] << shift;
        }
    }

    // The Bezout coefficient on the input has degree below 8.
    if hi[0] == 1 {
        hi[2] as u8
    } else {
        lo[2] as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Carry-less multiply then reduce by long division, independent of `xtime`.
    fn reference_mul(a: u8, b: u8) -> u8 {
        let mut wide = 0u16;
        for bit in 0..8 {
            if is_bit_set(a as u16, bit) {
                wide ^= (b as u16) << bit;
            }
        }
        for bit in (8..16).rev() {
            if is_bit_set(wide, bit) {
                wide ^= REDUCTION_POLY << (bit - 8);
            }
        }
        wide as u8
    }

    #[test]
    fn is_bit_set_reads_single_bits() {
        assert!(is_bit_set(0x80, 7));
        assert!(!is_bit_set(0x80, 6));
        assert!(is_bit_set(0x011b, 8));
        assert!(is_bit_set(0x01, 0));
        assert!(!is_bit_set(0x00, 0));
    }

    #[test]
    fn xtime_matches_fips_examples() {
        // FIPS-197 section 4.2.1: {57} . {02} = {ae}, {ae} . {02} = {47}.
        assert_eq!(xtime(0x57), 0xae);
        assert_eq!(xtime(0xae), 0x47);
        assert_eq!(xtime(0x47), 0x8e);
        assert_eq!(xtime(0x8e), 0x07);
        assert_eq!(xtime(0x80), 0x1b);
    }

    #[test]
    fn xtime_equals_reduced_multiplication_by_x() {
        for x in 0..=255u8 {
            assert_eq!(xtime(x), reference_mul(x, 0x02), "x = {x:#04x}");
        }
    }

    #[test]
    fn mul_matches_fips_examples() {
        assert_eq!(mul(0x57, 0x83), 0xc1);
        assert_eq!(mul(0x57, 0x13), 0xfe);
    }

    #[test]
    fn mul_is_commutative_with_identity() {
        for a in 0..=255u8 {
            assert_eq!(mul(a, 1), a);
            assert_eq!(mul(a, 0), 0);
            for b in 0..=255u8 {
                assert_eq!(mul(a, b), mul(b, a));
            }
        }
    }

    #[test]
    fn mul_agrees_with_long_division() {
        for a in (0..=255u8).step_by(7) {
            for b in 0..=255u8 {
                assert_eq!(mul(a, b), reference_mul(a, b));
            }
        }
    }

    #[test]
    fn inverse_of_zero_is_zero() {
        assert_eq!(multiplicative_inverse(0), 0);
    }

    #[test]
    fn inverse_satisfies_field_identity() {
        assert_eq!(multiplicative_inverse(0x53), 0xca);
        assert_eq!(multiplicative_inverse(0x01), 0x01);
        for x in 1..=255u8 {
            let inv = multiplicative_inverse(x);
            assert_eq!(mul(x, inv), 1, "x = {x:#04x}, inv = {inv:#04x}");
            assert_eq!(multiplicative_inverse(inv), x);
        }
    }
}
