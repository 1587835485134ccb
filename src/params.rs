//! CRC algorithm parameters.
//!
//! Every CRC variant is fully described by the five canonical Rocksoft
//! parameters: bit width, generator polynomial, initial register value,
//! final XOR mask, and the two reflection flags. This module holds the
//! immutable parameter tuple plus the bit-reversal primitive shared with
//! the engine.

/// Widest CRC this library computes.
pub const MAX_WIDTH: u32 = 32;

/// Immutable parameter set describing one CRC variant.
///
/// `poly`, `init` and `xorout` are normalized (masked) to `width` bits at
/// construction, so two parameter sets describing the same algorithm
/// compare equal even if callers passed un-masked constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrcParams {
    /// Bit width of the CRC register, 3 to 32 inclusive.
    pub width: u32,
    /// Generator polynomial, normal (non-reflected) representation.
    pub poly: u64,
    /// Initial register value.
    pub init: u64,
    /// Mask XORed into the register after the final (optional) reflection.
    pub xorout: u64,
    /// Process input bytes least-significant-bit first.
    pub refin: bool,
    /// Reflect the register before applying `xorout`.
    pub refout: bool,
}

impl CrcParams {
    /// Build a parameter set, masking `poly`, `init` and `xorout` to `width` bits.
    pub const fn new(
        width: u32,
        poly: u64,
        init: u64,
        xorout: u64,
        refin: bool,
        refout: bool,
    ) -> Self {
        let mask = width_mask(width);
        Self {
            width,
            poly: poly & mask,
            init: init & mask,
            xorout: xorout & mask,
            refin,
            refout,
        }
    }

    /// Number of hex digits needed to print a `width`-bit value.
    ///
    /// A CRC-5 result is always 2 digits even though only 5 bits carry
    /// meaning; a CRC-16 result is always 4.
    pub const fn hex_digits(&self) -> usize {
        (self.width as usize).div_ceil(4)
    }
}

/// `width` one-bits in the low positions.
pub(crate) const fn width_mask(width: u32) -> u64 {
    if width >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// Reverse the low `bit_count` bits of `value`; higher bits are discarded.
pub(crate) const fn reverse_bits(value: u64, bit_count: u32) -> u64 {
    let mut v = value & width_mask(bit_count);
    let mut out = 0u64;
    let mut i = 0;
    while i < bit_count {
        out = (out << 1) | (v & 1);
        v >>= 1;
        i += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_bits() {
        assert_eq!(reverse_bits(0b1011, 4), 0b1101);
        assert_eq!(reverse_bits(0x05, 5), 0x14);
        assert_eq!(reverse_bits(0x04c11db7, 32), 0xedb88320);
        assert_eq!(reverse_bits(0x1f, 5), 0x1f);
        assert_eq!(reverse_bits(0, 12), 0);
        // bits above bit_count are discarded before reversing
        assert_eq!(reverse_bits(0xf3, 4), 0b1100);
        // zero-length reversal of anything is zero
        assert_eq!(reverse_bits(0xdead, 0), 0);
    }

    #[test]
    fn test_width_mask() {
        assert_eq!(width_mask(3), 0x7);
        assert_eq!(width_mask(8), 0xff);
        assert_eq!(width_mask(32), 0xffff_ffff);
        assert_eq!(width_mask(64), u64::MAX);
    }

    #[test]
    fn test_params_are_normalized() {
        let p = CrcParams::new(8, 0x107, 0x1ff, 0x100, false, false);
        assert_eq!(p.poly, 0x07);
        assert_eq!(p.init, 0xff);
        assert_eq!(p.xorout, 0x00);
    }

    #[test]
    fn test_hex_digits() {
        assert_eq!(CrcParams::new(3, 0x3, 0, 0x7, false, false).hex_digits(), 1);
        assert_eq!(CrcParams::new(5, 0x05, 0x1f, 0x1f, true, true).hex_digits(), 2);
        assert_eq!(CrcParams::new(12, 0x80f, 0, 0, false, true).hex_digits(), 3);
        assert_eq!(CrcParams::new(16, 0x8005, 0, 0, true, true).hex_digits(), 4);
        assert_eq!(CrcParams::new(21, 0x102899, 0, 0, false, false).hex_digits(), 6);
        assert_eq!(CrcParams::new(32, 0x04c11db7, 0, 0, true, true).hex_digits(), 8);
    }
}
