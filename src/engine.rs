//! Bit-serial CRC computation engine.
//!
//! One `CrcEngine` instance holds the running register for one computation.
//! The engine is deliberately table-free: it performs the textbook shift-xor
//! loop one bit at a time, which is what lets a single implementation cover
//! every width from 3 to 32 bits, including the non-byte-aligned ones
//! (CRC-5, CRC-17, CRC-21, ...). Throughput is O(8·N) bit steps for N input
//! bytes, which is fine for the configuration blocks and packet headers this
//! library is aimed at.
//!
//! Widths below 8 are computed as degenerate 8-bit CRCs: polynomial and
//! init are shifted up to the byte boundary at construction and the result
//! is shifted back down in [`CrcEngine::finalize`]. Reflected algorithms
//! instead get polynomial and init bit-reversed so the register can shift
//! right, consuming each input byte least-significant-bit first.

use crate::params::{reverse_bits, width_mask, CrcParams};

/// Streaming CRC calculator for one parameter set.
///
/// Holds mutable running state and is not meant to be shared: each
/// concurrent computation constructs its own engine (see
/// [`crate::initialize`] or [`crate::CrcRegistry::engine`]).
///
/// # Example
///
/// ```rust
/// use crc_registry::{CrcEngine, CrcParams};
///
/// // CRC-16/ARC
/// let mut engine = CrcEngine::new(CrcParams::new(16, 0x8005, 0x0000, 0x0000, true, true));
/// engine.update("123456789");
/// assert_eq!(engine.finalize(), "0xbb3d");
/// ```
#[derive(Debug, Clone)]
pub struct CrcEngine {
    params: CrcParams,
    /// Working polynomial: reflected or byte-aligned per `params`.
    poly: u64,
    /// Working initial value, adjusted the same way as `poly`.
    init: u64,
    /// Probe mask for the bit leaving the register on each shift.
    check: u64,
    /// Limits the register to `width` bits (8 bits for sub-byte widths).
    mask: u64,
    /// Running register.
    crc: u64,
}

impl CrcEngine {
    /// Create an engine for the given parameters.
    pub fn new(params: CrcParams) -> Self {
        let (poly, init) = if params.refin {
            // Reflected algorithms shift right, so mirror the bit order of
            // the polynomial and the initial value.
            (
                reverse_bits(params.poly, params.width),
                reverse_bits(params.init, params.width),
            )
        } else if params.width < 8 {
            // Sub-byte algorithms run at the byte boundary and shift back
            // down in finalize().
            (
                params.poly << (8 - params.width),
                params.init << (8 - params.width),
            )
        } else {
            (params.poly, params.init)
        };

        let check = if params.refin {
            1
        } else if params.width <= 8 {
            0x80
        } else {
            1 << (params.width - 1)
        };

        let mask = if params.width <= 8 {
            0xff
        } else {
            width_mask(params.width)
        };

        Self {
            params,
            poly,
            init,
            check,
            mask,
            crc: init,
        }
    }

    /// The parameters this engine was built from.
    pub fn params(&self) -> &CrcParams {
        &self.params
    }

    /// Feed bytes into the running computation.
    ///
    /// Accepts anything byte-viewable, so both `&[u8]` and `&str` work
    /// (strings contribute their UTF-8 bytes). May be called any number of
    /// times; splitting the input across calls does not change the result.
    pub fn update(&mut self, data: impl AsRef<[u8]>) {
        for &byte in data.as_ref() {
            let b = byte as u64;
            if self.params.width <= 8 {
                self.crc ^= b;
            } else if self.params.refin {
                self.crc ^= b & self.mask;
            } else {
                self.crc ^= (b << (self.params.width - 8)) & self.mask;
            }
            for _ in 0..8 {
                let shifted = if self.params.refin {
                    self.crc >> 1
                } else {
                    self.crc << 1
                };
                self.crc = if self.crc & self.check != 0 {
                    shifted ^ self.poly
                } else {
                    shifted
                };
            }
            self.crc &= self.mask;
        }
    }

    /// Finish the computation and return the formatted checksum.
    ///
    /// The result is `"0x"` followed by lowercase hex, zero-padded to
    /// `ceil(width / 4)` digits. As a side effect the register is reset,
    /// so the engine is immediately ready for an independent computation.
    pub fn finalize(&mut self) -> String {
        let params = self.params;
        let mut crc = self.crc;

        if params.width < 8 && !params.refin {
            // Undo the byte-boundary alignment applied at construction.
            crc >>= 8 - params.width;
        }

        let out = if params.refin != params.refout && params.refout {
            // Asymmetric reflection, used only by CRC-12/UMTS in the
            // standard catalogue: the register is reversed over its own
            // significant bit length rather than the nominal width.
            crc &= self.mask;
            reverse_bits(crc, u64::BITS - crc.leading_zeros()) ^ params.xorout
        } else {
            (crc ^ params.xorout) & self.mask
        };

        self.reset();
        format!("0x{:0digits$x}", out, digits = params.hex_digits())
    }

    /// Discard any accumulated input and restore the initial register value.
    pub fn reset(&mut self) {
        self.crc = self.init;
    }
}
