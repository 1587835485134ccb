//! # Parameterizable CRC Library
//!
//! This library is a generic Cyclic Redundancy Check (CRC) computation
//! engine covering every standard width from 3 to 32 bits. It ships the
//! full Rocksoft/RevEng catalogue of 104 published algorithms (CCITT,
//! Modbus, USB, Bluetooth, AUTOSAR, ...) and lets callers register custom
//! parameter sets alongside them.
//!
//! ## Overview
//!
//! Three pieces cooperate:
//! - the [`catalog`]: 104 named parameter sets as plain `const` data
//! - the [`CrcRegistry`]: maps names to parameters, pre-seeded with the
//!   catalogue, open for custom registrations
//! - the [`CrcEngine`]: the bit-serial shift-xor computation itself, one
//!   instance per in-flight checksum
//!
//! The crate root re-exports one-call convenience functions over a shared,
//! lazily seeded default registry.
//!
//! ## Example
//!
//! ```rust
//! use crc_registry::{calculate, initialize, register_algorithm, CrcParams, CrcResult};
//!
//! # fn main() -> CrcResult<()> {
//! // One-shot over the default registry
//! assert_eq!(calculate("CRC-32/ISO-HDLC", "123456789")?, "0xcbf43926");
//! assert_eq!(calculate("CRC-16/MODBUS", b"123456789".as_slice())?, "0x4b37");
//!
//! // Streaming with an explicit engine
//! let mut engine = initialize("CRC-8/SMBUS")?;
//! engine.update("1234");
//! engine.update("56789");
//! assert_eq!(engine.finalize(), "0xf4");
//!
//! // Custom algorithm with the five canonical parameters
//! register_algorithm(
//!     "CRC-16/EXAMPLE",
//!     CrcParams::new(16, 0x1021, 0x0000, 0x0000, false, false),
//! )?;
//! assert_eq!(calculate("CRC-16/EXAMPLE", "123456789")?, "0x31c3");
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

pub mod catalog;
mod engine;
mod params;
mod registry;

pub use engine::CrcEngine;
pub use params::{CrcParams, MAX_WIDTH};
pub use registry::{default_registry, CrcRegistry};

/// Result type for CRC operations
pub type CrcResult<T> = Result<T, CrcError>;

/// CRC Error types
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CrcError {
    /// Requested CRC width is above the supported maximum of 32 bits
    #[error("CRC width {0} exceeds the supported maximum of 32 bits")]
    InvalidWidth(u32),

    /// An algorithm with this name is already registered
    #[error("algorithm \"{0}\" is already registered")]
    DuplicateName(String),

    /// No algorithm with this name is registered
    #[error("unknown algorithm \"{0}\"")]
    UnknownAlgorithm(String),
}

/// Whether `name` is known to the default registry.
pub fn exists_algorithm(name: &str) -> bool {
    default_registry().contains(name)
}

/// Sorted snapshot of every algorithm name in the default registry.
pub fn registered_algorithms() -> Vec<String> {
    default_registry().names()
}

/// Register a custom algorithm in the default registry.
///
/// # Errors
/// Returns [`CrcError::InvalidWidth`] for widths above 32 and
/// [`CrcError::DuplicateName`] if the name is taken (the standard
/// catalogue occupies its names up front).
pub fn register_algorithm(name: &str, params: CrcParams) -> CrcResult<()> {
    default_registry().register(name, params)
}

/// Construct a fresh [`CrcEngine`] for a named algorithm from the default
/// registry.
///
/// # Errors
/// Returns [`CrcError::UnknownAlgorithm`] if the name is absent.
pub fn initialize(name: &str) -> CrcResult<CrcEngine> {
    default_registry().engine(name)
}

/// Compute the named CRC of `data` in one call.
///
/// Looks the algorithm up in the default registry, streams `data` through a
/// fresh engine and returns the formatted checksum: `"0x"` plus lowercase
/// hex, zero-padded to `ceil(width / 4)` digits.
///
/// # Errors
/// Returns [`CrcError::UnknownAlgorithm`] if the name is absent.
pub fn calculate(name: &str, data: impl AsRef<[u8]>) -> CrcResult<String> {
    default_registry().checksum(name, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_known_algorithms() {
        assert_eq!(calculate("CRC-32/ISO-HDLC", "123456789").unwrap(), "0xcbf43926");
        assert_eq!(calculate("CRC-16/ARC", "123456789").unwrap(), "0xbb3d");
        assert_eq!(calculate("CRC-8/SMBUS", "123456789").unwrap(), "0xf4");
    }

    #[test]
    fn test_calculate_unknown_algorithm() {
        assert_eq!(
            calculate("CRC-99/NOPE", "123456789"),
            Err(CrcError::UnknownAlgorithm("CRC-99/NOPE".into()))
        );
    }

    #[test]
    fn test_exists_and_enumeration_agree() {
        let names = registered_algorithms();
        assert!(names.len() >= catalog::STANDARD_CATALOG.len());
        for name in &names {
            assert!(exists_algorithm(name));
        }
        assert!(!exists_algorithm("CRC-99/NOPE"));
    }

    #[test]
    fn test_register_and_calculate_custom() {
        // parameters of CRC-16/KERMIT under a private name
        register_algorithm(
            "CRC-16/LIB-TEST-CUSTOM",
            CrcParams::new(16, 0x1021, 0x0000, 0x0000, true, true),
        )
        .unwrap();
        assert!(exists_algorithm("CRC-16/LIB-TEST-CUSTOM"));
        assert_eq!(calculate("CRC-16/LIB-TEST-CUSTOM", "123456789").unwrap(), "0x2189");
    }

    #[test]
    fn test_initialize_returns_independent_engines() {
        let mut a = initialize("CRC-16/XMODEM").unwrap();
        let mut b = initialize("CRC-16/XMODEM").unwrap();
        a.update("12345");
        b.update("123456789");
        a.update("6789");
        assert_eq!(a.finalize(), "0x31c3");
        assert_eq!(b.finalize(), "0x31c3");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            CrcError::UnknownAlgorithm("CRC-1/X".into()).to_string(),
            "unknown algorithm \"CRC-1/X\""
        );
        assert_eq!(
            CrcError::InvalidWidth(40).to_string(),
            "CRC width 40 exceeds the supported maximum of 32 bits"
        );
        assert_eq!(
            CrcError::DuplicateName("CRC-16/ARC".into()).to_string(),
            "algorithm \"CRC-16/ARC\" is already registered"
        );
    }
}
