//! The standard CRC algorithm catalogue.
//!
//! 104 named parameter sets, CRC-3/GSM through CRC-32/XFER, taken from the
//! Rocksoft / RevEng catalogue of published CRC algorithms. The table is
//! plain `const` data so there is no registration order to get wrong and
//! individual entries can be tested in isolation.
//!
//! Each entry also records the published check value (the CRC of the ASCII
//! string `"123456789"`), the same way the `crc` crate's `Algorithm` struct
//! does. The conformance tests below assert every entry against it.

use crate::params::CrcParams;

/// One named algorithm in the standard catalogue.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    /// Catalogue name, e.g. `"CRC-16/MODBUS"`.
    pub name: &'static str,
    /// The five canonical parameters.
    pub params: CrcParams,
    /// Published CRC of the ASCII string `"123456789"`.
    pub check: u64,
}

macro_rules! entry {
    ($name:literal, $width:literal, $poly:literal, $init:literal,
     $xorout:literal, $refin:literal, $refout:literal, $check:literal) => {
        CatalogEntry {
            name: $name,
            params: CrcParams::new($width, $poly, $init, $xorout, $refin, $refout),
            check: $check,
        }
    };
}

/// Every published algorithm this library ships with, sorted by width.
pub const STANDARD_CATALOG: &[CatalogEntry] = &[
    entry!("CRC-3/GSM", 3, 0x3, 0x0, 0x7, false, false, 0x4),
    entry!("CRC-3/ROHC", 3, 0x3, 0x7, 0x0, true, true, 0x6),
    entry!("CRC-4/G-704", 4, 0x3, 0x0, 0x0, true, true, 0x7),
    entry!("CRC-4/INTERLAKEN", 4, 0x3, 0xf, 0xf, false, false, 0xb),
    entry!("CRC-5/EPC-C1G2", 5, 0x09, 0x09, 0x00, false, false, 0x00),
    entry!("CRC-5/G-704", 5, 0x15, 0x00, 0x00, true, true, 0x07),
    entry!("CRC-5/USB", 5, 0x05, 0x1f, 0x1f, true, true, 0x19),
    entry!("CRC-6/CDMA2000-A", 6, 0x27, 0x3f, 0x00, false, false, 0x0d),
    entry!("CRC-6/CDMA2000-B", 6, 0x07, 0x3f, 0x00, false, false, 0x3b),
    entry!("CRC-6/DARC", 6, 0x19, 0x00, 0x00, true, true, 0x26),
    entry!("CRC-6/G-704", 6, 0x03, 0x00, 0x00, true, true, 0x06),
    entry!("CRC-6/GSM", 6, 0x2f, 0x00, 0x3f, false, false, 0x13),
    entry!("CRC-7/MMC", 7, 0x09, 0x00, 0x00, false, false, 0x75),
    entry!("CRC-7/ROHC", 7, 0x4f, 0x7f, 0x00, true, true, 0x53),
    entry!("CRC-7/UMTS", 7, 0x45, 0x00, 0x00, false, false, 0x61),
    entry!("CRC-8/AUTOSAR", 8, 0x2f, 0xff, 0xff, false, false, 0xdf),
    entry!("CRC-8/BLUETOOTH", 8, 0xa7, 0x00, 0x00, true, true, 0x26),
    entry!("CRC-8/CDMA2000", 8, 0x9b, 0xff, 0x00, false, false, 0xda),
    entry!("CRC-8/DARC", 8, 0x39, 0x00, 0x00, true, true, 0x15),
    entry!("CRC-8/DVB-S2", 8, 0xd5, 0x00, 0x00, false, false, 0xbc),
    entry!("CRC-8/GSM-A", 8, 0x1d, 0x00, 0x00, false, false, 0x37),
    entry!("CRC-8/GSM-B", 8, 0x49, 0x00, 0xff, false, false, 0x94),
    entry!("CRC-8/HITAG", 8, 0x1d, 0xff, 0x00, false, false, 0xb4),
    entry!("CRC-8/I-432-1", 8, 0x07, 0x00, 0x55, false, false, 0xa1),
    entry!("CRC-8/I-CODE", 8, 0x1d, 0xfd, 0x00, false, false, 0x7e),
    entry!("CRC-8/LTE", 8, 0x9b, 0x00, 0x00, false, false, 0xea),
    entry!("CRC-8/MAXIM-DOW", 8, 0x31, 0x00, 0x00, true, true, 0xa1),
    entry!("CRC-8/MIFARE-MAD", 8, 0x1d, 0xc7, 0x00, false, false, 0x99),
    entry!("CRC-8/NRSC-5", 8, 0x31, 0xff, 0x00, false, false, 0xf7),
    entry!("CRC-8/OPENSAFETY", 8, 0x2f, 0x00, 0x00, false, false, 0x3e),
    entry!("CRC-8/ROHC", 8, 0x07, 0xff, 0x00, true, true, 0xd0),
    entry!("CRC-8/SAE-J1850", 8, 0x1d, 0xff, 0xff, false, false, 0x4b),
    entry!("CRC-8/SMBUS", 8, 0x07, 0x00, 0x00, false, false, 0xf4),
    entry!("CRC-8/TECH-3250", 8, 0x1d, 0xff, 0x00, true, true, 0x97),
    entry!("CRC-8/WCDMA", 8, 0x9b, 0x00, 0x00, true, true, 0x25),
    entry!("CRC-10/ATM", 10, 0x233, 0x000, 0x000, false, false, 0x199),
    entry!("CRC-10/CDMA2000", 10, 0x3d9, 0x3ff, 0x000, false, false, 0x233),
    entry!("CRC-10/GSM", 10, 0x175, 0x000, 0x3ff, false, false, 0x12a),
    entry!("CRC-11/FLEXRAY", 11, 0x385, 0x01a, 0x000, false, false, 0x5a3),
    entry!("CRC-11/UMTS", 11, 0x307, 0x000, 0x000, false, false, 0x061),
    entry!("CRC-12/CDMA2000", 12, 0xf13, 0xfff, 0x000, false, false, 0xd4d),
    entry!("CRC-12/DECT", 12, 0x80f, 0x000, 0x000, false, false, 0xf5b),
    entry!("CRC-12/GSM", 12, 0xd31, 0x000, 0xfff, false, false, 0xb34),
    entry!("CRC-12/UMTS", 12, 0x80f, 0x000, 0x000, false, true, 0xdaf),
    entry!("CRC-13/BBC", 13, 0x1cf5, 0x0000, 0x0000, false, false, 0x04fa),
    entry!("CRC-14/DARC", 14, 0x0805, 0x0000, 0x0000, true, true, 0x082d),
    entry!("CRC-14/GSM", 14, 0x202d, 0x0000, 0x3fff, false, false, 0x30ae),
    entry!("CRC-15/CAN", 15, 0x4599, 0x0000, 0x0000, false, false, 0x059e),
    entry!("CRC-15/MPT1327", 15, 0x6815, 0x0000, 0x0001, false, false, 0x2566),
    entry!("CRC-16/ARC", 16, 0x8005, 0x0000, 0x0000, true, true, 0xbb3d),
    entry!("CRC-16/CDMA2000", 16, 0xc867, 0xffff, 0x0000, false, false, 0x4c06),
    entry!("CRC-16/CMS", 16, 0x8005, 0xffff, 0x0000, false, false, 0xaee7),
    entry!("CRC-16/DDS-110", 16, 0x8005, 0x800d, 0x0000, false, false, 0x9ecf),
    entry!("CRC-16/DECT-R", 16, 0x0589, 0x0000, 0x0001, false, false, 0x007e),
    entry!("CRC-16/DECT-X", 16, 0x0589, 0x0000, 0x0000, false, false, 0x007f),
    entry!("CRC-16/DNP", 16, 0x3d65, 0x0000, 0xffff, true, true, 0xea82),
    entry!("CRC-16/EN-13757", 16, 0x3d65, 0x0000, 0xffff, false, false, 0xc2b7),
    entry!("CRC-16/GENIBUS", 16, 0x1021, 0xffff, 0xffff, false, false, 0xd64e),
    entry!("CRC-16/GSM", 16, 0x1021, 0x0000, 0xffff, false, false, 0xce3c),
    entry!("CRC-16/IBM-3740", 16, 0x1021, 0xffff, 0x0000, false, false, 0x29b1),
    entry!("CRC-16/IBM-SDLC", 16, 0x1021, 0xffff, 0xffff, true, true, 0x906e),
    entry!("CRC-16/ISO-IEC-14443-3-A", 16, 0x1021, 0xc6c6, 0x0000, true, true, 0xbf05),
    entry!("CRC-16/KERMIT", 16, 0x1021, 0x0000, 0x0000, true, true, 0x2189),
    entry!("CRC-16/LJ1200", 16, 0x6f63, 0x0000, 0x0000, false, false, 0xbdf4),
    entry!("CRC-16/M17", 16, 0x5935, 0xffff, 0x0000, false, false, 0x772b),
    entry!("CRC-16/MAXIM-DOW", 16, 0x8005, 0x0000, 0xffff, true, true, 0x44c2),
    entry!("CRC-16/MCRF4XX", 16, 0x1021, 0xffff, 0x0000, true, true, 0x6f91),
    entry!("CRC-16/MODBUS", 16, 0x8005, 0xffff, 0x0000, true, true, 0x4b37),
    entry!("CRC-16/NRSC-5", 16, 0x080b, 0xffff, 0x0000, true, true, 0xa066),
    entry!("CRC-16/OPENSAFETY-A", 16, 0x5935, 0x0000, 0x0000, false, false, 0x5d38),
    entry!("CRC-16/OPENSAFETY-B", 16, 0x755b, 0x0000, 0x0000, false, false, 0x20fe),
    entry!("CRC-16/PROFIBUS", 16, 0x1dcf, 0xffff, 0xffff, false, false, 0xa819),
    entry!("CRC-16/RIELLO", 16, 0x1021, 0xb2aa, 0x0000, true, true, 0x63d0),
    entry!("CRC-16/SPI-FUJITSU", 16, 0x1021, 0x1d0f, 0x0000, false, false, 0xe5cc),
    entry!("CRC-16/T10-DIF", 16, 0x8bb7, 0x0000, 0x0000, false, false, 0xd0db),
    entry!("CRC-16/TELEDISK", 16, 0xa097, 0x0000, 0x0000, false, false, 0x0fb3),
    entry!("CRC-16/TMS37157", 16, 0x1021, 0x89ec, 0x0000, true, true, 0x26b1),
    entry!("CRC-16/UMTS", 16, 0x8005, 0x0000, 0x0000, false, false, 0xfee8),
    entry!("CRC-16/USB", 16, 0x8005, 0xffff, 0xffff, true, true, 0xb4c8),
    entry!("CRC-16/XMODEM", 16, 0x1021, 0x0000, 0x0000, false, false, 0x31c3),
    entry!("CRC-17/CAN-FD", 17, 0x1685b, 0x00000, 0x00000, false, false, 0x04f03),
    entry!("CRC-21/CAN-FD", 21, 0x102899, 0x000000, 0x000000, false, false, 0x0ed841),
    entry!("CRC-24/BLE", 24, 0x00065b, 0x555555, 0x000000, true, true, 0xc25a56),
    entry!("CRC-24/FLEXRAY-A", 24, 0x5d6dcb, 0xfedcba, 0x000000, false, false, 0x7979bd),
    entry!("CRC-24/FLEXRAY-B", 24, 0x5d6dcb, 0xabcdef, 0x000000, false, false, 0x1f23b8),
    entry!("CRC-24/INTERLAKEN", 24, 0x328b63, 0xffffff, 0xffffff, false, false, 0xb4f3e6),
    entry!("CRC-24/LTE-A", 24, 0x864cfb, 0x000000, 0x000000, false, false, 0xcde703),
    entry!("CRC-24/LTE-B", 24, 0x800063, 0x000000, 0x000000, false, false, 0x23ef52),
    entry!("CRC-24/OPENPGP", 24, 0x864cfb, 0xb704ce, 0x000000, false, false, 0x21cf02),
    entry!("CRC-24/OS-9", 24, 0x800063, 0xffffff, 0xffffff, false, false, 0x200fa5),
    entry!("CRC-30/CDMA", 30, 0x2030b9c7, 0x3fffffff, 0x3fffffff, false, false, 0x04c34abf),
    entry!("CRC-31/PHILIPS", 31, 0x04c11db7, 0x7fffffff, 0x7fffffff, false, false, 0x0ce9e46c),
    entry!("CRC-32/AIXM", 32, 0x814141ab, 0x00000000, 0x00000000, false, false, 0x3010bf7f),
    entry!("CRC-32/AUTOSAR", 32, 0xf4acfb13, 0xffffffff, 0xffffffff, true, true, 0x1697d06a),
    entry!("CRC-32/BASE91-D", 32, 0xa833982b, 0xffffffff, 0xffffffff, true, true, 0x87315576),
    entry!("CRC-32/BZIP2", 32, 0x04c11db7, 0xffffffff, 0xffffffff, false, false, 0xfc891918),
    entry!("CRC-32/CD-ROM-EDC", 32, 0x8001801b, 0x00000000, 0x00000000, true, true, 0x6ec2edc4),
    entry!("CRC-32/CKSUM", 32, 0x04c11db7, 0x00000000, 0xffffffff, false, false, 0x765e7680),
    entry!("CRC-32/ISCSI", 32, 0x1edc6f41, 0xffffffff, 0xffffffff, true, true, 0xe3069283),
    entry!("CRC-32/ISO-HDLC", 32, 0x04c11db7, 0xffffffff, 0xffffffff, true, true, 0xcbf43926),
    entry!("CRC-32/JAMCRC", 32, 0x04c11db7, 0xffffffff, 0x00000000, true, true, 0x340bc6d9),
    entry!("CRC-32/MEF", 32, 0x741b8cd7, 0xffffffff, 0x00000000, true, true, 0xd2c22f51),
    entry!("CRC-32/MPEG-2", 32, 0x04c11db7, 0xffffffff, 0x00000000, false, false, 0x0376e6e7),
    entry!("CRC-32/XFER", 32, 0x000000af, 0x00000000, 0x00000000, false, false, 0xbd0be338),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CrcEngine;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_names_are_unique() {
        let mut seen = HashSet::new();
        for entry in STANDARD_CATALOG {
            assert!(seen.insert(entry.name), "duplicate entry {}", entry.name);
        }
    }

    #[test]
    fn test_catalog_widths_in_range() {
        for entry in STANDARD_CATALOG {
            assert!(
                (3..=32).contains(&entry.params.width),
                "{} has width {}",
                entry.name,
                entry.params.width
            );
        }
    }

    #[test]
    fn test_every_entry_matches_its_check_value() {
        for entry in STANDARD_CATALOG {
            let mut engine = CrcEngine::new(entry.params);
            engine.update("123456789");
            let expected = format!("0x{:0digits$x}", entry.check, digits = entry.params.hex_digits());
            assert_eq!(engine.finalize(), expected, "check value mismatch for {}", entry.name);
        }
    }

    #[test]
    fn test_only_umts_is_asymmetric() {
        let asymmetric: Vec<_> = STANDARD_CATALOG
            .iter()
            .filter(|e| e.params.refin != e.params.refout)
            .map(|e| e.name)
            .collect();
        assert_eq!(asymmetric, ["CRC-12/UMTS"]);
    }
}
