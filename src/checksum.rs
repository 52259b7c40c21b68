//! Header checksum.
//!
//! The boot ROM sums the 25 bytes from 0x134 to 0x14C as
//! `x = x - byte - 1` (wrapping) and compares the low byte against 0x14D.
//! A mismatch does not stop a load here; it is only reported.

use std::ops::Range;

use crate::header::Header;

pub const CHECKSUM_RANGE: Range<usize> = 0x134..0x14D;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChecksumReport {
    pub computed: u8,
    pub stored: u8,
}

impl ChecksumReport {
    pub fn passed(&self) -> bool {
        self.computed == self.stored
    }
}

/// Computes the header checksum of a full image. Bytes missing from a short
/// image are simply not summed.
pub fn header_checksum(image: &[u8]) -> u8 {
    image
        .iter()
        .take(CHECKSUM_RANGE.end)
        .skip(CHECKSUM_RANGE.start)
        .fold(0u8, |acc, &b| acc.wrapping_sub(b).wrapping_sub(1))
}

pub fn validate(image: &[u8], header: &Header) -> ChecksumReport {
    ChecksumReport {
        computed: header_checksum(image),
        stored: header.header_checksum,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::{HEADER_END, HEADER_START};

    // Image whose header checksum byte matches the summed range.
    fn image() -> Vec<u8> {
        let mut image = vec![0u8; HEADER_END];
        for (i, addr) in CHECKSUM_RANGE.enumerate() {
            image[addr] = (i as u8).wrapping_mul(37).wrapping_add(11);
        }
        let sum = CHECKSUM_RANGE.fold(0u32, |acc, addr| acc + image[addr] as u32);
        image[0x14D] = 0u32.wrapping_sub(sum).wrapping_sub(25) as u8;
        image
    }

    fn header_of(image: &[u8]) -> Header {
        Header::decode(&image[HEADER_START..HEADER_END]).unwrap()
    }

    #[test]
    fn all_zero_range() {
        // 25 decrements from zero.
        assert_eq!(header_checksum(&[0u8; HEADER_END]), 0xE7);
    }

    #[test]
    fn matching_checksum_passes() {
        let image = image();
        let report = validate(&image, &header_of(&image));
        assert!(report.passed(), "{:?}", report);
    }

    #[test]
    fn flipping_any_covered_byte_fails() {
        let original = image();
        for addr in CHECKSUM_RANGE {
            let mut image = original.clone();
            image[addr] ^= 0x5A;
            let report = validate(&image, &header_of(&image));
            assert!(!report.passed(), "flip at {:#05X} still passed", addr);
        }
    }

    #[test]
    fn bytes_outside_the_range_are_ignored() {
        let mut image = image();
        image[0x133] ^= 0xFF;
        image[0x14E] ^= 0xFF;
        image[0x14F] ^= 0xFF;
        assert!(validate(&image, &header_of(&image)).passed());
    }

    #[test]
    fn mismatch_reports_both_values() {
        let mut image = image();
        image[0x14D] = image[0x14D].wrapping_add(1);
        let report = validate(&image, &header_of(&image));
        assert_eq!(report.stored, report.computed.wrapping_add(1));
        assert!(!report.passed());
    }
}
