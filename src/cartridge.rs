//! Representing data on the cartridge.
//!
//! This module contains the Cartridge which owns the raw image of a Game
//! Boy cartridge together with its decoded header. Everything a later
//! component needs to pick a mapper, such as the cartridge type and
//! publisher, is resolved once here and never changes afterwards.

use std::fmt;

use log::{info, warn};

use crate::cartridge_type::{self, CartridgeType};
use crate::checksum::{self, ChecksumReport};
use crate::error::{Error, Result};
use crate::header::{Header, HEADER_END, HEADER_START};
use crate::licensee;

#[derive(Debug)]
pub struct Cartridge {
    data: Vec<u8>,
    header: Header,
    licensee: &'static str,
    cartridge_type: String,
    checksum: ChecksumReport,
}

impl Cartridge {
    /// Builds a cartridge from a complete image.
    ///
    /// Fails only when the image is too short to hold a header. A bad header
    /// checksum is logged and left for the caller to act on.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        if data.len() < HEADER_END {
            return Err(Error::Format {
                len: data.len(),
                expected: HEADER_END,
            });
        }

        let header = Header::decode(&data[HEADER_START..HEADER_END])?;
        let checksum = checksum::validate(&data, &header);
        let licensee = licensee::resolve(header.license_code_old, header.license_code_new);
        let cartridge_type = cartridge_type::resolve(header.cartridge_type);

        info!("Title: {}", header.title);
        info!("Cartridge Type: {}", cartridge_type);
        info!("ROM Size: {}", header.rom_size_code);
        info!("RAM Size: {}", header.ram_size_code);
        info!("License: {} ({})", licensee, header.licensee_code());
        info!("Version: {}", header.version);
        if checksum.passed() {
            info!("Checksum: PASSED");
        } else {
            warn!(
                "Checksum: FAILED (computed 0x{:02X}, header says 0x{:02X})",
                checksum.computed, checksum.stored
            );
        }

        Ok(Cartridge {
            data,
            header,
            licensee,
            cartridge_type,
            checksum,
        })
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn licensee(&self) -> &'static str {
        self.licensee
    }

    /// Descriptor string for the cartridge type byte.
    pub fn cartridge_type(&self) -> &str {
        &self.cartridge_type
    }

    /// Mapper family and extra hardware, if the type byte is assigned.
    pub fn kind(&self) -> Option<&'static CartridgeType> {
        cartridge_type::lookup(self.header.cartridge_type)
    }

    pub fn checksum(&self) -> ChecksumReport {
        self.checksum
    }
}

impl fmt::Display for Cartridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Title:          {}", self.header.title)?;
        writeln!(f, "Cartridge Type: {}", self.cartridge_type)?;
        writeln!(f, "ROM Size:       0x{:02X}", self.header.rom_size_code)?;
        writeln!(f, "RAM Size:       0x{:02X}", self.header.ram_size_code)?;
        writeln!(f, "License:        {}", self.licensee)?;
        writeln!(f, "Version:        {}", self.header.version)?;
        write!(
            f,
            "Checksum:       {}",
            if self.checksum.passed() { "PASSED" } else { "FAILED" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge_type::Mapper;

    fn with_checksum(mut image: Vec<u8>) -> Vec<u8> {
        image[0x14D] = checksum::header_checksum(&image);
        image
    }

    fn test_image() -> Vec<u8> {
        let mut image = vec![0u8; HEADER_END];
        image[0x134..0x13B].copy_from_slice(b"TESTROM");
        image[0x147] = 0x13;
        image[0x14B] = 0x01;
        with_checksum(image)
    }

    #[test]
    fn builds_from_minimal_image() {
        let cart = Cartridge::from_bytes(test_image()).unwrap();

        assert_eq!(cart.size(), 0x150);
        assert_eq!(cart.data().len(), cart.size());
        assert_eq!(cart.header().title, "TESTROM");
        assert_eq!(cart.cartridge_type(), "MBC3+RAM+BATTERY 2");
        assert_eq!(cart.licensee(), "Nintendo");
        assert!(cart.checksum().passed());

        let kind = cart.kind().unwrap();
        assert_eq!(kind.mapper, Mapper::Mbc3);
        assert!(kind.ram && kind.battery && !kind.timer);
    }

    #[test]
    fn keeps_the_whole_image() {
        let mut image = test_image();
        image.extend((0..0x4000u32).map(|i| i as u8));
        let cart = Cartridge::from_bytes(image.clone()).unwrap();

        assert_eq!(cart.size(), 0x150 + 0x4000);
        assert_eq!(cart.data(), &image[..]);
    }

    #[test]
    fn bad_checksum_still_loads() {
        let mut image = test_image();
        image[0x14D] = image[0x14D].wrapping_add(1);
        let cart = Cartridge::from_bytes(image).unwrap();

        assert!(!cart.checksum().passed());
        assert_eq!(cart.header().title, "TESTROM");
    }

    #[test]
    fn unknown_codes_resolve_to_sentinels() {
        let mut image = test_image();
        image[0x147] = 0x23;
        image[0x14B] = 0x02;
        let cart = Cartridge::from_bytes(with_checksum(image)).unwrap();

        assert_eq!(cart.licensee(), "Unknown");
        assert!(cart.cartridge_type().contains("unknown"));
        assert!(cart.kind().is_none());
    }

    #[test]
    fn new_licensee_code() {
        let mut image = test_image();
        image[0x144..0x146].copy_from_slice(b"01");
        image[0x14B] = 0x33;
        let cart = Cartridge::from_bytes(with_checksum(image)).unwrap();

        assert_eq!(cart.licensee(), "Nintendo R&D1");
    }

    #[test]
    fn image_without_full_header_is_rejected() {
        let image = vec![0u8; HEADER_END - 1];
        match Cartridge::from_bytes(image) {
            Err(Error::Format { len, expected }) => {
                assert_eq!(len, 0x14F);
                assert_eq!(expected, 0x150);
            }
            other => panic!("expected format error, got {:?}", other),
        }
    }

    #[test]
    fn summary() {
        let cart = Cartridge::from_bytes(test_image()).unwrap();
        let text = cart.to_string();

        assert!(text.contains("TESTROM"));
        assert!(text.contains("MBC3+RAM+BATTERY 2"));
        assert!(text.contains("Nintendo"));
        assert!(text.ends_with("PASSED"));
    }
}
