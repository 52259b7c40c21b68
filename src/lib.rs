//! Game Boy cartridge loading.
//!
//! Reads a ROM image, decodes the header at 0x100-0x14F, checks the header
//! checksum and names the publisher and cartridge hardware.
//!
//! - **cartridge**: the loaded, immutable cartridge
//! - **cartridge_type**: type byte to mapper family and extra hardware
//! - **checksum**: header checksum over 0x134-0x14C
//! - **header**: fixed-offset header decoding
//! - **licensee**: old and new publisher code tables
//! - **loader**: reading an image from disk

#![forbid(unsafe_code)]

pub mod cartridge;
pub mod cartridge_type;
pub mod checksum;
pub mod error;
pub mod header;
pub mod licensee;
pub mod loader;

pub use cartridge::Cartridge;
pub use error::{Error, Result};
pub use loader::load_file;
