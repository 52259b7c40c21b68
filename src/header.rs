//! Decoding the cartridge header.
//!
//! Every Game Boy image carries a 0x50 byte header at 0x100-0x14F. Fields
//! are read one at a time from a cursor over that region, so the result does
//! not depend on host byte order or struct layout.
//!
//! Layout (offsets relative to the image):
//!   0x100-0x103  entry point
//!   0x104-0x133  Nintendo logo
//!   0x134-0x143  title
//!   0x144-0x145  new licensee code
//!   0x146        SGB flag
//!   0x147        cartridge type
//!   0x148        ROM size code
//!   0x149        RAM size code
//!   0x14A        destination code
//!   0x14B        old licensee code
//!   0x14C        mask ROM version
//!   0x14D        header checksum
//!   0x14E-0x14F  global checksum (big endian)

use crate::error::{Error, Result};
use crate::licensee::LicenseeCode;

pub const HEADER_START: usize = 0x100;
pub const HEADER_LEN: usize = 0x50;
pub const HEADER_END: usize = HEADER_START + HEADER_LEN;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    pub entry_point: [u8; 4],
    pub nintendo_logo: [u8; 48],
    pub title: String,
    pub license_code_new: [u8; 2],
    pub sgb_flag: u8,
    pub cartridge_type: u8,
    pub rom_size_code: u8,
    pub ram_size_code: u8,
    pub destination_code: u8,
    pub license_code_old: u8,
    pub version: u8,
    pub header_checksum: u8,
    pub global_checksum: u16,
}

/// Forward-only reader over a slice that is already known to be long enough.
struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Cursor { bytes, pos: 0 }
    }

    fn take<const N: usize>(&mut self) -> [u8; N] {
        let mut out = [0; N];
        out.copy_from_slice(&self.bytes[self.pos..self.pos + N]);
        self.pos += N;
        out
    }

    fn byte(&mut self) -> u8 {
        let [b] = self.take::<1>();
        b
    }

    fn u16_be(&mut self) -> u16 {
        u16::from_be_bytes(self.take::<2>())
    }
}

impl Header {
    /// Decodes a header from `bytes`, which must start at image offset 0x100
    /// and hold at least `HEADER_LEN` bytes.
    pub fn decode(bytes: &[u8]) -> Result<Header> {
        if bytes.len() < HEADER_LEN {
            return Err(Error::Format {
                len: bytes.len(),
                expected: HEADER_LEN,
            });
        }

        let mut cursor = Cursor::new(&bytes[..HEADER_LEN]);

        Ok(Header {
            entry_point: cursor.take(),
            nintendo_logo: cursor.take(),
            title: decode_title(&cursor.take::<16>()),
            license_code_new: cursor.take(),
            sgb_flag: cursor.byte(),
            cartridge_type: cursor.byte(),
            rom_size_code: cursor.byte(),
            ram_size_code: cursor.byte(),
            destination_code: cursor.byte(),
            license_code_old: cursor.byte(),
            version: cursor.byte(),
            header_checksum: cursor.byte(),
            global_checksum: cursor.u16_be(),
        })
    }

    pub fn licensee_code(&self) -> LicenseeCode {
        LicenseeCode::from_header(self.license_code_old, self.license_code_new)
    }
}

// Titles end at the first NUL. Color cartridges put their CGB flag in the
// last title byte, after the padding.
fn decode_title(raw: &[u8]) -> String {
    let name = raw.split(|&b| b == 0).next().unwrap_or(&[]);
    String::from_utf8_lossy(name).trim_end_matches(' ').to_string()
}
