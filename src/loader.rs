use crate::cartridge::Cartridge;
use crate::error::{Error, Result};

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::info;

/// Reads a whole ROM image from disk and parses its header.
pub fn load_file(file_path: impl AsRef<Path>) -> Result<Cartridge> {
    let path = file_path.as_ref();

    let data = {
        let mut rom = File::open(path).map_err(|e| Error::io(path, e))?;
        let mut data = Vec::new();
        rom.read_to_end(&mut data).map_err(|e| Error::io(path, e))?;
        data
    };

    info!("Read {} bytes from {}", data.len(), path.display());

    Cartridge::from_bytes(data)
}
