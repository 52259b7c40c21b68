//! Classifying cartridges by the type byte at 0x147.
//!
//! The type byte names the memory bank controller soldered onto the
//! cartridge and the extra hardware wired to it: external RAM, a battery
//! keeping that RAM alive, a real time clock, a rumble motor or a tilt
//! sensor. The bus uses this to decide how ROM and RAM banks are mapped.
//!
//! Bytes the format leaves unassigned are not in the table. They still
//! resolve to a descriptor, so classification never fails.

use phf::phf_map;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mapper {
    RomOnly,
    Mbc1,
    Mbc2,
    Mbc3,
    Mbc5,
    Mbc6,
    Mbc7,
    Mmm01,
}

#[derive(Debug, PartialEq, Eq)]
pub struct CartridgeType {
    pub name: &'static str,
    pub mapper: Mapper,
    pub ram: bool,
    pub battery: bool,
    pub timer: bool,
    pub rumble: bool,
    pub sensor: bool,
}

const fn plain(name: &'static str, mapper: Mapper) -> CartridgeType {
    CartridgeType {
        name,
        mapper,
        ram: false,
        battery: false,
        timer: false,
        rumble: false,
        sensor: false,
    }
}

const fn with_ram(name: &'static str, mapper: Mapper, battery: bool) -> CartridgeType {
    CartridgeType {
        name,
        mapper,
        ram: true,
        battery,
        timer: false,
        rumble: false,
        sensor: false,
    }
}

static CARTRIDGE_TYPES: phf::Map<u8, CartridgeType> = phf_map! {
    0x00u8 => plain("ROM ONLY", Mapper::RomOnly),
    0x01u8 => plain("MBC1", Mapper::Mbc1),
    0x02u8 => with_ram("MBC1+RAM", Mapper::Mbc1, false),
    0x03u8 => with_ram("MBC1+RAM+BATTERY", Mapper::Mbc1, true),
    0x05u8 => plain("MBC2", Mapper::Mbc2),
    // MBC2 has its RAM built in, so only the battery is flagged.
    0x06u8 => CartridgeType { battery: true, ..plain("MBC2+BATTERY", Mapper::Mbc2) },
    0x08u8 => with_ram("ROM+RAM 1", Mapper::RomOnly, false),
    0x09u8 => with_ram("ROM+RAM+BATTERY 1", Mapper::RomOnly, true),
    0x0Bu8 => plain("MMM01", Mapper::Mmm01),
    0x0Cu8 => with_ram("MMM01+RAM", Mapper::Mmm01, false),
    0x0Du8 => with_ram("MMM01+RAM+BATTERY", Mapper::Mmm01, true),
    0x0Fu8 => CartridgeType { battery: true, timer: true, ..plain("MBC3+TIMER+BATTERY", Mapper::Mbc3) },
    0x10u8 => CartridgeType { timer: true, ..with_ram("MBC3+TIMER+RAM+BATTERY 2", Mapper::Mbc3, true) },
    0x11u8 => plain("MBC3", Mapper::Mbc3),
    0x12u8 => with_ram("MBC3+RAM 2", Mapper::Mbc3, false),
    0x13u8 => with_ram("MBC3+RAM+BATTERY 2", Mapper::Mbc3, true),
    0x19u8 => plain("MBC5", Mapper::Mbc5),
    0x1Au8 => with_ram("MBC5+RAM", Mapper::Mbc5, false),
    0x1Bu8 => with_ram("MBC5+RAM+BATTERY", Mapper::Mbc5, true),
    0x1Cu8 => CartridgeType { rumble: true, ..plain("MBC5+RUMBLE", Mapper::Mbc5) },
    0x1Du8 => CartridgeType { rumble: true, ..with_ram("MBC5+RUMBLE+RAM", Mapper::Mbc5, false) },
    0x1Eu8 => CartridgeType { rumble: true, ..with_ram("MBC5+RUMBLE+RAM+BATTERY", Mapper::Mbc5, true) },
    0x20u8 => plain("MBC6", Mapper::Mbc6),
    0x22u8 => CartridgeType {
        sensor: true,
        rumble: true,
        ..with_ram("MBC7+SENSOR+RUMBLE+RAM+BATTERY", Mapper::Mbc7, true)
    },
};

/// The table entry for `code`, or `None` if the byte is unassigned.
pub fn lookup(code: u8) -> Option<&'static CartridgeType> {
    CARTRIDGE_TYPES.get(&code)
}

/// Human readable descriptor for `code`.
///
/// Unassigned bytes produce a diagnostic string carrying the raw value,
/// e.g. `"0x23 ??? (unknown)"`.
pub fn resolve(code: u8) -> String {
    match lookup(code) {
        Some(kind) => kind.name.to_string(),
        None => format!("0x{:02X} ??? (unknown)", code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_types {
        ($(($test:ident, $code:expr, $name:expr$(,)?)),*$(,)?) => {$(
            #[test]
            fn $test() {
                assert_eq!(resolve($code), $name);
            }
        )*};
    }

    test_types!(
        (rom_only, 0x00, "ROM ONLY"),
        (mbc1, 0x01, "MBC1"),
        (mbc3_ram_battery, 0x13, "MBC3+RAM+BATTERY 2"),
        (mbc5, 0x19, "MBC5"),
        (mbc7, 0x22, "MBC7+SENSOR+RUMBLE+RAM+BATTERY"),
        (reserved_inside_range, 0x04, "0x04 ??? (unknown)"),
        (unassigned, 0x23, "0x23 ??? (unknown)"),
    );

    #[test]
    fn every_byte_has_a_descriptor() {
        for code in 0..=0xFFu8 {
            let name = resolve(code);
            assert!(!name.is_empty());
            if lookup(code).is_none() {
                assert!(name.contains("unknown"), "{:#04X} -> {}", code, name);
            }
        }
    }

    #[test]
    fn feature_flags_follow_the_name() {
        for code in 0..=0xFFu8 {
            if let Some(kind) = lookup(code) {
                assert_eq!(kind.ram, kind.name.contains("RAM"), "{}", kind.name);
                assert_eq!(kind.battery, kind.name.contains("BATTERY"), "{}", kind.name);
                assert_eq!(kind.timer, kind.name.contains("TIMER"), "{}", kind.name);
                assert_eq!(kind.rumble, kind.name.contains("RUMBLE"), "{}", kind.name);
                assert_eq!(kind.sensor, kind.name.contains("SENSOR"), "{}", kind.name);
            }
        }
    }

    #[test]
    fn mapper_family() {
        assert_eq!(lookup(0x09).map(|t| t.mapper), Some(Mapper::RomOnly));
        assert_eq!(lookup(0x0D).map(|t| t.mapper), Some(Mapper::Mmm01));
        assert_eq!(lookup(0x20).map(|t| t.mapper), Some(Mapper::Mbc6));
        assert_eq!(lookup(0xFF), None);
    }
}
