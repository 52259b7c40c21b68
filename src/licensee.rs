//! Publisher names for the licensee codes stored in the header.
//!
//! Older cartridges identify their publisher with a single byte at 0x14B.
//! When that byte is 0x33 the publisher is instead given by the two ASCII
//! characters at 0x144-0x145, which are looked up in a separate table.

use phf::phf_map;

/// Old licensee byte that redirects to the two-character code.
pub const USE_NEW_LICENSEE: u8 = 0x33;

pub const UNKNOWN: &str = "Unknown";

static NEW_LICENSEES: phf::Map<&'static str, &'static str> = phf_map! {
    "00" => "None",
    "01" => "Nintendo R&D1",
    "08" => "Capcom",
    "13" => "Electronic Arts",
    "18" => "Hudson Soft",
    "19" => "b-ai",
    "20" => "kss",
    "22" => "pow",
    "24" => "PCM Complete",
    "25" => "san-x",
    "28" => "Kemco Japan",
    "29" => "seta",
    "30" => "Viacom",
    "31" => "Nintendo",
    "32" => "Bandai",
    "33" => "Ocean/Acclaim",
    "34" => "Konami",
    "35" => "Hector",
    "37" => "Taito",
    "38" => "Hudson",
    "39" => "Banpresto",
    "41" => "Ubi Soft",
    "42" => "Atlus",
    "44" => "Malibu",
    "46" => "angel",
    "47" => "Bullet-Proof",
    "49" => "irem",
    "50" => "Absolute",
    "51" => "Acclaim",
    "52" => "Activision",
    "53" => "American sammy",
    "54" => "Konami",
    "55" => "Hi tech entertainment",
    "56" => "LJN",
    "57" => "Matchbox",
    "58" => "Mattel",
    "59" => "Milton Bradley",
    "60" => "Titus",
    "61" => "Virgin",
    "64" => "LucasArts",
    "67" => "Ocean",
    "69" => "Electronic Arts",
    "70" => "Infogrames",
    "71" => "Interplay",
    "72" => "Broderbund",
    "73" => "sculptured",
    "75" => "sci",
    "78" => "THQ",
    "79" => "Accolade",
    "80" => "misawa",
    "83" => "lozc",
    "86" => "Tokuma Shoten Intermedia",
    "87" => "Tsukuda Original",
    "91" => "Chunsoft",
    "92" => "Video system",
    "93" => "Ocean/Acclaim",
    "95" => "Varie",
    "96" => "Yonezawa/s’pal",
    "97" => "Kaneko",
    "99" => "Pack in soft",
    "A4" => "Konami (Yu-Gi-Oh!)",
};

static OLD_LICENSEES: phf::Map<u8, &'static str> = phf_map! {
    0x00u8 => "None",
    0x01u8 => "Nintendo",
    0x08u8 => "Capcom",
    0x09u8 => "Hot-B",
    0x0Au8 => "Jaleco",
    0x0Bu8 => "Coconuts Japan",
    0x0Cu8 => "Elite Systems",
    0x13u8 => "EA (Electronic Arts)",
    0x18u8 => "Hudsonsoft",
    0x19u8 => "ITC Entertainment",
    0x1Au8 => "Yanoman",
    0x1Du8 => "Japan Clary",
    0x1Fu8 => "Virgin Interactive",
    0x24u8 => "PCM Complete",
    0x25u8 => "San-X",
    0x28u8 => "Kotobuki Systems",
    0x29u8 => "Seta",
    0x30u8 => "Infogrames",
    0x31u8 => "Nintendo",
    0x32u8 => "Bandai",
    0x33u8 => "Indicates that the New licensee code should be used instead.",
    0x34u8 => "Konami",
    0x35u8 => "HectorSoft",
    0x38u8 => "Capcom",
    0x39u8 => "Banpresto",
    0x3Cu8 => ".Entertainment i",
    0x3Eu8 => "Gremlin",
    0x41u8 => "Ubisoft",
    0x42u8 => "Atlus",
    0x44u8 => "Malibu",
    0x46u8 => "Angel",
    0x47u8 => "Spectrum Holoby",
    0x49u8 => "Irem",
    0x4Au8 => "Virgin Interactive",
    0x4Du8 => "Malibu",
    0x4Fu8 => "U.S. Gold",
    0x50u8 => "Absolute",
    0x51u8 => "Acclaim",
    0x52u8 => "Activision",
    0x53u8 => "American Sammy",
    0x54u8 => "GameTek",
    0x55u8 => "Park Place",
    0x56u8 => "LJN",
    0x57u8 => "Matchbox",
    0x59u8 => "Milton Bradley",
    0x5Au8 => "Mindscape",
    0x5Bu8 => "Romstar",
    0x5Cu8 => "Naxat Soft",
    0x5Du8 => "Tradewest",
    0x60u8 => "Titus",
    0x61u8 => "Virgin Interactive",
    0x67u8 => "Ocean Interactive",
    0x69u8 => "EA (Electronic Arts)",
    0x6Eu8 => "Elite Systems",
    0x6Fu8 => "Electro Brain",
    0x70u8 => "Infogrames",
    0x71u8 => "Interplay",
    0x72u8 => "Broderbund",
    0x73u8 => "Sculptered Soft",
    0x75u8 => "The Sales Curve",
    0x78u8 => "t.hq",
    0x79u8 => "Accolade",
    0x7Au8 => "Triffix Entertainment",
    0x7Cu8 => "Microprose",
    0x7Fu8 => "Kemco",
    0x80u8 => "Misawa Entertainment",
    0x83u8 => "Lozc",
    0x86u8 => "Tokuma Shoten Intermedia",
    0x8Bu8 => "Bullet-Proof Software",
    0x8Cu8 => "Vic Tokai",
    0x8Eu8 => "Ape",
    0x8Fu8 => "I’Max",
    0x91u8 => "Chunsoft Co.",
    0x92u8 => "Video System",
    0x93u8 => "Tsubaraya Productions Co.",
    0x95u8 => "Varie Corporation",
    0x96u8 => "Yonezawa/S’Pal",
    0x97u8 => "Kaneko",
    0x99u8 => "Arc",
    0x9Au8 => "Nihon Bussan",
    0x9Bu8 => "Tecmo",
    0x9Cu8 => "Imagineer",
    0x9Du8 => "Banpresto",
    0x9Fu8 => "Nova",
    0xA1u8 => "Hori Electric",
    0xA2u8 => "Bandai",
    0xA4u8 => "Konami",
    0xA6u8 => "Kawada",
    0xA7u8 => "Takara",
    0xA9u8 => "Technos Japan",
    0xAAu8 => "Broderbund",
    0xACu8 => "Toei Animation",
    0xADu8 => "Toho",
    0xAFu8 => "Namco",
    0xB0u8 => "acclaim",
    0xB1u8 => "ASCII or Nexsoft",
    0xB2u8 => "Bandai",
    0xB4u8 => "Square Enix",
    0xB6u8 => "HAL Laboratory",
    0xB7u8 => "SNK",
    0xB9u8 => "Pony Canyon",
    0xBAu8 => "Culture Brain",
    0xBBu8 => "Sunsoft",
    0xBDu8 => "Sony Imagesoft",
    0xBFu8 => "Sammy",
    0xC0u8 => "Taito",
    0xC2u8 => "Kemco",
    0xC3u8 => "Squaresoft",
    0xC4u8 => "Tokuma Shoten Intermedia",
    0xC5u8 => "Data East",
    0xC6u8 => "Tonkinhouse",
    0xC8u8 => "Koei",
    0xC9u8 => "UFL",
    0xCAu8 => "Ultra",
    0xCBu8 => "Vap",
    0xCCu8 => "Use Corporation",
    0xCDu8 => "Meldac",
    0xCEu8 => ".Pony Canyon or",
    0xCFu8 => "Angel",
    0xD0u8 => "Taito",
    0xD1u8 => "Sofel",
    0xD2u8 => "Quest",
    0xD3u8 => "Sigma Enterprises",
    0xD4u8 => "ASK Kodansha Co.",
    0xD6u8 => "Naxat Soft",
    0xD7u8 => "Copya System",
    0xD9u8 => "Banpresto",
    0xDAu8 => "Tomy",
    0xDBu8 => "LJN",
    0xDDu8 => "NCS",
    0xDEu8 => "Human",
    0xDFu8 => "Altron",
    0xE0u8 => "Jaleco",
    0xE1u8 => "Towa Chiki",
    0xE2u8 => "Yutaka",
    0xE3u8 => "Varie",
    0xE5u8 => "Epcoh",
    0xE7u8 => "Athena",
    0xE8u8 => "Asmik ACE Entertainment",
    0xE9u8 => "Natsume",
    0xEAu8 => "King Records",
    0xEBu8 => "Atlus",
    0xECu8 => "Epic/Sony Records",
    0xEEu8 => "IGS",
    0xF0u8 => "A Wave",
    0xF3u8 => "Extreme Entertainment",
    0xFFu8 => "LJN",
};

/// The publisher code a header actually uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LicenseeCode {
    Old(u8),
    New([u8; 2]),
}

impl LicenseeCode {
    pub fn from_header(old_code: u8, new_code: [u8; 2]) -> Self {
        if old_code == USE_NEW_LICENSEE {
            LicenseeCode::New(new_code)
        } else {
            LicenseeCode::Old(old_code)
        }
    }

    pub fn name(&self) -> &'static str {
        let name = match self {
            LicenseeCode::Old(code) => OLD_LICENSEES.get(code),
            LicenseeCode::New(code) => std::str::from_utf8(code)
                .ok()
                .and_then(|code| NEW_LICENSEES.get(code)),
        };

        name.copied().unwrap_or(UNKNOWN)
    }
}

impl std::fmt::Display for LicenseeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LicenseeCode::Old(code) => write!(f, "0x{:02X}", code),
            LicenseeCode::New(code) => write!(f, "\"{}\"", String::from_utf8_lossy(code)),
        }
    }
}

/// Resolves a publisher name, returning `"Unknown"` for codes missing from
/// the applicable table.
pub fn resolve(old_code: u8, new_code: [u8; 2]) -> &'static str {
    LicenseeCode::from_header(old_code, new_code).name()
}
