//! Text decoding with an ordered encoding fallback.
//!
//! Documents are tried as UTF-8 first, then as the legacy single-byte
//! encodings in [`FALLBACK_ORDER`]. The first encoding that accepts every byte
//! wins. ISO-8859-1 maps all 256 byte values, so in practice the chain only
//! fails for inputs that cannot be read at all; the later entries are kept so
//! the order stays explicit if the Latin-1 step is ever made stricter.

/// Supported source encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    Latin1,
    Windows1252,
    Ascii,
}

/// Decoding order.
pub const FALLBACK_ORDER: &[Encoding] = &[
    Encoding::Utf8,
    Encoding::Latin1,
    Encoding::Windows1252,
    Encoding::Ascii,
];

impl Encoding {
    /// Label for log messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Latin1 => "iso-8859-1",
            Self::Windows1252 => "cp1252",
            Self::Ascii => "ascii",
        }
    }

    /// Decode `bytes`, or `None` if any byte is invalid in this encoding.
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        match self {
            Self::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_owned),
            Self::Latin1 => Some(bytes.iter().map(|&b| char::from(b)).collect()),
            Self::Windows1252 => bytes.iter().map(|&b| windows_1252_char(b)).collect(),
            Self::Ascii => bytes
                .iter()
                .map(|&b| b.is_ascii().then(|| char::from(b)))
                .collect(),
        }
    }
}

/// Decode with the first encoding in [`FALLBACK_ORDER`] that succeeds.
pub fn decode(bytes: &[u8]) -> Option<(String, Encoding)> {
    FALLBACK_ORDER
        .iter()
        .find_map(|enc| enc.decode(bytes).map(|text| (text, *enc)))
}

/// Windows-1252 differs from Latin-1 only in 0x80..=0x9F; five of those
/// positions are unassigned.
fn windows_1252_char(b: u8) -> Option<char> {
    let c = match b {
        0x80 => '\u{20AC}',
        0x82 => '\u{201A}',
        0x83 => '\u{0192}',
        0x84 => '\u{201E}',
        0x85 => '\u{2026}',
        0x86 => '\u{2020}',
        0x87 => '\u{2021}',
        0x88 => '\u{02C6}',
        0x89 => '\u{2030}',
        0x8A => '\u{0160}',
        0x8B => '\u{2039}',
        0x8C => '\u{0152}',
        0x8E => '\u{017D}',
        0x91 => '\u{2018}',
        0x92 => '\u{2019}',
        0x93 => '\u{201C}',
        0x94 => '\u{201D}',
        0x95 => '\u{2022}',
        0x96 => '\u{2013}',
        0x97 => '\u{2014}',
        0x98 => '\u{02DC}',
        0x99 => '\u{2122}',
        0x9A => '\u{0161}',
        0x9B => '\u{203A}',
        0x9C => '\u{0153}',
        0x9E => '\u{017E}',
        0x9F => '\u{0178}',
        0x81 | 0x8D | 0x8F | 0x90 | 0x9D => return None,
        _ => char::from(b),
    };
    Some(c)
}
