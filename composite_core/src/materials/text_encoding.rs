//! Text encodings tried when reading the section dataset.
//!
//! Section tables exported from spreadsheets arrive as UTF-8 with a byte
//! order mark, Windows-1252, or ISO-8859-1. Each decoder is strict where the
//! encoding has undefined bytes, so the retry loop in
//! [`SectionTable::from_csv_bytes`](super::steel::SectionTable::from_csv_bytes)
//! can move on to the next candidate.

use serde::{Deserialize, Serialize};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Windows-1252 code points for bytes 0x80..=0x9F; `None` marks undefined bytes.
const CP1252_HIGH: [Option<char>; 32] = [
    Some('\u{20AC}'), None,             Some('\u{201A}'), Some('\u{0192}'),
    Some('\u{201E}'), Some('\u{2026}'), Some('\u{2020}'), Some('\u{2021}'),
    Some('\u{02C6}'), Some('\u{2030}'), Some('\u{0160}'), Some('\u{2039}'),
    Some('\u{0152}'), None,             Some('\u{017D}'), None,
    None,             Some('\u{2018}'), Some('\u{2019}'), Some('\u{201C}'),
    Some('\u{201D}'), Some('\u{2022}'), Some('\u{2013}'), Some('\u{2014}'),
    Some('\u{02DC}'), Some('\u{2122}'), Some('\u{0161}'), Some('\u{203A}'),
    Some('\u{0153}'), None,             Some('\u{017E}'), Some('\u{0178}'),
];

/// Supported dataset encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextEncoding {
    /// UTF-8, leading byte order mark stripped if present
    Utf8Sig,
    /// Windows code page 1252
    Windows1252,
    /// ISO-8859-1; every byte maps to the code point of the same value
    Latin1,
}

impl TextEncoding {
    /// Order in which encodings are attempted
    pub const FALLBACK_ORDER: [TextEncoding; 3] = [
        TextEncoding::Utf8Sig,
        TextEncoding::Windows1252,
        TextEncoding::Latin1,
    ];

    /// Conventional codec name
    pub fn name(&self) -> &'static str {
        match self {
            TextEncoding::Utf8Sig => "utf-8-sig",
            TextEncoding::Windows1252 => "cp1252",
            TextEncoding::Latin1 => "latin-1",
        }
    }

    /// Decode `bytes`, or `None` if they are not valid in this encoding.
    ///
    /// # Example
    /// ```rust
    /// use composite_core::materials::TextEncoding;
    ///
    /// let bytes = b"\xEF\xBB\xBFlabel";
    /// assert_eq!(TextEncoding::Utf8Sig.decode(bytes).as_deref(), Some("label"));
    ///
    /// // 0x96 is an en dash in cp1252 but invalid UTF-8
    /// assert!(TextEncoding::Utf8Sig.decode(b"a\x96b").is_none());
    /// assert_eq!(TextEncoding::Windows1252.decode(b"a\x96b").as_deref(), Some("a\u{2013}b"));
    /// ```
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        match self {
            TextEncoding::Utf8Sig => {
                let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
                std::str::from_utf8(body).ok().map(str::to_owned)
            }
            TextEncoding::Windows1252 => bytes
                .iter()
                .map(|&b| match b {
                    0x80..=0x9F => CP1252_HIGH[usize::from(b - 0x80)],
                    _ => Some(char::from(b)),
                })
                .collect(),
            TextEncoding::Latin1 => Some(bytes.iter().map(|&b| char::from(b)).collect()),
        }
    }
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
