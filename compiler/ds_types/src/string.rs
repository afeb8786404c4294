//! The `string` measure and its encodings.

use std::fmt;

use crate::{DataShapeError, Result};

/// Canonical string encoding.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Encoding {
    /// 7-bit ASCII, one byte per character.
    Ascii,
    /// UTF-8.
    #[default]
    Utf8,
    /// UTF-16.
    Utf16,
    /// UTF-32 (UCS-4).
    Utf32,
}

impl Encoding {
    /// Normalize an encoding token to its canonical encoding.
    ///
    /// Accepts the canonical codes (`A`, `U8`, `U16`, `U32`), `ascii`, and the
    /// `utf-N`, `utf_N` and `utfN` spellings.
    pub fn canonical(token: &str) -> Result<Self> {
        match token {
            "A" | "ascii" => Ok(Encoding::Ascii),
            "U8" | "utf-8" | "utf_8" | "utf8" => Ok(Encoding::Utf8),
            "U16" | "utf-16" | "utf_16" | "utf16" => Ok(Encoding::Utf16),
            "U32" | "utf-32" | "utf_32" | "utf32" => Ok(Encoding::Utf32),
            _ => Err(DataShapeError::UnsupportedEncoding(token.to_owned())),
        }
    }

    /// Canonical code used when rendering.
    pub const fn code(self) -> &'static str {
        match self {
            Encoding::Ascii => "A",
            Encoding::Utf8 => "U8",
            Encoding::Utf16 => "U16",
            Encoding::Utf32 => "U32",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Options accepted by [`StringType::with_options`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StringOptions<'a> {
    /// Fixed length in characters, `None` for unbounded.
    pub fixlen: Option<u64>,
    /// Encoding token, `None` for UTF-8.
    pub encoding: Option<&'a str>,
}

/// Text measure: optional fixed length plus a canonical encoding.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct StringType {
    fixlen: Option<u64>,
    encoding: Encoding,
}

impl StringType {
    /// Unbounded UTF-8 string (`string`).
    pub const fn new() -> Self {
        StringType {
            fixlen: None,
            encoding: Encoding::Utf8,
        }
    }

    /// Fixed-length UTF-8 string (`string[N]`).
    pub const fn fixed(fixlen: u64) -> Self {
        StringType {
            fixlen: Some(fixlen),
            encoding: Encoding::Utf8,
        }
    }

    /// Unbounded string with the given encoding (`string['ENC']`).
    pub fn encoded(encoding: &str) -> Result<Self> {
        Ok(StringType {
            fixlen: None,
            encoding: Encoding::canonical(encoding)?,
        })
    }

    /// Fixed-length string with the given encoding (`string[N, 'ENC']`).
    pub fn fixed_encoded(fixlen: u64, encoding: &str) -> Result<Self> {
        Ok(StringType {
            fixlen: Some(fixlen),
            encoding: Encoding::canonical(encoding)?,
        })
    }

    /// Build from an option set.
    pub fn with_options(options: &StringOptions<'_>) -> Result<Self> {
        let encoding = match options.encoding {
            Some(token) => Encoding::canonical(token)?,
            None => Encoding::Utf8,
        };
        Ok(StringType {
            fixlen: options.fixlen,
            encoding,
        })
    }

    pub const fn fixlen(&self) -> Option<u64> {
        self.fixlen
    }

    pub const fn encoding(&self) -> Encoding {
        self.encoding
    }
}

impl fmt::Display for StringType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.fixlen, self.encoding) {
            (None, Encoding::Utf8) => f.write_str("string"),
            (Some(len), Encoding::Utf8) => write!(f, "string[{len}]"),
            (None, enc) => write!(f, "string['{enc}']"),
            (Some(len), enc) => write!(f, "string[{len}, '{enc}']"),
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn utf8_spellings_are_one_instance() {
        let a = StringType::fixed_encoded(7, "utf-8").unwrap();
        let b = StringType::fixed_encoded(7, "U8").unwrap();
        let c = StringType::fixed_encoded(7, "utf8").unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a, StringType::fixed(7));
    }

    #[test]
    fn every_spelling_canonicalizes() {
        for (token, enc) in [
            ("ascii", Encoding::Ascii),
            ("utf_16", Encoding::Utf16),
            ("utf16", Encoding::Utf16),
            ("utf-32", Encoding::Utf32),
            ("U32", Encoding::Utf32),
        ] {
            assert_eq!(Encoding::canonical(token), Ok(enc), "{token}");
        }
    }

    #[test]
    fn unknown_encoding_is_rejected() {
        assert_eq!(
            StringType::encoded("latin-1"),
            Err(DataShapeError::UnsupportedEncoding("latin-1".into()))
        );
        assert!(StringType::fixed_encoded(3, "UTF-8").is_err());
    }

    #[test]
    fn options_match_named_constructors() {
        let opts = StringOptions {
            fixlen: Some(30),
            encoding: Some("ascii"),
        };
        assert_eq!(
            StringType::with_options(&opts).unwrap(),
            StringType::fixed_encoded(30, "A").unwrap()
        );
        assert_eq!(
            StringType::with_options(&StringOptions::default()).unwrap(),
            StringType::new()
        );
    }

    #[test]
    fn rendering() {
        assert_eq!(StringType::new().to_string(), "string");
        assert_eq!(StringType::fixed(10).to_string(), "string[10]");
        assert_eq!(
            StringType::encoded("utf16").unwrap().to_string(),
            "string['U16']"
        );
        assert_eq!(
            StringType::fixed_encoded(7, "ascii").unwrap().to_string(),
            "string[7, 'A']"
        );
    }
}
