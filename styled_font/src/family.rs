// Copyright 2026 the Styled Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font family names and generic families.

use alloc::borrow::Cow;
use core::fmt;

/// Kinds of errors that can occur when parsing font family lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseFamilyErrorKind {
    /// The source string does not conform to the supported syntax.
    InvalidSyntax,
    /// A quoted family name was missing a closing quote.
    UnterminatedString,
}

/// Error returned when parsing font family lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseFamilyError {
    kind: ParseFamilyErrorKind,
    at: usize,
}

impl ParseFamilyError {
    const fn new(kind: ParseFamilyErrorKind, at: usize) -> Self {
        Self { kind, at }
    }

    /// Returns the error kind.
    pub const fn kind(self) -> ParseFamilyErrorKind {
        self.kind
    }

    /// Returns the byte offset into the source where the error was detected.
    pub const fn byte_offset(self) -> usize {
        self.at
    }
}

impl fmt::Display for ParseFamilyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            ParseFamilyErrorKind::InvalidSyntax => "invalid font family syntax",
            ParseFamilyErrorKind::UnterminatedString => "unterminated string in font family list",
        };
        write!(f, "{msg} at byte {}", self.at)
    }
}

impl core::error::Error for ParseFamilyError {}

/// Describes a generic font family.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum GenericFamily {
    /// Glyphs have finishing strokes, flared or tapering ends, or actual
    /// serifed endings.
    Serif,
    /// Glyphs have stroke endings that are plain.
    SansSerif,
    /// All glyphs have the same fixed width.
    Monospace,
    /// Glyphs have joining strokes or other cursive characteristics.
    Cursive,
    /// The default user interface font on a given platform.
    SystemUi,
    /// Fonts that are specifically designed to render emoji.
    Emoji,
}

impl GenericFamily {
    /// Parses a generic family from its keyword.
    ///
    /// # Example
    /// ```
    /// # use styled_font::GenericFamily;
    /// assert_eq!(GenericFamily::parse("sans-serif"), Some(GenericFamily::SansSerif));
    /// assert_eq!(GenericFamily::parse("Arial"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "serif" => Self::Serif,
            "sans-serif" => Self::SansSerif,
            "monospace" => Self::Monospace,
            "cursive" => Self::Cursive,
            "system-ui" => Self::SystemUi,
            "emoji" => Self::Emoji,
            _ => return None,
        })
    }

    /// Returns the keyword for this generic family.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Cursive => "cursive",
            Self::SystemUi => "system-ui",
            Self::Emoji => "emoji",
        }
    }
}

impl fmt::Display for GenericFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single named or generic font family.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum FontFamilyName<'a> {
    /// A named font family.
    Named(Cow<'a, str>),
    /// A generic font family.
    Generic(GenericFamily),
}

impl<'a> FontFamilyName<'a> {
    /// Creates a named font family from a borrowed string.
    pub const fn named(name: &'a str) -> Self {
        Self::Named(Cow::Borrowed(name))
    }

    /// Parses a font family containing a name or a generic family.
    ///
    /// # Example
    /// ```
    /// # extern crate alloc;
    /// use alloc::borrow::Cow;
    /// use styled_font::FontFamilyName::{self, *};
    /// use styled_font::GenericFamily::*;
    ///
    /// assert_eq!(FontFamilyName::parse("Palatino Linotype"), Some(Named(Cow::Borrowed("Palatino Linotype"))));
    /// assert_eq!(FontFamilyName::parse("monospace"), Some(Generic(Monospace)));
    ///
    /// // A quoted generic keyword is captured as a named family:
    /// assert_eq!(FontFamilyName::parse("'monospace'"), Some(Named(Cow::Borrowed("monospace"))));
    /// ```
    pub fn parse(s: &'a str) -> Option<Self> {
        Self::parse_list(s).next()?.ok()
    }

    /// Parses a comma separated list of font families.
    ///
    /// Whitespace around entries is ignored and a trailing comma is
    /// permitted, but empty entries (such as `,,`) are rejected. Iteration
    /// stops after the first error.
    ///
    /// # Example
    /// ```
    /// # extern crate alloc;
    /// use alloc::borrow::Cow;
    /// use alloc::vec::Vec;
    /// use styled_font::{FontFamilyName, ParseFamilyError};
    /// use styled_font::FontFamilyName::*;
    /// use styled_font::GenericFamily::*;
    ///
    /// let source = "Arial, 'Times New Roman', serif";
    /// let families: Result<Vec<_>, ParseFamilyError> =
    ///     FontFamilyName::parse_list(source).collect();
    /// let expected = vec![
    ///     Named(Cow::Borrowed("Arial")),
    ///     Named(Cow::Borrowed("Times New Roman")),
    ///     Generic(Serif),
    /// ];
    /// assert_eq!(families.unwrap(), expected);
    /// ```
    pub fn parse_list(
        s: &'a str,
    ) -> impl Iterator<Item = Result<FontFamilyName<'a>, ParseFamilyError>> + 'a + Clone {
        ParseList { source: s, pos: 0 }
    }

    /// Converts this family into one that owns its name.
    pub fn into_owned(self) -> FontFamilyName<'static> {
        match self {
            Self::Named(name) => FontFamilyName::Named(Cow::Owned(name.into_owned())),
            Self::Generic(family) => FontFamilyName::Generic(family),
        }
    }

    /// Returns the family name, or the keyword for generic families.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::Generic(family) => family.as_str(),
        }
    }
}

impl From<GenericFamily> for FontFamilyName<'_> {
    fn from(f: GenericFamily) -> Self {
        Self::Generic(f)
    }
}

impl fmt::Display for FontFamilyName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => write!(f, "{name:?}"),
            Self::Generic(family) => write!(f, "{family}"),
        }
    }
}

#[derive(Clone)]
struct ParseList<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Iterator for ParseList<'a> {
    type Item = Result<FontFamilyName<'a>, ParseFamilyError>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.source.as_bytes();
        let len = bytes.len();
        let mut pos = self.pos;
        while pos < len && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        self.pos = pos;
        if pos >= len {
            return None;
        }
        let first = bytes[pos];
        if first == b',' {
            self.pos = len;
            return Some(Err(ParseFamilyError::new(
                ParseFamilyErrorKind::InvalidSyntax,
                pos,
            )));
        }
        if first == b'"' || first == b'\'' {
            let start = pos + 1;
            let mut end = start;
            while end < len && bytes[end] != first {
                end += 1;
            }
            if end >= len {
                self.pos = len;
                return Some(Err(ParseFamilyError::new(
                    ParseFamilyErrorKind::UnterminatedString,
                    pos,
                )));
            }
            let mut after = end + 1;
            while after < len && bytes[after].is_ascii_whitespace() {
                after += 1;
            }
            if after < len {
                if bytes[after] != b',' {
                    self.pos = len;
                    return Some(Err(ParseFamilyError::new(
                        ParseFamilyErrorKind::InvalidSyntax,
                        after,
                    )));
                }
                after += 1;
            }
            self.pos = after;
            let name = self.source[start..end].trim();
            return Some(Ok(FontFamilyName::Named(Cow::Borrowed(name))));
        }
        let start = pos;
        let mut end = pos;
        while end < len && bytes[end] != b',' {
            end += 1;
        }
        self.pos = if end < len { end + 1 } else { end };
        let name = self.source[start..end].trim();
        if name.is_empty() {
            self.pos = len;
            return Some(Err(ParseFamilyError::new(
                ParseFamilyErrorKind::InvalidSyntax,
                start,
            )));
        }
        Some(match GenericFamily::parse(name) {
            Some(family) => Ok(FontFamilyName::Generic(family)),
            None => Ok(FontFamilyName::Named(Cow::Borrowed(name))),
        })
    }
}
