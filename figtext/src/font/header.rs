use std::str;

use bstr::{BString, ByteSlice as _};

use crate::font::FontWarning;

/// A font header line.
///
/// Only the signature and the height are read. Everything after the second field (baseline,
/// maximum length, layout, comment line count) is ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    /// The first field, starting with [`SIGNATURE`] and usually followed by `a` and the hardblank,
    /// eg `flf2a$`.
    pub signature: BString,
    /// Number of rows in each glyph. Zero if the height field is missing or unreadable; see
    /// [`FontWarning::Height`].
    pub height: usize,
}

/// Prefix identifying the header line.
pub const SIGNATURE: &[u8] = b"flf2";

impl Header {
    /// Decodes a single line, returning `None` unless it begins with [`SIGNATURE`].
    ///
    /// Fields are separated by any amount of whitespace. A height that cannot be read is recorded
    /// in `warnings` and taken as zero.
    pub fn decode(line: &[u8], warnings: &mut Vec<FontWarning>) -> Option<Self> {
        if !line.starts_with(SIGNATURE) {
            return None;
        }
        let mut fields = line.fields();
        let signature = fields.next().unwrap_or_default().into();
        let raw_height = fields.next().unwrap_or_default();
        let height = str::from_utf8(raw_height)
            .ok()
            .and_then(|height| height.parse().ok())
            .unwrap_or_else(|| {
                warnings.push(FontWarning::Height(raw_height.into()));
                0
            });
        Some(Self { signature, height })
    }

    /// Consumes lines up to and including the first header line. Returns `None` (with all lines
    /// consumed) if there is no header.
    #[expect(
        single_use_lifetimes,
        reason = "https://github.com/rust-lang/rust/issues/137575"
    )]
    pub(crate) fn scan<'a>(
        lines: &mut impl Iterator<Item = &'a [u8]>,
        warnings: &mut Vec<FontWarning>,
    ) -> Option<Self> {
        let header = lines.find_map(|line| Self::decode(line, warnings));
        if header.is_none() {
            warnings.push(FontWarning::MissingHeader);
        }
        header
    }
}
