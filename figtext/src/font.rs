//! Glyph tables
//!
//! Font types and the logic for parsing `.flf` files into a [`GlyphTable`].
//!
//! # Format
//!
//! Lines before the header (the first line starting with `flf2`) are skipped; the second field of
//! the header is the glyph height. Every following line is a glyph row ending in an *endmark*
//! (`@`, `#` or `$`). The last row of a glyph ends in a run of endmarks, two long if the height is
//! greater than one, otherwise a single one. Glyphs are listed in character order.
//!
//! The row that closes the first glyph after the header only moves the parser onto glyph `'!'`,
//! so that glyph (conventionally the space) and any comment lines preceding it are discarded.
//! The space itself is always two blank columns wide.
//!
//! A comment line that happens to end in an endmark run is indistinguishable from the end of a
//! glyph: it moves the parser on early and every later glyph lands one character too far along.
//! No attempt is made to detect this.

mod header;

use bstr::{BString, ByteSlice as _};
use itertools::Itertools as _;
use thiserror::Error;

pub use header::{Header, SIGNATURE};

use crate::render::{RenderError, Renderer};
use crate::str_ext::BStrExt as _;

/// Characters accepted as endmarks. They may be mixed freely within one file.
pub const ENDMARKS: [u8; 3] = *b"@#$";

/// The character code of the glyph at index 0, the space.
pub const FIRST_CODEPOINT: u32 = 32;

/// Rows of the space glyph
const SPACE_ROW: &[u8] = b"  ";

/// A parsed font: a height and the glyphs for a contiguous run of characters starting at the
/// space.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphTable {
    header: Option<Header>,
    height: usize,
    glyphs: Vec<Glyph>,
}

impl GlyphTable {
    /// Parses the contents of an `.flf` file, ignoring any warnings.
    ///
    /// Parsing never fails: a file without a header gives a table of height 0, which renders
    /// everything as the empty string.
    #[must_use]
    pub fn from_bytes(bytes: impl AsRef<[u8]>) -> Self {
        Self::from_bytes_with_warnings(bytes).0
    }

    /// Parses the contents of an `.flf` file and also returns any issues found while parsing.
    ///
    /// The warnings are informational only; see [`FontWarning`].
    ///
    /// ```
    /// # use figtext::font::GlyphTable;
    /// let font = "flf2a$ 2 2 4 0 0\n  @\n  @@\nXX@\nYY@@\n";
    /// let (table, warnings) = GlyphTable::from_bytes_with_warnings(font);
    /// assert!(warnings.is_empty());
    /// assert_eq!(table.get('!').unwrap().rows(), ["XX", "YY"]);
    /// assert_eq!(table.render("!").unwrap(), "XX\nYY");
    /// ```
    #[must_use]
    pub fn from_bytes_with_warnings(bytes: impl AsRef<[u8]>) -> (Self, Vec<FontWarning>) {
        let mut warnings = Vec::new();
        let mut lines = bytes.as_ref().lines();
        let header = Header::scan(&mut lines, &mut warnings);
        let height = header.as_ref().map_or(0, |header| header.height);
        let mut glyphs = vec![Glyph::space(height)];

        let run = if height > 1 { 2 } else { 1 };
        let mut scan = Scan::SkippingPreamble;
        for line in lines {
            scan = scan.feed(line, run, &mut glyphs);
        }
        scan.finish(&mut glyphs);

        let table = Self {
            header,
            height,
            glyphs,
        };
        table.check(&mut warnings);
        (table, warnings)
    }

    /// Renders a string with this table.
    ///
    /// # Errors
    /// See [`Renderer::render`].
    pub fn render(&self, text: &str) -> Result<String, RenderError> {
        Renderer::new(self).render(text)
    }

    /// The header line, if there was one.
    #[must_use]
    pub const fn header(&self) -> Option<&Header> {
        self.header.as_ref()
    }

    /// Number of rows in each glyph.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// All glyphs, starting with the space. The glyph at index `i` is for the character with code
    /// `32 + i`.
    #[must_use]
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// The glyph at `index`, if any.
    #[must_use]
    pub fn glyph(&self, index: usize) -> Option<&Glyph> {
        self.glyphs.get(index)
    }

    /// The glyph for `c`, or `None` if `c` is outside the range covered by this table.
    #[must_use]
    pub fn get(&self, c: char) -> Option<&Glyph> {
        let index = u32::from(c).checked_sub(FIRST_CODEPOINT)?;
        self.glyph(usize::try_from(index).ok()?)
    }

    fn check(&self, warnings: &mut Vec<FontWarning>) {
        for (codepoint, glyph) in (FIRST_CODEPOINT..).zip(&self.glyphs).skip(1) {
            if glyph.rows.len() < self.height {
                warnings.push(FontWarning::ShortGlyph {
                    codepoint,
                    rows: glyph.rows.len(),
                    height: self.height,
                });
            }
            if glyph.rows.iter().map(|row| row.len()).unique().count() > 1 {
                warnings.push(FontWarning::InconsistentWidth(codepoint));
            }
        }
    }
}

/// The rows making up a single character.
///
/// Rows normally all have the same width, but this is not enforced; see
/// [`FontWarning::InconsistentWidth`].
///
/// The space glyph is not read from the font. Its rows are all two blanks and are produced on
/// demand by [`Glyph::row`], so a large height in the header costs nothing until rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    rows: Vec<BString>,
    /// Number of [`SPACE_ROW`]s; non-zero only for the space.
    space_rows: usize,
}

impl Glyph {
    const fn space(height: usize) -> Self {
        Self {
            rows: Vec::new(),
            space_rows: height,
        }
    }

    const fn drawn(rows: Vec<BString>) -> Self {
        Self {
            rows,
            space_rows: 0,
        }
    }

    /// The rows read from the font file. May be fewer than the table height for a truncated
    /// font, and is always empty for the space.
    #[must_use]
    pub fn rows(&self) -> &[BString] {
        &self.rows
    }

    /// Row `index`, or `None` if this glyph has no such row.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[u8]> {
        match self.rows.get(index) {
            Some(row) => Some(row.as_bytes()),
            None => (index < self.space_rows).then_some(SPACE_ROW),
        }
    }

    /// Number of rows, including the blank rows of the space.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len().max(self.space_rows)
    }

    /// Width of the widest row, measured in bytes.
    #[must_use]
    pub fn width(&self) -> usize {
        if self.space_rows > 0 {
            return SPACE_ROW.len();
        }
        self.rows.iter().map(|row| row.len()).max().unwrap_or(0)
    }
}

/// Position of the parser within the glyph data.
#[derive(Debug)]
enum Scan {
    /// Before the first endmark run; lines are dropped.
    SkippingPreamble,
    /// Collecting rows for the glyph at `index`.
    AccumulatingGlyph { index: usize, rows: Vec<BString> },
}

impl Scan {
    fn feed(self, line: &[u8], run: usize, glyphs: &mut Vec<Glyph>) -> Self {
        let last_row = line.ends_with_endmark_run(run);
        match self {
            Self::SkippingPreamble if last_row => Self::AccumulatingGlyph {
                index: glyphs.len(),
                rows: Vec::new(),
            },
            Self::SkippingPreamble => Self::SkippingPreamble,
            Self::AccumulatingGlyph { index, mut rows } => {
                rows.push(line.without_suffix(if last_row { run } else { 1 }).into());
                if last_row {
                    debug_assert_eq!(index, glyphs.len(), "glyph index out of step");
                    glyphs.push(Glyph::drawn(rows));
                    Self::AccumulatingGlyph {
                        index: index + 1,
                        rows: Vec::new(),
                    }
                } else {
                    Self::AccumulatingGlyph { index, rows }
                }
            }
        }
    }

    /// Keeps a trailing glyph that never saw its endmark run. A slot with no rows at all (the
    /// normal state after the last glyph) is dropped.
    fn finish(self, glyphs: &mut Vec<Glyph>) {
        match self {
            Self::AccumulatingGlyph { rows, .. } if !rows.is_empty() => {
                glyphs.push(Glyph::drawn(rows));
            }
            _ => {}
        }
    }
}

/// A non-fatal issue with a font found while parsing
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum FontWarning {
    /// No line starts with [`SIGNATURE`], so the height is 0 and nothing can be rendered.
    #[error("no header line starting with \"flf2\"")]
    MissingHeader,
    /// The height field of the header is missing or not a non-negative integer; it is taken as 0.
    #[error(r#"could not parse "{0}" as the height parameter"#)]
    Height(BString),
    /// A glyph has fewer rows than the height. The missing rows render as nothing.
    #[error(
        "glyph for {} has {rows} rows, expected {height}",
        Self::char_debug(*.codepoint)
    )]
    ShortGlyph {
        /// The character code
        codepoint: u32,
        /// The number of rows found
        rows: usize,
        /// The height from the header
        height: usize,
    },
    /// The rows of a glyph differ in width, so output rows will not line up.
    #[error("glyph for {} has inconsistent width", Self::char_debug(*.0))]
    InconsistentWidth(u32),
}

impl FontWarning {
    pub(crate) fn char_debug(codepoint: u32) -> String {
        char::try_from(codepoint).map_or_else(
            |_| format!("\\u{{{codepoint:04X}}}"),
            |char| format!("{char:?}"),
        )
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::{FontWarning, GlyphTable};

    /// A two-row font defining `!` and `"`, preceded by the usual space glyph and a comment.
    pub(crate) const TWO_ROW: &str = "\
flf2a$ 2 2 4 0 1
a comment
  @
  @@
XX@
YY@@
<>#
><##
";

    #[test]
    fn two_row() {
        let (table, warnings) = GlyphTable::from_bytes_with_warnings(TWO_ROW);
        assert!(warnings.is_empty(), "{warnings:?}");
        assert_eq!(table.height(), 2);
        assert_eq!(table.header().unwrap().signature, "flf2a$");
        assert_eq!(table.glyphs().len(), 3);
        let space = table.glyph(0).unwrap();
        assert_eq!(space.row_count(), 2);
        assert_eq!(space.row(1), Some(&b"  "[..]));
        assert_eq!(space.row(2), None);
        assert_eq!(space.width(), 2);
        assert_eq!(table.get('!').unwrap().rows(), ["XX", "YY"]);
        assert_eq!(table.get('"').unwrap().rows(), ["<>", "><"]);
        assert_eq!(table.get('"').unwrap().width(), 2);
        assert_eq!(table.get('#'), None);
        assert_eq!(table.get('\n'), None);
    }

    #[test]
    fn preamble_discarded() {
        // Without the space glyph the first glyph only advances the parser.
        let table = GlyphTable::from_bytes("flf2a$ 2 2 4 0 0\nXX@\nYY@@\n");
        assert_eq!(table.glyphs().len(), 1);
        assert_eq!(table.get('!'), None);
    }

    #[test]
    fn mixed_endmarks() {
        let font = "flf2a$ 2 2 4 0 0\n  @\n  $$\nA#\nB@@\nC$\nD##\n";
        let table = GlyphTable::from_bytes(font);
        assert_eq!(table.get('!').unwrap().rows(), ["A", "B"]);
        assert_eq!(table.get('"').unwrap().rows(), ["C", "D"]);
    }

    #[test]
    fn single_endmark_within_glyph() {
        // A single trailing endmark does not end a glyph of height 2, even if it comes after
        // another endmark character.
        let table = GlyphTable::from_bytes("flf2a$ 2 2 4 0 0\n  @\n  @@\n@#@\n#@##\n");
        assert_eq!(table.get('!').unwrap().rows(), ["@#", "#@"]);
    }

    #[test]
    fn height_one() {
        let font = "flf2a$ 1 1 2 0 1\ncomment\n @\n!@\n@@\n";
        let table = GlyphTable::from_bytes(font);
        assert_eq!(table.height(), 1);
        assert_eq!(table.get('!').unwrap().rows(), ["!"]);
        assert_eq!(table.get('"').unwrap().rows(), ["@"]);
    }

    #[test]
    fn comment_ending_in_endmarks_shifts_glyphs() {
        // The comment line looks like the end of a glyph, so the space glyph's rows are taken
        // as `!` and every later glyph moves up by one character.
        let font = "flf2a$ 2 2 4 0 1\nsee figlet.org @@\n  @\n  @@\nXX@\nYY@@\n";
        let table = GlyphTable::from_bytes(font);
        assert_eq!(table.get('!').unwrap().rows(), ["  ", "  "]);
        assert_eq!(table.get('"').unwrap().rows(), ["XX", "YY"]);
    }

    #[test]
    fn missing_header() {
        let (table, warnings) = GlyphTable::from_bytes_with_warnings("  @\n  @@\nXX@\nYY@@\n");
        assert_eq!(table.height(), 0);
        assert_eq!(table.header(), None);
        assert_eq!(table.glyph(0).unwrap().row_count(), 0);
        assert_eq!(warnings.first(), Some(&FontWarning::MissingHeader));

        let (table, warnings) = GlyphTable::from_bytes_with_warnings("");
        assert_eq!(table.height(), 0);
        assert_eq!(warnings, [FontWarning::MissingHeader]);
    }

    #[test]
    fn short_and_ragged_glyphs() {
        let font = "flf2a$ 3 3 4 0 0\n  @\n  @\n  @@\nAA@\nB@\nCC@@\nDD@\n";
        let (table, warnings) = GlyphTable::from_bytes_with_warnings(font);
        assert_eq!(table.get('!').unwrap().rows(), ["AA", "B", "CC"]);
        assert_eq!(table.get('"').unwrap().rows(), ["DD"]);
        assert_eq!(
            warnings,
            [
                FontWarning::InconsistentWidth(33),
                FontWarning::ShortGlyph {
                    codepoint: 34,
                    rows: 1,
                    height: 3
                },
            ]
        );
        assert_eq!(
            warnings[0].to_string(),
            "glyph for '!' has inconsistent width"
        );
    }

    #[test]
    fn huge_height() {
        let font = format!("flf2a$ {} 1 4 0 0\n", usize::MAX);
        let table = GlyphTable::from_bytes(font);
        assert_eq!(table.height(), usize::MAX);
        assert_eq!(table.glyph(0).unwrap().row(usize::MAX - 1), Some(&b"  "[..]));
        assert_eq!(table.render("   ").unwrap(), "");

        let font = "flf2a$ 100000000 1 4 0 0\n  @@\nXX@\nYY@@\n";
        let (table, warnings) = GlyphTable::from_bytes_with_warnings(font);
        assert_eq!(table.height(), 100_000_000);
        assert_eq!(table.get('!').unwrap().rows(), ["XX", "YY"]);
        assert_eq!(
            warnings,
            [FontWarning::ShortGlyph {
                codepoint: 33,
                rows: 2,
                height: 100_000_000
            }]
        );
        assert_eq!(table.render(" ! ").unwrap(), "  XX\n  YY");
    }

    #[test]
    fn crlf_line_endings() {
        let table = GlyphTable::from_bytes(TWO_ROW.replace('\n', "\r\n"));
        assert_eq!(table.get('!').unwrap().rows(), ["XX", "YY"]);
    }
}
