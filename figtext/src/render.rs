//! Renderer
//!
//! Text is rendered by placing glyphs side by side with no overlap. Each output row is the
//! concatenation of that row of every glyph, with trailing blanks (`' '` only) removed; rows left
//! empty are dropped entirely, so the output never starts or ends with an empty line. Other
//! whitespace, such as tabs or no-break spaces, counts as content and keeps its row.

use thiserror::Error;

use crate::font::{Glyph, GlyphTable};
use crate::str_ext::BStrExt as _;

/// The main type for rendering
///
/// ```
/// # use figtext::font::GlyphTable;
/// # use figtext::render::Renderer;
/// let table = GlyphTable::from_bytes("flf2a$ 2 2 4 0 0\n  @\n  @@\n/\\@\n\\/@@\n");
/// let rendered: String = Renderer::new(&table).render("! !").unwrap();
/// assert_eq!(rendered, "/\\  /\\\n\\/  \\/");
/// ```
#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'table> {
    table: &'table GlyphTable,
}

impl<'table> Renderer<'table> {
    /// Creates a new renderer for `table`.
    pub const fn new(table: &'table GlyphTable) -> Self {
        Self { table }
    }

    /// Renders the given string.
    ///
    /// Every character is looked up before anything is composed, so an unsupported character
    /// produces no output at all. A table of height 0 renders every string, supported or not, as
    /// the empty string.
    ///
    /// Glyphs with fewer rows than the table height contribute nothing to the missing rows.
    ///
    /// The output type can be:
    /// * [`Vec<u8>`]: keeps the glyph bytes as they are in the font;
    /// * [`String`]: a convenience wrapper using [`String::from_utf8_lossy`] after rendering as
    ///   [`Vec<u8>`].
    ///
    /// # Errors
    /// [`RenderError::UnsupportedCharacter`] for the first character of `text` without a glyph.
    pub fn render<Output: RenderOutput>(self, text: &str) -> Result<Output, RenderError> {
        self.render_bytes(text).map(Output::from_bytes)
    }

    fn render_bytes(self, text: &str) -> Result<Vec<u8>, RenderError> {
        if self.table.height() == 0 {
            return Ok(Vec::new());
        }
        let glyphs = text
            .chars()
            .map(|c| {
                self.table
                    .get(c)
                    .ok_or(RenderError::UnsupportedCharacter(c))
            })
            .collect::<Result<Vec<_>, _>>()?;
        // Rows past the tallest drawn glyph hold only space rows, which trim to nothing.
        let drawn_rows = glyphs
            .iter()
            .map(|glyph| glyph.rows().len())
            .max()
            .unwrap_or(0)
            .min(self.table.height());
        let rows = (0..drawn_rows)
            .map(|index| Self::compose_row(&glyphs, index))
            .filter_map(|row| {
                let trimmed = row.trim_end_blanks();
                (!trimmed.is_empty()).then(|| trimmed.to_owned())
            });
        Ok(bstr::join(b"\n", rows))
    }

    fn compose_row(glyphs: &[&Glyph], index: usize) -> Vec<u8> {
        bstr::concat(glyphs.iter().filter_map(|glyph| glyph.row(index)))
    }
}

/// An error in rendering a string
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    /// The character is outside the range of characters covered by the font.
    #[error("no glyph for {0:?} in this font")]
    UnsupportedCharacter(char),
}

/// Trait to generically bound the renderer output
///
/// Implementations are provided for [`Vec<u8>`] and [`String`]. Effectively a version of
/// [`From<Vec<u8>>`].
pub trait RenderOutput {
    /// Convert the byte level rendered output.
    fn from_bytes(bytes: Vec<u8>) -> Self;
}

impl RenderOutput for Vec<u8> {
    fn from_bytes(bytes: Vec<u8>) -> Self {
        bytes
    }
}

impl RenderOutput for String {
    fn from_bytes(bytes: Vec<u8>) -> Self {
        Self::from_utf8_lossy(&bytes).into_owned()
    }
}
