use std::io::{self, Write};

use log::{debug, warn};
use thiserror::Error;

use crate::catalog;
use crate::font::GlyphTable;
use crate::render::RenderError;

/// Font used when no font name is given.
pub const DEFAULT_FONT: &str = "block";

/// Text used by [`echo_all`] when no text is given.
pub const DEFAULT_TEXT: &str = "ascii-art";

/// An error from one of the printing commands
#[derive(Debug, Error)]
pub enum Error {
    /// The text could not be rendered with the chosen font.
    #[error(transparent)]
    Render(#[from] RenderError),
    /// Writing the output failed.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Parses the font called `font_name`, or [`DEFAULT_FONT`] if the name is empty.
///
/// The font is parsed afresh on every call. An unknown name gives the same table as an empty
/// file: height 0, rendering everything as the empty string.
#[must_use]
pub fn load(font_name: &str) -> GlyphTable {
    let name = if font_name.is_empty() {
        DEFAULT_FONT
    } else {
        font_name
    };
    let Some(bytes) = catalog::resource(name) else {
        warn!("no font named {name:?}, output will be empty");
        return GlyphTable::from_bytes(b"");
    };
    let (table, warnings) = GlyphTable::from_bytes_with_warnings(bytes);
    for warning in warnings {
        warn!("font {name}: {warning}");
    }
    debug!(
        "parsed font {name}: height {}, {} glyphs",
        table.height(),
        table.glyphs().len()
    );
    table
}

/// Renders `text` with the font called `font_name` (or [`DEFAULT_FONT`] if empty).
///
/// ```
/// let art = figtext::ascii_art("Hi!", "block").unwrap();
/// let expected = concat!(
///     "##  ##    ##      ##\n",
///     "##  ##            ##\n",
///     "######    ##      ##\n",
///     "##  ##    ##\n",
///     "##  ##    ##      ##",
/// );
/// assert_eq!(art, expected);
/// ```
///
/// # Errors
/// [`RenderError::UnsupportedCharacter`] if `text` contains a character the font does not cover.
pub fn ascii_art(text: &str, font_name: &str) -> Result<String, RenderError> {
    load(font_name).render(text)
}

/// Renders `text` like [`ascii_art`] and prints it to standard output, followed by a newline.
///
/// # Errors
/// See [`Error`].
pub fn echo(text: &str, font_name: &str) -> Result<(), Error> {
    echo_to(&mut io::stdout().lock(), text, font_name)
}

/// Like [`echo`], writing to `out` instead of standard output.
///
/// # Errors
/// See [`Error`].
pub fn echo_to(out: &mut impl Write, text: &str, font_name: &str) -> Result<(), Error> {
    let art = ascii_art(text, font_name)?;
    writeln!(out, "{art}")?;
    Ok(())
}

/// Prints `text` (or [`DEFAULT_TEXT`] if empty) in every font of the catalog, each preceded by a
/// `Font: <name>` line.
///
/// # Errors
/// See [`Error`]. Stops at the first font that fails, before writing anything for that font.
pub fn echo_all(text: &str) -> Result<(), Error> {
    echo_all_to(&mut io::stdout().lock(), text)
}

/// Like [`echo_all`], writing to `out` instead of standard output.
///
/// # Errors
/// See [`Error`].
pub fn echo_all_to(out: &mut impl Write, text: &str) -> Result<(), Error> {
    let text = if text.is_empty() { DEFAULT_TEXT } else { text };
    for name in catalog::list_names() {
        let art = ascii_art(text, name)?;
        writeln!(out, "\nFont: {name}\n{art}")?;
    }
    Ok(())
}

/// Prints the name of every font in the catalog, one per line.
///
/// # Errors
/// If writing to standard output fails.
pub fn list() -> io::Result<()> {
    list_to(&mut io::stdout().lock())
}

/// Like [`list`], writing to `out` instead of standard output.
///
/// # Errors
/// If writing to `out` fails.
pub fn list_to(out: &mut impl Write) -> io::Result<()> {
    for name in catalog::list_names() {
        writeln!(out, "{name}")?;
    }
    Ok(())
}
