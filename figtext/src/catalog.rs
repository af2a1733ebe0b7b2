//! Bundled fonts, by name
//!
//! Fonts are addressed by their file stem (`block` for `block.flf`). Without the `fonts` feature
//! the catalog is empty.

#[cfg(feature = "fonts")]
pub use figtext_fonts::FontFile;

/// The extension of font files, stripped from their names.
pub const EXTENSION: &str = "flf";

/// Names of all available fonts, in the order they are bundled.
#[must_use]
pub fn list_names() -> Vec<&'static str> {
    #[cfg(feature = "fonts")]
    {
        FontFile::ALL.into_iter().map(|font| font.name()).collect()
    }
    #[cfg(not(feature = "fonts"))]
    {
        Vec::new()
    }
}

/// The contents of the font called `name`, if there is one.
#[must_use]
pub fn resource(name: &str) -> Option<&'static [u8]> {
    #[cfg(feature = "fonts")]
    {
        FontFile::from_name(name).map(|font| font.as_bytes())
    }
    #[cfg(not(feature = "fonts"))]
    {
        let _ = name;
        None
    }
}
