//! A crate for parsing FIGlet-style `.flf` fonts and rendering text with them as block letters.
//!
//! Glyphs are placed side by side without kerning or smushing. Trailing blanks are trimmed from
//! every output row and blank rows are left out.
//!
//! # Example
//!
//! ```
//! let rendered = figtext::ascii_art("figtext", "thin").unwrap();
//! let expected = concat!(
//! r"  *  *       *           *", "\n",
//! r" *       ** ***  ** * * ***", "\n",
//! r"***  *  * *  *  * *  *   *", "\n",
//! r" *   *   **  *  **   *   *", "\n",
//! r" *   *  **   **  ** * *  **",
//! );
//! assert_eq!(rendered, expected);
//! ```
//!
//! Fonts are parsed afresh for every call; nothing is cached.
//!
//! ## Feature flags
//!
//! - `fonts` (default): bundles the fonts of the `figtext-fonts` package, listed by
//!   [`catalog::list_names`] and loaded by name with [`load`] and the printing commands.

pub mod catalog;
mod commands;
pub mod font;
pub mod render;
mod str_ext;

pub use commands::{
    DEFAULT_FONT, DEFAULT_TEXT, Error, ascii_art, echo, echo_all, echo_all_to, echo_to, list,
    list_to, load,
};
