//! Collection of `.flf` fonts bundled with the [`figtext`](https://crates.io/crates/figtext) crate.
//!
//! Every file under `fonts/` is listed once in the `fonts!` invocation below; the order of that
//! list is the order in which the catalog reports the fonts.

macro_rules! fonts {
    ($($name:ident => $file_name:expr,)*) => {

        /// Bundled fonts
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        #[non_exhaustive]
        pub enum FontFile {
            $(
                #[doc = concat!("Font `", $file_name, ".flf`")]
                $name,
            )*
        }

        impl FontFile {
            /// An array containing all the variants
            pub const ALL: [Self; const{0 $(+ {_ = $file_name; 1} )*}] = [$(Self::$name),*];

            /// The raw contents of the font file
            #[must_use]
            pub const fn as_bytes(&self) -> &'static [u8] {
                match self {
                    $(Self::$name => include_bytes!(concat!("../fonts/", $file_name, ".flf")),)*
                }
            }

            /// The file stem, ie the file name without the `.flf` extension
            #[must_use]
            pub const fn name(&self) -> &'static str {
                match self {
                    $(Self::$name => $file_name,)*
                }
            }

            /// Match a font name (file stem) to a bundled font
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($file_name => Some(Self::$name),)*
                    _ => None,
                }
            }
        }

    };
}

fonts! {
    Block => "block",
    Bracket => "bracket",
    Line => "line",
    Thin => "thin",
}
