pub mod color;
pub mod tag;
pub mod theme;

pub use color::{ColorRef, DEFAULT_FRAGMENT, palette_fragment, parse_custom_color};
pub use tag::Tag;
pub use theme::{ColorRole, ColorTheme, DEFAULT_TEXT_COLOR, ThemeConfiguration};
