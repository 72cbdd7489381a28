//! The [`Path`] type, its component [`Cursor`] and iterators, and the character rules which decide
//! what text can become a path.

mod display;
mod iter;
mod path;
mod validity;

mod tests;

pub use iter::*;
pub use path::*;
pub use validity::{
    MAIN_SEPARATOR, SEPARATORS, is_invalid_file_name_symbol, is_invalid_path_symbol, is_separator,
    validate_file_name,
};
