use crate::fs::InvalidArgumentError;

/// Every byte accepted as a separator when parsing a path. Both are treated as equivalent.
pub const SEPARATORS: &[u8] = b"/\\";

/// The separator inserted when joining two paths.
#[cfg(not(feature = "backslash-separator"))]
pub const MAIN_SEPARATOR: char = '/';

/// The separator inserted when joining two paths.
#[cfg(feature = "backslash-separator")]
pub const MAIN_SEPARATOR: char = '\\';

#[inline]
pub const fn is_separator(ch: char) -> bool {
    ch.is_ascii() && is_separator_byte(ch as u8)
}

pub(crate) const fn is_separator_byte(byte: u8) -> bool {
    let mut i = 0;
    while i < SEPARATORS.len() {
        if SEPARATORS[i] == byte {
            return true;
        }
        i += 1;
    }
    false
}

/// Returns true for characters which can't appear anywhere in a path: control characters and
/// `" < > |`.
pub const fn is_invalid_path_symbol(ch: char) -> bool {
    (ch as u32) < 32 || matches!(ch, '"' | '<' | '>' | '|')
}

/// Returns true for characters which can't appear in a single file name. This is stricter than
/// [`is_invalid_path_symbol`], also rejecting separators, `:`, `*` and `?`.
pub const fn is_invalid_file_name_symbol(ch: char) -> bool {
    is_invalid_path_symbol(ch) || is_separator(ch) || matches!(ch, ':' | '*' | '?')
}

fn find_invalid(value: &str, pred: fn(char) -> bool) -> Result<(), InvalidArgumentError> {
    match value.char_indices().find(|(_, ch)| pred(*ch)) {
        Some((index, symbol)) => Err(InvalidArgumentError { symbol, index }),
        None => Ok(()),
    }
}

pub(crate) fn validate(value: &str) -> Result<(), InvalidArgumentError> {
    find_invalid(value, is_invalid_path_symbol)
}

/// Checks that `name` can be used as a single component, before it is joined onto a path.
pub fn validate_file_name(name: &str) -> Result<(), InvalidArgumentError> {
    find_invalid(name, is_invalid_file_name_symbol)
}

/// Strips trailing separators, stopping once a single character remains so that a root made up of
/// one separator survives.
pub(crate) fn trim_trailing(value: &str) -> &str {
    let bytes = value.as_bytes();
    let mut end = bytes.len();

    while end > 1 && is_separator_byte(bytes[end - 1]) {
        end -= 1;
    }

    &value[..end]
}

pub(crate) fn trim_leading(value: &str) -> &str {
    value.trim_start_matches(is_separator)
}
