//! String conversion utilities.

/// Section sign used by the host for formatting codes.
pub const COLOR_CHAR: char = '§';

const COLOR_CODES: &str = "0123456789AaBbCcDdEeFfKkLlMmNnOoRr";

/// Converts an empty string to `None`, otherwise returns `Some(value)`.
///
/// # Examples
///
/// ```
/// use warpsigns_domain::common::none_if_empty;
///
/// assert_eq!(none_if_empty("bskyblock."), Some("bskyblock."));
/// assert_eq!(none_if_empty(""), None);
/// ```
pub fn none_if_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Translates `alt`-prefixed formatting codes (e.g. `&a`) into host codes (`§a`).
///
/// Only an `alt` character directly followed by a known code character is
/// translated; the code character is lowercased. Anything else is left as-is.
///
/// # Examples
///
/// ```
/// use warpsigns_domain::common::translate_color_codes;
///
/// assert_eq!(translate_color_codes('&', "&fHello &Zworld"), "§fHello &Zworld");
/// ```
pub fn translate_color_codes(alt: char, text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(&next) if c == alt && COLOR_CODES.contains(next) => {
                out.push(COLOR_CHAR);
                out.push(next.to_ascii_lowercase());
                chars.next();
            }
            _ => out.push(c),
        }
    }
    out
}
