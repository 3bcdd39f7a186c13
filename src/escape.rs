//! JavaScript string literal escaping for default values.
//!
//! Output is byte compatible with Go's `template.JSEscapeString`, which
//! earlier revisions of the customization document were rendered with.

use unicode_general_category::{GeneralCategory, get_general_category};

/// Escapes value for use inside a JavaScript string literal.
///
/// Quotes and backslashes are backslash escaped. `<`, `>`, `&`, `=`, ASCII
/// control characters and non printable characters become `\uXXXX` escapes
/// with uppercase hex digits. Printable non ASCII characters pass through.
///
/// # Arguments
///
/// * `value`: Raw text
///
/// # Returns
///
/// Escaped text containing no quotes, angle brackets or ampersands
pub fn js_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '"' => escaped.push_str("\\\""),
            '<' | '>' | '&' | '=' => push_unicode_escape(&mut escaped, c),
            c if c < ' ' => push_unicode_escape(&mut escaped, c),
            c if c.is_ascii() || is_printable(c) => escaped.push(c),
            c => push_unicode_escape(&mut escaped, c),
        }
    }

    escaped
}

fn push_unicode_escape(out: &mut String, c: char) {
    out.push_str(&format!("\\u{:04X}", u32::from(c)));
}

/// Mirrors Go's `unicode.IsPrint` for non ASCII characters.
///
/// Only letters, marks, numbers, punctuation and symbols are printable.
/// Separators, control, format, private use and unassigned code points
/// are not.
fn is_printable(c: char) -> bool {
    use GeneralCategory::*;

    matches!(
        get_general_category(c),
        UppercaseLetter
            | LowercaseLetter
            | TitlecaseLetter
            | ModifierLetter
            | OtherLetter
            | NonspacingMark
            | SpacingMark
            | EnclosingMark
            | DecimalNumber
            | LetterNumber
            | OtherNumber
            | ConnectorPunctuation
            | DashPunctuation
            | OpenPunctuation
            | ClosePunctuation
            | InitialPunctuation
            | FinalPunctuation
            | OtherPunctuation
            | MathSymbol
            | CurrencySymbol
            | ModifierSymbol
            | OtherSymbol
    )
}
