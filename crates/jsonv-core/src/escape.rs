//! JSON string escaping.

use std::fmt::{self, Write};

/// Write `s` as a double-quoted JSON string literal.
///
/// Quote, backslash and every control character below U+0020 are escaped;
/// the short forms (`\n`, `\t`, ...) are used where JSON defines one and
/// `\u00XX` otherwise. Everything else, including non-ASCII text, is written
/// as-is.
pub fn write_escaped<W: Write + ?Sized>(out: &mut W, s: &str) -> fmt::Result {
    out.write_char('"')?;
    let mut start = 0;
    for (i, ch) in s.char_indices() {
        let short = match ch {
            '"' => "\\\"",
            '\\' => "\\\\",
            '\n' => "\\n",
            '\r' => "\\r",
            '\t' => "\\t",
            '\u{08}' => "\\b",
            '\u{0c}' => "\\f",
            c if c < '\u{20}' => "",
            _ => continue,
        };
        out.write_str(&s[start..i])?;
        if short.is_empty() {
            write!(out, "\\u{:04x}", u32::from(ch))?;
        } else {
            out.write_str(short)?;
        }
        start = i + ch.len_utf8();
    }
    out.write_str(&s[start..])?;
    out.write_char('"')
}

/// `s` as a double-quoted JSON string literal.
pub fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    // Writing to a String cannot fail.
    let _ = write_escaped(&mut out, s);
    out
}
