//! Backslash-escape resolution for N-Quads string content.
//!
//! The grammar allows `ECHAR` escapes (`\t`, `\n`, ...) and `UCHAR`
//! numeric escapes (`\uXXXX`, `\UXXXXXXXX`) inside quoted literals and
//! IRIs. Malformed escapes are reported as error values so hostile or
//! corrupted input cannot abort the caller.

use std::borrow::Cow;

/// Resolve backslash escapes in `raw`.
///
/// `escaped` is a hint from the scanner: when false the input contains no
/// backslash and is returned borrowed, without allocating. Pure and
/// reentrant; safe to call concurrently on independent inputs.
pub(crate) fn unescape(raw: &str, escaped: bool) -> Result<Cow<'_, str>, String> {
    if !escaped {
        return Ok(Cow::Borrowed(raw));
    }
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('b') => out.push('\u{0008}'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{000C}'),
            Some('"') => out.push('"'),
            Some('\'') => out.push('\''),
            Some('\\') => out.push('\\'),
            Some('u') => out.push(hex_escape(&mut chars, 4)?),
            Some('U') => out.push(hex_escape(&mut chars, 8)?),
            Some(c) => return Err(format!("unknown escape sequence '\\{}'", c)),
            None => return Err("trailing backslash".to_string()),
        }
    }
    Ok(Cow::Owned(out))
}

/// Consume exactly `digits` hex digits and return the scalar they encode.
fn hex_escape(chars: &mut std::str::Chars<'_>, digits: u32) -> Result<char, String> {
    let selector = if digits == 4 { 'u' } else { 'U' };
    let mut value: u32 = 0;
    for _ in 0..digits {
        let d = chars.next().and_then(|c| c.to_digit(16)).ok_or_else(|| {
            format!("'\\{}' escape requires exactly {} hex digits", selector, digits)
        })?;
        value = value << 4 | d;
    }
    char::from_u32(value)
        .ok_or_else(|| format!("'\\{}{:0w$X}' is not a Unicode scalar value", selector, value, w = digits as usize))
}
