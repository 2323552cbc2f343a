//! Line-level N-Quads parsing.
//!
//! [`parse`] is the standalone entry point for a single line of text;
//! the streaming [`Decoder`](crate::Decoder) calls it once per logical
//! line. Scanning uses a byte-position cursor over the line and slices
//! term content back out of the input, so unescaped content is never
//! copied twice.

use crate::error::NqError;
use crate::escape::unescape;
use crate::model::{Quad, Term};

/// Parse one line of N-Quads text.
///
/// Returns `Ok(Some(quad))` for a statement, `Ok(None)` for a line that
/// defines no statement (blank, or a comment after trimming) — callers
/// should treat that as "skip this line", not as end of input. A
/// trailing line terminator is tolerated, so lines may be handed over
/// as read. Syntax errors carry the raw line.
pub fn parse(line: &str) -> Result<Option<Quad>, NqError> {
    let text = line.trim_end_matches(|c| c == '\r' || c == '\n');
    let mut cur = Cursor::new(text);
    cur.skip_ws();
    if cur.at_end() || cur.peek() == Some(b'#') {
        return Ok(None);
    }
    match statement(&mut cur) {
        Ok(quad) => Ok(Some(quad)),
        Err(message) => Err(NqError::Syntax {
            message,
            line: line.to_string(),
        }),
    }
}

/// `subject predicate object [graph] '.' [#comment]`
fn statement(cur: &mut Cursor<'_>) -> Result<Quad, String> {
    let subject = match cur.term()? {
        Term::Literal { .. } => return Err("subject must be an IRI or blank node".to_string()),
        t => t,
    };
    cur.skip_ws();
    let predicate = match cur.term()? {
        t @ Term::Iri(_) => t,
        Term::BlankNode(_) => return Err("predicate must be an IRI".to_string()),
        Term::Literal { .. } => return Err("predicate must be an IRI".to_string()),
    };
    cur.skip_ws();
    let object = cur.term()?;
    cur.skip_ws();
    let graph = if cur.peek() == Some(b'.') {
        None
    } else {
        match cur.term()? {
            Term::Literal { .. } => {
                return Err("graph label must be an IRI or blank node".to_string())
            }
            t => Some(t),
        }
    };
    cur.skip_ws();
    if !cur.eat(b'.') {
        return Err("expected '.' at end of statement".to_string());
    }
    cur.skip_ws();
    if !(cur.at_end() || cur.peek() == Some(b'#')) {
        return Err("unexpected content after '.'".to_string());
    }
    Ok(Quad {
        subject,
        predicate,
        object,
        graph,
    })
}

/// Bounds-checked scanning cursor over one line.
///
/// Structure is recognized on bytes (all delimiters are ASCII); term
/// content is sliced out of the line as UTF-8, advancing by whole
/// characters so positions stay on char boundaries.
struct Cursor<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(line: &'a str) -> Self {
        Cursor { line, pos: 0 }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.line.len()
    }

    fn peek(&self) -> Option<u8> {
        self.line.as_bytes().get(self.pos).copied()
    }

    /// Advance one byte. Only valid after peeking an ASCII byte.
    fn bump(&mut self) {
        self.pos += 1;
    }

    /// Advance one character, whatever its width.
    fn bump_char(&mut self) {
        if let Some(c) = self.line[self.pos..].chars().next() {
            self.pos += c.len_utf8();
        }
    }

    fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(b' ') | Some(b'\t')) {
            self.bump();
        }
    }

    /// Dispatch on the leading byte of a term.
    fn term(&mut self) -> Result<Term, String> {
        match self.peek() {
            Some(b'<') => Ok(Term::Iri(self.iri()?)),
            Some(b'_') => self.blank_node(),
            Some(b'"') => self.literal(),
            Some(_) => {
                // report the whole character, not its first byte
                let c = self.line[self.pos..].chars().next().unwrap_or('?');
                Err(format!("expected a term, found '{}'", c))
            }
            None => Err("unexpected end of line, expected a term".to_string()),
        }
    }

    /// `<` ... `>` with escapes resolved.
    fn iri(&mut self) -> Result<String, String> {
        self.bump(); // '<'
        let start = self.pos;
        let mut escaped = false;
        loop {
            match self.peek() {
                Some(b'>') => break,
                Some(b'\\') => {
                    escaped = true;
                    self.bump();
                    if self.at_end() {
                        return Err("unterminated IRI".to_string());
                    }
                    self.bump_char();
                }
                Some(b' ') | Some(b'\t') => {
                    return Err("unescaped whitespace inside IRI".to_string())
                }
                Some(_) => self.bump_char(),
                None => return Err("unterminated IRI".to_string()),
            }
        }
        let raw = &self.line[start..self.pos];
        self.bump(); // '>'
        Ok(unescape(raw, escaped)?.into_owned())
    }

    /// `_:` followed by a name token.
    fn blank_node(&mut self) -> Result<Term, String> {
        self.bump(); // '_'
        if !self.eat(b':') {
            return Err("expected ':' after '_' in blank node label".to_string());
        }
        let start = self.pos;
        while let Some(c) = self.line[self.pos..].chars().next() {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }
        if self.pos == start {
            return Err("empty blank node label".to_string());
        }
        Ok(Term::BlankNode(self.line[start..self.pos].to_string()))
    }

    /// `"` ... `"` with an optional `@lang` or `^^<datatype>` suffix.
    fn literal(&mut self) -> Result<Term, String> {
        self.bump(); // opening '"'
        let start = self.pos;
        let mut escaped = false;
        loop {
            match self.peek() {
                Some(b'"') => break,
                Some(b'\\') => {
                    escaped = true;
                    self.bump();
                    if self.at_end() {
                        return Err("unterminated literal".to_string());
                    }
                    self.bump_char();
                }
                Some(_) => self.bump_char(),
                None => return Err("unterminated literal".to_string()),
            }
        }
        let lex = unescape(&self.line[start..self.pos], escaped)?.into_owned();
        self.bump(); // closing '"'

        let mut dt = None;
        let mut lang = None;
        if self.eat(b'@') {
            lang = Some(self.language_tag()?);
        } else if self.peek() == Some(b'^') {
            self.bump();
            if !self.eat(b'^') {
                return Err("expected '^^' before datatype IRI".to_string());
            }
            if self.peek() != Some(b'<') {
                return Err("expected IRI after '^^'".to_string());
            }
            dt = Some(self.iri()?);
        }
        // the two suffixes are mutually exclusive
        if matches!(self.peek(), Some(b'@') | Some(b'^')) {
            return Err("literal cannot carry both a language tag and a datatype".to_string());
        }
        Ok(Term::Literal { lex, dt, lang })
    }

    /// `[a-zA-Z]` then letters, digits, and `-`.
    fn language_tag(&mut self) -> Result<String, String> {
        let start = self.pos;
        if !matches!(self.peek(), Some(c) if c.is_ascii_alphabetic()) {
            return Err("language tag must start with a letter".to_string());
        }
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == b'-') {
            self.bump();
        }
        Ok(self.line[start..self.pos].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::parse;
    use crate::model::Term;

    #[test]
    fn terms_need_no_separating_whitespace() {
        let q = parse(r#"<http://a><http://b>"c"."#)
            .expect("parse")
            .expect("statement");
        assert_eq!(q.subject, Term::Iri("http://a".into()));
        assert_eq!(
            q.object,
            Term::Literal {
                lex: "c".into(),
                dt: None,
                lang: None
            }
        );
    }

    #[test]
    fn tabs_between_terms() {
        let q = parse("<http://a>\t<http://b>\t<http://c>\t.")
            .expect("parse")
            .expect("statement");
        assert_eq!(q.predicate, Term::Iri("http://b".into()));
    }

    #[test]
    fn syntax_error_carries_line() {
        let line = "<http://a> <http://b> ";
        match parse(line) {
            Err(crate::NqError::Syntax { line: got, .. }) => assert_eq!(got, line),
            other => panic!("expected syntax error, got {:?}", other),
        }
    }
}
