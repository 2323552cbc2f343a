//! Streaming decoder: pull quads out of a buffered byte source.

use std::io::{BufRead, BufReader, Read};

use crate::error::NqError;
use crate::model::Quad;
use crate::parser;
use crate::Result;

/// Streaming N-Quads decoder over any byte source.
///
/// Reads one logical line at a time, skips blank and comment lines, and
/// yields one [`Quad`] per valid statement. The line buffer is owned by
/// the decoder and reused across calls (capacity retained, content
/// cleared), and lines of any length are handled.
///
/// The decoder is fused: after end of input or an error it stops
/// advancing, and every later call returns `Ok(None)`. A caller that
/// wants to continue past a bad line opens a new decoder on the
/// remaining input.
///
/// ```
/// use nquads::Decoder;
///
/// let mut dec = Decoder::new("<http://s> <http://p> _:o .\n".as_bytes());
/// let quad = dec.next_quad().expect("decode").expect("one statement");
/// assert!(quad.graph.is_none());
/// assert!(dec.next_quad().expect("decode").is_none());
/// ```
pub struct Decoder<R> {
    reader: BufReader<R>,
    line: Vec<u8>,
    done: bool,
}

impl<R: Read> Decoder<R> {
    /// Create a decoder reading N-Quads text from `source`.
    pub fn new(source: R) -> Self {
        Decoder {
            reader: BufReader::new(source),
            line: Vec::new(),
            done: false,
        }
    }

    /// Return the next quad, or `Ok(None)` at end of input.
    ///
    /// I/O errors are propagated verbatim; syntax errors carry the raw
    /// offending line. Either kind exhausts the decoder.
    pub fn next_quad(&mut self) -> Result<Option<Quad>> {
        if self.done {
            return Ok(None);
        }
        match self.advance() {
            Ok(Some(quad)) => Ok(Some(quad)),
            Ok(None) => {
                self.done = true;
                Ok(None)
            }
            Err(e) => {
                self.done = true;
                Err(e)
            }
        }
    }

    fn advance(&mut self) -> Result<Option<Quad>> {
        // loop rather than recurse: a long run of blank or comment lines
        // must not grow the stack
        loop {
            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                return Ok(None);
            }
            let text = match std::str::from_utf8(&self.line) {
                Ok(text) => text,
                Err(_) => {
                    return Err(NqError::Syntax {
                        message: "line is not valid UTF-8".to_string(),
                        line: String::from_utf8_lossy(&self.line).into_owned(),
                    })
                }
            };
            let trimmed = text.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            match parser::parse(trimmed)? {
                Some(quad) => return Ok(Some(quad)),
                None => continue,
            }
        }
    }

    /// Release and return the underlying byte source.
    pub fn into_inner(self) -> R {
        self.reader.into_inner()
    }
}

impl<R: Read> Iterator for Decoder<R> {
    type Item = Result<Quad>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_quad().transpose()
    }
}
