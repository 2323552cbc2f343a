//! nquads — decoder for the RDF 1.1 N-Quads line-based syntax for RDF
//! datasets, as defined by <http://www.w3.org/TR/n-quads/>.
//!
//! The crate has two entry points: [`parse`] handles a single line of
//! text, and [`Decoder`] pulls quads out of any byte source, skipping
//! blank lines and `#` comments along the way. Backslash escapes inside
//! IRIs and quoted literals are resolved to their Unicode values.
//!
//! Parse one line:
//!
//! ```
//! use nquads::{parse, Term};
//!
//! let quad = parse(r#"<http://a> <http://b> "c"@en ."#)
//!     .expect("valid line")
//!     .expect("line defines a statement");
//! assert_eq!(quad.predicate, Term::Iri("http://b".into()));
//! assert!(quad.graph.is_none());
//! ```
//!
//! Decode a stream:
//!
//! ```
//! use nquads::Decoder;
//!
//! let input = "<http://a> <http://b> <http://c> <http://g> .\n# comment\n";
//! let mut dec = Decoder::new(input.as_bytes());
//! while let Some(quad) = dec.next_quad().expect("decode") {
//!     println!("{}", quad);
//! }
//! ```
//!
//! With the `oxigraph` feature enabled, [`Quad::to_oxigraph`] converts
//! parsed quads into `oxigraph` model values for insertion into a store.

pub mod decoder;
mod escape;
pub mod error;
pub mod model;
pub mod parser;

pub use decoder::Decoder;
pub use error::NqError;
pub use model::{Quad, Term};
pub use parser::parse;

/// Crate-level result type using the decoder error.
pub type Result<T> = std::result::Result<T, NqError>;
