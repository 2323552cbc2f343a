//! RDF term and quad values produced by the parser.
//!
//! `Display` emits the N-Quads lexical form, so encoding a parsed value
//! and parsing it again yields an equal value.

use std::fmt::{self, Write};

/// A single RDF term.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// IRI reference, stored without the surrounding `<` `>`.
    Iri(String),
    /// Blank node label, stored without the `_:` prefix.
    BlankNode(String),
    /// Literal with optional datatype or language tag (never both).
    Literal {
        /// Escape-decoded lexical content.
        lex: String,
        /// Datatype IRI, if any.
        dt: Option<String>,
        /// Language tag, if any.
        lang: Option<String>,
    },
}

impl Term {
    /// True for [`Term::Literal`].
    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal { .. })
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{}>", iri),
            Term::BlankNode(label) => write!(f, "_:{}", label),
            Term::Literal { lex, dt, lang } => {
                f.write_char('"')?;
                for c in lex.chars() {
                    match c {
                        '\\' => f.write_str(r"\\")?,
                        '"' => f.write_str(r#"\""#)?,
                        '\n' => f.write_str(r"\n")?,
                        '\r' => f.write_str(r"\r")?,
                        '\t' => f.write_str(r"\t")?,
                        c => f.write_char(c)?,
                    }
                }
                f.write_char('"')?;
                if let Some(lang) = lang {
                    write!(f, "@{}", lang)?;
                }
                if let Some(dt) = dt {
                    write!(f, "^^<{}>", dt)?;
                }
                Ok(())
            }
        }
    }
}

/// One parsed N-Quads statement.
///
/// The parser guarantees the subject is an IRI or blank node, the
/// predicate an IRI, and the graph label (when present) an IRI or blank
/// node. A missing graph label means the statement belongs to the
/// default graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Quad {
    /// Subject term.
    pub subject: Term,
    /// Predicate term.
    pub predicate: Term,
    /// Object term.
    pub object: Term,
    /// Graph label; `None` denotes the default graph.
    pub graph: Option<Term>,
}

impl fmt::Display for Quad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.graph {
            Some(g) => write!(f, "{} {} {} {} .", self.subject, self.predicate, self.object, g),
            None => write!(f, "{} {} {} .", self.subject, self.predicate, self.object),
        }
    }
}

#[cfg(feature = "oxigraph")]
mod convert {
    use super::{Quad, Term};
    use crate::error::NqError;
    use oxigraph::model::{BlankNode, GraphName, Literal, NamedNode, NamedOrBlankNode};

    impl Term {
        fn to_ox_named_or_blank(&self) -> Result<NamedOrBlankNode, NqError> {
            match self {
                Term::Iri(iri) => Ok(NamedNode::new(iri)
                    .map_err(|_| NqError::Invalid("IRI rejected by oxigraph"))?
                    .into()),
                Term::BlankNode(label) => Ok(BlankNode::new(label.clone())
                    .map_err(|_| NqError::Invalid("blank node label rejected by oxigraph"))?
                    .into()),
                Term::Literal { .. } => Err(NqError::Invalid("literal in node position")),
            }
        }

        fn to_ox_term(&self) -> Result<oxigraph::model::Term, NqError> {
            match self {
                Term::Iri(_) | Term::BlankNode(_) => Ok(match self.to_ox_named_or_blank()? {
                    NamedOrBlankNode::NamedNode(n) => n.into(),
                    NamedOrBlankNode::BlankNode(b) => b.into(),
                }),
                Term::Literal { lex, dt, lang } => {
                    if let Some(dt) = dt {
                        let dt = NamedNode::new(dt)
                            .map_err(|_| NqError::Invalid("datatype IRI rejected by oxigraph"))?;
                        Ok(Literal::new_typed_literal(lex.clone(), dt).into())
                    } else if let Some(lang) = lang {
                        Ok(Literal::new_language_tagged_literal(lex.clone(), lang)
                            .map_err(|_| NqError::Invalid("language tag rejected by oxigraph"))?
                            .into())
                    } else {
                        Ok(Literal::new_simple_literal(lex.clone()).into())
                    }
                }
            }
        }
    }

    impl Quad {
        /// Convert to an `oxigraph` quad for insertion into a store.
        ///
        /// Available with the `oxigraph` feature. A missing graph label
        /// maps to [`GraphName::DefaultGraph`].
        pub fn to_oxigraph(&self) -> Result<oxigraph::model::Quad, NqError> {
            let subject = self.subject.to_ox_named_or_blank()?;
            let predicate = match &self.predicate {
                Term::Iri(iri) => NamedNode::new(iri)
                    .map_err(|_| NqError::Invalid("predicate IRI rejected by oxigraph"))?,
                _ => return Err(NqError::Invalid("non-IRI predicate")),
            };
            let object = self.object.to_ox_term()?;
            let graph: GraphName = match &self.graph {
                None => GraphName::DefaultGraph,
                Some(g) => match g.to_ox_named_or_blank()? {
                    NamedOrBlankNode::NamedNode(n) => n.into(),
                    NamedOrBlankNode::BlankNode(b) => b.into(),
                },
            };
            Ok(oxigraph::model::Quad::new(subject, predicate, object, graph))
        }
    }
}
