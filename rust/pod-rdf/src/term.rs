use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A node in a [crate::Statement]: an IRI, a blank node or a literal.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    /// An absolute IRI, stored without the surrounding angle brackets
    Iri(String),
    /// A blank node, stored without the `_:` prefix
    BlankNode(String),
    /// A literal value
    Literal(Literal),
}

impl Term {
    /// Construct an IRI term
    pub fn iri(value: impl Into<String>) -> Self {
        Term::Iri(value.into())
    }

    /// Construct a blank node term
    pub fn blank(label: impl Into<String>) -> Self {
        Term::BlankNode(label.into())
    }

    /// Construct a plain string literal term
    pub fn literal(value: impl Into<String>) -> Self {
        Term::Literal(Literal::new(value))
    }

    /// The IRI of this term, if it is one
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// The lexical value of the term regardless of its kind
    pub fn value(&self) -> &str {
        match self {
            Term::Iri(value) | Term::BlankNode(value) => value,
            Term::Literal(literal) => &literal.value,
        }
    }

    /// True if this term names the given IRI
    pub fn is_iri(&self, iri: &str) -> bool {
        self.as_iri() == Some(iri)
    }
}

impl From<&str> for Term {
    fn from(value: &str) -> Self {
        Term::iri(value)
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{iri}>"),
            Term::BlankNode(label) => write!(f, "_:{label}"),
            Term::Literal(literal) => write!(f, "{literal}"),
        }
    }
}

/// A literal value with an optional language tag or datatype.
///
/// A literal never carries both; N-Triples does not allow it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    /// The lexical form, unescaped
    pub value: String,
    /// Language tag such as `en`
    pub language: Option<String>,
    /// Datatype IRI
    pub datatype: Option<String>,
}

impl Literal {
    /// A plain literal
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: None,
            datatype: None,
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"")?;
        for character in self.value.chars() {
            match character {
                '"' => write!(f, "\\\"")?,
                '\\' => write!(f, "\\\\")?,
                '\n' => write!(f, "\\n")?,
                '\r' => write!(f, "\\r")?,
                '\t' => write!(f, "\\t")?,
                other => write!(f, "{other}")?,
            }
        }
        write!(f, "\"")?;

        if let Some(language) = &self.language {
            write!(f, "@{language}")
        } else if let Some(datatype) = &self.datatype {
            write!(f, "^^<{datatype}>")
        } else {
            Ok(())
        }
    }
}
