#![warn(missing_docs)]

//! This crate contains the in-memory statement model used when evaluating
//! access control documents.
//!
//! Documents are read as a [Graph] of subject-predicate-object [Statement]s.
//! The [parse_n_triples] function turns N-Triples text into a [Graph]:
//!
//! ```rust
//! use pod_rdf::{Term, parse_n_triples, vocabulary::{acl, rdf}};
//!
//! let graph = parse_n_triples(
//!     "<https://pod.example/.acl#public> \
//!      <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> \
//!      <http://www.w3.org/ns/auth/acl#Authorization> .",
//! )
//! .unwrap();
//!
//! let rules = graph.subjects(&Term::iri(rdf::TYPE), &Term::iri(acl::AUTHORIZATION));
//! assert_eq!(rules.len(), 1);
//! ```

mod error;
pub use error::*;

mod term;
pub use term::*;

mod graph;
pub use graph::*;

mod syntax;
pub use syntax::*;

pub mod vocabulary;
