#![warn(missing_docs)]

//! This crate contains the storage-facing collaborators that permission
//! resolution depends on, expressed as traits with reference
//! implementations:
//!
//! - [IdentifierStrategy] describes the container hierarchy
//!   ([SingleRootIdentifierStrategy] for a single-root pod)
//! - [AuxiliaryStrategy] maps resources to their access control documents
//!   ([SuffixAuxiliaryStrategy] for `.acl`/`.acr` style naming)
//! - [StatementReader] reads documents as statements
//!   ([MemoryStatementStore], fronted by [MeasuredStatementReader] when reads
//!   need to be counted)
//!
//! ```rust
//! use pod_storage::{
//!     AuxiliaryStrategy, IdentifierStrategy, ResourceIdentifier,
//!     SingleRootIdentifierStrategy, SuffixAuxiliaryStrategy,
//! };
//!
//! let identifiers = SingleRootIdentifierStrategy::new("https://pod.example/").unwrap();
//! let acl = SuffixAuxiliaryStrategy::new(".acl");
//!
//! let target = ResourceIdentifier::from("https://pod.example/notes/today");
//! let parent = identifiers.get_parent_container(&target).unwrap();
//!
//! assert_eq!(parent.path(), "https://pod.example/notes/");
//! assert_eq!(
//!     acl.get_auxiliary_identifier(&parent).path(),
//!     "https://pod.example/notes/.acl"
//! );
//! ```

mod error;
pub use error::*;

mod identifier;
pub use identifier::*;

mod hierarchy;
pub use hierarchy::*;

mod auxiliary;
pub use auxiliary::*;

mod reader;
pub use reader::*;

#[cfg(any(test, feature = "helpers"))]
mod helpers;
#[cfg(any(test, feature = "helpers"))]
pub use helpers::*;
