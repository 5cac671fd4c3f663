#![warn(missing_docs)]

//! This crate decides which access modes a set of [Credentials] holds on the
//! resources of a pod.
//!
//! A deployment configures exactly one [PermissionResolver]:
//!
//! - [WebAclResolver] follows Web Access Control, where the nearest
//!   ancestor's access control document governs a resource
//! - [AcpResolver] follows Access Control Policy, where policies accumulate
//!   across every ancestor's access control resource
//! - [AllStaticResolver] grants the same permission everywhere
//!
//! [UnionPermissionResolver] combines several of them. The resulting
//! [PermissionMap] is checked against the modes a request needs by
//! [PermissionBasedAuthorizer]:
//!
//! ```rust
//! use std::collections::BTreeSet;
//! use pod_authorization::{
//!     AccessMap, AccessMode, CredentialGroup, Credentials, Permission,
//!     PermissionBasedAuthorizer, PermissionMap, PermissionSet,
//! };
//! use pod_storage::ResourceIdentifier;
//!
//! let target = ResourceIdentifier::from("https://pod.example/notes");
//! let requested = AccessMap::from([(target.clone(), BTreeSet::from([AccessMode::Append]))]);
//!
//! let mut permissions = PermissionSet::default();
//! permissions.set(CredentialGroup::Public, Permission::from_modes(&[AccessMode::Write]));
//! let available = PermissionMap::from([(target, permissions)]);
//!
//! // Write implies append
//! assert!(PermissionBasedAuthorizer
//!     .authorize(&Credentials::public(), &requested, &available)
//!     .is_ok());
//! ```

mod error;
pub use error::*;

mod permission;
pub use permission::*;

mod credentials;
pub use credentials::*;

mod resolver;
pub use resolver::*;

mod cache;
pub use cache::*;

mod acl;
pub use acl::*;

mod acp;
pub use acp::*;

mod compose;
pub use compose::*;

mod authorizer;
pub use authorizer::*;

mod config;
pub use config::*;
