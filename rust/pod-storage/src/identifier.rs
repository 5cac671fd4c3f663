use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A [ResourceIdentifier] names a resource, usually by its URL.
///
/// Identifiers are compared by their exact path string: `https://pod/a` and
/// `https://pod/a/` name different resources.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct ResourceIdentifier {
    path: String,
}

impl ResourceIdentifier {
    /// Wrap the given path
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// The full path of the resource
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Containers are identified by a trailing slash
    pub fn is_container(&self) -> bool {
        self.path.ends_with('/')
    }
}

impl Display for ResourceIdentifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path)
    }
}

impl From<&str> for ResourceIdentifier {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ResourceIdentifier {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<ResourceIdentifier> for String {
    fn from(value: ResourceIdentifier) -> Self {
        value.path
    }
}

impl AsRef<str> for ResourceIdentifier {
    fn as_ref(&self) -> &str {
        &self.path
    }
}
