use url::Url;

use crate::{ResourceIdentifier, StorageError};

/// An [IdentifierStrategy] describes how identifiers nest inside containers.
///
/// Every supported identifier other than a root has exactly one parent, so
/// repeatedly asking for parents always ends at a root.
pub trait IdentifierStrategy: Send + Sync {
    /// True if the identifier belongs to the hierarchy
    fn supports_identifier(&self, identifier: &ResourceIdentifier) -> bool;

    /// True if the identifier is the root of its hierarchy
    fn is_root_container(&self, identifier: &ResourceIdentifier) -> bool;

    /// The container holding the identifier; fails for roots and unsupported
    /// identifiers
    fn get_parent_container(
        &self,
        identifier: &ResourceIdentifier,
    ) -> Result<ResourceIdentifier, StorageError>;
}

/// An [IdentifierStrategy] where every identifier lives below a single base
/// URL, which is the one root container.
#[derive(Clone, Debug)]
pub struct SingleRootIdentifierStrategy {
    base_url: String,
}

impl SingleRootIdentifierStrategy {
    /// Create a strategy rooted at `base_url`. A trailing slash is added when
    /// missing.
    pub fn new(base_url: &str) -> Result<Self, StorageError> {
        let url = Url::parse(base_url)
            .map_err(|_| StorageError::Unsupported(ResourceIdentifier::from(base_url)))?;

        let mut base_url = String::from(url);
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(Self { base_url })
    }

    /// The root container of this hierarchy
    pub fn root(&self) -> ResourceIdentifier {
        ResourceIdentifier::new(self.base_url.clone())
    }
}

impl IdentifierStrategy for SingleRootIdentifierStrategy {
    fn supports_identifier(&self, identifier: &ResourceIdentifier) -> bool {
        identifier.path().starts_with(&self.base_url)
    }

    fn is_root_container(&self, identifier: &ResourceIdentifier) -> bool {
        identifier.path() == self.base_url
    }

    fn get_parent_container(
        &self,
        identifier: &ResourceIdentifier,
    ) -> Result<ResourceIdentifier, StorageError> {
        if !self.supports_identifier(identifier) {
            return Err(StorageError::Unsupported(identifier.clone()));
        }
        if self.is_root_container(identifier) {
            return Err(StorageError::RootContainer(identifier.clone()));
        }

        let path = identifier.path();
        let trimmed = path.strip_suffix('/').unwrap_or(path);
        let parent = match trimmed.rfind('/') {
            Some(index) if index + 1 >= self.base_url.len() => &trimmed[..=index],
            // Anything shallower than the base lands on the root
            _ => self.base_url.as_str(),
        };

        Ok(ResourceIdentifier::from(parent))
    }
}
