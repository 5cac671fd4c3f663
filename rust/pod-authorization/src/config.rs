use std::sync::Arc;

use pod_storage::{SingleRootIdentifierStrategy, StatementReader, SuffixAuxiliaryStrategy};
use serde::{Deserialize, Serialize};

use crate::{AcpResolver, AllStaticResolver, AuthorizationError, PermissionResolver, WebAclResolver};

fn acl_suffix() -> String {
    ".acl".to_owned()
}

fn acr_suffix() -> String {
    ".acr".to_owned()
}

/// Selects the one permission resolver a deployment uses.
///
/// ```rust
/// use pod_authorization::AuthorizationConfig;
///
/// let config = AuthorizationConfig::from_json(r#"{ "algorithm": "acp" }"#).unwrap();
/// assert_eq!(config, AuthorizationConfig::Acp { suffix: ".acr".into() });
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "lowercase")]
pub enum AuthorizationConfig {
    /// Web Access Control
    Acl {
        /// Suffix naming access control documents
        #[serde(default = "acl_suffix")]
        suffix: String,
    },

    /// Access Control Policy
    Acp {
        /// Suffix naming access control resources
        #[serde(default = "acr_suffix")]
        suffix: String,
    },

    /// The same permission everywhere
    Static {
        /// Grant every mode when true, nothing when false
        allow: bool,
    },
}

impl Default for AuthorizationConfig {
    fn default() -> Self {
        AuthorizationConfig::Acl {
            suffix: acl_suffix(),
        }
    }
}

impl AuthorizationConfig {
    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self, AuthorizationError> {
        serde_json::from_str(json).map_err(|error| AuthorizationError::Configuration(error.to_string()))
    }

    /// Build the configured resolver for a pod rooted at `base_url`, reading
    /// documents from `store`
    pub fn build(
        &self,
        base_url: &str,
        store: Arc<dyn StatementReader>,
    ) -> Result<Arc<dyn PermissionResolver>, AuthorizationError> {
        let identifiers = || {
            SingleRootIdentifierStrategy::new(base_url)
                .map(Arc::new)
                .map_err(|error| AuthorizationError::Configuration(error.to_string()))
        };

        let resolver: Arc<dyn PermissionResolver> = match self {
            AuthorizationConfig::Acl { suffix } => Arc::new(WebAclResolver::new(
                identifiers()?,
                Arc::new(SuffixAuxiliaryStrategy::new(suffix.as_str())),
                store,
            )),
            AuthorizationConfig::Acp { suffix } => Arc::new(AcpResolver::new(
                identifiers()?,
                Arc::new(SuffixAuxiliaryStrategy::new(suffix.as_str())),
                store,
            )),
            AuthorizationConfig::Static { allow: true } => Arc::new(AllStaticResolver::allow_all()),
            AuthorizationConfig::Static { allow: false } => Arc::new(AllStaticResolver::deny_all()),
        };

        tracing::debug!(config = ?self, %base_url, "Configured permission resolver");

        Ok(resolver)
    }
}
