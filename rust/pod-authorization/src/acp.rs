//! Access Control Policy.
//!
//! Every resource may have an access control resource (ACR). The ACR of the
//! target contributes the policies it links through `acp:accessControl`;
//! the ACR of every ancestor container contributes the policies it links
//! through `acp:memberAccessControl`. A missing ACR contributes nothing.
//!
//! The modes granted are the union of what satisfied policies allow, minus
//! the union of what satisfied policies deny.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use pod_storage::{AuxiliaryStrategy, IdentifierStrategy, ResourceIdentifier, StatementReader};

use crate::{
    AccessMap, Absent, AuthorizationError, Credentials, DocumentCache, Permission, PermissionMap,
    PermissionResolver, PermissionSet,
};

mod matcher;
mod policy;

pub use matcher::*;
pub use policy::*;

/// A [PermissionResolver] implementing Access Control Policy.
///
/// Policies do not distinguish public from agent access, so both credential
/// groups of every result hold the same permission.
#[derive(Clone)]
pub struct AcpResolver {
    identifiers: Arc<dyn IdentifierStrategy>,
    acr_strategy: Arc<dyn AuxiliaryStrategy>,
    reader: Arc<dyn StatementReader>,
}

impl AcpResolver {
    /// Create a resolver reading ACRs located by `acr_strategy` from `reader`
    pub fn new(
        identifiers: Arc<dyn IdentifierStrategy>,
        acr_strategy: Arc<dyn AuxiliaryStrategy>,
        reader: Arc<dyn StatementReader>,
    ) -> Self {
        Self {
            identifiers,
            acr_strategy,
            reader,
        }
    }

    /// Collect the policies governing `resource`, from its own ACR and the
    /// ACRs of all its ancestors.
    async fn applicable_policies(
        &self,
        resource: &ResourceIdentifier,
        cache: &mut DocumentCache,
        decoded: &mut HashMap<ResourceIdentifier, Arc<Vec<AccessControlResource>>>,
    ) -> Result<Vec<Policy>, AuthorizationError> {
        let mut policies = Vec::new();
        let mut current = resource.clone();

        loop {
            let document = self.acr_strategy.get_auxiliary_identifier(&current);
            let resources = match decoded.get(&document) {
                Some(resources) => resources.clone(),
                None => {
                    let graph = cache.load(self.reader.as_ref(), &document, Absent::Empty).await?;
                    let resources = Arc::new(access_control_resources(&graph));
                    decoded.insert(document.clone(), resources.clone());
                    resources
                }
            };

            let scope = if &current == resource {
                PolicyScope::Resource
            } else {
                PolicyScope::Member
            };
            for acr in resources.iter() {
                policies.extend(acr.policies(scope).cloned());
            }

            if self.identifiers.is_root_container(&current) {
                break;
            }
            current = self
                .identifiers
                .get_parent_container(&current)
                .map_err(AuthorizationError::Hierarchy)?;
        }

        Ok(policies)
    }
}

#[async_trait]
impl PermissionResolver for AcpResolver {
    async fn resolve(
        &self,
        credentials: &Credentials,
        requested: &AccessMap,
    ) -> Result<PermissionMap, AuthorizationError> {
        let mut cache = DocumentCache::default();
        let mut decoded = HashMap::new();
        let mut result = PermissionMap::new();
        let context = MatchContext::new(credentials);

        for target in requested.keys() {
            let is_acr = self.acr_strategy.is_auxiliary_identifier(target);
            let resource = if is_acr {
                self.acr_strategy
                    .get_subject_identifier(target)
                    .map_err(AuthorizationError::Hierarchy)?
            } else {
                target.clone()
            };

            let policies = self
                .applicable_policies(&resource, &mut cache, &mut decoded)
                .await?;
            let permission = Permission::from_modes(&allowed_modes(&policies, &context));

            // An ACR is writable by whoever controls its subject, and by no one else.
            let permission = match (is_acr, permission.control) {
                (false, _) => permission,
                (true, true) => Permission::all(),
                (true, false) => Permission::default(),
            };

            tracing::debug!(%target, policies = policies.len(), ?permission, "Resolved access control policies");
            result.insert(target.clone(), PermissionSet::uniform(permission));
        }

        tracing::debug!(
            targets = requested.len(),
            documents = cache.len(),
            "Resolved Access Control Policy permissions"
        );

        Ok(result)
    }
}
