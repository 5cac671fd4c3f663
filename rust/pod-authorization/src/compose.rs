use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future::try_join_all;

use crate::{
    AccessMap, AuthorizationError, Credentials, Permission, PermissionMap, PermissionResolver,
    PermissionSet,
};

/// Grants the same permission on every target, without reading anything.
///
/// Useful for servers that are fully open, or fully locked down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AllStaticResolver {
    permission: Permission,
}

impl AllStaticResolver {
    /// Grant `permission` on every target
    pub fn new(permission: Permission) -> Self {
        Self { permission }
    }

    /// Grant every mode on every target
    pub fn allow_all() -> Self {
        Self::new(Permission::all())
    }

    /// Grant nothing on any target
    pub fn deny_all() -> Self {
        Self::new(Permission::default())
    }
}

#[async_trait]
impl PermissionResolver for AllStaticResolver {
    async fn resolve(
        &self,
        _credentials: &Credentials,
        requested: &AccessMap,
    ) -> Result<PermissionMap, AuthorizationError> {
        Ok(requested
            .keys()
            .map(|target| (target.clone(), PermissionSet::uniform(self.permission)))
            .collect())
    }
}

/// Runs several resolvers concurrently and grants whatever any of them
/// grants, target by target and group by group. The first failure aborts
/// the batch.
#[derive(Clone, Default)]
pub struct UnionPermissionResolver {
    resolvers: Vec<Arc<dyn PermissionResolver>>,
}

impl UnionPermissionResolver {
    /// Combine `resolvers`
    pub fn new(resolvers: Vec<Arc<dyn PermissionResolver>>) -> Self {
        Self { resolvers }
    }
}

#[async_trait]
impl PermissionResolver for UnionPermissionResolver {
    async fn resolve(
        &self,
        credentials: &Credentials,
        requested: &AccessMap,
    ) -> Result<PermissionMap, AuthorizationError> {
        let results = try_join_all(
            self.resolvers
                .iter()
                .map(|resolver| resolver.resolve(credentials, requested)),
        )
        .await?;

        let mut merged = PermissionMap::new();
        for result in results {
            for (target, permissions) in result {
                merged.entry(target).or_default().merge(&permissions);
            }
        }

        Ok(merged)
    }
}
