use std::sync::Arc;

use async_trait::async_trait;

use crate::{AccessMap, AuthorizationError, Credentials, PermissionMap};

/// A [PermissionResolver] determines which modes a set of credentials holds
/// on each requested target.
///
/// Every distinct target in `requested` receives an entry in the result,
/// holding the full set of available modes rather than only the requested
/// ones. Implementations own no per-request state: each call builds its own
/// [crate::DocumentCache], so concurrent calls never share mutable data.
#[async_trait]
pub trait PermissionResolver: Send + Sync {
    /// Resolve the permissions of `credentials` on every target of
    /// `requested`. Any error aborts the whole batch.
    async fn resolve(
        &self,
        credentials: &Credentials,
        requested: &AccessMap,
    ) -> Result<PermissionMap, AuthorizationError>;
}

#[async_trait]
impl<T> PermissionResolver for Arc<T>
where
    T: PermissionResolver + ?Sized,
{
    async fn resolve(
        &self,
        credentials: &Credentials,
        requested: &AccessMap,
    ) -> Result<PermissionMap, AuthorizationError> {
        self.as_ref().resolve(credentials, requested).await
    }
}
