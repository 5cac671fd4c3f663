use std::collections::BTreeSet;

use crate::{AccessMap, AccessMode, AuthorizationError, Credentials, PermissionMap};

/// Decides whether a request may proceed by comparing the modes it requires
/// against the permissions a [crate::PermissionResolver] found.
#[derive(Clone, Copy, Debug, Default)]
pub struct PermissionBasedAuthorizer;

impl PermissionBasedAuthorizer {
    /// Succeed if every mode in `requested` is allowed on its target by
    /// `available`. A target missing from `available` has no permissions.
    ///
    /// The first failing target, in identifier order, is reported as
    /// [AuthorizationError::Unauthorized] when no agent is asserted and as
    /// [AuthorizationError::Forbidden] otherwise.
    pub fn authorize(
        &self,
        credentials: &Credentials,
        requested: &AccessMap,
        available: &PermissionMap,
    ) -> Result<(), AuthorizationError> {
        for (identifier, modes) in requested {
            let missing: BTreeSet<AccessMode> = modes
                .iter()
                .copied()
                .filter(|mode| {
                    !available
                        .get(identifier)
                        .is_some_and(|permissions| permissions.allows(*mode))
                })
                .collect();

            if missing.is_empty() {
                continue;
            }

            tracing::debug!(%identifier, ?missing, "Access denied");

            let identifier = identifier.clone();
            return Err(if credentials.is_authenticated() {
                AuthorizationError::Forbidden {
                    identifier,
                    modes: missing,
                }
            } else {
                AuthorizationError::Unauthorized {
                    identifier,
                    modes: missing,
                }
            });
        }

        Ok(())
    }
}
