//! Web Access Control.
//!
//! Every resource may have an access control document. When it has none, the
//! document of the nearest ancestor container governs it instead. Rules in a
//! document apply to the resource the document is attached to when they use
//! `acl:accessTo`, and to its descendants when they use `acl:default`.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use pod_rdf::{
    Graph, Term,
    vocabulary::{acl, rdf},
};
use pod_storage::{AuxiliaryStrategy, IdentifierStrategy, ResourceIdentifier, StatementReader};

use crate::{
    AccessMap, AccessMode, Absent, AuthorizationError, CredentialGroup, Credentials,
    DocumentCache, Permission, PermissionMap, PermissionResolver, PermissionSet,
};

mod checker;
pub use checker::*;

/// Which rules of a document are relevant to a target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Scope {
    /// The target is the resource the document is attached to
    AccessTo,
    /// The target is a descendant of that resource
    Default,
}

impl Scope {
    fn predicate(&self) -> Term {
        match self {
            Scope::AccessTo => Term::iri(acl::ACCESS_TO),
            Scope::Default => Term::iri(acl::DEFAULT),
        }
    }
}

/// A [PermissionResolver] implementing Web Access Control.
///
/// Documents are located by walking up the container hierarchy until an
/// existing access control document is found; a root container without one
/// is a configuration error. Targets sharing a document are evaluated with a
/// single read of it.
///
/// Access control documents themselves are governed by the `control` mode on
/// the resource they protect: holding it grants every mode on the document,
/// lacking it grants none.
#[derive(Clone)]
pub struct WebAclResolver {
    identifiers: Arc<dyn IdentifierStrategy>,
    acl_strategy: Arc<dyn AuxiliaryStrategy>,
    reader: Arc<dyn StatementReader>,
    checker: Arc<dyn AccessChecker>,
}

impl WebAclResolver {
    /// Create a resolver using the standard agent, agent class and agent
    /// group checkers
    pub fn new(
        identifiers: Arc<dyn IdentifierStrategy>,
        acl_strategy: Arc<dyn AuxiliaryStrategy>,
        reader: Arc<dyn StatementReader>,
    ) -> Self {
        Self {
            checker: Arc::new(AnyAccessChecker::standard(reader.clone())),
            identifiers,
            acl_strategy,
            reader,
        }
    }

    /// Replace the rule checker
    pub fn with_checker(mut self, checker: Arc<dyn AccessChecker>) -> Self {
        self.checker = checker;
        self
    }

    /// The resource whose rules govern `target`: the target itself, or the
    /// protected resource if the target is an access control document.
    fn protected_resource(
        &self,
        target: &ResourceIdentifier,
    ) -> Result<ResourceIdentifier, AuthorizationError> {
        if self.acl_strategy.is_auxiliary_identifier(target) {
            self.acl_strategy
                .get_subject_identifier(target)
                .map_err(AuthorizationError::Hierarchy)
        } else {
            Ok(target.clone())
        }
    }

    /// Group targets by the document that governs them.
    async fn find_effective_documents<'a>(
        &self,
        targets: impl Iterator<Item = &'a ResourceIdentifier>,
    ) -> Result<BTreeMap<ResourceIdentifier, Vec<ResourceIdentifier>>, AuthorizationError> {
        let mut located = HashMap::new();
        let mut documents: BTreeMap<ResourceIdentifier, Vec<ResourceIdentifier>> = BTreeMap::new();

        for target in targets {
            let protected = self.protected_resource(target)?;
            let document = self.find_effective_document(&protected, &mut located).await?;
            documents.entry(document).or_default().push(target.clone());
        }

        Ok(documents)
    }

    /// Walk from `resource` towards the root until a document exists.
    /// `located` remembers the outcome for every resource visited during this
    /// resolution, so siblings stop walking at a shared ancestor.
    async fn find_effective_document(
        &self,
        resource: &ResourceIdentifier,
        located: &mut HashMap<ResourceIdentifier, ResourceIdentifier>,
    ) -> Result<ResourceIdentifier, AuthorizationError> {
        let mut visited = Vec::new();
        let mut current = resource.clone();

        let document = loop {
            if let Some(document) = located.get(&current) {
                break document.clone();
            }

            let candidate = self.acl_strategy.get_auxiliary_identifier(&current);
            let exists = match self.reader.has_resource(&candidate).await {
                Ok(exists) => exists,
                Err(error) if error.is_not_found() => false,
                Err(error) => return Err(AuthorizationError::from_read(&candidate, error)),
            };
            visited.push(current.clone());

            if exists {
                tracing::debug!(%resource, document = %candidate, "Found effective access control document");
                break candidate;
            }
            if self.identifiers.is_root_container(&current) {
                return Err(AuthorizationError::MissingRootPolicy(current));
            }
            current = self
                .identifiers
                .get_parent_container(&current)
                .map_err(AuthorizationError::Hierarchy)?;
        };

        for resource in visited {
            located.insert(resource, document.clone());
        }

        Ok(document)
    }

    /// The permissions granted by the `acl:Authorization` rules of `rules`,
    /// evaluated separately for every credential group.
    async fn determine_permission_set(
        &self,
        rules: &Graph,
        groups: &[(CredentialGroup, Credentials)],
        cache: &mut DocumentCache,
    ) -> Result<PermissionSet, AuthorizationError> {
        let authorizations = rules.subjects(&Term::iri(rdf::TYPE), &Term::iri(acl::AUTHORIZATION));
        let mode = Term::iri(acl::MODE);
        let mut permissions = PermissionSet::default();

        for (group, credentials) in groups {
            let mut permission = Permission::default();

            for rule in &authorizations {
                if !self.checker.check(rules, rule, credentials, cache).await? {
                    continue;
                }
                for granted in rules.objects(rule, &mode) {
                    if let Some(granted) = granted.as_iri().and_then(AccessMode::from_iri) {
                        permission.grant(granted);
                    }
                }
            }

            permissions.set(*group, permission);
        }

        Ok(permissions)
    }
}

/// The statements of every rule in `acl` that targets `subject` in `scope`.
fn filter_rules(acl: &Graph, scope: Scope, subject: &ResourceIdentifier) -> Graph {
    let mut rules = Graph::default();
    for rule in acl.subjects(&scope.predicate(), &Term::iri(subject.path())) {
        rules.extend(&acl.describe(rule));
    }
    rules
}

/// On an access control document, `control` on the protected resource
/// stands in for every mode.
fn document_permission(permission: Permission) -> Permission {
    if permission.control {
        Permission::all()
    } else {
        Permission::default()
    }
}

#[async_trait]
impl PermissionResolver for WebAclResolver {
    async fn resolve(
        &self,
        credentials: &Credentials,
        requested: &AccessMap,
    ) -> Result<PermissionMap, AuthorizationError> {
        let mut cache = DocumentCache::default();
        let groups = credentials.groups();
        let documents = self.find_effective_documents(requested.keys()).await?;

        tracing::debug!(
            targets = requested.len(),
            documents = documents.len(),
            "Resolving Web Access Control permissions"
        );

        let mut result = PermissionMap::new();
        for (document, targets) in documents {
            let acl = cache.load(self.reader.as_ref(), &document, Absent::Fail).await?;
            let subject = self
                .acl_strategy
                .get_subject_identifier(&document)
                .map_err(AuthorizationError::Hierarchy)?;
            let mut by_scope: HashMap<Scope, PermissionSet> = HashMap::new();

            for target in targets {
                let scope = if self.protected_resource(&target)? == subject {
                    Scope::AccessTo
                } else {
                    Scope::Default
                };

                let permissions = match by_scope.get(&scope) {
                    Some(permissions) => permissions.clone(),
                    None => {
                        let rules = filter_rules(&acl, scope, &subject);
                        let permissions = self
                            .determine_permission_set(&rules, &groups, &mut cache)
                            .await?;
                        by_scope.insert(scope, permissions.clone());
                        permissions
                    }
                };

                let permissions = if self.acl_strategy.is_auxiliary_identifier(&target) {
                    permissions.map(document_permission)
                } else {
                    permissions
                };

                result.insert(target, permissions);
            }
        }

        Ok(result)
    }
}
