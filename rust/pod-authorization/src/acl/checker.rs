use std::sync::Arc;

use async_trait::async_trait;
use pod_rdf::{
    Graph, Term,
    vocabulary::{acl, foaf, vcard},
};
use pod_storage::{ResourceIdentifier, StatementReader};

use crate::{Absent, AuthorizationError, Credentials, DocumentCache};

/// An [AccessChecker] tests one kind of clause of an `acl:Authorization`
/// rule against a set of credentials.
#[async_trait]
pub trait AccessChecker: Send + Sync {
    /// True if `rule` in `acl` applies to `credentials`. Any further
    /// documents a checker needs are loaded through `cache`.
    async fn check(
        &self,
        acl: &Graph,
        rule: &Term,
        credentials: &Credentials,
        cache: &mut DocumentCache,
    ) -> Result<bool, AuthorizationError>;
}

/// Matches rules naming the asserted WebID through `acl:agent`.
#[derive(Clone, Copy, Debug, Default)]
pub struct AgentAccessChecker;

#[async_trait]
impl AccessChecker for AgentAccessChecker {
    async fn check(
        &self,
        acl: &Graph,
        rule: &Term,
        credentials: &Credentials,
        _cache: &mut DocumentCache,
    ) -> Result<bool, AuthorizationError> {
        Ok(credentials.web_id().is_some_and(|web_id| {
            acl.contains(rule, &Term::iri(acl::AGENT), &Term::iri(web_id))
        }))
    }
}

/// Matches rules granted to `foaf:Agent` (everyone) or, when a WebID is
/// asserted, to `acl:AuthenticatedAgent`.
#[derive(Clone, Copy, Debug, Default)]
pub struct AgentClassAccessChecker;

#[async_trait]
impl AccessChecker for AgentClassAccessChecker {
    async fn check(
        &self,
        acl: &Graph,
        rule: &Term,
        credentials: &Credentials,
        _cache: &mut DocumentCache,
    ) -> Result<bool, AuthorizationError> {
        let agent_class = Term::iri(acl::AGENT_CLASS);

        if acl.contains(rule, &agent_class, &Term::iri(foaf::AGENT)) {
            return Ok(true);
        }

        Ok(credentials.is_authenticated()
            && acl.contains(rule, &agent_class, &Term::iri(acl::AUTHENTICATED_AGENT)))
    }
}

/// Matches rules granted through `acl:agentGroup` to a group that lists the
/// asserted WebID with `vcard:hasMember`.
///
/// Group descriptions live in their own documents, read through the given
/// [StatementReader] and cached for the rest of the resolution. A group
/// whose document does not exist has no members.
#[derive(Clone)]
pub struct AgentGroupAccessChecker {
    reader: Arc<dyn StatementReader>,
}

impl AgentGroupAccessChecker {
    /// Read group documents through `reader`
    pub fn new(reader: Arc<dyn StatementReader>) -> Self {
        Self { reader }
    }

    async fn is_member(
        &self,
        group: &str,
        web_id: &str,
        cache: &mut DocumentCache,
    ) -> Result<bool, AuthorizationError> {
        let document = ResourceIdentifier::from(group.split('#').next().unwrap_or(group));
        let graph = cache
            .load(self.reader.as_ref(), &document, Absent::Empty)
            .await?;

        Ok(graph.contains(
            &Term::iri(group),
            &Term::iri(vcard::HAS_MEMBER),
            &Term::iri(web_id),
        ))
    }
}

#[async_trait]
impl AccessChecker for AgentGroupAccessChecker {
    async fn check(
        &self,
        acl: &Graph,
        rule: &Term,
        credentials: &Credentials,
        cache: &mut DocumentCache,
    ) -> Result<bool, AuthorizationError> {
        let Some(web_id) = credentials.web_id() else {
            return Ok(false);
        };

        for group in acl.objects(rule, &Term::iri(acl::AGENT_GROUP)) {
            let Some(group) = group.as_iri() else {
                continue;
            };
            if self.is_member(group, web_id, cache).await? {
                return Ok(true);
            }
        }

        Ok(false)
    }
}

/// Combines checkers with a logical OR, stopping at the first match.
#[derive(Clone, Default)]
pub struct AnyAccessChecker {
    checkers: Vec<Arc<dyn AccessChecker>>,
}

impl AnyAccessChecker {
    /// Combine the given checkers
    pub fn new(checkers: Vec<Arc<dyn AccessChecker>>) -> Self {
        Self { checkers }
    }

    /// The checkers every Web Access Control deployment needs: agent, agent
    /// class and agent group
    pub fn standard(reader: Arc<dyn StatementReader>) -> Self {
        Self::new(vec![
            Arc::new(AgentAccessChecker),
            Arc::new(AgentClassAccessChecker),
            Arc::new(AgentGroupAccessChecker::new(reader)),
        ])
    }
}

#[async_trait]
impl AccessChecker for AnyAccessChecker {
    async fn check(
        &self,
        acl: &Graph,
        rule: &Term,
        credentials: &Credentials,
        cache: &mut DocumentCache,
    ) -> Result<bool, AuthorizationError> {
        for checker in &self.checkers {
            if checker.check(acl, rule, credentials, cache).await? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
