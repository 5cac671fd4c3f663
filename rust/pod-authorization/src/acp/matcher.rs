use std::collections::BTreeSet;

use pod_rdf::vocabulary::acp;

use crate::{AccessMode, Credentials};

use super::{Matcher, Policy};

/// The identities a request presents, one value per credential kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchContext {
    /// The asserted WebID
    pub agent: Option<String>,
    /// The asserted client identifier
    pub client: Option<String>,
    /// The asserted issuer
    pub issuer: Option<String>,
}

impl MatchContext {
    /// Build the context of a request presenting `credentials`
    pub fn new(credentials: &Credentials) -> Self {
        Self {
            agent: credentials.web_id().map(str::to_owned),
            client: credentials.client_id().map(str::to_owned),
            issuer: credentials.issuer_url().map(str::to_owned),
        }
    }
}

impl Matcher {
    /// A matcher is satisfied when every attribute it lists has at least one
    /// value matching the context. A matcher listing nothing is never
    /// satisfied. Verifiable credentials are never presented, so a matcher
    /// listing `acp:vc` values is never satisfied either.
    pub fn is_satisfied(&self, context: &MatchContext) -> bool {
        if self.agents.is_empty()
            && self.clients.is_empty()
            && self.issuers.is_empty()
            && self.vcs.is_empty()
        {
            return false;
        }

        let agent = self.agents.is_empty()
            || self.agents.iter().any(|agent| match agent.as_str() {
                acp::PUBLIC_AGENT => true,
                acp::AUTHENTICATED_AGENT => context.agent.is_some(),
                agent => context.agent.as_deref() == Some(agent),
            });
        let client = self.clients.is_empty()
            || self.clients.iter().any(|client| {
                client == acp::PUBLIC_CLIENT || context.client.as_deref() == Some(client.as_str())
            });
        let issuer = self.issuers.is_empty()
            || self
                .issuers
                .iter()
                .any(|issuer| context.issuer.as_deref() == Some(issuer.as_str()));

        agent && client && issuer && self.vcs.is_empty()
    }
}

impl Policy {
    /// Every `allOf` matcher, at least one `anyOf` matcher (when any are
    /// listed) and no `noneOf` matcher is satisfied.
    pub fn is_satisfied(&self, context: &MatchContext) -> bool {
        self.all_of.iter().all(|matcher| matcher.is_satisfied(context))
            && (self.any_of.is_empty() || self.any_of.iter().any(|matcher| matcher.is_satisfied(context)))
            && !self.none_of.iter().any(|matcher| matcher.is_satisfied(context))
    }
}

/// The modes allowed by the satisfied policies, minus the modes any satisfied
/// policy denies.
pub fn allowed_modes<'a>(
    policies: impl IntoIterator<Item = &'a Policy>,
    context: &MatchContext,
) -> BTreeSet<AccessMode> {
    let mut allowed = BTreeSet::new();
    let mut denied = BTreeSet::new();

    for policy in policies {
        if policy.is_satisfied(context) {
            allowed.extend(policy.allow.iter().copied());
            denied.extend(policy.deny.iter().copied());
        }
    }

    allowed.difference(&denied).copied().collect()
}
