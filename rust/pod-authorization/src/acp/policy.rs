use std::collections::BTreeSet;

use pod_rdf::{
    Graph, Term,
    vocabulary::{acp, rdf},
};

use crate::AccessMode;

/// Whether policies apply to the resource an access control resource is
/// attached to, or to that resource's members.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolicyScope {
    /// Policies linked through `acp:accessControl`
    Resource,
    /// Policies linked through `acp:memberAccessControl`
    Member,
}

/// An access control resource as described in one document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessControlResource {
    /// The node describing the resource
    pub id: Term,
    /// The resource it controls, if stated
    pub resource: Option<Term>,
    /// Access controls applying to the resource itself
    pub access_controls: Vec<AccessControl>,
    /// Access controls applying to the resource's members
    pub member_access_controls: Vec<AccessControl>,
}

impl AccessControlResource {
    /// The policies applicable in `scope`
    pub fn policies(&self, scope: PolicyScope) -> impl Iterator<Item = &Policy> {
        let controls = match scope {
            PolicyScope::Resource => &self.access_controls,
            PolicyScope::Member => &self.member_access_controls,
        };
        controls.iter().flat_map(|control| control.policies.iter())
    }
}

/// A group of policies applied together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessControl {
    /// The node describing the access control
    pub id: Term,
    /// Policies linked through `acp:apply`
    pub policies: Vec<Policy>,
}

/// Modes allowed or denied when the policy's matchers are satisfied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Policy {
    /// The node describing the policy
    pub id: Term,
    /// Modes granted by `acp:allow`
    pub allow: BTreeSet<AccessMode>,
    /// Modes revoked by `acp:deny`
    pub deny: BTreeSet<AccessMode>,
    /// Matchers that must all be satisfied
    pub all_of: Vec<Matcher>,
    /// Matchers of which at least one must be satisfied, if any are listed
    pub any_of: Vec<Matcher>,
    /// Matchers of which none may be satisfied
    pub none_of: Vec<Matcher>,
}

/// Identity conditions a request may satisfy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Matcher {
    /// The node describing the matcher
    pub id: Option<Term>,
    /// Values of `acp:agent`
    pub agents: Vec<String>,
    /// Values of `acp:client`
    pub clients: Vec<String>,
    /// Values of `acp:issuer`
    pub issuers: Vec<String>,
    /// Values of `acp:vc`
    pub vcs: Vec<String>,
}

/// Extract every access control resource described in `graph`.
///
/// A node counts as one if it is typed `acp:AccessControlResource` or links
/// to access controls.
pub fn access_control_resources(graph: &Graph) -> Vec<AccessControlResource> {
    let mut nodes: BTreeSet<&Term> = BTreeSet::new();
    nodes.extend(graph.subjects(
        &Term::iri(rdf::TYPE),
        &Term::iri(acp::ACCESS_CONTROL_RESOURCE),
    ));
    nodes.extend(graph.subjects_with(&Term::iri(acp::ACCESS_CONTROL)));
    nodes.extend(graph.subjects_with(&Term::iri(acp::MEMBER_ACCESS_CONTROL)));

    nodes
        .into_iter()
        .map(|node| AccessControlResource {
            id: node.clone(),
            resource: graph
                .objects(node, &Term::iri(acp::RESOURCE))
                .first()
                .map(|resource| (*resource).clone()),
            access_controls: access_controls(graph, node, acp::ACCESS_CONTROL),
            member_access_controls: access_controls(graph, node, acp::MEMBER_ACCESS_CONTROL),
        })
        .collect()
}

fn access_controls(graph: &Graph, resource: &Term, predicate: &str) -> Vec<AccessControl> {
    graph
        .objects(resource, &Term::iri(predicate))
        .into_iter()
        .map(|control| AccessControl {
            id: control.clone(),
            policies: graph
                .objects(control, &Term::iri(acp::APPLY))
                .into_iter()
                .map(|policy| decode_policy(graph, policy))
                .collect(),
        })
        .collect()
}

fn decode_policy(graph: &Graph, policy: &Term) -> Policy {
    let modes = |predicate: &str| -> BTreeSet<AccessMode> {
        graph
            .objects(policy, &Term::iri(predicate))
            .into_iter()
            .filter_map(|mode| mode.as_iri().and_then(AccessMode::from_iri))
            .collect()
    };
    let matchers = |predicate: &str| -> Vec<Matcher> {
        graph
            .objects(policy, &Term::iri(predicate))
            .into_iter()
            .map(|matcher| decode_matcher(graph, matcher))
            .collect()
    };

    Policy {
        id: policy.clone(),
        allow: modes(acp::ALLOW),
        deny: modes(acp::DENY),
        all_of: matchers(acp::ALL_OF),
        any_of: matchers(acp::ANY_OF),
        none_of: matchers(acp::NONE_OF),
    }
}

fn decode_matcher(graph: &Graph, matcher: &Term) -> Matcher {
    let values = |predicate: &str| -> Vec<String> {
        graph
            .objects(matcher, &Term::iri(predicate))
            .into_iter()
            .map(|value| value.value().to_owned())
            .collect()
    };

    Matcher {
        id: Some(matcher.clone()),
        agents: values(acp::AGENT),
        clients: values(acp::CLIENT),
        issuers: values(acp::ISSUER),
        vcs: values(acp::VC),
    }
}
