use serde::{Deserialize, Serialize};

use crate::CredentialGroup;

/// The agent asserted by a request, identified by WebID.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AgentCredential {
    /// The WebID of the agent
    pub web_id: String,
}

/// The client application a request was made through.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ClientCredential {
    /// The client identifier
    pub client_id: String,
}

/// The identity provider that issued the request's token.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct IssuerCredential {
    /// The issuer URL
    pub url: String,
}

/// The identities asserted by one request. Any combination may be present,
/// including none.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    /// The asserted agent
    pub agent: Option<AgentCredential>,
    /// The asserted client
    pub client: Option<ClientCredential>,
    /// The asserted issuer
    pub issuer: Option<IssuerCredential>,
}

impl Credentials {
    /// Credentials asserting nothing
    pub fn public() -> Self {
        Self::default()
    }

    /// Credentials asserting an agent
    pub fn agent(web_id: impl Into<String>) -> Self {
        Self {
            agent: Some(AgentCredential {
                web_id: web_id.into(),
            }),
            ..Self::default()
        }
    }

    /// Add a client identity
    pub fn with_client(mut self, client_id: impl Into<String>) -> Self {
        self.client = Some(ClientCredential {
            client_id: client_id.into(),
        });
        self
    }

    /// Add an issuer identity
    pub fn with_issuer(mut self, url: impl Into<String>) -> Self {
        self.issuer = Some(IssuerCredential { url: url.into() });
        self
    }

    /// The asserted WebID, if any
    pub fn web_id(&self) -> Option<&str> {
        self.agent.as_ref().map(|agent| agent.web_id.as_str())
    }

    /// The asserted client identifier, if any
    pub fn client_id(&self) -> Option<&str> {
        self.client.as_ref().map(|client| client.client_id.as_str())
    }

    /// The asserted issuer, if any
    pub fn issuer_url(&self) -> Option<&str> {
        self.issuer.as_ref().map(|issuer| issuer.url.as_str())
    }

    /// True if an agent is asserted
    pub fn is_authenticated(&self) -> bool {
        self.agent.is_some()
    }

    /// The credentials a group is evaluated with. [CredentialGroup::Public]
    /// is always evaluated without identities; [CredentialGroup::Agent] only
    /// exists when an agent is asserted.
    pub fn for_group(&self, group: CredentialGroup) -> Option<Credentials> {
        match group {
            CredentialGroup::Public => Some(Credentials::public()),
            CredentialGroup::Agent => self.is_authenticated().then(|| self.clone()),
        }
    }

    /// The groups present for these credentials, paired with what each is
    /// evaluated with
    pub fn groups(&self) -> Vec<(CredentialGroup, Credentials)> {
        [CredentialGroup::Public, CredentialGroup::Agent]
            .into_iter()
            .filter_map(|group| self.for_group(group).map(|credentials| (group, credentials)))
            .collect()
    }
}
