//! IRIs of the vocabularies that access control documents are written in.

/// RDF core vocabulary
pub mod rdf {
    /// `rdf:type`
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
}

/// Web Access Control vocabulary
pub mod acl {
    /// Namespace of the vocabulary
    pub const NAMESPACE: &str = "http://www.w3.org/ns/auth/acl#";

    /// `acl:Authorization`
    pub const AUTHORIZATION: &str = "http://www.w3.org/ns/auth/acl#Authorization";
    /// `acl:accessTo`
    pub const ACCESS_TO: &str = "http://www.w3.org/ns/auth/acl#accessTo";
    /// `acl:default`
    pub const DEFAULT: &str = "http://www.w3.org/ns/auth/acl#default";
    /// `acl:agent`
    pub const AGENT: &str = "http://www.w3.org/ns/auth/acl#agent";
    /// `acl:agentClass`
    pub const AGENT_CLASS: &str = "http://www.w3.org/ns/auth/acl#agentClass";
    /// `acl:agentGroup`
    pub const AGENT_GROUP: &str = "http://www.w3.org/ns/auth/acl#agentGroup";
    /// `acl:AuthenticatedAgent`
    pub const AUTHENTICATED_AGENT: &str = "http://www.w3.org/ns/auth/acl#AuthenticatedAgent";
    /// `acl:mode`
    pub const MODE: &str = "http://www.w3.org/ns/auth/acl#mode";

    /// `acl:Read`
    pub const READ: &str = "http://www.w3.org/ns/auth/acl#Read";
    /// `acl:Append`
    pub const APPEND: &str = "http://www.w3.org/ns/auth/acl#Append";
    /// `acl:Write`
    pub const WRITE: &str = "http://www.w3.org/ns/auth/acl#Write";
    /// `acl:Control`
    pub const CONTROL: &str = "http://www.w3.org/ns/auth/acl#Control";
}

/// Friend-of-a-friend vocabulary
pub mod foaf {
    /// `foaf:Agent`, the class of every agent
    pub const AGENT: &str = "http://xmlns.com/foaf/0.1/Agent";
}

/// vCard vocabulary, used for agent groups
pub mod vcard {
    /// `vcard:hasMember`
    pub const HAS_MEMBER: &str = "http://www.w3.org/2006/vcard/ns#hasMember";
}

/// Access Control Policy vocabulary
pub mod acp {
    /// Namespace of the vocabulary
    pub const NAMESPACE: &str = "http://www.w3.org/ns/solid/acp#";

    /// `acp:AccessControlResource`
    pub const ACCESS_CONTROL_RESOURCE: &str = "http://www.w3.org/ns/solid/acp#AccessControlResource";
    /// `acp:resource`
    pub const RESOURCE: &str = "http://www.w3.org/ns/solid/acp#resource";
    /// `acp:accessControl`
    pub const ACCESS_CONTROL: &str = "http://www.w3.org/ns/solid/acp#accessControl";
    /// `acp:memberAccessControl`
    pub const MEMBER_ACCESS_CONTROL: &str = "http://www.w3.org/ns/solid/acp#memberAccessControl";
    /// `acp:apply`
    pub const APPLY: &str = "http://www.w3.org/ns/solid/acp#apply";
    /// `acp:allow`
    pub const ALLOW: &str = "http://www.w3.org/ns/solid/acp#allow";
    /// `acp:deny`
    pub const DENY: &str = "http://www.w3.org/ns/solid/acp#deny";
    /// `acp:allOf`
    pub const ALL_OF: &str = "http://www.w3.org/ns/solid/acp#allOf";
    /// `acp:anyOf`
    pub const ANY_OF: &str = "http://www.w3.org/ns/solid/acp#anyOf";
    /// `acp:noneOf`
    pub const NONE_OF: &str = "http://www.w3.org/ns/solid/acp#noneOf";
    /// `acp:agent`
    pub const AGENT: &str = "http://www.w3.org/ns/solid/acp#agent";
    /// `acp:client`
    pub const CLIENT: &str = "http://www.w3.org/ns/solid/acp#client";
    /// `acp:issuer`
    pub const ISSUER: &str = "http://www.w3.org/ns/solid/acp#issuer";
    /// `acp:vc`
    pub const VC: &str = "http://www.w3.org/ns/solid/acp#vc";

    /// `acp:PublicAgent`, matches every request
    pub const PUBLIC_AGENT: &str = "http://www.w3.org/ns/solid/acp#PublicAgent";
    /// `acp:AuthenticatedAgent`, matches any request asserting an agent
    pub const AUTHENTICATED_AGENT: &str = "http://www.w3.org/ns/solid/acp#AuthenticatedAgent";
    /// `acp:PublicClient`, matches every client
    pub const PUBLIC_CLIENT: &str = "http://www.w3.org/ns/solid/acp#PublicClient";
}
