use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt::{Display, Formatter};

use pod_rdf::vocabulary::acl;
use pod_storage::ResourceIdentifier;
use serde::{Deserialize, Serialize};

/// The ways a resource can be accessed.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AccessMode {
    /// Reading the resource
    Read,
    /// Adding to the resource without removing anything
    Append,
    /// Changing the resource arbitrarily; includes [AccessMode::Append]
    Write,
    /// Reading and changing the access control document of the resource
    Control,
}

impl AccessMode {
    /// Every mode, in declaration order
    pub const ALL: [AccessMode; 4] = [
        AccessMode::Read,
        AccessMode::Append,
        AccessMode::Write,
        AccessMode::Control,
    ];

    /// The mode named by an `acl:` mode IRI such as `acl:Read`
    pub fn from_iri(iri: &str) -> Option<Self> {
        match iri {
            acl::READ => Some(AccessMode::Read),
            acl::APPEND => Some(AccessMode::Append),
            acl::WRITE => Some(AccessMode::Write),
            acl::CONTROL => Some(AccessMode::Control),
            _ => None,
        }
    }

    /// The `acl:` IRI naming this mode
    pub fn iri(&self) -> &'static str {
        match self {
            AccessMode::Read => acl::READ,
            AccessMode::Append => acl::APPEND,
            AccessMode::Write => acl::WRITE,
            AccessMode::Control => acl::CONTROL,
        }
    }
}

impl Display for AccessMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AccessMode::Read => "read",
            AccessMode::Append => "append",
            AccessMode::Write => "write",
            AccessMode::Control => "control",
        };
        write!(f, "{name}")
    }
}

/// Which modes are granted, one flag per [AccessMode].
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Permission {
    /// See [AccessMode::Read]
    pub read: bool,
    /// See [AccessMode::Append]
    pub append: bool,
    /// See [AccessMode::Write]
    pub write: bool,
    /// See [AccessMode::Control]
    pub control: bool,
}

impl Permission {
    /// A permission granting every mode
    pub fn all() -> Self {
        Self {
            read: true,
            append: true,
            write: true,
            control: true,
        }
    }

    /// A permission granting the given modes
    pub fn from_modes<'a>(modes: impl IntoIterator<Item = &'a AccessMode>) -> Self {
        let mut permission = Permission::default();
        for mode in modes {
            permission.grant(*mode);
        }
        permission
    }

    /// Grant `mode`. Granting write also grants append.
    pub fn grant(&mut self, mode: AccessMode) {
        match mode {
            AccessMode::Read => self.read = true,
            AccessMode::Append => self.append = true,
            AccessMode::Write => {
                self.write = true;
                self.append = true;
            }
            AccessMode::Control => self.control = true,
        }
    }

    /// True if `mode` is granted
    pub fn allows(&self, mode: AccessMode) -> bool {
        match mode {
            AccessMode::Read => self.read,
            AccessMode::Append => self.append,
            AccessMode::Write => self.write,
            AccessMode::Control => self.control,
        }
    }

    /// True if no mode is granted
    pub fn is_empty(&self) -> bool {
        *self == Permission::default()
    }

    /// Modes granted by either permission
    pub fn union(self, other: Permission) -> Permission {
        Permission {
            read: self.read || other.read,
            append: self.append || other.append,
            write: self.write || other.write,
            control: self.control || other.control,
        }
    }

    /// The granted modes
    pub fn modes(&self) -> BTreeSet<AccessMode> {
        AccessMode::ALL
            .into_iter()
            .filter(|mode| self.allows(*mode))
            .collect()
    }
}

/// The credential groups permissions are reported for.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CredentialGroup {
    /// What anyone may do, regardless of the identities asserted
    Public,
    /// What the asserted agent may do
    Agent,
}

/// The permissions of one target, per [CredentialGroup].
///
/// A group is absent when it was not evaluated, e.g. [CredentialGroup::Agent]
/// for a request without an agent.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PermissionSet {
    groups: BTreeMap<CredentialGroup, Permission>,
}

impl PermissionSet {
    /// A set where every group holds the same permission
    pub fn uniform(permission: Permission) -> Self {
        let mut set = PermissionSet::default();
        set.set(CredentialGroup::Public, permission);
        set.set(CredentialGroup::Agent, permission);
        set
    }

    /// The permission of a group, if it was evaluated
    pub fn get(&self, group: CredentialGroup) -> Option<&Permission> {
        self.groups.get(&group)
    }

    /// Record the permission of a group
    pub fn set(&mut self, group: CredentialGroup, permission: Permission) {
        self.groups.insert(group, permission);
    }

    /// Iterate over the evaluated groups
    pub fn iter(&self) -> impl Iterator<Item = (&CredentialGroup, &Permission)> {
        self.groups.iter()
    }

    /// The union of all groups; what the request may do
    pub fn effective(&self) -> Permission {
        self.groups
            .values()
            .fold(Permission::default(), |acc, permission| acc.union(*permission))
    }

    /// True if any group allows `mode`
    pub fn allows(&self, mode: AccessMode) -> bool {
        self.effective().allows(mode)
    }

    /// Apply `f` to every group's permission
    pub fn map(&self, f: impl Fn(Permission) -> Permission) -> PermissionSet {
        PermissionSet {
            groups: self
                .groups
                .iter()
                .map(|(group, permission)| (*group, f(*permission)))
                .collect(),
        }
    }

    /// Union with another set, group by group
    pub fn merge(&mut self, other: &PermissionSet) {
        for (group, permission) in &other.groups {
            let entry = self.groups.entry(*group).or_default();
            *entry = entry.union(*permission);
        }
    }
}

/// The modes requested per target. Iteration is ordered by identifier, so
/// resolution visits targets deterministically.
pub type AccessMap = BTreeMap<ResourceIdentifier, BTreeSet<AccessMode>>;

/// The resolved permissions per target.
pub type PermissionMap = HashMap<ResourceIdentifier, PermissionSet>;
