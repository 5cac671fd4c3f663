use crate::{ResourceIdentifier, StorageError};

/// An [AuxiliaryStrategy] links resources to one kind of auxiliary resource,
/// such as their access control document.
///
/// `get_subject_identifier` is the inverse of `get_auxiliary_identifier`.
pub trait AuxiliaryStrategy: Send + Sync {
    /// The auxiliary identifier attached to `subject`
    fn get_auxiliary_identifier(&self, subject: &ResourceIdentifier) -> ResourceIdentifier;

    /// True if `identifier` names an auxiliary resource of this kind
    fn is_auxiliary_identifier(&self, identifier: &ResourceIdentifier) -> bool;

    /// The resource that `identifier` is attached to
    fn get_subject_identifier(
        &self,
        identifier: &ResourceIdentifier,
    ) -> Result<ResourceIdentifier, StorageError>;
}

/// An [AuxiliaryStrategy] that names auxiliary resources by appending a fixed
/// suffix to the subject's path, e.g. `https://pod/notes/` and
/// `https://pod/notes/.acl`.
#[derive(Clone, Debug)]
pub struct SuffixAuxiliaryStrategy {
    suffix: String,
}

impl SuffixAuxiliaryStrategy {
    /// Create a strategy for the given suffix
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    /// The suffix this strategy appends
    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

impl AuxiliaryStrategy for SuffixAuxiliaryStrategy {
    fn get_auxiliary_identifier(&self, subject: &ResourceIdentifier) -> ResourceIdentifier {
        ResourceIdentifier::new(format!("{}{}", subject.path(), self.suffix))
    }

    fn is_auxiliary_identifier(&self, identifier: &ResourceIdentifier) -> bool {
        identifier.path().ends_with(&self.suffix)
    }

    fn get_subject_identifier(
        &self,
        identifier: &ResourceIdentifier,
    ) -> Result<ResourceIdentifier, StorageError> {
        identifier
            .path()
            .strip_suffix(&self.suffix)
            .map(ResourceIdentifier::from)
            .ok_or_else(|| StorageError::NotAuxiliary(identifier.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_round_trips_subject_and_auxiliary_identifiers() {
        let strategy = SuffixAuxiliaryStrategy::new(".acl");

        for path in ["https://pod/", "https://pod/notes/", "https://pod/notes/today"] {
            let subject = ResourceIdentifier::from(path);
            let auxiliary = strategy.get_auxiliary_identifier(&subject);

            assert!(strategy.is_auxiliary_identifier(&auxiliary));
            assert!(!strategy.is_auxiliary_identifier(&subject));
            assert_eq!(strategy.get_subject_identifier(&auxiliary), Ok(subject));
        }
    }

    #[test]
    fn it_refuses_the_subject_of_a_plain_resource() {
        let strategy = SuffixAuxiliaryStrategy::new(".acr");
        let plain = ResourceIdentifier::from("https://pod/notes/today");

        assert_eq!(
            strategy.get_subject_identifier(&plain),
            Err(StorageError::NotAuxiliary(plain))
        );
    }
}
