use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::Term;

/// A single subject-predicate-object assertion.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Statement {
    /// What the statement is about
    pub subject: Term,
    /// The relation
    pub predicate: Term,
    /// The value of the relation
    pub object: Term,
}

impl Statement {
    /// Construct a new [Statement]
    pub fn new(subject: impl Into<Term>, predicate: impl Into<Term>, object: impl Into<Term>) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    fn matches(&self, subject: Option<&Term>, predicate: Option<&Term>, object: Option<&Term>) -> bool {
        subject.is_none_or(|subject| *subject == self.subject)
            && predicate.is_none_or(|predicate| *predicate == self.predicate)
            && object.is_none_or(|object| *object == self.object)
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

/// A set of [Statement]s, such as the parsed contents of one document.
///
/// Statements are de-duplicated and iterate in a stable order, so results of
/// pattern queries are deterministic.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    statements: BTreeSet<Statement>,
}

impl Graph {
    /// Add a statement; returns false if it was already present
    pub fn insert(&mut self, statement: Statement) -> bool {
        self.statements.insert(statement)
    }

    /// Add every statement of another graph
    pub fn extend(&mut self, other: &Graph) {
        self.statements.extend(other.statements.iter().cloned());
    }

    /// Number of statements
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// True if the graph holds no statements
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Iterate over all statements
    pub fn iter(&self) -> impl Iterator<Item = &Statement> {
        self.statements.iter()
    }

    /// Statements matching a pattern, where `None` is a wildcard
    pub fn matching<'a, 'b>(
        &'a self,
        subject: Option<&'b Term>,
        predicate: Option<&'b Term>,
        object: Option<&'b Term>,
    ) -> impl Iterator<Item = &'a Statement> + use<'a, 'b> {
        self.statements
            .iter()
            .filter(move |statement| statement.matches(subject, predicate, object))
    }

    /// True if the exact statement is present
    pub fn contains(&self, subject: &Term, predicate: &Term, object: &Term) -> bool {
        self.matching(Some(subject), Some(predicate), Some(object))
            .next()
            .is_some()
    }

    /// Distinct subjects having the given predicate and object
    pub fn subjects(&self, predicate: &Term, object: &Term) -> Vec<&Term> {
        let subjects: BTreeSet<&Term> = self
            .matching(None, Some(predicate), Some(object))
            .map(|statement| &statement.subject)
            .collect();
        subjects.into_iter().collect()
    }

    /// Distinct subjects appearing with the given predicate
    pub fn subjects_with(&self, predicate: &Term) -> Vec<&Term> {
        let subjects: BTreeSet<&Term> = self
            .matching(None, Some(predicate), None)
            .map(|statement| &statement.subject)
            .collect();
        subjects.into_iter().collect()
    }

    /// Objects of the given subject and predicate, in statement order
    pub fn objects(&self, subject: &Term, predicate: &Term) -> Vec<&Term> {
        self.matching(Some(subject), Some(predicate), None)
            .map(|statement| &statement.object)
            .collect()
    }

    /// Every statement about `subject`, collected into a new graph
    pub fn describe(&self, subject: &Term) -> Graph {
        self.matching(Some(subject), None, None).cloned().collect()
    }
}

impl FromIterator<Statement> for Graph {
    fn from_iter<T: IntoIterator<Item = Statement>>(iter: T) -> Self {
        Graph {
            statements: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Graph {
    type Item = Statement;
    type IntoIter = std::collections::btree_set::IntoIter<Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.into_iter()
    }
}

impl Display for Graph {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            writeln!(f, "{statement}")?;
        }
        Ok(())
    }
}
