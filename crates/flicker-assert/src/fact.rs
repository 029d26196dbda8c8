//! Key/value facts describing the state of a subject at failure time.

use std::fmt;
use std::rc::Rc;

/// One line of diagnostic context, rendered as `key: value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fact {
    pub key: String,
    pub value: String,
}

impl Fact {
    pub fn new(key: impl Into<String>, value: impl fmt::Display) -> Self {
        Self {
            key: key.into(),
            value: value.to_string(),
        }
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}

/// Diagnostic context of an enclosing subject.
///
/// Subjects keep a link to the context they were derived from so a failure
/// deep in a snapshot can still report which trace (and which test step) it
/// came from.
#[derive(Debug, Clone, Default)]
pub struct SubjectContext {
    name: String,
    facts: Vec<Fact>,
    parent: Option<Rc<SubjectContext>>,
}

impl SubjectContext {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            facts: Vec::new(),
            parent: None,
        }
    }

    /// Attach a fact (builder style).
    pub fn with_fact(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.facts.push(Fact::new(key, value));
        self
    }

    /// Link to the enclosing context (builder style).
    pub fn with_parent(mut self, parent: Option<Rc<SubjectContext>>) -> Self {
        self.parent = parent;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<&Rc<SubjectContext>> {
        self.parent.as_ref()
    }

    /// Own facts followed by every ancestor's facts, innermost first.
    pub fn facts(&self) -> Vec<Fact> {
        let mut facts = self.facts.clone();
        let mut parent = self.parent.as_deref();
        while let Some(ctx) = parent {
            facts.extend(ctx.facts.iter().cloned());
            parent = ctx.parent.as_deref();
        }
        facts
    }
}
