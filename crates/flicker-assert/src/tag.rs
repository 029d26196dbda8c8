//! Named points of a transition that an assertion can be attached to.

use std::fmt;

/// Where in a transition an assertion was evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AssertionTag {
    /// Initial state, before the transition runs.
    Start,
    /// Final state, after the transition completes.
    End,
    /// Every state captured while the transition runs.
    All,
    /// A location chosen by the test author.
    Custom(String),
}

impl AssertionTag {
    pub const START: &'static str = "START";
    pub const END: &'static str = "END";
    pub const ALL: &'static str = "ALL";

    /// Map a tag string onto a tag; unknown strings are user-defined.
    pub fn parse(tag: &str) -> Self {
        match tag {
            Self::START => AssertionTag::Start,
            Self::END => AssertionTag::End,
            Self::ALL => AssertionTag::All,
            other => AssertionTag::Custom(other.to_string()),
        }
    }

    /// Phrase used for the `Location` line of a failure report.
    pub fn phrase(&self) -> String {
        match self {
            AssertionTag::Start => "before transition (initial state)".to_string(),
            AssertionTag::End => "after transition (final state)".to_string(),
            AssertionTag::All => "during transition".to_string(),
            AssertionTag::Custom(tag) => format!("at user-defined location ({})", tag),
        }
    }
}

impl From<&str> for AssertionTag {
    fn from(tag: &str) -> Self {
        AssertionTag::parse(tag)
    }
}

impl fmt::Display for AssertionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.phrase())
    }
}
