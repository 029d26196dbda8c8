//! Component names used to filter the layers of a snapshot.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::TraceError;

/// Identifies an application component, e.g. `com.example/.MainActivity`.
///
/// A layer belongs to a component when the layer name contains the
/// component's `package/class` string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ComponentName {
    pub package: String,
    pub class_name: String,
}

impl ComponentName {
    pub fn new(package: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            class_name: class_name.into(),
        }
    }

    /// Whether the layer called `layer_name` belongs to this component.
    pub fn matches(&self, layer_name: &str) -> bool {
        layer_name.contains(&self.to_string())
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.package, self.class_name)
    }
}

impl FromStr for ComponentName {
    type Err = TraceError;

    /// Parse `package/class`. A class starting with `.` is relative to the
    /// package.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (package, class) = s
            .split_once('/')
            .ok_or_else(|| TraceError::InvalidComponent(s.to_string()))?;
        if package.is_empty() || class.is_empty() {
            return Err(TraceError::InvalidComponent(s.to_string()));
        }

        let class_name = if class.starts_with('.') {
            format!("{}{}", package, class)
        } else {
            class.to_string()
        };
        Ok(Self::new(package, class_name))
    }
}

impl TryFrom<String> for ComponentName {
    type Error = TraceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ComponentName> for String {
    fn from(component: ComponentName) -> Self {
        component.to_string()
    }
}
