//! Upgradable package entry

use std::fmt;

/// A package reported by `apt list --upgradable`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradablePackage {
    /// Package name (text before the first `/`)
    pub name: String,
    /// Version transition, typically `<old> to <new>`
    pub version_transition: String,
}

impl UpgradablePackage {
    /// Creates a new upgradable package entry
    pub fn new(name: impl Into<String>, version_transition: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version_transition: version_transition.into(),
        }
    }
}

impl fmt::Display for UpgradablePackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.version_transition)
    }
}
