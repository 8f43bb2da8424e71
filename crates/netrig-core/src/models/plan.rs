//! Ordered command plans associated with a device.

use serde::{Deserialize, Serialize};

/// Ordered sequence of configuration commands for one device.
///
/// Hierarchical configuration syntax keeps its indentation inside the command
/// strings. Immutable, chosen by device identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct CommandPlan(pub Vec<String>);

impl CommandPlan {
    /// Builds a plan from anything yielding command strings.
    pub fn new(commands: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(commands.into_iter().map(Into::into).collect())
    }

    /// The ordered command list.
    pub fn commands(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Ordered sequence of read-only query commands run after configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct VerificationPlan(pub Vec<String>);

impl VerificationPlan {
    /// Builds a plan from anything yielding command strings.
    pub fn new(commands: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(commands.into_iter().map(Into::into).collect())
    }

    /// The ordered command list.
    pub fn commands(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
