use super::Role;
use serde::Serialize;

/// One templated unit of work bound to its owning role
///
/// Work items are rebuilt from the templates on every invocation and never
/// change once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkItem {
    role: Role,
    description: String,
    expected_output: String,
}

impl WorkItem {
    pub fn new(role: Role, description: impl Into<String>, expected_output: impl Into<String>) -> Self {
        Self {
            role,
            description: description.into(),
            expected_output: expected_output.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Rendered description, profile fields already interpolated
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Shape the answer is expected to take
    pub fn expected_output(&self) -> &str {
        &self.expected_output
    }
}
