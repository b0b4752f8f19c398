//! `MixinDefinition`: the descriptor the mixin sorter works on.
//!
//! Dependencies and overrides are plain data supplied by the caller. Nothing here
//! inspects types at runtime.

use serde::{Deserialize, Serialize};

/// Descriptor of one mixin applied to a target class.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MixinDefinition {
    /// Fully-qualified type name. Identifies the mixin and serves as its sort key.
    pub full_name: String,
    /// Full names of the mixins this one depends on. A mixin is placed before
    /// every mixin it depends on.
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// Names of the target-class members this mixin overrides.
    #[serde(default)]
    pub overridden_members: Vec<String>,
    /// Allow the sorter to settle an override clash alphabetically.
    #[serde(default)]
    pub accepts_alphabetic_ordering: bool,
}

impl MixinDefinition {
    /// A mixin with no dependencies and no overrides.
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            ..Default::default()
        }
    }

    /// Add a dependency on the mixin named `full_name`.
    pub fn depends_on(mut self, full_name: impl Into<String>) -> Self {
        self.dependencies.push(full_name.into());
        self
    }

    /// Add an overridden member.
    pub fn overrides(mut self, member: impl Into<String>) -> Self {
        self.overridden_members.push(member.into());
        self
    }

    /// Mark the mixin as accepting alphabetic ordering.
    pub fn accepting_alphabetic_ordering(mut self) -> Self {
        self.accepts_alphabetic_ordering = true;
        self
    }

    /// Type name without its namespace, e.g. `NullMixin` for `Remotion.Mixins.NullMixin`.
    pub fn name(&self) -> &str {
        self.full_name
            .rsplit_once('.')
            .map_or(self.full_name.as_str(), |(_, name)| name)
    }
}
