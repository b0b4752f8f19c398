//! Mixin configuration: which mixins apply to which target class.
//!
//! A [`MixinConfiguration`] holds one [`ClassContext`] per target class. It can be read
//! from and written to JSON:
//!
//! ```json
//! {
//!   "class_contexts": [
//!     {
//!       "target_class": "Shop.Order",
//!       "mixins": [
//!         { "full_name": "Shop.Audit", "dependencies": ["Shop.Persist"] },
//!         { "full_name": "Shop.Persist", "overridden_members": ["Save"] }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Omitted `dependencies` and `overridden_members` default to empty lists, and
//! `accepts_alphabetic_ordering` defaults to `false`.

use crate::mixin_error::MixinOrderError;
use crate::mixins::definition::MixinDefinition;
use crate::mixins::sorter::MixinSorter;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Read;

/// The mixins applied to one target class.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassContext {
    /// Full name of the class the mixins are applied to.
    pub target_class: String,
    /// Mixins applied to the class, in declaration order.
    #[serde(default)]
    pub mixins: Vec<MixinDefinition>,
}

impl ClassContext {
    /// A context for `target_class` with no mixins.
    pub fn new(target_class: impl Into<String>) -> Self {
        Self {
            target_class: target_class.into(),
            mixins: Vec::new(),
        }
    }

    /// Add a mixin.
    pub fn with_mixin(mut self, mixin: MixinDefinition) -> Self {
        self.mixins.push(mixin);
        self
    }

    /// The class's mixins in base-call order.
    ///
    /// Failures are wrapped in [`MixinOrderError::InTargetClass`].
    pub fn sorted_mixins(&self) -> Result<Vec<&MixinDefinition>, MixinOrderError> {
        MixinSorter::for_target(&self.target_class)
            .sort(&self.mixins)
            .map_err(|e| MixinOrderError::InTargetClass {
                target_class: self.target_class.clone(),
                source: Box::new(e),
            })
    }
}

/// Mixin configuration for a set of target classes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixinConfiguration {
    #[serde(default)]
    pub class_contexts: Vec<ClassContext>,
}

impl MixinConfiguration {
    /// Build a configuration, rejecting duplicate target classes.
    pub fn new(class_contexts: Vec<ClassContext>) -> Result<Self, MixinOrderError> {
        let config = Self { class_contexts };
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON configuration.
    pub fn from_json_str(s: &str) -> Result<Self, MixinOrderError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON configuration from `reader`.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, MixinOrderError> {
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, MixinOrderError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The context for `target_class`, if configured.
    pub fn class_context(&self, target_class: &str) -> Option<&ClassContext> {
        self.class_contexts
            .iter()
            .find(|c| c.target_class == target_class)
    }

    /// Order the mixins of every class context, in configuration order.
    ///
    /// Stops at the first class whose mixins cannot be ordered.
    pub fn sorted_mixins_by_class(
        &self,
    ) -> Result<Vec<(&str, Vec<&MixinDefinition>)>, MixinOrderError> {
        self.class_contexts
            .iter()
            .map(|c| Ok((c.target_class.as_str(), c.sorted_mixins()?)))
            .collect()
    }

    fn validate(&self) -> Result<(), MixinOrderError> {
        let mut seen = HashSet::with_capacity(self.class_contexts.len());
        for context in &self.class_contexts {
            if !seen.insert(context.target_class.as_str()) {
                return Err(MixinOrderError::Configuration(format!(
                    "target class '{}' is configured more than once",
                    context.target_class
                )));
            }
        }
        Ok(())
    }
}
