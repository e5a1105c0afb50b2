//! # Serialization Context
//!
//! The [`Context`] is the read-only option mapping every [`Document`](crate::siren::Document)
//! carries. Serializer definitions read it through [`Document::context`](crate::siren::Document::context),
//! and the finalizer reads the collapse policy from it.
//!
//! Nested entities inherit their parent's context merged with the per-call options, so a
//! flag set at the root applies all the way down unless a nested call overrides it.
//!
//! ```rust
//! use siren_adapter::framework::Context;
//!
//! let root = Context::new().with(Context::COLLAPSE_OPTIONAL_ATTRIBUTES, true);
//! let nested = root.merge(&Context::new().with("base_url", "/api"));
//! assert!(nested.collapse_optional_attributes());
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::SirenError;

/// Option mapping propagated through a serialization pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Context {
    options: Map<String, Value>,
}

impl Context {
    /// Key of the flag that drops empty top-level attributes on finalization.
    pub const COLLAPSE_OPTIONAL_ATTRIBUTES: &'static str = "collapse_optional_attributes";

    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a context from a JSON object, e.g. a configuration file's contents.
    pub fn from_json_str(json: &str) -> Result<Self, SirenError> {
        serde_json::from_str(json).map_err(SirenError::InvalidContext)
    }

    /// Returns a copy of this context with `key` set to `value`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }

    /// Convenience lookup for string options.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Returns a new context holding these options overlaid with `overrides`.
    ///
    /// Keys present in `overrides` win; everything else is inherited.
    pub fn merge(&self, overrides: &Context) -> Context {
        let mut options = self.options.clone();
        options.extend(overrides.options.clone());
        Context { options }
    }

    /// Whether empty top-level attributes are dropped on finalization.
    ///
    /// Absent, `null` and `false` mean off. Any other value turns collapsing on.
    pub fn collapse_optional_attributes(&self) -> bool {
        !matches!(
            self.get(Self::COLLAPSE_OPTIONAL_ATTRIBUTES),
            None | Some(Value::Null) | Some(Value::Bool(false))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collapse_flag_truthiness() {
        assert!(!Context::new().collapse_optional_attributes());
        assert!(!Context::new()
            .with(Context::COLLAPSE_OPTIONAL_ATTRIBUTES, Value::Null)
            .collapse_optional_attributes());
        assert!(!Context::new()
            .with(Context::COLLAPSE_OPTIONAL_ATTRIBUTES, false)
            .collapse_optional_attributes());
        assert!(Context::new()
            .with(Context::COLLAPSE_OPTIONAL_ATTRIBUTES, true)
            .collapse_optional_attributes());
        assert!(Context::new()
            .with(Context::COLLAPSE_OPTIONAL_ATTRIBUTES, "yes")
            .collapse_optional_attributes());
    }

    #[test]
    fn test_merge_overrides_and_inherits() {
        let parent = Context::new()
            .with(Context::COLLAPSE_OPTIONAL_ATTRIBUTES, true)
            .with("base_url", "/api");
        let merged = parent.merge(&Context::new().with(Context::COLLAPSE_OPTIONAL_ATTRIBUTES, false));

        assert!(!merged.collapse_optional_attributes());
        assert_eq!(merged.get_str("base_url"), Some("/api"));
        // The parent is untouched.
        assert!(parent.collapse_optional_attributes());
    }

    #[test]
    fn test_from_json_str() {
        let context = Context::from_json_str(r#"{"collapse_optional_attributes": true, "depth": 2}"#)
            .expect("valid context");
        assert!(context.collapse_optional_attributes());
        assert_eq!(context.get("depth"), Some(&json!(2)));

        let err = Context::from_json_str("[1, 2]").unwrap_err();
        assert!(matches!(err, SirenError::InvalidContext(_)));
    }
}
