//! # Finalizer
//!
//! Converts a [`Document`] into the structural mapping handed to the wire encoder.
//!
//! With collapsing enabled every top-level attribute whose value is empty is dropped,
//! since all top-level Siren attributes are optional:
//!
//! ```text
//! { "class": ["order"], "properties": { "orderNumber": 42 }, "entities": [], ... }
//! ```
//!
//! finalizes to
//!
//! ```text
//! { "class": ["order"], "properties": { "orderNumber": 42 } }
//! ```
//!
//! Only empty arrays, objects and strings count as empty. `0`, `false` and `null` are
//! kept. Finalizing never mutates the document, so it can be repeated.

use serde_json::{Map, Value};
use tracing::trace;

use super::action::Action;
use super::document::Document;
use crate::framework::SirenError;

impl Document {
    /// Produces the structural mapping, collapsing empty attributes when asked to.
    pub fn finalize(&self, collapse_optional_attributes: bool) -> Map<String, Value> {
        let mut data = Map::new();
        if let Some(title) = &self.title {
            data.insert("title".into(), Value::from(title.as_str()));
        }
        data.insert("class".into(), Value::from(self.class.clone()));
        data.insert("properties".into(), Value::Object(self.properties.clone()));
        data.insert(
            "links".into(),
            Value::Array(self.links.iter().cloned().map(Value::Object).collect()),
        );
        data.insert("entities".into(), Value::Array(self.entities.clone()));
        data.insert(
            "actions".into(),
            Value::Array(self.actions.iter().map(Action::to_value).collect()),
        );

        if collapse_optional_attributes {
            data.retain(|_, value| !is_empty_attribute(value));
        }
        trace!(collapse_optional_attributes, keys = data.len(), "Document finalized");
        data
    }

    /// Finalizes under the collapse policy of the document's own [`Context`](crate::framework::Context).
    pub fn to_value(&self) -> Value {
        Value::Object(self.finalize(self.context.collapse_optional_attributes()))
    }

    pub fn to_json(&self) -> Result<String, SirenError> {
        Ok(serde_json::to_string(&self.to_value())?)
    }

    pub fn to_json_pretty(&self) -> Result<String, SirenError> {
        Ok(serde_json::to_string_pretty(&self.to_value())?)
    }
}

fn is_empty_attribute(value: &Value) -> bool {
    match value {
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::String(text) => text.is_empty(),
        Value::Null | Value::Bool(_) | Value::Number(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::Context;
    use serde_json::json;

    fn order() -> Document {
        let mut doc = Document::new(Context::new());
        doc.r#type(["order"]).property("orderNumber", 42);
        doc
    }

    #[test]
    fn test_collapsed_order_keeps_only_populated_keys() {
        assert_eq!(
            Value::Object(order().finalize(true)),
            json!({"class": ["order"], "properties": {"orderNumber": 42}})
        );
    }

    #[test]
    fn test_uncollapsed_order_keeps_all_keys() {
        assert_eq!(
            Value::Object(order().finalize(false)),
            json!({
                "class": ["order"],
                "properties": {"orderNumber": 42},
                "links": [],
                "entities": [],
                "actions": []
            })
        );
    }

    #[test]
    fn test_empty_document_is_structurally_complete() {
        let doc = Document::new(Context::new());
        assert_eq!(
            Value::Object(doc.finalize(false)),
            json!({"class": [], "properties": {}, "links": [], "entities": [], "actions": []})
        );
        assert_eq!(Value::Object(doc.finalize(true)), json!({}));
    }

    #[test]
    fn test_empty_title_collapses() {
        let mut doc = order();
        doc.title("");
        assert!(doc.finalize(false).contains_key("title"));
        assert!(!doc.finalize(true).contains_key("title"));

        doc.title("Order 42");
        assert_eq!(doc.finalize(true)["title"], json!("Order 42"));
    }

    #[test]
    fn test_finalize_is_repeatable() {
        let doc = order();
        let first = doc.finalize(true);
        let second = doc.finalize(false);
        let third = doc.finalize(true);

        assert_eq!(first, third);
        assert_eq!(second.len(), 5);
    }

    #[test]
    fn test_emptiness_of_scalars() {
        assert!(is_empty_attribute(&json!([])));
        assert!(is_empty_attribute(&json!({})));
        assert!(is_empty_attribute(&json!("")));
        assert!(!is_empty_attribute(&json!(0)));
        assert!(!is_empty_attribute(&json!(false)));
        assert!(!is_empty_attribute(&Value::Null));
        assert!(!is_empty_attribute(&json!([null])));
    }

    #[test]
    fn test_to_value_reads_context() {
        let mut doc = Document::new(Context::new().with(Context::COLLAPSE_OPTIONAL_ATTRIBUTES, true));
        doc.property("id", 1);
        assert_eq!(doc.to_value(), json!({"properties": {"id": 1}}));
        assert_eq!(doc.to_json().unwrap(), r#"{"properties":{"id":1}}"#);
    }
}
