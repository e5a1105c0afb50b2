//! Input fields of an action.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One typed input parameter of an [`Action`](super::Action).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
}

impl Field {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field's input type (`"text"`, `"number"`, `"hidden"`, ...).
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Structural form of the field: `name` plus whichever attributes were set.
    pub fn to_value(&self) -> Value {
        let mut data = Map::new();
        data.insert("name".into(), Value::from(self.name.as_str()));
        if let Some(kind) = &self.kind {
            data.insert("type".into(), Value::from(kind.as_str()));
        }
        if let Some(value) = &self.value {
            data.insert("value".into(), value.clone());
        }
        if let Some(title) = &self.title {
            data.insert("title".into(), Value::from(title.as_str()));
        }
        Value::Object(data)
    }
}

/// Accumulates the attributes of a [`Field`] while its configurator runs.
///
/// Each setter overwrites the previous value of its attribute.
#[derive(Debug)]
pub struct FieldBuilder {
    field: Field,
}

impl FieldBuilder {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            field: Field {
                name: name.into(),
                kind: None,
                value: None,
                title: None,
            },
        }
    }

    pub fn r#type(&mut self, kind: impl Into<String>) -> &mut Self {
        self.field.kind = Some(kind.into());
        self
    }

    pub fn value(&mut self, value: impl Into<Value>) -> &mut Self {
        self.field.value = Some(value.into());
        self
    }

    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.field.title = Some(title.into());
        self
    }

    pub(crate) fn finish(self) -> Field {
        self.field
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unset_attributes_are_omitted() {
        let field = FieldBuilder::new("quantity").finish();
        assert_eq!(field.to_value(), json!({"name": "quantity"}));
        assert_eq!(field.kind(), None);
    }

    #[test]
    fn test_setters_overwrite() {
        let mut builder = FieldBuilder::new("quantity");
        builder.r#type("text").value(1).title("Qty");
        builder.r#type("number").value(2);
        let field = builder.finish();

        assert_eq!(
            field.to_value(),
            json!({"name": "quantity", "type": "number", "value": 2, "title": "Qty"})
        );
        assert_eq!(serde_json::to_value(&field).unwrap(), field.to_value());
    }
}
