//! Actions: state transitions an entity offers, with their input fields.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::field::{Field, FieldBuilder};

/// A finalized action record.
///
/// `name` is fixed at construction, `class` and `fields` keep call order, and the four
/// optional attributes are only present once set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    name: String,
    #[serde(default)]
    class: Vec<String>,
    #[serde(default)]
    fields: Vec<Field>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
}

impl Action {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn classes(&self) -> &[String] {
        &self.class
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Media type of the action's request body.
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    /// Structural form of the action. `class` and `fields` are always present.
    pub fn to_value(&self) -> Value {
        let mut data = Map::new();
        data.insert("name".into(), Value::from(self.name.as_str()));
        data.insert("class".into(), Value::from(self.class.clone()));
        data.insert(
            "fields".into(),
            Value::Array(self.fields.iter().map(Field::to_value).collect()),
        );
        let optional = [
            ("href", &self.href),
            ("method", &self.method),
            ("title", &self.title),
            ("type", &self.kind),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                data.insert(key.into(), Value::from(value.as_str()));
            }
        }
        Value::Object(data)
    }
}

/// Accumulates an [`Action`] while its configurator runs.
///
/// The builder is only reachable inside the configurator passed to
/// [`Document::action`](super::Document::action); once that returns, the record is
/// closed and appended.
#[derive(Debug)]
pub struct ActionBuilder {
    action: Action,
}

impl ActionBuilder {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            action: Action {
                name: name.into(),
                class: Vec::new(),
                fields: Vec::new(),
                href: None,
                method: None,
                title: None,
                kind: None,
            },
        }
    }

    /// Appends one class label.
    pub fn class(&mut self, value: impl Into<String>) -> &mut Self {
        self.action.class.push(value.into());
        self
    }

    pub fn href(&mut self, href: impl Into<String>) -> &mut Self {
        self.action.href = Some(href.into());
        self
    }

    pub fn method(&mut self, method: impl Into<String>) -> &mut Self {
        self.action.method = Some(method.into());
        self
    }

    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.action.title = Some(title.into());
        self
    }

    pub fn r#type(&mut self, kind: impl Into<String>) -> &mut Self {
        self.action.kind = Some(kind.into());
        self
    }

    /// Appends a field configured by `configure`.
    pub fn field<F>(&mut self, name: impl Into<String>, configure: F) -> &mut Self
    where
        F: FnOnce(&mut FieldBuilder),
    {
        let mut builder = FieldBuilder::new(name);
        configure(&mut builder);
        self.action.fields.push(builder.finish());
        self
    }

    /// Like [`field`](Self::field), for configurators that can fail.
    ///
    /// On error nothing is appended and the error is returned as is.
    pub fn try_field<F, E>(&mut self, name: impl Into<String>, configure: F) -> Result<&mut Self, E>
    where
        F: FnOnce(&mut FieldBuilder) -> Result<(), E>,
    {
        let mut builder = FieldBuilder::new(name);
        configure(&mut builder)?;
        self.action.fields.push(builder.finish());
        Ok(self)
    }

    pub(crate) fn finish(self) -> Action {
        self.action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_class_is_append_only() {
        let mut builder = ActionBuilder::new("add-item");
        builder.class("cart").class("write");
        let action = builder.finish();

        assert_eq!(action.classes(), ["cart", "write"]);
    }

    #[test]
    fn test_fields_keep_call_order() {
        let mut builder = ActionBuilder::new("add-item");
        builder
            .field("productCode", |f| {
                f.r#type("text");
            })
            .field("quantity", |f| {
                f.r#type("number");
            });
        let action = builder.finish();

        let names: Vec<&str> = action.fields().iter().map(Field::name).collect();
        assert_eq!(names, ["productCode", "quantity"]);
    }

    #[test]
    fn test_failed_field_is_not_appended() {
        let mut builder = ActionBuilder::new("add-item");
        let result = builder.try_field("quantity", |f| {
            f.r#type("number");
            Err("bad field")
        });

        assert_eq!(result.map(|_| ()), Err("bad field"));
        assert!(builder.finish().fields().is_empty());
    }

    #[test]
    fn test_to_value_matches_serde_form() {
        let mut builder = ActionBuilder::new("add-item");
        builder
            .method("POST")
            .href("/orders/42/items")
            .title("Add Item")
            .r#type("application/json")
            .field("quantity", |f| {
                f.r#type("number").value(1);
            });
        let action = builder.finish();

        let expected = json!({
            "name": "add-item",
            "class": [],
            "method": "POST",
            "href": "/orders/42/items",
            "title": "Add Item",
            "type": "application/json",
            "fields": [{"name": "quantity", "type": "number", "value": 1}]
        });
        assert_eq!(action.to_value(), expected);
        assert_eq!(serde_json::to_value(&action).unwrap(), expected);

        let parsed: Action = serde_json::from_value(expected).unwrap();
        assert_eq!(parsed, action);
    }
}
