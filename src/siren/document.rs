//! # Entity Document
//!
//! The [`Document`] is the accumulator for one Siren entity, root or nested. Serializer
//! definitions drive it through builder calls in any order and multiplicity:
//!
//! - [`r#type`](Document::r#type) sets the class labels (replacing earlier ones)
//! - [`property`](Document::property), [`meta`](Document::meta) and
//!   [`properties`](Document::properties) fill the property map
//! - [`link`](Document::link) appends navigational links
//! - [`entity`](Document::entity) / [`entities`](Document::entities) embed nested
//!   documents (see [`composer`](super::composer))
//! - [`action`](Document::action) appends actions with their fields
//!
//! Finalization lives in [`finalize`](super::finalize).

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::trace;

use super::action::{Action, ActionBuilder};
use crate::framework::{Context, Serializer, SirenError};

/// Key/value properties of an entity.
pub type Properties = Map<String, Value>;

/// A link record: `rel` plus whatever attributes the caller supplied.
pub type Link = Map<String, Value>;

/// Accumulating structural representation of one hypermedia entity.
///
/// # Architecture Note
/// Nested entities are stored in their finalized form. Once a child is embedded the
/// parent holds a plain [`Value`], never a live builder, so nothing can reach back
/// into it.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub(crate) context: Context,
    pub(crate) title: Option<String>,
    pub(crate) class: Vec<String>,
    pub(crate) properties: Properties,
    pub(crate) links: Vec<Link>,
    pub(crate) entities: Vec<Value>,
    pub(crate) actions: Vec<Action>,
}

impl Document {
    /// Creates an empty document. Every collection starts out empty, so an untouched
    /// document still finalizes to a complete (empty) entity.
    pub fn new(context: Context) -> Self {
        Self {
            context,
            title: None,
            class: Vec::new(),
            properties: Properties::new(),
            links: Vec::new(),
            entities: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Runs `serializer` over `item` on a fresh document.
    pub fn build<T, S>(item: &T, serializer: &S, context: Context) -> Result<Self, S::Error>
    where
        T: ?Sized,
        S: Serializer<T> + ?Sized,
    {
        let mut doc = Self::new(context);
        serializer.serialize(item, &mut doc)?;
        Ok(doc)
    }

    /// The options this document was built under.
    pub fn context(&self) -> &Context {
        &self.context
    }

    // =========================================================================
    // BUILDER CALLS
    // =========================================================================

    /// Replaces the class labels with exactly `labels`. An empty list clears them.
    pub fn r#type<I, S>(&mut self, labels: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.class = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the entity's human-readable title.
    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    /// Sets one property, overwriting any previous value under `key`.
    pub fn property(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Alias of [`property`](Self::property).
    pub fn meta(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.property(key, value)
    }

    /// Merges the batch of properties produced by `producer`.
    pub fn properties<F>(&mut self, producer: F) -> &mut Self
    where
        F: FnOnce(&mut Properties),
    {
        let batch = yield_properties(producer);
        self.properties.extend(batch);
        self
    }

    /// Like [`properties`](Self::properties), for producers that can fail.
    ///
    /// On error nothing is merged and the error is returned as is.
    pub fn try_properties<F, E>(&mut self, producer: F) -> Result<&mut Self, E>
    where
        F: FnOnce(&mut Properties) -> Result<(), E>,
    {
        let mut batch = Properties::new();
        producer(&mut batch)?;
        self.properties.extend(batch);
        Ok(self)
    }

    /// Merges the top-level fields of any serde-serializable value.
    pub fn properties_from<P>(&mut self, value: &P) -> Result<&mut Self, SirenError>
    where
        P: Serialize + ?Sized,
    {
        match serde_json::to_value(value)? {
            Value::Object(batch) => {
                self.properties.extend(batch);
                Ok(self)
            }
            other => Err(SirenError::NotAnObject(json_kind(&other))),
        }
    }

    /// Appends `{"rel": [rel], ...attributes}` to the links.
    ///
    /// Duplicate relations are kept. A `rel` key inside `attributes` replaces the
    /// generated one.
    pub fn link<A, K, V>(&mut self, rel: impl Into<String>, attributes: A) -> &mut Self
    where
        A: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut link = Link::new();
        link.insert("rel".into(), Value::Array(vec![Value::String(rel.into())]));
        for (key, value) in attributes {
            link.insert(key.into(), value.into());
        }
        self.links.push(link);
        self
    }

    /// Appends a link carrying only its relation: `{"rel": [rel]}`.
    pub fn link_rel(&mut self, rel: impl Into<String>) -> &mut Self {
        self.link(rel, Link::new())
    }

    /// Appends the action configured by `configure`.
    pub fn action<F>(&mut self, name: impl Into<String>, configure: F) -> &mut Self
    where
        F: FnOnce(&mut ActionBuilder),
    {
        let mut builder = ActionBuilder::new(name);
        configure(&mut builder);
        self.push_action(builder.finish());
        self
    }

    /// Like [`action`](Self::action), for configurators that can fail.
    ///
    /// On error no partial action is appended and the error is returned as is.
    pub fn try_action<F, E>(&mut self, name: impl Into<String>, configure: F) -> Result<&mut Self, E>
    where
        F: FnOnce(&mut ActionBuilder) -> Result<(), E>,
    {
        let mut builder = ActionBuilder::new(name);
        configure(&mut builder)?;
        self.push_action(builder.finish());
        Ok(self)
    }

    fn push_action(&mut self, action: Action) {
        trace!(action = action.name(), fields = action.fields().len(), "Action appended");
        self.actions.push(action);
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    pub fn classes(&self) -> &[String] {
        &self.class
    }

    pub fn get_property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Finalized nested entities, in embedding order.
    pub fn embedded(&self) -> &[Value] {
        &self.entities
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
}

/// Collects one batch of properties from caller logic.
fn yield_properties<F>(producer: F) -> Properties
where
    F: FnOnce(&mut Properties),
{
    let mut batch = Properties::new();
    producer(&mut batch);
    batch
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
