//! # Core Serializer Framework
//!
//! This module defines the generic building blocks that connect domain objects to the
//! Siren [`Document`] builder.
//!
//! ## Key Types
//!
//! - [`Serializer`]: The trait every serializer definition implements.
//! - [`HasSerializer`]: Names the default serializer of a domain type.
//! - [`from_fn`]: Turns a closure into a serializer.
//! - [`to_siren`]: Runs a root serialization pass and finalizes it.

use serde_json::Value;
use tracing::debug;

use super::context::Context;
use crate::siren::Document;

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Definition logic that drives a [`Document`] for one kind of domain object.
///
/// # Architecture Note
/// The adapter never decides *which* serializer applies to an object. Callers pass one
/// explicitly (see [`Document::entity_with`]) or rely on the type's [`HasSerializer`]
/// default. Everything the serializer needs is in its arguments: the item, and the
/// document whose [`Context`] was inherited from the parent.
///
/// # Errors
/// `Error` is the serializer's own type. The adapter returns it untouched, so a failing
/// nested serializer surfaces to the root caller exactly as raised.
pub trait Serializer<T: ?Sized> {
    type Error;

    /// Populates `doc` from `item`.
    fn serialize(&self, item: &T, doc: &mut Document) -> Result<(), Self::Error>;
}

impl<T, E, F> Serializer<T> for F
where
    T: ?Sized,
    F: Fn(&T, &mut Document) -> Result<(), E>,
{
    type Error = E;

    fn serialize(&self, item: &T, doc: &mut Document) -> Result<(), E> {
        self(item, doc)
    }
}

/// Associates a domain type with the serializer used when no other is selected.
///
/// This is the registry half of serializer selection: [`Document::entity`] and
/// [`Document::entities`] look the serializer up here.
pub trait HasSerializer {
    type Serializer: Serializer<Self> + Default;
}

/// Error type of `T`'s default serializer.
pub type SerializerError<T> = <<T as HasSerializer>::Serializer as Serializer<T>>::Error;

/// Pins a closure to the serializer signature so its argument types are inferred.
///
/// ```rust
/// use siren_adapter::framework::{from_fn, to_siren, Context};
/// use siren_adapter::siren::Document;
/// use std::convert::Infallible;
///
/// let tag = from_fn(|name: &str, doc: &mut Document| {
///     doc.r#type(["tag"]).property("name", name);
///     Ok::<_, Infallible>(())
/// });
/// let value = to_siren("rust", &tag, Context::new()).unwrap();
/// assert_eq!(value["properties"]["name"], "rust");
/// ```
pub fn from_fn<T, E, F>(f: F) -> F
where
    T: ?Sized,
    F: Fn(&T, &mut Document) -> Result<(), E>,
{
    f
}

// =============================================================================
// 2. THE ROOT PASS
// =============================================================================

/// Serializes `item` as a root entity and finalizes it under `context`'s collapse policy.
pub fn to_siren<T, S>(item: &T, serializer: &S, context: Context) -> Result<Value, S::Error>
where
    T: ?Sized,
    S: Serializer<T> + ?Sized,
{
    let doc = Document::build(item, serializer, context)?;
    debug!(item_type = short_type_name::<T>(), "Root entity built");
    Ok(doc.to_value())
}

/// Type name without its module path or generic arguments
/// (e.g. "Order" instead of "my_app::model::Order", "Vec" for `Vec<Order>`).
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::convert::Infallible;

    #[derive(Default)]
    struct TagSerializer;

    impl Serializer<str> for TagSerializer {
        type Error = Infallible;

        fn serialize(&self, item: &str, doc: &mut Document) -> Result<(), Infallible> {
            doc.r#type(["tag"]).property("name", item);
            Ok(())
        }
    }

    #[test]
    fn test_to_siren_uses_context_collapse_policy() {
        let collapsed = to_siren(
            "rust",
            &TagSerializer,
            Context::new().with(Context::COLLAPSE_OPTIONAL_ATTRIBUTES, true),
        )
        .unwrap();
        assert_eq!(collapsed, json!({"class": ["tag"], "properties": {"name": "rust"}}));

        let full = to_siren("rust", &TagSerializer, Context::new()).unwrap();
        assert_eq!(full["links"], json!([]));
        assert_eq!(full["entities"], json!([]));
        assert_eq!(full["actions"], json!([]));
    }

    #[test]
    fn test_closure_serializer_error_is_returned_unchanged() {
        let failing = from_fn(|_: &u32, _: &mut Document| Err::<(), _>("boom"));
        assert_eq!(to_siren(&7, &failing, Context::new()), Err("boom"));
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name::<TagSerializer>(), "TagSerializer");
        assert_eq!(short_type_name::<str>(), "str");
    }

    #[test]
    fn test_short_type_name_drops_generic_arguments() {
        assert_eq!(short_type_name::<Vec<crate::model::LineItem>>(), "Vec");
        assert_eq!(
            short_type_name::<std::collections::HashMap<String, crate::model::Order>>(),
            "HashMap"
        );
    }
}
