//! # Entity Composer
//!
//! Recursive embedding of nested entities. Each embedded object gets its own
//! [`Document`], built by the selected serializer under the parent's context merged
//! with the call's options, finalized, and appended in its finalized form.
//!
//! An absent object (`None`) resolves to no serializer and is skipped. That is not an
//! error. The `name` argument only labels the call in logs; Siren sub-entities are
//! positional, so it never appears in the output.

use tracing::debug;

use super::document::Document;
use crate::framework::core::short_type_name;
use crate::framework::{Context, HasSerializer, Serializer, SerializerError};

impl Document {
    /// Embeds `item` using its default serializer and no extra options.
    ///
    /// `item` may be `&T`, `Option<&T>` or `&Option<T>`; an absent value is skipped.
    pub fn entity<'a, T, O>(&mut self, name: &str, item: O) -> Result<&mut Self, SerializerError<T>>
    where
        T: HasSerializer + 'a,
        O: Into<Option<&'a T>>,
    {
        self.entity_with(name, item, &T::Serializer::default(), &Context::new())
    }

    /// Embeds `item` using `serializer`, with `options` layered over the inherited context.
    ///
    /// If the serializer fails, the error is returned unchanged and nothing is appended.
    pub fn entity_with<'a, T, O, S>(
        &mut self,
        name: &str,
        item: O,
        serializer: &S,
        options: &Context,
    ) -> Result<&mut Self, S::Error>
    where
        T: ?Sized + 'a,
        O: Into<Option<&'a T>>,
        S: Serializer<T> + ?Sized,
    {
        let item_type = short_type_name::<T>();
        let Some(item) = item.into() else {
            debug!(entity = name, item_type, "Skipping empty entity");
            return Ok(self);
        };

        let child = Document::build(item, serializer, self.context.merge(options))?;
        self.entities.push(child.to_value());
        debug!(entity = name, item_type, count = self.entities.len(), "Embedded entity");
        Ok(self)
    }

    /// Embeds every element of `collection` with its default serializer, in order.
    ///
    /// Absent elements are skipped and leave no gap. For collections of `Option<T>` the
    /// element type has to be named: `doc.entities::<Customer, _>("customers", &list)`.
    pub fn entities<'a, T, I>(&mut self, name: &str, collection: I) -> Result<&mut Self, SerializerError<T>>
    where
        T: HasSerializer + 'a,
        I: IntoIterator,
        I::Item: Into<Option<&'a T>>,
    {
        self.entities_with(name, collection, &T::Serializer::default(), &Context::new())
    }

    /// Embeds every element of `collection` with `serializer`, in order.
    ///
    /// Stops at the first failing element and returns its error; elements embedded
    /// before it stay appended.
    pub fn entities_with<'a, T, I, S>(
        &mut self,
        name: &str,
        collection: I,
        serializer: &S,
        options: &Context,
    ) -> Result<&mut Self, S::Error>
    where
        T: ?Sized + 'a,
        I: IntoIterator,
        I::Item: Into<Option<&'a T>>,
        S: Serializer<T> + ?Sized,
    {
        for item in collection {
            self.entity_with(name, item, serializer, options)?;
        }
        Ok(self)
    }

    /// Alias of [`entities`](Self::entities).
    pub fn collection<'a, T, I>(&mut self, name: &str, collection: I) -> Result<&mut Self, SerializerError<T>>
    where
        T: HasSerializer + 'a,
        I: IntoIterator,
        I::Item: Into<Option<&'a T>>,
    {
        self.entities(name, collection)
    }

    /// Alias of [`entities_with`](Self::entities_with).
    pub fn collection_with<'a, T, I, S>(
        &mut self,
        name: &str,
        collection: I,
        serializer: &S,
        options: &Context,
    ) -> Result<&mut Self, S::Error>
    where
        T: ?Sized + 'a,
        I: IntoIterator,
        I::Item: Into<Option<&'a T>>,
        S: Serializer<T> + ?Sized,
    {
        self.entities_with(name, collection, serializer, options)
    }
}
