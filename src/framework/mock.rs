//! # Mock Framework
//!
//! Utilities for testing serializer composition in isolation.
//!
//! [`MockSerializer`] implements [`Serializer`] for any item type and answers each call
//! from a queue of expectations, so embedding and error propagation can be tested
//! without writing real serializers.

use crate::framework::Serializer;
use crate::siren::{Document, Properties};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected call to the mock serializer.
enum Expectation<E> {
    /// Populate the document with these properties and succeed.
    Ok { properties: Properties },
    /// Fail with this error, leaving the document untouched.
    Err { error: E },
}

/// A mock serializer with expectation tracking for fluent testing.
///
/// # Example
/// ```
/// use siren_adapter::framework::mock::MockSerializer;
/// use siren_adapter::framework::Context;
/// use siren_adapter::siren::Document;
///
/// let mut mock = MockSerializer::<String>::new();
/// mock.expect_call().return_ok(Default::default());
/// mock.expect_call().return_err("nope".to_string());
///
/// let mut doc = Document::new(Context::new());
/// doc.entity_with("first", Some(&1), &mock, &Context::new()).unwrap();
/// let err = doc.entity_with("second", Some(&2), &mock, &Context::new()).unwrap_err();
///
/// assert_eq!(err, "nope");
/// assert_eq!(doc.entity_count(), 1);
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockSerializer<E> {
    expectations: Arc<Mutex<VecDeque<Expectation<E>>>>,
    calls: Arc<Mutex<usize>>,
}

impl<E> MockSerializer<E> {
    /// Creates a new mock serializer with no expectations.
    pub fn new() -> Self {
        Self {
            expectations: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Expects one more `serialize` call.
    pub fn expect_call(&mut self) -> CallExpectationBuilder<E> {
        CallExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Number of `serialize` calls received so far.
    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

impl<E> Default for MockSerializer<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized, E> Serializer<T> for MockSerializer<E> {
    type Error = E;

    fn serialize(&self, _item: &T, doc: &mut Document) -> Result<(), E> {
        *self.calls.lock().unwrap() += 1;
        let expectation = self.expectations.lock().unwrap().pop_front();

        match expectation {
            Some(Expectation::Ok { properties }) => {
                doc.properties(|props| props.extend(properties));
                Ok(())
            }
            Some(Expectation::Err { error }) => Err(error),
            None => panic!("Unexpected serialize call"),
        }
    }
}

/// Builder for `serialize` expectations.
pub struct CallExpectationBuilder<E> {
    expectations: Arc<Mutex<VecDeque<Expectation<E>>>>,
}

impl<E> CallExpectationBuilder<E> {
    /// Sets the expectation to populate these properties and succeed.
    pub fn return_ok(self, properties: Properties) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Ok { properties });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: E) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Err { error });
    }
}
