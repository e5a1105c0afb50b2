//! Siren entity builder.
//!
//! Turns imperative builder calls into a Siren entity graph:
//! classes, properties, links, nested entities and actions with typed fields.
//!
//! # Main Components
//!
//! - [`Document`] - Accumulator for one entity (root or nested)
//! - [`ActionBuilder`] / [`Action`] - Actions and their records
//! - [`FieldBuilder`] / [`Field`] - Input fields of an action
//! - [`composer`] - Recursive embedding of nested entities
//! - [`finalize`] - Conversion to the structural mapping, with optional collapsing

pub mod action;
pub mod composer;
pub mod document;
pub mod field;
pub mod finalize;

pub use action::{Action, ActionBuilder};
pub use document::{Document, Link, Properties};
pub use field::{Field, FieldBuilder};
