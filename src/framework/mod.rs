//! Generic serializer framework.
//!
//! This module provides the pieces that sit around the Siren builder: the
//! serializer contract, serializer selection, the propagated context and the
//! adapter's own errors.
//!
//! # Main Components
//!
//! - [`Serializer`] - Definition logic that populates a [`Document`](crate::siren::Document)
//! - [`HasSerializer`] - Default serializer selection per domain type
//! - [`Context`] - Options inherited by nested entities (e.g. the collapse flag)
//! - [`SirenError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test composition without real serializers.

pub mod context;
pub mod core;
pub mod error;
pub mod mock;

// Re-export core types for convenience
pub use context::Context;
pub use self::core::*;
pub use error::SirenError;
