//! Serializers for the sample [`model`](crate::model).
//!
//! Each serializer implements [`Serializer`](crate::framework::Serializer) for one domain
//! type and registers itself as that type's default through
//! [`HasSerializer`](crate::framework::HasSerializer). Links are built against the
//! `base_url` context option, which nested serializers inherit from the root.

pub mod customer;
pub mod error;
pub mod line_item;
pub mod order;

pub use customer::*;
pub use error::*;
pub use line_item::*;
pub use order::*;

use crate::framework::Context;

/// Context key holding the URL prefix for generated links.
pub const BASE_URL: &str = "base_url";

fn base_url(context: &Context) -> String {
    context
        .get_str(BASE_URL)
        .unwrap_or("")
        .trim_end_matches('/')
        .to_string()
}
