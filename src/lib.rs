#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Siren Adapter
//!
//! > **Render domain objects as Siren hypermedia entities.**
//!
//! This crate turns an in-memory domain object, together with a serializer describing
//! it, into a [Siren](https://github.com/kevinswiber/siren) entity graph: classes,
//! properties, links, nested entities and actions with typed input fields. The result
//! is a plain `serde_json` value ready to be written to the wire.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Assembler, not validator
//! The builder assembles whatever the serializer asks for. Duplicate link relations,
//! repeated action names or a `rel` supplied inside link attributes all pass through
//! unchanged. Keeping the output well-formed is the serializer's job.
//!
//! ### Explicit wiring
//! Nothing is looked up behind your back:
//! - **Serializer selection** is a type-level default ([`HasSerializer`](framework::HasSerializer))
//!   or an explicit argument ([`Document::entity_with`](siren::Document::entity_with)).
//! - **Configuration** travels in a [`Context`](framework::Context) that nested entities
//!   inherit and may override per call.
//!
//! ## 🚀 Core Concepts
//!
//! ```rust
//! use siren_adapter::framework::{from_fn, to_siren, Context};
//! use siren_adapter::siren::Document;
//! use serde_json::json;
//! use std::convert::Infallible;
//!
//! struct Order { number: u32 }
//!
//! let serializer = from_fn(|order: &Order, doc: &mut Document| {
//!     doc.r#type(["order"]).property("orderNumber", order.number);
//!     doc.action("add-item", |action| {
//!         action.method("POST");
//!         action.field("quantity", |field| {
//!             field.r#type("number");
//!         });
//!     });
//!     Ok::<_, Infallible>(())
//! });
//!
//! let context = Context::new().with(Context::COLLAPSE_OPTIONAL_ATTRIBUTES, true);
//! let value = to_siren(&Order { number: 42 }, &serializer, context).unwrap();
//!
//! assert_eq!(value, json!({
//!     "class": ["order"],
//!     "properties": {"orderNumber": 42},
//!     "actions": [{
//!         "name": "add-item",
//!         "class": [],
//!         "method": "POST",
//!         "fields": [{"name": "quantity", "type": "number"}]
//!     }]
//! }));
//! ```
//!
//! ### Collapsing
//! With `collapse_optional_attributes` set, empty top-level attributes (`links`,
//! `entities`, ... ) are left out, as above. Without it every document carries all of
//! them.
//!
//! ### Errors
//! Serializers, property producers and action configurators report failures in their own
//! error types; the adapter returns those untouched and never appends a half-built
//! entity or action. The adapter's own failures are [`SirenError`](framework::SirenError).
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Builder ([`siren`])
//! - **Role**: Accumulates one entity and finalizes it.
//! - **Key items**: [`Document`](siren::Document), [`ActionBuilder`](siren::ActionBuilder), [`FieldBuilder`](siren::FieldBuilder).
//!
//! ### 2. The Framework ([`framework`])
//! - **Role**: Serializer contract, selection, context and errors.
//! - **Key items**: [`Serializer`](framework::Serializer), [`Context`](framework::Context), [`to_siren`](framework::to_siren).
//!
//! ### 3. The Sample ([`model`], [`serializers`])
//! - **Role**: An order with a customer and line items, rendered with nested entities and an action.
//!
//! ### 4. Runtime ([`runtime`])
//! - **Role**: Logging setup for binaries.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Print the sample order, with embedding logs
//! RUST_LOG=debug cargo run
//!
//! cargo test
//! ```

pub mod framework;
pub mod model;
pub mod runtime;
pub mod serializers;
pub mod siren;
