//! # Siren Adapter Demo
//!
//! Renders a sample order as a Siren document and prints it.
//!
//! The context can be supplied as a JSON object in `SIREN_CONTEXT`; by default links are
//! rooted at `http://api.example.com` and empty attributes are collapsed.

use siren_adapter::framework::{Context, SirenError};
use siren_adapter::model::{Customer, LineItem, Order};
use siren_adapter::runtime::setup_tracing;
use siren_adapter::serializers::{OrderSerializer, BASE_URL};
use siren_adapter::siren::Document;
use tracing::{error, info};

fn load_context() -> Result<Context, SirenError> {
    match std::env::var("SIREN_CONTEXT") {
        Ok(json) => Context::from_json_str(&json),
        Err(_) => Ok(Context::new()
            .with(Context::COLLAPSE_OPTIONAL_ATTRIBUTES, true)
            .with(BASE_URL, "http://api.example.com")),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let context = load_context()?;
    info!(collapse = context.collapse_optional_attributes(), "Starting siren demo");

    let order = Order::new(42, "USD")
        .with_customer(Customer::new(7, "Alice", "alice@example.com"))
        .with_item(LineItem::new("W-1", "Super Widget", 3, 25.5))
        .with_item(LineItem::new("G-7", "Gadget", 1, 10.0));

    let doc = match Document::build(&order, &OrderSerializer, context) {
        Ok(doc) => doc,
        Err(e) => {
            error!(error = %e, "Order rendering failed");
            return Err(e.into());
        }
    };

    println!("{}", doc.to_json_pretty()?);
    info!(entities = doc.entity_count(), "Order rendered");
    Ok(())
}
