//! # Observability & Tracing
//!
//! The adapter logs through the `tracing` crate with structured fields. Nothing is
//! printed unless the embedding application installs a subscriber; [`setup_tracing`]
//! installs the one used by the demo binary.
//!
//! ## What Gets Traced
//!
//! - **Root passes** (`debug`): the domain type that was rendered
//! - **Embedding** (`debug`): every embedded or skipped sub-entity, with its call name
//! - **Actions and finalization** (`trace`): action names, field counts, remaining keys
//!
//! ## Usage Examples
//!
//! ```bash
//! # Embedding decisions
//! RUST_LOG=debug cargo run
//!
//! # Everything, including finalization
//! RUST_LOG=siren_adapter=trace cargo run
//! ```
//!
//! **With `RUST_LOG=debug`**:
//!
//! ```text
//! DEBUG Skipping empty entity entity="customer" item_type="Customer"
//! DEBUG Embedded entity entity="items" item_type="LineItem" count=1
//! DEBUG Root entity built item_type="Order"
//! ```

/// Initializes the tracing subscriber, filtered by the `RUST_LOG` environment variable.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Module paths add nothing; events carry item_type
        .compact()
        .init();
}
