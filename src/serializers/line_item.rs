use super::{base_url, LineItemError};
use crate::framework::{HasSerializer, Serializer};
use crate::model::LineItem;
use crate::siren::Document;

/// Renders a [`LineItem`] as an `items`/`info` entity.
///
/// Fails with [`LineItemError::InvalidQuantity`] for zero-quantity lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct LineItemSerializer;

impl Serializer<LineItem> for LineItemSerializer {
    type Error = LineItemError;

    fn serialize(&self, item: &LineItem, doc: &mut Document) -> Result<(), LineItemError> {
        if item.quantity == 0 {
            return Err(LineItemError::InvalidQuantity(item.product_code.clone()));
        }

        let base = base_url(doc.context());
        doc.r#type(["items", "info"]);
        doc.properties_from(item)?;
        doc.property("subtotal", item.subtotal())
            .link("product", [("href", format!("{base}/products/{}", item.product_code))]);
        Ok(())
    }
}

impl HasSerializer for LineItem {
    type Serializer = LineItemSerializer;
}
