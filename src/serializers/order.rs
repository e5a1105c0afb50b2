use super::{base_url, OrderError};
use crate::framework::{HasSerializer, Serializer};
use crate::model::{Order, OrderStatus};
use crate::siren::Document;

/// Renders an [`Order`] with its customer and line items as sub-entities.
///
/// Pending orders additionally offer an `add-item` action.
#[derive(Debug, Default, Clone, Copy)]
pub struct OrderSerializer;

impl Serializer<Order> for OrderSerializer {
    type Error = OrderError;

    fn serialize(&self, order: &Order, doc: &mut Document) -> Result<(), OrderError> {
        if order.currency.is_empty() {
            return Err(OrderError::ValidationError(format!(
                "order {} has no currency",
                order.number
            )));
        }

        let base = base_url(doc.context());
        let href = format!("{base}/orders/{}", order.number);

        doc.r#type(["order"]).title(format!("Order {}", order.number));
        doc.properties(|props| {
            props.insert("orderNumber".into(), order.number.into());
            props.insert("status".into(), order.status.as_str().into());
            props.insert("currency".into(), order.currency.as_str().into());
            props.insert("itemCount".into(), order.items.len().into());
            props.insert("total".into(), order.total().into());
        });
        doc.link("self", [("href", href.as_str())]);

        doc.entity("customer", order.customer.as_ref())?;
        doc.entities("items", &order.items)?;

        if order.status == OrderStatus::Pending {
            doc.action("add-item", |action| {
                action
                    .title("Add Item")
                    .method("POST")
                    .href(format!("{href}/items"))
                    .r#type("application/x-www-form-urlencoded");
                action.field("orderNumber", |field| {
                    field.r#type("hidden").value(order.number);
                });
                action.field("productCode", |field| {
                    field.r#type("text");
                });
                action.field("quantity", |field| {
                    field.r#type("number").title("Quantity");
                });
            });
        }
        Ok(())
    }
}

impl HasSerializer for Order {
    type Serializer = OrderSerializer;
}
