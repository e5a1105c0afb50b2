use serde::{Deserialize, Serialize};

/// One product line of an order.
///
/// The serde form doubles as the entity's property set, so field names follow the
/// camelCase convention of the rendered documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product_code: String,
    pub description: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl LineItem {
    pub fn new(
        product_code: impl Into<String>,
        description: impl Into<String>,
        quantity: u32,
        unit_price: f64,
    ) -> Self {
        Self {
            product_code: product_code.into(),
            description: description.into(),
            quantity,
            unit_price,
        }
    }

    pub fn subtotal(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}
