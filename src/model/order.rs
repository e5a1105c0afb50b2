use super::{Customer, LineItem};
use std::fmt::Display;

/// Lifecycle state of an [`Order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    /// Still editable: items can be added.
    Pending,
    Shipped,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a customer order.
///
/// Rendered by [`OrderSerializer`](crate::serializers::OrderSerializer), which embeds
/// the customer (when known) and every line item as sub-entities.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub number: u32,
    pub status: OrderStatus,
    pub currency: String,
    pub customer: Option<Customer>,
    pub items: Vec<LineItem>,
}

impl Order {
    /// Creates a new pending Order with no customer and no items.
    ///
    /// # Arguments
    /// * `number` - Order number
    /// * `currency` - ISO currency code used for every price on the order
    pub fn new(number: u32, currency: impl Into<String>) -> Self {
        Self {
            number,
            status: OrderStatus::Pending,
            currency: currency.into(),
            customer: None,
            items: Vec::new(),
        }
    }

    pub fn with_customer(mut self, customer: Customer) -> Self {
        self.customer = Some(customer);
        self
    }

    pub fn with_item(mut self, item: LineItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(LineItem::subtotal).sum()
    }
}
