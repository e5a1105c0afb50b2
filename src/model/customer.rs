/// Represents the customer who placed an order.
///
/// Rendered by [`CustomerSerializer`](crate::serializers::CustomerSerializer).
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: u32,
    pub name: String,
    pub email: String,
}

impl Customer {
    /// Creates a new Customer instance.
    ///
    /// # Arguments
    /// * `id` - Customer number
    /// * `name` - Display name
    /// * `email` - Contact address
    pub fn new(id: u32, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}
