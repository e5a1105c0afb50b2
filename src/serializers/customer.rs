use std::convert::Infallible;

use super::base_url;
use crate::framework::{HasSerializer, Serializer};
use crate::model::Customer;
use crate::siren::Document;

/// Renders a [`Customer`] as an `info`/`customer` entity.
#[derive(Debug, Default, Clone, Copy)]
pub struct CustomerSerializer;

impl Serializer<Customer> for CustomerSerializer {
    type Error = Infallible;

    fn serialize(&self, customer: &Customer, doc: &mut Document) -> Result<(), Infallible> {
        let base = base_url(doc.context());
        doc.r#type(["info", "customer"])
            .property("customerId", customer.id)
            .property("name", customer.name.as_str())
            .property("email", customer.email.as_str())
            .link("self", [("href", format!("{base}/customers/{}", customer.id))]);
        Ok(())
    }
}

impl HasSerializer for Customer {
    type Serializer = CustomerSerializer;
}
