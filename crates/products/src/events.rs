use serde::{Deserialize, Serialize};

use storefront_events::domain_event;

/// Payload: a product was added to the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreated {
    pub name: String,
    pub description: String,
    pub price: f64,
}

domain_event! {
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct ProductCreatedEvent(ProductCreated);
}
