//! Events emitted by the customer entity.

use serde::{Deserialize, Serialize};

use storefront_core::EntityId;
use storefront_events::domain_event;

/// Payload: a customer was created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerCreated {
    pub id: EntityId,
    pub name: String,
}

/// Payload: a customer moved to a new address.
///
/// `address` is the formatted single-line address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerAddressChanged {
    pub id: EntityId,
    pub name: String,
    pub address: String,
}

domain_event! {
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct CustomerCreatedEvent(CustomerCreated);
}

domain_event! {
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct CustomerAddressChangedEvent(CustomerAddressChanged);
}
