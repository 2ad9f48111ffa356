use storefront_core::error::require_text;
use storefront_core::{DomainError, DomainResult, Entity, EntityId};

use crate::address::Address;
use crate::events::{
    CustomerAddressChanged, CustomerAddressChangedEvent, CustomerCreated, CustomerCreatedEvent,
};

/// Entity: Customer.
///
/// State-changing operations that other parts of the system care about return
/// the corresponding event; the caller decides where to dispatch it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    id: EntityId,
    name: String,
    address: Option<Address>,
    active: bool,
    reward_points: u64,
}

impl Customer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        require_text("name", &name)?;
        Ok(Self {
            id: EntityId::parse(id)?,
            name,
            address: None,
            active: false,
            reward_points: 0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn reward_points(&self) -> u64 {
        self.reward_points
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        require_text("name", &name)?;
        self.name = name;
        Ok(())
    }

    /// Move the customer to `address`.
    pub fn change_address(&mut self, address: Address) -> CustomerAddressChangedEvent {
        let formatted = address.to_string();
        self.address = Some(address);
        CustomerAddressChangedEvent::new(CustomerAddressChanged {
            id: self.id.clone(),
            name: self.name.clone(),
            address: formatted,
        })
    }

    /// Invariant: only customers with an address can be activated.
    pub fn activate(&mut self) -> DomainResult<()> {
        if self.address.is_none() {
            return Err(DomainError::invariant(
                "address is mandatory to activate a customer",
            ));
        }
        self.active = true;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn add_reward_points(&mut self, points: u64) {
        self.reward_points = self.reward_points.saturating_add(points);
    }

    pub fn created_event(&self) -> CustomerCreatedEvent {
        CustomerCreatedEvent::new(CustomerCreated {
            id: self.id.clone(),
            name: self.name.clone(),
        })
    }
}

impl Entity for Customer {
    type Id = EntityId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
