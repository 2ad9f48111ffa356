//! Side-effect handlers for customer events.
//!
//! Notifications are written to the log; delivery channels are wired elsewhere.

use storefront_events::{DomainEvent, EventHandler, downcast_event};

use crate::events::{CustomerAddressChangedEvent, CustomerCreatedEvent};

#[derive(Debug, Default, Clone, Copy)]
pub struct FirstNotifyWhenCustomerCreatedHandler;

impl FirstNotifyWhenCustomerCreatedHandler {
    pub fn message(event: &CustomerCreatedEvent) -> String {
        format!(
            "first notification for CustomerCreated: {}",
            event.payload().name
        )
    }
}

impl EventHandler for FirstNotifyWhenCustomerCreatedHandler {
    fn handle(&self, event: &dyn DomainEvent) -> anyhow::Result<()> {
        let event = downcast_event::<CustomerCreatedEvent>(event)?;
        tracing::info!(customer_id = %event.payload().id, "{}", Self::message(event));
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SecondNotifyWhenCustomerCreatedHandler;

impl SecondNotifyWhenCustomerCreatedHandler {
    pub fn message(event: &CustomerCreatedEvent) -> String {
        format!(
            "second notification for CustomerCreated: {}",
            event.payload().name
        )
    }
}

impl EventHandler for SecondNotifyWhenCustomerCreatedHandler {
    fn handle(&self, event: &dyn DomainEvent) -> anyhow::Result<()> {
        let event = downcast_event::<CustomerCreatedEvent>(event)?;
        tracing::info!(customer_id = %event.payload().id, "{}", Self::message(event));
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NotifyWhenCustomerAddressChangedHandler;

impl NotifyWhenCustomerAddressChangedHandler {
    pub fn message(event: &CustomerAddressChangedEvent) -> String {
        let payload = event.payload();
        format!(
            "customer address {}, {} changed to: {}",
            payload.id, payload.name, payload.address
        )
    }
}

impl EventHandler for NotifyWhenCustomerAddressChangedHandler {
    fn handle(&self, event: &dyn DomainEvent) -> anyhow::Result<()> {
        let event = downcast_event::<CustomerAddressChangedEvent>(event)?;
        tracing::info!(customer_id = %event.payload().id, "{}", Self::message(event));
        Ok(())
    }
}
