use storefront_events::{DomainEvent, EventHandler, downcast_event};

use crate::events::ProductCreatedEvent;

/// Announces new products by email (logged, not delivered).
#[derive(Debug, Clone)]
pub struct SendEmailWhenProductIsCreatedHandler {
    recipient: String,
}

impl Default for SendEmailWhenProductIsCreatedHandler {
    fn default() -> Self {
        Self::new("catalogue@storefront.local")
    }
}

impl SendEmailWhenProductIsCreatedHandler {
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
        }
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn subject(event: &ProductCreatedEvent) -> String {
        format!("New product: {}", event.payload().name)
    }
}

impl EventHandler for SendEmailWhenProductIsCreatedHandler {
    fn handle(&self, event: &dyn DomainEvent) -> anyhow::Result<()> {
        let event = downcast_event::<ProductCreatedEvent>(event)?;
        let body = serde_json::to_string(event.payload())?;
        tracing::info!(
            to = %self.recipient,
            subject = %Self::subject(event),
            body = %body,
            "sending product created email"
        );
        Ok(())
    }
}
