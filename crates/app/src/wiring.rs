use std::sync::Arc;

use storefront_customers::{
    CustomerAddressChangedEvent, CustomerCreatedEvent, FirstNotifyWhenCustomerCreatedHandler,
    NotifyWhenCustomerAddressChangedHandler, SecondNotifyWhenCustomerCreatedHandler,
};
use storefront_events::EventDispatcher;
use storefront_products::{ProductCreatedEvent, SendEmailWhenProductIsCreatedHandler};

/// Register the storefront's standard handlers on `dispatcher`.
///
/// The two customer-created handlers are registered in order, first then second.
pub fn register_default_handlers(dispatcher: &mut EventDispatcher) {
    dispatcher.register(
        ProductCreatedEvent::EVENT_TYPE,
        Arc::new(SendEmailWhenProductIsCreatedHandler::default()),
    );
    dispatcher.register(
        CustomerCreatedEvent::EVENT_TYPE,
        Arc::new(FirstNotifyWhenCustomerCreatedHandler),
    );
    dispatcher.register(
        CustomerCreatedEvent::EVENT_TYPE,
        Arc::new(SecondNotifyWhenCustomerCreatedHandler),
    );
    dispatcher.register(
        CustomerAddressChangedEvent::EVENT_TYPE,
        Arc::new(NotifyWhenCustomerAddressChangedHandler),
    );
}

pub fn default_dispatcher() -> EventDispatcher {
    let mut dispatcher = EventDispatcher::new();
    register_default_handlers(&mut dispatcher);
    dispatcher
}
