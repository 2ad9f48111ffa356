use std::sync::{Arc, Mutex};

use storefront_core::Entity;
use storefront_customers::{
    Address, Customer, CustomerAddressChangedEvent, CustomerCreated, CustomerCreatedEvent,
    FirstNotifyWhenCustomerCreatedHandler, NotifyWhenCustomerAddressChangedHandler,
    SecondNotifyWhenCustomerCreatedHandler,
};
use storefront_events::{DispatchError, DomainEvent, EventDispatcher, EventHandler, handler_fn};
use storefront_products::{ProductCreated, ProductCreatedEvent, SendEmailWhenProductIsCreatedHandler};

/// Wraps a real handler and records every event type it was invoked with.
struct Spy<H> {
    label: &'static str,
    inner: H,
    calls: Arc<Mutex<Vec<String>>>,
}

impl<H: EventHandler> Spy<H> {
    fn new(label: &'static str, inner: H, calls: &Arc<Mutex<Vec<String>>>) -> Arc<Self> {
        Arc::new(Self {
            label,
            inner,
            calls: Arc::clone(calls),
        })
    }
}

impl<H: EventHandler> EventHandler for Spy<H> {
    fn handle(&self, event: &dyn DomainEvent) -> anyhow::Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{}:{}", self.label, event.event_type()));
        self.inner.handle(event)
    }
}

fn call_log() -> Arc<Mutex<Vec<String>>> {
    Arc::new(Mutex::new(Vec::new()))
}

fn product_created_event() -> ProductCreatedEvent {
    ProductCreatedEvent::new(ProductCreated {
        name: "Product 1".to_string(),
        description: "Product 1 description".to_string(),
        price: 10.0,
    })
}

#[test]
fn registers_an_event_handler() {
    let mut dispatcher = EventDispatcher::new();
    let handler: Arc<dyn EventHandler> = Arc::new(SendEmailWhenProductIsCreatedHandler::default());

    dispatcher.register("ProductCreatedEvent", handler.clone());

    let handlers = dispatcher.handlers("ProductCreatedEvent").unwrap();
    assert_eq!(handlers.len(), 1);
    assert!(Arc::ptr_eq(&handlers[0], &handler));
}

#[test]
fn unregisters_an_event_handler() {
    let mut dispatcher = EventDispatcher::new();
    let handler = Arc::new(SendEmailWhenProductIsCreatedHandler::default());

    dispatcher.register("ProductCreatedEvent", handler.clone());
    dispatcher.unregister("ProductCreatedEvent", &handler);

    let handlers = dispatcher.handlers("ProductCreatedEvent").unwrap();
    assert_eq!(handlers.len(), 0);
}

#[test]
fn unregisters_all_event_handlers() {
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(
        "ProductCreatedEvent",
        Arc::new(SendEmailWhenProductIsCreatedHandler::default()),
    );

    dispatcher.unregister_all();

    assert!(dispatcher.handlers("ProductCreatedEvent").is_none());
}

#[test]
fn notifies_product_created_handler_once_with_the_event() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let email = call_log();
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(
        ProductCreatedEvent::EVENT_TYPE,
        Spy::new("email", SendEmailWhenProductIsCreatedHandler::default(), &email),
    );
    {
        let seen = Arc::clone(&seen);
        dispatcher.register(
            ProductCreatedEvent::EVENT_TYPE,
            Arc::new(handler_fn("capture", move |event| {
                let event = storefront_events::downcast_event::<ProductCreatedEvent>(event)?;
                seen.lock().unwrap().push(event.clone());
                Ok(())
            })),
        );
    }

    let event = product_created_event();
    dispatcher.notify(&event).unwrap();

    assert_eq!(*email.lock().unwrap(), vec!["email:ProductCreatedEvent"]);
    assert_eq!(*seen.lock().unwrap(), vec![event]);
}

#[test]
fn notifies_customer_created_handlers_in_registration_order() {
    let calls = call_log();
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(
        CustomerCreatedEvent::EVENT_TYPE,
        Spy::new("first", FirstNotifyWhenCustomerCreatedHandler, &calls),
    );
    dispatcher.register(
        CustomerCreatedEvent::EVENT_TYPE,
        Spy::new("second", SecondNotifyWhenCustomerCreatedHandler, &calls),
    );
    assert_eq!(dispatcher.handlers("CustomerCreatedEvent").unwrap().len(), 2);

    let event = CustomerCreatedEvent::new(CustomerCreated {
        id: "uuid-1".parse().unwrap(),
        name: "Customer Changed".to_string(),
    });
    dispatcher.notify(&event).unwrap();

    assert_eq!(
        *calls.lock().unwrap(),
        vec!["first:CustomerCreatedEvent", "second:CustomerCreatedEvent"]
    );
}

#[test]
fn notifies_customer_address_changed_handler() {
    let calls = call_log();
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(
        CustomerAddressChangedEvent::EVENT_TYPE,
        Spy::new("address", NotifyWhenCustomerAddressChangedHandler, &calls),
    );

    let mut customer = Customer::new("uuid-1", "Customer Name").unwrap();
    let event = customer.change_address(Address::new("Rua A", 123, "zip-123", "City A").unwrap());
    dispatcher.notify(&event).unwrap();

    assert_eq!(*calls.lock().unwrap(), vec!["address:CustomerAddressChangedEvent"]);
    assert_eq!(event.payload().id, *customer.id());
}

#[test]
fn handlers_never_see_other_event_types() {
    let calls = call_log();
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(
        CustomerCreatedEvent::EVENT_TYPE,
        Spy::new("first", FirstNotifyWhenCustomerCreatedHandler, &calls),
    );

    dispatcher.notify(&product_created_event()).unwrap();

    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn mis_registered_handler_fails_without_silencing_the_others() {
    let calls = call_log();
    let mut dispatcher = EventDispatcher::new();
    // Address handler wired to the wrong event type by mistake.
    dispatcher.register(
        CustomerCreatedEvent::EVENT_TYPE,
        Spy::new("address", NotifyWhenCustomerAddressChangedHandler, &calls),
    );
    dispatcher.register(
        CustomerCreatedEvent::EVENT_TYPE,
        Spy::new("first", FirstNotifyWhenCustomerCreatedHandler, &calls),
    );

    let customer = Customer::new("uuid-1", "Customer Name").unwrap();
    let err = dispatcher.notify(&customer.created_event()).unwrap_err();

    assert_eq!(
        *calls.lock().unwrap(),
        vec!["address:CustomerCreatedEvent", "first:CustomerCreatedEvent"]
    );
    let DispatchError::HandlersFailed { failures, attempted, .. } = err;
    assert_eq!(attempted, 2);
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].position, 0);
}

#[test]
fn default_wiring_handles_every_storefront_event() {
    let dispatcher = storefront_app::default_dispatcher();

    let product = storefront_products::Product::new("p-1", "Product 1", 10.0).unwrap();
    dispatcher.notify(&product.created_event("Product 1 description")).unwrap();

    let mut customer = Customer::new("uuid-1", "Customer Name").unwrap();
    dispatcher.notify(&customer.created_event()).unwrap();

    let event = customer.change_address(Address::new("Rua A", 123, "zip-123", "City A").unwrap());
    dispatcher.notify(&event).unwrap();
}
