//! Customers domain module.
//!
//! Business rules for customers and their addresses, plus the events a
//! customer emits and the handlers that react to them. Pure domain logic:
//! handlers only log their notifications.

pub mod address;
pub mod customer;
pub mod events;
pub mod handlers;

pub use address::Address;
pub use customer::Customer;
pub use events::{
    CustomerAddressChanged, CustomerAddressChangedEvent, CustomerCreated, CustomerCreatedEvent,
};
pub use handlers::{
    FirstNotifyWhenCustomerCreatedHandler, NotifyWhenCustomerAddressChangedHandler,
    SecondNotifyWhenCustomerCreatedHandler,
};
