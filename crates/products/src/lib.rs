//! Products domain module.
//!
//! Product catalogue rules, the `ProductCreatedEvent` and its handlers,
//! implemented as deterministic domain logic (no IO).

pub mod events;
pub mod handlers;
pub mod product;

pub use events::{ProductCreated, ProductCreatedEvent};
pub use handlers::SendEmailWhenProductIsCreatedHandler;
pub use product::Product;
