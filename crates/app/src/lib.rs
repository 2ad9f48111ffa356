//! Application wiring: which handlers react to which domain events.

pub mod wiring;

pub use wiring::{default_dispatcher, register_default_handlers};
