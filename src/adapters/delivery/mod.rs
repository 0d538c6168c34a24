//! Delivery adapters - Implementations of the ResultDelivery port.
//!
//! - `ResendDelivery` - Mail through the Resend HTTP API
//! - `InMemoryDelivery` - Records messages (tests, unconfigured environments)

mod in_memory;
mod resend;

pub use in_memory::InMemoryDelivery;
pub use resend::{ResendConfig, ResendDelivery, RESEND_API_BASE_URL};
