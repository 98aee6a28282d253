//! Network layer - backend client, product facade and the fetch actor
//!
//! The Network actor receives fetch commands and sends back raw responses.

pub mod actor;
pub mod client;
pub mod products;

pub use actor::NetworkActor;
pub use client::ApiClient;
pub use products::{ProductApi, ProductQuery};
