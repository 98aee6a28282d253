//! # Storefront TUI
//!
//! A terminal storefront backed by a product REST API.
//!
//! ## Features
//! - Landing page: navbar, featured products, benefits panel
//! - Per-product image carousel, star ratings, wishlist toggle
//! - Full catalog page
//! - About page
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine, owns mounted views)
//! - Network Layer (Tokio runtime, cancellable fetches)

pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod messages;
pub mod models;
pub mod network;
pub mod ui;
pub mod views;

// Re-export commonly used types
pub use app::{AppActor, AppState};
pub use config::Config;
pub use error::{ApiError, ShapeError};
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use models::{Product, ProductId, ProductImage};
pub use network::{ApiClient, NetworkActor, ProductApi, ProductQuery};
pub use views::{FetchState, ProductsView, Route};
