//! View layer - pages, sections and the product grid state they own
//!
//! Static views are plain data; the product grid is the only view with
//! backend-driven state.

pub mod about;
pub mod benefits;
pub mod carousel;
pub mod navbar;
pub mod products;
pub mod routes;

pub use carousel::{CardDisplay, CarouselPosition};
pub use products::{FetchState, ProductCard, ProductsSnapshot, ProductsView, StarSlot};
pub use routes::Route;
