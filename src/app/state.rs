//! App state - pure data structure with no I/O logic

use crate::messages::RenderState;
use crate::views::{ProductsView, Route};

/// Main application state - pure data, no I/O
#[derive(Debug)]
pub struct AppState {
    pub store_name: String,
    pub route: Route,

    /// The product grid of the current route, if it has one
    pub products: Option<ProductsView>,
    pub next_request_id: u64,

    // Popups and notices
    pub show_help: bool,
    pub notice: Option<String>,
}

impl AppState {
    pub fn new(store_name: impl Into<String>) -> Self {
        AppState {
            store_name: store_name.into(),
            route: Route::Landing,
            products: None,
            next_request_id: 1,
            show_help: false,
            notice: None,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            store_name: self.store_name.clone(),
            route: self.route,
            products: self.products.as_ref().map(|view| view.snapshot()),
            show_help: self.show_help,
            notice: self.notice.clone(),
        }
    }
}
