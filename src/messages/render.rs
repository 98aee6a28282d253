//! Render state - data structure sent from App layer to UI for rendering

use crate::constants::DEFAULT_STORE_NAME;
use crate::views::{ProductsSnapshot, Route};

/// Complete state needed by the UI to render
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub store_name: String,
    pub route: Route,
    /// Present while a product grid route is mounted
    pub products: Option<ProductsSnapshot>,
    pub show_help: bool,
    /// One-line note for the status bar
    pub notice: Option<String>,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            store_name: String::from(DEFAULT_STORE_NAME),
            route: Route::Landing,
            products: None,
            show_help: false,
            notice: None,
        }
    }
}
