//! Command handlers - business logic for processing UI events

use crate::app::AppState;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::ProductId;
use crate::views::{ProductsView, Route};

impl AppState {
    // ========================
    // Routing
    // ========================

    /// Mount the current route. Returns the fetch to issue, if the route has a product grid.
    pub fn mount(&mut self) -> Option<NetworkCommand> {
        let query = self.route.product_query()?;
        let id = self.next_id();
        tracing::info!(id, route = self.route.path(), "Mounting product view");
        self.products = Some(ProductsView::mount(query, id));
        Some(NetworkCommand::FetchProducts { id, query })
    }

    /// Drop the mounted view. A fetch still in flight is cancelled.
    pub fn unmount(&mut self) -> Option<NetworkCommand> {
        let view = self.products.take()?;
        if view.is_loading() {
            tracing::debug!(id = view.request_id(), "Unmounting view with fetch in flight");
            Some(NetworkCommand::CancelFetch(view.request_id()))
        } else {
            None
        }
    }

    pub fn navigate(&mut self, route: Route) -> Vec<NetworkCommand> {
        if route == self.route {
            return Vec::new();
        }

        let mut commands: Vec<NetworkCommand> = self.unmount().into_iter().collect();
        tracing::info!(from = self.route.path(), to = route.path(), "Navigating");
        self.route = route;
        self.notice = None;
        commands.extend(self.mount());
        commands
    }

    pub fn handle_response(&mut self, response: NetworkResponse) {
        match response {
            NetworkResponse::Products { id, result, .. } => match self.products.as_mut() {
                Some(view) if view.request_id() == id => view.apply(result),
                _ => tracing::debug!(id, "Discarding response for unmounted view"),
            },
            NetworkResponse::Cancelled { id } => {
                tracing::debug!(id, "Fetch cancelled");
            }
        }
    }

    // ========================
    // Product grid
    // ========================

    fn with_selected(&mut self, f: impl FnOnce(&mut ProductsView, ProductId)) {
        if let Some(view) = self.products.as_mut() {
            if let Some(id) = view.selected_id() {
                f(view, id);
            }
        }
    }

    pub fn next_card(&mut self) {
        if let Some(view) = self.products.as_mut() {
            view.select_next();
        }
    }

    pub fn prev_card(&mut self) {
        if let Some(view) = self.products.as_mut() {
            view.select_prev();
        }
    }

    pub fn next_image(&mut self) {
        self.with_selected(|view, id| view.next_image(id));
    }

    pub fn prev_image(&mut self) {
        self.with_selected(|view, id| view.prev_image(id));
    }

    pub fn toggle_wishlist(&mut self) {
        self.with_selected(|view, id| view.toggle_wishlist(id));
    }

    /// Cart has no backend; only acknowledge the selection
    pub fn add_to_cart(&mut self) {
        let name = self
            .products
            .as_ref()
            .and_then(|view| view.selected_product())
            .map(|p| p.name.clone());
        if let Some(name) = name {
            tracing::info!(product = %name, "Add to cart pressed");
            self.notice = Some(format!("{}: checkout is not available yet", name));
        }
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::network::ProductQuery;
    use crate::views::FetchState;
    use serde_json::json;

    fn featured_body() -> serde_json::Value {
        json!({
            "status": "success",
            "count": 2,
            "data": [
                {"id": 1, "name": "Headphones", "category": "Electronics", "price": "89.00",
                 "rating": "4.6", "image_url": "a.png",
                 "additional_images": [{"image_url": "b.png", "alt_text": "Case"}]},
                {"id": 2, "name": "Coffee", "category": "Food", "price": "12.00",
                 "rating": "3.1", "image_url": "c.png", "additional_images": []}
            ]
        })
    }

    fn mounted() -> (AppState, u64) {
        let mut state = AppState::new("Test Shop");
        let cmd = state.mount().unwrap();
        let NetworkCommand::FetchProducts { id, query } = cmd else {
            panic!("expected a fetch command");
        };
        assert_eq!(query, ProductQuery::Featured);
        (state, id)
    }

    #[test]
    fn test_landing_mount_starts_loading() {
        let (state, _) = mounted();
        let render = state.to_render_state();
        assert_eq!(render.products.unwrap().state, FetchState::Loading);
    }

    #[test]
    fn test_response_settles_mounted_view() {
        let (mut state, id) = mounted();
        state.handle_response(NetworkResponse::Products {
            id,
            query: ProductQuery::Featured,
            result: Ok(featured_body()),
        });

        let products = state.to_render_state().products.unwrap();
        assert_eq!(products.state, FetchState::Success);
        assert_eq!(products.cards.len(), 2);
        assert!(products.cards[0].selected);
    }

    #[test]
    fn test_network_failure_shows_message_and_no_cards() {
        let (mut state, id) = mounted();
        state.handle_response(NetworkResponse::Products {
            id,
            query: ProductQuery::Featured,
            result: Err(ApiError::Network("connection refused".into())),
        });

        let products = state.to_render_state().products.unwrap();
        assert_eq!(
            products.state,
            FetchState::Error("Failed to load featured products".into())
        );
        assert!(products.cards.is_empty());
    }

    #[test]
    fn test_navigating_away_cancels_and_discards_late_response() {
        let (mut state, id) = mounted();

        let commands = state.navigate(Route::About);
        assert_eq!(commands, vec![NetworkCommand::CancelFetch(id)]);
        assert!(state.products.is_none());

        state.handle_response(NetworkResponse::Products {
            id,
            query: ProductQuery::Featured,
            result: Ok(featured_body()),
        });
        assert!(state.to_render_state().products.is_none());
    }

    #[test]
    fn test_remount_uses_fresh_request_id() {
        let (mut state, first) = mounted();
        state.navigate(Route::About);
        let commands = state.navigate(Route::Landing);
        assert_eq!(commands.len(), 1);
        let NetworkCommand::FetchProducts { id, .. } = &commands[0] else {
            panic!("expected a fetch command");
        };
        assert_ne!(*id, first);

        // The stale id must not settle the new view
        state.handle_response(NetworkResponse::Products {
            id: first,
            query: ProductQuery::Featured,
            result: Ok(json!([])),
        });
        assert!(state.products.as_ref().unwrap().is_loading());
    }

    #[test]
    fn test_settled_view_unmounts_without_cancel() {
        let (mut state, id) = mounted();
        state.handle_response(NetworkResponse::Products {
            id,
            query: ProductQuery::Featured,
            result: Ok(json!([])),
        });
        assert!(state.navigate(Route::About).is_empty());
    }

    #[test]
    fn test_navigating_to_same_route_is_noop() {
        let (mut state, _) = mounted();
        assert!(state.navigate(Route::Landing).is_empty());
        assert!(state.products.is_some());
    }

    #[test]
    fn test_catalog_fetches_all_products() {
        let (mut state, _) = mounted();
        let commands = state.navigate(Route::Catalog);
        assert!(matches!(
            commands.last(),
            Some(NetworkCommand::FetchProducts { query: ProductQuery::All, .. })
        ));
    }

    #[test]
    fn test_carousel_follows_selected_card() {
        let (mut state, id) = mounted();
        state.handle_response(NetworkResponse::Products {
            id,
            query: ProductQuery::Featured,
            result: Ok(featured_body()),
        });

        state.prev_image();
        let cards = state.to_render_state().products.unwrap().cards;
        assert_eq!(cards[0].position.unwrap().to_string(), "2 / 2");

        state.next_card();
        state.next_image();
        state.toggle_wishlist();
        let cards = state.to_render_state().products.unwrap().cards;
        assert_eq!(cards[0].position.unwrap().index, 1);
        assert_eq!(cards[1].position, None);
        assert!(cards[1].wishlisted);
        assert!(!cards[0].wishlisted);
    }

    #[test]
    fn test_add_to_cart_sets_notice() {
        let (mut state, id) = mounted();
        state.add_to_cart();
        assert!(state.notice.is_none());

        state.handle_response(NetworkResponse::Products {
            id,
            query: ProductQuery::Featured,
            result: Ok(featured_body()),
        });
        state.add_to_cart();
        assert!(state.notice.as_deref().unwrap().starts_with("Headphones"));

        state.navigate(Route::About);
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_help_toggle() {
        let mut state = AppState::new("Shop");
        state.toggle_help();
        assert!(state.show_help);
        state.close_help();
        assert!(!state.show_help);
    }
}
