//! App actor - message loop processing UI events and network responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        state: AppState,
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state,
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // Mount the initial route and send the first render state
        if let Some(cmd) = self.state.mount() {
            let _ = self.network_tx.send(cmd);
        }
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        if let Some(cmd) = self.state.unmount() {
                            let _ = self.network_tx.send(cmd);
                        }
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    self.state.handle_response(response);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            UiEvent::Navigate(route) => {
                for cmd in self.state.navigate(route) {
                    let _ = self.network_tx.send(cmd);
                }
            }

            // Product grid
            UiEvent::NextCard => self.state.next_card(),
            UiEvent::PrevCard => self.state.prev_card(),
            UiEvent::NextImage => self.state.next_image(),
            UiEvent::PrevImage => self.state.prev_image(),
            UiEvent::ToggleWishlist => self.state.toggle_wishlist(),
            UiEvent::AddToCart => self.state.add_to_cart(),

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::ProductQuery;
    use crate::views::{FetchState, Route};

    #[tokio::test]
    async fn test_mount_fetch_render_quit() {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (net_cmd_tx, mut net_cmd_rx) = mpsc::unbounded_channel();
        let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel();
        let (render_tx, mut render_rx) = mpsc::unbounded_channel();

        let actor = AppActor::new(AppState::new("Shop"), net_cmd_tx, render_tx);
        let handle = tokio::spawn(actor.run(ui_rx, net_resp_rx));

        let Some(NetworkCommand::FetchProducts { id, query }) = net_cmd_rx.recv().await else {
            panic!("expected an initial fetch");
        };
        assert_eq!(query, ProductQuery::Featured);

        let first = render_rx.recv().await.unwrap();
        assert_eq!(first.route, Route::Landing);
        assert_eq!(first.products.unwrap().state, FetchState::Loading);

        net_resp_tx
            .send(NetworkResponse::Products {
                id,
                query,
                result: Ok(serde_json::json!([
                    {"id": 8, "name": "Kettle", "category": "Home tools", "price": 30, "rating": 4.9}
                ])),
            })
            .unwrap();
        let settled = render_rx.recv().await.unwrap();
        let products = settled.products.unwrap();
        assert_eq!(products.state, FetchState::Success);
        assert_eq!(products.cards[0].name, "Kettle");

        ui_tx.send(UiEvent::Quit).unwrap();
        assert_eq!(net_cmd_rx.recv().await, Some(NetworkCommand::Shutdown));
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_quit_while_loading_cancels_fetch() {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (net_cmd_tx, mut net_cmd_rx) = mpsc::unbounded_channel();
        let (_net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
        let (render_tx, _render_rx) = mpsc::unbounded_channel();

        let actor = AppActor::new(AppState::new("Shop"), net_cmd_tx, render_tx);
        let handle = tokio::spawn(actor.run(ui_rx, net_resp_rx));

        let Some(NetworkCommand::FetchProducts { id, .. }) = net_cmd_rx.recv().await else {
            panic!("expected an initial fetch");
        };
        ui_tx.send(UiEvent::Quit).unwrap();

        assert_eq!(net_cmd_rx.recv().await, Some(NetworkCommand::CancelFetch(id)));
        assert_eq!(net_cmd_rx.recv().await, Some(NetworkCommand::Shutdown));
        handle.await.unwrap();
    }
}
