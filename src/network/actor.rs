//! Network actor - runs product fetches in the Tokio async runtime

use std::collections::HashMap;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::products::ProductApi;

/// Network actor that processes fetch commands
pub struct NetworkActor {
    api: ProductApi,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<u64>,
    cancel_handles: HashMap<u64, oneshot::Sender<()>>,
}

impl NetworkActor {
    pub fn new(api: ProductApi, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            api,
            response_tx,
            active_requests: JoinSet::new(),
            cancel_handles: HashMap::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchProducts { id, query }) => {
                            let (cancel_tx, mut cancel_rx) = oneshot::channel();
                            self.cancel_handles.insert(id, cancel_tx);

                            let response_tx = self.response_tx.clone();
                            let api = self.api.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, ?query, "Fetching products");
                                tokio::select! {
                                    biased;

                                    _ = &mut cancel_rx => {
                                        tracing::info!(id, "Fetch cancelled before completion");
                                    }
                                    result = api.fetch(query) => {
                                        tracing::info!(id, ok = result.is_ok(), "Fetch completed");
                                        let _ = response_tx.send(NetworkResponse::Products { id, query, result });
                                    }
                                }
                                id
                            });
                        }

                        Some(NetworkCommand::CancelFetch(id)) => {
                            if let Some(cancel_tx) = self.cancel_handles.remove(&id) {
                                tracing::info!(id, "Cancelling fetch");
                                let _ = cancel_tx.send(());
                                let _ = self.response_tx.send(NetworkResponse::Cancelled { id });
                            }
                        }

                        Some(NetworkCommand::Shutdown) => {
                            for (_, cancel_tx) in self.cancel_handles.drain() {
                                let _ = cancel_tx.send(());
                            }
                            break;
                        }

                        None => break,
                    }
                }

                Some(joined) = self.active_requests.join_next() => {
                    // A finished task no longer needs its cancel handle
                    if let Ok(id) = joined {
                        self.cancel_handles.remove(&id);
                    }
                }
            }
        }
    }
}
