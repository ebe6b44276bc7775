//! Async driver for [`CatalogState`].
//!
//! Owns the state, applies messages one at a time, and carries out the
//! effects the reducer returns: each `Fetch` becomes a spawned task, each
//! `Cancel` aborts one. Observers read state snapshots from a watch channel.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use shelf_core::{Reducer, RequestId};

use crate::source::CatalogClient;
use crate::state::{CatalogEffect, CatalogMsg, CatalogState};
use crate::types::{CatalogSource, LoadError};

/// State as of the `applied`-th message sent through the controller.
#[derive(Debug, Clone, Default)]
pub struct StateSnapshot {
    pub applied: u64,
    pub state: CatalogState,
}

#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    #[error("load controller has stopped")]
    Stopped,
}

enum Envelope {
    /// Message from the controller handle, numbered in send order.
    Dispatched(u64, CatalogMsg),
    /// Completion from a fetch task.
    Completed(CatalogMsg),
}

/// Handle to the background load loop.
///
/// Dropping the handle (or calling [`LoadController::shutdown`]) stops the loop
/// and aborts any fetch still running.
pub struct LoadController {
    tx: mpsc::UnboundedSender<Envelope>,
    snapshots: watch::Receiver<StateSnapshot>,
    /// Last sequence number sent. Held across the send so the loop sees
    /// dispatched messages in sequence order.
    sent: Mutex<u64>,
    task: JoinHandle<()>,
}

impl LoadController {
    /// Start the loop on the current tokio runtime, in the `Idle` state.
    pub fn spawn(client: CatalogClient) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshots) = watch::channel(StateSnapshot::default());

        let task = tokio::spawn(run(client, rx, tx.downgrade(), snapshot_tx));

        Self {
            tx,
            snapshots,
            sent: Mutex::new(0),
            task,
        }
    }

    fn sent(&self) -> MutexGuard<'_, u64> {
        self.sent.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Queue a message; returns its sequence number.
    pub fn dispatch(&self, msg: CatalogMsg) -> Result<u64, ControllerError> {
        let mut sent = self.sent();
        let seq = *sent + 1;
        self.tx
            .send(Envelope::Dispatched(seq, msg))
            .map_err(|_| ControllerError::Stopped)?;
        *sent = seq;
        Ok(seq)
    }

    pub fn set_source(&self, source: CatalogSource) -> Result<u64, ControllerError> {
        self.dispatch(CatalogMsg::SourceChanged(source))
    }

    pub fn reload(&self) -> Result<u64, ControllerError> {
        self.dispatch(CatalogMsg::Reload)
    }

    pub fn set_filter_text(&self, text: impl Into<String>) -> Result<u64, ControllerError> {
        self.dispatch(CatalogMsg::FilterTextChanged(text.into()))
    }

    pub fn toggle_in_stock_only(&self) -> Result<u64, ControllerError> {
        self.dispatch(CatalogMsg::InStockOnlyToggled)
    }

    /// Latest published state.
    pub fn state(&self) -> CatalogState {
        self.snapshots.borrow().state.clone()
    }

    /// Receiver that wakes on every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<StateSnapshot> {
        self.snapshots.clone()
    }

    /// Wait until every message sent so far has been applied and no fetch is
    /// pending, then return that state.
    pub async fn settled(&self) -> CatalogState {
        let target = *self.sent();
        let mut rx = self.snapshots.clone();
        let result = rx
            .wait_for(|snap| snap.applied >= target && !snap.state.is_loading())
            .await
            .map(|snap| snap.state.clone());
        match result {
            Ok(state) => state,
            Err(_) => self.state(),
        }
    }

    /// Stop the loop and wait for it to finish.
    pub async fn shutdown(self) {
        let Self { tx, task, .. } = self;
        drop(tx);
        if let Err(err) = task.await {
            tracing::warn!("load controller task ended abnormally: {err}");
        }
    }
}

async fn run(
    client: CatalogClient,
    mut rx: mpsc::UnboundedReceiver<Envelope>,
    completions: mpsc::WeakUnboundedSender<Envelope>,
    snapshots: watch::Sender<StateSnapshot>,
) {
    let mut state = CatalogState::default();
    let mut applied = 0u64;
    let mut tasks: HashMap<RequestId, JoinHandle<()>> = HashMap::new();

    while let Some(envelope) = rx.recv().await {
        let msg = match envelope {
            Envelope::Dispatched(seq, msg) => {
                debug_assert!(seq > applied, "dispatched messages arrive in sequence order");
                applied = seq;
                msg
            }
            Envelope::Completed(msg) => msg,
        };

        if let Some(id) = msg.request_id() {
            tasks.remove(&id);
            if state.is_stale(id) {
                tracing::debug!(request = %id, "ignoring stale fetch result");
            }
        }

        let (next, effects) = state.reduce(msg);
        state = next;

        for effect in effects {
            match effect {
                CatalogEffect::Fetch { id, source } => {
                    tracing::info!(request = %id, source = %source.describe(), "fetching catalog");
                    let handle = tokio::spawn(fetch(client.clone(), id, source, completions.clone()));
                    tasks.insert(id, handle);
                }
                CatalogEffect::Cancel(id) => {
                    if let Some(handle) = tasks.remove(&id) {
                        tracing::debug!(request = %id, "cancelling superseded fetch");
                        handle.abort();
                    }
                }
            }
        }

        snapshots.send_replace(StateSnapshot {
            applied,
            state: state.clone(),
        });
    }

    for (_, handle) in tasks {
        handle.abort();
    }
    tracing::debug!("load controller stopped");
}

async fn fetch(
    client: CatalogClient,
    id: RequestId,
    source: CatalogSource,
    completions: mpsc::WeakUnboundedSender<Envelope>,
) {
    let msg = match client.fetch(&source).await {
        Ok(products) => {
            tracing::info!(request = %id, products = products.len(), "catalog loaded");
            CatalogMsg::FetchSucceeded {
                id,
                products,
                fetched_at: Utc::now(),
            }
        }
        Err(err) => {
            tracing::warn!(request = %id, source = %source.describe(), "catalog fetch failed: {err}");
            CatalogMsg::FetchFailed {
                id,
                error: LoadError::from(err),
            }
        }
    };

    if let Some(tx) = completions.upgrade() {
        let _ = tx.send(Envelope::Completed(msg));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::types::LoadState;
    use shelf_catalog::Product;

    fn controller() -> LoadController {
        LoadController::spawn(CatalogClient::new(&ClientConfig::default()).unwrap())
    }

    #[tokio::test]
    async fn static_source_loads() {
        let controller = controller();
        controller.set_source(CatalogSource::sample()).unwrap();

        let state = controller.settled().await;
        assert_eq!(state.load().as_str(), "loaded");
        assert_eq!(state.catalog().unwrap().groups().len(), 2);

        controller.shutdown().await;
    }

    #[tokio::test]
    async fn filter_updates_are_applied_in_order() {
        let controller = controller();
        controller.set_source(CatalogSource::sample()).unwrap();
        controller.set_filter_text("ball").unwrap();
        controller.toggle_in_stock_only().unwrap();

        let state = controller.settled().await;
        assert_eq!(state.filter().text, "ball");
        assert!(state.filter().in_stock_only);

        controller.shutdown().await;
    }

    #[tokio::test]
    async fn invalid_static_source_fails() {
        let controller = controller();
        let twin = Product::new("Twin", "$1", true, ["A"]).unwrap();
        controller
            .set_source(CatalogSource::Static(vec![twin.clone(), twin]))
            .unwrap();

        let state = controller.settled().await;
        match state.load() {
            LoadState::Failed(LoadError::Transport { message }) => {
                assert!(message.contains("duplicate product: Twin"));
            }
            other => panic!("Expected Transport failure, got {other:?}"),
        }
        assert!(state.catalog().is_none());

        controller.shutdown().await;
    }

    #[tokio::test]
    async fn settled_on_idle_controller_returns_idle() {
        let controller = controller();
        let state = controller.settled().await;
        assert_eq!(state.load(), &LoadState::Idle);
        controller.shutdown().await;
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_dispatchers_are_applied_in_sequence() {
        let controller = std::sync::Arc::new(controller());

        let mut senders = Vec::new();
        for worker in 0..8 {
            let controller = controller.clone();
            senders.push(tokio::spawn(async move {
                for i in 0..50 {
                    controller.set_filter_text(format!("w{worker}-{i}")).unwrap();
                    tokio::task::yield_now().await;
                }
            }));
        }
        for sender in senders {
            sender.await.unwrap();
        }

        controller.settled().await;
        assert_eq!(controller.subscribe().borrow().applied, 400);

        controller.set_filter_text("last").unwrap();
        let state = controller.settled().await;
        assert_eq!(controller.subscribe().borrow().applied, 401);
        assert_eq!(state.filter().text, "last");
    }
}
