use quote_core::QuoteEngine;
use quote_core::QuoteOutcome;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{info, warn};
use tokio::sync::{Mutex, RwLock, mpsc, oneshot};

const COMMAND_CHANNEL_CAPACITY: usize = 100;

/// A command plus the channel the actor acknowledges on once it is applied.
type Envelope = (StateCommand, oneshot::Sender<()>);

/// Commands that mutate desk state.
///
/// All mutations go through the state actor, one at a time.
#[derive(Debug, Clone)]
pub enum StateCommand {
    /// Remember the latest successful quote
    SetQuote(Box<QuoteOutcome>),

    /// Forget the quote (after a booking went through)
    ClearQuote,
}

/// Session state for one desk.
///
/// The configuration directory and engine are fixed at construction; the
/// last successful quote is written only by the actor task and read through
/// an `RwLock`.
#[derive(Clone)]
pub struct AppState {
    config_dir: PathBuf,
    engine: QuoteEngine,

    command_tx: Arc<Mutex<Option<mpsc::Sender<Envelope>>>>,

    last_quote: Arc<RwLock<Option<QuoteOutcome>>>,

    actor_init: Arc<Mutex<bool>>,
}

impl AppState {
    /// The actor is spawned lazily on the first update, inside the caller's runtime.
    pub fn new(config_dir: impl Into<PathBuf>, engine: QuoteEngine) -> Self {
        Self {
            config_dir: config_dir.into(),
            engine,
            command_tx: Arc::new(Mutex::new(None)),
            last_quote: Arc::new(RwLock::new(None)),
            actor_init: Arc::new(Mutex::new(false)),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn engine(&self) -> &QuoteEngine {
        &self.engine
    }

    /// Send a state update command and wait until the actor has applied it.
    ///
    /// A read issued after this returns sees the update.
    pub async fn update(&self, cmd: StateCommand) -> Result<(), String> {
        self.ensure_actor().await;

        let (ack_tx, ack_rx) = oneshot::channel();
        {
            let tx_guard = self.command_tx.lock().await;
            let tx = tx_guard.as_ref().ok_or("Actor not initialized")?;
            tx.send((cmd, ack_tx))
                .await
                .map_err(|e| format!("State actor died: {e}"))?;
        }

        ack_rx
            .await
            .map_err(|_| String::from("State actor dropped the command before applying it"))
    }

    /// Latest successful quote, if any.
    pub async fn get_quote(&self) -> Option<QuoteOutcome> {
        self.last_quote.read().await.clone()
    }

    async fn ensure_actor(&self) {
        let mut init_guard = self.actor_init.lock().await;
        if !*init_guard {
            let (tx, rx) = mpsc::channel(COMMAND_CHANNEL_CAPACITY);
            let quote_clone = Arc::clone(&self.last_quote);

            // tx must be stored before the actor can run
            let mut tx_guard = self.command_tx.lock().await;
            *tx_guard = Some(tx);
            drop(tx_guard);

            tokio::spawn(state_actor(rx, quote_clone));
            *init_guard = true;
            info!("State actor spawned");
        }
    }
}

/// Owns the mutable state and applies commands in arrival order.
async fn state_actor(
    mut command_rx: mpsc::Receiver<Envelope>,
    last_quote: Arc<RwLock<Option<QuoteOutcome>>>,
) {
    info!("State actor started");

    while let Some((cmd, ack)) = command_rx.recv().await {
        match cmd {
            StateCommand::SetQuote(outcome) => {
                let mut quote_write = last_quote.write().await;

                if let Some(ref existing) = *quote_write {
                    info!(
                        "Replacing quote {} with {}",
                        existing.summary.total, outcome.summary.total
                    );
                } else {
                    info!("Storing quote {}", outcome.summary.total);
                }

                *quote_write = Some(*outcome);
            }
            StateCommand::ClearQuote => {
                let mut quote_write = last_quote.write().await;

                if quote_write.is_none() {
                    warn!("Clear quote requested but no quote was set");
                }

                *quote_write = None;
            }
        }

        // The sender may have given up waiting; the update stands either way.
        let _ = ack.send(());
    }

    warn!("State actor stopped");
}
