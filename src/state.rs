//! Icon Text State
//!
//! Observable in-memory copy of the icon texts. The UI subscribes to it and
//! always sees the latest mapping; every update is published first and then
//! handed to the persistence worker, so the screen never waits on storage.

use tokio::sync::{mpsc, watch};

use crate::model::{IconSlot, IconText};
use crate::services::persist::PersistRequest;

/// Observable icon texts with write-behind persistence
#[derive(Debug)]
pub struct IconTextState {
    texts: watch::Sender<IconText>,
    persist_tx: Option<mpsc::UnboundedSender<PersistRequest>>,
}

impl IconTextState {
    /// State seeded with `initial`, persisting through `persist_tx`
    pub fn new(initial: IconText, persist_tx: mpsc::UnboundedSender<PersistRequest>) -> Self {
        let (texts, _) = watch::channel(initial);
        Self {
            texts,
            persist_tx: Some(persist_tx),
        }
    }

    /// State that is never written anywhere
    pub fn detached(initial: IconText) -> Self {
        let (texts, _) = watch::channel(initial);
        Self {
            texts,
            persist_tx: None,
        }
    }

    /// Receiver holding the latest mapping; notified on every change
    pub fn subscribe(&self) -> watch::Receiver<IconText> {
        self.texts.subscribe()
    }

    /// Clone of the current mapping
    pub fn snapshot(&self) -> IconText {
        self.texts.borrow().clone()
    }

    /// Set text for a slot if one is set
    pub fn text_for(&self, slot: IconSlot) -> Option<String> {
        self.texts.borrow().text_for(slot).map(str::to_string)
    }

    /// Overwrite the text for `slot`, publish, then queue a save
    pub fn update_text_for_icon(&self, slot: IconSlot, text: impl Into<String>) {
        let text = text.into();
        log::debug!("Updating icon {} to {:?}", slot, text);

        self.texts.send_modify(|texts| texts.set(slot, text));

        if let Some(tx) = &self.persist_tx {
            if tx.send(PersistRequest::Save(self.snapshot())).is_err() {
                log::warn!("Persistence worker is gone; icon {} not saved", slot);
            }
        }
    }
}
