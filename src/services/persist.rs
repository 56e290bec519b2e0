use tokio::sync::{mpsc, oneshot};

use crate::model::IconText;
use crate::store::TextStore;

/// Requests handled by the persistence worker
#[derive(Debug)]
pub enum PersistRequest {
    /// Replace the stored mapping with this snapshot
    Save(IconText),

    /// Reply once everything queued before this request is written
    Flush(oneshot::Sender<()>),
}

/// Persistence worker that writes snapshots on a blocking thread
pub struct PersistService {
    store: TextStore,
    saves_written: u64,
}

impl PersistService {
    pub fn new(store: TextStore) -> Self {
        Self {
            store,
            saves_written: 0,
        }
    }

    /// Handle one batch of requests that arrived together
    ///
    /// Only the newest snapshot in a batch is written, since each snapshot
    /// is the complete mapping. Flush replies are sent after that write.
    fn process_batch(&mut self, batch: Vec<PersistRequest>) {
        let mut latest: Option<IconText> = None;
        let mut waiters = Vec::new();

        for request in batch {
            match request {
                PersistRequest::Save(texts) => latest = Some(texts),
                PersistRequest::Flush(reply) => waiters.push(reply),
            }
        }

        if let Some(texts) = latest {
            match self.store.save(&texts) {
                Ok(()) => {
                    self.saves_written += 1;
                    log::debug!(
                        "Persisted {} icon texts (save #{})",
                        texts.len(),
                        self.saves_written
                    );
                }
                // No retry: the next update rewrites the whole mapping anyway
                Err(e) => log::warn!("Failed to persist icon texts: {:#}", e),
            }
        }

        for reply in waiters {
            let _ = reply.send(());
        }
    }

    /// Drain the channel until every sender is dropped
    fn run(mut self, mut request_rx: mpsc::UnboundedReceiver<PersistRequest>) {
        while let Some(first) = request_rx.blocking_recv() {
            let mut batch = vec![first];
            while let Ok(next) = request_rx.try_recv() {
                batch.push(next);
            }
            self.process_batch(batch);
        }
        log::debug!("Persistence worker stopped after {} saves", self.saves_written);
    }
}

/// Spawn the persistence worker on tokio's blocking pool
///
/// Must be called from within a tokio runtime.
pub fn spawn_persist_service(store: TextStore) -> mpsc::UnboundedSender<PersistRequest> {
    let (request_tx, request_rx) = mpsc::unbounded_channel::<PersistRequest>();

    tokio::task::spawn_blocking(move || {
        PersistService::new(store).run(request_rx);
    });

    request_tx
}

/// Wait until everything queued so far has been written
pub async fn flush(tx: &mpsc::UnboundedSender<PersistRequest>) {
    let (reply_tx, reply_rx) = oneshot::channel();
    if tx.send(PersistRequest::Flush(reply_tx)).is_ok() {
        let _ = reply_rx.await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::IconSlot;

    fn slot(n: u8) -> IconSlot {
        IconSlot::new(n).unwrap()
    }

    #[test]
    fn test_batch_writes_latest_snapshot() {
        let mut service = PersistService::new(TextStore::in_memory().unwrap());

        let mut older = IconText::new();
        older.set(slot(1), "old");
        let mut newer = IconText::new();
        newer.set(slot(1), "new");
        newer.set(slot(2), "two");

        let (reply_tx, mut reply_rx) = oneshot::channel();
        service.process_batch(vec![
            PersistRequest::Save(older),
            PersistRequest::Save(newer.clone()),
            PersistRequest::Flush(reply_tx),
        ]);

        assert_eq!(service.saves_written, 1);
        assert_eq!(service.store.load(), newer);
        assert!(reply_rx.try_recv().is_ok());
    }

    #[test]
    fn test_flush_only_batch_writes_nothing() {
        let mut service = PersistService::new(TextStore::in_memory().unwrap());
        let (reply_tx, mut reply_rx) = oneshot::channel();
        service.process_batch(vec![PersistRequest::Flush(reply_tx)]);

        assert_eq!(service.saves_written, 0);
        assert!(reply_rx.try_recv().is_ok());
    }

    #[tokio::test]
    async fn test_spawned_worker_flushes() {
        let path = std::env::temp_dir().join(format!(
            "emojicon-persist-test-{}.db",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);

        let tx = spawn_persist_service(TextStore::open(&path).unwrap());

        let mut texts = IconText::new();
        texts.set(slot(6), "six");
        tx.send(PersistRequest::Save(texts)).unwrap();

        // Returns only after the save above went through the worker
        flush(&tx).await;

        let reopened = TextStore::open(&path).unwrap();
        assert_eq!(reopened.load().text_for(slot(6)), Some("six"));

        drop(tx);
        drop(reopened);
        let _ = std::fs::remove_file(&path);
    }
}
