//! Receiving side of a matrix event subscription.

use std::sync::{Arc, Mutex};

use futures::Stream;

use super::events::MatrixEvent;
use crate::interaction::error::ReceiveEventError;

/// Receiver returned by `MatrixEditor::subscribe`.
///
/// Unlike the editor itself, the receiver is `Send` and can be handed to
/// another thread or async task.
#[derive(Debug)]
pub struct MatrixEventReceiver {
    pub(crate) receiver: async_channel::Receiver<MatrixEvent>,
    received_events_count: Arc<Mutex<u64>>,
}

impl MatrixEventReceiver {
    pub(crate) fn new(receiver: async_channel::Receiver<MatrixEvent>) -> Self {
        Self {
            receiver,
            received_events_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Receive the next event asynchronously.
    ///
    /// Fails with `ChannelClosed` once the editor is dropped and the queue
    /// is drained.
    pub async fn receive_event(&self) -> Result<MatrixEvent, ReceiveEventError> {
        let event = self.receiver.recv().await?;
        self.increment_received_events();
        Ok(event)
    }

    /// Try to receive an event without blocking
    pub fn try_receive_event(&self) -> Result<MatrixEvent, async_channel::TryRecvError> {
        let event = self.receiver.try_recv()?;
        self.increment_received_events();
        Ok(event)
    }

    /// Get total received events count
    pub fn received_events_count(&self) -> u64 {
        self.received_events_count
            .lock()
            .map(|count| *count)
            .unwrap_or(0)
    }

    pub fn pending_events_count(&self) -> usize {
        self.receiver.len()
    }

    /// True once the editor has been dropped.
    pub fn is_closed(&self) -> bool {
        self.receiver.is_closed()
    }

    /// Consume the receiver as a `futures::Stream` of events.
    pub fn into_stream(self) -> impl Stream<Item = MatrixEvent> {
        self.receiver
    }

    fn increment_received_events(&self) {
        if let Ok(mut count) = self.received_events_count.lock() {
            *count += 1;
        }
    }
}
