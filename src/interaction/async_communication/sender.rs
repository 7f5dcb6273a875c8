//! Non-blocking event sender used by the matrix editor.
//!
//! The editor notifies synchronously, so it never awaits a subscriber: a full
//! channel either drops the new event or evicts the oldest queued one,
//! depending on the configuration.

use std::sync::{Arc, Mutex};

use super::events::MatrixEvent;
use super::receiver::MatrixEventReceiver;
use crate::interaction::configuration::EditorConfig;

/// Sending half of one event subscription.
#[derive(Debug)]
pub struct EventSender {
    sender: async_channel::Sender<MatrixEvent>,
    drop_oldest_on_full: bool,
    dropped_events: Arc<Mutex<u64>>,
}

impl EventSender {
    /// Create a subscription channel sized by `config`.
    ///
    /// Returns a tuple of (sender, receiver). `config` must have passed
    /// [`EditorConfig::validate`]: a zero capacity is not a valid channel.
    pub(crate) fn channel(config: &EditorConfig) -> (Self, MatrixEventReceiver) {
        let (sender, receiver) = match config.event_buffer_size {
            Some(size) => async_channel::bounded(size),
            None => async_channel::unbounded(),
        };

        let event_sender = Self {
            sender,
            drop_oldest_on_full: config.drop_oldest_on_full,
            dropped_events: Arc::new(Mutex::new(0)),
        };

        (event_sender, MatrixEventReceiver::new(receiver))
    }

    /// Queue an event without blocking.
    pub fn try_send_event(&self, event: MatrixEvent) -> Result<(), TrySendEventError> {
        if self.drop_oldest_on_full {
            return match self.sender.force_send(event) {
                Ok(None) => Ok(()),
                Ok(Some(evicted)) => {
                    self.increment_dropped_events();
                    tracing::warn!(
                        evicted = evicted.sequence,
                        sequence = event.sequence,
                        "subscriber channel full, evicted oldest matrix event"
                    );
                    Ok(())
                }
                Err(_) => Err(TrySendEventError::ChannelClosed),
            };
        }

        match self.sender.try_send(event) {
            Ok(()) => Ok(()),
            Err(async_channel::TrySendError::Full(dropped_event)) => {
                self.increment_dropped_events();
                Err(TrySendEventError::DroppedWhenFull(dropped_event))
            }
            Err(async_channel::TrySendError::Closed(_)) => Err(TrySendEventError::ChannelClosed),
        }
    }

    /// Number of events lost to a full channel.
    pub fn dropped_events_count(&self) -> u64 {
        self.dropped_events
            .lock()
            .map(|count| *count)
            .unwrap_or(0)
    }

    /// True once the receiving side has been dropped.
    pub fn is_channel_closed(&self) -> bool {
        self.sender.is_closed()
    }

    pub fn pending_events_count(&self) -> usize {
        self.sender.len()
    }

    fn increment_dropped_events(&self) {
        if let Ok(mut count) = self.dropped_events.lock() {
            *count += 1;
        }
    }
}

/// Error returned by [`EventSender::try_send_event`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrySendEventError {
    #[error("Channel full, event {} dropped", .0.sequence)]
    DroppedWhenFull(MatrixEvent),

    #[error("Event channel is closed")]
    ChannelClosed,
}
