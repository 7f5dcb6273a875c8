//! Optional tokio-enhanced features for MatrixEventReceiver
//!
//! This module provides timed receives when the "tokio-timeout" feature is enabled.

use std::time::Duration;

use super::events::MatrixEvent;
use super::receiver::MatrixEventReceiver;
use crate::interaction::error::ReceiveEventError;

impl MatrixEventReceiver {
    /// Receive the next event, giving up after `timeout`.
    pub async fn receive_event_with_timeout(
        &self,
        timeout: Duration,
    ) -> Result<MatrixEvent, ReceiveEventError> {
        match tokio::time::timeout(timeout, self.receive_event()).await {
            Ok(result) => result,
            Err(_) => Err(ReceiveEventError::Timeout),
        }
    }

    /// Collect up to `max_events` events within `total_timeout`.
    ///
    /// Returns what arrived before the deadline; an empty batch is not an
    /// error. Fails only if the channel closes before any event arrived.
    pub async fn receive_events_batch(
        &self,
        max_events: usize,
        total_timeout: Duration,
    ) -> Result<Vec<MatrixEvent>, ReceiveEventError> {
        let start_time = tokio::time::Instant::now();
        let mut events = Vec::new();

        while events.len() < max_events {
            let remaining_time = total_timeout
                .checked_sub(start_time.elapsed())
                .unwrap_or(Duration::from_millis(0));

            if remaining_time.is_zero() {
                break;
            }

            match self.receive_event_with_timeout(remaining_time).await {
                Ok(event) => events.push(event),
                Err(ReceiveEventError::Timeout) => break,
                Err(ReceiveEventError::ChannelClosed) if !events.is_empty() => break,
                Err(error) => return Err(error),
            }
        }

        Ok(events)
    }
}
