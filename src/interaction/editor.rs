//! Headless matrix editor: owns a matrix, mutates it and notifies observers.
//!
//! The editor is single-threaded. All methods take `&self` so that listener
//! callbacks can hold an `Rc<MatrixEditor>` (or a `Weak`) and call back into
//! it. Re-entrancy is resolved by an explicit two-state machine:
//!
//! ```text
//!   Idle --(mutation)--> Notifying --(all listeners returned)--> Idle
//!   Notifying --(set / modify / drag)--> Notifying   (ignored)
//! ```

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use super::async_communication::{ChangeCause, EventSender, MatrixEvent, MatrixEventReceiver, TrySendEventError};
use super::configuration::EditorConfig;
use super::drag::DragMode;
use super::error::{EditorError, ListenerId};
use crate::numerics::{Matrix2x2, Vector2};

/// Notification state of a [`MatrixEditor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationState {
    Idle,
    /// Listeners are running; mutations are ignored until they return.
    Notifying,
}

struct Listener {
    id: ListenerId,
    on_change: Rc<dyn Fn()>,
}

/// Resets the state to `Idle` even if a listener panics.
struct NotifyingGuard<'a> {
    state: &'a Cell<NotificationState>,
}

impl<'a> NotifyingGuard<'a> {
    fn enter(state: &'a Cell<NotificationState>) -> Self {
        state.set(NotificationState::Notifying);
        Self { state }
    }
}

impl Drop for NotifyingGuard<'_> {
    fn drop(&mut self) {
        self.state.set(NotificationState::Idle);
    }
}

pub struct MatrixEditor {
    matrix: Cell<Matrix2x2>,
    config: EditorConfig,
    drag_mode: Cell<DragMode>,
    state: Cell<NotificationState>,
    listeners: RefCell<Vec<Listener>>,
    next_listener_id: Cell<u64>,
    subscribers: RefCell<Vec<EventSender>>,
    next_sequence: Cell<u64>,
}

impl MatrixEditor {
    /// Editor with the default configuration.
    pub fn new(matrix: Matrix2x2) -> Self {
        Self::from_valid_config(matrix, EditorConfig::default())
    }

    pub fn with_config(matrix: Matrix2x2, config: EditorConfig) -> Result<Self, EditorError> {
        config.validate()?;
        Ok(Self::from_valid_config(matrix, config))
    }

    fn from_valid_config(matrix: Matrix2x2, config: EditorConfig) -> Self {
        Self {
            matrix: Cell::new(matrix),
            drag_mode: Cell::new(config.drag_mode),
            config,
            state: Cell::new(NotificationState::Idle),
            listeners: RefCell::new(Vec::new()),
            next_listener_id: Cell::new(0),
            subscribers: RefCell::new(Vec::new()),
            next_sequence: Cell::new(0),
        }
    }

    /// Copy of the current matrix.
    pub fn matrix(&self) -> Matrix2x2 {
        self.matrix.get()
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn state(&self) -> NotificationState {
        self.state.get()
    }

    pub fn drag_mode(&self) -> DragMode {
        self.drag_mode.get()
    }

    pub fn set_drag_mode(&self, mode: DragMode) {
        tracing::debug!(mode = mode.name(), "drag mode changed");
        self.drag_mode.set(mode);
    }

    /// Register a callback run after every mutation, in registration order.
    pub fn add_listener<F>(&self, on_change: F) -> ListenerId
    where
        F: Fn() + 'static,
    {
        let id = ListenerId(self.next_listener_id.get());
        self.next_listener_id.set(id.0 + 1);
        self.listeners.borrow_mut().push(Listener {
            id,
            on_change: Rc::new(on_change),
        });
        tracing::debug!(listener = %id, "listener registered");
        id
    }

    pub fn remove_listener(&self, id: ListenerId) -> Result<(), EditorError> {
        let mut listeners = self.listeners.borrow_mut();
        let position = listeners
            .iter()
            .position(|listener| listener.id == id)
            .ok_or(EditorError::ListenerNotFound(id))?;
        listeners.remove(position);
        tracing::debug!(listener = %id, "listener removed");
        Ok(())
    }

    pub fn clear_listeners(&self) {
        self.listeners.borrow_mut().clear();
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Replace the matrix with a copy of `matrix` and notify.
    ///
    /// Returns `false` without touching the matrix when called from inside a
    /// listener.
    pub fn set(&self, matrix: &Matrix2x2) -> bool {
        if self.is_notifying("set") {
            return false;
        }
        let mut current = self.matrix.get();
        current.set(matrix);
        self.matrix.set(current);
        self.notify(ChangeCause::Replaced);
        true
    }

    /// Mutate the matrix in place (e.g. `rotate` or direct entry writes) and
    /// notify.
    ///
    /// Returns `false` without running `update` when called from inside a
    /// listener.
    pub fn modify<F>(&self, update: F) -> bool
    where
        F: FnOnce(&mut Matrix2x2),
    {
        if self.is_notifying("modify") {
            return false;
        }
        let mut current = self.matrix.get();
        update(&mut current);
        self.matrix.set(current);
        self.notify(ChangeCause::Modified);
        true
    }

    /// Apply a drag of column `column` with the current drag mode.
    ///
    /// `last` is the previous pointer position and `delta` its displacement,
    /// both in matrix units.
    pub fn drag(&self, column: usize, last: Vector2, delta: Vector2) -> Result<bool, EditorError> {
        if column > 1 {
            return Err(EditorError::InvalidColumn(column));
        }
        if self.is_notifying("drag") {
            return Ok(false);
        }
        let mode = self.drag_mode.get();
        let mut current = self.matrix.get();
        mode.apply(&mut current, column, last, delta);
        self.matrix.set(current);
        if !current.is_finite() {
            tracing::debug!(column, mode = mode.name(), "drag produced non-finite matrix entries");
        }
        self.notify(ChangeCause::Dragged { column, mode });
        Ok(true)
    }

    /// Open an event subscription. Every later mutation is delivered to it.
    pub fn subscribe(&self) -> MatrixEventReceiver {
        let (sender, receiver) = EventSender::channel(&self.config);
        self.subscribers.borrow_mut().push(sender);
        receiver
    }

    /// Number of subscriptions whose receiver is still alive.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .borrow()
            .iter()
            .filter(|sender| !sender.is_channel_closed())
            .count()
    }

    /// Events lost to full subscription channels, summed over subscribers.
    pub fn dropped_events_count(&self) -> u64 {
        self.subscribers
            .borrow()
            .iter()
            .map(EventSender::dropped_events_count)
            .sum()
    }

    fn is_notifying(&self, operation: &'static str) -> bool {
        let notifying = self.state.get() == NotificationState::Notifying;
        if notifying {
            tracing::debug!(operation, "ignored: listeners are being notified");
        }
        notifying
    }

    fn notify(&self, cause: ChangeCause) {
        let sequence = self.next_sequence.get();
        self.next_sequence.set(sequence + 1);
        self.publish(MatrixEvent {
            sequence,
            cause,
            matrix: self.matrix.get(),
        });

        // Snapshot so listeners may add or remove listeners while running.
        let callbacks: Vec<Rc<dyn Fn()>> = self
            .listeners
            .borrow()
            .iter()
            .map(|listener| Rc::clone(&listener.on_change))
            .collect();
        tracing::trace!(sequence, listeners = callbacks.len(), "notifying listeners");

        let _guard = NotifyingGuard::enter(&self.state);
        for on_change in callbacks {
            on_change();
        }
    }

    fn publish(&self, event: MatrixEvent) {
        self.subscribers.borrow_mut().retain(|sender| match sender.try_send_event(event) {
            Ok(()) => true,
            Err(TrySendEventError::DroppedWhenFull(_)) => {
                tracing::warn!(sequence = event.sequence, "subscriber channel full, dropped matrix event");
                true
            }
            Err(TrySendEventError::ChannelClosed) => {
                tracing::debug!("removing closed subscriber");
                false
            }
        });
    }
}

impl Default for MatrixEditor {
    fn default() -> Self {
        Self::new(Matrix2x2::identity())
    }
}

impl fmt::Debug for MatrixEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatrixEditor")
            .field("matrix", &self.matrix.get())
            .field("drag_mode", &self.drag_mode.get())
            .field("state", &self.state.get())
            .field("listeners", &self.listener_count())
            .field("subscribers", &self.subscribers.borrow().len())
            .finish()
    }
}
