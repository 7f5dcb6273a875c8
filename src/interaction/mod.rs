//! Interaction module of linmap
//!
//! A headless editor around a single `Matrix2x2`: listeners are notified
//! synchronously after every change, and async subscribers receive the same
//! changes as `MatrixEvent`s.

pub mod async_communication;
pub mod configuration;
pub mod drag;
pub mod editor;
pub mod error;
pub mod prelude;

pub use async_communication::{ChangeCause, MatrixEvent, MatrixEventReceiver, TrySendEventError};
pub use configuration::{parse_parameters, EditorConfig};
pub use drag::DragMode;
pub use editor::{MatrixEditor, NotificationState};
pub use error::{EditorError, ListenerId, ReceiveEventError};
