//! Prelude for linmap::interaction
//!
//! Re-exports the editor, its configuration and the event types for convenient use.

pub use super::{DragMode, EditorConfig, EditorError, ListenerId, MatrixEditor, NotificationState};

// Async communication types
pub use super::async_communication::{ChangeCause, MatrixEvent, MatrixEventReceiver};
pub use super::error::ReceiveEventError;

pub use crate::numerics::{Matrix2x2, Point2, Vector2, IDENTITY};

// Common type aliases for frequently used instantiations
pub type Matrix2x2F32 = Matrix2x2<f32>;
pub type Matrix2x2F64 = Matrix2x2<f64>;
