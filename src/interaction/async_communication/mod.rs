//! Async communication module for linmap::interaction
//!
//! Delivers matrix change events to subscribers over async channels, next to
//! the editor's synchronous listener callbacks.

pub mod events;
pub mod sender;
pub mod receiver;
#[cfg(feature = "tokio-timeout")]
pub mod tokio_enhanced;

// Re-export commonly used types for convenience
pub use events::{ChangeCause, MatrixEvent};
pub use receiver::MatrixEventReceiver;
pub use sender::{EventSender, TrySendEventError};
