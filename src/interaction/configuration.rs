//! Editor configuration: drag mode and event channel sizing.
//!
//! Loaded from TOML text or a `key=value,key=value` parameter string; both
//! paths end in [`EditorConfig::validate`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::drag::DragMode;
use super::error::EditorError;

/// Configuration for the matrix editor.
///
/// The configuration can be built in code, loaded from TOML text, or parsed
/// from a compact `key=value,key=value` parameter string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Update rule used by `MatrixEditor::drag`.
    pub drag_mode: DragMode,

    /// Capacity of each event subscription channel. `None` means unbounded.
    pub event_buffer_size: Option<usize>,

    /// Behavior when a bounded subscription channel is full.
    /// - `true`: Drop the oldest queued event to make room for the new one
    /// - `false`: Drop the new event and count it as dropped
    pub drop_oldest_on_full: bool,
}

impl Default for EditorConfig {
    /// Free dragging, and a buffer of 256 events per subscriber that drops
    /// new events when full.
    fn default() -> Self {
        Self {
            drag_mode: DragMode::Free,
            event_buffer_size: Some(256),
            drop_oldest_on_full: false,
        }
    }
}

impl EditorConfig {
    pub fn new(drag_mode: DragMode, event_buffer_size: Option<usize>, drop_oldest_on_full: bool) -> Self {
        Self {
            drag_mode,
            event_buffer_size,
            drop_oldest_on_full,
        }
    }

    pub fn with_drag_mode(mut self, drag_mode: DragMode) -> Self {
        self.drag_mode = drag_mode;
        self
    }

    /// Subscribers get unbounded channels.
    pub fn unbounded(mut self) -> Self {
        self.event_buffer_size = None;
        self
    }

    /// Subscribers get channels holding at most `size` events; the newest
    /// event is dropped when full. `size` must be positive; `validate`
    /// rejects zero.
    pub fn bounded(mut self, size: usize) -> Self {
        self.event_buffer_size = Some(size);
        self.drop_oldest_on_full = false;
        self
    }

    /// Subscribers get channels holding at most `size` events; the oldest
    /// queued event is replaced when full. `size` must be positive.
    pub fn bounded_with_drop_oldest(mut self, size: usize) -> Self {
        self.event_buffer_size = Some(size);
        self.drop_oldest_on_full = true;
        self
    }

    /// Load a configuration from TOML text. Missing keys keep their defaults.
    ///
    /// ```
    /// use linmap::interaction::{DragMode, EditorConfig};
    ///
    /// let config = EditorConfig::from_toml_str("drag_mode = \"scale\"\nevent_buffer_size = 8").unwrap();
    /// assert_eq!(config.drag_mode, DragMode::Scale);
    /// assert_eq!(config.event_buffer_size, Some(8));
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, EditorError> {
        let config: Self = toml::from_str(text).map_err(|e| EditorError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// TOML has no null, so an unbounded buffer is omitted from the output
    /// and reads back as the default size.
    pub fn to_toml_string(&self) -> Result<String, EditorError> {
        toml::to_string(self).map_err(|e| EditorError::ConfigParse(e.to_string()))
    }

    /// Parse a parameter string such as `"drag_mode=rotate,event_buffer_size=64"`.
    ///
    /// Recognized keys: `drag_mode` (`free`, `rotate`, `scale`),
    /// `event_buffer_size` (a positive integer, or `unbounded`) and
    /// `drop_oldest_on_full` (`true`/`false`). Unknown keys are rejected.
    pub fn from_parameters(parameters: &str) -> Result<Self, EditorError> {
        let mut config = Self::default();

        for (key, value) in parse_parameters(parameters) {
            match key.as_str() {
                "drag_mode" => {
                    config.drag_mode = DragMode::from_name(&value)
                        .ok_or_else(|| EditorError::InvalidParameters(format!("Unknown drag_mode: {}", value)))?;
                }
                "event_buffer_size" => {
                    config.event_buffer_size = if value.eq_ignore_ascii_case("unbounded") {
                        None
                    } else {
                        let size = value.parse::<usize>().map_err(|_| {
                            EditorError::InvalidParameters(format!("Invalid event_buffer_size: {}", value))
                        })?;
                        Some(size)
                    };
                }
                "drop_oldest_on_full" => {
                    config.drop_oldest_on_full = value.parse::<bool>().map_err(|_| {
                        EditorError::InvalidParameters(format!("Invalid drop_oldest_on_full value: {}", value))
                    })?;
                }
                _ => {
                    return Err(EditorError::InvalidParameters(format!("Unsupported parameter: {}", key)));
                }
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EditorError> {
        if self.event_buffer_size == Some(0) {
            return Err(EditorError::InvalidParameters(
                "event_buffer_size must be positive; omit it for an unbounded channel".to_string(),
            ));
        }
        Ok(())
    }
}

/// Split `"key=value,key=value"` into a map. Whitespace around keys and
/// values is trimmed; entries without `=` are ignored.
pub fn parse_parameters(parameters: &str) -> HashMap<String, String> {
    parameters
        .split(',')
        .filter_map(|entry| {
            let (key, value) = entry.split_once('=')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            Some((key.to_string(), value.trim().to_string()))
        })
        .collect()
}
