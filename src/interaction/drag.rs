//! Drag update rules for the matrix editor.
//!
//! A drag gesture grabs one column vector of the matrix (the image of one
//! basis vector) and moves the pointer from `last` by `delta`, both in matrix
//! units. Each [`DragMode`] turns that motion into a different in-place
//! update of the matrix.

use serde::{Deserialize, Serialize};

use crate::numerics::{Matrix2x2, Vector2};

/// How a drag gesture updates the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragMode {
    /// The grabbed column follows the pointer.
    #[default]
    Free,
    /// The whole matrix rotates by the angle the pointer swept around the origin.
    Rotate,
    /// The grabbed column is scaled by the change in pointer distance from the origin.
    Scale,
}

impl DragMode {
    pub fn all() -> [DragMode; 3] {
        [DragMode::Free, DragMode::Rotate, DragMode::Scale]
    }

    pub fn name(self) -> &'static str {
        match self {
            DragMode::Free => "free",
            DragMode::Rotate => "rotate",
            DragMode::Scale => "scale",
        }
    }

    /// Parse a mode name as used in configuration strings.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Apply the drag to `matrix`.
    ///
    /// `column` must be 0 or 1; the caller validates it. A pointer resting on
    /// the origin has no direction, so `Rotate` and `Scale` produce NaN
    /// entries there.
    pub fn apply(self, matrix: &mut Matrix2x2, column: usize, last: Vector2, delta: Vector2) {
        match self {
            DragMode::Free => {
                let moved = matrix.column(column) + delta;
                matrix.set_column(column, moved);
            }
            DragMode::Rotate => {
                let next = last + delta;
                let from = last.normalized();
                let to = next.normalized();
                // Undo the angle of `last`, then apply the angle of `next`.
                matrix.rotate(from.x, -from.y);
                matrix.rotate(to.x, to.y);
            }
            DragMode::Scale => {
                let scale = (last + delta).length() / last.length();
                let scaled = matrix.column(column) * scale;
                matrix.set_column(column, scaled);
            }
        }
    }
}
