//! Event types published by the matrix editor.

use crate::interaction::drag::DragMode;
use crate::numerics::Matrix2x2;

/// What caused a matrix change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChangeCause {
    /// The matrix was replaced wholesale by `MatrixEditor::set`.
    Replaced,
    /// The matrix was mutated in place through `MatrixEditor::modify`.
    Modified,
    /// A drag gesture moved one column.
    Dragged { column: usize, mode: DragMode },
}

/// Snapshot of the editor's matrix after a change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixEvent {
    /// Monotonic per-editor counter, starting at 0.
    pub sequence: u64,
    pub cause: ChangeCause,
    pub matrix: Matrix2x2,
}
