pub mod numerics;
pub mod interaction;
pub use numerics::{Matrix2x2, Vector2, IDENTITY};
pub use interaction::{EditorConfig, MatrixEditor};
