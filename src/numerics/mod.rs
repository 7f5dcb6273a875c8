// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules
// and the closed-form decompositions.

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod vector;
    pub mod matrix;
    pub mod point;
    pub mod traits;
}

pub mod decomposition;

pub use decomposition::{EigenDecomposition, SingularValueDecomposition};
pub use types::matrix::{Matrix2x2, IDENTITY};
pub use types::point::Point2;
pub use types::traits::FloatingPoint;
pub use types::vector::Vector2;
