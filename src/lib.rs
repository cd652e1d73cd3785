pub mod grid;
pub mod mesh;

pub use cgmath;

pub use crate::grid::GridPosition;
pub use crate::mesh::cube;
pub use crate::mesh::{Mesh, Vertex};
