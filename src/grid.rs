use serde::{Deserialize, Serialize};

/// An integer coordinate on a 3D grid.
///
/// A pure exchange shape for spatial indexing or debug overlays. The mesh
/// tables never read or write it; it carries no behavior of its own.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl GridPosition {
    pub fn new(x: i32, y: i32, z: i32) -> GridPosition {
        GridPosition { x, y, z }
    }
}

impl From<(i32, i32, i32)> for GridPosition {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        GridPosition::new(x, y, z)
    }
}
