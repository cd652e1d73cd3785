use cgmath::{Vector2, Vector3, Vector4};
use glium::implement_vertex;
use uuid::Uuid;

pub mod buffer;
pub mod cube;

/// A `Vertex` is represented by a 3D position, RGBA color, 2D UV position and normal.
///
/// One record exists per (corner, face) pair: the position is shared with the
/// other faces meeting at that corner, the color, UV and normal are not.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vertex {
    pub position: Vector3<f32>,
    pub color: Vector4<f32>,
    pub uv: Vector2<f32>,
    pub normal: Vector3<f32>,
}

/// Uses an internal `GpuVertex` struct to get the type bindings that a `Vertex` will use on the GPU.
///
/// Sound because `Vertex` is `#[repr(C)]` with all-`f32` fields, so it has the
/// exact layout `GpuVertex` describes.
impl glium::Vertex for Vertex {
    fn build_bindings() -> glium::VertexFormat {
        GpuVertex::build_bindings()
    }
}

/// Represents a `Vertex` as it should be laid out on the GPU.
#[repr(C)]
#[derive(Clone, Copy)]
struct GpuVertex {
    position: [f32; 3],
    color: [f32; 4],
    uv: [f32; 2],
    normal: [f32; 3],
}
implement_vertex!(GpuVertex, position, color, uv, normal);

#[macro_export]
macro_rules! vertex {
    ( position: $position:expr, color: $color:expr, uv: $uv:expr, normal: $normal:expr ) => {
        $crate::mesh::Vertex {
            position: $position,
            color: $color,
            uv: $uv,
            normal: $normal,
        }
    };
}

#[macro_export]
macro_rules! vector2 {
    ( $x:expr,$y:expr ) => {
        $crate::cgmath::Vector2 { x: $x, y: $y }
    };
}

#[macro_export]
macro_rules! vector3 {
    ( $x:expr,$y:expr,$z:expr ) => {
        $crate::cgmath::Vector3 {
            x: $x,
            y: $y,
            z: $z,
        }
    };
}

#[macro_export]
macro_rules! vector4 {
    ( $x:expr,$y:expr,$z:expr,$w:expr ) => {
        $crate::cgmath::Vector4 {
            x: $x,
            y: $y,
            z: $z,
            w: $w,
        }
    };
}

/// An abstract representation of a model by its vertices and triangle indices.
///
/// Simply a store of mesh data that must be loaded onto the GPU for rendering.
/// Indices are 8-bit: every mesh in this crate fits in 256 vertices and is
/// drawn with an 8-bit index width.
pub struct Mesh {
    pub id: Uuid,
    pub vertices: Vec<Vertex>,
    pub triangles: Vec<u8>,
}

impl Mesh {
    /// Creates a new `Mesh` from a list of vertices and indices.
    pub fn new(vertices: Vec<Vertex>, triangles: Vec<u8>) -> Mesh {
        Mesh {
            id: Uuid::new_v4(),
            vertices,
            triangles,
        }
    }
}
