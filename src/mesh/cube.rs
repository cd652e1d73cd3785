//! Constant geometry for a unit cube with per-face texture mapping.
//!
//! A cube corner is shared by three faces, but each face needs its own
//! normal and UV at that corner, so every corner appears as three distinct
//! vertex records: 6 faces * 4 corners = 24 vertices, not 8. Collapsing the
//! table to 8 shared vertices would average the normals and break both
//! lighting and texturing.

use cgmath::Vector3;

use super::{Mesh, Vertex};
use crate::{vector2, vector3, vector4, vertex};

/// One of the six planar sides of the cube.
///
/// Declaration order matches the layout of [`VERTICES`] and [`INDICES`]:
/// each face owns four consecutive vertices and six consecutive indices.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Face {
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
        Face::Top,
        Face::Bottom,
    ];

    /// Outward unit normal shared by all four of the face's vertices.
    pub fn normal(self) -> Vector3<f32> {
        match self {
            Face::Front => vector3!(0.0, 0.0, 1.0),
            Face::Back => vector3!(0.0, 0.0, -1.0),
            Face::Left => vector3!(-1.0, 0.0, 0.0),
            Face::Right => vector3!(1.0, 0.0, 0.0),
            Face::Top => vector3!(0.0, 1.0, 0.0),
            Face::Bottom => vector3!(0.0, -1.0, 0.0),
        }
    }

    /// The face's four vertices within [`VERTICES`].
    pub fn vertices(self) -> &'static [Vertex] {
        let start = self as usize * 4;
        &VERTICES[start..start + 4]
    }

    /// The face's two triangles within [`INDICES`].
    pub fn triangles(self) -> &'static [u8] {
        let start = self as usize * 6;
        &INDICES[start..start + 6]
    }
}

/// Vertex table for a cube of half-extent 1.0 centred on the origin.
///
/// Per face, corners run counter-clockwise seen from outside the cube,
/// starting at the face's texture-space bottom-left, so the UVs are always
/// (0,0) (1,0) (1,1) (0,1). Colors are flat per face, purely for telling
/// the faces apart on screen.
pub static VERTICES: [Vertex; 24] = [
    // Front face
    vertex!(
        position: vector3!(-1.0, -1.0, 1.0),
        color: vector4!(1.0, 0.0, 0.0, 1.0),
        uv: vector2!(0.0, 0.0),
        normal: vector3!(0.0, 0.0, 1.0)
    ),
    vertex!(
        position: vector3!(1.0, -1.0, 1.0),
        color: vector4!(1.0, 0.0, 0.0, 1.0),
        uv: vector2!(1.0, 0.0),
        normal: vector3!(0.0, 0.0, 1.0)
    ),
    vertex!(
        position: vector3!(1.0, 1.0, 1.0),
        color: vector4!(1.0, 0.0, 0.0, 1.0),
        uv: vector2!(1.0, 1.0),
        normal: vector3!(0.0, 0.0, 1.0)
    ),
    vertex!(
        position: vector3!(-1.0, 1.0, 1.0),
        color: vector4!(1.0, 0.0, 0.0, 1.0),
        uv: vector2!(0.0, 1.0),
        normal: vector3!(0.0, 0.0, 1.0)
    ),
    // Back face
    vertex!(
        position: vector3!(1.0, -1.0, -1.0),
        color: vector4!(0.0, 1.0, 0.0, 1.0),
        uv: vector2!(0.0, 0.0),
        normal: vector3!(0.0, 0.0, -1.0)
    ),
    vertex!(
        position: vector3!(-1.0, -1.0, -1.0),
        color: vector4!(0.0, 1.0, 0.0, 1.0),
        uv: vector2!(1.0, 0.0),
        normal: vector3!(0.0, 0.0, -1.0)
    ),
    vertex!(
        position: vector3!(-1.0, 1.0, -1.0),
        color: vector4!(0.0, 1.0, 0.0, 1.0),
        uv: vector2!(1.0, 1.0),
        normal: vector3!(0.0, 0.0, -1.0)
    ),
    vertex!(
        position: vector3!(1.0, 1.0, -1.0),
        color: vector4!(0.0, 1.0, 0.0, 1.0),
        uv: vector2!(0.0, 1.0),
        normal: vector3!(0.0, 0.0, -1.0)
    ),
    // Left face
    vertex!(
        position: vector3!(-1.0, -1.0, -1.0),
        color: vector4!(0.0, 0.0, 1.0, 1.0),
        uv: vector2!(0.0, 0.0),
        normal: vector3!(-1.0, 0.0, 0.0)
    ),
    vertex!(
        position: vector3!(-1.0, -1.0, 1.0),
        color: vector4!(0.0, 0.0, 1.0, 1.0),
        uv: vector2!(1.0, 0.0),
        normal: vector3!(-1.0, 0.0, 0.0)
    ),
    vertex!(
        position: vector3!(-1.0, 1.0, 1.0),
        color: vector4!(0.0, 0.0, 1.0, 1.0),
        uv: vector2!(1.0, 1.0),
        normal: vector3!(-1.0, 0.0, 0.0)
    ),
    vertex!(
        position: vector3!(-1.0, 1.0, -1.0),
        color: vector4!(0.0, 0.0, 1.0, 1.0),
        uv: vector2!(0.0, 1.0),
        normal: vector3!(-1.0, 0.0, 0.0)
    ),
    // Right face
    vertex!(
        position: vector3!(1.0, -1.0, 1.0),
        color: vector4!(1.0, 1.0, 0.0, 1.0),
        uv: vector2!(0.0, 0.0),
        normal: vector3!(1.0, 0.0, 0.0)
    ),
    vertex!(
        position: vector3!(1.0, -1.0, -1.0),
        color: vector4!(1.0, 1.0, 0.0, 1.0),
        uv: vector2!(1.0, 0.0),
        normal: vector3!(1.0, 0.0, 0.0)
    ),
    vertex!(
        position: vector3!(1.0, 1.0, -1.0),
        color: vector4!(1.0, 1.0, 0.0, 1.0),
        uv: vector2!(1.0, 1.0),
        normal: vector3!(1.0, 0.0, 0.0)
    ),
    vertex!(
        position: vector3!(1.0, 1.0, 1.0),
        color: vector4!(1.0, 1.0, 0.0, 1.0),
        uv: vector2!(0.0, 1.0),
        normal: vector3!(1.0, 0.0, 0.0)
    ),
    // Top face
    vertex!(
        position: vector3!(-1.0, 1.0, 1.0),
        color: vector4!(0.0, 1.0, 1.0, 1.0),
        uv: vector2!(0.0, 0.0),
        normal: vector3!(0.0, 1.0, 0.0)
    ),
    vertex!(
        position: vector3!(1.0, 1.0, 1.0),
        color: vector4!(0.0, 1.0, 1.0, 1.0),
        uv: vector2!(1.0, 0.0),
        normal: vector3!(0.0, 1.0, 0.0)
    ),
    vertex!(
        position: vector3!(1.0, 1.0, -1.0),
        color: vector4!(0.0, 1.0, 1.0, 1.0),
        uv: vector2!(1.0, 1.0),
        normal: vector3!(0.0, 1.0, 0.0)
    ),
    vertex!(
        position: vector3!(-1.0, 1.0, -1.0),
        color: vector4!(0.0, 1.0, 1.0, 1.0),
        uv: vector2!(0.0, 1.0),
        normal: vector3!(0.0, 1.0, 0.0)
    ),
    // Bottom face
    vertex!(
        position: vector3!(-1.0, -1.0, -1.0),
        color: vector4!(1.0, 0.0, 1.0, 1.0),
        uv: vector2!(0.0, 0.0),
        normal: vector3!(0.0, -1.0, 0.0)
    ),
    vertex!(
        position: vector3!(1.0, -1.0, -1.0),
        color: vector4!(1.0, 0.0, 1.0, 1.0),
        uv: vector2!(1.0, 0.0),
        normal: vector3!(0.0, -1.0, 0.0)
    ),
    vertex!(
        position: vector3!(1.0, -1.0, 1.0),
        color: vector4!(1.0, 0.0, 1.0, 1.0),
        uv: vector2!(1.0, 1.0),
        normal: vector3!(0.0, -1.0, 0.0)
    ),
    vertex!(
        position: vector3!(-1.0, -1.0, 1.0),
        color: vector4!(1.0, 0.0, 1.0, 1.0),
        uv: vector2!(0.0, 1.0),
        normal: vector3!(0.0, -1.0, 0.0)
    ),
];

/// Index table: twelve triangles, two per face, wound counter-clockwise
/// seen from outside the cube. Each face's quad splits along its diagonal
/// into (0, 1, 2) and (0, 2, 3) of the face's four corners.
pub static INDICES: [u8; 36] = [
    0, 1, 2, 0, 2, 3, // Front
    4, 5, 6, 4, 6, 7, // Back
    8, 9, 10, 8, 10, 11, // Left
    12, 13, 14, 12, 14, 15, // Right
    16, 17, 18, 16, 18, 19, // Top
    20, 21, 22, 20, 22, 23, // Bottom
];

/// The cube's vertex buffer. Stable across calls; callers may treat it as a
/// constant table and share it between threads without synchronisation.
pub fn vertex_buffer() -> &'static [Vertex; 24] {
    &VERTICES
}

/// The cube's index buffer: 36 8-bit indices, every value in 0..24.
pub fn index_buffer() -> &'static [u8; 36] {
    &INDICES
}

/// Copies the constant tables into a [`Mesh`] for upload.
pub fn mesh() -> Mesh {
    Mesh::new(VERTICES.to_vec(), INDICES.to_vec())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use cgmath::InnerSpace;

    use super::{index_buffer, mesh, vertex_buffer, Face, INDICES, VERTICES};
    use crate::vector3;

    #[test]
    fn test_buffer_sizes() {
        assert_eq!(vertex_buffer().len(), 24);
        assert_eq!(index_buffer().len(), 36);
    }

    #[test]
    fn test_indices_in_range() {
        for i in INDICES.iter() {
            assert!((*i as usize) < VERTICES.len());
        }
    }

    #[test]
    fn test_every_vertex_referenced() {
        let used: HashSet<u8> = INDICES.iter().copied().collect();
        assert_eq!(used.len(), VERTICES.len());
    }

    #[test]
    fn test_triangles_stay_within_their_face() {
        assert_eq!(INDICES.len() % 3, 0);
        assert_eq!(INDICES.len() / 3, 12);

        // each face owns six consecutive indices, all into its own block of four vertices
        for (face, face_indices) in INDICES.chunks(6).enumerate() {
            for i in face_indices {
                assert_eq!(*i as usize / 4, face);
            }
        }
    }

    #[test]
    fn test_face_vertices_share_the_face_normal() {
        for face in Face::ALL {
            assert!((face.normal().magnitude() - 1.0).abs() < 1e-5);
            for v in face.vertices() {
                assert!((v.normal - face.normal()).magnitude() < 1e-5);
            }
        }
    }

    #[test]
    fn test_face_uvs_are_the_unit_square_corners() {
        let corners = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
        for face in Face::ALL {
            let uvs: Vec<(f32, f32)> = face.vertices().iter().map(|v| (v.uv.x, v.uv.y)).collect();
            for corner in corners.iter() {
                assert!(uvs.contains(corner));
            }
        }
    }

    #[test]
    fn test_winding_agrees_with_normals() {
        for triangle in INDICES.chunks(3) {
            let v0 = VERTICES[triangle[0] as usize];
            let v1 = VERTICES[triangle[1] as usize];
            let v2 = VERTICES[triangle[2] as usize];

            let cross = (v1.position - v0.position).cross(v2.position - v0.position);
            assert!(cross.dot(v0.normal) > 0.0);
        }
    }

    #[test]
    fn test_color_and_position_domains() {
        for v in VERTICES.iter() {
            for c in [v.color.x, v.color.y, v.color.z, v.color.w].iter() {
                assert!(*c >= 0.0 && *c <= 1.0);
            }
            for p in [v.position.x, v.position.y, v.position.z].iter() {
                assert_eq!(p.abs(), 1.0);
            }
        }
    }

    #[test]
    fn test_corners_appear_once_per_adjacent_face() {
        for x in [-1.0f32, 1.0] {
            for y in [-1.0f32, 1.0] {
                for z in [-1.0f32, 1.0] {
                    let corner = vector3!(x, y, z);
                    let count = VERTICES.iter().filter(|v| v.position == corner).count();
                    assert_eq!(count, 3);
                }
            }
        }
    }

    #[test]
    fn test_face_extraction_tiles_texture_space() {
        // each face's two triangles tile the full unit square in UV space
        for face in Face::ALL {
            let mut area = 0.0;
            for triangle in face.triangles().chunks(3) {
                let a = VERTICES[triangle[0] as usize].uv;
                let b = VERTICES[triangle[1] as usize].uv;
                let c = VERTICES[triangle[2] as usize].uv;

                let signed = (b - a).perp_dot(c - a) / 2.0;
                assert!(signed > 0.0);
                area += signed;
            }
            assert!((area - 1.0).abs() < 1e-5);
        }

        let front: HashSet<u8> = Face::Front.triangles().iter().copied().collect();
        assert_eq!(front.len(), 4);
        assert_eq!(Face::Front.vertices().len(), 4);
    }

    #[test]
    fn test_bounding_box_is_the_unit_cube() {
        let mut min = VERTICES[0].position;
        let mut max = VERTICES[0].position;
        for v in VERTICES.iter() {
            min.x = min.x.min(v.position.x);
            min.y = min.y.min(v.position.y);
            min.z = min.z.min(v.position.z);
            max.x = max.x.max(v.position.x);
            max.y = max.y.max(v.position.y);
            max.z = max.z.max(v.position.z);
        }
        assert_eq!(min, vector3!(-1.0, -1.0, -1.0));
        assert_eq!(max, vector3!(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_repeated_retrieval_is_identical() {
        assert!(std::ptr::eq(vertex_buffer(), vertex_buffer()));
        assert!(std::ptr::eq(index_buffer(), index_buffer()));
        assert_eq!(vertex_buffer(), vertex_buffer());
        assert_eq!(index_buffer(), index_buffer());
    }

    #[test]
    fn test_mesh_matches_the_tables() {
        let mesh = mesh();
        assert_eq!(mesh.vertices, VERTICES.to_vec());
        assert_eq!(mesh.triangles, INDICES.to_vec());
    }
}
