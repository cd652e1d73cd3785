use glium::index::PrimitiveType;
use glium::{Display, IndexBuffer, VertexBuffer};

use super::{Mesh, Vertex};

/// Represents the errors that can occur when loading a `Mesh` onto the GPU.
#[derive(Debug)]
pub enum MeshBufferError {
    VertexBufferCreationError(glium::vertex::BufferCreationError),
    IndexBufferCreationError(glium::index::BufferCreationError),
}

/// Conversion traits from `BufferCreationError` types to `MeshBufferError`
impl From<glium::vertex::BufferCreationError> for MeshBufferError {
    fn from(err: glium::vertex::BufferCreationError) -> Self {
        MeshBufferError::VertexBufferCreationError(err)
    }
}

impl From<glium::index::BufferCreationError> for MeshBufferError {
    fn from(err: glium::index::BufferCreationError) -> Self {
        MeshBufferError::IndexBufferCreationError(err)
    }
}

/// A `Mesh` uploaded to the GPU as one immutable vertex/index buffer pair.
///
/// The geometry never changes after upload, so both buffers are created
/// immutable; any number of draw calls may reference them read-only.
pub struct MeshBuffer {
    vbo: VertexBuffer<Vertex>,
    ibo: IndexBuffer<u8>,
}

impl MeshBuffer {
    /// Uploads `mesh` with triangle-list topology and an 8-bit index width.
    pub fn new(display: &Display, mesh: &Mesh) -> Result<MeshBuffer, MeshBufferError> {
        let vbo = VertexBuffer::immutable(display, &mesh.vertices)?;
        let ibo = IndexBuffer::immutable(display, PrimitiveType::TrianglesList, &mesh.triangles)?;

        log::debug!(
            "uploaded mesh {} ({} vertices, {} indices)",
            mesh.id,
            mesh.vertices.len(),
            mesh.triangles.len()
        );

        Ok(MeshBuffer { vbo, ibo })
    }

    pub fn vertex_buffer(&self) -> &VertexBuffer<Vertex> {
        &self.vbo
    }

    pub fn index_buffer(&self) -> &IndexBuffer<u8> {
        &self.ibo
    }
}
