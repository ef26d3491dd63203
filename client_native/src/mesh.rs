//! Mesh generation
//!
//! Two unit meshes cover every shape in the game: a unit square with its
//! origin at the top-left corner (paddles, dashes, score segments) and a
//! unit-radius circle (the ball). Instances scale and place them.

use wgpu::util::DeviceExt;
use wgpu::*;

/// Vertex data for meshes
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
}

/// Mesh data with GPU buffers
pub struct Mesh {
    pub vertex_buffer: Buffer,
    pub index_buffer: Buffer,
    pub index_count: u32,
}

impl Mesh {
    pub fn new(device: &Device, label: &str, vertices: &[Vertex], indices: &[u16]) -> Self {
        let vertex_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(vertices),
            usage: BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(indices),
            usage: BufferUsages::INDEX,
        });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
        }
    }
}

/// Unit square, origin at the top-left so instances place rects by corner.
pub fn create_rectangle(device: &Device) -> Mesh {
    let vertices = [
        Vertex { position: [0.0, 0.0] },
        Vertex { position: [1.0, 0.0] },
        Vertex { position: [1.0, 1.0] },
        Vertex { position: [0.0, 1.0] },
    ];
    let indices = [0u16, 1, 2, 2, 3, 0];
    Mesh::new(device, "Rect Mesh", &vertices, &indices)
}

/// Unit-radius circle around the origin, as a triangle fan.
pub fn create_circle(device: &Device, segments: u32) -> Mesh {
    let mut vertices = vec![Vertex { position: [0.0, 0.0] }];
    for i in 0..=segments {
        let angle = std::f32::consts::TAU * i as f32 / segments as f32;
        vertices.push(Vertex {
            position: [angle.cos(), angle.sin()],
        });
    }

    let mut indices = Vec::new();
    for i in 1..=segments as u16 {
        indices.push(0);
        indices.push(i);
        indices.push(i + 1);
    }

    Mesh::new(device, "Circle Mesh", &vertices, &indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_index_count() {
        // 32 segments -> 32 triangles; can't build GPU buffers here, just
        // check the fan arithmetic the mesh relies on.
        let segments = 32u32;
        let triangles = segments as usize;
        let mut indices = Vec::new();
        for i in 1..=segments as u16 {
            indices.extend_from_slice(&[0, i, i + 1]);
        }
        assert_eq!(indices.len(), triangles * 3);
        assert_eq!(*indices.last().unwrap(), segments as u16 + 1);
    }
}
