//! Vertex and uniform layouts shared with the external renderer
//!
//! Every type is `#[repr(C)]` + Pod so buffers go to JS with a plain
//! `bytemuck::cast_slice`, and each vertex type describes itself as a
//! `wgpu::VertexBufferLayout`.

use crate::particles::ParticleRecord;

/// Trail vertex drawn as a point sprite
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub size: f32,
}

impl PointVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x3,
        2 => Float32
    ];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PointVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Trail edge endpoint; color comes from the per-slot line opacity
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
}

impl LineVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Stroke particle; the vertex shader animates it from `birth` and `kind`
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub size: f32,
    pub birth: f32,
    pub kind: f32,
}

impl ParticleVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x3,
        2 => Float32,
        3 => Float32,
        4 => Float32
    ];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ParticleVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

impl From<&ParticleRecord> for ParticleVertex {
    fn from(record: &ParticleRecord) -> Self {
        Self {
            position: record.position.into(),
            color: record.color.to_array(),
            size: record.size,
            birth: record.birth_time,
            kind: record.kind.type_id(),
        }
    }
}

/// Flatten a layout for the JS `vertexAttribPointer` calls:
/// stride, then (location, byte offset, float count) per attribute
pub fn layout_words(layout: &wgpu::VertexBufferLayout) -> Vec<u32> {
    let mut words = Vec::with_capacity(1 + layout.attributes.len() * 3);
    words.push(layout.array_stride as u32);
    for attr in layout.attributes {
        words.extend([
            attr.shader_location,
            attr.offset as u32,
            (attr.format.size() / 4) as u32,
        ]);
    }
    words
}

/// Distortion and post-processing uniforms, padded to 16-byte rows
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct WarpUniforms {
    /// uv, y up
    pub pointer: [f32; 2],
    pub strength: f32,
    pub falloff: f32,
    /// Seconds since engine start
    pub time: f32,
    pub bloom: f32,
    pub _pad: [f32; 2],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Rgb;
    use crate::particles::ParticleKind;
    use nalgebra::Vector3;

    #[test]
    fn test_strides() {
        assert_eq!(PointVertex::desc().array_stride, 28);
        assert_eq!(LineVertex::desc().array_stride, 12);
        assert_eq!(ParticleVertex::desc().array_stride, 36);
        assert_eq!(std::mem::size_of::<WarpUniforms>() % 16, 0);
    }

    #[test]
    fn test_layout_words_match_struct_fields() {
        assert_eq!(
            layout_words(&PointVertex::desc()),
            vec![28, 0, 0, 3, 1, 12, 3, 2, 24, 1]
        );
        assert_eq!(layout_words(&LineVertex::desc()), vec![12, 0, 0, 3]);

        let particle = layout_words(&ParticleVertex::desc());
        assert_eq!(particle.len(), 1 + 5 * 3);
        // kind is the last float of the record
        assert_eq!(&particle[13..], &[4, 32, 1]);
    }

    #[test]
    fn test_particle_vertex_from_record() {
        let record = ParticleRecord {
            position: Vector3::new(1.0, 2.0, 3.0),
            color: Rgb::new(0.5, 0.25, 1.0),
            size: 1.5,
            birth_time: 4.0,
            kind: ParticleKind::Oscillation,
        };
        let v = ParticleVertex::from(&record);
        assert_eq!(v.position, [1.0, 2.0, 3.0]);
        assert_eq!(v.color, [0.5, 0.25, 1.0]);
        assert_eq!(v.birth, 4.0);
        assert_eq!(v.kind, 2.0);
    }
}
