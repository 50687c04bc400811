//! Shape generation for 2D primitives
//!
//! Every entity shares the same unit quad (corners at ±1) and gets its size
//! and placement from its transform, applied CPU-side while building the
//! frame's triangle list.

use glam::{Mat4, Vec4};

use super::vertex::{Vertex, colors};
use crate::sim::GameState;

/// Unit quad as two triangles, counterclockwise
const UNIT_QUAD: [[f32; 2]; 6] = [
    [-1.0, 1.0],
    [-1.0, -1.0],
    [1.0, -1.0],
    [-1.0, 1.0],
    [1.0, -1.0],
    [1.0, 1.0],
];

/// Nose triangle in the quad's local space, marking the craft's facing
const NOSE: [[f32; 2]; 3] = [[0.2, -0.5], [0.2, 0.5], [1.0, 0.0]];

/// Push one transformed triangle list.
fn push_transformed(
    vertices: &mut Vec<Vertex>,
    local: &[[f32; 2]],
    transform: &Mat4,
    color: [f32; 4],
) {
    for &[x, y] in local {
        let p = *transform * Vec4::new(x, y, 0.0, 1.0);
        vertices.push(Vertex::new(p.x, p.y, color));
    }
}

/// Build the frame's full vertex list: the craft plus every gem not yet
/// absorbed. Absorbed gems simply stop being emitted.
pub fn scene_vertices(state: &GameState) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((1 + state.targets.len()) * 6 + 3);

    for target in &state.targets {
        if target.absorbed {
            continue;
        }
        push_transformed(&mut vertices, &UNIT_QUAD, &target.transform, colors::GEM);
    }

    push_transformed(
        &mut vertices,
        &UNIT_QUAD,
        &state.craft.transform,
        colors::CRAFT,
    );
    push_transformed(
        &mut vertices,
        &NOSE,
        &state.craft.transform,
        colors::CRAFT_NOSE,
    );

    vertices
}
