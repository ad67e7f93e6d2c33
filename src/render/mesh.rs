//! Mesh building for on-screen rendering using iced graphics
//!
//! These functions build vertex/index buffers for anti-aliased markers and
//! lines. Coordinates are canvas-local; the caller positions the mesh with a
//! translation.

use cosmic::iced::Color;
use cosmic::iced_core::{Rectangle, Transformation};
use cosmic::iced_widget::graphics::{
    Mesh,
    color::{Packed, pack},
    mesh::{Indexed, Renderer as MeshRenderer, SolidVertex2D},
};

use super::commands::Rgb;
use super::geometry::mesh as mesh_const;
use crate::domain::Point;

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::from_rgb(c.r, c.g, c.b)
    }
}

/// Mesh result: vertices and indices for rendering
pub type SolidMesh = (Vec<SolidVertex2D>, Vec<u32>);

/// Build a filled, feathered disc centered on `center`
pub fn build_circle_mesh(center: Point, radius: f32, color: Color) -> SolidMesh {
    let (packed_inner, packed_outer) = feather_colors(color);
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    add_circle(
        &mut vertices,
        &mut indices,
        center.x,
        center.y,
        radius,
        mesh_const::FEATHER,
        packed_inner,
        packed_outer,
    );

    (vertices, indices)
}

/// Build a stroked, feathered line from `from` to `to`
///
/// Returns None if the line is too short to render.
pub fn build_line_mesh(from: Point, to: Point, width: f32, color: Color) -> Option<SolidMesh> {
    let (packed_inner, packed_outer) = feather_colors(color);
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    add_line_segment(
        &mut vertices,
        &mut indices,
        from.x,
        from.y,
        to.x,
        to.y,
        width / 2.0,
        mesh_const::FEATHER,
        packed_inner,
        packed_outer,
    );

    if indices.is_empty() {
        None
    } else {
        Some((vertices, indices))
    }
}

/// Draw a mesh in its own layer, offset by `origin`
pub fn draw_solid_mesh(
    renderer: &mut cosmic::Renderer,
    clip_bounds: Rectangle,
    origin: Point,
    (vertices, indices): SolidMesh,
) {
    use cosmic::iced_core::Renderer as CoreRenderer;

    renderer.with_layer(clip_bounds, |renderer| {
        renderer.draw_mesh(Mesh::Solid {
            buffers: Indexed { vertices, indices },
            transformation: Transformation::translate(origin.x, origin.y),
            clip_bounds,
        });
    });
}

/// Packed core color and its fully transparent edge
fn feather_colors(color: Color) -> (Packed, Packed) {
    let mut inner = color;
    inner.a = inner.a.clamp(0.0, 1.0);

    let mut outer = color;
    outer.a = 0.0;

    (pack(inner), pack(outer))
}

/// Build a line segment with anti-aliased feathering
#[allow(clippy::too_many_arguments)]
fn add_line_segment(
    vertices: &mut Vec<SolidVertex2D>,
    indices: &mut Vec<u32>,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    radius: f32,
    feather: f32,
    packed_inner: Packed,
    packed_outer: Packed,
) {
    let ldx = x1 - x0;
    let ldy = y1 - y0;
    let llen = (ldx * ldx + ldy * ldy).sqrt();
    if llen < mesh_const::MIN_LINE_LENGTH {
        return;
    }
    let lnx = ldx / llen;
    let lny = ldy / llen;

    // Perpendicular
    let px = -lny;
    let py = lnx;

    let base_idx = vertices.len() as u32;
    let inner_r = radius;
    let outer_r = radius + feather;

    for (r, color) in [(inner_r, packed_inner), (outer_r, packed_outer)] {
        vertices.push(SolidVertex2D {
            position: [x0 + px * r, y0 + py * r],
            color,
        });
        vertices.push(SolidVertex2D {
            position: [x0 - px * r, y0 - py * r],
            color,
        });
        vertices.push(SolidVertex2D {
            position: [x1 - px * r, y1 - py * r],
            color,
        });
        vertices.push(SolidVertex2D {
            position: [x1 + px * r, y1 + py * r],
            color,
        });
    }

    // Solid core
    indices.extend_from_slice(&[base_idx, base_idx + 1, base_idx + 2]);
    indices.extend_from_slice(&[base_idx, base_idx + 2, base_idx + 3]);

    // Feather band (+ side)
    indices.extend_from_slice(&[base_idx + 4, base_idx, base_idx + 3]);
    indices.extend_from_slice(&[base_idx + 4, base_idx + 3, base_idx + 7]);

    // Feather band (- side)
    indices.extend_from_slice(&[base_idx + 5, base_idx + 6, base_idx + 2]);
    indices.extend_from_slice(&[base_idx + 5, base_idx + 2, base_idx + 1]);
}

/// Build a disc with anti-aliased feathering
#[allow(clippy::too_many_arguments)]
fn add_circle(
    vertices: &mut Vec<SolidVertex2D>,
    indices: &mut Vec<u32>,
    cx: f32,
    cy: f32,
    radius: f32,
    feather: f32,
    packed_inner: Packed,
    packed_outer: Packed,
) {
    let base_idx = vertices.len() as u32;
    let segments = mesh_const::CIRCLE_SEGMENTS;

    vertices.push(SolidVertex2D {
        position: [cx, cy],
        color: packed_inner,
    });

    for (r, color) in [(radius, packed_inner), (radius + feather, packed_outer)] {
        for i in 0..segments {
            let angle = (i as f32 / segments as f32) * std::f32::consts::TAU;
            vertices.push(SolidVertex2D {
                position: [cx + r * angle.cos(), cy + r * angle.sin()],
                color,
            });
        }
    }

    // Center to inner ring
    for i in 0..segments {
        let next = (i + 1) % segments;
        indices.push(base_idx);
        indices.push(base_idx + 1 + i as u32);
        indices.push(base_idx + 1 + next as u32);
    }

    // Inner ring to outer ring
    for i in 0..segments {
        let next = (i + 1) % segments;
        let inner_i = base_idx + 1 + i as u32;
        let inner_next = base_idx + 1 + next as u32;
        let outer_i = base_idx + 1 + segments as u32 + i as u32;
        let outer_next = base_idx + 1 + segments as u32 + next as u32;

        indices.extend_from_slice(&[inner_i, outer_i, outer_next]);
        indices.extend_from_slice(&[inner_i, outer_next, inner_next]);
    }
}
