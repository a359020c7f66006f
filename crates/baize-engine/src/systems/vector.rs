//! Lyon-backed implementation of [`Surface`].
//!
//! Every primitive is tessellated on the CPU into a flat triangle list of
//! [`VectorVertex`] records, which the host uploads as-is.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use lyon::math::point;
use lyon::path::{Path, Winding};
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, FillVertexConstructor,
    StrokeOptions, StrokeTessellator, StrokeVertex, StrokeVertexConstructor, VertexBuffers,
};

use super::surface::{dash_segments, Surface};

/// Tessellation tolerance in surface units.
const TOLERANCE: f32 = 0.5;

/// Per-vertex data: position + RGBA, 6 floats = 24 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct VectorVertex {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorVertex {
    pub const FLOATS: usize = 6;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// RGBA color, components in 0.0 - 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorColor {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Fully opaque color from 0-255 channels (CSS-style hex colors).
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 0.5, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);
    pub const ORANGE: Self = Self::rgb(1.0, 0.65, 0.0);
    pub const PURPLE: Self = Self::rgb(0.5, 0.0, 0.5);
}

impl Default for VectorColor {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Stamps a flat color onto every tessellated vertex.
struct ColorCtor(VectorColor);

impl ColorCtor {
    fn vertex(&self, x: f32, y: f32) -> VectorVertex {
        let c = self.0;
        VectorVertex { x, y, r: c.r, g: c.g, b: c.b, a: c.a }
    }
}

impl FillVertexConstructor<VectorVertex> for ColorCtor {
    fn new_vertex(&mut self, vertex: FillVertex) -> VectorVertex {
        let p = vertex.position();
        self.vertex(p.x, p.y)
    }
}

impl StrokeVertexConstructor<VectorVertex> for ColorCtor {
    fn new_vertex(&mut self, vertex: StrokeVertex) -> VectorVertex {
        let p = vertex.position();
        self.vertex(p.x, p.y)
    }
}

/// Tessellators plus the per-frame output buffer.
pub struct VectorState {
    fill_tess: FillTessellator,
    stroke_tess: StrokeTessellator,
    geometry: VertexBuffers<VectorVertex, u32>,
    buffer: Vec<f32>,
}

impl VectorState {
    pub fn new() -> Self {
        Self::with_capacity(16384)
    }

    /// Pre-size the output for `max_vertices` vertices.
    pub fn with_capacity(max_vertices: usize) -> Self {
        Self {
            fill_tess: FillTessellator::new(),
            stroke_tess: StrokeTessellator::new(),
            geometry: VertexBuffers::new(),
            buffer: Vec::with_capacity(max_vertices * VectorVertex::FLOATS),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.buffer.len() / VectorVertex::FLOATS
    }

    /// Flat `[x, y, r, g, b, a]` triangle-list floats.
    pub fn floats(&self) -> &[f32] {
        &self.buffer
    }

    /// The same data viewed as vertex records.
    pub fn vertices(&self) -> &[VectorVertex] {
        bytemuck::cast_slice(&self.buffer)
    }

    /// Raw pointer to the flat float buffer (for host-side copies).
    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    /// Expand indexed geometry into the flat triangle list.
    fn flush_geometry(&mut self) {
        for idx in &self.geometry.indices {
            let v = &self.geometry.vertices[*idx as usize];
            self.buffer.extend_from_slice(&[v.x, v.y, v.r, v.g, v.b, v.a]);
        }
        self.geometry.vertices.clear();
        self.geometry.indices.clear();
    }

    fn fill_path(&mut self, path: &Path, color: VectorColor) {
        let result = self.fill_tess.tessellate_path(
            path,
            &FillOptions::tolerance(TOLERANCE),
            &mut BuffersBuilder::new(&mut self.geometry, ColorCtor(color)),
        );
        match result {
            Ok(()) => self.flush_geometry(),
            Err(e) => {
                log::debug!("fill tessellation failed: {:?}", e);
                self.geometry.vertices.clear();
                self.geometry.indices.clear();
            }
        }
    }

    fn stroke_path(&mut self, path: &Path, width: f32, color: VectorColor) {
        let result = self.stroke_tess.tessellate_path(
            path,
            &StrokeOptions::tolerance(TOLERANCE).with_line_width(width),
            &mut BuffersBuilder::new(&mut self.geometry, ColorCtor(color)),
        );
        match result {
            Ok(()) => self.flush_geometry(),
            Err(e) => {
                log::debug!("stroke tessellation failed: {:?}", e);
                self.geometry.vertices.clear();
                self.geometry.indices.clear();
            }
        }
    }

    /// Fill a closed polygon (convex or concave). Needs at least 3 points.
    pub fn fill_polygon(&mut self, points: &[Vec2], color: VectorColor) {
        if points.len() < 3 {
            return;
        }
        let mut builder = Path::builder();
        builder.begin(point(points[0].x, points[0].y));
        for p in &points[1..] {
            builder.line_to(point(p.x, p.y));
        }
        builder.close();
        self.fill_path(&builder.build(), color);
    }

    /// Stroke an open polyline. Needs at least 2 points.
    pub fn stroke_polyline(&mut self, points: &[Vec2], width: f32, color: VectorColor) {
        if points.len() < 2 || width <= 0.0 {
            return;
        }
        let mut builder = Path::builder();
        builder.begin(point(points[0].x, points[0].y));
        for p in &points[1..] {
            builder.line_to(point(p.x, p.y));
        }
        builder.end(false);
        self.stroke_path(&builder.build(), width, color);
    }

    fn circle_path(center: Vec2, radius: f32) -> Path {
        let mut builder = Path::builder();
        builder.add_circle(point(center.x, center.y), radius, Winding::Positive);
        builder.build()
    }
}

impl Default for VectorState {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for VectorState {
    fn clear(&mut self) {
        self.buffer.clear();
    }

    fn fill_rect(&mut self, pos: Vec2, width: f32, height: f32, color: VectorColor) {
        self.fill_polygon(&[
            pos,
            Vec2::new(pos.x + width, pos.y),
            Vec2::new(pos.x + width, pos.y + height),
            Vec2::new(pos.x, pos.y + height),
        ], color);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: VectorColor) {
        if radius <= 0.0 {
            return;
        }
        self.fill_path(&Self::circle_path(center, radius), color);
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: VectorColor) {
        if radius <= 0.0 || width <= 0.0 {
            return;
        }
        self.stroke_path(&Self::circle_path(center, radius), width, color);
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: VectorColor) {
        self.stroke_polyline(&[from, to], width, color);
    }

    fn dashed_line(&mut self, from: Vec2, to: Vec2, width: f32, dash: f32, gap: f32, color: VectorColor) {
        for (a, b) in dash_segments(from, to, dash, gap) {
            self.stroke_polyline(&[a, b], width, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn vector_vertex_is_24_bytes() {
        assert_eq!(size_of::<VectorVertex>(), VectorVertex::STRIDE_BYTES);
    }

    #[test]
    fn rgb8_matches_css_hex() {
        // #064f1c felt green
        let felt = VectorColor::rgb8(0x06, 0x4f, 0x1c);
        assert!((felt.g - 79.0 / 255.0).abs() < 1e-6);
        assert_eq!(felt.a, 1.0);
    }

    #[test]
    fn fill_rect_is_two_triangles() {
        let mut state = VectorState::new();
        state.fill_rect(Vec2::ZERO, 800.0, 400.0, VectorColor::GREEN);
        assert_eq!(state.vertex_count(), 6);
        assert_eq!(state.vertices()[0].g, VectorColor::GREEN.g);
    }

    #[test]
    fn circles_and_lines_produce_triangles() {
        let mut state = VectorState::new();
        state.fill_circle(Vec2::new(50.0, 50.0), 10.0, VectorColor::WHITE);
        let filled = state.vertex_count();
        assert!(filled > 0 && filled % 3 == 0);

        state.stroke_circle(Vec2::new(50.0, 50.0), 10.0, 1.0, VectorColor::BLACK);
        state.line(Vec2::ZERO, Vec2::new(100.0, 0.0), 4.0, VectorColor::WHITE);
        assert!(state.vertex_count() > filled);
    }

    #[test]
    fn dashed_line_draws_one_stroke_per_dash() {
        let mut solid = VectorState::new();
        solid.line(Vec2::ZERO, Vec2::new(5.0, 0.0), 1.0, VectorColor::WHITE);
        let per_dash = solid.vertex_count();

        let mut dashed = VectorState::new();
        dashed.dashed_line(Vec2::ZERO, Vec2::new(20.0, 0.0), 1.0, 5.0, 5.0, VectorColor::WHITE);
        assert_eq!(dashed.vertex_count(), per_dash * 2);
    }

    #[test]
    fn degenerate_shapes_produce_nothing() {
        let mut state = VectorState::new();
        state.fill_polygon(&[Vec2::ZERO, Vec2::ONE], VectorColor::RED);
        state.fill_circle(Vec2::ZERO, 0.0, VectorColor::RED);
        state.stroke_polyline(&[Vec2::ZERO], 2.0, VectorColor::RED);
        state.dashed_line(Vec2::ONE, Vec2::ONE, 1.0, 5.0, 5.0, VectorColor::RED);
        assert_eq!(state.vertex_count(), 0);
    }

    #[test]
    fn clear_resets_buffer() {
        let mut state = VectorState::new();
        state.fill_rect(Vec2::ZERO, 10.0, 10.0, VectorColor::BLUE);
        state.clear();
        assert_eq!(state.vertex_count(), 0);
        assert!(state.floats().is_empty());
    }
}
