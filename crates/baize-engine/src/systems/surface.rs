//! The 2D drawing-surface contract games render into.
//!
//! A frame is drawn as a sequence of primitive calls on a [`Surface`]. The
//! engine ships two implementations: [`VectorState`](super::vector::VectorState),
//! which tessellates everything into a GPU-ready vertex buffer, and
//! [`DrawList`], which records the calls so a host can replay them onto a
//! Canvas2D context (and so tests can assert on what was drawn).

use glam::Vec2;

use super::vector::VectorColor;

/// Primitive drawing operations, canvas-style.
pub trait Surface {
    /// Discard everything drawn so far this frame.
    fn clear(&mut self);

    fn fill_rect(&mut self, pos: Vec2, width: f32, height: f32, color: VectorColor);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: VectorColor);

    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: VectorColor);

    /// Solid line segment.
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: VectorColor);

    /// Dashed line segment: `dash` units drawn, `gap` units skipped, starting at `from`.
    fn dashed_line(&mut self, from: Vec2, to: Vec2, width: f32, dash: f32, gap: f32, color: VectorColor);
}

/// Split a segment into the visible pieces of a dash pattern.
///
/// The pattern starts with a dash at `from`; the last dash is cut at `to`.
/// Returns nothing for zero-length segments or a non-positive dash length.
pub fn dash_segments(from: Vec2, to: Vec2, dash: f32, gap: f32) -> Vec<(Vec2, Vec2)> {
    let delta = to - from;
    let len = delta.length();
    if len <= f32::EPSILON || dash <= 0.0 {
        return Vec::new();
    }
    let dir = delta / len;
    let period = dash + gap.max(0.0);

    let mut out = Vec::with_capacity((len / period) as usize + 1);
    let mut t = 0.0;
    while t < len {
        let end = (t + dash).min(len);
        out.push((from + dir * t, from + dir * end));
        t += period;
    }
    out
}

/// One recorded drawing call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    FillRect { pos: Vec2, width: f32, height: f32, color: VectorColor },
    FillCircle { center: Vec2, radius: f32, color: VectorColor },
    StrokeCircle { center: Vec2, radius: f32, width: f32, color: VectorColor },
    Line { from: Vec2, to: Vec2, width: f32, color: VectorColor },
    DashedLine { from: Vec2, to: Vec2, width: f32, dash: f32, gap: f32, color: VectorColor },
}

/// A [`Surface`] that records commands instead of rasterizing them.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Circles filled at `center`, in draw order.
    pub fn filled_circles_at(&self, center: Vec2) -> impl Iterator<Item = &DrawCommand> + '_ {
        self.commands.iter().filter(move |c| {
            matches!(c, DrawCommand::FillCircle { center: at, .. } if *at == center)
        })
    }
}

impl Surface for DrawList {
    fn clear(&mut self) {
        self.commands.clear();
    }

    fn fill_rect(&mut self, pos: Vec2, width: f32, height: f32, color: VectorColor) {
        self.commands.push(DrawCommand::FillRect { pos, width, height, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: VectorColor) {
        self.commands.push(DrawCommand::FillCircle { center, radius, color });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: VectorColor) {
        self.commands.push(DrawCommand::StrokeCircle { center, radius, width, color });
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: VectorColor) {
        self.commands.push(DrawCommand::Line { from, to, width, color });
    }

    fn dashed_line(&mut self, from: Vec2, to: Vec2, width: f32, dash: f32, gap: f32, color: VectorColor) {
        self.commands.push(DrawCommand::DashedLine { from, to, width, dash, gap, color });
    }
}
