//! Table geometry: cushions at the canvas edges, pockets at the corners.

use glam::Vec2;

use crate::config::TableConfig;

/// Immutable table constants for one rack.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub width: f32,
    pub height: f32,
    pub friction: f32,
    pub ball_radius: f32,
    pub pocket_radius: f32,
    pub rest_threshold: Option<f32>,
}

impl Table {
    pub fn from_config(config: &TableConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            friction: config.friction,
            ball_radius: config.ball_radius,
            pocket_radius: config.pocket_radius,
            rest_threshold: config.rest_threshold,
        }
    }

    /// Pocket centers: top-left, top-right, bottom-left, bottom-right.
    pub fn pockets(&self) -> [Vec2; 4] {
        [
            Vec2::ZERO,
            Vec2::new(self.width, 0.0),
            Vec2::new(0.0, self.height),
            Vec2::new(self.width, self.height),
        ]
    }

    /// Index of the pocket whose radius strictly contains `pos`.
    pub fn pocket_at(&self, pos: Vec2) -> Option<usize> {
        self.pockets()
            .iter()
            .position(|p| pos.distance(*p) < self.pocket_radius)
    }

    /// Ball center touching or past the left/right cushion.
    pub fn hits_side_cushion(&self, x: f32) -> bool {
        x <= self.ball_radius || x >= self.width - self.ball_radius
    }

    /// Ball center touching or past the top/bottom cushion.
    pub fn hits_end_cushion(&self, y: f32) -> bool {
        y <= self.ball_radius || y >= self.height - self.ball_radius
    }

    /// Corners of the region a ball center can occupy without touching a cushion.
    pub fn play_bounds(&self) -> (Vec2, Vec2) {
        let r = Vec2::splat(self.ball_radius);
        (r, Vec2::new(self.width, self.height) - r)
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::from_config(&TableConfig::default())
    }
}
