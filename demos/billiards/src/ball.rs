//! A single ball and its per-frame motion.

use baize_engine::{Surface, VectorColor};
use glam::Vec2;

use crate::config::{BallColor, BallSpec};
use crate::table::Table;

/// Ball outline width in pixels.
const OUTLINE_WIDTH: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: BallColor,
    pub cue: bool,
    /// Set once the ball drops into a pocket; never cleared.
    pub potted: bool,
}

impl Ball {
    pub fn new(pos: Vec2, color: BallColor) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            color,
            cue: false,
            potted: false,
        }
    }

    pub fn cue(pos: Vec2) -> Self {
        Self { cue: true, ..Self::new(pos, BallColor::White) }
    }

    pub fn from_spec(spec: &BallSpec) -> Self {
        Self { cue: spec.cue, ..Self::new(spec.pos(), spec.color) }
    }

    /// Advance one frame. Returns the pocket index if the ball dropped this frame.
    ///
    /// Order: move, decay, cushion bounce, pocket test. Cushions only flip the
    /// velocity component; the position is not pulled back onto the table, so a
    /// fast ball can sit past the cushion line for a frame. Pockets are tested
    /// at the end position only, so a ball covering more than a pocket's
    /// diameter in one frame can skip over it.
    pub fn update(&mut self, table: &Table) -> Option<usize> {
        if self.potted {
            return None;
        }

        self.pos += self.vel;
        self.vel *= table.friction;
        if let Some(threshold) = table.rest_threshold {
            if self.vel.length() < threshold {
                self.vel = Vec2::ZERO;
            }
        }

        if table.hits_side_cushion(self.pos.x) {
            self.vel.x = -self.vel.x;
        }
        if table.hits_end_cushion(self.pos.y) {
            self.vel.y = -self.vel.y;
        }

        let pocket = table.pocket_at(self.pos)?;
        self.potted = true;
        self.vel = Vec2::ZERO;
        Some(pocket)
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    pub fn is_moving(&self) -> bool {
        !self.potted && self.vel != Vec2::ZERO
    }

    /// Filled disc with a thin black outline. Potted balls are not drawn.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, radius: f32) {
        if self.potted {
            return;
        }
        surface.fill_circle(self.pos, radius, self.color.to_vector_color());
        surface.stroke_circle(self.pos, radius, OUTLINE_WIDTH, VectorColor::BLACK);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use baize_engine::{DrawCommand, DrawList};

    fn moving(pos: Vec2, vel: Vec2) -> Ball {
        Ball { vel, ..Ball::new(pos, BallColor::Red) }
    }

    #[test]
    fn integrates_then_applies_friction() {
        let table = Table::default();
        let mut ball = moving(Vec2::new(400.0, 200.0), Vec2::new(2.0, -1.0));
        assert_eq!(ball.update(&table), None);
        assert_eq!(ball.pos, Vec2::new(402.0, 199.0));
        assert_eq!(ball.vel, Vec2::new(2.0 * 0.98, -0.98));
    }

    #[test]
    fn without_rest_threshold_velocity_never_snaps() {
        let table = Table::default();
        let mut ball = moving(Vec2::new(400.0, 200.0), Vec2::new(0.001, 0.0));
        ball.update(&table);
        assert!(ball.vel.x > 0.0);
    }

    #[test]
    fn rest_threshold_snaps_slow_balls() {
        let table = Table { rest_threshold: Some(0.05), ..Table::default() };
        let mut ball = moving(Vec2::new(400.0, 200.0), Vec2::new(0.04, 0.02));
        ball.update(&table);
        assert_eq!(ball.vel, Vec2::ZERO);
        assert!(!ball.is_moving());
    }

    #[test]
    fn left_cushion_flips_only_horizontal_velocity() {
        let table = Table::default();
        let mut ball = moving(Vec2::new(12.0, 200.0), Vec2::new(-3.0, 1.0));
        ball.update(&table);
        assert!(ball.vel.x > 0.0);
        assert_eq!(ball.vel.y, 0.98);
    }

    #[test]
    fn cushion_does_not_clamp_position() {
        let table = Table::default();
        let mut ball = moving(Vec2::new(792.0, 200.0), Vec2::new(5.0, 0.0));
        ball.update(&table);
        assert_eq!(ball.pos.x, 797.0);
        assert!(ball.pos.x > table.width - table.ball_radius);
        assert!(ball.vel.x < 0.0);
    }

    #[test]
    fn ball_at_pocket_center_is_potted_immediately() {
        let table = Table::default();
        let mut ball = Ball::new(Vec2::ZERO, BallColor::Blue);
        assert_eq!(ball.update(&table), Some(0));
        assert!(ball.potted);
        assert_eq!(ball.vel, Vec2::ZERO);
    }

    #[test]
    fn potted_ball_is_frozen() {
        let table = Table::default();
        let mut ball = Ball { potted: true, ..moving(Vec2::new(300.0, 300.0), Vec2::new(4.0, 0.0)) };
        assert_eq!(ball.update(&table), None);
        assert_eq!(ball.pos, Vec2::new(300.0, 300.0));
        assert!(ball.potted);
    }

    #[test]
    fn fast_ball_can_skip_a_pocket() {
        // 40 px per frame along the top edge jumps straight over the top-right pocket
        let table = Table::default();
        let mut ball = moving(Vec2::new(780.0, 5.0), Vec2::new(40.0, 0.0));
        assert_eq!(ball.update(&table), None);
        assert_eq!(ball.pos, Vec2::new(820.0, 5.0));
        assert!(!ball.potted);
    }

    #[test]
    fn draw_skips_potted_balls() {
        let mut list = DrawList::new();
        let mut ball = Ball::cue(Vec2::new(150.0, 200.0));
        ball.draw(&mut list, 10.0);
        assert_eq!(list.len(), 2);
        assert!(matches!(
            list.commands()[0],
            DrawCommand::FillCircle { radius, color, .. } if radius == 10.0 && color == VectorColor::WHITE
        ));

        list.clear();
        ball.potted = true;
        ball.draw(&mut list, 10.0);
        assert!(list.is_empty());
    }
}
