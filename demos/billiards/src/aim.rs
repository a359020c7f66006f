//! Drag-to-shoot aiming.
//!
//! Press anywhere to start aiming, drag, release to shoot. The cue ball is
//! sent from the drag point back through its own center, so pulling away from
//! the ball and letting go shoots it the other way.

use glam::Vec2;

use crate::table::Table;

/// One completed drag, from press point to last pointer position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aim {
    pub start: Vec2,
    pub current: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AimState {
    #[default]
    Idle,
    Aiming(Aim),
}

impl AimState {
    /// Pointer pressed: (re)start aiming at `at`.
    pub fn press(&mut self, at: Vec2) {
        *self = AimState::Aiming(Aim { start: at, current: at });
    }

    /// Pointer moved: track it while aiming, ignore otherwise.
    pub fn drag(&mut self, to: Vec2) {
        if let AimState::Aiming(aim) = self {
            aim.current = to;
        }
    }

    /// Pointer released: back to idle, handing over the finished drag if any.
    pub fn release(&mut self) -> Option<Aim> {
        match std::mem::take(self) {
            AimState::Aiming(aim) => Some(aim),
            AimState::Idle => None,
        }
    }

    pub fn active(&self) -> Option<&Aim> {
        match self {
            AimState::Aiming(aim) => Some(aim),
            AimState::Idle => None,
        }
    }

    pub fn is_aiming(&self) -> bool {
        matches!(self, AimState::Aiming(_))
    }
}

/// Cue velocity for a release at `aim_point`: from the aim point toward the
/// ball, proportional to the drag distance.
pub fn shot_velocity(cue_pos: Vec2, aim_point: Vec2, scale: f32) -> Vec2 {
    (cue_pos - aim_point) * scale
}

/// Predicted path of a ball leaving `origin` along `dir`, bouncing once off
/// the first cushion it reaches, cut at `length` pixels.
///
/// Returns the polyline vertices: `[origin, end]` when no cushion is reached
/// within `length` (or the ball is already past one), `[origin, bounce, end]`
/// otherwise. A zero direction yields `[origin]`.
pub fn preview_path(origin: Vec2, dir: Vec2, table: &Table, length: f32) -> Vec<Vec2> {
    let dir = dir.normalize_or_zero();
    if dir == Vec2::ZERO {
        return vec![origin];
    }

    let (min, max) = table.play_bounds();
    let t_x = time_to_bound(origin.x, dir.x, min.x, max.x);
    let t_y = time_to_bound(origin.y, dir.y, min.y, max.y);
    let t_hit = t_x.min(t_y);

    if !(0.0..length).contains(&t_hit) {
        return vec![origin, origin + dir * length];
    }

    let bounce = origin + dir * t_hit;
    let mut reflected = dir;
    if t_x <= t_y {
        reflected.x = -reflected.x;
    }
    if t_y <= t_x {
        reflected.y = -reflected.y;
    }
    vec![origin, bounce, bounce + reflected * (length - t_hit)]
}

/// Distance along one axis until `pos` reaches the bound it is heading for.
fn time_to_bound(pos: f32, dir: f32, min: f32, max: f32) -> f32 {
    if dir > 0.0 {
        (max - pos) / dir
    } else if dir < 0.0 {
        (min - pos) / dir
    } else {
        f32::INFINITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_drag_release_cycle() {
        let mut state = AimState::default();
        state.drag(Vec2::new(1.0, 1.0));
        assert_eq!(state, AimState::Idle);

        state.press(Vec2::new(150.0, 200.0));
        state.drag(Vec2::new(120.0, 200.0));
        state.drag(Vec2::new(100.0, 200.0));
        let aim = state.release().unwrap();
        assert_eq!(aim.start, Vec2::new(150.0, 200.0));
        assert_eq!(aim.current, Vec2::new(100.0, 200.0));
        assert!(!state.is_aiming());
    }

    #[test]
    fn release_while_idle_is_a_no_op() {
        let mut state = AimState::Idle;
        assert_eq!(state.release(), None);
        assert_eq!(state, AimState::Idle);
    }

    #[test]
    fn second_press_restarts_the_drag() {
        let mut state = AimState::Idle;
        state.press(Vec2::new(10.0, 10.0));
        state.drag(Vec2::new(50.0, 50.0));
        state.press(Vec2::new(70.0, 70.0));
        assert_eq!(state.active().map(|a| a.current), Some(Vec2::new(70.0, 70.0)));
    }

    #[test]
    fn pulling_back_shoots_forward() {
        let vel = shot_velocity(Vec2::new(150.0, 200.0), Vec2::new(100.0, 200.0), 0.1);
        assert!((vel.x - 5.0).abs() < 1e-5);
        assert_eq!(vel.y, 0.0);
    }

    #[test]
    fn preview_without_bounce() {
        let table = Table::default();
        let path = preview_path(Vec2::new(150.0, 200.0), Vec2::X, &table, 200.0);
        assert_eq!(path, vec![Vec2::new(150.0, 200.0), Vec2::new(350.0, 200.0)]);
    }

    #[test]
    fn preview_bounces_off_right_cushion() {
        let table = Table::default();
        let path = preview_path(Vec2::new(700.0, 200.0), Vec2::X, &table, 200.0);
        assert_eq!(path.len(), 3);
        assert_eq!(path[1], Vec2::new(790.0, 200.0));
        assert_eq!(path[2], Vec2::new(680.0, 200.0));
    }

    #[test]
    fn preview_bounces_off_top_cushion_at_an_angle() {
        let table = Table::default();
        let path = preview_path(Vec2::new(400.0, 50.0), Vec2::new(1.0, -1.0), &table, 200.0);
        assert_eq!(path.len(), 3);
        assert!((path[1].y - 10.0).abs() < 1e-3);
        assert!((path[1].x - 440.0).abs() < 1e-3);
        assert!(path[2].y > path[1].y && path[2].x > path[1].x);
    }

    #[test]
    fn preview_with_zero_direction_is_a_point() {
        let table = Table::default();
        assert_eq!(preview_path(Vec2::new(5.0, 5.0), Vec2::ZERO, &table, 200.0).len(), 1);
    }
}
