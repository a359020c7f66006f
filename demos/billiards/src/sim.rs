//! Simulation state for one table: balls, aim, and the per-frame step.

use baize_engine::Surface;
use glam::Vec2;

use crate::aim::{shot_velocity, AimState};
use crate::ball::Ball;
use crate::collision::{resolve_all, Collision};
use crate::config::BilliardsConfig;
use crate::table::Table;

/// A ball that dropped during a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pot {
    pub ball: usize,
    pub pocket: usize,
    pub pos: Vec2,
}

/// What happened during one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    pub potted: Vec<Pot>,
    pub collisions: Vec<Collision>,
}

pub struct Simulation {
    config: BilliardsConfig,
    table: Table,
    balls: Vec<Ball>,
    aim: AimState,
}

impl Simulation {
    pub fn new(config: BilliardsConfig) -> Self {
        let table = Table::from_config(&config.table);
        let balls = config.balls.iter().map(Ball::from_spec).collect();
        Self {
            config,
            table,
            balls,
            aim: AimState::Idle,
        }
    }

    /// Re-rack from the current config and drop any drag in progress.
    pub fn reset(&mut self) {
        self.balls = self.config.balls.iter().map(Ball::from_spec).collect();
        self.aim = AimState::Idle;
    }

    pub fn config(&self) -> &BilliardsConfig {
        &self.config
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn balls_mut(&mut self) -> &mut [Ball] {
        &mut self.balls
    }

    pub fn aim(&self) -> &AimState {
        &self.aim
    }

    pub fn cue_ball(&self) -> Option<&Ball> {
        self.balls.iter().find(|b| b.cue)
    }

    /// Object balls still on the table.
    pub fn balls_remaining(&self) -> usize {
        self.balls.iter().filter(|b| !b.cue && !b.potted).count()
    }

    pub fn all_at_rest(&self) -> bool {
        !self.balls.iter().any(Ball::is_moving)
    }

    // -- Input --

    pub fn pointer_down(&mut self, at: Vec2) {
        self.aim.press(at);
    }

    pub fn pointer_move(&mut self, to: Vec2) {
        self.aim.drag(to);
    }

    /// End the drag and shoot. Returns the cue velocity if a shot was taken.
    ///
    /// The release position itself is not used; the shot follows the last
    /// tracked pointer position. Without a live cue ball the shot is dropped.
    pub fn pointer_up(&mut self) -> Option<Vec2> {
        let aim = self.aim.release()?;
        let scale = self.config.table.shot_scale;

        let cue = match self.balls.iter_mut().find(|b| b.cue && !b.potted) {
            Some(cue) => cue,
            None => {
                log::debug!("shot discarded: no cue ball on the table");
                return None;
            }
        };
        cue.vel = shot_velocity(cue.pos, aim.current, scale);
        log::info!("Shot: cue velocity {:?}", cue.vel);
        Some(cue.vel)
    }

    // -- Frame --

    /// Advance one frame without drawing.
    pub fn step(&mut self) -> StepReport {
        self.advance(|_| {})
    }

    /// Advance one frame, drawing each ball right after it moves.
    pub fn step_and_draw<S: Surface + ?Sized>(&mut self, surface: &mut S) -> StepReport {
        let radius = self.table.ball_radius;
        self.advance(|ball| ball.draw(surface, radius))
    }

    /// Move every ball (calling `on_ball` after each), then resolve contacts.
    fn advance(&mut self, mut on_ball: impl FnMut(&Ball)) -> StepReport {
        let mut report = StepReport::default();

        for (i, ball) in self.balls.iter_mut().enumerate() {
            if let Some(pocket) = ball.update(&self.table) {
                log::info!("Ball {} ({:?}) potted in pocket {}", i, ball.color, pocket);
                report.potted.push(Pot { ball: i, pocket, pos: ball.pos });
            }
            on_ball(ball);
        }

        report.collisions = resolve_all(&mut self.balls, self.table.ball_radius);
        for c in &report.collisions {
            log::debug!("Contact {}-{} closing at {:.3}", c.a, c.b, c.contact.closing_speed);
        }
        report
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(BilliardsConfig::default())
    }
}
