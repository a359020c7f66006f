//! Billiards game - drag-to-shoot table with corner pockets.
//!
//! Each frame: clear, felt, pockets, move and draw every ball, resolve
//! contacts, draw the aim overlay. The loop has no end state; it keeps
//! running until the host stops ticking it.

use baize_engine::api::game::GameConfig;
use baize_engine::input::queue::{InputEvent, InputQueue};
use baize_engine::{EngineContext, Game, GameEvent, Surface};
use glam::Vec2;

use crate::config::{BilliardsConfig, ConfigError, Variant};
use crate::render::{draw_aim_overlay, draw_table};
use crate::sim::Simulation;

/// Custom event kinds from the host UI
pub mod events {
    /// Re-rack the current variant.
    pub const RESET: u32 = 1;
    /// Switch variant; `a` selects (0 = classic, 1 = tuned).
    pub const SET_VARIANT: u32 = 2;
}

/// Game event kinds to the host
pub mod game_events {
    /// `a` = ball index, `b`/`c` = where it dropped.
    pub const BALL_POTTED: f32 = 1.0;
    /// `a` = object balls left on the table. Sent every frame.
    pub const BALLS_REMAINING: f32 = 2.0;
    /// `a`/`b` = cue velocity.
    pub const SHOT: f32 = 3.0;
}

pub struct BilliardsGame {
    sim: Simulation,
}

impl BilliardsGame {
    pub fn new() -> Self {
        Self::with_config(BilliardsConfig::classic())
    }

    pub fn with_config(config: BilliardsConfig) -> Self {
        Self { sim: Simulation::new(config) }
    }

    pub fn sim(&self) -> &Simulation {
        &self.sim
    }

    pub fn sim_mut(&mut self) -> &mut Simulation {
        &mut self.sim
    }

    /// Replace the table setup with a JSON config. On error the current
    /// rack keeps running.
    pub fn load_config(&mut self, json: &str) -> Result<(), ConfigError> {
        let config = BilliardsConfig::from_json(json)?;
        self.sim = Simulation::new(config);
        log::info!("Config loaded ({} balls)", self.sim.balls().len());
        Ok(())
    }

    pub fn set_variant(&mut self, variant: Variant) {
        self.sim = Simulation::new(BilliardsConfig::for_variant(variant));
        log::info!("Switched to {:?} table", variant);
    }

    fn handle_input(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::PointerDown { x, y } => self.sim.pointer_down(Vec2::new(x, y)),
                InputEvent::PointerMove { x, y } => self.sim.pointer_move(Vec2::new(x, y)),
                InputEvent::PointerUp { .. } => {
                    if let Some(vel) = self.sim.pointer_up() {
                        ctx.emit_event(GameEvent::new(game_events::SHOT, vel.x, vel.y, 0.0));
                    }
                }
                InputEvent::Custom { kind, .. } if kind == events::RESET => {
                    self.sim.reset();
                    log::info!("Rack reset");
                }
                InputEvent::Custom { kind, a, .. } if kind == events::SET_VARIANT => {
                    match Variant::from_selector(a) {
                        Some(variant) => self.set_variant(variant),
                        None => log::warn!("Unknown variant selector {}", a),
                    }
                }
                InputEvent::Custom { kind, .. } => log::debug!("Ignoring custom event {}", kind),
            }
        }
    }
}

impl Default for BilliardsGame {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for BilliardsGame {
    fn config(&self) -> GameConfig {
        let table = self.sim.table();
        GameConfig {
            world_width: table.width,
            world_height: table.height,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, _ctx: &mut EngineContext) {
        log::info!(
            "Table {}x{}, friction {}, {} balls",
            self.sim.table().width,
            self.sim.table().height,
            self.sim.table().friction,
            self.sim.balls().len()
        );
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        self.handle_input(ctx, input);

        ctx.vectors.clear();
        draw_table(&mut ctx.vectors, self.sim.table());

        let report = self.sim.step_and_draw(&mut ctx.vectors);
        for pot in &report.potted {
            ctx.emit_event(GameEvent::new(game_events::BALL_POTTED, pot.ball as f32, pot.pos.x, pot.pos.y));
        }

        if let Some(aim) = self.sim.aim().active() {
            let config = self.sim.config();
            draw_aim_overlay(
                &mut ctx.vectors,
                aim,
                self.sim.cue_ball(),
                self.sim.table(),
                config.stick,
                config.show_path_preview,
            );
        }

        ctx.emit_event(GameEvent::new(
            game_events::BALLS_REMAINING,
            self.sim.balls_remaining() as f32,
            0.0,
            0.0,
        ));
    }
}
