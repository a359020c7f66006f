use crate::api::types::GameEvent;
use crate::input::queue::InputQueue;
use crate::systems::vector::VectorState;

/// Engine sizing, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Nominal frame interval in seconds (default: 1/60).
    pub frame_dt: f32,
    /// Drawing surface width in pixels.
    pub world_width: f32,
    /// Drawing surface height in pixels.
    pub world_height: f32,
    /// Vector vertices the host buffer can hold per frame (default: 16384).
    pub max_vector_vertices: usize,
    /// Game events the host buffer can hold per frame (default: 32).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            frame_dt: 1.0 / 60.0,
            world_width: 800.0,
            world_height: 400.0,
            max_vector_vertices: 16384,
            max_events: 32,
        }
    }
}

/// The contract every game fulfills.
pub trait Game {
    /// Engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Set up initial state.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One simulation frame: consume input, advance state, draw into `ctx.vectors`.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);
}

/// Mutable engine state handed to `Game::init` and `Game::update`.
pub struct EngineContext {
    /// Drawing surface for the current frame.
    pub vectors: VectorState,
    /// Events emitted during the current host tick.
    pub events: Vec<GameEvent>,
    /// Index of the frame being simulated (starts at 0).
    pub frame: u64,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::from_config(&GameConfig::default())
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            vectors: VectorState::with_capacity(config.max_vector_vertices),
            events: Vec::with_capacity(config.max_events),
            frame: 0,
        }
    }

    /// Emit a game event to be forwarded to the host.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-tick transient data. Drawing is left alone: games clear
    /// the surface themselves at the start of each frame.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}
