use baize_engine::bridge::protocol::HEADER_FLOATS;
use baize_engine::{
    EngineContext, FrameClock, Game, GameConfig, InputEvent, InputQueue, ProtocolLayout,
};

/// Generic game runner that wires up the frame loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]` (see [`export_game!`](crate::export_game)),
/// because wasm-bindgen cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    clock: FrameClock,
    config: GameConfig,
    layout: ProtocolLayout,
    header: [f32; HEADER_FLOATS],
    initialized: bool,
    overflow_warned: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        Self {
            ctx: EngineContext::from_config(&config),
            input: InputQueue::new(),
            clock: FrameClock::new(config.frame_dt),
            layout: ProtocolLayout::from_config(&config),
            header: [0.0; HEADER_FLOATS],
            config,
            game,
            initialized: false,
            overflow_warned: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
        self.refresh_header();
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Advance by `host_dt` seconds of wall time.
    ///
    /// Pending input goes to the first frame run by this tick. A tick too
    /// short to complete a frame keeps the input queued for the next one.
    pub fn tick(&mut self, host_dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();

        let steps = self.clock.advance(host_dt);
        let first_frame = self.clock.frames() - steps as u64;
        for i in 0..steps {
            self.ctx.frame = first_frame + i as u64;
            self.game.update(&mut self.ctx, &self.input);
            self.input.clear();
        }

        let vertices = self.ctx.vectors.vertex_count();
        if vertices > self.layout.max_vector_vertices && !self.overflow_warned {
            log::warn!(
                "vector output ({} vertices) exceeds host buffer capacity ({}); truncating",
                vertices,
                self.layout.max_vector_vertices
            );
            self.overflow_warned = true;
        }
        self.refresh_header();
    }

    fn refresh_header(&mut self) {
        self.header = self.layout.header(
            &self.config,
            self.clock.frames(),
            self.ctx.vectors.vertex_count(),
            self.ctx.events.len(),
        );
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn pending_input(&self) -> usize {
        self.input.len()
    }

    // ---- Pointer accessors for host-side reads ----

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn vector_vertices_ptr(&self) -> *const f32 {
        self.ctx.vectors.buffer_ptr()
    }

    pub fn vector_vertex_count(&self) -> u32 {
        self.ctx.vectors.vertex_count().min(self.layout.max_vector_vertices) as u32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len().min(self.layout.max_events) as u32
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    // ---- Capacity accessors ----

    pub fn max_vector_vertices(&self) -> u32 {
        self.layout.max_vector_vertices as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use baize_engine::bridge::protocol::HEADER_FRAME_COUNTER;
    use baize_engine::{GameEvent, Surface, VectorColor};
    use glam::Vec2;

    /// Records what each frame saw.
    #[derive(Default)]
    struct Probe {
        frames: u32,
        inputs_seen: Vec<usize>,
    }

    impl Game for Probe {
        fn init(&mut self, _ctx: &mut EngineContext) {}

        fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
            self.frames += 1;
            self.inputs_seen.push(input.len());
            ctx.vectors.clear();
            ctx.vectors.fill_rect(Vec2::ZERO, 10.0, 10.0, VectorColor::WHITE);
            ctx.emit_event(GameEvent::new(1.0, ctx.frame as f32, 0.0, 0.0));
        }
    }

    #[test]
    fn tick_before_init_does_nothing() {
        let mut runner = GameRunner::new(Probe::default());
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.game().frames, 0);
    }

    #[test]
    fn input_goes_to_first_frame_only() {
        let mut runner = GameRunner::new(Probe::default());
        runner.init();
        runner.push_input(InputEvent::PointerDown { x: 1.0, y: 1.0 });
        runner.push_input(InputEvent::PointerUp { x: 1.0, y: 1.0 });
        runner.tick(3.0 / 60.0 + 0.001);
        assert_eq!(runner.game().inputs_seen, vec![2, 0, 0]);
        assert_eq!(runner.pending_input(), 0);
    }

    #[test]
    fn short_tick_keeps_input_queued() {
        let mut runner = GameRunner::new(Probe::default());
        runner.init();
        runner.push_input(InputEvent::PointerMove { x: 3.0, y: 4.0 });
        runner.tick(0.001);
        assert_eq!(runner.game().frames, 0);
        assert_eq!(runner.pending_input(), 1);

        runner.tick(1.0 / 60.0);
        assert_eq!(runner.game().inputs_seen, vec![1]);
    }

    #[test]
    fn events_and_header_reflect_last_tick() {
        let mut runner = GameRunner::new(Probe::default());
        runner.init();
        runner.tick(2.0 / 60.0 + 0.001);
        assert_eq!(runner.game_events_len(), 2);
        assert_eq!(runner.context().events[1].a, 1.0);
        assert_eq!(runner.vector_vertex_count(), 6);
        assert_eq!(runner.header[HEADER_FRAME_COUNTER], 2.0);

        runner.tick(1.0 / 60.0);
        assert_eq!(runner.game_events_len(), 1);
    }
}
