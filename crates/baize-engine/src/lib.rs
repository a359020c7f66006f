pub mod api;
pub mod core;
pub mod systems;
pub mod bridge;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::types::GameEvent;
pub use core::time::FrameClock;
pub use input::queue::{InputEvent, InputQueue};
pub use bridge::protocol::ProtocolLayout;
pub use systems::surface::{Surface, DrawCommand, DrawList};
pub use systems::vector::{VectorState, VectorVertex, VectorColor};
