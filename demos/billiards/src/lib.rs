use wasm_bindgen::prelude::*;

pub mod aim;
pub mod ball;
pub mod collision;
pub mod config;
pub mod game;
pub mod render;
pub mod sim;
pub mod table;

pub use config::{BallColor, BallSpec, BilliardsConfig, ConfigError, StickStyle, TableConfig, Variant};
pub use game::BilliardsGame;
pub use sim::{Simulation, StepReport};

baize_web::export_game!(BilliardsGame, "billiards");

/// Replace the table setup with a JSON config. Returns false (and keeps the
/// current rack) if the config is rejected.
#[wasm_bindgen]
pub fn game_load_config(json: &str) -> bool {
    with_runner(|r| match r.game_mut().load_config(json) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("billiards: config rejected: {}", e);
            false
        }
    })
}
