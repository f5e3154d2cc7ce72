mod command;
mod config;
mod frame_clock;
mod game_state;

pub use command::Command;
pub use config::{Config, ConfigError};
pub use frame_clock::FrameClock;
pub use game_state::GameState;
