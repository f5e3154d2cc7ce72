// Domain layer - cells, grid geometry, generation rule, seeding
pub mod domain;

// Application layer - configuration, commands and simulation state
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, CellCoord, GridSize, LiveCells, neighbors, seed};
pub use application::{Command, Config, ConfigError, FrameClock, GameState};
pub use ui::{Button, Controls};
