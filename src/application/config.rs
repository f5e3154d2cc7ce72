use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use thiserror::Error;

use crate::domain::GridSize;

pub const DEFAULT_WINDOW_WIDTH: u32 = 1200;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 800;
pub const DEFAULT_TILE_SIZE: u32 = 20;
pub const DEFAULT_FPS: u32 = 60;
pub const DEFAULT_UPDATE_INTERVAL: u32 = 60;

/// Command-line options for the editor window and simulation cadence.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Conway's Game of Life editor", long_about = None)]
pub struct Config {
    /// Window width in pixels.
    #[arg(long, value_name = "PIXELS", default_value_t = DEFAULT_WINDOW_WIDTH)]
    pub width: u32,
    /// Window height in pixels.
    #[arg(long, value_name = "PIXELS", default_value_t = DEFAULT_WINDOW_HEIGHT)]
    pub height: u32,
    /// Edge length of one grid tile in pixels.
    #[arg(long = "tile-size", value_name = "PIXELS", default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: u32,
    /// Frames per second the main loop is held to.
    #[arg(long, value_name = "FRAMES", default_value_t = DEFAULT_FPS)]
    pub fps: u32,
    /// Frames between generations while playing.
    #[arg(long = "update-interval", value_name = "FRAMES", default_value_t = DEFAULT_UPDATE_INTERVAL)]
    pub update_interval: u32,
    /// Seed for the random generator used by reseeding (random when omitted).
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
    /// Log filter used when RUST_LOG is unset.
    #[arg(long, value_name = "FILTER", default_value = "info")]
    pub log: String,
}

/// Rejected startup configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tile size must be at least 1 pixel")]
    ZeroTileSize,

    #[error("window {width}x{height} is smaller than one {tile_size}px tile")]
    WindowSmallerThanTile {
        width: u32,
        height: u32,
        tile_size: u32,
    },

    #[error("window {width}x{height} exceeds the largest supported window")]
    WindowTooLarge { width: u32, height: u32 },

    #[error("frame rate must be at least 1")]
    ZeroFps,

    #[error("update interval must be at least 1 frame")]
    ZeroUpdateInterval,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
            tile_size: DEFAULT_TILE_SIZE,
            fps: DEFAULT_FPS,
            update_interval: DEFAULT_UPDATE_INTERVAL,
            seed: None,
            log: "info".to_owned(),
        }
    }
}

impl Config {
    /// Check the geometry and cadence, returning the config unchanged when usable
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.tile_size == 0 {
            return Err(ConfigError::ZeroTileSize);
        }
        if self.width < self.tile_size || self.height < self.tile_size {
            return Err(ConfigError::WindowSmallerThanTile {
                width: self.width,
                height: self.height,
                tile_size: self.tile_size,
            });
        }
        if i32::try_from(self.width).is_err() || i32::try_from(self.height).is_err() {
            return Err(ConfigError::WindowTooLarge {
                width: self.width,
                height: self.height,
            });
        }
        if self.fps == 0 {
            return Err(ConfigError::ZeroFps);
        }
        if self.update_interval == 0 {
            return Err(ConfigError::ZeroUpdateInterval);
        }
        Ok(self)
    }

    /// Window size in the signed pixels the windowing layer expects
    pub fn window_px(&self) -> Result<(i32, i32), ConfigError> {
        match (i32::try_from(self.width), i32::try_from(self.height)) {
            (Ok(width), Ok(height)) => Ok((width, height)),
            _ => Err(ConfigError::WindowTooLarge {
                width: self.width,
                height: self.height,
            }),
        }
    }

    pub const fn grid_size(&self) -> GridSize {
        GridSize::from_window(self.width, self.height, self.tile_size)
    }

    pub fn tile_px(&self) -> f32 {
        self.tile_size as f32
    }

    /// Random generator for reseeding; reproducible when `--seed` is given
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
