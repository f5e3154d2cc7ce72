use rand::Rng;
use tracing::{debug, info};

use super::Command;
use crate::domain::{GridSize, LiveCells, seed};

/// Reseed draws `k * grid width` cells with `k` in this range
const RESEED_FACTOR: std::ops::Range<usize> = 4..10;

/// GameState orchestrates the simulation.
/// Commands and the per-frame tick are the only ways it changes.
#[derive(Clone, Debug)]
pub struct GameState {
    pub cells: LiveCells,
    pub grid: GridSize,
    /// Main loop keeps iterating while set
    pub is_running: bool,
    pub is_playing: bool,
    /// Frames since the last generation, in `0..update_interval`
    pub frame: u32,
    /// Frames spent playing since the last clear
    pub ticks: u64,
    pub update_interval: u32,
}

impl GameState {
    pub fn new(grid: GridSize, update_interval: u32) -> Self {
        Self {
            cells: LiveCells::new(),
            grid,
            is_running: true,
            is_playing: false,
            frame: 0,
            ticks: 0,
            update_interval: update_interval.max(1),
        }
    }

    /// Start from a given population (builder pattern)
    pub fn with_cells(mut self, cells: LiveCells) -> Self {
        self.cells = cells;
        self
    }

    pub fn with_playing(mut self, playing: bool) -> Self {
        self.is_playing = playing;
        self
    }

    /// Generations completed, as shown to the user
    pub fn generation(&self) -> u64 {
        self.ticks / u64::from(self.update_interval)
    }

    pub fn status_line(&self) -> String {
        let label = if self.is_playing { "Playing" } else { "Paused" };
        format!("{label} - Generation: {}", self.generation())
    }

    fn set_playing(mut self, playing: bool) -> Self {
        if self.is_playing != playing {
            info!(playing, generation = self.generation(), "playback changed");
        }
        self.is_playing = playing;
        self
    }

    pub fn clear(mut self) -> Self {
        self.cells = LiveCells::new();
        self.frame = 0;
        self.ticks = 0;
        self.set_playing(false)
    }

    /// Cells requested by one reseed: `k * grid width` for a random `k` in `4..10`
    pub fn reseed_count<R: Rng>(grid: GridSize, rng: &mut R) -> usize {
        rng.random_range(RESEED_FACTOR) * grid.width.max(0) as usize
    }

    pub fn reseed<R: Rng>(mut self, rng: &mut R) -> Self {
        let count = Self::reseed_count(self.grid, rng);
        self.cells = seed(count, self.grid, rng);
        debug!(requested = count, population = self.cells.len(), "reseeded grid");
        self
    }

    /// Apply one command. Never fails: commands that do not fit are ignored.
    pub fn apply<R: Rng>(mut self, command: Command, rng: &mut R) -> Self {
        debug!(?command, "applying command");
        match command {
            Command::Play => self.set_playing(true),
            Command::Pause => self.set_playing(false),
            Command::TogglePlaying => {
                let playing = !self.is_playing;
                self.set_playing(playing)
            }
            Command::Clear => self.clear(),
            Command::ToggleCell(cell) => {
                match self.cells.toggle(cell, self.grid) {
                    Some(state) => debug!(?cell, ?state, "toggled cell"),
                    None => debug!(?cell, "click outside grid ignored"),
                }
                self
            }
            Command::Reseed => self.reseed(rng),
            Command::Quit => {
                info!(generation = self.generation(), "quit requested");
                self.is_running = false;
                self
            }
        }
    }

    /// Advance one frame; evolves the grid every `update_interval` frames while playing
    pub fn tick(mut self) -> Self {
        if !self.is_playing {
            return self;
        }

        self.frame += 1;
        self.ticks += 1;

        if self.frame >= self.update_interval {
            self.frame = 0;
            self.cells = self.cells.evolve(self.grid);
            debug!(
                generation = self.generation(),
                population = self.cells.len(),
                "advanced generation"
            );
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CellCoord;
    use rand::{SeedableRng, rngs::StdRng};

    const GRID: GridSize = GridSize::new(60, 40);

    fn rng() -> StdRng {
        StdRng::seed_from_u64(2024)
    }

    fn blinker() -> LiveCells {
        [(1, 0), (1, 1), (1, 2)].into_iter().map(CellCoord::from).collect()
    }

    fn run_frames(mut state: GameState, frames: u32) -> GameState {
        for _ in 0..frames {
            state = state.tick();
        }
        state
    }

    #[test]
    fn test_new_state_is_paused_and_empty() {
        let state = GameState::new(GRID, 60);
        assert!(state.is_running);
        assert!(!state.is_playing);
        assert!(state.cells.is_empty());
        assert_eq!(state.generation(), 0);
        assert_eq!(state.status_line(), "Paused - Generation: 0");
    }

    #[test]
    fn test_play_pause_and_toggle() {
        let mut rng = rng();
        let state = GameState::new(GRID, 60).apply(Command::Play, &mut rng);
        assert!(state.is_playing);
        let state = state.apply(Command::Pause, &mut rng);
        assert!(!state.is_playing);
        let state = state.apply(Command::TogglePlaying, &mut rng);
        assert!(state.is_playing);
        let state = state.apply(Command::TogglePlaying, &mut rng);
        assert!(!state.is_playing);
    }

    #[test]
    fn test_paused_tick_does_nothing() {
        let state = run_frames(GameState::new(GRID, 60).with_cells(blinker()), 500);
        assert_eq!(state.cells, blinker());
        assert_eq!(state.frame, 0);
        assert_eq!(state.ticks, 0);
    }

    #[test]
    fn test_one_generation_per_interval() {
        let state = GameState::new(GRID, 60).with_cells(blinker()).with_playing(true);

        let state = run_frames(state, 59);
        assert_eq!(state.cells, blinker());
        assert_eq!(state.generation(), 0);
        assert_eq!(state.frame, 59);

        let state = run_frames(state, 1);
        assert_ne!(state.cells, blinker());
        assert_eq!(state.generation(), 1);
        assert_eq!(state.frame, 0);
        assert_eq!(state.status_line(), "Playing - Generation: 1");

        let state = run_frames(state, 60);
        assert_eq!(state.cells, blinker());
        assert_eq!(state.generation(), 2);
    }

    #[test]
    fn test_generation_counts_partial_frames() {
        let state = run_frames(GameState::new(GRID, 10).with_playing(true), 25);
        assert_eq!(state.ticks, 25);
        assert_eq!(state.frame, 5);
        assert_eq!(state.generation(), 2);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut rng = rng();
        let state = GameState::new(GRID, 60)
            .with_cells(blinker())
            .with_playing(true);
        let state = run_frames(state, 130).apply(Command::Clear, &mut rng);

        assert!(state.cells.is_empty());
        assert!(!state.is_playing);
        assert_eq!(state.frame, 0);
        assert_eq!(state.ticks, 0);
        assert_eq!(state.generation(), 0);
    }

    #[test]
    fn test_clear_on_fresh_state_is_noop() {
        let state = GameState::new(GRID, 60).apply(Command::Clear, &mut rng());
        assert!(state.cells.is_empty());
        assert_eq!(state.ticks, 0);
    }

    #[test]
    fn test_toggle_cell_works_while_playing() {
        let mut rng = rng();
        let cell = CellCoord::new(10, 10);
        let state = GameState::new(GRID, 60)
            .with_playing(true)
            .apply(Command::ToggleCell(cell), &mut rng);
        assert!(state.cells.contains(cell));
        assert!(state.is_playing);

        let state = state.apply(Command::ToggleCell(cell), &mut rng);
        assert!(state.cells.is_empty());
    }

    #[test]
    fn test_toggle_outside_grid_is_ignored() {
        let mut rng = rng();
        let state = GameState::new(GRID, 60)
            .apply(Command::ToggleCell(CellCoord::new(60, 5)), &mut rng)
            .apply(Command::ToggleCell(CellCoord::new(3, -1)), &mut rng);
        assert!(state.cells.is_empty());
    }

    #[test]
    fn test_reseed_population_within_bounds() {
        let mut rng = rng();
        let state = GameState::new(GRID, 60)
            .with_playing(true)
            .apply(Command::Reseed, &mut rng);

        assert!(!state.cells.is_empty());
        assert!(state.cells.len() < 10 * 60);
        assert!(state.cells.iter().all(|c| GRID.contains(c)));
        assert!(state.is_playing);
    }

    #[test]
    fn test_reseed_count_is_four_to_nine_grid_widths() {
        let mut rng = rng();
        let mut factors = std::collections::HashSet::new();
        for _ in 0..1_000 {
            let count = GameState::reseed_count(GRID, &mut rng);
            assert_eq!(count % 60, 0, "{count} is not a multiple of the width");
            assert!((4 * 60..10 * 60).contains(&count), "{count} out of range");
            factors.insert(count / 60);
        }
        assert_eq!(factors, (4..10).collect::<std::collections::HashSet<usize>>());
    }

    #[test]
    fn test_reseed_population_tracks_requested_count() {
        // Wide grid so duplicate draws stay rare
        let grid = GridSize::new(2_000, 2_000);
        let state = GameState::new(grid, 60).apply(Command::Reseed, &mut rng());
        assert!(state.cells.len() >= 3 * 2_000, "{} cells", state.cells.len());
        assert!(state.cells.len() < 10 * 2_000);
    }

    #[test]
    fn test_reseed_keeps_counters() {
        let mut rng = rng();
        let state = run_frames(GameState::new(GRID, 60).with_playing(true), 75)
            .apply(Command::Reseed, &mut rng);
        assert_eq!(state.ticks, 75);
        assert_eq!(state.frame, 15);
    }

    #[test]
    fn test_quit_stops_running() {
        let state = GameState::new(GRID, 60).apply(Command::Quit, &mut rng());
        assert!(!state.is_running);
    }
}
