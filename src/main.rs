use anyhow::{Context, Result};
use clap::Parser;
use macroquad::{Window, prelude::*};
use tracing::{info, trace};
use tracing_subscriber::EnvFilter;

use life_editor::{Config, Controls, FrameClock, GameState, input, rendering};

fn window_conf(config: &Config, title: String) -> Result<Conf> {
    let (window_width, window_height) = config.window_px()?;
    Ok(Conf {
        window_title: title,
        window_width,
        window_height,
        window_resizable: false,
        ..Default::default()
    })
}

fn main() -> Result<()> {
    let config = Config::parse()
        .validate()
        .context("invalid configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log)),
        )
        .with_target(true)
        .init();

    let grid = config.grid_size();
    info!(
        width = config.width,
        height = config.height,
        tile_size = config.tile_size,
        columns = grid.width,
        rows = grid.height,
        fps = config.fps,
        update_interval = config.update_interval,
        "starting life editor"
    );

    let state = GameState::new(grid, config.update_interval);
    let conf = window_conf(&config, state.status_line())?;
    Window::from_config(conf, run(config, state));

    info!("window closed");
    Ok(())
}

async fn run(config: Config, mut state: GameState) {
    // Closing the window becomes a Quit command instead of an immediate exit
    prevent_quit();

    let mut rng = config.rng();
    let mut clock = FrameClock::new(config.fps);
    let mut controls = Controls::layout();
    let tile_size = config.tile_px();

    while state.is_running {
        let worked = clock.tick();
        trace!(work_ms = worked.as_secs_f32() * 1000.0, "frame finished");

        state = input::poll_commands(&controls, tile_size)
            .into_iter()
            .fold(state, |s, command| s.apply(command, &mut rng));

        state = state.tick();

        controls = rendering::draw_frame(&state, tile_size, mouse_position());
        next_frame().await;
    }

    info!(
        generation = state.generation(),
        population = state.cells.len(),
        "simulation stopped"
    );
}
