//! Pong Duel entry point
//!
//! Initializes logging and settings, then drives the core headlessly: a
//! short self-playing computer match paced against the wall clock. A
//! windowed frontend would run the same loop, feeding key transitions into
//! the [`App`] boundary instead of scripted commands.

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use pong_duel::consts::SIM_DT;
use pong_duel::sim::Command;
use pong_duel::{App, Settings};

const SETTINGS_FILE: &str = "pong-duel-settings.json";

fn main() {
    env_logger::init();

    let settings_path = PathBuf::from(SETTINGS_FILE);
    let settings = Settings::load(&settings_path);

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0);
    log::info!("session seed {seed}");

    let mut app = App::with_settings(seed, settings);

    // Select "Player vs Computer" on the title screen and start the match
    app.submit_command(Command::Down);
    app.submit_command(Command::Confirm);

    let start = Instant::now();
    while start.elapsed() < Duration::from_secs(10) {
        app.advance(start.elapsed().as_secs_f64());
        for event in app.drain_events() {
            log::debug!("event: {event:?}");
        }
        if app.exit_requested() {
            break;
        }
        thread::sleep(Duration::from_secs_f32(SIM_DT / 2.0));
    }

    let state = app.state();
    log::info!(
        "demo over after {} ticks: {} - {} ({} ticks/s)",
        state.time_ticks,
        state.ball.left_score,
        state.ball.right_score,
        app.ticks_per_second(),
    );

    if let Err(error) = app.settings().save(&settings_path) {
        log::warn!("failed to save settings: {error}");
    }
}
