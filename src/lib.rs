//! Pong Duel - two-player Pong with a menu-driven state machine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, menu state machine)
//! - `app`: Fixed-timestep scheduler and the input/render boundary
//! - `settings`: Persisted preferences (volume, fullscreen)
//!
//! Rendering, raw key capture, and audio playback live in frontends that
//! drive [`app::App`] and drain its events; the crate itself never touches a
//! window or a sound device.

pub mod app;
pub mod settings;
pub mod sim;

pub use app::App;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 logic ticks per second)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum catch-up ticks per poll to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest frame delta fed into the accumulator; stalls beyond this are
    /// treated as a quarter-second hitch
    pub const MAX_FRAME_DT: f32 = 0.25;

    /// Playfield dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 450.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Per-tick paddle displacement; must stay below PADDLE_HEIGHT or the
    /// ball could tunnel past a moving paddle
    pub const PADDLE_SPEED: f32 = 10.0;
    /// Gap between a paddle's outer face and its side of the playfield
    pub const PADDLE_MARGIN: f32 = 10.0;

    /// Ball defaults (square, center-anchored)
    pub const BALL_HALF_SIZE: f32 = 8.0;
    /// Horizontal speed in pixels per tick; the magnitude never changes
    pub const BALL_SPEED_X: f32 = 3.0;
    /// Largest vertical speed a paddle hit can impart
    pub const BALL_MAX_SPEED_Y: f32 = 4.0;

    /// Volume bar runs 0..=MAX_VOLUME_SCALE
    pub const MAX_VOLUME_SCALE: u8 = 5;

    /// Commands queued beyond this between ticks are rejected
    pub const COMMAND_QUEUE_CAP: usize = 16;

    const _: () = assert!(
        PADDLE_SPEED <= PADDLE_HEIGHT,
        "per-tick paddle displacement must not exceed paddle height"
    );
    const _: () = assert!(
        BALL_SPEED_X <= PADDLE_WIDTH,
        "per-tick horizontal ball displacement must not exceed paddle width"
    );
}
