//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering, input capture, or platform dependencies
//! - Side effects leave as declarative signals/events, never happen in-line

pub mod collision;
pub mod menu;
pub mod state;
pub mod tick;

pub use menu::{Command, Signal, Transition, cursor_bounds, handle_command};
pub use state::{Ball, GameEvent, GameState, Mode, Paddle, RngState, Side, Sound};
pub use tick::{CpuPolicy, TickInput, tick};
