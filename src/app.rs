//! Application facade: fixed-step scheduling and the core's only boundary
//!
//! Frontends talk to the core exclusively through [`App`]: they write
//! movement intents and queue discrete commands, poll [`App::advance`] with
//! the wall clock, and read back a settled snapshot between ticks. The
//! accumulator decouples the 60 Hz logic rate from however long rendering
//! takes; a catch-up cap keeps a pathological stall from snowballing into an
//! unbounded backlog.

use std::collections::VecDeque;

use crate::consts::*;
use crate::settings::Settings;
use crate::sim::menu::{self, Command, Signal};
use crate::sim::state::{GameEvent, GameState, Side};
use crate::sim::tick::{TickInput, tick};

pub struct App {
    state: GameState,
    settings: Settings,
    input: TickInput,
    commands: VecDeque<Command>,
    /// Pending simulation time, in fractional ticks
    accumulator: f32,
    last_time: Option<f64>,
    // Rolling one-second tick-rate window (diagnostics only)
    window_ticks: u32,
    window_elapsed: f32,
    ticks_per_second: u32,
}

impl App {
    pub fn new(seed: u64) -> Self {
        Self::with_settings(seed, Settings::default())
    }

    pub fn with_settings(seed: u64, settings: Settings) -> Self {
        Self {
            state: GameState::new(seed),
            settings,
            input: TickInput::default(),
            commands: VecDeque::with_capacity(COMMAND_QUEUE_CAP),
            accumulator: 0.0,
            last_time: None,
            window_ticks: 0,
            window_elapsed: 0.0,
            ticks_per_second: 0,
        }
    }

    // --- input boundary (write-only for the adapters) ---

    /// Level-triggered movement intent; call on every key transition,
    /// last writer wins.
    pub fn set_move_up(&mut self, side: Side, pressed: bool) {
        match side {
            Side::Left => self.input.left_up = pressed,
            Side::Right => self.input.right_up = pressed,
        }
    }

    pub fn set_move_down(&mut self, side: Side, pressed: bool) {
        match side {
            Side::Left => self.input.left_down = pressed,
            Side::Right => self.input.right_down = pressed,
        }
    }

    /// Queue one edge-triggered command. The adapter must call this once per
    /// physical key press; each queued command is consumed exactly once.
    /// Returns false (and drops the command) if the queue is full.
    pub fn submit_command(&mut self, command: Command) -> bool {
        if self.commands.len() >= COMMAND_QUEUE_CAP {
            log::warn!("command queue full, dropping {command:?}");
            return false;
        }
        self.commands.push_back(command);
        true
    }

    // --- scheduling ---

    /// Poll with the current wall-clock time in seconds and run however many
    /// whole ticks have elapsed since the previous poll. Returns the number
    /// of ticks performed (0..=MAX_SUBSTEPS).
    pub fn advance(&mut self, now: f64) -> u32 {
        let dt = match self.last_time {
            Some(prev) => ((now - prev).max(0.0) as f32).min(MAX_FRAME_DT),
            None => 0.0,
        };
        self.last_time = Some(now);
        self.step_by(dt)
    }

    /// Advance by an already-measured elapsed interval. This is the whole
    /// scheduler: accumulate fractional ticks, drain the whole part up to
    /// the catch-up cap, keep the remainder for the next poll.
    pub fn step_by(&mut self, dt: f32) -> u32 {
        self.accumulator += dt / SIM_DT;

        let mut performed = 0;
        while self.accumulator >= 1.0 && performed < MAX_SUBSTEPS {
            self.step_tick();
            self.accumulator -= 1.0;
            performed += 1;
        }
        if self.accumulator >= 1.0 {
            // Catch-up cap hit; anything still owed is dropped rather than
            // carried into the next poll
            log::warn!(
                "dropping {:.1} ticks of backlog after catch-up cap",
                self.accumulator
            );
            self.accumulator = self.accumulator.fract();
        }

        self.window_elapsed += dt;
        self.window_ticks += performed;
        if self.window_elapsed >= 1.0 {
            self.ticks_per_second = self.window_ticks;
            log::debug!("ticks per second: {}", self.ticks_per_second);
            self.window_elapsed = 0.0;
            self.window_ticks = 0;
        }

        performed
    }

    /// One logic tick: discrete commands reach the state machine first, then
    /// physics advances if the resulting mode is a play mode.
    fn step_tick(&mut self) {
        while let Some(command) = self.commands.pop_front() {
            self.apply_command(command);
        }
        tick(&mut self.state, &self.input);
    }

    fn apply_command(&mut self, command: Command) {
        let transition = menu::handle_command(self.state.mode, self.state.cursor, command);
        if transition.mode != self.state.mode {
            log::debug!("{:?} -> {:?} on {command:?}", self.state.mode, transition.mode);
        }
        self.state.mode = transition.mode;
        self.state.cursor = transition.cursor;
        for signal in transition.signals {
            self.apply_signal(signal);
        }
    }

    fn apply_signal(&mut self, signal: Signal) {
        match signal {
            Signal::PlaySound(sound) => self.state.push_event(GameEvent::PlaySound(sound)),
            Signal::StartMatch => {
                self.state.start_match();
                log::info!("match started ({:?}, seed {})", self.state.mode, self.state.seed);
            }
            Signal::VolumeUp => self.settings.step_volume(1),
            Signal::VolumeDown => self.settings.step_volume(-1),
            Signal::ToggleFullscreen => {
                self.settings.fullscreen = !self.settings.fullscreen;
                log::info!(
                    "fullscreen {} (takes effect after restart)",
                    if self.settings.fullscreen { "on" } else { "off" }
                );
            }
            Signal::Exit => {
                self.state.exit_requested = true;
                log::info!("exit confirmed");
            }
        }
    }

    // --- read-only view boundary (for the renderer) ---

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn exit_requested(&self) -> bool {
        self.state.exit_requested
    }

    /// Ticks completed over the last full one-second window
    pub fn ticks_per_second(&self) -> u32 {
        self.ticks_per_second
    }

    /// Hand the settled events of completed ticks to the audio/shell
    /// collaborators; call between polls, never mid-tick.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }
}
