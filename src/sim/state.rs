//! Game state and core simulation types
//!
//! Everything a frontend may read lives here; mutation happens only through
//! the tick and the menu transition function.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::tick::CpuPolicy;

/// The authoritative mode of the whole process. Exactly one is active at any
/// instant; transitions happen only through [`crate::sim::menu::handle_command`]
/// or the match-start/exit signals it emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Title screen with the four main options
    Title,
    /// Settings screen (fullscreen, sound, controls, back)
    Settings,
    /// Static key-binding listing, single "Back" line
    Controls,
    /// "Are you sure you want to exit?" prompt
    ConfirmExit,
    /// Two-human match in progress
    PvPPlay,
    /// Human-versus-computer match in progress
    PvCPlay,
    /// Match frozen, overlay shown
    Pause,
    /// In-game menu (back to game / go to menu)
    Menu,
}

impl Mode {
    /// Physics advances only in the two play modes
    pub fn is_play(self) -> bool {
        matches!(self, Mode::PvPPlay | Mode::PvCPlay)
    }
}

/// Which side of the field a paddle (or score) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Sound-effect identifiers for the audio collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sound {
    /// Played when a match is confirmed from a menu
    MenuConfirm,
    /// Played when backing out toward the title / exit prompt
    MenuBack,
}

/// Declarative happenings consumed by external collaborators (audio,
/// window shell). The core never performs these itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PlaySound(Sound),
    WallHit,
    PaddleHit(Side),
    Scored(Side),
    MatchStarted,
}

/// A player paddle: fixed x, mutable y, fixed per-tick speed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        let x = match side {
            Side::Left => PADDLE_MARGIN,
            Side::Right => SCREEN_WIDTH - PADDLE_MARGIN - PADDLE_WIDTH,
        };
        Self {
            x,
            y: (SCREEN_HEIGHT - PADDLE_HEIGHT) / 2.0,
            speed: PADDLE_SPEED,
        }
    }

    /// Move one tick's worth in response to level-triggered intents.
    ///
    /// A step happens only if the whole displacement fits inside the
    /// playfield, so |Δy| is always exactly 0 or `speed`. Both intents held
    /// at once cancel out.
    pub fn apply_intent(&mut self, up: bool, down: bool) {
        if up && !down && self.y - self.speed >= 0.0 {
            self.y -= self.speed;
        }
        if down && !up && self.y + PADDLE_HEIGHT + self.speed <= SCREEN_HEIGHT {
            self.y += self.speed;
        }
    }

    pub fn reset_center(&mut self) {
        self.y = (SCREEN_HEIGHT - PADDLE_HEIGHT) / 2.0;
    }

    pub fn center_y(&self) -> f32 {
        self.y + PADDLE_HEIGHT / 2.0
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + PADDLE_HEIGHT
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + PADDLE_WIDTH
    }
}

/// The ball. Owns the match scores, as the scoreboard is redrawn from the
/// ball each frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    /// Pixels per tick; components are kept integral so repeated addition
    /// cannot drift
    pub vel: Vec2,
    pub left_score: u32,
    pub right_score: u32,
}

impl Ball {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0),
            vel: Vec2::ZERO,
            left_score: 0,
            right_score: 0,
        }
    }

    /// Re-serve from center toward `receiver` with unchanged magnitude
    pub fn serve_toward(&mut self, receiver: Side) {
        self.pos = Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0);
        let dx = match receiver {
            Side::Left => -BALL_SPEED_X,
            Side::Right => BALL_SPEED_X,
        };
        self.vel = Vec2::new(dx, 0.0);
    }

    pub fn left(&self) -> f32 {
        self.pos.x - BALL_HALF_SIZE
    }

    pub fn right(&self) -> f32 {
        self.pos.x + BALL_HALF_SIZE
    }

    pub fn top(&self) -> f32 {
        self.pos.y - BALL_HALF_SIZE
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + BALL_HALF_SIZE
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// RNG state wrapper for serialization; the stream advances once per match
/// so consecutive matches from the same process draw fresh serve sides.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::new(self.seed, self.stream)
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed for reproducibility
    pub seed: u64,
    /// RNG state (serve-side draws)
    pub rng_state: RngState,
    /// Active mode
    pub mode: Mode,
    /// Highlighted menu line for the active mode
    pub cursor: u8,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub ball: Ball,
    /// Computer-opponent tuning for PvC matches
    pub cpu: CpuPolicy,
    /// Set once a confirmed quit has been requested; the frontend observes
    /// this and terminates cleanly with code 0
    pub exit_requested: bool,
    /// Outbox drained by the frontend once per completed tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh state at the title screen
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng_state: RngState::new(seed),
            mode: Mode::Title,
            cursor: 0,
            time_ticks: 0,
            left_paddle: Paddle::new(Side::Left),
            right_paddle: Paddle::new(Side::Right),
            ball: Ball::new(),
            cpu: CpuPolicy::default(),
            exit_requested: false,
            events: Vec::new(),
        }
    }

    /// Begin a fresh match: zero the scores, center the entities, and serve
    /// toward a seed-determined side.
    pub fn start_match(&mut self) {
        self.ball.left_score = 0;
        self.ball.right_score = 0;
        self.left_paddle.reset_center();
        self.right_paddle.reset_center();

        let mut rng = self.rng_state.to_rng();
        self.rng_state.stream = self.rng_state.stream.wrapping_add(1);
        let receiver = if rng.random_bool(0.5) {
            Side::Left
        } else {
            Side::Right
        };
        self.ball.serve_toward(receiver);

        self.time_ticks = 0;
        self.push_event(GameEvent::MatchStarted);
    }

    /// Award a point to `scorer`, re-serve toward the conceding side, and
    /// re-center both paddles.
    pub fn award_point(&mut self, scorer: Side) {
        match scorer {
            Side::Left => self.ball.left_score += 1,
            Side::Right => self.ball.right_score += 1,
        }
        self.left_paddle.reset_center();
        self.right_paddle.reset_center();
        self.ball.serve_toward(scorer.opposite());
        self.push_event(GameEvent::Scored(scorer));
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Hand the accumulated events to a collaborator
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
