//! Fixed timestep simulation tick
//!
//! Advances entities by exactly one logic step. The tick runs only in the
//! play modes; every other mode leaves the entities untouched. Menu
//! navigation happens outside the tick, in [`crate::sim::menu`].

use serde::{Deserialize, Serialize};

use crate::sim::collision;
use crate::sim::state::{Ball, GameEvent, GameState, Mode, Paddle, Side};

/// Level-triggered movement intents for one tick, last-writer-wins.
/// Populated by the input adapter, read-only to the simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
}

/// Computer-opponent tuning for the non-human paddle in PvC matches.
///
/// Tuning parameters are data rather than constants so difficulty can be
/// adjusted without touching the tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CpuPolicy {
    /// Half-height of the band around the paddle center inside which the
    /// opponent holds still instead of chasing the ball
    pub dead_zone: f32,
}

impl Default for CpuPolicy {
    fn default() -> Self {
        Self { dead_zone: 12.0 }
    }
}

impl CpuPolicy {
    /// Tracking policy: move toward the ball's y unless it already sits
    /// inside the dead zone.
    pub fn intents(&self, paddle: &Paddle, ball: &Ball) -> (bool, bool) {
        let center = paddle.center_y();
        if ball.pos.y < center - self.dead_zone {
            (true, false)
        } else if ball.pos.y > center + self.dead_zone {
            (false, true)
        } else {
            (false, false)
        }
    }
}

/// Advance the game state by one fixed timestep.
///
/// Order per tick: paddles move from intents, the ball advances, walls and
/// paddles resolve, then goals are scored. Collision events land in the
/// state's outbox for the audio collaborator.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if !state.mode.is_play() {
        return;
    }
    state.time_ticks += 1;

    state
        .left_paddle
        .apply_intent(input.left_up, input.left_down);
    let (right_up, right_down) = if state.mode == Mode::PvCPlay {
        state.cpu.intents(&state.right_paddle, &state.ball)
    } else {
        (input.right_up, input.right_down)
    };
    state.right_paddle.apply_intent(right_up, right_down);

    state.ball.pos += state.ball.vel;

    if collision::resolve_walls(&mut state.ball) {
        state.push_event(GameEvent::WallHit);
    }
    if collision::resolve_paddle(&mut state.ball, &state.left_paddle, Side::Left) {
        state.push_event(GameEvent::PaddleHit(Side::Left));
    } else if collision::resolve_paddle(&mut state.ball, &state.right_paddle, Side::Right) {
        state.push_event(GameEvent::PaddleHit(Side::Right));
    }

    if let Some(scorer) = collision::check_goal(&state.ball) {
        state.award_point(scorer);
    }
}
