//! Per-frame simulation tick
//!
//! One tick is an atomic unit of work: drain the intents queued since the
//! last tick, integrate physics, run the obstacle pipeline, test
//! collisions, update score and speed, and hand back a snapshot for the
//! renderer. Nothing advances outside this function.

use super::collision::first_hit;
use super::difficulty::scroll_speed;
use super::snapshot::Snapshot;
use super::state::{GamePhase, Obstacle, RunState};
use crate::consts::*;

/// A normalized input event, consumed only at tick boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Begin a run from Idle, or restart after GameOver
    StartOrRestart,
    /// Launch the runner off the ground
    Jump,
}

/// Advance the simulation by one tick of `dt` seconds
///
/// `intents` is whatever the input adapter queued since the previous tick,
/// in arrival order. Intents are tolerated in every phase: outside a run
/// both map to a (re)start, and during a run both map to a jump - the
/// dual mapping the two-button input scheme implies.
///
/// `dt` is clamped into `[0, MAX_TICK_DT]`, so a stalled or misbehaving
/// host clock costs at most one truncated tick instead of a physics spike.
/// The tick that starts a run integrates with `dt = 0`: the gap between
/// pressing start and the previous frame is not part of the run.
pub fn tick(state: &mut RunState, intents: &[Intent], dt: f32) -> Snapshot {
    let mut dt = if dt.is_finite() {
        dt.clamp(0.0, MAX_TICK_DT)
    } else {
        0.0
    };

    for intent in intents {
        match state.phase {
            GamePhase::Idle | GamePhase::GameOver => {
                start_run(state);
                dt = 0.0;
            }
            GamePhase::Running => match intent {
                Intent::Jump | Intent::StartOrRestart => state.player.jump(),
            },
        }
    }

    if state.phase == GamePhase::Running {
        advance_run(state, dt);
    }

    Snapshot::capture(state)
}

/// Transition into Running with a fully reset run
fn start_run(state: &mut RunState) {
    state.reset();
    state.phase = GamePhase::Running;
    log::info!("run started (seed {})", state.seed);
}

/// Commit the best score and end the run
fn end_run(state: &mut RunState) {
    state.best = state.best.max(state.score);
    state.phase = GamePhase::GameOver;
    log::info!("game over: score {}, best {}", state.score, state.best);
}

/// One Running tick: physics, pipeline, collision, scoring, difficulty
fn advance_run(state: &mut RunState, dt: f32) {
    state.elapsed += dt;

    state.player.integrate(dt);

    // Obstacle pipeline: advance all live obstacles first, then at most
    // one spawn per tick (single threshold check, not a loop).
    for obs in &mut state.obstacles {
        obs.x -= state.speed * dt;
    }

    state.spawn_timer += dt;
    if state.spawn_timer > state.next_spawn_delay {
        let height = state.random_obstacle_height();
        state.obstacles.push(Obstacle {
            x: WORLD_WIDTH,
            width: OBSTACLE_WIDTH,
            height,
            spawned_at: state.elapsed,
        });
        state.spawn_timer = 0.0;
        state.next_spawn_delay = state.random_spawn_delay();
    }

    advance_clouds(state, dt);

    // Collision before retirement: an obstacle that is hit on the tick it
    // would leave the screen ends the run and must not score.
    let player_rect = state.player.bounding_rect();
    if first_hit(&player_rect, state.obstacles.iter().map(|o| o.bounding_rect())).is_some() {
        end_run(state);
        return;
    }

    state.speed = scroll_speed(state.elapsed);

    let before = state.obstacles.len();
    state.obstacles.retain(|obs| !obs.off_screen());
    state.score += (before - state.obstacles.len()) as u32;
}

/// Drift the decorative cloud layer and wrap it around the scene
fn advance_clouds(state: &mut RunState, dt: f32) {
    let drift = state.speed * CLOUD_DRIFT_FACTOR * dt;
    for i in 0..state.clouds.len() {
        state.clouds[i].x -= drift;
        if state.clouds[i].x + state.clouds[i].size * 1.5 < 0.0 {
            state.respawn_cloud(i);
        }
    }
}
