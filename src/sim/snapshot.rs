//! Read-only rendering snapshot
//!
//! The presentation layer receives one of these per tick and nothing else:
//! the simulation has no knowledge of pixels, fonts, or colors, and the
//! renderer has no way to influence simulation state.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::{Cloud, GamePhase, RunState};

/// Everything a renderer needs to paint one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    /// Runner bounding box in scene coordinates
    pub player: Rect,
    /// Live obstacle bounding boxes, leftmost-first
    pub obstacles: Vec<Rect>,
    pub clouds: Vec<Cloud>,
    pub score: u32,
    pub best: u32,
    /// Current scroll speed (pixels/s)
    pub speed: f32,
    /// Elapsed run time (seconds)
    pub elapsed: f32,
}

impl Snapshot {
    /// Capture the current state of a run
    pub fn capture(state: &RunState) -> Self {
        Self {
            phase: state.phase,
            player: state.player.bounding_rect(),
            obstacles: state.obstacles.iter().map(|o| o.bounding_rect()).collect(),
            clouds: state.clouds.clone(),
            score: state.score,
            best: state.best,
            speed: state.speed,
            elapsed: state.elapsed,
        }
    }
}
