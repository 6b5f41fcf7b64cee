//! Dino Dash - an endless-runner arcade game for the terminal
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, game state)
//! - `render`: Terminal half-block rendering
//! - `input`: Key events normalized into tick-boundary intents
//! - `platform`: Monotonic clock for the frame driver
//! - `highscores`: Session score board

pub mod highscores;
pub mod input;
pub mod platform;
pub mod render;
pub mod sim;

pub use highscores::ScoreBoard;

/// Game configuration constants
///
/// Distances are in world pixels, times in seconds, speeds in pixels/second.
/// The world is a fixed 800x240 scene; the renderer scales it to the terminal.
pub mod consts {
    /// Virtual scene width
    pub const WORLD_WIDTH: f32 = 800.0;
    /// Virtual scene height
    pub const WORLD_HEIGHT: f32 = 240.0;
    /// Ground line (top of the dirt strip)
    pub const GROUND_Y: f32 = 180.0;

    /// Player defaults - the runner never moves horizontally
    pub const PLAYER_X: f32 = 80.0;
    pub const PLAYER_WIDTH: f32 = 30.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;

    /// Downward acceleration (pixels/s^2)
    pub const GRAVITY: f32 = 1000.0;
    /// Vertical velocity applied by a grounded jump (negative = up)
    pub const JUMP_IMPULSE: f32 = -450.0;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 15.0;
    pub const OBSTACLE_MIN_HEIGHT: f32 = 30.0;
    pub const OBSTACLE_MAX_HEIGHT: f32 = 80.0;
    /// Spawn delay range (seconds); a fresh threshold is drawn per spawn
    pub const SPAWN_DELAY_MIN: f32 = 0.8;
    pub const SPAWN_DELAY_MAX: f32 = 1.4;

    /// Scroll speed steps (pixels/second)
    pub const BASE_SPEED: f32 = 200.0;
    pub const MID_SPEED: f32 = 250.0;
    pub const TOP_SPEED: f32 = 300.0;
    /// Elapsed run time at which each speed step engages (seconds)
    pub const MID_SPEED_AT: f32 = 10.0;
    pub const TOP_SPEED_AT: f32 = 20.0;

    /// Decorative clouds
    pub const CLOUD_COUNT: usize = 3;
    pub const CLOUD_MIN_SIZE: f32 = 40.0;
    pub const CLOUD_MAX_SIZE: f32 = 60.0;
    /// Clouds drift at this fraction of the scroll speed
    pub const CLOUD_DRIFT_FACTOR: f32 = 0.2;

    /// Largest delta a single tick will integrate; anything beyond
    /// (tab-switch stalls, suspended process) is clamped
    pub const MAX_TICK_DT: f32 = 0.1;

    /// Intents buffered between ticks before the queue starts dropping
    pub const INTENT_QUEUE_CAP: usize = 16;
}
