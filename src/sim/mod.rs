//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Delta-time integration only (no per-frame increments)
//! - Seeded RNG only
//! - Stable obstacle order (oldest first)
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod rect;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{first_hit, rects_overlap};
pub use difficulty::scroll_speed;
pub use rect::Rect;
pub use snapshot::Snapshot;
pub use state::{Cloud, GamePhase, Obstacle, Player, RunState};
pub use tick::{Intent, tick};
