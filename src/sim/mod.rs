//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed step only, never scaled by wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (row-major brick scan)
//! - No rendering or audio dependencies

pub mod ai;
pub mod collision;
pub mod geom;
pub mod state;
pub mod tick;

pub use collision::{CollisionReport, resolve};
pub use geom::{Circle, Rect};
pub use state::{
    Ball, Brick, BrickGrid, BrickHit, BrickKind, BrickStatus, GameEvent, GamePhase, GameState,
    Paddle,
};
pub use tick::{TickInput, tick};
