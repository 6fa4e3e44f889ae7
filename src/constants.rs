//! Gameplay tunables.
//!
//! Speeds are in tiles per second. The frame driver clamps every delta to
//! [`MAX_FRAME_DT`], so the fastest agent moves at most half a tile per tick
//! and can never step over a tile center without the movement engine seeing it.

pub const PLAYER_SPEED: f32 = 5.0;
pub const PATROL_SPEED_NORMAL: f32 = 4.0;
pub const PATROL_SPEED_SCARED: f32 = 2.5;

pub const MAX_FRAME_DT: f32 = 0.1;

/// Ticks of vulnerability granted by a turbo pickup.
pub const TURBO_DURATION: u32 = 480;

pub const CASH_REWARD: u32 = 10;
pub const CAPTURE_BONUS: u32 = 200;

pub const STARTING_LIVES: u8 = 3;
pub const STARTING_LEVEL: u32 = 1;

/// Patrol/player distance (tile units) below which they collide.
pub const COLLISION_RADIUS: f32 = 0.6;
/// How close to a tile center a patrol must be before it re-plans.
pub const DECISION_EPSILON: f32 = 0.1;

pub const RADIO_LOG_CAPACITY: usize = 3;
pub const DEFAULT_RENDER_FPS: u64 = 60;
