//! Street Cash: a maze-chase getaway game.
//!
//! The simulation is a plain owned [`GameWorld`] advanced by [`tick`]. Input,
//! rendering and radio chatter sit around it and only touch it through
//! [`GameWorld`]'s lifecycle and steering methods or by reading it.

pub mod collision;
pub mod commentary;
pub mod components;
pub mod config;
pub mod constants;
pub mod error;
pub mod grid;
pub mod input;
pub mod level;
pub mod movement;
pub mod patrol;
pub mod render;
pub mod state;
pub mod world;

pub use components::{Agent, Direction, Role};
pub use grid::{Grid, Tile};
pub use level::Level;
pub use state::{GameState, Status};
pub use world::{tick, GameEvent, GameWorld};
