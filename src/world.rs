//! The simulation as one owned value.
//!
//! [`tick`] is the only thing that moves the game forward; renderers and the
//! radio read the world between ticks and never write to it.

use std::vec::Drain;

use log::{debug, info};

use crate::collision;
use crate::components::{Agent, Direction};
use crate::constants::MAX_FRAME_DT;
use crate::grid::Grid;
use crate::level::Level;
use crate::movement;
use crate::patrol;
use crate::state::GameState;

/// Things that happened during a tick or lifecycle command, for whoever
/// wants to react outside the simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    Started,
    TurboCollected,
    PatrolCaptured { id: String },
    LifeLost { lives: u8 },
    GameOver { score: u32 },
}

#[derive(Debug, Clone)]
pub struct GameWorld {
    pub grid: Grid,
    pub player: Agent,
    pub patrols: Vec<Agent>,
    pub state: GameState,
    pub(crate) events: Vec<GameEvent>,
}

impl Default for GameWorld {
    fn default() -> Self {
        GameWorld::new(Level::reference())
    }
}

impl GameWorld {
    pub fn new(level: Level) -> Self {
        let player = level.player();
        let patrols = level.patrols();
        Self {
            grid: level.grid,
            player,
            patrols,
            state: GameState::default(),
            events: Vec::new(),
        }
    }

    /// Leaves the start screen. Counts the cash on the board as it goes.
    pub fn start_game(&mut self) -> bool {
        if !self.state.begin(self.grid.cash_count()) {
            return false;
        }
        info!("game started with {} cash on the board", self.state.cash_remaining());
        self.events.push(GameEvent::Started);
        true
    }

    /// Back to a fresh start screen: default state, full board, everyone home.
    pub fn reset_game(&mut self) {
        self.state = GameState::default();
        self.grid.reset();
        self.respawn_agents();
        info!("game reset");
    }

    /// Sends every agent back to its spawn. Score, lives and board are kept.
    pub fn respawn_agents(&mut self) {
        self.player.respawn();
        for cop in &mut self.patrols {
            cop.respawn();
        }
    }

    /// Player input. Reversing is immediate; any other turn waits for the
    /// next tile center.
    pub fn steer(&mut self, dir: Direction) {
        if dir == Direction::None {
            return;
        }
        let player = &mut self.player;
        player.queued = dir;
        if player.direction != Direction::None && dir == player.direction.opposite() {
            player.direction = dir;
            player.queued = Direction::None;
        }
    }

    pub fn drain_events(&mut self) -> Drain<'_, GameEvent> {
        self.events.drain(..)
    }
}

/// Advances a playing world by `dt` seconds, clamped to [`MAX_FRAME_DT`].
///
/// Does nothing outside [`Status::Playing`](crate::state::Status::Playing).
pub fn tick(world: &mut GameWorld, dt: f32) {
    if !world.state.is_playing() {
        return;
    }
    let dt = clamp_dt(dt);

    movement::advance(&world.grid, &mut world.player, dt);

    let flee = world.state.is_vulnerable();
    let target = world.player.position;
    for cop in &mut world.patrols {
        patrol::decide(&world.grid, cop, target, flee);
        movement::advance(&world.grid, cop, dt);
    }

    collision::resolve(world);
    world.state.tick_turbo();

    if !world.state.is_playing() {
        debug!("simulation frozen: {:?}", world.state.status());
    }
}

pub fn clamp_dt(dt: f32) -> f32 {
    if dt.is_finite() {
        dt.clamp(0.0, MAX_FRAME_DT)
    } else {
        0.0
    }
}
