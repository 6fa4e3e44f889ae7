//! Score, lives and the game's status machine.
//!
//! Fields are private: everything outside this module reads through the
//! accessors and changes state only through the named transitions below.

use crate::constants::{CASH_REWARD, STARTING_LEVEL, STARTING_LIVES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Start,
    Playing,
    GameOver,
}

/// What a hit on an invulnerable player amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeOutcome {
    Respawn { lives: u8 },
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    score: u32,
    lives: u8,
    status: Status,
    level: u32,
    cash_remaining: u32,
    vulnerable_timer: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            score: 0,
            lives: STARTING_LIVES,
            status: Status::Start,
            level: STARTING_LEVEL,
            cash_remaining: 0,
            vulnerable_timer: 0,
        }
    }
}

impl GameState {
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn cash_remaining(&self) -> u32 {
        self.cash_remaining
    }

    pub fn vulnerable_timer(&self) -> u32 {
        self.vulnerable_timer
    }

    pub fn is_vulnerable(&self) -> bool {
        self.vulnerable_timer > 0
    }

    pub fn is_playing(&self) -> bool {
        self.status == Status::Playing
    }

    /// `Start` → `Playing`. Returns false, changing nothing, from any other status.
    pub fn begin(&mut self, cash_on_grid: u32) -> bool {
        if self.status != Status::Start {
            return false;
        }
        self.status = Status::Playing;
        self.cash_remaining = cash_on_grid;
        true
    }

    pub fn collect_cash(&mut self) {
        self.score += CASH_REWARD;
        self.cash_remaining = self.cash_remaining.saturating_sub(1);
    }

    pub fn activate_turbo(&mut self, ticks: u32) {
        self.vulnerable_timer = ticks;
    }

    pub fn award(&mut self, points: u32) {
        self.score += points;
    }

    pub fn lose_life(&mut self) -> LifeOutcome {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.status = Status::GameOver;
            LifeOutcome::GameOver
        } else {
            LifeOutcome::Respawn { lives: self.lives }
        }
    }

    pub fn tick_turbo(&mut self) {
        if self.is_playing() {
            self.vulnerable_timer = self.vulnerable_timer.saturating_sub(1);
        }
    }
}
