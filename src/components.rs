use glam::Vec2;

use crate::constants::{PATROL_SPEED_NORMAL, PLAYER_SPEED};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    None,
}

impl Direction {
    /// Enumeration order used wherever ties are broken.
    pub const CARDINALS: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::None => (0, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::None => Direction::None,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Player,
    Patrol,
}

impl Role {
    pub fn base_speed(self) -> f32 {
        match self {
            Role::Player => PLAYER_SPEED,
            Role::Patrol => PATROL_SPEED_NORMAL,
        }
    }
}

/// Anything that moves through the maze.
///
/// `position` is continuous, in tile units: `x` is the column and `y` the
/// row, so an agent standing exactly on tile (row 3, col 7) sits at (7.0, 3.0).
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    pub id: String,
    pub role: Role,
    pub position: Vec2,
    pub direction: Direction,
    pub queued: Direction,
    pub speed: f32,
    pub spawn: Vec2,
    pub spawn_direction: Direction,
}

impl Agent {
    pub fn player(spawn: Vec2) -> Self {
        Self {
            id: "player".to_string(),
            role: Role::Player,
            position: spawn,
            direction: Direction::None,
            queued: Direction::None,
            speed: Role::Player.base_speed(),
            spawn,
            spawn_direction: Direction::None,
        }
    }

    pub fn patrol(id: impl Into<String>, spawn: Vec2, direction: Direction) -> Self {
        Self {
            id: id.into(),
            role: Role::Patrol,
            position: spawn,
            direction,
            queued: direction,
            speed: Role::Patrol.base_speed(),
            spawn,
            spawn_direction: direction,
        }
    }

    pub fn is_player(&self) -> bool {
        self.role == Role::Player
    }

    /// Puts the agent back where it started, heading the way it started.
    pub fn respawn(&mut self) {
        self.position = self.spawn;
        self.speed = self.role.base_speed();
        self.direction = self.spawn_direction;
        self.queued = self.spawn_direction;
    }

    pub fn tile(&self) -> (i32, i32) {
        crate::grid::tile_of(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PATROL_SPEED_SCARED;

    #[test]
    fn opposites_pair_up() {
        for dir in Direction::CARDINALS {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite(), dir);
        }
        assert_eq!(Direction::None.opposite(), Direction::None);
    }

    #[test]
    fn respawn_restores_spawn_heading() {
        let mut cop = Agent::patrol("cop_1", Vec2::new(12.0, 7.0), Direction::Left);
        cop.position = Vec2::new(3.4, 5.0);
        cop.direction = Direction::Up;
        cop.queued = Direction::Right;
        cop.speed = PATROL_SPEED_SCARED;
        cop.respawn();
        assert_eq!(cop.position, Vec2::new(12.0, 7.0));
        assert_eq!(cop.direction, Direction::Left);
        assert_eq!(cop.queued, Direction::Left);
        assert_eq!(cop.speed, PATROL_SPEED_NORMAL);

        let mut player = Agent::player(Vec2::new(12.0, 18.0));
        player.direction = Direction::Right;
        player.respawn();
        assert_eq!(player.direction, Direction::None);
        assert_eq!(player.queued, Direction::None);
    }
}
