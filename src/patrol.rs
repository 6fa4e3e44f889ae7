use glam::Vec2;

use crate::components::{Agent, Direction};
use crate::constants::{DECISION_EPSILON, PATROL_SPEED_NORMAL, PATROL_SPEED_SCARED};
use crate::grid::{round_coord, Grid};

/// Plans a patrol's next turn.
///
/// Only acts when the patrol sits on a tile center. Picks the open neighbour
/// closest to the player, or furthest when `flee` is set, never doubling
/// back unless the patrol is in a dead end. Ties go to the earliest entry
/// of [`Direction::CARDINALS`].
pub fn decide(grid: &Grid, agent: &mut Agent, player: Vec2, flee: bool) {
    agent.speed = if flee {
        PATROL_SPEED_SCARED
    } else {
        PATROL_SPEED_NORMAL
    };

    let row = round_coord(agent.position.y);
    let col = round_coord(agent.position.x);
    let near_center = (agent.position.x - col as f32).abs() < DECISION_EPSILON
        && (agent.position.y - row as f32).abs() < DECISION_EPSILON;
    if !near_center {
        return;
    }

    let Some(choice) = choose_direction(grid, row, col, agent.direction, player, flee) else {
        return;
    };

    agent.queued = choice;
    if agent.direction == Direction::None {
        agent.direction = choice;
    }
}

/// Greedy pick among the open directions out of `(row, col)`.
pub fn choose_direction(
    grid: &Grid,
    row: i32,
    col: i32,
    heading: Direction,
    player: Vec2,
    flee: bool,
) -> Option<Direction> {
    let open: Vec<Direction> = Direction::CARDINALS
        .into_iter()
        .filter(|dir| !grid.blocked(row, col, *dir))
        .collect();
    let forward: Vec<Direction> = open
        .iter()
        .copied()
        .filter(|dir| *dir != heading.opposite())
        .collect();
    let options = if forward.is_empty() { open } else { forward };

    let mut best: Option<(Direction, f32)> = None;
    for dir in options {
        let (dx, dy) = dir.delta();
        let target = Vec2::new((col + dx) as f32, (row + dy) as f32);
        let dist = target.distance(player);
        let better = match best {
            None => true,
            Some((_, best_dist)) if flee => dist > best_dist,
            Some((_, best_dist)) => dist < best_dist,
        };
        if better {
            best = Some((dir, dist));
        }
    }
    best.map(|(dir, _)| dir)
}
