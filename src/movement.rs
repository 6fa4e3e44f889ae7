//! Continuous movement reconciled against the tile grid.
//!
//! Agents only ever change heading or stop on an exact tile center: a step
//! that would reach or pass the center of the tile the agent is on is
//! resolved there first, and only then allowed to carry on. The single
//! exception is the player's immediate reversal, handled by the world.

use glam::Vec2;

use crate::components::{Agent, Direction};
use crate::grid::{round_coord, Grid};

/// Moves `agent` along its current heading for `dt` seconds.
pub fn advance(grid: &Grid, agent: &mut Agent, dt: f32) {
    let step = agent.speed * dt;
    let old = agent.position;
    let (dx, dy) = agent.direction.delta();
    let next = Vec2::new(old.x + dx as f32 * step, old.y + dy as f32 * step);

    let center_row = round_coord(old.y);
    let center_col = round_coord(old.x);

    let crossed_x = crosses(old.x, next.x, center_col as f32);
    let crossed_y = crosses(old.y, next.y, center_row as f32);
    let crossed = match agent.direction {
        Direction::Left | Direction::Right => crossed_x,
        Direction::Up | Direction::Down => crossed_y,
        Direction::None => crossed_x || crossed_y,
    };

    if crossed {
        resolve_intersection(grid, agent, center_row, center_col, next);
    } else {
        agent.position = next;
    }

    wrap_horizontal(grid, agent);
}

/// Decides what happens at the tile center `(center_row, center_col)`.
///
/// A queued turn into an open tile wins; otherwise an agent facing a wall
/// stops on the center; otherwise it keeps going to `tentative`.
pub fn resolve_intersection(
    grid: &Grid,
    agent: &mut Agent,
    center_row: i32,
    center_col: i32,
    tentative: Vec2,
) {
    let center = Vec2::new(center_col as f32, center_row as f32);

    if agent.queued != Direction::None
        && agent.queued != agent.direction
        && !grid.blocked(center_row, center_col, agent.queued)
    {
        agent.position = center;
        agent.direction = agent.queued;
        // Patrols keep the request so the AI can re-issue it.
        if agent.is_player() {
            agent.queued = Direction::None;
        }
        return;
    }

    if agent.direction != Direction::None && grid.blocked(center_row, center_col, agent.direction) {
        agent.position = center;
        agent.direction = Direction::None;
    } else {
        agent.position = tentative;
    }
}

fn crosses(old: f32, next: f32, center: f32) -> bool {
    (old <= center && next >= center) || (old >= center && next <= center)
}

/// Side tunnels: leaving past half a tile off one edge re-enters at the other.
pub fn wrap_horizontal(grid: &Grid, agent: &mut Agent) {
    let limit = grid.width() as f32 - 0.5;
    if agent.position.x < -0.5 {
        agent.position.x = limit;
    } else if agent.position.x > limit {
        agent.position.x = -0.5;
    }
}
