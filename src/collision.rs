use log::info;

use crate::constants::{CAPTURE_BONUS, COLLISION_RADIUS, TURBO_DURATION};
use crate::grid::Tile;
use crate::state::{LifeOutcome, Status};
use crate::world::{GameEvent, GameWorld};

/// Applies everything the last round of movement ran into.
///
/// Pickups under the player come first, then each patrol in order. Once a
/// hit ends the game, later patrols in the same pass are ignored.
pub fn resolve(world: &mut GameWorld) {
    collect_pickup(world);

    for idx in 0..world.patrols.len() {
        if world.state.status() == Status::GameOver {
            break;
        }
        let dist = world.patrols[idx].position.distance(world.player.position);
        if dist >= COLLISION_RADIUS {
            continue;
        }

        if world.state.is_vulnerable() {
            let cop = &mut world.patrols[idx];
            cop.respawn();
            world.state.award(CAPTURE_BONUS);
            info!("{} captured, score {}", cop.id, world.state.score());
            world.events.push(GameEvent::PatrolCaptured { id: cop.id.clone() });
            continue;
        }

        match world.state.lose_life() {
            LifeOutcome::Respawn { lives } => {
                info!("caught by {}, {} lives left", world.patrols[idx].id, lives);
                world.respawn_agents();
                world.events.push(GameEvent::LifeLost { lives });
            }
            LifeOutcome::GameOver => {
                let score = world.state.score();
                info!("game over, final score {score}");
                world.events.push(GameEvent::GameOver { score });
            }
        }
    }
}

fn collect_pickup(world: &mut GameWorld) {
    let (row, col) = world.player.tile();
    if !world.grid.in_bounds(row, col) {
        return;
    }
    match world.grid.consume(row as usize, col as usize) {
        Some(Tile::Cash) => world.state.collect_cash(),
        Some(Tile::Turbo) => {
            world.state.activate_turbo(TURBO_DURATION);
            info!("turbo collected at ({col}, {row})");
            world.events.push(GameEvent::TurboCollected);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::components::Direction;
    use crate::level::Level;

    const OPEN: [&str; 5] = ["     ", "     ", "  .  ", "     ", "     "];

    fn world_with(patrols: &[(&str, (i32, i32), Direction)]) -> GameWorld {
        let level = Level::new(&OPEN, (2, 2), patrols).expect("valid level");
        let mut world = GameWorld::new(level);
        assert!(world.start_game());
        world.drain_events().for_each(drop);
        world
    }

    #[test]
    fn cash_under_player_is_collected_once() {
        let mut world = world_with(&[]);
        assert_eq!(world.state.cash_remaining(), 1);
        resolve(&mut world);
        assert_eq!(world.state.score(), 10);
        assert_eq!(world.state.cash_remaining(), 0);
        assert_eq!(world.grid.tile_at(2, 2), Tile::Empty);
        resolve(&mut world);
        assert_eq!(world.state.score(), 10);
        assert_eq!(world.state.cash_remaining(), 0);
    }

    #[test]
    fn turbo_makes_player_vulnerable_and_emits_event() {
        let level = Level::new(&["     ", "  o  ", "     "], (2, 1), &[]).expect("valid level");
        let mut world = GameWorld::new(level);
        world.start_game();
        world.drain_events().for_each(drop);
        resolve(&mut world);
        assert!(world.state.is_vulnerable());
        assert_eq!(world.state.vulnerable_timer(), TURBO_DURATION);
        assert_eq!(world.drain_events().collect::<Vec<_>>(), vec![GameEvent::TurboCollected]);
    }

    #[test]
    fn player_in_tunnel_margin_collects_nothing() {
        let mut world = world_with(&[]);
        world.player.position = Vec2::new(4.6, 2.0);
        resolve(&mut world);
        assert_eq!(world.state.score(), 0);
    }

    #[test]
    fn vulnerable_player_captures_patrol() {
        let mut world = world_with(&[("cop", (0, 0), Direction::Left)]);
        world.grid.consume(2, 2);
        world.state.activate_turbo(50);
        world.patrols[0].position = Vec2::new(2.4, 2.2);
        world.patrols[0].direction = Direction::Right;
        resolve(&mut world);
        assert_eq!(world.patrols.len(), 1);
        assert_eq!(world.patrols[0].position, Vec2::new(0.0, 0.0));
        assert_eq!(world.patrols[0].direction, Direction::Left);
        assert_eq!(world.state.score(), CAPTURE_BONUS);
        assert_eq!(world.state.lives(), 3);
        assert_eq!(
            world.drain_events().collect::<Vec<_>>(),
            vec![GameEvent::PatrolCaptured { id: "cop".to_string() }]
        );
    }

    #[test]
    fn hit_costs_a_life_and_respawns_everyone() {
        let mut world = world_with(&[("a", (0, 0), Direction::Down), ("b", (4, 4), Direction::Up)]);
        world.player.position = Vec2::new(3.0, 1.0);
        world.player.direction = Direction::Up;
        world.patrols[0].position = Vec2::new(3.3, 1.0);
        world.patrols[1].position = Vec2::new(4.0, 3.0);
        resolve(&mut world);
        assert_eq!(world.state.lives(), 2);
        assert_eq!(world.state.status(), Status::Playing);
        assert_eq!(world.player.position, Vec2::new(2.0, 2.0));
        assert_eq!(world.player.direction, Direction::None);
        assert_eq!(world.patrols[0].position, Vec2::new(0.0, 0.0));
        assert_eq!(world.patrols[1].position, Vec2::new(4.0, 4.0));
        assert_eq!(world.drain_events().collect::<Vec<_>>(), vec![GameEvent::LifeLost { lives: 2 }]);
    }

    #[test]
    fn last_life_ends_game_and_skips_remaining_patrols() {
        let mut world = world_with(&[("a", (0, 0), Direction::Down), ("b", (4, 4), Direction::Up)]);
        world.state.lose_life();
        world.state.lose_life();
        world.grid.consume(2, 2);
        world.player.position = Vec2::new(1.0, 1.0);
        world.patrols[0].position = Vec2::new(1.2, 1.0);
        world.patrols[1].position = Vec2::new(1.0, 1.3);
        resolve(&mut world);
        assert_eq!(world.state.status(), Status::GameOver);
        assert_eq!(world.state.lives(), 0);
        // Positions are frozen where the game ended.
        assert_eq!(world.player.position, Vec2::new(1.0, 1.0));
        assert_eq!(world.patrols[1].position, Vec2::new(1.0, 1.3));
        assert_eq!(world.drain_events().collect::<Vec<_>>(), vec![GameEvent::GameOver { score: 0 }]);
    }

    #[test]
    fn distant_patrols_are_harmless() {
        let mut world = world_with(&[("a", (0, 0), Direction::Down)]);
        world.patrols[0].position = Vec2::new(2.6, 2.0);
        resolve(&mut world);
        assert_eq!(world.state.lives(), 3);
    }
}
