use glam::Vec2;

use crate::components::{Agent, Direction};
use crate::error::LayoutError;
use crate::grid::{Grid, Tile};

/// The one maze the game ships with. Row 10 is the side tunnel; the patrol
/// pen has doors above and below.
pub const MAZE_LAYOUT: [&str; 22] = [
    "#########################",
    "#...........#...........#",
    "#o###.#####.#.#####.###o#",
    "#.......................#",
    "#.###.#.#########.#.###.#",
    "#.....#.....#.....#.....#",
    "#####.#####.#.#####.#####",
    "#####.#...........#.#####",
    "#####.#.####S####.#.#####",
    "#####.#.#SSSSSSS#.#.#####",
    "......#.#SSSSSSS#.#......",
    "#####.#.####S####.#.#####",
    "#####.#...........#.#####",
    "#####.#.#########.#.#####",
    "#...........#...........#",
    "#.###.#####.#.#####.###.#",
    "#o..#...............#..o#",
    "###.#.#.####.####.#.#.###",
    "#.....#..... .....#.....#",
    "#.#########.#.#########.#",
    "#.......................#",
    "#########################",
];

#[derive(Debug, Clone, PartialEq)]
pub struct PatrolSpawn {
    pub id: String,
    pub position: Vec2,
    pub direction: Direction,
}

/// A maze plus where everyone starts on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub grid: Grid,
    pub player_start: Vec2,
    pub patrol_starts: Vec<PatrolSpawn>,
}

impl Level {
    pub fn new(
        rows: &[&str],
        player_start: (i32, i32),
        patrol_starts: &[(&str, (i32, i32), Direction)],
    ) -> Result<Level, LayoutError> {
        let grid = Grid::from_rows(rows)?;
        let player_start = checked_spawn(&grid, "player", player_start)?;
        let patrol_starts = patrol_starts
            .iter()
            .map(|(id, at, direction)| {
                Ok(PatrolSpawn {
                    id: id.to_string(),
                    position: checked_spawn(&grid, id, *at)?,
                    direction: *direction,
                })
            })
            .collect::<Result<Vec<_>, LayoutError>>()?;
        Ok(Level {
            grid,
            player_start,
            patrol_starts,
        })
    }

    /// Spawns are given as `(col, row)`.
    pub fn reference() -> Level {
        Level::new(
            &MAZE_LAYOUT,
            (12, 18),
            &[
                ("cop_1", (12, 7), Direction::Left),
                ("cop_2", (11, 10), Direction::Right),
                ("cop_3", (13, 10), Direction::Up),
            ],
        )
        .expect("reference maze is well-formed")
    }

    pub fn player(&self) -> Agent {
        Agent::player(self.player_start)
    }

    pub fn patrols(&self) -> Vec<Agent> {
        self.patrol_starts
            .iter()
            .map(|s| Agent::patrol(s.id.clone(), s.position, s.direction))
            .collect()
    }
}

fn checked_spawn(grid: &Grid, id: &str, (col, row): (i32, i32)) -> Result<Vec2, LayoutError> {
    match grid.get(row, col) {
        Some(tile) if tile != Tile::Wall => Ok(Vec2::new(col as f32, row as f32)),
        _ => Err(LayoutError::BadSpawn {
            id: id.to_string(),
            row,
            col,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_level_shape() {
        let level = Level::reference();
        assert_eq!(level.grid.width(), 25);
        assert_eq!(level.grid.height(), 22);
        assert_eq!(level.patrols().len(), 3);
        assert_eq!(level.player().position, Vec2::new(12.0, 18.0));
        assert_eq!(level.grid.cash_count(), 236);
    }

    #[test]
    fn reference_tunnel_is_open_at_both_edges() {
        let grid = Level::reference().grid;
        assert_ne!(grid.tile_at(10, 0), Tile::Wall);
        assert_ne!(grid.tile_at(10, 24), Tile::Wall);
    }

    #[test]
    fn reference_pen_has_doors_on_both_sides() {
        let grid = Level::reference().grid;
        assert_eq!(grid.tile_at(8, 12), Tile::Spawn);
        assert_eq!(grid.tile_at(11, 12), Tile::Spawn);
        assert_ne!(grid.tile_at(17, 12), Tile::Wall);
    }

    #[test]
    fn spawn_on_wall_is_rejected() {
        let err = Level::new(&["###", "# #", "###"], (0, 0), &[]).unwrap_err();
        assert_eq!(
            err,
            LayoutError::BadSpawn {
                id: "player".to_string(),
                row: 0,
                col: 0
            }
        );
        assert!(Level::new(&["###", "# #", "###"], (1, 1), &[("cop", (5, 1), Direction::Up)]).is_err());
    }
}
