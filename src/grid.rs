//! Static maze representation.
//!
//! The grid keeps two copies of its tiles: the canonical layout it was built
//! from, which is never written to, and the live tiles that pickups are
//! consumed from. [`Grid::reset`] copies the former over the latter.

use glam::Vec2;

use crate::components::Direction;
use crate::error::LayoutError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty,
    Wall,
    Cash,
    Turbo,
    Spawn,
}

impl Tile {
    fn from_char(ch: char) -> Option<Tile> {
        match ch {
            ' ' => Some(Tile::Empty),
            '#' => Some(Tile::Wall),
            '.' => Some(Tile::Cash),
            'o' => Some(Tile::Turbo),
            'S' => Some(Tile::Spawn),
            _ => None,
        }
    }

    pub fn is_pickup(self) -> bool {
        matches!(self, Tile::Cash | Tile::Turbo)
    }
}

/// Rounds a continuous coordinate to its tile index, halves rounding up.
pub fn round_coord(v: f32) -> i32 {
    (v + 0.5).floor() as i32
}

/// Nearest tile of a continuous position as `(row, col)`.
pub fn tile_of(pos: Vec2) -> (i32, i32) {
    (round_coord(pos.y), round_coord(pos.x))
}

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    canonical: Vec<Tile>,
    tiles: Vec<Tile>,
}

impl Grid {
    pub fn from_rows(rows: &[&str]) -> Result<Grid, LayoutError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(LayoutError::Empty);
        }

        let mut canonical = Vec::with_capacity(width * height);
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(LayoutError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let tile = Tile::from_char(ch).ok_or(LayoutError::UnknownTile { ch, row, col })?;
                canonical.push(tile);
            }
        }

        Ok(Grid {
            width,
            height,
            tiles: canonical.clone(),
            canonical,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    /// Wall test for a continuous point.
    ///
    /// Anything that rounds to outside the grid counts as open; this is what
    /// lets agents drive through the side tunnels.
    pub fn is_wall(&self, x: f32, y: f32) -> bool {
        let row = round_coord(y);
        let col = round_coord(x);
        if !self.in_bounds(row, col) {
            return false;
        }
        self.tile_at(row as usize, col as usize) == Tile::Wall
    }

    /// Whether the tile one step from `(row, col)` in `dir` is a wall.
    pub fn blocked(&self, row: i32, col: i32, dir: Direction) -> bool {
        let (dx, dy) = dir.delta();
        self.is_wall((col + dx) as f32, (row + dy) as f32)
    }

    /// Current tile. Callers must stay inside the grid.
    pub fn tile_at(&self, row: usize, col: usize) -> Tile {
        self.tiles[row * self.width + col]
    }

    /// Bounds-checked variant of [`Grid::tile_at`].
    pub fn get(&self, row: i32, col: i32) -> Option<Tile> {
        if self.in_bounds(row, col) {
            Some(self.tile_at(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Clears a pickup and reports what was there.
    ///
    /// Consuming an already-empty tile, or one that holds no pickup, is a
    /// no-op returning `None`.
    pub fn consume(&mut self, row: usize, col: usize) -> Option<Tile> {
        let idx = row * self.width + col;
        let tile = self.tiles[idx];
        if !tile.is_pickup() {
            return None;
        }
        self.tiles[idx] = Tile::Empty;
        Some(tile)
    }

    pub fn reset(&mut self) {
        self.tiles.copy_from_slice(&self.canonical);
    }

    pub fn cash_count(&self) -> u32 {
        self.tiles.iter().filter(|t| **t == Tile::Cash).count() as u32
    }

    /// Live tiles as `(row, col, tile)`, row-major.
    pub fn tiles(&self) -> impl Iterator<Item = (usize, usize, Tile)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, t)| (i / self.width, i % self.width, *t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        Grid::from_rows(&["#####", "#.o #", "  S  ", "#####"]).expect("valid layout")
    }

    #[test]
    fn parses_tiles() {
        let grid = sample();
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.tile_at(1, 1), Tile::Cash);
        assert_eq!(grid.tile_at(1, 2), Tile::Turbo);
        assert_eq!(grid.tile_at(2, 2), Tile::Spawn);
        assert_eq!(grid.tile_at(1, 3), Tile::Empty);
        assert_eq!(grid.cash_count(), 1);
    }

    #[test]
    fn rejects_bad_layouts() {
        assert_eq!(Grid::from_rows(&[]), Err(LayoutError::Empty));
        assert_eq!(
            Grid::from_rows(&["###", "##"]),
            Err(LayoutError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            Grid::from_rows(&["#x#"]),
            Err(LayoutError::UnknownTile {
                ch: 'x',
                row: 0,
                col: 1
            })
        );
    }

    #[test]
    fn out_of_bounds_is_open() {
        let grid = sample();
        assert!(grid.is_wall(0.0, 0.0));
        assert!(!grid.is_wall(-1.0, 2.0));
        assert!(!grid.is_wall(5.0, 2.0));
        assert!(!grid.is_wall(2.0, -3.0));
        assert!(!grid.is_wall(2.0, 9.0));
    }

    #[test]
    fn is_wall_rounds_to_nearest_tile() {
        let grid = sample();
        // (0.4, 1.0) rounds to col 0, a wall; (0.5, 1.0) rounds to col 1.
        assert!(grid.is_wall(0.4, 1.0));
        assert!(!grid.is_wall(0.5, 1.0));
        assert!(grid.blocked(1, 1, Direction::Up));
        assert!(!grid.blocked(1, 1, Direction::Right));
        assert!(!grid.blocked(2, 0, Direction::Left));
    }

    #[test]
    fn consume_is_idempotent() {
        let mut grid = sample();
        assert_eq!(grid.consume(1, 1), Some(Tile::Cash));
        assert_eq!(grid.consume(1, 1), None);
        assert_eq!(grid.tile_at(1, 1), Tile::Empty);
        assert_eq!(grid.consume(0, 0), None);
        assert_eq!(grid.tile_at(0, 0), Tile::Wall);
    }

    #[test]
    fn reset_restores_canonical_layout() {
        let mut grid = sample();
        grid.consume(1, 1);
        grid.consume(1, 2);
        assert_eq!(grid.cash_count(), 0);
        grid.reset();
        assert_eq!(grid, sample());
    }

    #[test]
    fn rounding_matches_half_up() {
        assert_eq!(round_coord(3.5), 4);
        assert_eq!(round_coord(3.49), 3);
        assert_eq!(round_coord(-0.5), 0);
        assert_eq!(round_coord(-0.51), -1);
        assert_eq!(tile_of(Vec2::new(2.6, 0.2)), (0, 3));
    }
}
