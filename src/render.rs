//! Terminal view of a [`GameWorld`].
//!
//! Only reads the world. Cells are two columns wide and redrawn only when
//! they change since the previous frame.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;
use glam::Vec2;
use unicode_width::UnicodeWidthStr;

use crate::commentary::{MessageLog, Sender};
use crate::constants::RADIO_LOG_CAPACITY;
use crate::grid::{tile_of, Tile};
use crate::state::Status;
use crate::world::GameWorld;

const CELL_W: usize = 2;
/// Banner line plus the radio log under the maze.
const FOOTER_LINES: usize = 1 + RADIO_LOG_CAPACITY;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Glyph {
    Player,
    Patrol,
    Scared,
    Wall,
    Empty,
    Cash,
    Turbo,
    Spawn,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    glyph: Glyph,
    color: Color,
}

pub struct Renderer {
    last: Vec<Cell>,
    last_hud: String,
    last_footer: Vec<String>,
    needs_full: bool,
    origin_x: u16,
    origin_y: u16,
}

impl Renderer {
    pub fn new(world: &GameWorld) -> Self {
        let cells = world.grid.width() * world.grid.height();
        Self {
            last: vec![
                Cell {
                    glyph: Glyph::Empty,
                    color: Color::Reset,
                };
                cells
            ],
            last_hud: String::new(),
            last_footer: Vec::new(),
            needs_full: true,
            origin_x: 0,
            origin_y: 1,
        }
    }

    pub fn render(
        &mut self,
        out: &mut impl Write,
        world: &GameWorld,
        radio: &MessageLog,
    ) -> io::Result<()> {
        let width = world.grid.width();
        let height = world.grid.height();
        let needed_h = (height + 1 + FOOTER_LINES) as u16;
        let needed_w = (width * CELL_W) as u16;

        out.queue(MoveTo(0, 0))?;
        let (term_w, term_h) = terminal::size()?;
        if term_w < needed_w || term_h < needed_h {
            out.queue(Clear(ClearType::All))?;
            out.queue(Print(format!(
                "Terminal too small. Need at least {needed_w}x{needed_h} (cols x rows). Current: {term_w}x{term_h}."
            )))?;
            out.flush()?;
            self.needs_full = true;
            return Ok(());
        }

        let origin_x = (term_w - needed_w) / 2;
        let origin_y = (term_h - needed_h) / 2 + 1;
        if origin_x != self.origin_x || origin_y != self.origin_y {
            self.origin_x = origin_x;
            self.origin_y = origin_y;
            self.needs_full = true;
        }
        if self.needs_full {
            out.queue(Clear(ClearType::All))?;
        }

        let hud = hud_line(world);
        if self.needs_full || hud != self.last_hud {
            self.draw_line(out, self.origin_y - 1, &hud, Color::White)?;
            self.last_hud = hud;
        }

        let cells = frame_cells(world);
        for (idx, cell) in cells.into_iter().enumerate() {
            if self.needs_full || cell != self.last[idx] {
                self.last[idx] = cell;
                self.draw_cell(out, idx % width, idx / width, cell)?;
            }
        }

        let footer = footer_lines(world, radio);
        for (i, (line, color)) in footer.iter().enumerate() {
            let changed = self.last_footer.get(i).map(|l| l != line).unwrap_or(true);
            if self.needs_full || changed {
                self.draw_line(out, self.origin_y + (height + i) as u16, line, *color)?;
            }
        }
        self.last_footer = footer.into_iter().map(|(line, _)| line).collect();

        self.needs_full = false;
        out.flush()
    }

    fn draw_line(&self, out: &mut impl Write, y: u16, text: &str, color: Color) -> io::Result<()> {
        out.queue(MoveTo(self.origin_x, y))?;
        out.queue(Clear(ClearType::CurrentLine))?;
        out.queue(SetForegroundColor(color))?;
        out.queue(Print(text))?;
        out.queue(ResetColor)?;
        Ok(())
    }

    fn draw_cell(&self, out: &mut impl Write, x: usize, y: usize, cell: Cell) -> io::Result<()> {
        let text = match cell.glyph {
            Glyph::Player => "🚗",
            Glyph::Patrol => "🚓",
            Glyph::Scared => "😱",
            Glyph::Wall => "██",
            Glyph::Empty => "  ",
            Glyph::Cash => "· ",
            Glyph::Turbo => "● ",
            Glyph::Spawn => "  ",
        };
        out.queue(MoveTo(
            self.origin_x + (x * CELL_W) as u16,
            self.origin_y + y as u16,
        ))?;
        out.queue(SetForegroundColor(cell.color))?;
        out.queue(Print(text))?;
        let w = UnicodeWidthStr::width(text);
        for _ in w..CELL_W {
            out.queue(Print(' '))?;
        }
        out.queue(ResetColor)?;
        Ok(())
    }
}

fn hud_line(world: &GameWorld) -> String {
    let state = &world.state;
    let mut hud = format!(
        "Cash: ${}  Lives: {}  Sector: {}  Left: {}",
        state.score(),
        state.lives(),
        state.level(),
        state.cash_remaining()
    );
    if state.is_vulnerable() {
        hud.push_str(&format!("  TURBO {}", state.vulnerable_timer()));
    }
    hud
}

fn footer_lines(world: &GameWorld, radio: &MessageLog) -> Vec<(String, Color)> {
    let banner = match world.state.status() {
        Status::Start => (
            "STREET CASH - Enter to start, WASD/arrows to drive, q to quit".to_string(),
            Color::Cyan,
        ),
        Status::Playing => (String::new(), Color::Reset),
        Status::GameOver => (
            format!("BUSTED! Final score ${} - Enter to play again", world.state.score()),
            Color::Red,
        ),
    };
    let mut lines = vec![banner];
    let mut messages = radio.iter();
    for _ in 0..RADIO_LOG_CAPACITY {
        lines.push(match messages.next() {
            Some(msg) => match msg.sender {
                Sender::Dj => (format!(">> DJ NITRO: {}", msg.text), Color::Blue),
                Sender::Dispatch => (format!(">> DISPATCH: {}", msg.text), Color::Red),
            },
            None => (String::new(), Color::Reset),
        });
    }
    lines
}

/// One cell per tile, row-major, agents drawn over the board.
fn frame_cells(world: &GameWorld) -> Vec<Cell> {
    let width = world.grid.width();
    let mut cells: Vec<Cell> = world.grid.tiles().map(|(_, _, tile)| tile_cell(tile)).collect();

    let mut place = |pos: Vec2, cell: Cell| {
        let (row, col) = tile_of(pos);
        if world.grid.in_bounds(row, col) {
            cells[row as usize * width + col as usize] = cell;
        }
    };

    let scared = world.state.is_vulnerable();
    for cop in &world.patrols {
        let cell = if scared {
            Cell {
                glyph: Glyph::Scared,
                color: Color::Blue,
            }
        } else {
            Cell {
                glyph: Glyph::Patrol,
                color: Color::White,
            }
        };
        place(cop.position, cell);
    }
    place(
        world.player.position,
        Cell {
            glyph: Glyph::Player,
            color: Color::Red,
        },
    );
    cells
}

fn tile_cell(tile: Tile) -> Cell {
    match tile {
        Tile::Wall => Cell {
            glyph: Glyph::Wall,
            color: Color::Blue,
        },
        Tile::Cash => Cell {
            glyph: Glyph::Cash,
            color: Color::Green,
        },
        Tile::Turbo => Cell {
            glyph: Glyph::Turbo,
            color: Color::Yellow,
        },
        Tile::Spawn => Cell {
            glyph: Glyph::Spawn,
            color: Color::Reset,
        },
        Tile::Empty => Cell {
            glyph: Glyph::Empty,
            color: Color::Reset,
        },
    }
}
