use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::components::Direction;
use crate::state::Status;
use crate::world::GameWorld;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Steer(Direction),
    /// Start from the title screen, or go back to it after a game over.
    Confirm,
    Quit,
}

pub fn command_for(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Some(Command::Steer(Direction::Up)),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
            Some(Command::Steer(Direction::Down))
        }
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
            Some(Command::Steer(Direction::Left))
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
            Some(Command::Steer(Direction::Right))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Confirm),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Key presses and repeats only; releases are ignored. Ctrl-C always quits.
pub fn command_for_event(key: KeyEvent) -> Option<Command> {
    match key.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => {
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Some(Command::Quit);
            }
            command_for(key.code)
        }
        KeyEventKind::Release => None,
    }
}

pub fn apply(world: &mut GameWorld, command: Command) {
    match command {
        Command::Steer(dir) => world.steer(dir),
        Command::Confirm => match world.state.status() {
            Status::Start => {
                world.start_game();
            }
            Status::GameOver => world.reset_game(),
            Status::Playing => {}
        },
        Command::Quit => {}
    }
}
