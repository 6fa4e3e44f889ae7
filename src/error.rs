use std::io;

use thiserror::Error;

/// Problems turning text rows into a maze.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("layout has no rows")]
    Empty,
    #[error("row {row} is {found} tiles wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown tile {ch:?} at row {row}, column {col}")]
    UnknownTile { ch: char, row: usize, col: usize },
    #[error("spawn for {id} at ({col}, {row}) is not a traversable tile")]
    BadSpawn { id: String, row: i32, col: i32 },
}

/// A commentary provider could not produce a line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommentaryError {
    #[error("commentary service unavailable: {0}")]
    Unavailable(String),
    #[error("commentary service returned an empty reply")]
    EmptyReply,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("invalid maze layout: {0}")]
    Layout(#[from] LayoutError),
}

pub type Result<T> = std::result::Result<T, Error>;
