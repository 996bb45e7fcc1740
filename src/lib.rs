//! # grid_astar
//!
//! Best-first ([A*](https://en.wikipedia.org/wiki/A*_search_algorithm)-like) search between two
//! cells of a 4-connected grid of open cells and obstacles. The search annotates the grid in
//! place: every discovered cell becomes [Closed](CellState::Closed), every expanded cell
//! [Path](CellState::Path), and on success the two end points receive the
//! [Start](Terminal::Start) and [Finish](Terminal::Finish) markers. Moves have unit cost and the
//! heuristic is the [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry).
//!
//! Grids are read from a plain text format (see [parse]) and rendered through [render].
pub mod cell;
pub mod error;
pub mod frontier;
pub mod parse;
pub mod render;
pub mod search;
pub mod state_grid;

pub use cell::{CellState, Terminal};
pub use error::{GridError, Result};
pub use frontier::{Frontier, FrontierEntry, FrontierKind, HeapFrontier, SortedFrontier};
pub use grid_util::Point;
pub use render::GlyphSet;
pub use search::{search, GridSearch, SearchOutcome, SearchStats};
pub use state_grid::{Components, StateGrid};

/// Unit moves in expansion order: north, west, south, east, as `(row, column)` deltas.
pub const MOVES: [(i32, i32); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// Number of unit moves between two points when nothing is in the way. Saturates at
/// [i32::MAX] for points too far apart to be represented.
pub fn manhattan(a: &Point, b: &Point) -> i32 {
    let distance = u64::from(a.x.abs_diff(b.x)) + u64::from(a.y.abs_diff(b.y));
    i32::try_from(distance).unwrap_or(i32::MAX)
}
