/// Annotation applied to the two end cells of a successful search. Kept apart from the logical
/// states so the search loop itself only deals with [Empty](CellState::Empty),
/// [Obstacle](CellState::Obstacle), [Closed](CellState::Closed) and [Path](CellState::Path).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Terminal {
    Start,
    Finish,
}

/// State of a single grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Traversable and not yet discovered.
    #[default]
    Empty,
    /// Impassable for the whole run.
    Obstacle,
    /// Placed on the frontier; never enqueued again.
    Closed,
    /// Popped from the frontier without being the goal.
    Path,
    /// Start or finish marker, written once after the goal is reached.
    Terminal(Terminal),
}

impl CellState {
    pub const START: CellState = CellState::Terminal(Terminal::Start);
    pub const FINISH: CellState = CellState::Terminal(Terminal::Finish);

    /// Maps a token of the grid text format: `0` is open, anything else is blocked.
    pub fn from_code(code: i64) -> CellState {
        if code == 0 {
            CellState::Empty
        } else {
            CellState::Obstacle
        }
    }

    /// Everything except an obstacle can be stood on.
    pub fn is_passable(self) -> bool {
        self != CellState::Obstacle
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, CellState::Terminal(_))
    }
}
