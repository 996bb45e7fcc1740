use crate::cell::{CellState, Terminal};
use crate::state_grid::StateGrid;
use core::fmt;
use itertools::Itertools;

/// Text token used for each cell state when printing a grid. [Empty](CellState::Empty) and
/// [Closed](CellState::Closed) cells share the default token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GlyphSet {
    #[default]
    Emoji,
    Ascii,
}

impl GlyphSet {
    pub fn glyph(self, state: CellState) -> &'static str {
        match self {
            GlyphSet::Emoji => match state {
                CellState::Obstacle => "⛰️   ",
                CellState::Terminal(Terminal::Start) => "🚦  ",
                CellState::Terminal(Terminal::Finish) => "🏁  ",
                CellState::Path => "🚗  ",
                CellState::Empty | CellState::Closed => "0   ",
            },
            GlyphSet::Ascii => match state {
                CellState::Obstacle => "# ",
                CellState::Terminal(Terminal::Start) => "S ",
                CellState::Terminal(Terminal::Finish) => "F ",
                CellState::Path => "* ",
                CellState::Empty | CellState::Closed => ". ",
            },
        }
    }
}

/// Display adapter returned by [StateGrid::render].
pub struct Rendered<'a> {
    grid: &'a StateGrid,
    glyphs: GlyphSet,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.grid.to_rows() {
            writeln!(
                f,
                "{}",
                row.into_iter().map(|s| self.glyphs.glyph(s)).join("")
            )?;
        }
        Ok(())
    }
}

impl StateGrid {
    /// Row-major text picture of the grid, one line per row.
    pub fn render(&self, glyphs: GlyphSet) -> Rendered<'_> {
        Rendered { grid: self, glyphs }
    }
}

impl fmt::Display for StateGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render(GlyphSet::default()))
    }
}
