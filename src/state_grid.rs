use crate::cell::CellState;
use crate::error::{GridError, Result};
use crate::MOVES;
use grid_util::{Point, SimpleValueGrid, ValueGrid};
use itertools::iproduct;
use log::debug;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// [StateGrid] holds the [CellState] of every cell of a rectangular grid. Points are read as
/// `(row, column)`: `x` selects the row and `y` the column, so the backing [SimpleValueGrid] is
/// `rows` wide and `cols` high.
#[derive(Clone, Debug)]
pub struct StateGrid {
    cells: SimpleValueGrid<CellState>,
}

impl Default for StateGrid {
    /// The degenerate 0x0 grid. Searching it always yields no path.
    fn default() -> StateGrid {
        StateGrid::new(0, 0)
    }
}

impl StateGrid {
    /// Creates a grid of `rows` x `cols` [Empty](CellState::Empty) cells.
    pub fn new(rows: usize, cols: usize) -> StateGrid {
        StateGrid {
            cells: SimpleValueGrid::new(rows, cols, CellState::Empty),
        }
    }

    /// Builds a grid from row vectors. All rows must have the length of the first one; zero
    /// rows give the empty grid.
    pub fn from_rows(rows: Vec<Vec<CellState>>) -> Result<StateGrid> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(GridError::Ragged {
                row,
                expected: cols,
                found,
            });
        }
        let mut grid = StateGrid::new(rows.len(), cols);
        for (x, row) in rows.into_iter().enumerate() {
            for (y, state) in row.into_iter().enumerate() {
                grid.set_state(&Point::new(x as i32, y as i32), state);
            }
        }
        debug!("Built {}x{} grid", grid.rows(), grid.cols());
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.cells.width()
    }

    pub fn cols(&self) -> usize {
        self.cells.height()
    }

    /// Dimensions as `(rows, cols)`.
    pub fn bounds(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    pub fn is_empty(&self) -> bool {
        self.rows() == 0 || self.cols() == 0
    }

    pub fn in_bounds(&self, point: &Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.rows()
            && (point.y as usize) < self.cols()
    }

    /// State of an in-bounds cell.
    pub fn state(&self, point: &Point) -> CellState {
        self.cells.get_point(*point)
    }

    /// True if the point lies on the grid and has not been discovered or blocked. This is the
    /// only test the search applies to a neighbour, so out-of-bounds and non-empty cells are
    /// rejected alike.
    pub fn is_open(&self, point: &Point) -> bool {
        self.in_bounds(point) && self.state(point) == CellState::Empty
    }

    /// Overwrites the state of a cell. The point has to be in bounds.
    pub fn set_state(&mut self, point: &Point, state: CellState) {
        debug_assert!(self.in_bounds(point), "{} is outside the grid", point);
        self.cells.set_point(*point, state);
    }

    /// The open cells among the four axis-aligned neighbours, in [MOVES] order.
    pub fn open_neighbours(&self, point: &Point) -> SmallVec<[Point; 4]> {
        MOVES
            .iter()
            .map(|&(dx, dy)| Point::new(point.x + dx, point.y + dy))
            .filter(|p| self.is_open(p))
            .collect()
    }

    /// Iterates over all cells row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Point, CellState)> + '_ {
        iproduct!(0..self.rows() as i32, 0..self.cols() as i32).map(move |(x, y)| {
            let point = Point::new(x, y);
            (point, self.state(&point))
        })
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.iter().filter(|&(_, s)| s == state).count()
    }

    /// Rows of states, mostly useful for comparisons in tests and for rendering.
    pub fn to_rows(&self) -> Vec<Vec<CellState>> {
        (0..self.rows() as i32)
            .map(|x| {
                (0..self.cols() as i32)
                    .map(|y| self.state(&Point::new(x, y)))
                    .collect()
            })
            .collect()
    }

    fn get_ix_point(&self, point: &Point) -> usize {
        point.x as usize * self.cols() + point.y as usize
    }

    /// Links up 4-connected passable cells into components.
    pub fn components(&self) -> Components {
        let mut sets = UnionFind::new(self.rows() * self.cols());
        for (point, state) in self.iter() {
            if !state.is_passable() {
                continue;
            }
            let parent_ix = self.get_ix_point(&point);
            [Point::new(point.x + 1, point.y), Point::new(point.x, point.y + 1)]
                .into_iter()
                .filter(|p| self.in_bounds(p) && self.state(p).is_passable())
                .for_each(|p| {
                    sets.union(parent_ix, self.get_ix_point(&p));
                });
        }
        Components {
            sets,
            rows: self.rows(),
            cols: self.cols(),
        }
    }

    /// Checks whether `goal` can be walked to from `start` without crossing an obstacle.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        self.components().connected(start, goal)
    }
}

/// Connected components of the passable cells of a [StateGrid], computed once with a
/// [UnionFind]. Obstacles are components of their own.
#[derive(Clone, Debug)]
pub struct Components {
    sets: UnionFind<usize>,
    rows: usize,
    cols: usize,
}

impl Components {
    fn ix(&self, point: &Point) -> Option<usize> {
        let inside = point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.rows
            && (point.y as usize) < self.cols;
        inside.then(|| point.x as usize * self.cols + point.y as usize)
    }

    /// Retrieves the component id of a point, if it lies on the grid.
    pub fn component(&self, point: &Point) -> Option<usize> {
        self.ix(point).map(|ix| self.sets.find(ix))
    }

    /// Checks if both points are on the grid and on the same component.
    pub fn connected(&self, a: &Point, b: &Point) -> bool {
        match (self.ix(a), self.ix(b)) {
            (Some(a_ix), Some(b_ix)) => self.sets.equiv(a_ix, b_ix),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from_codes(codes: &[&[i64]]) -> StateGrid {
        StateGrid::from_rows(
            codes
                .iter()
                .map(|row| row.iter().map(|&c| CellState::from_code(c)).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn bounds_follow_rows_and_columns() {
        let grid = grid_from_codes(&[&[0, 0, 0], &[0, 1, 0]]);
        assert_eq!(grid.bounds(), (2, 3));
        assert!(grid.in_bounds(&Point::new(1, 2)));
        assert!(!grid.in_bounds(&Point::new(2, 0)));
        assert!(!grid.in_bounds(&Point::new(0, 3)));
        assert!(!grid.in_bounds(&Point::new(-1, 0)));
        assert_eq!(grid.state(&Point::new(1, 1)), CellState::Obstacle);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let rows = vec![
            vec![CellState::Empty, CellState::Empty],
            vec![CellState::Empty],
        ];
        match StateGrid::from_rows(rows) {
            Err(GridError::Ragged {
                row,
                expected,
                found,
            }) => {
                assert_eq!((row, expected, found), (1, 2, 1));
            }
            other => panic!("expected a ragged grid error, got {:?}", other),
        }
    }

    #[test]
    fn zero_rows_give_the_empty_grid() {
        let grid = StateGrid::from_rows(Vec::new()).unwrap();
        assert_eq!(grid.bounds(), (0, 0));
        assert!(grid.is_empty());
        assert!(!grid.is_open(&Point::new(0, 0)));
        assert_eq!(grid.iter().count(), 0);
    }

    #[test]
    fn only_empty_in_bounds_cells_are_open() {
        let mut grid = grid_from_codes(&[&[0, 1], &[0, 0]]);
        grid.set_state(&Point::new(1, 0), CellState::Closed);
        grid.set_state(&Point::new(1, 1), CellState::Path);
        assert!(grid.is_open(&Point::new(0, 0)));
        assert!(!grid.is_open(&Point::new(0, 1)));
        assert!(!grid.is_open(&Point::new(1, 0)));
        assert!(!grid.is_open(&Point::new(1, 1)));
        assert!(!grid.is_open(&Point::new(0, -1)));
    }

    #[test]
    fn neighbours_come_in_move_order() {
        let grid = StateGrid::new(3, 3);
        let centre = grid.open_neighbours(&Point::new(1, 1));
        assert_eq!(
            centre.as_slice(),
            &[
                Point::new(0, 1),
                Point::new(1, 0),
                Point::new(2, 1),
                Point::new(1, 2)
            ]
        );
        let corner = grid.open_neighbours(&Point::new(0, 0));
        assert_eq!(corner.as_slice(), &[Point::new(1, 0), Point::new(0, 1)]);
    }

    #[test]
    fn count_and_rows_agree() {
        let grid = grid_from_codes(&[&[0, 1, 1], &[0, 0, 1]]);
        assert_eq!(grid.count(CellState::Obstacle), 3);
        assert_eq!(grid.count(CellState::Empty), 3);
        assert_eq!(grid.to_rows()[0][1], CellState::Obstacle);
    }

    /// Corresponds to the following grid, where the wall splits the left column off:
    ///  ___
    /// | # |
    /// | # |
    ///  ___
    #[test]
    fn test_component_generation() {
        let grid = grid_from_codes(&[&[0, 0], &[1, 1], &[0, 0]]);
        let components = grid.components();
        assert!(components.connected(&Point::new(0, 0), &Point::new(0, 1)));
        assert!(components.connected(&Point::new(2, 0), &Point::new(2, 1)));
        assert!(!components.connected(&Point::new(0, 0), &Point::new(2, 0)));
        assert!(!components.connected(&Point::new(0, 0), &Point::new(1, 0)));
        assert!(!components.connected(&Point::new(0, 0), &Point::new(5, 5)));
        assert!(components.component(&Point::new(-1, 0)).is_none());
    }

    /// Diagonal neighbours do not connect on a 4-grid.
    #[test]
    fn reachable_without_diagonals() {
        let blocked = grid_from_codes(&[&[0, 1], &[1, 0]]);
        assert!(!blocked.reachable(&Point::new(0, 0), &Point::new(1, 1)));
        let around = grid_from_codes(&[&[0, 0, 0], &[0, 1, 0], &[0, 0, 0]]);
        assert!(around.reachable(&Point::new(0, 0), &Point::new(2, 2)));
    }
}
