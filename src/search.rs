use crate::cell::CellState;
use crate::frontier::{Frontier, FrontierEntry, FrontierKind, HeapFrontier, SortedFrontier};
use crate::manhattan;
use crate::state_grid::StateGrid;
use fxhash::FxBuildHasher;
use grid_util::Point;
use indexmap::IndexSet;
use log::{debug, info, trace, warn};

pub type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// Bookkeeping of a single search run.
#[derive(Clone, Debug, Default)]
pub struct SearchStats {
    /// Number of entries taken off the frontier.
    pub pops: usize,
    /// Number of entries put on the frontier, the start included.
    pub enqueued: usize,
    /// Popped points in the order they were popped.
    pub popped: FxIndexSet<Point>,
    /// Moves taken to reach the goal along the expansion that found it.
    pub goal_cost: Option<i32>,
}

/// Result of [GridSearch::search]. Neither variant is an error: the grid has been annotated in
/// both cases, only [Found](SearchOutcome::Found) carries the start and finish markers.
#[derive(Clone, Debug)]
pub enum SearchOutcome {
    Found(SearchStats),
    NoPath(SearchStats),
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn stats(&self) -> &SearchStats {
        match self {
            SearchOutcome::Found(stats) | SearchOutcome::NoPath(stats) => stats,
        }
    }

    pub fn into_stats(self) -> SearchStats {
        match self {
            SearchOutcome::Found(stats) | SearchOutcome::NoPath(stats) => stats,
        }
    }
}

/// Best-first search on a 4-connected [StateGrid] using the Manhattan distance as heuristic.
///
/// The grid doubles as the closed set: a cell is marked [Closed](CellState::Closed) the moment
/// it is put on the frontier and only [Empty](CellState::Empty) cells are ever enqueued, so
/// nothing is discovered twice and the run ends after at most `rows * cols` pops. Every popped
/// cell other than the goal is marked [Path](CellState::Path); no backtrace prunes this trail
/// to a single route afterwards.
#[derive(Clone, Debug, Default)]
pub struct GridSearch {
    pub frontier: FrontierKind,
}

impl GridSearch {
    pub fn new(frontier: FrontierKind) -> GridSearch {
        GridSearch { frontier }
    }

    /// Searches from `start` to `goal`, annotating `grid` in place.
    ///
    /// The start is enqueued whatever its current state is. If `start` lies outside the grid
    /// nothing is touched and [NoPath](SearchOutcome::NoPath) is returned right away.
    pub fn search(&self, grid: &mut StateGrid, start: Point, goal: Point) -> SearchOutcome {
        match self.frontier {
            FrontierKind::Sorted => search_with::<SortedFrontier>(grid, start, goal),
            FrontierKind::Heap => search_with::<HeapFrontier>(grid, start, goal),
        }
    }
}

/// Runs [GridSearch::search] with the default frontier.
pub fn search(grid: &mut StateGrid, start: Point, goal: Point) -> SearchOutcome {
    GridSearch::default().search(grid, start, goal)
}

fn enqueue<F: Frontier>(
    frontier: &mut F,
    grid: &mut StateGrid,
    stats: &mut SearchStats,
    entry: FrontierEntry,
) {
    frontier.push(entry);
    grid.set_state(&entry.point, CellState::Closed);
    stats.enqueued += 1;
}

/// The search loop, generic over the frontier.
pub fn search_with<F: Frontier>(
    grid: &mut StateGrid,
    start: Point,
    goal: Point,
) -> SearchOutcome {
    let mut stats = SearchStats::default();
    if !grid.in_bounds(&start) {
        warn!(
            "Start {} lies outside the {}x{} grid",
            start,
            grid.rows(),
            grid.cols()
        );
        return SearchOutcome::NoPath(stats);
    }
    info!("Searching from {} to {}", start, goal);

    let mut frontier = F::default();
    enqueue(
        &mut frontier,
        grid,
        &mut stats,
        FrontierEntry::new(start, 0, manhattan(&start, &goal)),
    );

    while let Some(current) = frontier.pop_best() {
        stats.pops += 1;
        let fresh = stats.popped.insert(current.point);
        debug_assert!(fresh, "{} was popped twice", current.point);
        trace!(
            "Popped {} with g = {}, h = {}",
            current.point,
            current.g,
            current.h
        );

        if current.point == goal {
            grid.set_state(&start, CellState::START);
            grid.set_state(&current.point, CellState::FINISH);
            debug_assert!(grid.state(&start).is_terminal());
            stats.goal_cost = Some(current.g);
            info!(
                "Reached {} at cost {} after {} pops",
                goal, current.g, stats.pops
            );
            return SearchOutcome::Found(stats);
        }

        grid.set_state(&current.point, CellState::Path);

        for next in grid.open_neighbours(&current.point) {
            enqueue(
                &mut frontier,
                grid,
                &mut stats,
                FrontierEntry::new(next, current.g + 1, manhattan(&next, &goal)),
            );
        }
    }

    debug!("Frontier exhausted after {} pops", stats.pops);
    info!("No path from {} to {}", start, goal);
    SearchOutcome::NoPath(stats)
}
