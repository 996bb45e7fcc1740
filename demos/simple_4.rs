use grid_astar::{search, GlyphSet, Point, SearchOutcome, StateGrid};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() {
    let mut grid: StateGrid = "0 0 0\n0 1 0\n0 0 0".parse().unwrap();
    println!("{}", grid.render(GlyphSet::Ascii));
    let start = Point::new(0, 0);
    let end = Point::new(2, 2);
    match search(&mut grid, start, end) {
        SearchOutcome::Found(stats) => {
            println!("Reached {} at cost {:?}:", end, stats.goal_cost);
            for p in &stats.popped {
                println!("{:?}", p);
            }
        }
        SearchOutcome::NoPath(_) => println!("No path found"),
    }
    println!("{}", grid.render(GlyphSet::Ascii));
}
