use clap::{ArgAction, Parser, ValueEnum};
use grid_astar::parse::{read_grid_file, CoordinateReader};
use grid_astar::{FrontierKind, GlyphSet, GridSearch, Point, SearchOutcome, StateGrid};
use log::{debug, error, info};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum FrontierArg {
    /// Re-sort the frontier before every pop
    #[default]
    Sorted,
    /// Binary heap, same visiting order
    Heap,
}

impl From<FrontierArg> for FrontierKind {
    fn from(arg: FrontierArg) -> FrontierKind {
        match arg {
            FrontierArg::Sorted => FrontierKind::Sorted,
            FrontierArg::Heap => FrontierKind::Heap,
        }
    }
}

#[derive(Parser)]
#[command(name = "grid_astar", about = "Find a path between two cells of a grid file")]
struct Args {
    /// Grid file: one row per line, 0 for open cells, any other integer for obstacles
    path: PathBuf,

    /// Print the grid with ASCII glyphs instead of emoji
    #[arg(long)]
    ascii: bool,

    /// Frontier implementation used by the search
    #[arg(long, default_value_t, value_enum)]
    frontier: FrontierArg,

    /// Log to stderr: -v info, -vv debug, -vvv trace
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}

fn print_grid(grid: &StateGrid, glyphs: GlyphSet) {
    println!("{}", grid.render(glyphs));
}

fn prompt<R: BufRead>(
    input: &mut CoordinateReader<R>,
    message: &str,
) -> grid_astar::Result<Point> {
    print!("{}", message);
    io::stdout().flush()?;
    input.next_coordinate()
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);
    let glyphs = if args.ascii {
        GlyphSet::Ascii
    } else {
        GlyphSet::Emoji
    };

    // An unreadable file leaves an empty grid, on which every search finds no path.
    let mut grid = match read_grid_file(&args.path) {
        Ok(grid) => grid,
        Err(e) => {
            println!("Error: {}", e);
            error!("{}", e);
            StateGrid::default()
        }
    };
    print_grid(&grid, glyphs);

    let mut input = CoordinateReader::new(io::stdin().lock());
    let endpoints = prompt(&mut input, "Enter start coordinate: ")
        .and_then(|start| Ok((start, prompt(&mut input, "Enter goal coordinate: ")?)));
    let (start, goal) = match endpoints {
        Ok(endpoints) => endpoints,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    debug!(
        "{} and {} share a component: {}",
        start,
        goal,
        grid.reachable(&start, &goal)
    );

    let solver = GridSearch::new(args.frontier.into());
    match solver.search(&mut grid, start, goal) {
        SearchOutcome::Found(stats) => {
            info!(
                "Path found: {} cells expanded, {} discovered",
                stats.pops, stats.enqueued
            );
        }
        SearchOutcome::NoPath(stats) => {
            info!("Gave up after {} pops", stats.pops);
            println!("No path found");
        }
    }
    print_grid(&grid, glyphs);
    ExitCode::SUCCESS
}
