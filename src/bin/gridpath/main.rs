//! gridpath - find the shortest path between two cells of a grid and animate it in the terminal.
//!
//! Start, goal and walls come from the command line, from an ASCII map file, or, when neither is
//! given, from a sequence of interactive prompts.

use anyhow::{Context, Result};
use clap::Parser;
use grid_dijkstra::{
    AstarSolver, Cell, DijkstraSolver, Path, Scenario, ScenarioBuilder, DEFAULT_COLS, DEFAULT_ROWS,
};
use log::{info, LevelFilter};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::time::Duration;

mod animation;
mod input;

use animation::Animation;

#[derive(Parser, Debug)]
#[command(name = "gridpath")]
#[command(version)]
#[command(about = "Find and animate the shortest path between two grid cells", long_about = None)]
struct Args {
    /// Number of grid rows
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Number of grid columns
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: usize,

    /// Start cell as ROW,COL (1-based)
    #[arg(long, value_parser = input::parse_cell, requires = "goal")]
    start: Option<Cell>,

    /// Goal cell as ROW,COL (1-based)
    #[arg(long, value_parser = input::parse_cell, requires = "start")]
    goal: Option<Cell>,

    /// Wall cell as ROW,COL (1-based); may be repeated
    #[arg(long = "wall", value_parser = input::parse_cell)]
    walls: Vec<Cell>,

    /// ASCII map file: '.' free, '#' wall, 'A' start, 'B' goal. Overrides the grid options
    #[arg(long, conflicts_with_all = ["start", "goal", "walls"])]
    map: Option<PathBuf>,

    /// Delay between animation frames in milliseconds
    #[arg(long, default_value_t = 100)]
    delay_ms: u64,

    /// Do not clear the screen between frames
    #[arg(long)]
    no_clear: bool,

    /// Search with A* instead of Dijkstra
    #[arg(long)]
    astar: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    // Logs go to stderr so they do not end up inside the animation frames.
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();
}

fn scenario_builder(args: &Args) -> Result<ScenarioBuilder> {
    if let Some(map) = &args.map {
        return input::load_map(map);
    }
    match (args.start, args.goal) {
        (Some(start), Some(goal)) => Ok(ScenarioBuilder::new(args.rows, args.cols)
            .start(start)
            .goal(goal)
            .walls(args.walls.iter().copied())),
        _ => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            let builder =
                input::prompt_scenario(stdin.lock(), stdout.lock(), args.rows, args.cols)?;
            Ok(builder.walls(args.walls.iter().copied()))
        }
    }
}

fn solve(args: &Args, scenario: &Scenario) -> Result<Path> {
    let path = if args.astar {
        scenario.solve(&AstarSolver::new())
    } else {
        scenario.solve(&DijkstraSolver)
    };
    path.context("Search rejected its input")
}

fn run(args: Args) -> Result<()> {
    let scenario = scenario_builder(&args)?
        .build()
        .context("Invalid grid setup")?;
    let path = solve(&args, &scenario)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if path.is_empty() {
        writeln!(out, "No path found.")?;
        return Ok(());
    }
    info!("Found path with {} steps: {}", path.steps(), path);
    let animation = Animation {
        delay: Duration::from_millis(args.delay_ms),
        clear: !args.no_clear,
    };
    animation
        .play(&mut out, &scenario, &path)
        .context("Failed to draw the animation")?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
