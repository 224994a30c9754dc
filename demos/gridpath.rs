//! gridpath: run A* or Dijkstra on a square grid and print the result.

use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use crossterm::queue;
use crossterm::style::{Color as CtColor, Print, ResetColor, SetBackgroundColor};
use gridpath_core::{Cell, Color, Grid, Pos};
use gridpath_demos::{Constants, Session, Settings};
use gridpath_paths::Algorithm;

#[derive(Parser)]
#[command(name = "gridpath")]
#[command(author, version, about = "Grid pathfinding with A*, Dijkstra and Wilson mazes")]
struct Cli {
    /// Grid side length (overrides ROWS from the constants file)
    #[arg(short = 'n', long)]
    size: Option<i32>,

    /// Maze seed; omit for a random maze
    #[arg(short, long)]
    seed: Option<u64>,

    /// Search algorithm: astar or dijkstra
    #[arg(short, long)]
    algorithm: Option<Algorithm>,

    /// Generate a Wilson maze before searching
    #[arg(short, long)]
    maze: bool,

    /// Start cell as ROW,COL (default: first empty cell)
    #[arg(long, value_parser = parse_pos)]
    start: Option<Pos>,

    /// End cell as ROW,COL (default: last empty cell)
    #[arg(long, value_parser = parse_pos)]
    end: Option<Pos>,

    /// KEY=VALUE constants file
    #[arg(short, long, value_name = "FILE")]
    constants: Option<PathBuf>,

    /// Print glyphs instead of coloured cells
    #[arg(short, long)]
    plain: bool,
}

fn parse_pos(s: &str) -> Result<Pos, String> {
    let (r, c) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {s}"))?;
    let row = r.trim().parse().map_err(|_| format!("bad row in {s}"))?;
    let col = c.trim().parse().map_err(|_| format!("bad column in {s}"))?;
    Ok(Pos::new(row, col))
}

fn settings(cli: &Cli) -> Result<Settings, Box<dyn Error>> {
    let mut s = match &cli.constants {
        Some(path) => Settings::from_constants(&Constants::load(path)?)?,
        None => Settings::default(),
    };
    if let Some(size) = cli.size {
        if size <= 0 {
            return Err(format!("size must be positive, got {size}").into());
        }
        s.rows = size;
    }
    if cli.seed.is_some() {
        s.seed = cli.seed;
    }
    if let Some(a) = cli.algorithm {
        s.algorithm = a;
    }
    Ok(s)
}

fn first_empty<'a>(mut cells: impl Iterator<Item = &'a Cell>) -> Option<Pos> {
    cells.find(|c| c.is_empty()).map(Cell::position)
}

fn place(session: &mut Session, pos: Pos, what: &str) -> Result<(), Box<dyn Error>> {
    if session.primary(pos) {
        Ok(())
    } else {
        Err(format!("cannot place {what} at {pos}").into())
    }
}

fn to_ct_color(c: Color) -> CtColor {
    let (r, g, b) = c.rgb();
    CtColor::Rgb { r, g, b }
}

fn draw(out: &mut impl Write, grid: &Grid, plain: bool) -> io::Result<()> {
    if plain {
        write!(out, "{grid}")?;
        return out.flush();
    }
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let c = &grid[Pos::new(row, col)];
            queue!(out, SetBackgroundColor(to_ct_color(c.color())), Print("  "))?;
        }
        queue!(out, ResetColor, Print("\n"))?;
    }
    out.flush()
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let settings = settings(&cli)?;
    let mut session = Session::new(settings.rows, settings.algorithm, settings.seed);

    if cli.maze {
        let stats = session.generate_maze();
        log::debug!("maze: {stats:?}");
    }

    let start = cli
        .start
        .or_else(|| first_empty(session.grid().iter()))
        .ok_or("no empty cell for the start")?;
    place(&mut session, start, "start")?;
    let end = cli
        .end
        .or_else(|| first_empty(session.grid().iter().rev()))
        .ok_or("no empty cell for the end")?;
    place(&mut session, end, "end")?;

    let result = session.run().ok_or("start and end must both be placed")?;

    let mut out = io::stdout().lock();
    draw(&mut out, session.grid(), cli.plain)?;
    match &result.path {
        Some(_) => writeln!(
            out,
            "{}: {start} -> {end}: {} steps, {} cells expanded",
            session.algorithm(),
            result.path_len(),
            result.visited.len()
        )?,
        None => writeln!(
            out,
            "{}: no path from {start} to {end} ({} cells expanded)",
            session.algorithm(),
            result.visited.len()
        )?,
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("gridpath: {e}");
        std::process::exit(1);
    }
}
