use clap::{ArgAction, Parser, ValueEnum};
use serde::Serialize;
use std::{
    fs::File,
    io::{self, BufWriter, Read, Write},
    path::PathBuf,
};
use tracing::{debug, info, Level};

use crate::{
    error::{Error, Result},
    graph::{branch_and_bound::BranchAndBound, mst, tsp},
    output::{Format, Report},
};

mod campus;
mod error;
/// Graph algorithms over delivery points
mod graph;
mod input;
mod math;
mod output;
mod point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
pub enum Mode {
    /// Cheapest cabling between all points, never crossing directly between campuses
    #[value(name = "MST")]
    #[serde(rename = "MST")]
    Mst,
    /// Quick closed route by cheapest insertion
    #[value(name = "FASTTSP")]
    #[serde(rename = "FASTTSP")]
    FastTsp,
    /// Shortest possible closed route
    #[value(name = "OPTTSP")]
    #[serde(rename = "OPTTSP")]
    OptTsp,
}

#[derive(Debug, Parser)]
#[command(author, about)]
struct Opt {
    /// What to compute over the points
    #[arg(short, long, value_enum)]
    mode: Mode,

    /// A path to the point list, else reads from stdin
    file: Option<PathBuf>,

    /// Output file path (overwrites old files), else writes to stdout
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// How results are written
    #[arg(long, value_enum, default_value = "text")]
    format: Format,

    /// Log more details to stderr, can be repeated
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let opt = Opt::parse();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(match opt.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        })
        .init();

    if let Err(err) = run(&opt) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn run(opt: &Opt) -> Result<()> {
    let reader: Box<dyn Read> = match &opt.file {
        Some(path) => Box::new(File::open(path)?),
        None => {
            info!("Reading from stdin");
            Box::new(io::stdin().lock())
        }
    };
    let mut out: Box<dyn Write> = match &opt.out {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };
    solve_and_write(opt.mode, opt.format, reader, &mut out)
}

fn solve_and_write(
    mode: Mode,
    format: Format,
    reader: impl Read,
    out: &mut impl Write,
) -> Result<()> {
    let mut points = input::read_points(reader)?;
    let report = solve(mode, &mut points)?;
    output::write_report(out, mode, &report, format)
}

fn solve(mode: Mode, points: &mut [point::Point]) -> Result<Report> {
    info!("Solving {:?} over {} points", mode, points.len());
    match mode {
        Mode::Mst => {
            point::classify_all(points);
            let tree = mst::minimum_spanning_tree(points);
            if !tree.weight.is_finite() {
                return Err(Error::DisconnectedTree {
                    isolated: tree.first_unreachable().unwrap_or_default(),
                });
            }
            Ok(Report::SpanningTree {
                weight: tree.weight,
                edges: tree.edges().collect(),
            })
        }
        Mode::FastTsp => {
            let tour = tsp::cheapest_insertion(points);
            check_tour(points, &tour);
            Ok(Report::Route { tour, stats: None })
        }
        Mode::OptTsp => {
            let (tour, stats) = BranchAndBound::new(points).solve();
            check_tour(points, &tour);
            Ok(Report::Route {
                tour,
                stats: Some(stats),
            })
        }
    }
}

fn check_tour(points: &[point::Point], tour: &tsp::Tour) {
    debug_assert!(tour.is_permutation_of(points.len()));
    debug!(
        "Tour length {} recomputed from its edges: {}",
        tour.length,
        tsp::closed_tour_length(points, &tour.order)
    );
}
