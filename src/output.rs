use std::io::Write;

use clap::ValueEnum;
use serde::Serialize;

use crate::{
    error::Result,
    graph::{branch_and_bound::SearchStats, tsp::Tour},
    Mode,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Weight or length on the first line, then edges or the visiting order
    Text,
    /// A single JSON document, including search statistics when available
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Report {
    SpanningTree {
        weight: f64,
        edges: Vec<(usize, usize)>,
    },
    Route {
        #[serde(flatten)]
        tour: Tour,
        #[serde(skip_serializing_if = "Option::is_none")]
        stats: Option<SearchStats>,
    },
}

#[derive(Serialize)]
struct Document<'a> {
    mode: Mode,
    report: &'a Report,
}

pub fn write_report(
    out: &mut impl Write,
    mode: Mode,
    report: &Report,
    format: Format,
) -> Result<()> {
    match format {
        Format::Text => write_text(out, report)?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, &Document { mode, report })?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn write_text(out: &mut impl Write, report: &Report) -> std::io::Result<()> {
    match report {
        Report::SpanningTree { weight, edges } => {
            writeln!(out, "{:.2}", weight)?;
            for (from, to) in edges {
                writeln!(out, "{} {}", from, to)?;
            }
        }
        Report::Route { tour, .. } => {
            writeln!(out, "{:.2}", tour.length)?;
            let order = tour
                .order
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(out, "{}", order)?;
        }
    }
    Ok(())
}
