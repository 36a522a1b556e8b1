//! Board command - print cell geometry for a display config

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use yavalath_core::{board::all_hexes, Layout};

#[derive(Args)]
pub struct BoardArgs {
    /// Display configuration JSON file (window size, cell radius)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// One cell with its pixel center
#[derive(Clone, Debug, Serialize)]
struct CellInfo {
    q: i8,
    r: i8,
    s: i32,
    x: f64,
    y: f64,
}

pub fn run(args: BoardArgs) -> Result<()> {
    let config = crate::load_display_config(args.config.as_deref())?;
    let cells = cell_table(&config.layout());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&cells)?)?;
    } else {
        writeln!(out, "{:>3} {:>3} {:>3} {:>9} {:>9}", "q", "r", "s", "x", "y")?;
        for cell in &cells {
            writeln!(
                out,
                "{:>3} {:>3} {:>3} {:>9.2} {:>9.2}",
                cell.q, cell.r, cell.s, cell.x, cell.y
            )?;
        }
    }
    Ok(())
}

fn cell_table(layout: &Layout) -> Vec<CellInfo> {
    all_hexes()
        .map(|hex| {
            let center = layout.axial_to_pixel(hex);
            CellInfo {
                q: hex.q,
                r: hex.r,
                s: hex.s(),
                x: center.x,
                y: center.y,
            }
        })
        .collect()
}
