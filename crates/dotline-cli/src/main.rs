// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! dotline: sweep progress through a page indicator and print what it draws.

use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use dotline_core::{Configuration, PageControl};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod cli;
mod preset;
mod report;
mod surface;

use cli::{Cli, Command, Format, SweepArgs};
use report::FrameReport;
use surface::TextSurface;

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();
}

/// Evenly spaced progress values from `from` to `to`, endpoints included.
#[allow(clippy::cast_precision_loss)]
fn progress_steps(from: f32, to: f32, steps: usize) -> Vec<f32> {
    match steps {
        0 => Vec::new(),
        1 => vec![from],
        n => {
            let span = (n - 1) as f32;
            (0..n)
                .map(|i| from + (to - from) * (i as f32 / span))
                .collect()
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn sweep(config: Configuration, args: &SweepArgs) -> Result<Vec<FrameReport>> {
    if args.steps == 0 {
        bail!("--steps must be at least 1");
    }
    let last_page = config.number_of_pages.saturating_sub(1) as f32;
    let to = args.to.unwrap_or(last_page);
    info!(style = %config.style, pages = config.number_of_pages, from = args.from, to, "sweep");

    let mut control = PageControl::with_config(TextSurface::default(), config);
    let mut frames = Vec::with_capacity(args.steps);
    for (step, progress) in progress_steps(args.from, to, args.steps).into_iter().enumerate() {
        control.set_progress(progress);
        let state = control
            .render_state()
            .context("page control has not drawn yet")?;
        debug!(step, progress, "frame");
        frames.push(FrameReport::new(
            step,
            progress,
            control.current_page(),
            state,
            control.target().rasterize(),
        ));
    }
    Ok(frames)
}

fn run(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Sweep(args) => {
            let config = preset::resolve(&args.indicator)?;
            let frames = sweep(config, &args)?;
            match args.format {
                Format::Table => writeln!(out, "{}", report::table(&frames))?,
                Format::Json => {
                    serde_json::to_writer_pretty(&mut out, &frames)?;
                    writeln!(out)?;
                }
                Format::Ascii => write!(out, "{}", report::ascii(&frames))?,
            }
        }
        Command::Size(args) => {
            let config = preset::resolve(&args)?;
            let size = dotline_core::intrinsic_size(&config);
            writeln!(out, "{} x {}", size.width, size.height)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli)
}
