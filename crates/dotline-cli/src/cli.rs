// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use dotline_core::{Color, Style};

#[derive(Parser, Debug)]
#[command(name = "dotline", author, version, about = "Inspect dotline page-indicator render states")]
pub struct Cli {
    /// Log engine decisions (equivalent to RUST_LOG=debug)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Step progress across a range and print every frame
    Sweep(SweepArgs),
    /// Print the natural size of the indicator row
    Size(IndicatorArgs),
}

#[derive(Args, Debug)]
pub struct SweepArgs {
    #[command(flatten)]
    pub indicator: IndicatorArgs,
    /// First progress value
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub from: f32,
    /// Last progress value (defaults to the last page)
    #[arg(long, allow_negative_numbers = true)]
    pub to: Option<f32>,
    /// Number of frames, endpoints included
    #[arg(long, default_value_t = 5)]
    pub steps: usize,
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,
}

/// Indicator configuration; flags override the preset file, which overrides defaults.
#[derive(Args, Debug, Clone)]
pub struct IndicatorArgs {
    /// JSON preset file
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Number of pages
    #[arg(long)]
    pub pages: Option<usize>,
    /// scroll, fill, snake or scale
    #[arg(long)]
    pub style: Option<Style>,
    /// Dot width
    #[arg(long, allow_negative_numbers = true)]
    pub width: Option<f32>,
    /// Dot height
    #[arg(long, allow_negative_numbers = true)]
    pub height: Option<f32>,
    /// Gap between dots
    #[arg(long, allow_negative_numbers = true)]
    pub padding: Option<f32>,
    /// Active color (#rgb, #rrggbb or #rrggbbaa)
    #[arg(long)]
    pub active: Option<Color>,
    /// Inactive color (#rgb, #rrggbb or #rrggbbaa)
    #[arg(long)]
    pub inactive: Option<Color>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Human-readable table
    Table,
    /// One JSON document with every frame
    Json,
    /// One text-rendered row per frame
    Ascii,
}
