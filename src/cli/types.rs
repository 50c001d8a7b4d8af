use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::model::Offset;

#[derive(Debug, Parser)]
#[command(
    name = "mask-editor",
    version,
    about = "Headless driver for the raster mask editor"
)]
pub(super) struct Cli {
    #[command(subcommand)]
    pub(super) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(super) enum Commands {
    /// Prints the image size and the viewport the editor would open with.
    Info {
        #[arg(long)]
        image: PathBuf,
        #[arg(long, default_value = "800x600", value_parser = parse_container)]
        container: (f32, f32),
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Replays a recorded input script against an image and writes the mask.
    Replay {
        #[arg(long)]
        image: PathBuf,
        #[arg(long)]
        script: PathBuf,
        #[arg(long)]
        output: PathBuf,
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Debug, Serialize)]
pub(super) struct ViewportInfo {
    pub(super) width: u32,
    pub(super) height: u32,
    pub(super) zoom: f32,
    pub(super) pan: Offset,
}

pub(super) fn parse_container(raw: &str) -> Result<(f32, f32), String> {
    let (width, height) = raw
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, found `{raw}`"))?;
    let width = width
        .trim()
        .parse::<f32>()
        .map_err(|error| format!("invalid width `{width}`: {error}"))?;
    let height = height
        .trim()
        .parse::<f32>()
        .map_err(|error| format!("invalid height `{height}`: {error}"))?;
    if width <= 0.0 || height <= 0.0 {
        return Err(format!("container must be positive, found {width}x{height}"));
    }
    Ok((width, height))
}
