use std::fs;
use std::path::Path;

use clap::Parser;
use image::GenericImageView;

use crate::model::{ContainerSize, ImageSize, Offset};
use crate::session::{EditorConfig, EditorSession};
use crate::viewport::Viewport;

use super::script::{CollectingHost, Finish, ReplayReport, Result, load_script};
use super::types::{Cli, Commands, ViewportInfo};

pub fn run_cli() -> std::result::Result<(), String> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Info {
            image,
            container,
            config,
        } => {
            let config = load_config(config.as_deref()).map_err(|error| error.to_string())?;
            let info = describe(&image, ContainerSize::new(container.0, container.1), &config)
                .map_err(|error| error.to_string())?;
            println!(
                "{}",
                serde_json::to_string_pretty(&info).map_err(|error| error.to_string())?
            );
        }
        Commands::Replay {
            image,
            script,
            output,
            config,
        } => {
            let config = load_config(config.as_deref()).map_err(|error| error.to_string())?;
            let report =
                replay(&image, &script, &output, &config).map_err(|error| error.to_string())?;
            println!(
                "{}",
                serde_json::to_string_pretty(&report).map_err(|error| error.to_string())?
            );
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<EditorConfig> {
    match path {
        Some(path) => Ok(EditorConfig::load(path)?),
        None => Ok(EditorConfig::default()),
    }
}

pub(super) fn describe(
    image: &Path,
    container: ContainerSize,
    config: &EditorConfig,
) -> Result<ViewportInfo> {
    config.validate()?;
    let (width, height) = image::open(image)?.dimensions();
    let size = ImageSize::new(width, height)?;
    let viewport = Viewport::fit(
        size,
        container,
        config.zoom_bounds(),
        config.max_initial_zoom,
    );
    Ok(ViewportInfo {
        width,
        height,
        zoom: viewport.zoom(),
        pan: viewport.pan(),
    })
}

/// Runs a recorded script through a fresh session and writes the applied
/// mask to `output`. Nothing is written when the run ends in a cancel.
pub fn replay(
    image: &Path,
    script: &Path,
    output: &Path,
    config: &EditorConfig,
) -> Result<ReplayReport> {
    let script = load_script(script)?;
    let source = image::open(image)?;
    let (width, height) = source.dimensions();

    let mut session = EditorSession::open(
        source,
        script.container,
        config,
        script.variant,
        CollectingHost::default(),
    )?;
    if let Some(prompt) = &script.prompt {
        session.set_prompt(prompt.as_str());
    }

    let mut report = ReplayReport {
        status: String::new(),
        width,
        height,
        history_len: 0,
        painted_pixels: 0,
        zoom: 0.0,
        pan: Offset::default(),
    };
    record(&session, &mut report);
    for (index, event) in script.events.iter().enumerate() {
        session.handle(event)?;
        if !session.is_open() {
            log::info!("session closed by event {index}");
            break;
        }
        record(&session, &mut report);
    }

    if session.is_open() {
        match script.finish {
            Finish::Apply => session.apply()?,
            Finish::Cancel => session.cancel(),
        }
    }

    let host = session.into_host();
    report.status = match host.applied {
        Some(payload) => {
            fs::write(output, &payload.mask_png)?;
            log::info!(
                "wrote {}x{} mask to {}",
                payload.width,
                payload.height,
                output.display()
            );
            "applied".to_string()
        }
        None => "cancelled".to_string(),
    };
    Ok(report)
}

fn record(session: &EditorSession<CollectingHost>, report: &mut ReplayReport) {
    if let Some(canvas) = session.canvas() {
        report.history_len = canvas.history().len();
        report.painted_pixels = canvas.surface().painted_pixels();
        report.zoom = canvas.viewport().zoom();
        report.pan = canvas.viewport().pan();
    }
}
