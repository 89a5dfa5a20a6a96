//! `turntable`: load a scene, run the viewer headlessly and print what it
//! would display.

mod args;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use futures::executor::block_on;
use glam::Vec3;
use log::info;
use thiserror::Error;
use turntable_core::{LoadError, ParseError, SelectionError};
use turntable_viewer::{SessionOptions, ViewerSession};

use crate::args::{Args, Command, USAGE};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("Could not read '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Settings rejected: {0}")]
    Settings(#[from] ParseError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error("Could not encode output: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let command = match args::parse(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    match command {
        Command::Help => {
            println!("{USAGE}");
            ExitCode::SUCCESS
        }
        Command::Run(args) => match run(&args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("error: {err}");
                ExitCode::FAILURE
            }
        },
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let mut session = ViewerSession::new(SessionOptions::default());

    let file_name = display_name(&args.scene);
    let path = args.scene.clone();
    let result = block_on(session.loader().load(&file_name, async move { std::fs::read(path) }));
    session.finish_load(result)?;

    if let Some(path) = &args.settings {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.clone(),
            source,
        })?;
        session.import_settings(&text)?;
    }

    if let Some(number) = args.camera {
        session.set_active_camera(number - 1)?;
    }

    println!("Cameras:");
    for entry in session.camera_entries() {
        let marker = if entry.active { '*' } else { ' ' };
        match entry.fov_degrees {
            Some(fov) => println!("  {marker} {}  (fov {fov:.1}°)", entry.label),
            None => println!("  {marker} {}  (orthographic)", entry.label),
        }
    }

    for _ in 0..args.frames {
        let frame = session.tick(args.dt);
        if let Some(view) = frame.camera {
            info!(
                "render camera moved to camera {} at {} looking {}",
                view.index + 1,
                view.position,
                view.rotation * Vec3::NEG_Z
            );
        }
    }

    println!("{}", serde_json::to_string_pretty(&session.display())?);

    if args.export {
        println!("{}", session.export_settings()?);
    }
    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
