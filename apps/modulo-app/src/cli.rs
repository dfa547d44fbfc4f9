//! Command-line front end.
//!
//! ```text
//! modulo [--settings <file>] cuts <design.json>
//! modulo [--settings <file>] place <design.json> <module> <x> <y>
//! modulo [--settings <file>] drag <design.json> <shape-id> <x> <y>
//! ```

use std::convert::Infallible;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use thiserror::Error;

use modulo_core::{EditorSettings, Module, Point, ShapeId};
use modulo_io::{load_settings, open_design, save_design, CutSheetWriter, FileError};
use modulo_placement::RejectReason;

use crate::session::{DragOutcome, DropOutcome, Session, SessionError};

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    File(#[from] FileError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("Placement refused: {0:?}")]
    Refused(RejectReason),
}

#[derive(Parser, Debug, Clone, PartialEq)]
#[clap(name = "modulo", author, version, about, long_about = None)]
pub struct Cli {
    /// Editor settings file (canvas size, gaps); defaults when omitted
    #[clap(long, global = true, value_parser)]
    pub settings: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the cut list of a design
    Cuts {
        #[clap(value_parser)]
        design: PathBuf,
    },
    /// Drop a new module at a model position and save the design
    Place {
        #[clap(value_parser)]
        design: PathBuf,
        /// Module type name, e.g. cajonera, cubierta, estante
        #[clap(value_parser = parse_module)]
        module: Module,
        #[clap(value_parser = parse_coordinate, allow_negative_numbers = true)]
        x: f64,
        #[clap(value_parser = parse_coordinate, allow_negative_numbers = true)]
        y: f64,
    },
    /// Move an existing shape and save the design
    Drag {
        #[clap(value_parser)]
        design: PathBuf,
        #[clap(value_parser)]
        id: ShapeId,
        #[clap(value_parser = parse_coordinate, allow_negative_numbers = true)]
        x: f64,
        #[clap(value_parser = parse_coordinate, allow_negative_numbers = true)]
        y: f64,
    },
}

fn parse_module(name: &str) -> Result<Module, Infallible> {
    Ok(Module::from_type_name(name))
}

fn parse_coordinate(text: &str) -> Result<f64, String> {
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("not a finite number: {text}"))
}

fn settings_from(path: Option<&Path>) -> Result<EditorSettings, CliError> {
    match path {
        Some(path) => Ok(load_settings(path)?),
        None => Ok(EditorSettings::default()),
    }
}

/// Run one command line, writing human-readable output to `out`.
pub fn execute(cli: &Cli, out: &mut impl io::Write) -> Result<(), CliError> {
    let settings = settings_from(cli.settings.as_deref())?;

    match &cli.command {
        Command::Cuts { design } => {
            let design = open_design(design)?;
            CutSheetWriter::new(out).write(&design)?;
        }
        Command::Place { design: path, module, x, y } => {
            let mut design = open_design(path)?;
            let mut session = Session::new(settings);
            session.load(design.clone());
            match session.place(module.clone(), Point::new(*x, *y)) {
                DropOutcome::Placed { id, position, .. } => {
                    design.shapes = session.shapes().to_vec();
                    save_design(path, &design)?;
                    writeln!(out, "{id} {} {}", position.x, position.y)?;
                }
                DropOutcome::Refused { reason, .. } => return Err(CliError::Refused(reason)),
                DropOutcome::Idle => {}
            }
        }
        Command::Drag { design: path, id, x, y } => {
            let mut design = open_design(path)?;
            let mut session = Session::new(settings);
            session.load(design.clone());
            match session.drag_end(*id, Point::new(*x, *y))? {
                DragOutcome::Moved { position, .. } => {
                    design.shapes = session.shapes().to_vec();
                    save_design(path, &design)?;
                    writeln!(out, "{id} {} {}", position.x, position.y)?;
                }
                DragOutcome::Reverted { reason, .. } => return Err(CliError::Refused(reason)),
            }
        }
    }
    Ok(())
}
