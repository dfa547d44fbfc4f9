//! Design files: one [`Design`] per JSON document.
//!
//! Shape records inside use the flat persisted form, so files written by
//! older editors (missing depth, null counts, numeric-only fields) load and
//! come out normalized.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use modulo_core::{Design, DesignError};

use crate::error::FileError;

pub struct DesignReader<R: Read> {
    reader: R,
}

impl<R: Read> DesignReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn read(&mut self) -> Result<Design, FileError> {
        let mut json = String::new();
        self.reader.read_to_string(&mut json)?;
        let design = Design::from_json(&json)?;
        if design.name.trim().is_empty() {
            return Err(DesignError::EmptyName.into());
        }
        log::info!(
            "Read design '{}' with {} shapes",
            design.name,
            design.shape_count()
        );
        Ok(design)
    }
}

pub struct DesignWriter<W: Write> {
    writer: W,
}

impl<W: Write> DesignWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write(&mut self, design: &Design) -> Result<(), FileError> {
        if design.name.trim().is_empty() {
            return Err(DesignError::EmptyName.into());
        }
        let json = design.to_json()?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Load a design from a file on disk.
pub fn open_design(path: &Path) -> Result<Design, FileError> {
    let file = File::open(path).map_err(|source| FileError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    DesignReader::new(BufReader::new(file)).read()
}

/// Save a design to a file on disk, replacing it if present.
pub fn save_design(path: &Path, design: &Design) -> Result<(), FileError> {
    let file = File::create(path)?;
    DesignWriter::new(BufWriter::new(file)).write(design)?;
    log::info!("Saved design '{}' to {}", design.name, path.display());
    Ok(())
}
