//! # Modulo I/O
//!
//! Design files (JSON), editor settings files, and plain-text cut sheets.

pub mod error;
pub mod design_file;
pub mod settings_file;
pub mod cut_sheet;

pub use cut_sheet::CutSheetWriter;
pub use design_file::{open_design, save_design, DesignReader, DesignWriter};
pub use error::FileError;
pub use settings_file::{load_settings, save_settings};
