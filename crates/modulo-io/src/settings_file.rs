use std::fs;
use std::path::Path;

use modulo_core::EditorSettings;

use crate::error::FileError;

/// Load editor settings from a JSON file. Fields the file leaves out keep
/// their defaults.
pub fn load_settings(path: &Path) -> Result<EditorSettings, FileError> {
    let json = fs::read_to_string(path).map_err(|source| FileError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let settings: EditorSettings = serde_json::from_str(&json)?;
    log::info!("Loaded settings from {}", path.display());
    Ok(settings)
}

pub fn save_settings(path: &Path, settings: &EditorSettings) -> Result<(), FileError> {
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_keep_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"principal_gap": 10.0, "zoom_max": 4.0}"#).unwrap();

        let settings = load_settings(&path).unwrap();
        assert!((settings.principal_gap - 10.0).abs() < 1e-10);
        assert!((settings.zoom_max - 4.0).abs() < 1e-10);
        assert!((settings.canvas_width - 700.0).abs() < 1e-10);
        assert!((settings.internal_gap - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_settings_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = EditorSettings {
            canvas_width: 900.0,
            ..EditorSettings::default()
        };
        save_settings(&path, &settings).unwrap();
        assert_eq!(load_settings(&path).unwrap(), settings);
    }
}
