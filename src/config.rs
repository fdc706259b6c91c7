//! Tool configuration. The model artifact path is fixed at startup; the form
//! and logging sections tune interactive behavior.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path to the trained conversion pipeline (ONNX artifact)
    pub model_path: PathBuf,
    /// Interactive form behavior
    pub form: FormConfig,
    /// Logging
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    /// Offer to score another session after each verdict
    pub repeat: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("conversion_pipeline.onnx"),
            form: FormConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self { repeat: true }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load from JSON file if present; otherwise return default
    pub fn load(path: &std::path::Path) -> Self {
        if path.exists() {
            if let Ok(data) = std::fs::read_to_string(path) {
                if let Ok(c) = serde_json::from_str::<AppConfig>(&data) {
                    return c;
                }
            }
        }
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let c = AppConfig::load(std::path::Path::new("no-such-config.json"));
        assert_eq!(c.model_path, PathBuf::from("conversion_pipeline.onnx"));
        assert!(c.form.repeat);
        assert_eq!(c.log.level, "info");
    }

    #[test]
    fn load_from_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut f = std::fs::File::create(&path).unwrap();
        write!(
            f,
            r#"{{"model_path":"custom.onnx","form":{{"repeat":false}},"log":{{"level":"debug","json":true}}}}"#
        )
        .unwrap();

        let c = AppConfig::load(&path);
        assert_eq!(c.model_path, PathBuf::from("custom.onnx"));
        assert!(!c.form.repeat);
        assert!(c.log.json);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();
        let c = AppConfig::load(&path);
        assert_eq!(c.log.level, "info");
    }
}
