use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{BursarError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub school_name: String,
    #[serde(default = "default_fiscal_year")]
    pub fiscal_year: String,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_fiscal_year() -> String {
    "2081/82".to_string()
}

fn default_currency() -> String {
    "Rs.".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            school_name: String::new(),
            fiscal_year: default_fiscal_year(),
            currency: default_currency(),
        }
    }
}

fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("BURSAR_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("bursar")
}

fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

pub fn load_settings() -> Settings {
    let path = settings_path();
    if path.exists() {
        let content = std::fs::read_to_string(&path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_default()
    } else {
        Settings::default()
    }
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir)?;
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| BursarError::Settings(e.to_string()))?;
    std::fs::write(settings_path(), format!("{json}\n"))?;
    Ok(())
}

pub fn settings_file_exists() -> bool {
    settings_path().exists()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            school_name: "Everest English School".to_string(),
            fiscal_year: "2080/81".to_string(),
            currency: "NPR".to_string(),
        };
        let json = serde_json::to_string_pretty(&settings).unwrap();
        std::fs::write(&path, &json).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let loaded: Settings = serde_json::from_str(&content).unwrap();
        assert_eq!(loaded.school_name, "Everest English School");
        assert_eq!(loaded.fiscal_year, "2080/81");
        assert_eq!(loaded.currency, "NPR");
    }

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert!(s.school_name.is_empty());
        assert_eq!(s.fiscal_year, "2081/82");
        assert_eq!(s.currency, "Rs.");
    }

    #[test]
    fn test_load_merges_with_defaults() {
        let json = r#"{"school_name": "Little Stars"}"#;
        let s: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(s.school_name, "Little Stars");
        assert_eq!(s.fiscal_year, "2081/82");
        assert_eq!(s.currency, "Rs.");
    }
}
