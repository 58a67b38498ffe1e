use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::mode::CursorShape;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub font: FontConfig,
    pub cursor: CursorConfig,
    pub window: WindowConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub size: f32,
    pub family: Option<String>,
    /// Row height in pixels; glyph metrics decide when unset.
    pub line_height: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    pub blink: bool,
    /// Blink period in milliseconds.
    pub blink_interval: u64,
    /// Bar/underline thickness in pixels.
    pub thickness: f32,
    /// Shape used before the editor sends its mode tables.
    pub style: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub columns: usize,
    pub rows: usize,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            size: 12.0,
            family: None,
            line_height: None,
        }
    }
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            blink: false,
            blink_interval: 1_000,
            thickness: 2.0,
            style: "block".to_owned(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            columns: 80,
            rows: 24,
        }
    }
}

/// Return the platform-specific configuration directory for `ori_vim`.
pub fn config_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join("ori_vim");
        }
        PathBuf::from(".").join("ori_vim")
    }
    #[cfg(not(target_os = "windows"))]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("ori_vim");
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".config").join("ori_vim");
        }
        PathBuf::from(".").join("ori_vim")
    }
}

/// Return the path to the config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Parse a cursor style string to `CursorShape`.
/// Accepts "block", "bar"/"beam"/"vertical", "underline"/"horizontal".
/// Defaults to Block.
pub fn parse_cursor_style(s: &str) -> CursorShape {
    match s.to_ascii_lowercase().as_str() {
        "bar" | "beam" | "vertical" => CursorShape::Vertical,
        "underline" | "horizontal" => CursorShape::Horizontal,
        _ => CursorShape::Block,
    }
}

impl Config {
    /// Load config from the default path. Returns defaults if the file
    /// doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let path = config_path();
        let data = match std::fs::read_to_string(&path) {
            Ok(d) => d,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    log::warn!("config: failed to read {}: {e}", path.display());
                }
                return Self::default();
            }
        };

        match toml::from_str(&data) {
            Ok(cfg) => {
                log::info!("config: loaded from {}", path.display());
                cfg
            }
            Err(e) => {
                log::warn!("config: parse error in {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Try to load config, returning an error message on failure.
    /// Unlike `load()`, this preserves the distinction between "file missing"
    /// and "parse error" so callers can keep the previous config on error.
    pub fn try_load() -> Result<Self, String> {
        let path = config_path();
        let data = std::fs::read_to_string(&path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
        toml::from_str(&data).map_err(|e| format!("parse error in {}: {e}", path.display()))
    }

    /// Save config to the default path. Creates the directory if needed.
    pub fn save(&self) {
        let dir = config_dir();
        if let Err(e) = std::fs::create_dir_all(&dir) {
            log::warn!("config: failed to create dir {}: {e}", dir.display());
            return;
        }

        let path = config_path();
        match toml::to_string_pretty(self) {
            Ok(data) => {
                if let Err(e) = std::fs::write(&path, data) {
                    log::warn!("config: failed to write {}: {e}", path.display());
                }
            }
            Err(e) => {
                log::warn!("config: serialize error: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).expect("serialize");
        let parsed: Config = toml::from_str(&toml_str).expect("deserialize");
        assert!((parsed.font.size - 12.0).abs() < f32::EPSILON);
        assert!(parsed.font.family.is_none());
        assert!(!parsed.cursor.blink);
        assert_eq!(parsed.cursor.blink_interval, 1_000);
        assert_eq!(parsed.cursor.style, "block");
        assert_eq!(parsed.window.columns, 80);
        assert_eq!(parsed.window.rows, 24);
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let toml_str = r#"
[font]
size = 14.0
family = "Fira Code"
"#;
        let parsed: Config = toml::from_str(toml_str).expect("deserialize");
        assert!((parsed.font.size - 14.0).abs() < f32::EPSILON);
        assert_eq!(parsed.font.family.as_deref(), Some("Fira Code"));
        // Other fields should be defaults
        assert_eq!(parsed.window.columns, 80);
        assert_eq!(parsed.cursor.blink_interval, 1_000);
    }

    #[test]
    fn empty_toml_gives_defaults() {
        let parsed: Config = toml::from_str("").expect("deserialize");
        assert!((parsed.font.size - 12.0).abs() < f32::EPSILON);
        assert_eq!(parsed.cursor.style, "block");
        assert_eq!(parsed.window.rows, 24);
    }

    #[test]
    fn cursor_config_from_toml() {
        let toml_str = r#"
[cursor]
blink = true
blink_interval = 500
style = "bar"
"#;
        let parsed: Config = toml::from_str(toml_str).expect("deserialize");
        assert!(parsed.cursor.blink);
        assert_eq!(parsed.cursor.blink_interval, 500);
        assert_eq!(parse_cursor_style(&parsed.cursor.style), CursorShape::Vertical);
    }

    #[test]
    fn parse_cursor_style_variants() {
        assert_eq!(parse_cursor_style("block"), CursorShape::Block);
        assert_eq!(parse_cursor_style("Block"), CursorShape::Block);
        assert_eq!(parse_cursor_style("bar"), CursorShape::Vertical);
        assert_eq!(parse_cursor_style("beam"), CursorShape::Vertical);
        assert_eq!(parse_cursor_style("underline"), CursorShape::Horizontal);
        assert_eq!(parse_cursor_style("horizontal"), CursorShape::Horizontal);
        assert_eq!(parse_cursor_style("unknown"), CursorShape::Block);
    }
}
