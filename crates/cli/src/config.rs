//! Configuration file loading and environment variable handling.
//!
//! Precedence: CLI args > Environment vars > Config file > Defaults

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use dtime_core::RenderVariant;

/// Default config file content for `--config-init`.
pub const DEFAULT_CONFIG: &str = r#"# dtime configuration
# See: dtime --help for all options

# Style copied with --copy when --style is not given (R, t, d, D, f, F)
style = "R"

# Interpret inputs without an offset as UTC instead of local time
utc = false

# Always copy the selected markup to the clipboard
copy = false

# Disable colored output
no_color = false
"#;

/// Configuration loaded from file and environment.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub style: Option<String>,
    pub utc: Option<bool>,
    pub copy: Option<bool>,
    pub no_color: Option<bool>,
}

impl Config {
    /// Get the config file path.
    ///
    /// - Linux/macOS: `~/.config/dtime/config.toml`
    /// - Windows: `%APPDATA%\dtime\config.toml`
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dtime").join("config.toml"))
    }

    /// Load config from file. Returns default if file doesn't exist.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };

        let Ok(contents) = fs::read_to_string(&path) else {
            return Self::default();
        };

        toml::from_str(&contents).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// Read value from environment variable.
    fn env_var<T: std::str::FromStr>(name: &str) -> Option<T> {
        std::env::var(name).ok()?.parse().ok()
    }

    /// Get the default style with precedence: env > config > default.
    ///
    /// Unknown style codes fall back to the relative style.
    pub fn style(&self) -> RenderVariant {
        std::env::var("DTIME_STYLE")
            .ok()
            .or_else(|| self.style.clone())
            .and_then(|s| parse_style(&s))
            .unwrap_or(RenderVariant::Relative)
    }

    /// Get utc with precedence: env > config > default.
    pub fn utc(&self) -> bool {
        Self::env_var("DTIME_UTC").or(self.utc).unwrap_or(false)
    }

    /// Get copy with precedence: env > config > default.
    pub fn copy(&self) -> bool {
        Self::env_var("DTIME_COPY").or(self.copy).unwrap_or(false)
    }

    /// Get no_color with precedence: env > config > default.
    ///
    /// Respects the `NO_COLOR` standard (https://no-color.org/).
    pub fn no_color(&self) -> bool {
        // NO_COLOR is a standard - presence means disable color
        if std::env::var("NO_COLOR").is_ok() {
            return true;
        }
        if std::env::var("DTIME_NO_COLOR").is_ok() {
            return true;
        }
        self.no_color.unwrap_or(false)
    }
}

/// Parse a single-letter style code (`R`, `t`, `d`, `D`, `f`, `F`).
pub fn parse_style(code: &str) -> Option<RenderVariant> {
    let mut chars = code.trim().chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    RenderVariant::from_style_code(c)
}

/// Create a default config file at the standard location.
pub fn init_config() -> Result<PathBuf, String> {
    let path = Config::path().ok_or("Cannot determine config directory")?;

    if path.exists() {
        return Err(format!("Config file already exists: {}", path.display()));
    }

    // Create parent directory
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("Failed to create directory: {}", e))?;
    }

    fs::write(&path, DEFAULT_CONFIG).map_err(|e| format!("Failed to write config: {}", e))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid_toml() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).expect("DEFAULT_CONFIG should parse");
        assert_eq!(config.style, Some("R".to_string()));
        assert_eq!(config.utc, Some(false));
        assert_eq!(config.copy, Some(false));
        assert_eq!(config.no_color, Some(false));
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
utc = true
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.utc, Some(true));
        assert_eq!(config.style, None);
        assert_eq!(config.copy, None);
    }

    #[test]
    fn test_parse_style() {
        assert_eq!(parse_style("R"), Some(RenderVariant::Relative));
        assert_eq!(parse_style("d"), Some(RenderVariant::ShortDate));
        assert_eq!(parse_style(" D "), Some(RenderVariant::LongDate));
        assert_eq!(parse_style("F"), Some(RenderVariant::LongDateShortTimeWeekday));
        assert_eq!(parse_style("r"), None);
        assert_eq!(parse_style("RR"), None);
        assert_eq!(parse_style(""), None);
    }
}
