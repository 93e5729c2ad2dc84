//! Color palette, filesystem paths, and user settings for Repotrend.
//!
//! The palette is a small, opinionated theme used throughout the user
//! interface. Settings are optional: a missing or partial `settings.toml`
//! falls back to defaults, and command-line flags win over file values.
use ratatui::style::Color;
use std::path::{Path, PathBuf};

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable
/// for direct use with widgets and styles.
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Darkest background shade for deep contrast areas.
    pub crust: Color,
    /// Subtle surface color for component backgrounds.
    pub surface2: Color,
    /// Muted overlay line/border color (primary).
    pub overlay1: Color,
    /// Muted overlay line/border color (secondary).
    pub overlay2: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Accent color commonly used for selection and interactive highlights.
    pub sapphire: Color,
    /// Accent color for emphasized headings.
    pub mauve: Color,
    /// Success/positive state color.
    pub green: Color,
    /// Warning/attention state color.
    pub yellow: Color,
    /// Error/danger state color.
    pub red: Color,
    /// Accent color for subtle emphasis and borders.
    pub lavender: Color,
}

/// Construct a [`Color::Rgb`] from an 8-bit RGB triplet.
const fn hex(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Return the application's theme palette.
pub const fn theme() -> Theme {
    Theme {
        base: hex((0x1e, 0x1e, 0x2e)),
        crust: hex((0x11, 0x11, 0x1b)),
        surface2: hex((0x58, 0x5b, 0x70)),
        overlay1: hex((0x7f, 0x84, 0x9c)),
        overlay2: hex((0x93, 0x99, 0xb2)),
        text: hex((0xcd, 0xd6, 0xf4)),
        subtext0: hex((0xa6, 0xad, 0xc8)),
        sapphire: hex((0x74, 0xc7, 0xec)),
        mauve: hex((0xcb, 0xa6, 0xf7)),
        green: hex((0xa6, 0xe3, 0xa1)),
        yellow: hex((0xf9, 0xe2, 0xaf)),
        red: hex((0xf3, 0x8b, 0xa8)),
        lavender: hex((0xb4, 0xbe, 0xfe)),
    }
}

/// Return `$HOME/.config/repotrend`, ensured to exist, falling back to
/// `$XDG_CONFIG_HOME` when HOME is unavailable.
pub fn config_dir() -> PathBuf {
    let base = std::env::var("HOME")
        .map(|h| Path::new(&h).join(".config"))
        .or_else(|_| std::env::var("XDG_CONFIG_HOME").map(PathBuf::from))
        .unwrap_or_else(|_| std::env::temp_dir());
    let dir = base.join("repotrend");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config, ensured to exist.
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// User settings loaded at startup from `settings.toml`.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Size of the creation-date window in days.
    pub days: u32,
    /// Default tracing filter when `RUST_LOG` and `--log-level` are unset.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            days: 7,
            log_level: "info".to_string(),
        }
    }
}

/// What: Load settings from a specific file, tolerating absence and parse
/// errors.
///
/// Inputs:
/// - `path`: Settings file location
///
/// Output:
/// - Parsed settings, or defaults when the file is missing or invalid. A
///   parse failure is logged rather than aborting startup.
pub fn load_settings_from(path: &Path) -> Settings {
    match std::fs::read_to_string(path) {
        Ok(text) => match toml::from_str::<Settings>(&text) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "invalid settings file; using defaults");
                Settings::default()
            }
        },
        Err(_) => Settings::default(),
    }
}

/// Load settings from the user config directory.
pub fn settings() -> Settings {
    load_settings_from(&config_dir().join("settings.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// What: Settings parse from TOML with partial keys filled by defaults
    ///
    /// - Input: File setting only `days = 14`
    /// - Output: days=14, log_level default "info"
    #[test]
    fn settings_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.toml");
        let mut f = std::fs::File::create(&path).expect("create settings");
        writeln!(f, "days = 14").expect("write settings");
        let s = load_settings_from(&path);
        assert_eq!(s.days, 14);
        assert_eq!(s.log_level, "info");
    }

    /// What: Missing and invalid settings files fall back to defaults
    ///
    /// - Input: Nonexistent path; file with invalid TOML
    /// - Output: Default settings in both cases
    #[test]
    fn settings_missing_or_invalid_falls_back() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("nope.toml");
        let s = load_settings_from(&missing);
        assert_eq!(s.days, 7);

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "days = \"soon\"").expect("write bad settings");
        let s = load_settings_from(&bad);
        assert_eq!(s.days, 7);
        assert_eq!(s.log_level, "info");
    }
}
