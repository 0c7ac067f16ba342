//! Tonal surface theme with a warm amber accent.
//!
//! The theme is a single TOML file holding both dark and light variants.
//! A user copy in `~/.config/cineradar/theme.toml` replaces the embedded one.

mod catalog;
mod colors;

pub use catalog::*;
pub use colors::*;

use iced::Theme;

/// Embedded default theme TOML source (contains both dark and light).
pub(crate) const DEFAULT_THEME_TOML: &str = include_str!("../assets/themes/default.toml");

/// A fully loaded theme with both appearance variants.
#[derive(Debug, Clone)]
pub struct CineRadarTheme {
    pub name: String,
    pub dark: ColorScheme,
    pub light: ColorScheme,
}

impl CineRadarTheme {
    /// Load a theme from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        let file: ThemeFile =
            toml::from_str(toml_str).map_err(|e| format!("theme parse error: {e}"))?;
        Ok(Self {
            name: file.meta.name.clone(),
            dark: ColorScheme::from_variant(&file.dark),
            light: ColorScheme::from_variant(&file.light),
        })
    }

    /// The user's theme file if it exists and parses, else the embedded one.
    pub fn load() -> Self {
        if let Some(path) = user_theme_path().filter(|p| p.exists()) {
            match std::fs::read_to_string(&path)
                .map_err(|e| e.to_string())
                .and_then(|content| Self::from_toml(&content))
            {
                Ok(theme) => return theme,
                Err(e) => tracing::warn!("Ignoring theme {}: {e}", path.display()),
            }
        }
        Self::default_theme()
    }

    pub fn default_theme() -> Self {
        Self::from_toml(DEFAULT_THEME_TOML).expect("embedded default theme is valid TOML")
    }

    /// Get the color scheme for a resolved mode (Dark or Light).
    pub fn colors(&self, mode: ThemeMode) -> &ColorScheme {
        match mode {
            ThemeMode::Light => &self.light,
            // Dark is the fallback for both Dark and System.
            _ => &self.dark,
        }
    }

    /// Build the iced Theme for a given mode.
    pub fn iced_theme(&self, mode: ThemeMode) -> Theme {
        build_theme(&self.name, self.colors(mode))
    }
}

/// Resolve `ThemeMode::System` to a concrete Dark or Light.
pub fn resolve_mode(mode: ThemeMode) -> ThemeMode {
    match mode {
        ThemeMode::System => match dark_light::detect() {
            Ok(dark_light::Mode::Light) => ThemeMode::Light,
            _ => ThemeMode::Dark,
        },
        other => other,
    }
}

fn user_theme_path() -> Option<std::path::PathBuf> {
    directories::ProjectDirs::from("", "", "cineradar")
        .map(|dirs| dirs.config_dir().join("theme.toml"))
}

/// Build the iced Theme from a ColorScheme.
pub fn build_theme(name: &str, cs: &ColorScheme) -> Theme {
    use iced::theme::Palette;

    Theme::custom(
        name.to_string(),
        Palette {
            background: cs.surface,
            text: cs.on_surface,
            primary: cs.primary,
            success: cs.status_completed,
            warning: cs.tertiary,
            danger: cs.error,
        },
    )
}
