pub use colored::{Color, Colorize};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorScheme {
    pub foreground: Option<ColorWrapper>,
    pub background: Option<ColorWrapper>,
    pub bold: bool,
    pub underline: bool,
}

// Wrapper type for Color that implements Serialize/Deserialize
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct ColorWrapper(Color);

impl ColorWrapper {
    pub fn color(&self) -> Color {
        self.0
    }
}

impl From<ColorWrapper> for String {
    fn from(wrapper: ColorWrapper) -> Self {
        format!("{:?}", wrapper.0)
    }
}

impl From<String> for ColorWrapper {
    fn from(s: String) -> Self {
        ColorWrapper(Color::from_str(&s).unwrap_or(Color::White))
    }
}

impl From<Color> for ColorWrapper {
    fn from(color: Color) -> Self {
        ColorWrapper(color)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    Dark,
    Light,
    Monochrome,
    Plain,
}

/// Per-element replacements for a named theme, read from the
/// `[display.overrides]` config section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<ColorScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<ColorScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ColorScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<ColorScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<ColorScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<ColorScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<ColorScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<ColorScheme>,
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub header: ColorScheme,
    pub timestamp: ColorScheme,
    pub error: ColorScheme,
    pub warning: ColorScheme,
    pub info: ColorScheme,
    pub debug: ColorScheme,
    pub highlight: ColorScheme,
    pub success: ColorScheme,
}

fn fg(color: Color) -> ColorScheme {
    ColorScheme {
        foreground: Some(color.into()),
        ..Default::default()
    }
}

fn fg_bold(color: Color) -> ColorScheme {
    ColorScheme {
        foreground: Some(color.into()),
        bold: true,
        ..Default::default()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            header: fg_bold(Color::Blue),
            timestamp: fg(Color::BrightBlack),
            error: fg_bold(Color::Red),
            warning: fg(Color::Yellow),
            info: fg(Color::Green),
            debug: fg(Color::Cyan),
            highlight: ColorScheme {
                foreground: Some(ColorWrapper(Color::Black)),
                background: Some(ColorWrapper(Color::Yellow)),
                bold: true,
                underline: false,
            },
            success: fg(Color::Green),
        }
    }
}

impl Theme {
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self::dark(),
            ThemeName::Light => Self::light(),
            ThemeName::Monochrome => Self::monochrome(),
            ThemeName::Plain => Self::plain(),
        }
    }

    pub fn dark() -> Self {
        Self::default()
    }

    pub fn light() -> Self {
        Self {
            header: fg_bold(Color::BrightBlue),
            timestamp: fg(Color::Black),
            error: fg_bold(Color::BrightRed),
            warning: fg(Color::BrightYellow),
            info: fg(Color::BrightGreen),
            debug: fg(Color::BrightCyan),
            highlight: ColorScheme {
                foreground: None,
                background: Some(ColorWrapper(Color::BrightYellow)),
                bold: true,
                underline: false,
            },
            success: fg(Color::BrightGreen),
        }
    }

    pub fn monochrome() -> Self {
        let bold = ColorScheme {
            bold: true,
            ..Default::default()
        };
        Self {
            header: ColorScheme {
                bold: true,
                underline: true,
                ..Default::default()
            },
            timestamp: ColorScheme::default(),
            error: bold.clone(),
            warning: bold,
            info: ColorScheme::default(),
            debug: ColorScheme::default(),
            highlight: ColorScheme {
                underline: true,
                ..Default::default()
            },
            success: ColorScheme::default(),
        }
    }

    /// No styling at all; output is byte-for-byte the unstyled text.
    pub fn plain() -> Self {
        Self {
            header: ColorScheme::default(),
            timestamp: ColorScheme::default(),
            error: ColorScheme::default(),
            warning: ColorScheme::default(),
            info: ColorScheme::default(),
            debug: ColorScheme::default(),
            highlight: ColorScheme::default(),
            success: ColorScheme::default(),
        }
    }

    /// Replaces every element that `overrides` sets.
    pub fn with_overrides(mut self, overrides: &ThemeOverrides) -> Self {
        let slots = [
            (&mut self.header, &overrides.header),
            (&mut self.timestamp, &overrides.timestamp),
            (&mut self.error, &overrides.error),
            (&mut self.warning, &overrides.warning),
            (&mut self.info, &overrides.info),
            (&mut self.debug, &overrides.debug),
            (&mut self.highlight, &overrides.highlight),
            (&mut self.success, &overrides.success),
        ];
        for (scheme, replacement) in slots {
            if let Some(replacement) = replacement {
                *scheme = replacement.clone();
            }
        }
        self
    }

    /// Scheme for a level tag. Matching here is display-only, so any casing
    /// of a known level gets its colour.
    pub fn for_level(&self, level: &str) -> &ColorScheme {
        match level.to_ascii_uppercase().as_str() {
            "ERROR" | "FATAL" | "CRITICAL" => &self.error,
            "WARNING" | "WARN" => &self.warning,
            "INFO" => &self.info,
            "DEBUG" | "TRACE" => &self.debug,
            _ => &self.timestamp,
        }
    }
}

impl ColorScheme {
    pub fn is_plain(&self) -> bool {
        self.foreground.is_none() && self.background.is_none() && !self.bold && !self.underline
    }

    pub fn apply(&self, text: &str) -> colored::ColoredString {
        let mut colored_text: colored::ColoredString = text.into();

        if let Some(fg) = &self.foreground {
            colored_text = colored_text.color(fg.0);
        }
        if let Some(bg) = &self.background {
            colored_text = colored_text.on_color(bg.0);
        }
        if self.bold {
            colored_text = colored_text.bold();
        }
        if self.underline {
            colored_text = colored_text.underline();
        }

        colored_text
    }

    /// Like [`apply`](Self::apply) but returns an owned string, skipping
    /// `colored` entirely for a plain scheme.
    pub fn paint(&self, text: &str) -> String {
        if self.is_plain() {
            text.to_string()
        } else {
            self.apply(text).to_string()
        }
    }
}
