use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::palette;

/// Rendering configuration for one canvas session.
///
/// Only affects how things look; nothing here changes geometry or hit-testing.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub background_color: Color32,
    pub grid_color: Color32,
    pub handle_color: Color32,
    pub selection_border: Color32,
    /// Fill of a selection box dragged rightward.
    pub selection_positive: Color32,
    /// Fill of a selection box dragged leftward.
    pub selection_negative: Color32,
    pub handle_radius: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            background_color: palette::rgb(0x212529),
            grid_color: palette::rgb(0x343a40),
            handle_color: palette::rgb(0x4dabf7),
            selection_border: palette::rgb(0xf8f9fa),
            selection_positive: with_alpha(palette::rgb(0x339af0), 64),
            selection_negative: with_alpha(palette::rgb(0x51cf66), 64),
            handle_radius: 4.0,
        }
    }
}

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    let [r, g, b, _] = color.to_array();
    Color32::from_rgba_unmultiplied(r, g, b, alpha)
}

/// A palette name (or `#hex` literal) with an optional alpha override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<u8>,
}

impl ColorSpec {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            alpha: None,
        }
    }

    pub fn with_alpha(name: &str, alpha: u8) -> Self {
        Self {
            name: name.to_string(),
            alpha: Some(alpha),
        }
    }

    fn resolve(&self, field: &'static str) -> ConfigResult<Color32> {
        let color = palette::lookup(&self.name).map_err(|source| ConfigError::Palette { field, source })?;
        Ok(match self.alpha {
            Some(alpha) => with_alpha(color, alpha),
            None => color,
        })
    }
}

/// Serialized form of [`Settings`], colors given by palette name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsConfig {
    pub background_color: ColorSpec,
    pub grid_color: ColorSpec,
    pub handle_color: ColorSpec,
    pub selection_border: ColorSpec,
    pub selection_positive: ColorSpec,
    pub selection_negative: ColorSpec,
    pub handle_radius: f32,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            background_color: ColorSpec::named("gray_9"),
            grid_color: ColorSpec::named("gray_8"),
            handle_color: ColorSpec::named("blue_4"),
            selection_border: ColorSpec::named("gray_0"),
            selection_positive: ColorSpec::with_alpha("blue_5", 64),
            selection_negative: ColorSpec::with_alpha("green_5", 64),
            handle_radius: 4.0,
        }
    }
}

impl SettingsConfig {
    /// Looks every color up in the palette.
    pub fn resolve(&self) -> ConfigResult<Settings> {
        if !self.handle_radius.is_finite() || self.handle_radius < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "handle_radius",
                value: self.handle_radius,
            });
        }

        Ok(Settings {
            background_color: self.background_color.resolve("background_color")?,
            grid_color: self.grid_color.resolve("grid_color")?,
            handle_color: self.handle_color.resolve("handle_color")?,
            selection_border: self.selection_border.resolve("selection_border")?,
            selection_positive: self.selection_positive.resolve("selection_positive")?,
            selection_negative: self.selection_negative.resolve("selection_negative")?,
            handle_radius: self.handle_radius,
        })
    }
}
