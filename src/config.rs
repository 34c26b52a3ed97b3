use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::settings::{Settings, SettingsConfig};
use crate::transform::{DEFAULT_SCALE_MAX, DEFAULT_SCALE_MIN, DEFAULT_ZOOM_SENSITIVITY};

/// Viewport behaviour: zoom limits, wheel handling and hit tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub scale_min: f32,
    pub scale_max: f32,
    /// Per-unit growth of the zoom factor: `factor = 1 + sensitivity * |delta|`.
    pub zoom_sensitivity: f32,
    /// Screen-space margin added around shapes when hit-testing.
    pub hit_tolerance: f32,
    /// Grid spacing in world units.
    pub grid_spacing: f32,
    /// Raw wheel amount that counts as one zoom step.
    pub wheel_reference_unit: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            scale_min: DEFAULT_SCALE_MIN,
            scale_max: DEFAULT_SCALE_MAX,
            zoom_sensitivity: DEFAULT_ZOOM_SENSITIVITY,
            hit_tolerance: 4.0,
            grid_spacing: 20.0,
            wheel_reference_unit: 10.0,
        }
    }
}

impl ViewConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.scale_min.is_finite() && self.scale_max.is_finite())
            || self.scale_min <= 0.0
            || self.scale_min > self.scale_max
        {
            return Err(ConfigError::InvalidScaleBounds {
                min: self.scale_min,
                max: self.scale_max,
            });
        }

        for (field, value) in [
            ("zoom_sensitivity", self.zoom_sensitivity),
            ("hit_tolerance", self.hit_tolerance),
            ("grid_spacing", self.grid_spacing),
            ("wheel_reference_unit", self.wheel_reference_unit),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }
        Ok(())
    }
}

/// Everything a canvas needs from the outside world, loadable from JSON.
///
/// ```json
/// {
///   "settings": { "background_color": { "name": "gray_9" }, "handle_radius": 5.0 },
///   "view": { "scale_max": 8.0 }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub settings: SettingsConfig,
    pub view: ViewConfig,
}

impl CanvasConfig {
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.view.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Resolves the palette-named colors into concrete [`Settings`].
    pub fn resolve_settings(&self) -> ConfigResult<Settings> {
        self.settings.resolve()
    }
}
