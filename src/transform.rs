//! Screen ↔ world mapping for the canvas viewport.
//!
//! ```text
//! screen = world * scale + scroll
//! world  = (screen - scroll) / scale
//! ```

use crate::config::ViewConfig;
use crate::geometry::{Rect, ScreenPoint, ScreenRect, ScreenVector, WorldPoint, WorldRect, WorldVector};

pub const DEFAULT_SCALE_MIN: f32 = 0.1;
pub const DEFAULT_SCALE_MAX: f32 = 15.0;
pub const DEFAULT_ZOOM_SENSITIVITY: f32 = 0.01;

/// Scroll offset (screen space) and clamped scale of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    scroll: ScreenVector,
    scale: f32,
    scale_min: f32,
    scale_max: f32,
    zoom_sensitivity: f32,
}

impl Default for CanvasTransform {
    fn default() -> Self {
        Self::new(DEFAULT_SCALE_MIN, DEFAULT_SCALE_MAX)
    }
}

impl CanvasTransform {
    /// Identity view with the given scale bounds.
    ///
    /// The bounds are swapped if given in the wrong order so the clamp range is
    /// always valid. Non-finite or non-positive bounds fall back to the
    /// defaults.
    pub fn new(scale_min: f32, scale_max: f32) -> Self {
        let usable = |v: f32| v.is_finite() && v > 0.0;
        let (scale_min, scale_max) = if !(usable(scale_min) && usable(scale_max)) {
            (DEFAULT_SCALE_MIN, DEFAULT_SCALE_MAX)
        } else if scale_min <= scale_max {
            (scale_min, scale_max)
        } else {
            (scale_max, scale_min)
        };
        Self {
            scroll: ScreenVector::ZERO,
            scale: 1.0f32.clamp(scale_min, scale_max),
            scale_min,
            scale_max,
            zoom_sensitivity: DEFAULT_ZOOM_SENSITIVITY,
        }
    }

    pub fn from_config(config: &ViewConfig) -> Self {
        Self::new(config.scale_min, config.scale_max).with_zoom_sensitivity(config.zoom_sensitivity)
    }

    /// Non-finite or negative sensitivities are ignored.
    pub fn with_zoom_sensitivity(mut self, sensitivity: f32) -> Self {
        if sensitivity.is_finite() && sensitivity >= 0.0 {
            self.zoom_sensitivity = sensitivity;
        }
        self
    }

    pub fn with_scroll(mut self, scroll: ScreenVector) -> Self {
        if scroll.x.is_finite() && scroll.y.is_finite() {
            self.scroll = scroll;
        }
        self
    }

    /// Clamped into the scale bounds; NaN leaves the scale unchanged.
    pub fn with_scale(mut self, scale: f32) -> Self {
        if !scale.is_nan() {
            self.scale = scale.clamp(self.scale_min, self.scale_max);
        }
        self
    }

    pub fn scroll(&self) -> ScreenVector {
        self.scroll
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn scale_min(&self) -> f32 {
        self.scale_min
    }

    pub fn scale_max(&self) -> f32 {
        self.scale_max
    }

    pub fn to_screen(&self, p: WorldPoint) -> ScreenPoint {
        ScreenPoint::new(p.x * self.scale + self.scroll.x, p.y * self.scale + self.scroll.y)
    }

    pub fn to_world(&self, p: ScreenPoint) -> WorldPoint {
        WorldPoint::new((p.x - self.scroll.x) / self.scale, (p.y - self.scroll.y) / self.scale)
    }

    pub fn to_screen_vector(&self, v: WorldVector) -> ScreenVector {
        ScreenVector::new(v.x * self.scale, v.y * self.scale)
    }

    pub fn to_screen_rect(&self, r: &WorldRect) -> ScreenRect {
        Rect::new(self.to_screen(r.topleft), self.to_screen_vector(r.size))
    }

    pub fn to_world_rect(&self, r: &ScreenRect) -> WorldRect {
        Rect::new(
            self.to_world(r.topleft),
            WorldVector::new(r.size.x / self.scale, r.size.y / self.scale),
        )
    }

    /// Copy of this transform with an uncommitted pan applied.
    pub fn panned(&self, delta: ScreenVector) -> Self {
        let mut t = *self;
        t.scroll += delta;
        t
    }

    pub fn pan_by(&mut self, delta: ScreenVector) {
        self.scroll += delta;
    }

    /// Back to `scroll = 0`, `scale = 1`. Returns whether anything changed.
    pub fn reset(&mut self) -> bool {
        let reset = Self {
            scroll: ScreenVector::ZERO,
            scale: 1.0f32.clamp(self.scale_min, self.scale_max),
            ..*self
        };
        let changed = reset != *self;
        *self = reset;
        changed
    }

    /// Zooms about `cursor` so the world point under it stays put.
    ///
    /// Negative deltas zoom out, positive zoom in. Returns `false` when the
    /// view did not change (zero delta or already at the scale limit).
    pub fn zoom(&mut self, cursor: ScreenPoint, raw_delta: f32) -> bool {
        if raw_delta == 0.0 || !raw_delta.is_finite() || !cursor.x.is_finite() || !cursor.y.is_finite() {
            return false;
        }

        let focus = self.to_world(cursor);

        let factor = 1.0 + self.zoom_sensitivity * raw_delta.abs();
        let scale = if raw_delta < 0.0 {
            self.scale / factor
        } else {
            self.scale * factor
        };
        let scale = scale.clamp(self.scale_min, self.scale_max);
        if scale == self.scale {
            return false;
        }
        self.scale = scale;

        let focus_after = self.to_screen(focus);
        self.scroll += cursor - focus_after;
        true
    }
}

/// Canonical wheel delta: `rotation * step / reference_unit`.
pub fn normalize_wheel(rotation: f32, step: f32, reference_unit: f32) -> f32 {
    if reference_unit <= 0.0 || !reference_unit.is_finite() {
        return 0.0;
    }
    rotation * step / reference_unit
}
