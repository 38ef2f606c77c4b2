use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::color_utils::{parse_color_result, Rgba8};
use crate::error::SettingsError;

pub const MIN_PATTERN_SIZE: u32 = 10;
pub const MAX_PATTERN_SIZE: u32 = 500;
pub const PATTERN_SIZE_STEP: u32 = 10;

/// How patterns are drawn. Only renderers read this; the geometry engine
/// never sees it.
///
/// Field names follow the camelCase layout of the plugin's saved data, so
/// an existing `data.json` loads as-is. Missing fields fall back to the
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderSettings {
    /// Color of the first segment
    pub pattern_color_start: String,
    /// Color of the last segment
    pub pattern_color_end: String,
    /// Wiggle the strokes between frames
    pub animate_pattern: bool,
    /// Draw an arrow on each segment showing the drawing direction
    pub direction_indicator: bool,
    /// Canvas edge length in pixels
    pub pattern_size: u32,
    /// Stroke width in pattern units (one unit = one segment)
    pub stroke_width: f64,
    /// Roughness of animated strokes
    pub roughness: f64,
    /// Seed of the first animation frame
    pub seed: u64,
    /// Overlay the bounding box, centroid and vertices
    pub debug_overlay: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            pattern_color_start: "#7f6df2".to_string(),
            pattern_color_end: "#423975".to_string(),
            animate_pattern: true,
            direction_indicator: false,
            pattern_size: 500,
            stroke_width: 0.1,
            roughness: 1.0,
            seed: 1,
            debug_overlay: false,
        }
    }
}

impl RenderSettings {
    /// Read settings from a JSON file and validate them
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {path:?}"))?;
        let settings: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings file: {path:?}"))?;
        settings
            .validate()
            .with_context(|| format!("Invalid settings in {path:?}"))?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        self.start_color()?;
        self.end_color()?;

        if !(MIN_PATTERN_SIZE..=MAX_PATTERN_SIZE).contains(&self.pattern_size)
            || self.pattern_size % PATTERN_SIZE_STEP != 0
        {
            return Err(SettingsError::InvalidPatternSize(self.pattern_size));
        }

        for (field, value) in [("strokeWidth", self.stroke_width), ("roughness", self.roughness)] {
            if !value.is_finite() || value < 0.0 {
                return Err(SettingsError::NegativeValue { field, value });
            }
        }

        Ok(())
    }

    pub fn start_color(&self) -> Result<Rgba8, SettingsError> {
        parse_setting_color("patternColorStart", &self.pattern_color_start)
    }

    pub fn end_color(&self) -> Result<Rgba8, SettingsError> {
        parse_setting_color("patternColorEnd", &self.pattern_color_end)
    }

    /// Stroke roughness for the given settings; flat lines when not animating
    pub fn effective_roughness(&self) -> f64 {
        if self.animate_pattern {
            self.roughness
        } else {
            0.0
        }
    }

    /// Seed for animation frame `frame`. Still images reuse one seed.
    pub fn frame_seed(&self, frame: u64) -> u64 {
        if self.animate_pattern {
            self.seed.wrapping_add(frame)
        } else {
            self.seed
        }
    }
}

fn parse_setting_color(field: &'static str, value: &str) -> Result<Rgba8, SettingsError> {
    parse_color_result(value).map_err(|reason| SettingsError::InvalidColor {
        field,
        value: value.to_string(),
        reason,
    })
}
