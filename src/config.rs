use std::fs;
use std::path::Path;

use egui::Vec2;
use serde::{Deserialize, Serialize};

use crate::element::{DEFAULT_BOX_HEIGHT, DEFAULT_BOX_WIDTH, MIN_BOX_HEIGHT, MIN_BOX_WIDTH};
use crate::error::ConfigError;

/// How the snapping engine picks a guide when several are within range on
/// the same axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SnapPriority {
    /// Smallest distance wins; ties go to the earliest guide
    #[default]
    Nearest,
    /// Earliest matching guide in store order wins
    First,
    /// Latest matching guide in store order wins
    Last,
}

/// Tunables for the editor. Every field has a default, so a config file
/// only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Snap when the anchor is strictly closer than this to a guide
    pub snap_threshold: f32,
    pub snap_priority: SnapPriority,
    pub min_box_width: f32,
    pub min_box_height: f32,
    pub default_box_size: [f32; 2],
    pub paste_offset: [f32; 2],
    pub resize_handle_size: f32,
    pub delete_control_size: f32,
    pub text_field_margin: f32,
    /// How close the pointer must be to grab a guide
    pub guide_hit_tolerance: f32,
    /// Keep resized boxes inside the surface's right and bottom edges
    pub clamp_resize_to_surface: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            snap_threshold: 8.0,
            snap_priority: SnapPriority::Nearest,
            min_box_width: MIN_BOX_WIDTH,
            min_box_height: MIN_BOX_HEIGHT,
            default_box_size: [DEFAULT_BOX_WIDTH, DEFAULT_BOX_HEIGHT],
            paste_offset: [20.0, 20.0],
            resize_handle_size: 10.0,
            delete_control_size: 14.0,
            text_field_margin: 5.0,
            guide_hit_tolerance: 4.0,
            clamp_resize_to_surface: true,
        }
    }
}

impl EditorConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("snap_threshold", self.snap_threshold),
            ("min_box_width", self.min_box_width),
            ("min_box_height", self.min_box_height),
            ("default_box_size[0]", self.default_box_size[0]),
            ("default_box_size[1]", self.default_box_size[1]),
            ("resize_handle_size", self.resize_handle_size),
            ("delete_control_size", self.delete_control_size),
            ("guide_hit_tolerance", self.guide_hit_tolerance),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }
        if !(self.text_field_margin.is_finite() && self.text_field_margin >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "text_field_margin must not be negative, got {}",
                self.text_field_margin
            )));
        }
        if self.paste_offset.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::Invalid("paste_offset must be finite".to_owned()));
        }
        Ok(())
    }

    pub fn min_box_size(&self) -> Vec2 {
        Vec2::new(self.min_box_width, self.min_box_height)
    }

    pub fn default_box_size(&self) -> Vec2 {
        Vec2::from(self.default_box_size)
    }

    pub fn paste_offset(&self) -> Vec2 {
        Vec2::from(self.paste_offset)
    }
}
