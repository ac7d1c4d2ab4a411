//! Radial ambient temperature field.

use petri_core::{Position, WorldConfig};

/// Deterministic temperature field over the dish, coldest at the center.
///
/// Temperature rises linearly with Euclidean distance from the grid center,
/// clamped at half the minor dimension, and spans `temperature_span` units
/// centered on zero (the default span of 20 yields -10 at the center and +10
/// at the rim).
#[derive(Debug, Clone)]
pub struct TemperatureField {
    center_x: f64,
    center_y: f64,
    clamp_radius: f64,
    span: i32,
}

impl TemperatureField {
    pub fn from_config(config: &WorldConfig) -> Self {
        Self {
            center_x: (config.width / 2) as f64,
            center_y: (config.height / 2) as f64,
            clamp_radius: (config.width.min(config.height) / 2) as f64,
            span: config.temperature_span,
        }
    }

    /// Ambient temperature at a grid position
    pub fn at(&self, pos: Position) -> i32 {
        let dx = pos.x as f64 - self.center_x;
        let dy = pos.y as f64 - self.center_y;
        let dist = (dx * dx + dy * dy).sqrt().min(self.clamp_radius);
        (dist / self.clamp_radius * self.span as f64).floor() as i32 - self.span / 2
    }
}
