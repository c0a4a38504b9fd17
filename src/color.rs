use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

/// Text colour of rows outside the comfort thresholds.
pub const DANGER: Color32 = Color32::from_rgb(220, 50, 50);
/// Temperature series, matches the dashboard's red line.
pub const TEMP_LINE: Color32 = Color32::from_rgb(255, 99, 132);
/// Humidity series, matches the dashboard's blue line.
pub const HUMID_LINE: Color32 = Color32::from_rgb(54, 162, 235);

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Location → Color32
// ---------------------------------------------------------------------------

/// Maps each location to a distinct colour for the table and selector.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
}

impl ColorMap {
    pub fn new(locations: &BTreeSet<String>) -> Self {
        let mapping = locations
            .iter()
            .cloned()
            .zip(generate_palette(locations.len()))
            .collect();
        ColorMap { mapping }
    }

    /// Look up the colour for a location; unknown ones are gray.
    pub fn color_for(&self, location: &str) -> Color32 {
        self.mapping.get(location).copied().unwrap_or(Color32::GRAY)
    }
}
