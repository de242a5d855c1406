//! Settings structures for the map UI.

/// Visual style toggles.
#[derive(Debug, Clone)]
pub struct SettingsStyle {
    /// Draw region names on tiles (vs hover-only).
    pub labels_always: bool,
    /// Tile radius in points.
    pub tile_radius: f32,
    /// Show the value legend in the sidebar.
    pub show_legend: bool,
}

impl Default for SettingsStyle {
    fn default() -> Self {
        Self {
            labels_always: false,
            tile_radius: 14.0,
            show_legend: true,
        }
    }
}
