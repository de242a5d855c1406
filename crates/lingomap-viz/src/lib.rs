//! egui map view for Lingo-Map.
//!
//! Regions are drawn as a tile cartogram placed at approximate centroids and
//! filled from the layout's colour scale. Hovering a tile drives a
//! [`lingomap_client::HoverSession`]; the hover card is rendered from its state
//! each frame.

mod app;
mod geometry;
mod settings;
mod ui;

pub use app::LingoMapApp;
pub use geometry::{MapGeometry, Tile};
pub use settings::SettingsStyle;
