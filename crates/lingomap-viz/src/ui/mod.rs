//! UI components for the map view.
//!
//! This module contains rendering functions for overlays and widgets.

mod overlays;

pub use overlays::{draw_hover_card, draw_legend, draw_tile, to_color32};
