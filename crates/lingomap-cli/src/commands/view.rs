//! Native egui map command.
//!
//! Launches a desktop window with the language map.

use std::sync::Arc;

use anyhow::{Context, Result};
use eframe::{run_native, NativeOptions};
use tracing::info;

use lingomap_client::HoverSession;
use lingomap_viz::LingoMapApp;

use crate::config::Config;

/// Execute the view command. Must run on a multi-threaded tokio runtime.
pub fn execute(config: &Config) -> Result<()> {
    let data = config.region_data()?;
    let layout = config.layout.clone();

    // Fail before opening a window if the layout is unusable
    layout
        .color_scale(&data)
        .context("Invalid map layout colours")?;
    layout
        .stroke_colors()
        .context("Invalid map layout colours")?;

    let client = config.client()?;
    let session = HoverSession::new(
        Arc::new(client),
        tokio::runtime::Handle::current(),
        config.num_languages,
    );

    info!(
        endpoint = %config.endpoint,
        regions = data.len(),
        "launching map"
    );

    let options = NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_title(layout.title.clone()),
        ..Default::default()
    };

    run_native(
        "Lingo-Map",
        options,
        Box::new(move |cc| {
            let app = LingoMapApp::new(cc, data, layout, session)?;
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Visualization error: {}", e))?;

    Ok(())
}
