//! Region listing command.

use anyhow::{Context, Result};

use crate::config::Config;

/// Execute the regions command.
pub fn execute(config: &Config, json: bool) -> Result<()> {
    let data = config.region_data()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    let scale = config
        .layout
        .color_scale(&data)
        .context("Invalid map layout colours")?;

    println!("{:<28} {:>8}  {}", "Region", config.layout.hover_title, "Colour");
    println!("{:-<48}", "");
    for region in data.regions() {
        println!(
            "{:<28} {:>8}  {}",
            region.name,
            region.value,
            scale.color_for(Some(region.value))
        );
    }
    println!();
    println!("{} regions", data.len());

    Ok(())
}
