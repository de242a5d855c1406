//! One-shot lookup command.
//!
//! Runs the same hover path the map uses and prints the resulting card.

use std::sync::Arc;

use anyhow::{bail, Result};

use lingomap_client::HoverSession;
use lingomap_core::{LookupStatus, Region};

use crate::config::Config;

/// Execute the lookup command.
pub async fn execute(config: &Config, region: &str, count: Option<u32>, html: bool) -> Result<()> {
    let data = config.region_data()?;
    let client = config.client()?;
    let mut session = HoverSession::new(
        Arc::new(client),
        tokio::runtime::Handle::current(),
        count.unwrap_or(config.num_languages),
    );

    session.hover(region);
    session.settle().await;

    if let LookupStatus::Failed(message) = session.controller().status() {
        bail!("{message}");
    }

    // Regions missing from the dataset still get a card, just without a value
    let known = data.get(region);
    let target = known.clone().unwrap_or_else(|| Region {
        name: region.to_string(),
        value: 0.0,
        centroid: None,
    });
    let mut info = session.render(&target);
    if known.is_none() {
        info.label = region.to_string();
    }

    if html {
        println!("{}", info.to_html()?);
        return Ok(());
    }

    let mut lines = info.to_text();
    if lines.len() == 1 {
        lines.push("  (no languages returned)".to_string());
    }
    for line in lines {
        println!("{line}");
    }

    Ok(())
}
