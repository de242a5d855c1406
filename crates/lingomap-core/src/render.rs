//! Hover card rendering.
//!
//! [`render_hover`] is a pure read of controller state: calling it any number
//! of times per frame never issues a lookup.

use askama::Template;

use crate::error::CoreResult;
use crate::hover::{HoverController, LookupStatus};
use crate::region::Region;

/// What the hover card shows below the region label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverBody {
    /// Label only.
    None,
    /// Lookup in flight.
    Loading,
    /// Ranked languages, one `"<name>: <count>"` line each.
    Languages { title: String, lines: Vec<String> },
    /// Lookup failed. Displayed like [`HoverBody::None`].
    Failed(String),
}

/// Rendered hover card for one region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverInfo {
    pub region: String,
    /// `"<name> <value>"`.
    pub label: String,
    pub body: HoverBody,
}

/// Build the hover card for `region` against the controller's current state.
pub fn render_hover(region: &Region, controller: &HoverController) -> HoverInfo {
    let label = format!("{} {}", region.name, region.value);

    let body = if !controller.is_hovered(&region.name) {
        HoverBody::None
    } else {
        match controller.status() {
            LookupStatus::Loading => HoverBody::Loading,
            LookupStatus::Ready if !controller.results().is_empty() => HoverBody::Languages {
                title: format!(
                    "Top {} Most Spoken Languages in {}",
                    controller.num_languages(),
                    region.name
                ),
                lines: controller
                    .results()
                    .iter()
                    .take(controller.num_languages() as usize)
                    .map(|entry| entry.display_line())
                    .collect(),
            },
            LookupStatus::Failed(message) => HoverBody::Failed(message.clone()),
            LookupStatus::Ready | LookupStatus::Idle => HoverBody::None,
        }
    };

    HoverInfo {
        region: region.name.clone(),
        label,
        body,
    }
}

#[derive(Template)]
#[template(path = "hover_card.html")]
struct HoverCardTemplate<'a> {
    label: &'a str,
    loading: bool,
    title: &'a str,
    lines: &'a [String],
}

impl HoverInfo {
    pub fn is_loading(&self) -> bool {
        self.body == HoverBody::Loading
    }

    /// Language lines, empty unless the body is [`HoverBody::Languages`].
    pub fn lines(&self) -> &[String] {
        match &self.body {
            HoverBody::Languages { lines, .. } => lines,
            _ => &[],
        }
    }

    /// Plain-text rendering, one display line per entry.
    pub fn to_text(&self) -> Vec<String> {
        let mut out = vec![self.label.clone()];
        match &self.body {
            HoverBody::Loading => out.push("Loading...".to_string()),
            HoverBody::Languages { title, lines } => {
                out.push(title.clone());
                out.extend(lines.iter().map(|l| format!("  {l}")));
            }
            HoverBody::None | HoverBody::Failed(_) => {}
        }
        out
    }

    /// HTML markup for embedding the card in a page. Text is escaped.
    pub fn to_html(&self) -> CoreResult<String> {
        let title = match &self.body {
            HoverBody::Languages { title, .. } => title.as_str(),
            _ => "",
        };
        let card = HoverCardTemplate {
            label: &self.label,
            loading: self.is_loading(),
            title,
            lines: self.lines(),
        };
        Ok(card.render()?)
    }
}
