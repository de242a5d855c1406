//! Hover controller: which region is hovered and what its lookup produced.
//!
//! The controller never performs I/O. [`HoverController::on_hover`] hands back
//! a [`LookupTicket`] when a fetch is needed and the caller reports the outcome
//! through [`HoverController::complete`]. Every ticket carries the generation
//! it was issued under; completions from older generations are dropped, so a
//! slow response for a region the pointer already left can never overwrite
//! the current region's results.

use std::fmt;

use tracing::{debug, error, warn};

use crate::language::{LanguageEntry, LanguageRequest};

/// Languages requested per lookup unless configured otherwise.
pub const DEFAULT_NUM_LANGUAGES: u32 = 3;

/// Outcome of the lookup for the currently hovered region.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LookupStatus {
    /// Nothing hovered yet.
    #[default]
    Idle,
    /// A lookup for the current region is outstanding.
    Loading,
    /// The last lookup for the current region succeeded.
    Ready,
    /// The last lookup for the current region failed.
    Failed(String),
}

/// Lookup the caller must perform on behalf of the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    pub generation: u64,
    pub request: LanguageRequest,
}

/// What [`HoverController::complete`] did with a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// Results replaced.
    Updated,
    /// Failure recorded; previous results kept.
    Failed,
    /// Completion belonged to an earlier hover and was discarded.
    Stale,
}

/// Transient hover state for one map view.
#[derive(Debug, Clone)]
pub struct HoverController {
    hovered: Option<String>,
    status: LookupStatus,
    results: Vec<LanguageEntry>,
    generation: u64,
    num_languages: u32,
}

impl Default for HoverController {
    fn default() -> Self {
        Self::new(DEFAULT_NUM_LANGUAGES)
    }
}

impl HoverController {
    pub fn new(num_languages: u32) -> Self {
        Self {
            hovered: None,
            status: LookupStatus::Idle,
            results: Vec::new(),
            generation: 0,
            num_languages,
        }
    }

    /// Record a hover on `region`.
    ///
    /// Returns `None` when `region` is already the hovered region; pointer
    /// movement fires many hover events for the same region and only the
    /// first one may trigger a lookup.
    pub fn on_hover(&mut self, region: &str) -> Option<LookupTicket> {
        if self.hovered.as_deref() == Some(region) {
            return None;
        }

        self.generation += 1;
        self.hovered = Some(region.to_string());
        self.status = LookupStatus::Loading;

        debug!(region = %region, generation = self.generation, "hover_lookup_issued");

        Some(LookupTicket {
            generation: self.generation,
            request: LanguageRequest::new(region, self.num_languages),
        })
    }

    /// Apply the outcome of the lookup issued under `generation`.
    pub fn complete<E: fmt::Display>(
        &mut self,
        generation: u64,
        outcome: Result<Vec<LanguageEntry>, E>,
    ) -> Applied {
        if generation != self.generation {
            match &outcome {
                Ok(_) => debug!(
                    generation,
                    current = self.generation,
                    "stale_lookup_discarded"
                ),
                Err(err) => warn!(
                    generation,
                    current = self.generation,
                    stale = true,
                    "Error fetching languages: {err}"
                ),
            }
            return Applied::Stale;
        }

        match outcome {
            Ok(mut entries) => {
                entries.truncate(self.num_languages as usize);
                debug!(
                    region = self.hovered.as_deref().unwrap_or_default(),
                    count = entries.len(),
                    "hover_lookup_done"
                );
                self.results = entries;
                self.status = LookupStatus::Ready;
                Applied::Updated
            }
            Err(err) => {
                error!(
                    region = self.hovered.as_deref().unwrap_or_default(),
                    "Error fetching languages: {err}"
                );
                self.status = LookupStatus::Failed(err.to_string());
                Applied::Failed
            }
        }
    }

    /// Currently hovered region, if any.
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn is_hovered(&self, region: &str) -> bool {
        self.hovered() == Some(region)
    }

    pub fn is_loading(&self) -> bool {
        self.status == LookupStatus::Loading
    }

    pub fn status(&self) -> &LookupStatus {
        &self.status
    }

    /// Results of the most recent successful lookup.
    pub fn results(&self) -> &[LanguageEntry] {
        &self.results
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn num_languages(&self) -> u32 {
        self.num_languages
    }

    /// Drop all hover state, as when the view goes away.
    ///
    /// The generation keeps counting so tickets issued before the reset stay stale.
    pub fn reset(&mut self) {
        self.hovered = None;
        self.status = LookupStatus::Idle;
        self.results.clear();
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn langs(names: &[(&str, u64)]) -> Vec<LanguageEntry> {
        names
            .iter()
            .map(|&(n, c)| LanguageEntry::new(n, c))
            .collect()
    }

    #[test]
    fn first_hover_issues_lookup_with_configured_count() {
        let mut ctl = HoverController::default();
        let ticket = ctl.on_hover("Kerala").unwrap();

        assert_eq!(ticket.request, LanguageRequest::new("Kerala", 3));
        assert_eq!(ctl.hovered(), Some("Kerala"));
        assert!(ctl.is_loading());
    }

    #[test]
    fn repeated_hover_on_same_region_is_deduplicated() {
        let mut ctl = HoverController::default();
        assert!(ctl.on_hover("Goa").is_some());
        assert!(ctl.on_hover("Goa").is_none());
        assert!(ctl.on_hover("Goa").is_none());
        assert_eq!(ctl.generation(), 1);
    }

    #[test]
    fn returning_to_a_region_after_another_refetches() {
        let mut ctl = HoverController::default();
        ctl.on_hover("Goa");
        ctl.on_hover("Assam");
        assert!(ctl.on_hover("Goa").is_some());
    }

    #[test]
    fn success_replaces_results_and_clears_loading() {
        let mut ctl = HoverController::default();
        let t = ctl.on_hover("Kerala").unwrap();
        let applied = ctl.complete::<String>(t.generation, Ok(langs(&[("Malayalam", 30_000_000)])));

        assert_eq!(applied, Applied::Updated);
        assert!(!ctl.is_loading());
        assert_eq!(ctl.status(), &LookupStatus::Ready);
        assert_eq!(ctl.results()[0].name, "Malayalam");
    }

    #[test]
    fn results_are_capped_at_requested_count() {
        let mut ctl = HoverController::new(2);
        let t = ctl.on_hover("Bihar").unwrap();
        ctl.complete::<String>(t.generation, Ok(langs(&[("Hindi", 3), ("Maithili", 2), ("Urdu", 1)])));
        assert_eq!(ctl.results().len(), 2);
    }

    #[test]
    fn failure_keeps_previous_results_and_clears_loading() {
        let mut ctl = HoverController::default();
        let t = ctl.on_hover("Kerala").unwrap();
        ctl.complete::<String>(t.generation, Ok(langs(&[("Malayalam", 1)])));

        let t = ctl.on_hover("Atlantis").unwrap();
        let applied = ctl.complete(t.generation, Err("HTTP 404"));

        assert_eq!(applied, Applied::Failed);
        assert!(!ctl.is_loading());
        assert_eq!(ctl.status(), &LookupStatus::Failed("HTTP 404".to_string()));
        assert_eq!(ctl.results().len(), 1);
    }

    #[test]
    fn late_response_for_previous_region_is_discarded() {
        let mut ctl = HoverController::default();
        let a = ctl.on_hover("Assam").unwrap();
        let b = ctl.on_hover("Bihar").unwrap();

        assert_eq!(
            ctl.complete::<String>(b.generation, Ok(langs(&[("Hindi", 9)]))),
            Applied::Updated
        );
        assert_eq!(
            ctl.complete::<String>(a.generation, Ok(langs(&[("Assamese", 7)]))),
            Applied::Stale
        );

        assert_eq!(ctl.hovered(), Some("Bihar"));
        assert_eq!(ctl.results()[0].name, "Hindi");
    }

    #[test]
    fn stale_completion_does_not_clear_loading_of_current_lookup() {
        let mut ctl = HoverController::default();
        let a = ctl.on_hover("Assam").unwrap();
        ctl.on_hover("Bihar").unwrap();

        ctl.complete(a.generation, Err("timeout"));
        assert!(ctl.is_loading());
    }

    #[test]
    fn stale_failure_is_still_logged_at_warn() {
        use std::io;
        use std::sync::{Arc, Mutex};

        #[derive(Clone, Default)]
        struct Captured(Arc<Mutex<Vec<u8>>>);

        impl io::Write for Captured {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut ctl = HoverController::default();
            let a = ctl.on_hover("Assam").unwrap();
            ctl.on_hover("Bihar").unwrap();
            assert_eq!(ctl.complete(a.generation, Err("connection reset")), Applied::Stale);
        });

        let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("WARN"), "{logs}");
        assert!(logs.contains("connection reset"), "{logs}");
        assert!(logs.contains("stale=true"), "{logs}");
    }

    #[test]
    fn reset_invalidates_outstanding_tickets() {
        let mut ctl = HoverController::default();
        let t = ctl.on_hover("Goa").unwrap();
        ctl.reset();

        assert_eq!(ctl.hovered(), None);
        assert_eq!(ctl.status(), &LookupStatus::Idle);
        assert_eq!(
            ctl.complete::<String>(t.generation, Ok(Vec::new())),
            Applied::Stale
        );
    }

    #[test]
    fn unknown_and_empty_names_pass_through() {
        let mut ctl = HoverController::default();
        assert_eq!(
            ctl.on_hover("Atlantis").unwrap().request.state_name,
            "Atlantis"
        );
        assert_eq!(ctl.on_hover("").unwrap().request.state_name, "");
    }
}
