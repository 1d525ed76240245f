//! Scroll offset to progress ratio and active section.

use tokio::sync::watch;
use tracing::debug;

use folio_types::{ScrollState, Section, SectionBox};

use crate::{Metrics, Viewport};

/// Fraction of the scrollable distance covered, in `[0, 1]`.
///
/// A document no taller than the viewport has nothing to scroll and reports 0.
#[must_use]
pub fn progress_ratio(scroll_offset: f64, viewport_height: f64, document_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 || scroll_offset.is_nan() {
        return 0.0;
    }
    (scroll_offset / scrollable).clamp(0.0, 1.0)
}

/// First section, in declared order, whose box crosses `reference_line`.
///
/// Sections without a box (not rendered) are skipped.
pub fn find_active_section<I>(reference_line: f64, boxes: I) -> Option<Section>
where
    I: IntoIterator<Item = (Section, Option<SectionBox>)>,
{
    boxes
        .into_iter()
        .find(|(_, bounds)| bounds.is_some_and(|b| b.crosses(reference_line)))
        .map(|(section, _)| section)
}

/// Owns the [`ScrollState`] and recomputes it on every scroll event.
///
/// Each recomputation is published through a `watch` channel; a later event
/// always replaces an earlier one.
#[derive(Debug)]
pub struct ScrollTracker {
    reference_line: f64,
    state: ScrollState,
    publisher: watch::Sender<ScrollState>,
}

impl ScrollTracker {
    #[must_use]
    pub fn new(metrics: Metrics) -> Self {
        let state = ScrollState::default();
        let (publisher, _) = watch::channel(state);
        Self {
            reference_line: metrics.reference_line,
            state,
            publisher,
        }
    }

    #[must_use]
    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// Receiver that observes every published state, starting with the current one.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ScrollState> {
        self.publisher.subscribe()
    }

    /// Recompute from the viewport's current geometry and publish the result.
    pub fn handle_scroll<V: Viewport + ?Sized>(&mut self, viewport: &V) -> ScrollState {
        let progress = progress_ratio(
            viewport.scroll_offset(),
            viewport.viewport_height(),
            viewport.document_height(),
        );

        let previous = self.state.active_section();
        let active = find_active_section(
            self.reference_line,
            Section::ALL
                .into_iter()
                .map(|section| (section, viewport.section_box(section))),
        )
        .unwrap_or(previous);

        if active != previous {
            debug!(from = %previous, to = %active, "Active section changed");
        }

        self.state = ScrollState::new(progress, active);
        self.publisher.send_replace(self.state);
        self.state
    }
}
