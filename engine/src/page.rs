//! The scrollable page as the renderer laid it out.
//!
//! Measured in terminal rows. The renderer reports geometry after layout;
//! everything else (offset, smooth scrolling, scroll notifications) lives here.

use std::ops::Range;
use std::time::Duration;

use folio_core::{
    ScrollBehavior, ScrollEvents, ScrollRequest, ScrollSubscription, SmoothScroll, Viewport,
};
use folio_types::{Section, SectionBox};

/// Row span of one rendered section, `start..end` in document rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSpan {
    pub section: Section,
    pub rows: Range<usize>,
}

/// Result of laying the page out at a given width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageGeometry {
    /// Total document rows.
    pub height: usize,
    pub sections: Vec<SectionSpan>,
}

impl PageGeometry {
    #[must_use]
    pub fn span(&self, section: Section) -> Option<&Range<usize>> {
        self.sections
            .iter()
            .find(|span| span.section == section)
            .map(|span| &span.rows)
    }
}

#[derive(Debug)]
pub struct PageViewport {
    offset: usize,
    viewport_height: usize,
    geometry: PageGeometry,
    events: ScrollEvents,
    animation: Option<SmoothScroll>,
    smooth_duration: Duration,
}

impl PageViewport {
    #[must_use]
    pub fn new(smooth_duration: Duration) -> Self {
        Self {
            offset: 0,
            viewport_height: 0,
            geometry: PageGeometry::default(),
            events: ScrollEvents::new(),
            animation: None,
            smooth_duration,
        }
    }

    #[must_use]
    pub fn listen(&self) -> ScrollSubscription {
        self.events.listen()
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.events.listener_count()
    }

    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.viewport_height
    }

    #[must_use]
    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    #[must_use]
    pub fn max_offset(&self) -> usize {
        self.geometry.height.saturating_sub(self.viewport_height)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Replace the measured layout. Counts as a scroll event when anything changed.
    pub fn set_layout(&mut self, geometry: PageGeometry, viewport_height: usize) {
        if self.geometry == geometry && self.viewport_height == viewport_height {
            return;
        }
        self.geometry = geometry;
        self.viewport_height = viewport_height;
        self.offset = self.offset.min(self.max_offset());
        self.events.emit();
    }

    fn set_offset(&mut self, offset: usize) {
        let offset = offset.min(self.max_offset());
        if offset != self.offset {
            self.offset = offset;
            self.events.emit();
        }
    }

    /// User-driven scroll by `delta` rows. Cancels any running animation.
    pub fn scroll_by(&mut self, delta: isize) {
        self.animation = None;
        self.set_offset(self.offset.saturating_add_signed(delta));
    }

    pub fn jump_to(&mut self, offset: usize) {
        self.animation = None;
        self.set_offset(offset);
    }

    /// Step the smooth scroll, if any.
    pub fn advance(&mut self, delta: Duration) {
        let Some(animation) = self.animation.as_mut() else {
            return;
        };
        animation.advance(delta);
        let next = animation.current().round().max(0.0) as usize;
        if animation.is_finished() {
            self.animation = None;
        }
        self.set_offset(next);
    }

    fn clamp_target(&self, top: f64) -> usize {
        if top.is_nan() {
            return self.offset;
        }
        (top.round().max(0.0) as usize).min(self.max_offset())
    }
}

impl Viewport for PageViewport {
    fn scroll_offset(&self) -> f64 {
        self.offset as f64
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height as f64
    }

    fn document_height(&self) -> f64 {
        self.geometry.height as f64
    }

    fn section_box(&self, section: Section) -> Option<SectionBox> {
        let rows = self.geometry.span(section)?;
        let offset = self.offset as f64;
        Some(SectionBox::new(
            rows.start as f64 - offset,
            rows.end as f64 - offset,
        ))
    }

    fn section_offset_top(&self, section: Section) -> Option<f64> {
        self.geometry.span(section).map(|rows| rows.start as f64)
    }

    fn scroll_to(&mut self, request: ScrollRequest) {
        let target = self.clamp_target(request.top);
        let instant = request.behavior == ScrollBehavior::Instant || self.smooth_duration.is_zero();
        if instant || target == self.offset {
            self.jump_to(target);
            return;
        }
        self.animation = Some(SmoothScroll::new(
            self.offset as f64,
            target as f64,
            self.smooth_duration,
        ));
    }
}
