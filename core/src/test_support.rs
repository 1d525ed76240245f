//! In-memory page used by unit tests in place of a renderer.

use folio_types::{Section, SectionBox};

use crate::{ScrollRequest, Viewport};

/// Sections stacked top to bottom with fixed heights.
pub(crate) struct FakePage {
    pub(crate) offset: f64,
    pub(crate) viewport: f64,
    pub(crate) sections: Vec<(Section, f64, f64)>,
    pub(crate) requests: Vec<ScrollRequest>,
}

impl FakePage {
    pub(crate) fn stacked(heights: [f64; 6], viewport: f64) -> Self {
        let mut top = 0.0;
        let sections = Section::ALL
            .into_iter()
            .zip(heights)
            .map(|(section, h)| {
                let entry = (section, top, top + h);
                top += h;
                entry
            })
            .collect();
        Self {
            offset: 0.0,
            viewport,
            sections,
            requests: Vec::new(),
        }
    }

    fn max_offset(&self) -> f64 {
        (self.document_height() - self.viewport).max(0.0)
    }
}

impl Viewport for FakePage {
    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn viewport_height(&self) -> f64 {
        self.viewport
    }

    fn document_height(&self) -> f64 {
        self.sections.last().map_or(0.0, |(_, _, bottom)| *bottom)
    }

    fn section_box(&self, section: Section) -> Option<SectionBox> {
        self.sections
            .iter()
            .find(|(s, _, _)| *s == section)
            .map(|(_, top, bottom)| SectionBox::new(top - self.offset, bottom - self.offset))
    }

    fn section_offset_top(&self, section: Section) -> Option<f64> {
        self.sections
            .iter()
            .find(|(s, _, _)| *s == section)
            .map(|(_, top, _)| *top)
    }

    fn scroll_to(&mut self, request: ScrollRequest) {
        self.requests.push(request);
        self.offset = request.top.clamp(0.0, self.max_offset());
    }
}
