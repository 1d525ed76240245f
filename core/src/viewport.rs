use folio_types::{Section, SectionBox};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Animated, non-instantaneous.
    Smooth,
    Instant,
}

/// A request to move the viewport so that `top` is the new scroll offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

impl ScrollRequest {
    #[must_use]
    pub fn smooth(top: f64) -> Self {
        Self {
            top,
            behavior: ScrollBehavior::Smooth,
        }
    }

    #[must_use]
    pub fn instant(top: f64) -> Self {
        Self {
            top,
            behavior: ScrollBehavior::Instant,
        }
    }
}

/// Geometry and scrolling supplied by the hosting renderer.
///
/// Every read reflects the current layout; nothing is cached on this side.
pub trait Viewport {
    /// Current vertical scroll offset from the top of the document.
    fn scroll_offset(&self) -> f64;

    fn viewport_height(&self) -> f64;

    /// Total scrollable height of the document.
    fn document_height(&self) -> f64;

    /// On-screen bounding box of `section`, relative to the viewport top.
    /// `None` when the section is not part of the rendered document.
    fn section_box(&self, section: Section) -> Option<SectionBox>;

    /// Offset of the section's top from the document top.
    fn section_offset_top(&self, section: Section) -> Option<f64>;

    /// Move the viewport. The host clamps `request.top` into its scrollable range.
    fn scroll_to(&mut self, request: ScrollRequest);
}
