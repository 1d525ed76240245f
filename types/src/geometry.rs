/// Vertical extent of a section relative to the viewport top.
///
/// Negative `top` means the section starts above the visible area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBox {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBox {
    #[must_use]
    pub const fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Whether the horizontal line at `y` passes through this box (inclusive).
    #[must_use]
    pub fn crosses(&self, y: f64) -> bool {
        self.top <= y && self.bottom >= y
    }
}
