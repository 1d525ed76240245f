//! Slide effect for the overlay menu.

use ratatui::layout::Rect;

use folio_engine::MenuSlide;

/// Shift `base` toward the right edge of `viewport` so only the slide's
/// visible fraction of the panel is on screen. Returns `None` once nothing
/// is left to draw.
#[must_use]
pub fn apply_menu_slide(slide: &MenuSlide, base: Rect, viewport: Rect) -> Option<Rect> {
    let visible = slide.visible_fraction().clamp(0.0, 1.0);
    let hidden = ((1.0 - visible) * f32::from(base.width)).round() as u16;
    let viewport_right = viewport.x.saturating_add(viewport.width);
    let x = base.x.saturating_add(hidden);
    if hidden >= base.width || x >= viewport_right {
        return None;
    }
    let width = base.width.min(viewport_right - x);
    Some(Rect { x, width, ..base })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ratatui::layout::Rect;

    use folio_engine::MenuSlide;

    use super::apply_menu_slide;

    const VIEWPORT: Rect = Rect::new(0, 0, 60, 20);
    const PANEL: Rect = Rect::new(30, 4, 30, 10);

    #[test]
    fn opening_slide_enters_from_the_right() {
        let mut slide = MenuSlide::opening(Duration::from_millis(100));
        assert_eq!(apply_menu_slide(&slide, PANEL, VIEWPORT), None);

        slide.advance(Duration::from_millis(30));
        let mid = apply_menu_slide(&slide, PANEL, VIEWPORT).expect("partly visible");
        assert!(mid.x > PANEL.x && mid.x < 60);
        assert_eq!(mid.x + mid.width, 60, "clipped at the viewport edge");
        assert_eq!(mid.y, PANEL.y);
        assert_eq!(mid.height, PANEL.height);

        slide.advance(Duration::from_millis(100));
        assert_eq!(apply_menu_slide(&slide, PANEL, VIEWPORT), Some(PANEL));
    }

    #[test]
    fn closing_slide_leaves_toward_the_right() {
        let mut slide = MenuSlide::closing(Duration::from_millis(100));
        assert_eq!(apply_menu_slide(&slide, PANEL, VIEWPORT), Some(PANEL));
        slide.advance(Duration::from_millis(100));
        assert_eq!(apply_menu_slide(&slide, PANEL, VIEWPORT), None);
    }
}
