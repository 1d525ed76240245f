//! Section navigation and scroll tracking over a real page layout.

use std::time::Duration;

use folio_engine::{App, Portfolio, Section, UiOptions};
use folio_tui::{PageDocument, build_document};

const WIDTH: u16 = 120;
const VIEWPORT: usize = 26;
const NAV_OFFSET: usize = 3;

fn options(reduced_motion: bool) -> UiOptions {
    UiOptions {
        ascii_only: true,
        reduced_motion,
        ..UiOptions::default()
    }
}

fn laid_out(reduced_motion: bool) -> (App, PageDocument) {
    let portfolio = Portfolio::embedded().expect("embedded content");
    let options = options(reduced_motion);
    let document = build_document(&portfolio, WIDTH, false, options, 2024);
    let mut app = App::with_options(portfolio, options, Duration::from_millis(400), 90);
    app.set_layout(WIDTH, document.geometry.clone(), VIEWPORT);
    (app, document)
}

fn span_start(document: &PageDocument, section: Section) -> usize {
    document
        .geometry
        .span(section)
        .expect("every section is laid out")
        .start
}

#[test]
fn navigating_puts_each_section_below_the_nav_bar() {
    let (mut app, document) = laid_out(true);
    let max = app.page().max_offset();

    for section in Section::ALL {
        app.navigate_to(section);
        let wanted = span_start(&document, section).saturating_sub(NAV_OFFSET);
        assert_eq!(app.scroll_offset(), wanted.min(max), "{section:?}");
        if wanted <= max {
            assert_eq!(app.scroll_state().active_section(), section);
        }
    }
}

#[test]
fn progress_runs_from_zero_to_one() {
    let (mut app, _) = laid_out(true);
    assert_eq!(app.scroll_state().progress_ratio(), 0.0);
    assert_eq!(app.scroll_state().active_section(), Section::Home);

    app.scroll_lines(10);
    let ratio = app.scroll_state().progress_ratio();
    assert!(ratio > 0.0 && ratio < 1.0, "{ratio}");

    app.scroll_to_bottom();
    assert_eq!(app.scroll_state().progress_ratio(), 1.0);
}

#[test]
fn active_section_follows_the_reference_line() {
    let (mut app, document) = laid_out(true);
    let about = span_start(&document, Section::About);

    // The reference line sits one row under the nav bar. On the boundary
    // row both sections cross it and the earlier one wins.
    app.scroll_lines(isize::try_from(about - 4).unwrap());
    assert_eq!(app.scroll_state().active_section(), Section::Home);
    app.scroll_lines(1);
    assert_eq!(app.scroll_state().active_section(), Section::About);
}

#[test]
fn smooth_scroll_eases_toward_the_target() {
    let (mut app, document) = laid_out(false);
    let target = span_start(&document, Section::Skills) - NAV_OFFSET;

    app.navigate_to(Section::Skills);
    assert_eq!(app.scroll_offset(), 0, "nothing moves before the first frame");

    app.advance(Duration::from_millis(200));
    let halfway = app.scroll_offset();
    assert!(halfway > target / 2 && halfway < target, "{halfway} of {target}");

    app.advance(Duration::from_millis(200));
    assert_eq!(app.scroll_offset(), target);
    assert!(!app.page().is_animating());
    assert_eq!(app.scroll_state().active_section(), Section::Skills);
}

#[test]
fn manual_scroll_cancels_smooth_navigation() {
    let (mut app, _) = laid_out(false);
    app.navigate_to(Section::Contact);
    app.advance(Duration::from_millis(50));
    let at = app.scroll_offset();

    app.scroll_lines(-1);
    assert!(!app.page().is_animating());
    app.advance(Duration::from_millis(500));
    assert_eq!(app.scroll_offset(), at - 1);
}

#[test]
fn subscribers_see_published_states() {
    let (mut app, _) = laid_out(true);
    let mut states = app.subscribe_scroll();
    states.mark_unchanged();

    app.navigate_to(Section::Projects);
    assert!(states.has_changed().expect("tracker alive"));
    assert_eq!(
        states.borrow_and_update().active_section(),
        Section::Projects
    );

    app.scroll_to_top();
    assert_eq!(states.borrow_and_update().active_section(), Section::Home);
}

#[test]
fn relative_navigation_stops_at_the_ends() {
    let (mut app, _) = laid_out(true);
    app.navigate_relative(false);
    assert_eq!(app.scroll_offset(), 0);

    app.navigate_relative(true);
    assert_eq!(app.scroll_state().active_section(), Section::About);
}
