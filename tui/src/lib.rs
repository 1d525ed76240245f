//! TUI rendering for Folio using ratatui.
//!
//! One frame is, top to bottom:
//!
//! ```text
//! ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━        progress bar (1 row)
//! ┌──────────────────────────────────────────────┐
//! │  RG.        1 Home  2 About  3 Skills  ...   │ nav bar overlay (3 rows)
//! ├──────────────────────────────────────────────┤
//! │ page document, sliced at the scroll offset   │ page viewport
//! │                              ╭─ ☰ Menu ────╮ │
//! │                              │ ▸ 1 Home    │ │ overlay menu (narrow layout)
//! └──────────────────────────────────────────────┘
//! ```
//!
//! [`draw`] lays the page out for the current width, reports the geometry
//! to the [`App`], and only then reads the scroll state it draws from, so
//! the progress bar and navigation highlight always match the page shown.

mod document;
mod effects;
mod input;
mod theme;
mod wrap;

pub use document::{
    DocumentKey, PageDocument, build_document, clear_document_cache, page_document,
};
pub use effects::apply_menu_slide;
pub use input::{InputPump, handle_events, handle_key};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use chrono::Datelike;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use folio_engine::{App, NAV_BAR_HEIGHT, PROGRESS_BAR_HEIGHT, ScrollState, Section};

const MENU_WIDTH: u16 = 34;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App) {
    draw_with_year(frame, app, chrono::Local::now().year());
}

/// [`draw`] with an explicit copyright year.
pub fn draw_with_year(frame: &mut Frame, app: &mut App, year: i32) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    let area = frame.area();

    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, area);

    let [progress_area, page_area] = Layout::vertical([
        Constraint::Length(PROGRESS_BAR_HEIGHT),
        Constraint::Min(0),
    ])
    .areas(area);

    let key = DocumentKey {
        content_id: app.content_id(),
        width: area.width,
        compact: app.is_compact_width(area.width),
        options,
        year,
    };
    let document = page_document(app.portfolio(), key);
    app.set_layout(
        area.width,
        document.geometry.clone(),
        usize::from(page_area.height),
    );

    draw_page(frame, page_area, &document, app.scroll_offset(), &palette);
    draw_progress_bar(frame, progress_area, app.scroll_state(), &palette, &glyphs);

    let nav_area = Rect {
        height: NAV_BAR_HEIGHT.min(page_area.height),
        ..page_area
    };
    draw_nav_bar(frame, app, nav_area, &palette, &glyphs);
    draw_menu(frame, app, page_area, &palette, &glyphs);
}

/// Border characters from the active glyph set, so ASCII mode stays ASCII.
fn with_glyph_borders<'a>(block: Block<'a>, glyphs: &Glyphs) -> Block<'a> {
    block.border_set(symbols::border::Set {
        top_left: glyphs.box_top_left,
        top_right: glyphs.box_top_right,
        bottom_left: glyphs.box_bottom_left,
        bottom_right: glyphs.box_bottom_right,
        vertical_left: glyphs.box_vertical,
        vertical_right: glyphs.box_vertical,
        horizontal_top: glyphs.box_horizontal,
        horizontal_bottom: glyphs.box_horizontal,
    })
}

fn draw_page(
    frame: &mut Frame,
    area: Rect,
    document: &PageDocument,
    offset: usize,
    palette: &Palette,
) {
    let visible = document.visible(offset, usize::from(area.height)).to_vec();
    let page = Paragraph::new(visible).style(
        Style::default()
            .bg(palette.bg_dark)
            .fg(palette.text_secondary),
    );
    frame.render_widget(page, area);
}

fn draw_progress_bar(
    frame: &mut Frame,
    area: Rect,
    state: ScrollState,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    if area.is_empty() {
        return;
    }
    let width = usize::from(area.width);
    let filled = ((state.progress_ratio() * width as f64).round() as usize).min(width);
    let bar = Line::from(vec![
        Span::styled(
            glyphs.progress.repeat(filled),
            Style::default().fg(palette.primary),
        ),
        Span::raw(" ".repeat(width - filled)),
    ]);
    frame.render_widget(
        Paragraph::new(bar).style(Style::default().bg(palette.bg_dark)),
        area,
    );
}

fn draw_nav_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    if area.is_empty() {
        return;
    }
    frame.render_widget(Clear, area);
    let block = with_glyph_borders(Block::default(), glyphs)
        .borders(Borders::BOTTOM)
        .border_style(styles::border(palette))
        .style(Style::default().bg(palette.bg_panel))
        .padding(Padding::new(2, 2, 1, 0));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.is_empty() {
        return;
    }

    let brand = Line::from(vec![
        Span::styled(
            app.portfolio().profile.brand.clone(),
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(".", Style::default().fg(palette.accent)),
    ]);
    frame.render_widget(Paragraph::new(brand), inner);

    let items = if app.is_compact() {
        menu_toggle(app, palette, glyphs)
    } else {
        nav_items(app.scroll_state().active_section(), palette)
    };
    frame.render_widget(Paragraph::new(items).alignment(Alignment::Right), inner);
}

fn nav_items(active: Section, palette: &Palette) -> Line<'static> {
    let mut spans = Vec::with_capacity(Section::ALL.len() * 4);
    for (index, section) in Section::ALL.into_iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if section == active {
            styles::nav_item_active(palette)
        } else {
            styles::nav_item(palette)
        };
        spans.push(Span::styled(
            (index + 1).to_string(),
            styles::key_hint(palette),
        ));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(section.label(), style));
    }
    Line::from(spans)
}

fn menu_toggle(app: &App, palette: &Palette, glyphs: &Glyphs) -> Line<'static> {
    let (glyph, label) = if app.menu().is_open() {
        (glyphs.close, "Close")
    } else {
        (glyphs.menu, "Menu")
    };
    Line::from(vec![
        Span::styled(
            format!("{glyph} {label} "),
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("[", styles::key_hint(palette)),
        Span::styled("m", styles::key_highlight(palette)),
        Span::styled("]", styles::key_hint(palette)),
    ])
}

/// Overlay menu, drawn while open and while its closing slide runs.
fn draw_menu(frame: &mut Frame, app: &App, page_area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let slide = app.menu_slide();
    if !app.menu().is_open() && slide.is_none() {
        return;
    }

    let top = page_area.y.saturating_add(NAV_BAR_HEIGHT);
    let rows = Section::ALL.len() as u16 + 4;
    let height = rows.min(page_area.bottom().saturating_sub(top));
    let width = MENU_WIDTH.min(page_area.width);
    if height < 3 || width < 8 {
        return;
    }
    let base = Rect {
        x: page_area.right() - width,
        y: top,
        width,
        height,
    };
    let area = match slide {
        Some(slide) => match apply_menu_slide(slide, base, page_area) {
            Some(area) => area,
            None => return,
        },
        None => base,
    };

    let content_width = usize::from(width.saturating_sub(4));
    let state = app.scroll_state();
    let mut lines = Vec::with_capacity(Section::ALL.len() + 2);
    for (index, section) in Section::ALL.into_iter().enumerate() {
        let selected = section == app.menu_cursor();
        let prefix = if selected { glyphs.selected } else { " " };
        let text = format!("{prefix} {} {}", index + 1, section.label());
        let filler = " ".repeat(content_width.saturating_sub(text.width()));
        let style = if selected {
            styles::menu_item_active(palette)
        } else if section == state.active_section() {
            Style::default().fg(palette.primary)
        } else {
            styles::nav_item(palette)
        };
        lines.push(Line::from(vec![
            Span::styled(text, style),
            Span::styled(filler, style),
        ]));
    }

    let (move_keys, enter_key) = if glyphs.icons {
        ("↑↓", "⏎")
    } else {
        ("j/k", "enter")
    };
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(move_keys, styles::key_highlight(palette)),
        Span::styled(" move  ", styles::key_hint(palette)),
        Span::styled(enter_key, styles::key_highlight(palette)),
        Span::styled(" go  ", styles::key_hint(palette)),
        Span::styled("esc", styles::key_highlight(palette)),
        Span::styled(" close", styles::key_hint(palette)),
    ]));

    let menu = Paragraph::new(lines).block(
        with_glyph_borders(Block::default(), glyphs)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.primary))
            .style(Style::default().bg(palette.bg_panel))
            .padding(Padding::horizontal(1))
            .title(Line::from(vec![Span::styled(
                format!(" {} Menu ", glyphs.menu),
                Style::default()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            )])),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(menu, area);
}
