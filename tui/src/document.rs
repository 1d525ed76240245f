//! Lays the portfolio out as terminal rows.
//!
//! A [`PageDocument`] is the whole page pre-wrapped to one width: every
//! [`Line`] is exactly one row. It also carries the row span of each
//! section, which the engine uses as the page geometry for scroll tracking
//! and navigation.
//!
//! Documents are cached per content, width, and UI options, so scrolling
//! only slices an existing document. The layout is rebuilt when the terminal
//! width changes.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use folio_content::{
    About, Contact, ContactForm, Experience, Footer, Heading, Profile, Projects, Side, SkillGroup,
    Skills, TimelineEntry,
};
use folio_engine::{NAV_BAR_HEIGHT, PageGeometry, Portfolio, Section, SectionSpan, UiOptions};

use crate::theme::{Glyphs, Palette, glyphs, palette, styles};
use crate::wrap::{center_pad, fit_line, truncate, wrap};

/// Widest the content column grows on large terminals.
const MAX_CONTENT_WIDTH: usize = 100;
const SIDE_MARGIN: usize = 2;
const COLUMN_GAP: usize = 2;
const CACHE_MAX_ENTRIES: usize = 8;

/// Everything that changes the layout of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentKey {
    pub content_id: u64,
    pub width: u16,
    /// Narrow ("mobile") layout: stacked grids and a single-sided timeline.
    pub compact: bool,
    pub options: UiOptions,
    /// Copyright year shown in the footer.
    pub year: i32,
}

#[derive(Debug, Clone)]
pub struct PageDocument {
    pub lines: Vec<Line<'static>>,
    pub geometry: PageGeometry,
}

impl PageDocument {
    /// Rows `offset..offset + rows`, cut short at the end of the document.
    #[must_use]
    pub fn visible(&self, offset: usize, rows: usize) -> &[Line<'static>] {
        let start = offset.min(self.lines.len());
        let end = offset.saturating_add(rows).min(self.lines.len());
        &self.lines[start..end]
    }
}

thread_local! {
    static DOCUMENT_CACHE: RefCell<HashMap<DocumentKey, Rc<PageDocument>>> =
        RefCell::new(HashMap::new());
}

/// Drop every cached layout.
pub fn clear_document_cache() {
    DOCUMENT_CACHE.with(|cache| cache.borrow_mut().clear());
}

/// Cached [`build_document`].
#[must_use]
pub fn page_document(portfolio: &Portfolio, key: DocumentKey) -> Rc<PageDocument> {
    let cached = DOCUMENT_CACHE.with(|cache| cache.borrow().get(&key).cloned());
    if let Some(document) = cached {
        return document;
    }

    let document = Rc::new(build_document(
        portfolio,
        key.width,
        key.compact,
        key.options,
        key.year,
    ));

    DOCUMENT_CACHE.with(|cache| {
        let mut cache = cache.borrow_mut();
        if cache.len() >= CACHE_MAX_ENTRIES {
            let stale: Vec<_> = cache.keys().take(CACHE_MAX_ENTRIES / 2).copied().collect();
            for key in stale {
                cache.remove(&key);
            }
        }
        cache.insert(key, Rc::clone(&document));
    });

    document
}

#[must_use]
pub fn build_document(
    portfolio: &Portfolio,
    width: u16,
    compact: bool,
    options: UiOptions,
    year: i32,
) -> PageDocument {
    let mut page = PageBuilder::new(
        usize::from(width),
        compact,
        palette(options),
        glyphs(options),
    );
    page.section(Section::Home, |page| page.home(&portfolio.profile));
    page.section(Section::About, |page| page.about(&portfolio.about));
    page.section(Section::Skills, |page| page.skills(&portfolio.skills));
    page.section(Section::Projects, |page| page.projects(&portfolio.projects));
    page.section(Section::Experience, |page| {
        page.experience(&portfolio.experience);
    });
    page.section(Section::Contact, |page| page.contact(&portfolio.contact));
    page.footer(&portfolio.profile, &portfolio.footer, year);
    page.finish()
}

struct Card {
    title: Option<Vec<Span<'static>>>,
    body: Vec<Line<'static>>,
}

fn centered(spans: Vec<Span<'static>>, width: usize) -> Line<'static> {
    let content: usize = spans.iter().map(Span::width).sum();
    let mut line = vec![Span::raw(center_pad(content, width))];
    line.extend(spans);
    Line::from(line)
}

fn styled_lines(text: &str, width: usize, style: Style) -> impl Iterator<Item = Line<'static>> {
    wrap(text, width)
        .into_iter()
        .map(move |line| Line::from(Span::styled(line, style)))
}

/// Lay equal-width blocks side by side.
fn columns(blocks: &[Vec<Line<'static>>], width: usize) -> Vec<Line<'static>> {
    let rows = blocks.iter().map(Vec::len).max().unwrap_or(0);
    (0..rows)
        .map(|row| {
            let mut spans = Vec::new();
            for (index, block) in blocks.iter().enumerate() {
                if index > 0 {
                    spans.push(Span::raw(" ".repeat(COLUMN_GAP)));
                }
                let line = block.get(row).cloned().unwrap_or_default();
                spans.extend(fit_line(line, width).spans);
            }
            Line::from(spans)
        })
        .collect()
}

struct PageBuilder {
    lines: Vec<Line<'static>>,
    sections: Vec<SectionSpan>,
    width: usize,
    /// Width of the centered content column.
    inner: usize,
    margin: String,
    compact: bool,
    palette: Palette,
    glyphs: Glyphs,
}

impl PageBuilder {
    fn new(width: usize, compact: bool, palette: Palette, glyphs: Glyphs) -> Self {
        let width = width.max(1);
        let inner = width
            .saturating_sub(2 * SIDE_MARGIN)
            .clamp(1, MAX_CONTENT_WIDTH);
        Self {
            lines: Vec::new(),
            sections: Vec::with_capacity(Section::ALL.len()),
            width,
            inner,
            margin: " ".repeat(width.saturating_sub(inner) / 2),
            compact,
            palette,
            glyphs,
        }
    }

    fn finish(self) -> PageDocument {
        PageDocument {
            geometry: PageGeometry {
                height: self.lines.len(),
                sections: self.sections,
            },
            lines: self.lines,
        }
    }

    fn section(&mut self, section: Section, build: impl FnOnce(&mut Self)) {
        let start = self.lines.len();
        build(self);
        self.sections.push(SectionSpan {
            section,
            rows: start..self.lines.len(),
        });
    }

    fn push(&mut self, line: Line<'static>) {
        let mut spans = Vec::with_capacity(line.spans.len() + 1);
        spans.push(Span::raw(self.margin.clone()));
        spans.extend(line.spans);
        self.lines.push(fit_line(Line::from(spans), self.width));
    }

    fn push_all(&mut self, lines: impl IntoIterator<Item = Line<'static>>) {
        for line in lines {
            self.push(line);
        }
    }

    fn blank(&mut self, rows: usize) {
        for _ in 0..rows {
            self.push(Line::default());
        }
    }

    /// Columns per row and column width for a grid of cards.
    fn grid(&self, min_column: usize, max_columns: usize) -> (usize, usize) {
        let fit = (self.inner + COLUMN_GAP) / (min_column + COLUMN_GAP);
        let per_row = fit.clamp(1, max_columns.max(1));
        let width = (self.inner - COLUMN_GAP * (per_row - 1)) / per_row;
        (per_row, width)
    }

    fn ellipsize(&self, text: &str, width: usize) -> String {
        truncate(text, width, self.glyphs.ellipsis)
    }

    fn link_line(&self, url: &str, width: usize) -> Line<'static> {
        let glyph = self.glyphs.link;
        let room = width.saturating_sub(glyph.width() + 1);
        Line::from(vec![
            Span::styled(format!("{glyph} "), Style::default().fg(self.palette.link)),
            Span::styled(self.ellipsize(url, room), styles::link(&self.palette)),
        ])
    }

    fn card(
        &self,
        title: Option<Vec<Span<'static>>>,
        body: Vec<Line<'static>>,
        width: usize,
    ) -> Vec<Line<'static>> {
        let g = &self.glyphs;
        let border = styles::border(&self.palette);
        let width = width.max(4);
        let mut out = Vec::with_capacity(body.len() + 2);

        let mut top = vec![Span::styled(g.box_top_left, border)];
        let mut used = 1;
        if let Some(title) = title {
            let title_width = Line::from(title.clone()).width().min(width.saturating_sub(6));
            top.push(Span::styled(g.box_horizontal, border));
            top.push(Span::raw(" "));
            top.extend(fit_line(Line::from(title), title_width).spans);
            top.push(Span::raw(" "));
            used += title_width + 3;
        }
        top.push(Span::styled(
            g.box_horizontal.repeat(width.saturating_sub(used + 1)),
            border,
        ));
        top.push(Span::styled(g.box_top_right, border));
        out.push(Line::from(top));

        for line in body {
            let mut spans = vec![Span::styled(g.box_vertical, border), Span::raw(" ")];
            spans.extend(fit_line(line, width - 4).spans);
            spans.push(Span::raw(" "));
            spans.push(Span::styled(g.box_vertical, border));
            out.push(Line::from(spans));
        }

        out.push(Line::from(vec![
            Span::styled(g.box_bottom_left, border),
            Span::styled(g.box_horizontal.repeat(width - 2), border),
            Span::styled(g.box_bottom_right, border),
        ]));
        out
    }

    /// Rows of cards; cards sharing a row are padded to the same height.
    fn card_grid(&mut self, cards: Vec<Card>, per_row: usize, width: usize) {
        let mut cards = cards.into_iter().peekable();
        let mut first = true;
        while cards.peek().is_some() {
            let row: Vec<Card> = cards.by_ref().take(per_row.max(1)).collect();
            if !first {
                self.blank(1);
            }
            first = false;
            let height = row.iter().map(|card| card.body.len()).max().unwrap_or(0);
            let blocks: Vec<_> = row
                .into_iter()
                .map(|mut card| {
                    card.body.resize(height, Line::default());
                    self.card(card.title, card.body, width)
                })
                .collect();
            self.push_all(columns(&blocks, width));
        }
    }

    fn heading(&mut self, heading: &Heading) {
        let palette = self.palette;
        let title = if heading.accent.is_empty() {
            heading.lead.clone()
        } else {
            format!("{} {}", heading.lead, heading.accent)
        };
        let title_width = title.width();

        self.blank(1);
        if title_width <= self.inner {
            let mut spans = vec![Span::styled(heading.lead.clone(), styles::heading(&palette))];
            if !heading.accent.is_empty() {
                spans.push(Span::raw(" "));
                spans.push(Span::styled(
                    heading.accent.clone(),
                    styles::heading_accent(&palette),
                ));
            }
            self.push(centered(spans, self.inner));
        } else {
            for line in wrap(&title, self.inner) {
                let line = Span::styled(line, styles::heading_accent(&palette));
                self.push(centered(vec![line], self.inner));
            }
        }
        let rule = self.glyphs.rule.repeat(title_width.min(self.inner));
        self.push(centered(
            vec![Span::styled(rule, Style::default().fg(palette.primary))],
            self.inner,
        ));
        self.blank(1);
    }

    fn home(&mut self, profile: &Profile) {
        let palette = self.palette;
        let inner = self.inner;

        self.blank(usize::from(NAV_BAR_HEIGHT) + 2);
        self.push_all(styled_lines(&profile.greeting, inner, styles::body(&palette)));
        self.push_all(styled_lines(
            &profile.name,
            inner,
            styles::heading_accent(&palette),
        ));

        let headline_width = profile.headline.width() + 1 + profile.highlight.width();
        let highlight = Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD);
        if profile.highlight.is_empty() || headline_width > inner {
            self.push_all(styled_lines(&profile.headline, inner, styles::heading(&palette)));
            self.push_all(styled_lines(&profile.highlight, inner, highlight));
        } else {
            self.push(Line::from(vec![
                Span::styled(profile.headline.clone(), styles::heading(&palette)),
                Span::raw(" "),
                Span::styled(profile.highlight.clone(), highlight),
            ]));
        }

        self.blank(1);
        self.push_all(styled_lines(&profile.intro, inner, styles::body(&palette)));
        self.blank(1);

        let contact_key = (Section::Contact.index() + 1).to_string();
        self.push(Line::from(vec![
            Span::styled("[", styles::key_hint(&palette)),
            Span::styled(contact_key, styles::key_highlight(&palette)),
            Span::styled("] ", styles::key_hint(&palette)),
            Span::styled("Contact Me", styles::heading(&palette)),
        ]));
        for link in &profile.links {
            self.push(Line::from(vec![
                Span::styled(self.glyphs.chevron, styles::muted(&palette)),
                Span::raw(" "),
                Span::styled(link.label.clone(), styles::body(&palette)),
            ]));
            let url = self.link_line(&link.url, inner.saturating_sub(2));
            let mut spans = vec![Span::raw("  ")];
            spans.extend(url.spans);
            self.push(Line::from(spans));
        }

        if let Some(featured) = &profile.featured {
            self.blank(1);
            let width = inner.min(64);
            let title = vec![
                Span::styled(self.glyphs.play, Style::default().fg(palette.accent)),
                Span::raw(" "),
                Span::styled(featured.title.clone(), styles::heading(&palette)),
            ];
            let body = vec![self.link_line(&featured.url, width.saturating_sub(4))];
            let card = self.card(Some(title), body, width);
            self.push_all(card);
        }
        self.blank(2);
    }

    fn about(&mut self, about: &About) {
        let palette = self.palette;
        self.heading(&about.heading);
        for (index, paragraph) in about.paragraphs.iter().enumerate() {
            if index > 0 {
                self.blank(1);
            }
            self.push_all(styled_lines(paragraph, self.inner, styles::body(&palette)));
        }

        if !about.stats.is_empty() {
            self.blank(1);
            let (per_row, width) = self.grid(16, if self.compact { 2 } else { 4 });
            let body_width = width.saturating_sub(4);
            let value_style = Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD);
            let cards = about
                .stats
                .iter()
                .map(|stat| {
                    let mut body = vec![centered(
                        vec![Span::styled(stat.value.clone(), value_style)],
                        body_width,
                    )];
                    body.extend(wrap(&stat.label, body_width).into_iter().map(|line| {
                        centered(vec![Span::styled(line, styles::muted(&palette))], body_width)
                    }));
                    Card { title: None, body }
                })
                .collect();
            self.card_grid(cards, per_row, width);
        }
        self.blank(2);
    }

    fn skill_lines(&self, group: &SkillGroup, width: usize) -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity(group.skills.len() * 3);
        for (index, skill) in group.skills.iter().enumerate() {
            if index > 0 {
                lines.push(Line::default());
            }
            let level = usize::from(skill.level.min(100));
            let percent = format!("{level}%");
            let name = self.ellipsize(&skill.name, width.saturating_sub(percent.width() + 1));
            let gap = width.saturating_sub(name.width() + percent.width());
            lines.push(Line::from(vec![
                Span::styled(name, styles::body(&self.palette)),
                Span::raw(" ".repeat(gap)),
                Span::styled(percent, styles::muted(&self.palette)),
            ]));

            let filled = (level * width + 50) / 100;
            lines.push(Line::from(vec![
                Span::styled(
                    self.glyphs.bar_fill.repeat(filled),
                    Style::default().fg(self.palette.primary),
                ),
                Span::styled(
                    self.glyphs.bar_track.repeat(width - filled),
                    styles::border(&self.palette),
                ),
            ]));
        }
        lines
    }

    fn skills(&mut self, skills: &Skills) {
        self.heading(&skills.heading);
        let (per_row, width) = self.grid(28, if self.compact { 1 } else { 3 });
        let body_width = width.saturating_sub(4);
        let cards = skills
            .groups
            .iter()
            .map(|group| Card {
                title: Some(vec![Span::styled(
                    group.name.clone(),
                    styles::heading(&self.palette),
                )]),
                body: self.skill_lines(group, body_width),
            })
            .collect();
        self.card_grid(cards, per_row, width);
        self.blank(2);
    }

    fn tag_lines(&self, tags: &[String], width: usize) -> Vec<Line<'static>> {
        let chip = Style::default()
            .fg(self.palette.tag)
            .bg(self.palette.bg_highlight);
        let mut lines = Vec::new();
        let mut spans = Vec::new();
        let mut used = 0;
        for tag in tags {
            let text = format!(" {tag} ");
            let text_width = text.width();
            if used > 0 && used + 1 + text_width > width {
                lines.push(Line::from(std::mem::take(&mut spans)));
                used = 0;
            }
            if used > 0 {
                spans.push(Span::raw(" "));
                used += 1;
            }
            spans.push(Span::styled(text, chip));
            used += text_width;
        }
        if !spans.is_empty() {
            lines.push(Line::from(spans));
        }
        lines
    }

    fn projects(&mut self, projects: &Projects) {
        let palette = self.palette;
        self.heading(&projects.heading);

        let (per_row, width) = self.grid(30, if self.compact { 1 } else { 3 });
        let body_width = width.saturating_sub(4);
        let cards = projects
            .items
            .iter()
            .map(|project| {
                let title = if self.glyphs.icons && !project.icon.is_empty() {
                    format!("{} {}", project.icon, project.title)
                } else {
                    project.title.clone()
                };
                let mut body: Vec<_> =
                    styled_lines(&title, body_width, styles::heading(&palette)).collect();
                body.push(Line::default());
                body.extend(styled_lines(
                    &project.description,
                    body_width,
                    styles::body(&palette),
                ));
                if !project.tags.is_empty() {
                    body.push(Line::default());
                    body.extend(self.tag_lines(&project.tags, body_width));
                }
                if let Some(url) = &project.url {
                    body.push(Line::default());
                    body.push(self.link_line(url, body_width));
                }
                Card { title: None, body }
            })
            .collect();
        self.card_grid(cards, per_row, width);

        self.blank(1);
        self.heading(&projects.updates.heading);
        for post in &projects.updates.posts {
            self.push(Line::from(vec![
                Span::styled(self.glyphs.play, Style::default().fg(palette.accent)),
                Span::raw(" "),
                Span::styled(post.label.clone(), styles::heading(&palette)),
            ]));
            let url = self.link_line(&post.url, self.inner.saturating_sub(2));
            let mut spans = vec![Span::raw("  ")];
            spans.extend(url.spans);
            self.push(Line::from(spans));
        }
        self.blank(2);
    }

    fn entry_lines(&self, entry: &TimelineEntry, width: usize) -> Vec<Line<'static>> {
        let palette = self.palette;
        let period = Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD);
        let mut lines: Vec<_> = styled_lines(&entry.period, width, period).collect();
        lines.extend(styled_lines(&entry.title, width, styles::heading(&palette)));
        lines.extend(styled_lines(
            &entry.organization,
            width,
            styles::muted(&palette),
        ));
        lines.push(Line::default());
        for bullet in &entry.bullets {
            for (index, text) in wrap(bullet, width.saturating_sub(2)).into_iter().enumerate() {
                let marker = if index == 0 {
                    Span::styled(
                        format!("{} ", self.glyphs.bullet),
                        Style::default().fg(palette.primary),
                    )
                } else {
                    Span::raw("  ")
                };
                lines.push(Line::from(vec![
                    marker,
                    Span::styled(text, styles::body(&palette)),
                ]));
            }
        }
        lines
    }

    /// Spine cell for card row `row`: the node sits beside the period line.
    fn spine(&self, row: usize) -> Span<'static> {
        if row == 1 {
            Span::styled(self.glyphs.node, Style::default().fg(self.palette.primary))
        } else {
            Span::styled(self.glyphs.spine, styles::border(&self.palette))
        }
    }

    fn experience(&mut self, experience: &Experience) {
        self.heading(&experience.heading);
        let single_sided = self.compact || self.inner < 40;

        if single_sided {
            let width = self.inner.saturating_sub(2);
            for (index, entry) in experience.entries.iter().enumerate() {
                if index > 0 {
                    self.push(Line::from(self.spine(0)));
                }
                let card = self.card(None, self.entry_lines(entry, width.saturating_sub(4)), width);
                for (row, line) in card.into_iter().enumerate() {
                    let mut spans = vec![self.spine(row), Span::raw(" ")];
                    spans.extend(line.spans);
                    self.push(Line::from(spans));
                }
            }
        } else {
            let side = (self.inner - 5) / 2;
            let blank_side = " ".repeat(side);
            for (index, entry) in experience.entries.iter().enumerate() {
                if index > 0 {
                    self.push(Line::from(vec![
                        Span::raw(format!("{blank_side}  ")),
                        self.spine(0),
                    ]));
                }
                let card = self.card(None, self.entry_lines(entry, side.saturating_sub(4)), side);
                for (row, line) in card.into_iter().enumerate() {
                    let spine = self.spine(row);
                    let spans = match entry.side {
                        Side::Left => {
                            let mut spans = fit_line(line, side).spans;
                            spans.push(Span::raw("  "));
                            spans.push(spine);
                            spans
                        }
                        Side::Right => {
                            let mut spans =
                                vec![Span::raw(format!("{blank_side}  ")), spine, Span::raw("  ")];
                            spans.extend(line.spans);
                            spans
                        }
                    };
                    self.push(Line::from(spans));
                }
            }
        }
        self.blank(2);
    }

    fn contact(&mut self, contact: &Contact) {
        let palette = self.palette;
        self.heading(&contact.heading);

        let (per_row, width) = self.grid(26, if self.compact { 1 } else { 3 });
        let body_width = width.saturating_sub(4);
        let cards = contact
            .methods
            .iter()
            .map(|method| {
                let mut body: Vec<_> =
                    styled_lines(&method.text, body_width, styles::body(&palette)).collect();
                if let Some(url) = &method.url {
                    body.push(self.link_line(url, body_width));
                }
                Card {
                    title: Some(vec![Span::styled(
                        method.kind.clone(),
                        styles::heading_accent(&palette),
                    )]),
                    body,
                }
            })
            .collect();
        self.card_grid(cards, per_row, width);

        self.blank(1);
        self.form(&contact.form);
        self.blank(2);
    }

    /// The message form, drawn as static fields.
    fn form(&mut self, form: &ContactForm) {
        let palette = self.palette;
        let width = self.inner.min(72);
        let body_width = width.saturating_sub(4);

        let mut body = Vec::new();
        for field in &form.fields {
            body.push(Line::from(Span::styled(
                field.label.clone(),
                styles::body(&palette),
            )));
            let mut rows = vec![Line::from(Span::styled(
                self.ellipsize(&field.placeholder, body_width.saturating_sub(4)),
                styles::muted(&palette),
            ))];
            rows.resize(usize::from(field.rows.max(1)), Line::default());
            body.extend(self.card(None, rows, body_width));
            body.push(Line::default());
        }
        let button = Style::default()
            .fg(palette.bg_dark)
            .bg(palette.primary)
            .add_modifier(Modifier::BOLD);
        body.push(Line::from(Span::styled(
            format!(" {} ", form.submit_label),
            button,
        )));

        let title = vec![Span::styled(form.title.clone(), styles::heading(&palette))];
        let pad = center_pad(width, self.inner);
        for line in self.card(Some(title), body, width) {
            let mut spans = vec![Span::raw(pad.clone())];
            spans.extend(line.spans);
            self.push(Line::from(spans));
        }
    }

    fn footer(&mut self, profile: &Profile, footer: &Footer, year: i32) {
        let palette = self.palette;
        let inner = self.inner;

        self.blank(1);
        self.push(Line::from(Span::styled(
            self.glyphs.rule.repeat(inner),
            styles::border(&palette),
        )));
        self.blank(1);
        self.push(centered(
            vec![Span::styled(
                profile.brand.clone(),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            )],
            inner,
        ));
        for line in wrap(&footer.tagline, inner) {
            self.push(centered(
                vec![Span::styled(line, styles::muted(&palette))],
                inner,
            ));
        }

        if !footer.links.is_empty() {
            let separator = format!(" {} ", self.glyphs.bullet);
            let mut spans = Vec::new();
            for (index, link) in footer.links.iter().enumerate() {
                if index > 0 {
                    spans.push(Span::styled(separator.clone(), styles::muted(&palette)));
                }
                spans.push(Span::styled(link.label.clone(), styles::link(&palette)));
            }
            self.push(centered(spans, inner));
        }

        self.blank(1);
        let copyright = format!(
            "{} {year} {}. All rights reserved.",
            self.glyphs.copyright, footer.owner
        );
        for line in wrap(&copyright, inner) {
            self.push(centered(
                vec![Span::styled(line, styles::muted(&palette))],
                inner,
            ));
        }
        self.blank(1);
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use ratatui::text::Line;

    use folio_engine::{NAV_BAR_HEIGHT, Portfolio, Section, UiOptions};

    use super::{DocumentKey, PageDocument, build_document, clear_document_cache, page_document};

    fn portfolio() -> Portfolio {
        Portfolio::embedded().expect("embedded content")
    }

    fn text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn ascii() -> UiOptions {
        UiOptions {
            ascii_only: true,
            ..UiOptions::default()
        }
    }

    fn find_row(document: &PageDocument, needle: &str) -> usize {
        document
            .lines
            .iter()
            .position(|line| text(line).contains(needle))
            .unwrap_or_else(|| panic!("{needle:?} not rendered"))
    }

    #[test]
    fn sections_are_contiguous_and_in_order() {
        let portfolio = portfolio();
        for (width, compact) in [(40, true), (80, true), (120, false), (200, false)] {
            let document = build_document(&portfolio, width, compact, UiOptions::default(), 2024);
            let geometry = &document.geometry;
            let order: Vec<Section> = geometry.sections.iter().map(|span| span.section).collect();
            assert_eq!(order, Section::ALL);
            assert_eq!(geometry.sections[0].rows.start, 0);
            for pair in geometry.sections.windows(2) {
                assert_eq!(pair[0].rows.end, pair[1].rows.start);
            }
            let last = geometry.sections.last().expect("sections");
            assert!(last.rows.end < geometry.height, "footer follows contact");
            assert_eq!(geometry.height, document.lines.len());
        }
    }

    #[test]
    fn every_row_fills_the_width_exactly() {
        let portfolio = portfolio();
        for (width, compact) in [(24, true), (60, true), (95, false), (160, false)] {
            let document = build_document(&portfolio, width, compact, UiOptions::default(), 2024);
            for (row, line) in document.lines.iter().enumerate() {
                assert_eq!(line.width(), usize::from(width), "row {row}: {:?}", text(line));
            }
        }
    }

    #[test]
    fn home_leaves_room_for_the_nav_bar() {
        let document = build_document(&portfolio(), 100, false, UiOptions::default(), 2024);
        for line in &document.lines[..usize::from(NAV_BAR_HEIGHT)] {
            assert!(text(line).trim().is_empty());
        }
        let name_row = find_row(&document, "Raghav Garg");
        assert!(name_row > usize::from(NAV_BAR_HEIGHT));
    }

    #[test]
    fn compact_layout_stacks_grids() {
        let portfolio = portfolio();
        let wide = build_document(&portfolio, 120, false, UiOptions::default(), 2024);
        let compact = build_document(&portfolio, 120, true, UiOptions::default(), 2024);
        assert!(compact.geometry.height > wide.geometry.height);

        let row = find_row(&wide, "Scikit Learn");
        assert!(text(&wide.lines[row]).contains("C++"), "groups side by side");
        let row = find_row(&compact, "Scikit Learn");
        assert!(!text(&compact.lines[row]).contains("C++"));
    }

    #[test]
    fn skill_bars_are_proportional() {
        let document = build_document(&portfolio(), 60, true, ascii(), 2024);
        let row = find_row(&document, "Scikit Learn");
        assert!(text(&document.lines[row]).contains("90%"));
        let bar = text(&document.lines[row + 1]);
        let filled = bar.matches('#').count();
        let track = bar.matches('-').count();
        let total = filled + track;
        assert!(total > 0);
        let expected = (90 * total + 50) / 100;
        assert_eq!(filled, expected, "{bar:?}");
    }

    #[test]
    fn ascii_mode_renders_only_ascii() {
        let document = build_document(&portfolio(), 120, false, ascii(), 2024);
        for line in &document.lines {
            let line = text(line);
            assert!(line.is_ascii(), "{line:?}");
        }
    }

    #[test]
    fn timeline_sides_follow_entries_on_wide_layouts() {
        let document = build_document(&portfolio(), 120, false, ascii(), 2024);
        let left = text(&document.lines[find_row(&document, "Veeyo Tech")]);
        let right = text(&document.lines[find_row(&document, "National Service Scheme")]);
        let center = 60;
        assert!(left.find("Veeyo Tech").is_some_and(|col| col < center));
        assert!(right.find("National").is_some_and(|col| col > center));
    }

    #[test]
    fn footer_carries_year_and_owner() {
        let document = build_document(&portfolio(), 100, false, UiOptions::default(), 2031);
        let row = find_row(&document, "2031");
        assert!(text(&document.lines[row]).contains("Raghav Garg. All rights reserved."));
        let contact_end = document.geometry.sections[5].rows.end;
        assert!(row >= contact_end);
    }

    #[test]
    fn visible_slice_is_cut_at_the_end() {
        let document = build_document(&portfolio(), 80, true, UiOptions::default(), 2024);
        let height = document.lines.len();
        assert_eq!(document.visible(0, 10).len(), 10);
        assert_eq!(document.visible(height - 3, 10).len(), 3);
        assert!(document.visible(height + 5, 10).is_empty());
    }

    #[test]
    fn page_document_reuses_cached_layouts() {
        let portfolio = portfolio();
        let key = DocumentKey {
            content_id: u64::MAX,
            width: 100,
            compact: false,
            options: UiOptions::default(),
            year: 2024,
        };
        let first = page_document(&portfolio, key);
        let again = page_document(&portfolio, key);
        assert!(Rc::ptr_eq(&first, &again));

        let narrower = page_document(&portfolio, DocumentKey { width: 70, ..key });
        assert!(!Rc::ptr_eq(&first, &narrower));

        clear_document_cache();
        let rebuilt = page_document(&portfolio, key);
        assert!(!Rc::ptr_eq(&first, &rebuilt));
        assert_eq!(rebuilt.lines.len(), first.lines.len());
    }
}
