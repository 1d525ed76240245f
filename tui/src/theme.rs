//! Color theme and glyphs for the Folio TUI.
//!
//! Uses the Kanagawa Wave palette by default with an optional high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use folio_types::ui::UiOptions;

/// Kanagawa Wave color palette constants.
mod colors {
    use super::Color;

    // === Backgrounds (Sumi Ink) ===
    pub const BG_DARK: Color = Color::Rgb(22, 22, 29); // sumiInk0
    pub const BG_PANEL: Color = Color::Rgb(31, 31, 40); // sumiInk3
    pub const BG_HIGHLIGHT: Color = Color::Rgb(42, 42, 55); // sumiInk4
    pub const BG_BORDER: Color = Color::Rgb(84, 84, 109); // sumiInk6

    // === Foregrounds (Fuji) ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186); // fujiWhite
    pub const TEXT_SECONDARY: Color = Color::Rgb(200, 192, 147); // oldWhite
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray

    // === Brand ===
    pub const PRIMARY: Color = Color::Rgb(126, 156, 216); // crystalBlue
    pub const ACCENT: Color = Color::Rgb(230, 195, 132); // carpYellow
    pub const LINK: Color = Color::Rgb(127, 180, 202); // springBlue
    pub const TAG: Color = Color::Rgb(152, 187, 108); // springGreen
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    /// Brand color: progress bar, active navigation, headings.
    pub primary: Color,
    /// Second heading tone and the brand mark's dot.
    pub accent: Color,
    pub link: Color,
    pub tag: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_highlight: colors::BG_HIGHLIGHT,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            primary: colors::PRIMARY,
            accent: colors::ACCENT,
            link: colors::LINK,
            tag: colors::TAG,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_highlight: Color::DarkGray,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::Gray,
            primary: Color::Cyan,
            accent: Color::Yellow,
            link: Color::Cyan,
            tag: Color::Green,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for bars, boxes, and icons.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub bar_fill: &'static str,
    pub bar_track: &'static str,
    pub progress: &'static str,
    pub bullet: &'static str,
    pub chevron: &'static str,
    pub link: &'static str,
    pub menu: &'static str,
    pub close: &'static str,
    pub selected: &'static str,
    pub spine: &'static str,
    pub node: &'static str,
    pub play: &'static str,
    pub rule: &'static str,
    pub ellipsis: &'static str,
    pub copyright: &'static str,
    pub box_top_left: &'static str,
    pub box_top_right: &'static str,
    pub box_bottom_left: &'static str,
    pub box_bottom_right: &'static str,
    pub box_horizontal: &'static str,
    pub box_vertical: &'static str,
    /// Whether content icons (emoji) may be drawn.
    pub icons: bool,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            bar_fill: "#",
            bar_track: "-",
            progress: "=",
            bullet: "*",
            chevron: ">",
            link: "->",
            menu: "=",
            close: "x",
            selected: ">",
            spine: "|",
            node: "o",
            play: ">",
            rule: "-",
            ellipsis: "...",
            copyright: "(c)",
            box_top_left: "+",
            box_top_right: "+",
            box_bottom_left: "+",
            box_bottom_right: "+",
            box_horizontal: "-",
            box_vertical: "|",
            icons: false,
        }
    } else {
        Glyphs {
            bar_fill: "█",
            bar_track: "░",
            progress: "━",
            bullet: "•",
            chevron: "›",
            link: "↗",
            menu: "☰",
            close: "✕",
            selected: "▸",
            spine: "│",
            node: "●",
            play: "▶",
            rule: "─",
            ellipsis: "…",
            copyright: "©",
            box_top_left: "╭",
            box_top_right: "╮",
            box_bottom_left: "╰",
            box_bottom_right: "╯",
            box_horizontal: "─",
            box_vertical: "│",
            icons: true,
        }
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn heading(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn heading_accent(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn body(palette: &Palette) -> Style {
        Style::default().fg(palette.text_secondary)
    }

    #[must_use]
    pub fn muted(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn link(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.link)
            .add_modifier(Modifier::UNDERLINED)
    }

    #[must_use]
    pub fn border(palette: &Palette) -> Style {
        Style::default().fg(palette.bg_border)
    }

    #[must_use]
    pub fn nav_item(palette: &Palette) -> Style {
        Style::default().fg(palette.text_secondary)
    }

    #[must_use]
    pub fn nav_item_active(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    #[must_use]
    pub fn menu_item_active(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .bg(palette.bg_highlight)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use folio_types::ui::UiOptions;

    use super::{glyphs, palette};

    #[test]
    fn ascii_glyphs_are_single_byte() {
        let g = glyphs(UiOptions {
            ascii_only: true,
            ..UiOptions::default()
        });
        for glyph in [
            g.bar_fill,
            g.bar_track,
            g.progress,
            g.bullet,
            g.spine,
            g.node,
            g.box_top_left,
            g.box_horizontal,
            g.box_vertical,
        ] {
            assert!(glyph.is_ascii() && glyph.len() == 1, "{glyph:?}");
        }
        assert!(!g.icons);
    }

    #[test]
    fn box_glyphs_are_one_column_wide() {
        let g = glyphs(UiOptions::default());
        for glyph in [g.box_top_left, g.box_top_right, g.box_horizontal, g.box_vertical] {
            assert_eq!(unicode_width::UnicodeWidthStr::width(glyph), 1);
        }
    }

    #[test]
    fn high_contrast_swaps_palette() {
        let hc = palette(UiOptions {
            high_contrast: true,
            ..UiOptions::default()
        });
        assert_eq!(hc.bg_dark, ratatui::style::Color::Black);
    }
}
