//! Centralized color theme for the mwfinder TUI.
//!
//! All color constants are RGB truecolor. Views import from here
//! instead of using inline `Color::*` literals. Each category carries
//! its own accent, echoing the per-tab gradients of the original web
//! finder.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};

use crate::core::catalog::Category;

// ── Primary palette ─────────────────────────────────────────────────────────

/// Indigo: primary accent, focused borders.
pub const PRIMARY: Color = Color::Rgb(0x5C, 0x6B, 0xC0);
/// Light indigo: highlights, hints, secondary focus.
pub const PRIMARY_LIGHT: Color = Color::Rgb(0x79, 0x86, 0xCB);

// ── Accent ──────────────────────────────────────────────────────────────────

/// Pink: calls to action, selected results.
pub const ACCENT: Color = Color::Rgb(0xEC, 0x40, 0x7A);

// ── Backgrounds ─────────────────────────────────────────────────────────────

/// Near-black base background.
pub const BG_BASE: Color = Color::Rgb(0x12, 0x12, 0x1A);

// ── Text ────────────────────────────────────────────────────────────────────

/// Primary text.
pub const TEXT: Color = Color::Rgb(0xE0, 0xE0, 0xE0);
/// Muted text: secondary labels, borders.
pub const TEXT_MUTED: Color = Color::Rgb(0x80, 0x80, 0x80);
/// Dim text: disabled items, faint hints.
pub const TEXT_DIM: Color = Color::Rgb(0x50, 0x50, 0x50);

// ── Semantic ────────────────────────────────────────────────────────────────

pub const ERROR: Color = Color::Rgb(0xEF, 0x53, 0x50);
pub const WARNING: Color = Color::Rgb(0xFF, 0xA7, 0x26);

// ── Category accents ────────────────────────────────────────────────────────

/// Per-tab accent color, mirroring the original finder's header
/// gradients (purple/red/green/cyan/orange/blue).
pub fn category_accent(category: Category) -> Color {
    match category {
        Category::All => Color::Rgb(0xAB, 0x47, 0xBC),
        Category::Items => Color::Rgb(0xEF, 0x53, 0x50),
        Category::Creatures => Color::Rgb(0x4C, 0xAF, 0x50),
        Category::ThanThu => Color::Rgb(0x26, 0xC6, 0xDA),
        Category::Skins => Color::Rgb(0xFF, 0xA7, 0x26),
        Category::Others => Color::Rgb(0x42, 0xA5, 0xF5),
    }
}

// ── Style helpers ───────────────────────────────────────────────────────────

/// Section/title text in the active category's accent.
pub fn category_title(category: Category) -> Style {
    Style::default()
        .fg(category_accent(category))
        .add_modifier(Modifier::BOLD)
}

/// Highlighted/selected item.
pub fn highlight() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Muted label text.
pub fn muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

/// Dim text for disabled/faint items.
pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Key hint style (e.g., "[Tab]:category").
pub fn key_hint() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Status bar brand badge.
pub fn brand_badge() -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Query-mode badge (by name / by ID).
pub fn mode_badge() -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(PRIMARY_LIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Focused border style.
pub fn border_focused() -> Style {
    Style::default().fg(PRIMARY)
}

/// Unfocused border style.
pub fn border_default() -> Style {
    Style::default().fg(TEXT_DIM)
}

// ── Block builders ──────────────────────────────────────────────────────────

/// A bordered block with focused styling.
pub fn block_focused(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border_focused())
}

/// A bordered block with default (unfocused) styling.
pub fn block_default(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_accents_are_distinct() {
        for (i, &a) in Category::ALL.iter().enumerate() {
            for &b in &Category::ALL[i + 1..] {
                assert_ne!(category_accent(a), category_accent(b));
            }
        }
    }

    #[test]
    fn test_style_helpers_return_non_default() {
        assert_ne!(highlight(), Style::default());
        assert_ne!(muted(), Style::default());
        assert_ne!(brand_badge(), Style::default());
        assert_ne!(mode_badge(), Style::default());
    }
}
