//! Root layout computation for header, tab bar, query field, results,
//! and status bar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Hide the header banner below this terminal height.
pub const HIDE_HEADER_THRESHOLD: u16 = 14;

/// Computed layout regions for a single frame.
pub struct AppLayout {
    /// Header banner (None on very short terminals).
    pub header: Option<Rect>,
    /// Category tab bar.
    pub tabs: Rect,
    /// Query input field.
    pub query: Rect,
    /// Results + detail area.
    pub main: Rect,
    /// Status bar (bottom row).
    pub status: Rect,
}

impl AppLayout {
    /// Compute layout regions from the terminal area.
    pub fn compute(area: Rect) -> Self {
        let show_header = area.height >= HIDE_HEADER_THRESHOLD;

        let constraints = if show_header {
            vec![
                Constraint::Length(3), // Header
                Constraint::Length(1), // Tabs
                Constraint::Length(3), // Query field
                Constraint::Min(1),    // Main
                Constraint::Length(1), // Status bar
            ]
        } else {
            vec![
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(1),
            ]
        };

        let rows = Layout::vertical(constraints).split(area);

        if show_header {
            AppLayout {
                header: Some(rows[0]),
                tabs: rows[1],
                query: rows[2],
                main: rows[3],
                status: rows[4],
            }
        } else {
            AppLayout {
                header: None,
                tabs: rows[0],
                query: rows[1],
                main: rows[2],
                status: rows[3],
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tall_terminal_has_header() {
        let layout = AppLayout::compute(Rect::new(0, 0, 100, 40));
        assert!(layout.header.is_some());
        assert_eq!(layout.header.unwrap().height, 3);
        assert_eq!(layout.status.height, 1);
    }

    #[test]
    fn test_short_terminal_drops_header() {
        let layout = AppLayout::compute(Rect::new(0, 0, 100, 12));
        assert!(layout.header.is_none());
        assert_eq!(layout.tabs.height, 1);
    }

    #[test]
    fn test_rows_fill_height() {
        let area = Rect::new(0, 0, 80, 30);
        let layout = AppLayout::compute(area);
        let total = layout.header.map(|h| h.height).unwrap_or(0)
            + layout.tabs.height
            + layout.query.height
            + layout.main.height
            + layout.status.height;
        assert_eq!(total, area.height);
    }
}
