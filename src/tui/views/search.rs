//! The search screen: query editing, result list, and detail panel.
//!
//! Wraps the core [`Finder`] controller. All state changes funnel
//! through the controller's four operations; this view only adds
//! cursor handling and result-list selection on top.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::super::theme;
use crate::core::catalog::{Catalog, Category, Entry};
use crate::core::finder::Finder;
use crate::tui::widgets::input_buffer::InputBuffer;

pub struct SearchViewState {
    finder: Finder,
    input: InputBuffer,
    selected: usize,
}

impl SearchViewState {
    pub fn new() -> Self {
        Self {
            finder: Finder::new(),
            input: InputBuffer::new(),
            selected: 0,
        }
    }

    pub fn finder(&self) -> &Finder {
        &self.finder
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.finder.results().get(self.selected)
    }

    /// Switch tab: the controller resets its query state, the input
    /// field follows.
    pub fn select_category(&mut self, category: Category) {
        self.finder.select_category(category);
        self.input.clear();
        self.selected = 0;
    }

    pub fn toggle_query_mode(&mut self) {
        self.finder.toggle_query_mode();
    }

    /// Submit the current field content as the query.
    pub fn submit(&mut self, catalog: &Catalog) {
        self.finder.set_query(self.input.text());
        self.finder.search(catalog);
        self.selected = 0;
        tracing::debug!(
            "search {:?} {:?} {:?} -> {} results",
            self.finder.active_category(),
            self.finder.query_mode(),
            self.finder.query(),
            self.finder.results().len()
        );
    }

    /// Clear the field and re-run the (now blank) query, which empties
    /// the results.
    pub fn clear_query(&mut self, catalog: &Catalog) {
        self.input.clear();
        self.finder.set_query("");
        self.finder.search(catalog);
        self.selected = 0;
    }

    /// Handle input the view cares about. Returns true if consumed.
    pub fn handle_input(&mut self, event: &Event, catalog: &Catalog) -> bool {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return false;
        };

        match (*modifiers, *code) {
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                self.input.insert_char(c);
                true
            }
            (KeyModifiers::NONE, KeyCode::Backspace) => {
                self.input.backspace();
                true
            }
            (KeyModifiers::NONE, KeyCode::Delete) => {
                self.input.delete();
                true
            }
            (KeyModifiers::NONE, KeyCode::Left) => {
                self.input.move_left();
                true
            }
            (KeyModifiers::NONE, KeyCode::Right) => {
                self.input.move_right();
                true
            }
            (KeyModifiers::NONE, KeyCode::Home) => {
                self.input.move_home();
                true
            }
            (KeyModifiers::NONE, KeyCode::End) => {
                self.input.move_end();
                true
            }
            (KeyModifiers::NONE, KeyCode::Enter) => {
                self.submit(catalog);
                true
            }
            (KeyModifiers::NONE, KeyCode::Esc) => {
                self.clear_query(catalog);
                true
            }
            (KeyModifiers::NONE, KeyCode::Down) => {
                let count = self.finder.results().len();
                if count > 0 && self.selected + 1 < count {
                    self.selected += 1;
                }
                true
            }
            (KeyModifiers::NONE, KeyCode::Up) => {
                self.selected = self.selected.saturating_sub(1);
                true
            }
            _ => false,
        }
    }

    // ── Rendering ───────────────────────────────────────────────────────

    /// Render the query field into its dedicated region.
    pub fn render_query(&self, frame: &mut Frame, area: Rect) {
        let mode = self.finder.query_mode();
        let title = format!("Search {}", mode.label());
        let block = theme::block_focused(&title);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let line = if self.input.text().is_empty() {
            Line::from(Span::styled(mode.placeholder(), theme::dim()))
        } else {
            Line::from(Span::styled(
                self.input.text().to_string(),
                Style::default().fg(theme::TEXT),
            ))
        };
        frame.render_widget(Paragraph::new(line), inner);

        let cursor_x = inner.x + self.input.cursor_chars() as u16;
        if cursor_x < inner.x + inner.width {
            frame.set_cursor_position((cursor_x, inner.y));
        }
    }

    /// Render the results list and detail panel.
    pub fn render_main(&self, frame: &mut Frame, area: Rect) {
        let cols = Layout::horizontal([
            Constraint::Percentage(55),
            Constraint::Percentage(45),
        ])
        .split(area);

        self.render_results(frame, cols[0]);
        self.render_detail(frame, cols[1]);
    }

    fn render_results(&self, frame: &mut Frame, area: Rect) {
        let results = self.finder.results();
        let title = format!("Results ({})", results.len());
        let block = theme::block_default(&title);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if results.is_empty() {
            let (hint, style) = if self.finder.has_no_matches() {
                ("No matching entries.", Style::default().fg(theme::ERROR))
            } else {
                ("Type a query and press Enter to search.", theme::muted())
            };
            frame.render_widget(
                Paragraph::new(vec![
                    Line::raw(""),
                    Line::from(Span::styled(format!("  {hint}"), style)),
                ]),
                inner,
            );
            return;
        }

        // Keep the selection inside the visible window
        let visible = inner.height as usize;
        let offset = self
            .selected
            .saturating_sub(visible.saturating_sub(1))
            .min(results.len().saturating_sub(visible.max(1)));

        let mut lines: Vec<Line<'static>> = Vec::new();
        for (i, entry) in results.iter().enumerate().skip(offset).take(visible) {
            let is_selected = i == self.selected;
            let marker = if is_selected { "▸ " } else { "  " };
            let style = if is_selected {
                theme::highlight()
            } else {
                Style::default().fg(theme::TEXT)
            };
            lines.push(Line::from(vec![
                Span::styled(marker.to_string(), style),
                Span::styled(format!("{:<10}", entry.id), theme::muted()),
                Span::styled(entry.name.clone(), style),
            ]));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_detail(&self, frame: &mut Frame, area: Rect) {
        let block = theme::block_default("Detail");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(entry) = self.selected_entry() else {
            frame.render_widget(
                Paragraph::new(vec![
                    Line::raw(""),
                    Line::from(Span::styled(
                        "  Select a result to view details.",
                        theme::muted(),
                    )),
                ]),
                inner,
            );
            return;
        };

        let category = self.finder.active_category();
        let mut lines = vec![
            Line::raw(""),
            Line::from(Span::styled(
                format!("  {} {}", category.icon(), entry.name),
                theme::category_title(category),
            )),
            Line::raw(""),
            Line::from(vec![
                Span::styled("  ID:    ", theme::muted()),
                Span::styled(entry.id.clone(), Style::default().fg(theme::TEXT)),
            ]),
            Line::from(vec![
                Span::styled("  Type:  ", theme::muted()),
                Span::styled(
                    category.label(),
                    Style::default().fg(theme::category_accent(category)),
                ),
            ]),
        ];

        if let Some(level) = entry.level {
            lines.push(Line::from(vec![
                Span::styled("  Level: ", theme::muted()),
                Span::styled(level.to_string(), Style::default().fg(theme::WARNING)),
            ]));
        }
        if let Some(ref url) = entry.image_url {
            lines.push(Line::from(vec![
                Span::styled("  Image: ", theme::muted()),
                Span::styled(url.clone(), theme::dim()),
            ]));
        }

        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "  [↑/↓] select  [Enter] search  [Esc] clear",
            theme::key_hint(),
        )));

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

impl Default for SearchViewState {
    fn default() -> Self {
        Self::new()
    }
}
