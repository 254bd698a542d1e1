use std::io;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};

use super::events::Action;
use super::layout::AppLayout;
use super::theme;
use super::views::search::SearchViewState;
use crate::core::catalog::{Catalog, Category};

/// Central application state (Elm architecture).
pub struct AppState {
    /// Whether the app is still running.
    pub running: bool,
    /// The immutable reference catalog.
    catalog: Catalog,
    /// The search screen.
    pub search: SearchViewState,
    /// Whether the help modal is open.
    pub show_help: bool,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            running: true,
            catalog,
            search: SearchViewState::new(),
            show_help: false,
        }
    }

    // ── Elm event loop ──────────────────────────────────────────────────

    /// Main event loop: render → select → update → loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        tick_rate: Duration,
    ) -> io::Result<()> {
        let mut tick_interval = tokio::time::interval(tick_rate);
        let mut event_stream = EventStream::new();

        while self.running {
            terminal.draw(|frame| self.render(frame))?;

            tokio::select! {
                _ = tick_interval.tick() => {}
                Some(Ok(event)) = event_stream.next() => {
                    self.handle_input(event);
                }
            }
        }

        Ok(())
    }

    // ── Event handling ──────────────────────────────────────────────────

    fn handle_input(&mut self, event: Event) {
        // Priority 1: help modal consumes all input when open
        if self.show_help {
            if let Some(action) = self.map_help_input(&event) {
                self.handle_action(action);
            }
            return;
        }

        // Priority 2: the search view (query editing, selection)
        if self.search.handle_input(&event, &self.catalog) {
            return;
        }

        // Priority 3: global keybindings
        if let Some(action) = self.map_input_to_action(event) {
            self.handle_action(action);
        }
    }

    // ── Input mapping ───────────────────────────────────────────────────

    fn map_help_input(&self, event: &Event) -> Option<Action> {
        let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };
        match code {
            KeyCode::Esc | KeyCode::F(1) => Some(Action::CloseHelp),
            _ => None,
        }
    }

    /// Global keybindings. Printable keys never arrive here (the query
    /// field consumes them first), so only chords and function keys map
    /// to global actions.
    fn map_input_to_action(&self, event: Event) -> Option<Action> {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };

        match (modifiers, code) {
            (KeyModifiers::CONTROL, KeyCode::Char('t')) => Some(Action::ToggleQueryMode),
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Quit),
            (KeyModifiers::CONTROL, KeyCode::Char('q')) => Some(Action::Quit),
            (KeyModifiers::NONE, KeyCode::Tab) => Some(Action::NextCategory),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::BackTab) => {
                Some(Action::PrevCategory)
            }
            (KeyModifiers::NONE, KeyCode::F(1)) => Some(Action::ShowHelp),
            _ => None,
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::SelectCategory(category) => {
                self.search.select_category(category);
            }
            Action::NextCategory => {
                let next = self.search.finder().active_category().next();
                self.search.select_category(next);
            }
            Action::PrevCategory => {
                let prev = self.search.finder().active_category().prev();
                self.search.select_category(prev);
            }
            Action::ToggleQueryMode => self.search.toggle_query_mode(),
            Action::Submit => self.search.submit(&self.catalog),
            Action::ClearQuery => self.search.clear_query(&self.catalog),
            Action::ShowHelp => self.show_help = true,
            Action::CloseHelp => self.show_help = false,
        }
    }

    // ── Rendering ───────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let layout = AppLayout::compute(area);

        if let Some(header_area) = layout.header {
            self.render_header(frame, header_area);
        }
        self.render_tabs(frame, layout.tabs);
        self.search.render_query(frame, layout.query);
        self.search.render_main(frame, layout.main);
        self.render_status_bar(frame, layout.status);

        if self.show_help {
            self.render_help_modal(frame, area);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let category = self.search.finder().active_category();
        let header = Paragraph::new(Line::from(vec![
            Span::styled(" Mini World ID Finder ", theme::brand_badge()),
            Span::raw("  "),
            Span::styled(
                format!("{} {}", category.icon(), category.label()),
                theme::category_title(category),
            ),
            Span::styled(
                format!("  ({} entries)", self.catalog.dataset(category).len()),
                theme::muted(),
            ),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::category_accent(category))),
        );
        frame.render_widget(header, area);
    }

    fn render_tabs(&self, frame: &mut Frame, area: Rect) {
        let active = self.search.finder().active_category();
        let mut spans: Vec<Span> = vec![Span::raw(" ")];
        for category in Category::ALL {
            let style = if category == active {
                Style::default()
                    .fg(theme::category_accent(category))
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                theme::muted()
            };
            spans.push(Span::styled(
                format!("{} {}", category.icon(), category.label()),
                style,
            ));
            spans.push(Span::raw("   "));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let finder = self.search.finder();
        let status = Line::from(vec![
            Span::styled(" mwfinder ", theme::brand_badge()),
            Span::raw(" "),
            Span::styled(format!(" {} ", finder.query_mode().label()), theme::mode_badge()),
            Span::raw(" │ "),
            Span::styled("Tab", theme::key_hint()),
            Span::raw(":category "),
            Span::styled("Ctrl+T", theme::key_hint()),
            Span::raw(":mode "),
            Span::styled("Enter", theme::key_hint()),
            Span::raw(":search "),
            Span::styled("Esc", theme::key_hint()),
            Span::raw(":clear "),
            Span::styled("F1", theme::key_hint()),
            Span::raw(":help "),
            Span::styled("Ctrl+C", theme::key_hint()),
            Span::raw(":quit"),
        ]);
        frame.render_widget(Paragraph::new(status), area);
    }

    fn render_help_modal(&self, frame: &mut Frame, area: Rect) {
        let modal = centered_rect(50, 60, area);

        let keybindings = [
            ("Tab / Shift+Tab", "Next / previous category"),
            ("Ctrl+T", "Toggle name/ID search"),
            ("Enter", "Run the search"),
            ("Esc", "Clear query and results"),
            ("Up / Down", "Select a result"),
            ("F1", "Toggle this help"),
            ("Ctrl+C / Ctrl+Q", "Quit"),
        ];

        let mut lines = vec![
            Line::raw(""),
            Line::from(Span::styled(
                " Keybindings",
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::raw(""),
        ];

        for (key, desc) in keybindings {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("{:<18}", key),
                    Style::default()
                        .fg(theme::PRIMARY_LIGHT)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(desc),
            ]));
        }

        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "  Press F1 or Esc to close",
            theme::muted(),
        )));

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT));

        frame.render_widget(Clear, modal);
        frame.render_widget(Paragraph::new(lines).block(block), modal);
    }
}

/// Calculate a centered rect using percentage of parent area.
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
