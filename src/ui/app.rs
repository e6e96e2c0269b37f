//! Main UI Application
//!
//! Profile panel, chart selector and the selected chart.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use super::canvas::render_scene;
use crate::chart::{layout_chart, ChartKind, ChartScene, Viewport};
use crate::data::ExperienceRecord;
use crate::series::{build_all, ProfileSummary};

/// Main UI application
pub struct App {
    /// Validated input records, never modified
    records: Vec<ExperienceRecord>,
    /// Totals shown in the profile panel
    summary: ProfileSummary,
    /// Logical surface every chart is laid out in
    viewport: Viewport,
    /// Chart currently on screen
    selected: ChartKind,
}

impl App {
    pub fn new(records: Vec<ExperienceRecord>, summary: ProfileSummary, viewport: Viewport, initial: ChartKind) -> Self {
        log::info!("Showing {} for {}", initial.name(), summary.login);

        Self {
            records,
            summary,
            viewport,
            selected: initial,
        }
    }

    pub fn selected(&self) -> ChartKind {
        self.selected
    }

    pub fn select(&mut self, kind: ChartKind) {
        if kind != self.selected {
            log::debug!("Switched to {}", kind.name());
            self.selected = kind;
        }
    }

    /// Series are rebuilt from the records on every call
    pub fn scene(&self) -> Option<ChartScene> {
        let charts = build_all(&self.records);
        layout_chart(self.selected, &charts, &self.viewport)
    }

    /// Handle keyboard input, returns true if should quit
    pub fn handle_input(&mut self, key: KeyEvent) -> Result<bool> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(true);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
            KeyCode::Char('1') => self.select(ChartKind::LevelByTime),
            KeyCode::Char('2') => self.select(ChartKind::XpByTime),
            KeyCode::Char('3') => self.select(ChartKind::XpByProject),
            KeyCode::Tab | KeyCode::Right => self.select(self.selected.next()),
            KeyCode::BackTab | KeyCode::Left => self.select(self.selected.next().next()),
            _ => {}
        }

        Ok(false)
    }

    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(1),
            ])
            .split(frame.area());

        self.render_profile(frame, chunks[0]);
        self.render_tabs(frame, chunks[1]);

        let scene = self.scene();
        render_scene(frame, chunks[2], self.selected.name(), scene.as_ref());

        let help = Paragraph::new(Line::from(vec![
            Span::styled("1/2/3", Style::default().fg(Color::Yellow)),
            Span::raw(" chart  "),
            Span::styled("Tab", Style::default().fg(Color::Yellow)),
            Span::raw(" next  "),
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::raw(" quit"),
        ]));
        frame.render_widget(help, chunks[3]);
    }

    fn render_profile(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let label = Style::default().fg(Color::Gray);
        let value = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

        let line = Line::from(vec![
            Span::styled("Username: ", label),
            Span::styled(self.summary.login.clone(), value),
            Span::raw("   "),
            Span::styled("Total xp: ", label),
            Span::styled(self.summary.total_xp.to_string(), value),
            Span::raw("   "),
            Span::styled("Current level: ", label),
            Span::styled(self.summary.level.to_string(), value),
        ]);

        let profile = Paragraph::new(line).block(Block::default().borders(Borders::ALL).title(" Profile "));
        frame.render_widget(profile, area);
    }

    fn render_tabs(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let titles: Vec<Line> = ChartKind::ALL
            .iter()
            .enumerate()
            .map(|(i, kind)| Line::from(format!("{} {}", i + 1, kind.name())))
            .collect();
        let selected = ChartKind::ALL
            .iter()
            .position(|kind| *kind == self.selected)
            .unwrap_or(0);

        let tabs = Tabs::new(titles)
            .block(Block::default().borders(Borders::ALL))
            .select(selected)
            .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
        frame.render_widget(tabs, area);
    }
}
