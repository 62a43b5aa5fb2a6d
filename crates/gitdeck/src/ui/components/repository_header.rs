use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::domain::repository::{Commit, Repository};
use crate::ui::Component;

/// Rows used by the title line and the last-commit line.
pub const HEADER_HEIGHT: u16 = 2;

/// Repository title, description and last commit above the content panels.
pub struct RepositoryHeader<'a> {
    repository: &'a Repository,
}

impl<'a> RepositoryHeader<'a> {
    pub fn new(repository: &'a Repository) -> Self {
        Self { repository }
    }

    fn title_line(repository: &Repository) -> Line<'static> {
        let mut spans = vec![Span::styled(
            format!(" {}", repository.full_name()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )];

        if !repository.description.is_empty() {
            spans.push(Span::styled(
                format!("  {}", repository.description),
                Style::default().fg(Color::Gray),
            ));
        }

        Line::from(spans)
    }

    fn commit_line(commit: &Commit) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!(" {}", commit.hash), Style::default().fg(Color::Yellow)),
            Span::raw(format!(" {}", commit.message)),
            Span::styled(
                format!(" · {} · {}", commit.author, commit.date),
                Style::default().fg(Color::DarkGray),
            ),
        ])
    }
}

impl Component for RepositoryHeader<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let mut lines = vec![Self::title_line(self.repository)];
        if let Some(commit) = &self.repository.last_commit {
            lines.push(Self::commit_line(commit));
        }

        f.render_widget(Paragraph::new(lines), area);
    }
}
