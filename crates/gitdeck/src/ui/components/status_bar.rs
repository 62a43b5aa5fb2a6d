use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::domain::repository::Repository;
use crate::ui::Component;
use crate::ui::icon::Icon;

/// Top bar with the app version on the left and the repository on the right.
pub struct StatusBar<'a> {
    repository: &'a Repository,
}

impl<'a> StatusBar<'a> {
    pub fn new(repository: &'a Repository) -> Self {
        Self { repository }
    }
}

impl Component for StatusBar<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let version = env!("CARGO_PKG_VERSION");
        let left_text = Span::styled(
            format!(" Gitdeck v{version}"),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
        let right_text = format!(
            "{} {} {} ",
            self.repository.full_name(),
            Icon::GitBranch,
            self.repository.branch()
        );
        let left_width = u16::try_from(left_text.width()).unwrap_or(u16::MAX);
        let right_width = u16::try_from(right_text.width()).unwrap_or(u16::MAX);
        let padding = area
            .width
            .saturating_sub(left_width.saturating_add(right_width));
        let status_bar = Paragraph::new(Line::from(vec![
            left_text,
            Span::raw(" ".repeat(padding as usize)),
            Span::styled(right_text, Style::default().fg(Color::Gray)),
        ]))
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
        f.render_widget(status_bar, area);
    }
}
