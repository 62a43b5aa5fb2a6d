use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::Component;

const EMPTY_SELECTION_MESSAGE: &str = "Select a file to view its contents";
const MIN_GUTTER_WIDTH: usize = 3;

/// Read-only source panel with a line-number gutter.
///
/// Text is shown as given, split on `\n`, with no highlighting.
pub struct CodeViewer<'a> {
    code: &'a str,
    file_name: Option<&'a str>,
    is_focused: bool,
    scroll_offset: u16,
}

impl<'a> CodeViewer<'a> {
    /// Creates a viewer for `code`; without `file_name` a placeholder is
    /// shown instead.
    pub fn new(file_name: Option<&'a str>, code: &'a str) -> Self {
        Self {
            code,
            file_name,
            is_focused: false,
            scroll_offset: 0,
        }
    }

    #[must_use]
    pub fn scroll_offset(mut self, scroll_offset: u16) -> Self {
        self.scroll_offset = scroll_offset;

        self
    }

    #[must_use]
    pub fn focused(mut self, is_focused: bool) -> Self {
        self.is_focused = is_focused;

        self
    }

    /// Numbers every line of `code`, starting at 1.
    fn numbered_lines(code: &str) -> Vec<Line<'static>> {
        let line_count = code.split('\n').count();
        let gutter_width = line_count.to_string().len().max(MIN_GUTTER_WIDTH);

        code.split('\n')
            .enumerate()
            .map(|(index, line)| {
                let content = if line.is_empty() { " " } else { line };

                Line::from(vec![
                    Span::styled(
                        format!("{:>gutter_width$} ", index + 1),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(content.to_string()),
                ])
            })
            .collect()
    }
}

impl Component for CodeViewer<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let border_color = if self.is_focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let Some(file_name) = self.file_name else {
            let placeholder = Paragraph::new(Span::styled(
                EMPTY_SELECTION_MESSAGE,
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Center)
            .block(block);
            f.render_widget(placeholder, area);

            return;
        };

        let paragraph = Paragraph::new(Self::numbered_lines(self.code))
            .block(block.title(Span::styled(
                format!(" {file_name} "),
                Style::default().fg(Color::Yellow),
            )))
            .scroll((self.scroll_offset, 0));
        f.render_widget(paragraph, area);
    }
}
