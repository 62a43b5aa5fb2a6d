use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::Pane;
use crate::ui::Component;

/// Bottom bar listing the key bindings of the focused pane.
pub struct FooterBar {
    focus: Pane,
}

impl FooterBar {
    pub fn new(focus: Pane) -> Self {
        Self { focus }
    }

    /// Returns `(key, action)` pairs shown for the focused pane.
    fn actions(&self) -> &'static [(&'static str, &'static str)] {
        match self.focus {
            Pane::Tree => &[
                ("j/k", "move"),
                ("Enter/Space", "open"),
                ("b", "branch"),
                ("Tab", "code"),
                ("q", "quit"),
            ],
            Pane::Code => &[
                ("j/k", "scroll"),
                ("g/G", "top/bottom"),
                ("b", "branch"),
                ("Tab", "files"),
                ("q", "quit"),
            ],
        }
    }
}

impl Component for FooterBar {
    fn render(&self, f: &mut Frame, area: Rect) {
        let mut spans = vec![Span::raw(" ")];
        for (index, (key, action)) in self.actions().iter().enumerate() {
            if index > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(
                *key,
                Style::default().add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(format!(": {action}")));
        }

        let footer = Paragraph::new(Line::from(spans))
            .style(Style::default().bg(Color::DarkGray).fg(Color::White));
        f.render_widget(footer, area);
    }
}
