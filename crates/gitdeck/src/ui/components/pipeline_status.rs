use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::domain::pipeline::{self, PipelineRun, PipelineSummary, Step, StepView};
use crate::ui::Component;
use crate::ui::icon::Icon;
use crate::ui::style;

/// Rows used by the header, the gauge and the block borders.
pub const CHROME_HEIGHT: u16 = 4;

/// Pipeline panel with overall status, progress gauge and one row per step.
pub struct PipelineStatus<'a> {
    run: Option<&'a PipelineRun>,
    steps: &'a [Step],
}

impl<'a> PipelineStatus<'a> {
    pub fn new(steps: &'a [Step]) -> Self {
        Self { run: None, steps }
    }

    /// Shows the run heading above the status row when `run` is known.
    #[must_use]
    pub fn run(mut self, run: Option<&'a PipelineRun>) -> Self {
        self.run = run;

        self
    }

    /// Returns the panel height needed to show every step.
    pub fn height(&self) -> u16 {
        let step_rows = u16::try_from(self.steps.len()).unwrap_or(u16::MAX);
        let run_rows = u16::from(self.run.is_some());

        CHROME_HEIGHT
            .saturating_add(run_rows)
            .saturating_add(step_rows)
    }

    /// Builds `Pipeline #<id> · Triggered by <author> · <date>`.
    fn run_line(run: &PipelineRun) -> Line<'static> {
        Line::from(vec![
            Span::styled(run.title(), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!(" · {}", run.trigger_label()),
                Style::default().fg(Color::DarkGray),
            ),
        ])
    }

    fn header_line(summary: &PipelineSummary, width: u16) -> Line<'static> {
        let left_text = format!("{} {}", Icon::StatusDot, summary.overall);
        let right_text = summary.completed_label();
        let padding = usize::from(width)
            .saturating_sub(left_text.width() + right_text.width())
            .max(1);

        Line::from(vec![
            Span::styled(
                format!("{} ", Icon::StatusDot),
                Style::default().fg(style::overall_status_color(summary.overall)),
            ),
            Span::styled(
                summary.overall.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ".repeat(padding)),
            Span::styled(right_text, Style::default().fg(Color::Gray)),
        ])
    }

    /// Builds one step row with the duration right-aligned to `width`.
    fn step_line(view: &StepView<'_>, width: u16) -> Line<'static> {
        let icon = style::indicator_icon(view.indicator);
        let left_text = format!("{icon} {}", view.name);
        let mut spans = vec![
            Span::styled(
                format!("{icon} "),
                Style::default().fg(style::indicator_color(view.indicator)),
            ),
            Span::raw(view.name.to_string()),
        ];

        if let Some(duration) = view.duration {
            let padding = usize::from(width)
                .saturating_sub(left_text.width() + duration.width())
                .max(1);
            spans.push(Span::raw(" ".repeat(padding)));
            spans.push(Span::styled(
                duration.to_string(),
                Style::default().fg(Color::DarkGray),
            ));
        }

        Line::from(spans)
    }
}

impl Component for PipelineStatus<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let summary = PipelineSummary::from_steps(self.steps);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" Pipeline ", Style::default().fg(Color::Cyan)));
        let inner_area = block.inner(area);
        f.render_widget(block, area);

        let run_rows = u16::from(self.run.is_some());
        let chunks = Layout::default()
            .constraints([
                Constraint::Length(run_rows),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner_area);

        if let Some(run) = self.run {
            f.render_widget(Paragraph::new(Self::run_line(run)), chunks[0]);
        }

        let header = Paragraph::new(Self::header_line(&summary, chunks[1].width));
        f.render_widget(header, chunks[1]);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(style::overall_status_color(summary.overall)))
            .ratio(summary.completion_ratio())
            .label(format!("{}%", summary.completion_percent()));
        f.render_widget(gauge, chunks[2]);

        let step_lines: Vec<Line<'static>> = pipeline::step_views(self.steps)
            .iter()
            .map(|view| Self::step_line(view, chunks[3].width))
            .collect();
        f.render_widget(Paragraph::new(step_lines), chunks[3]);
    }
}
