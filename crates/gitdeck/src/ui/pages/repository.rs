use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::app::{App, Pane};
use crate::ui::components::code_viewer::CodeViewer;
use crate::ui::components::file_tree::FileTree;
use crate::ui::components::pipeline_status::PipelineStatus;
use crate::ui::components::repository_header::{HEADER_HEIGHT, RepositoryHeader};
use crate::ui::{Component, Page};

/// Repository view: header on top, file tree on the left, code and pipeline
/// on the right.
pub struct RepositoryPage<'a> {
    app: &'a App,
}

impl<'a> RepositoryPage<'a> {
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }
}

impl Page for RepositoryPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let app = self.app;
        let page_layout = Layout::default()
            .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
            .split(area);
        RepositoryHeader::new(&app.repository).render(f, page_layout[0]);

        let content_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(page_layout[1]);

        let rows = app.navigator.rows(&app.forest);
        FileTree::new(
            &rows,
            app.navigator.cursor(&app.forest),
            app.focus == Pane::Tree,
        )
        .render(f, content_layout[0]);

        let pipeline_status = PipelineStatus::new(&app.steps).run(app.pipeline_run.as_ref());
        let right_layout = Layout::default()
            .constraints([
                Constraint::Min(0),
                Constraint::Length(pipeline_status.height()),
            ])
            .split(content_layout[1]);

        CodeViewer::new(app.viewed_file(), &app.code)
            .scroll_offset(app.code_scroll())
            .focused(app.focus == Pane::Code)
            .render(f, right_layout[0]);
        pipeline_status.render(f, right_layout[1]);
    }
}
