//! Host page state for the repository dashboard.
//!
//! The app owns the static repository data and one `TreeNavigator`. File
//! selections come back through a channel listener and are applied when
//! the runtime calls `sync_selection` before the next frame.

use std::sync::mpsc;

use tracing::debug;

use crate::domain::pipeline::{PipelineRun, Step};
use crate::domain::repository::Repository;
use crate::domain::tree::TreeNode;
use crate::navigator::TreeNavigator;
use crate::sample_data;

/// Which panel receives navigation keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pane {
    Tree,
    Code,
}

impl Pane {
    /// Returns the pane focused after `Tab`.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Pane::Tree => Pane::Code,
            Pane::Code => Pane::Tree,
        }
    }
}

pub struct App {
    pub code: String,
    code_scroll: u16,
    pub focus: Pane,
    pub forest: Vec<TreeNode>,
    pub navigator: TreeNavigator,
    pub pipeline_run: Option<PipelineRun>,
    pub repository: Repository,
    selection_rx: mpsc::Receiver<String>,
    pub steps: Vec<Step>,
    viewed_file: Option<String>,
}

impl App {
    /// Creates a host page over the given data with the tree focused.
    pub fn new(
        repository: Repository,
        forest: Vec<TreeNode>,
        steps: Vec<Step>,
        code: String,
    ) -> Self {
        let (selection_tx, selection_rx) = mpsc::channel();

        Self {
            code,
            code_scroll: 0,
            focus: Pane::Tree,
            forest,
            navigator: TreeNavigator::with_listener(Box::new(selection_tx)),
            pipeline_run: None,
            repository,
            selection_rx,
            steps,
            viewed_file: None,
        }
    }

    /// Creates the dashboard populated with the bundled sample repository.
    pub fn sample() -> Self {
        let mut app = Self::new(
            sample_data::sample_repository(),
            sample_data::sample_forest(),
            sample_data::sample_steps(),
            sample_data::sample_code(),
        );
        app.pipeline_run = app.repository.pipeline_run(sample_data::SAMPLE_RUN_NUMBER);

        app
    }

    /// Returns the file currently shown in the code viewer.
    pub fn viewed_file(&self) -> Option<&str> {
        self.viewed_file.as_deref()
    }

    pub fn code_scroll(&self) -> u16 {
        self.code_scroll
    }

    /// Applies every file selection reported since the last call.
    ///
    /// The latest path wins. Scrolling resets when the viewed file changes.
    pub fn sync_selection(&mut self) {
        while let Ok(path) = self.selection_rx.try_recv() {
            if self.viewed_file.as_deref() != Some(path.as_str()) {
                self.code_scroll = 0;
            }
            debug!(path = %path, "viewing file");
            self.viewed_file = Some(path);
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
    }

    /// Checks out the next repository branch.
    pub fn cycle_branch(&mut self) {
        self.repository.cycle_branch();
    }

    /// Moves the tree cursor by `offset` visible rows.
    pub fn move_cursor(&mut self, offset: isize) {
        self.navigator.move_cursor(&self.forest, offset);
    }

    /// Activates the tree row under the cursor and applies any selection.
    pub fn activate_cursor(&mut self) {
        self.navigator.activate_cursor(&self.forest);
        self.sync_selection();
    }

    /// Scrolls the code viewer, keeping the last line reachable.
    pub fn scroll_code(&mut self, offset: i32) {
        if self.viewed_file.is_none() {
            return;
        }

        let last_line = u16::try_from(self.code.split('\n').count().saturating_sub(1))
            .unwrap_or(u16::MAX);
        let scrolled = i32::from(self.code_scroll).saturating_add(offset);

        self.code_scroll = u16::try_from(scrolled.max(0))
            .unwrap_or(u16::MAX)
            .min(last_line);
    }
}
