//! Expand/collapse and selection state for the repository file tree.
//!
//! The host owns the forest and passes it in on every call. Folder state is
//! kept apart from the nodes, keyed by full path, so stale keys left behind
//! by a replaced forest are never read.

use std::collections::HashMap;
use std::sync::mpsc;

#[cfg(test)]
use mockall::automock;
use tracing::{debug, trace};

use crate::domain::tree::{self, NodeKind, TreeNode};

/// Receives the path of every file the user activates.
#[cfg_attr(test, automock)]
pub trait FileSelectListener {
    fn on_file_selected(&mut self, path: &str);
}

impl FileSelectListener for mpsc::Sender<String> {
    fn on_file_selected(&mut self, path: &str) {
        // A dropped receiver means the host stopped listening.
        let _ = self.send(path.to_string());
    }
}

/// Per-instance navigator state.
///
/// Only folders whose state differs from their default are stored: root
/// folders default to open and deeper folders default to closed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigatorState {
    folder_overrides: HashMap<String, bool>,
    selected_path: Option<String>,
}

impl NavigatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the folder at `path` and `depth` is expanded.
    pub fn is_open(&self, path: &str, depth: usize) -> bool {
        self.folder_overrides
            .get(path)
            .copied()
            .unwrap_or(depth == 0)
    }

    /// Flips the folder at `path` and returns `true`.
    ///
    /// Returns `false` without touching any state when `path` does not
    /// resolve to a folder in `forest`.
    pub fn toggle_folder(&mut self, forest: &[TreeNode], path: &str) -> bool {
        let Some((node, depth)) = tree::resolve(forest, path) else {
            trace!(path, "ignoring toggle for unknown path");

            return false;
        };
        if !node.is_folder() {
            trace!(path, "ignoring toggle for file path");

            return false;
        }

        let default_open = depth == 0;
        let is_open = !self.is_open(path, depth);
        if is_open == default_open {
            self.folder_overrides.remove(path);
        } else {
            self.folder_overrides.insert(path.to_string(), is_open);
        }
        debug!(path, is_open, "toggled folder");

        true
    }

    /// Marks `path` as the selected file and returns the path to emit.
    pub fn select_file(&mut self, path: &str) -> String {
        self.selected_path = Some(path.to_string());
        debug!(path, "selected file");

        path.to_string()
    }

    pub fn selected_path(&self) -> Option<&str> {
        self.selected_path.as_deref()
    }

    pub fn is_selected(&self, path: &str) -> bool {
        self.selected_path.as_deref() == Some(path)
    }
}

/// Render data for one visible tree row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeRow {
    pub depth: usize,
    /// `true` for folders without children.
    pub is_empty: bool,
    /// Always `false` for files.
    pub is_open: bool,
    pub is_selected: bool,
    pub kind: NodeKind,
    pub name: String,
    pub path: String,
}

/// Returns the rows visible under `state`, in display order.
///
/// Children of closed folders are skipped. The walk is recomputed from
/// `forest` on every call.
pub fn visible_rows(forest: &[TreeNode], state: &NavigatorState) -> Vec<TreeRow> {
    tree::walk_with(forest, |visit| state.is_open(&visit.path, visit.depth))
        .into_iter()
        .map(|visit| {
            let kind = visit.node.kind();
            let is_open = kind == NodeKind::Folder && state.is_open(&visit.path, visit.depth);

            TreeRow {
                depth: visit.depth,
                is_empty: kind == NodeKind::Folder && visit.node.children().is_empty(),
                is_open,
                is_selected: kind == NodeKind::File && state.is_selected(&visit.path),
                kind,
                name: visit.node.name().to_string(),
                path: visit.path,
            }
        })
        .collect()
}

/// Interactive tree navigator owned by one host page.
///
/// Keeps the navigator state, a cursor over visible rows and the optional
/// host listener notified on file selection.
#[derive(Default)]
pub struct TreeNavigator {
    cursor: usize,
    listener: Option<Box<dyn FileSelectListener>>,
    state: NavigatorState,
}

impl TreeNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a navigator that reports file selections to `listener`.
    pub fn with_listener(listener: Box<dyn FileSelectListener>) -> Self {
        Self {
            listener: Some(listener),
            ..Self::default()
        }
    }

    pub fn state(&self) -> &NavigatorState {
        &self.state
    }

    pub fn selected_path(&self) -> Option<&str> {
        self.state.selected_path()
    }

    /// Returns the visible rows of `forest`.
    pub fn rows(&self, forest: &[TreeNode]) -> Vec<TreeRow> {
        visible_rows(forest, &self.state)
    }

    /// Flips one folder; unresolvable paths are ignored.
    pub fn toggle_folder(&mut self, forest: &[TreeNode], path: &str) -> bool {
        self.state.toggle_folder(forest, path)
    }

    /// Selects `path` and notifies the listener, even when it is already
    /// selected.
    pub fn select_file(&mut self, path: &str) {
        let emitted_path = self.state.select_file(path);
        if let Some(listener) = self.listener.as_mut() {
            listener.on_file_selected(&emitted_path);
        }
    }

    /// Applies a click on the node at `path`: folders toggle, files select.
    ///
    /// Returns the kind of node that handled the click.
    pub fn activate(&mut self, forest: &[TreeNode], path: &str) -> Option<NodeKind> {
        let (node, _) = tree::resolve(forest, path)?;

        match node.kind() {
            NodeKind::Folder => {
                self.toggle_folder(forest, path);
            }
            NodeKind::File => {
                self.select_file(path);
            }
        }

        Some(node.kind())
    }

    /// Activates the row under the cursor.
    pub fn activate_cursor(&mut self, forest: &[TreeNode]) -> Option<NodeKind> {
        let rows = self.rows(forest);
        let row = rows.get(clamp_cursor(self.cursor, rows.len()))?;

        self.activate(forest, &row.path)
    }

    /// Returns the cursor index clamped to the visible rows of `forest`.
    pub fn cursor(&self, forest: &[TreeNode]) -> usize {
        clamp_cursor(self.cursor, self.rows(forest).len())
    }

    /// Moves the cursor by `offset` rows without wrapping.
    pub fn move_cursor(&mut self, forest: &[TreeNode], offset: isize) {
        let row_count = self.rows(forest).len();
        let current = clamp_cursor(self.cursor, row_count);

        self.cursor = clamp_cursor(current.saturating_add_signed(offset), row_count);
    }
}

fn clamp_cursor(cursor: usize, row_count: usize) -> usize {
    cursor.min(row_count.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forest_fixture() -> Vec<TreeNode> {
        vec![
            TreeNode::folder(
                "src",
                vec![
                    TreeNode::folder(
                        "components",
                        vec![TreeNode::file("Button.tsx"), TreeNode::file("Card.tsx")],
                    ),
                    TreeNode::folder("assets", Vec::new()),
                    TreeNode::file("App.tsx"),
                ],
            ),
            TreeNode::folder("docs", vec![TreeNode::file("guide.md")]),
            TreeNode::file("README.md"),
        ]
    }

    fn row_paths(rows: &[TreeRow]) -> Vec<&str> {
        rows.iter().map(|row| row.path.as_str()).collect()
    }

    #[test]
    fn test_root_folders_start_open_and_nested_folders_closed() {
        // Arrange
        let forest = forest_fixture();
        let state = NavigatorState::new();

        // Act
        let rows = visible_rows(&forest, &state);

        // Assert
        assert_eq!(
            row_paths(&rows),
            vec![
                "src",
                "src/components",
                "src/assets",
                "src/App.tsx",
                "docs",
                "docs/guide.md",
                "README.md",
            ]
        );
        assert!(state.is_open("src", 0));
        assert!(state.is_open("docs", 0));
        assert!(!state.is_open("src/components", 1));
    }

    #[test]
    fn test_toggle_folder_twice_restores_state() {
        // Arrange
        let forest = forest_fixture();
        let mut state = NavigatorState::new();
        let original = state.clone();

        // Act
        let first = state.toggle_folder(&forest, "src/components");
        let second = state.toggle_folder(&forest, "src/components");

        // Assert
        assert!(first);
        assert!(second);
        assert_eq!(state, original);
        assert!(!state.is_open("src/components", 1));
    }

    #[test]
    fn test_toggle_folder_only_changes_target_folder() {
        // Arrange
        let forest = forest_fixture();
        let mut state = NavigatorState::new();

        // Act
        state.toggle_folder(&forest, "src/components");
        state.toggle_folder(&forest, "docs");

        // Assert
        assert!(state.is_open("src/components", 1));
        assert!(!state.is_open("docs", 0));
        assert!(state.is_open("src", 0));
        assert!(!state.is_open("src/assets", 1));
    }

    #[test]
    fn test_toggle_folder_ignores_unknown_and_file_paths() {
        // Arrange
        let forest = forest_fixture();
        let mut state = NavigatorState::new();

        // Act
        let unknown = state.toggle_folder(&forest, "src/missing");
        let file = state.toggle_folder(&forest, "src/App.tsx");

        // Assert
        assert!(!unknown);
        assert!(!file);
        assert_eq!(state, NavigatorState::new());
    }

    #[test]
    fn test_toggle_empty_folder_has_no_rows() {
        // Arrange
        let forest = forest_fixture();
        let mut state = NavigatorState::new();

        // Act
        let toggled = state.toggle_folder(&forest, "src/assets");
        let rows = visible_rows(&forest, &state);

        // Assert
        assert!(toggled);
        let assets = rows
            .iter()
            .find(|row| row.path == "src/assets")
            .expect("assets row should be visible");
        assert!(assets.is_open);
        assert!(assets.is_empty);
        assert!(!rows.iter().any(|row| row.path.starts_with("src/assets/")));
    }

    #[test]
    fn test_closed_root_hides_descendants() {
        // Arrange
        let forest = forest_fixture();
        let mut state = NavigatorState::new();

        // Act
        state.toggle_folder(&forest, "src");
        let rows = visible_rows(&forest, &state);

        // Assert
        assert_eq!(
            row_paths(&rows),
            vec!["src", "docs", "docs/guide.md", "README.md"]
        );
    }

    #[test]
    fn test_select_file_sets_selection_regardless_of_prior_state() {
        // Arrange
        let mut state = NavigatorState::new();
        state.select_file("README.md");

        // Act
        let emitted = state.select_file("src/App.tsx");

        // Assert
        assert_eq!(emitted, "src/App.tsx");
        assert_eq!(state.selected_path(), Some("src/App.tsx"));
        assert!(!state.is_selected("README.md"));
    }

    #[test]
    fn test_select_file_does_not_expand_ancestors() {
        // Arrange
        let forest = forest_fixture();
        let mut state = NavigatorState::new();

        // Act
        state.select_file("src/components/Card.tsx");
        let rows = visible_rows(&forest, &state);

        // Assert
        assert!(!state.is_open("src/components", 1));
        assert!(!rows.iter().any(|row| row.is_selected));
    }

    #[test]
    fn test_rows_carry_depth_and_selection() {
        // Arrange
        let forest = forest_fixture();
        let mut state = NavigatorState::new();
        state.select_file("src/App.tsx");

        // Act
        let rows = visible_rows(&forest, &state);

        // Assert
        let app_row = rows
            .iter()
            .find(|row| row.path == "src/App.tsx")
            .expect("App.tsx row should be visible");
        assert_eq!(app_row.depth, 1);
        assert_eq!(app_row.kind, NodeKind::File);
        assert!(app_row.is_selected);
        assert!(!app_row.is_open);
    }

    #[test]
    fn test_stale_state_is_inert_after_forest_change() {
        // Arrange
        let forest = forest_fixture();
        let mut state = NavigatorState::new();
        state.toggle_folder(&forest, "src/components");
        state.select_file("src/components/Card.tsx");
        let replacement = vec![TreeNode::folder("lib", vec![TreeNode::file("mod.rs")])];

        // Act
        let rows = visible_rows(&replacement, &state);

        // Assert
        assert_eq!(row_paths(&rows), vec!["lib", "lib/mod.rs"]);
        assert!(rows.iter().all(|row| !row.is_selected));
    }

    #[test]
    fn test_select_file_notifies_listener_once() {
        // Arrange
        let mut listener = MockFileSelectListener::new();
        listener
            .expect_on_file_selected()
            .withf(|path| path == "src/App.tsx")
            .times(1)
            .return_const(());
        let mut navigator = TreeNavigator::with_listener(Box::new(listener));

        // Act
        navigator.select_file("src/App.tsx");

        // Assert
        assert_eq!(navigator.selected_path(), Some("src/App.tsx"));
    }

    #[test]
    fn test_reselecting_file_notifies_listener_again() {
        // Arrange
        let mut listener = MockFileSelectListener::new();
        listener
            .expect_on_file_selected()
            .withf(|path| path == "README.md")
            .times(2)
            .return_const(());
        let mut navigator = TreeNavigator::with_listener(Box::new(listener));

        // Act
        navigator.select_file("README.md");
        navigator.select_file("README.md");

        // Assert
        assert_eq!(navigator.selected_path(), Some("README.md"));
    }

    #[test]
    fn test_select_file_without_listener_only_updates_state() {
        // Arrange
        let mut navigator = TreeNavigator::new();

        // Act
        navigator.select_file("README.md");

        // Assert
        assert!(navigator.state().is_selected("README.md"));
    }

    #[test]
    fn test_activate_folder_toggles_without_selecting() {
        // Arrange
        let forest = forest_fixture();
        let mut listener = MockFileSelectListener::new();
        listener.expect_on_file_selected().times(0);
        let mut navigator = TreeNavigator::with_listener(Box::new(listener));

        // Act
        let kind = navigator.activate(&forest, "src/components");

        // Assert
        assert_eq!(kind, Some(NodeKind::Folder));
        assert!(navigator.state().is_open("src/components", 1));
        assert_eq!(navigator.selected_path(), None);
    }

    #[test]
    fn test_activate_file_selects_without_toggling() {
        // Arrange
        let forest = forest_fixture();
        let mut navigator = TreeNavigator::new();

        // Act
        let kind = navigator.activate(&forest, "docs/guide.md");

        // Assert
        assert_eq!(kind, Some(NodeKind::File));
        assert_eq!(navigator.selected_path(), Some("docs/guide.md"));
        assert!(navigator.state().is_open("docs", 0));
    }

    #[test]
    fn test_activate_unknown_path_is_noop() {
        // Arrange
        let forest = forest_fixture();
        let mut navigator = TreeNavigator::new();

        // Act
        let kind = navigator.activate(&forest, "nowhere");

        // Assert
        assert_eq!(kind, None);
        assert_eq!(navigator.state(), &NavigatorState::new());
    }

    #[test]
    fn test_move_cursor_clamps_to_visible_rows() {
        // Arrange
        let forest = forest_fixture();
        let mut navigator = TreeNavigator::new();

        // Act
        navigator.move_cursor(&forest, -3);
        let top = navigator.cursor(&forest);
        navigator.move_cursor(&forest, 100);
        let bottom = navigator.cursor(&forest);

        // Assert
        assert_eq!(top, 0);
        assert_eq!(bottom, 6);
    }

    #[test]
    fn test_activate_cursor_uses_row_under_cursor() {
        // Arrange
        let (sender, receiver) = mpsc::channel();
        let forest = forest_fixture();
        let mut navigator = TreeNavigator::with_listener(Box::new(sender));
        navigator.move_cursor(&forest, 3);

        // Act
        let kind = navigator.activate_cursor(&forest);

        // Assert
        assert_eq!(kind, Some(NodeKind::File));
        assert_eq!(
            receiver.try_recv().expect("selection should be sent"),
            "src/App.tsx"
        );
    }

    #[test]
    fn test_cursor_clamps_after_forest_shrinks() {
        // Arrange
        let forest = forest_fixture();
        let mut navigator = TreeNavigator::new();
        navigator.move_cursor(&forest, 6);
        let replacement = vec![TreeNode::file("only.txt")];

        // Act
        let cursor = navigator.cursor(&replacement);
        let kind = navigator.activate_cursor(&replacement);

        // Assert
        assert_eq!(cursor, 0);
        assert_eq!(kind, Some(NodeKind::File));
        assert_eq!(navigator.selected_path(), Some("only.txt"));
    }

    #[test]
    fn test_activate_cursor_on_empty_forest_is_noop() {
        // Arrange
        let forest: Vec<TreeNode> = Vec::new();
        let mut navigator = TreeNavigator::new();

        // Act
        let kind = navigator.activate_cursor(&forest);

        // Assert
        assert_eq!(kind, None);
    }
}
