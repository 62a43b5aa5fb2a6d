use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

use crate::domain::tree::NodeKind;
use crate::navigator::TreeRow;
use crate::ui::Component;
use crate::ui::icon::Icon;

const INDENT: &str = "  ";
const EMPTY_FOLDER_SUFFIX: &str = " (empty)";

/// Collapsible repository file tree panel.
pub struct FileTree<'a> {
    cursor: usize,
    is_focused: bool,
    rows: &'a [TreeRow],
}

impl<'a> FileTree<'a> {
    /// Creates a file tree panel over already computed visible rows.
    pub fn new(rows: &'a [TreeRow], cursor: usize, is_focused: bool) -> Self {
        Self {
            cursor,
            is_focused,
            rows,
        }
    }

    /// Builds the label for one row: indentation, folder marker, glyph and
    /// name.
    fn row_line(row: &TreeRow) -> Line<'static> {
        let indent = INDENT.repeat(row.depth);

        match row.kind {
            NodeKind::Folder => {
                let mut spans = vec![
                    Span::raw(indent),
                    Span::styled(
                        format!("{} ", Icon::chevron(row.is_open)),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        format!("{} ", Icon::Folder),
                        Style::default().fg(Color::LightBlue),
                    ),
                    Span::raw(row.name.clone()),
                ];
                if row.is_open && row.is_empty {
                    spans.push(Span::styled(
                        EMPTY_FOLDER_SUFFIX,
                        Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::DIM),
                    ));
                }

                Line::from(spans)
            }
            NodeKind::File => {
                let name_style = if row.is_selected {
                    Style::default()
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };

                Line::from(vec![
                    Span::raw(format!("{indent}{INDENT}")),
                    Span::styled(format!("{} ", Icon::File), Style::default().fg(Color::Gray)),
                    Span::styled(row.name.clone(), name_style),
                ])
            }
        }
    }
}

impl Component for FileTree<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem<'_>> = if self.rows.is_empty() {
            vec![ListItem::new(Span::styled(
                "No files",
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            self.rows
                .iter()
                .map(|row| ListItem::new(Self::row_line(row)))
                .collect()
        };

        let mut list_state = ListState::default();
        if self.is_focused && !self.rows.is_empty() {
            list_state.select(Some(self.cursor.min(self.rows.len() - 1)));
        }

        let border_color = if self.is_focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color))
                    .title(Span::styled(" Files ", Style::default().fg(Color::Cyan))),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        f.render_stateful_widget(list, area, &mut list_state);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn row(path: &str, depth: usize, kind: NodeKind) -> TreeRow {
        TreeRow {
            depth,
            is_empty: false,
            is_open: false,
            is_selected: false,
            kind,
            name: path.rsplit('/').next().unwrap_or(path).to_string(),
            path: path.to_string(),
        }
    }

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn render_text(tree: &FileTree<'_>) -> String {
        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).expect("failed to create terminal");
        terminal
            .draw(|f| {
                let area = f.area();
                tree.render(f, area);
            })
            .expect("failed to draw");

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_row_line_indents_by_depth() {
        // Arrange
        let nested_file = row("src/components/Card.tsx", 2, NodeKind::File);

        // Act
        let line = FileTree::row_line(&nested_file);

        // Assert
        assert_eq!(line_text(&line), "      ▫ Card.tsx");
    }

    #[test]
    fn test_row_line_shows_folder_chevron() {
        // Arrange
        let mut open_folder = row("src", 0, NodeKind::Folder);
        open_folder.is_open = true;
        let closed_folder = row("src/pages", 1, NodeKind::Folder);

        // Act
        let open_line = FileTree::row_line(&open_folder);
        let closed_line = FileTree::row_line(&closed_folder);

        // Assert
        assert_eq!(line_text(&open_line), "▾ ▪ src");
        assert_eq!(line_text(&closed_line), "  ▸ ▪ pages");
    }

    #[test]
    fn test_row_line_marks_open_empty_folder() {
        // Arrange
        let mut open_empty = row("assets", 0, NodeKind::Folder);
        open_empty.is_empty = true;
        open_empty.is_open = true;
        let mut closed_empty = row("assets", 0, NodeKind::Folder);
        closed_empty.is_empty = true;

        // Act
        let open_line = FileTree::row_line(&open_empty);
        let closed_line = FileTree::row_line(&closed_empty);

        // Assert
        assert_eq!(line_text(&open_line), "▾ ▪ assets (empty)");
        assert_eq!(line_text(&closed_line), "▸ ▪ assets");
    }

    #[test]
    fn test_row_line_highlights_selected_file() {
        // Arrange
        let mut selected = row("README.md", 0, NodeKind::File);
        selected.is_selected = true;

        // Act
        let line = FileTree::row_line(&selected);

        // Assert
        let name_span = line.spans.last().expect("name span should exist");
        assert!(name_span.style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(name_span.style.bg, Some(Color::DarkGray));
    }

    #[test]
    fn test_render_shows_rows() {
        // Arrange
        let rows = vec![
            row("src", 0, NodeKind::Folder),
            row("src/main.rs", 1, NodeKind::File),
        ];
        let tree = FileTree::new(&rows, 0, true);

        // Act
        let text = render_text(&tree);

        // Assert
        assert!(text.contains("Files"));
        assert!(text.contains("src"));
        assert!(text.contains("main.rs"));
    }

    #[test]
    fn test_render_empty_rows_shows_placeholder() {
        // Arrange
        let rows: Vec<TreeRow> = Vec::new();
        let tree = FileTree::new(&rows, 3, true);

        // Act
        let text = render_text(&tree);

        // Assert
        assert!(text.contains("No files"));
    }
}
