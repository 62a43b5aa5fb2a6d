/// Separator placed between node names when building a full path.
pub const PATH_SEPARATOR: char = '/';

/// Distinguishes folders from files without borrowing their contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Folder,
    File,
}

/// One named node of a repository file forest.
///
/// Folders own their children, so a forest is always acyclic. Names only
/// need to be unique among siblings; the full path is derived from nesting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreeNode {
    Folder {
        name: String,
        children: Vec<TreeNode>,
    },
    File {
        name: String,
    },
}

impl TreeNode {
    /// Creates a folder node with the given ordered children.
    pub fn folder(name: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self::Folder {
            name: name.into(),
            children,
        }
    }

    /// Creates a file node.
    pub fn file(name: impl Into<String>) -> Self {
        Self::File { name: name.into() }
    }

    /// Returns the path segment of this node.
    pub fn name(&self) -> &str {
        match self {
            Self::Folder { name, .. } | Self::File { name } => name,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Folder { .. } => NodeKind::Folder,
            Self::File { .. } => NodeKind::File,
        }
    }

    /// Returns the ordered children, or an empty slice for files.
    pub fn children(&self) -> &[TreeNode] {
        match self {
            Self::Folder { children, .. } => children,
            Self::File { .. } => &[],
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder { .. })
    }
}

/// A node reached during traversal together with its derived identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeVisit<'a> {
    /// Number of ancestors between the node and the forest roots.
    pub depth: usize,
    pub node: &'a TreeNode,
    /// `/`-joined names from the forest root down to the node.
    pub path: String,
}

/// Builds the full path of a child named `name` under `parent_path`.
///
/// Root nodes have no parent and use their name alone.
pub fn child_path(parent_path: Option<&str>, name: &str) -> String {
    match parent_path {
        Some(parent_path) => format!("{parent_path}{PATH_SEPARATOR}{name}"),
        None => name.to_string(),
    }
}

/// Visits every node of `forest` in display order.
///
/// The traversal is pure and recomputed from scratch on each call, so an
/// unchanged forest always yields the same paths and depths.
pub fn walk(forest: &[TreeNode]) -> Vec<NodeVisit<'_>> {
    walk_with(forest, |_| true)
}

/// Visits nodes of `forest` in display order, descending into a folder only
/// when `descend` returns `true` for its visit.
pub fn walk_with<'a>(
    forest: &'a [TreeNode],
    mut descend: impl FnMut(&NodeVisit<'a>) -> bool,
) -> Vec<NodeVisit<'a>> {
    let mut visits = Vec::new();
    walk_level(forest, None, 0, &mut descend, &mut visits);

    visits
}

fn walk_level<'a>(
    nodes: &'a [TreeNode],
    parent_path: Option<&str>,
    depth: usize,
    descend: &mut impl FnMut(&NodeVisit<'a>) -> bool,
    visits: &mut Vec<NodeVisit<'a>>,
) {
    for node in nodes {
        let visit = NodeVisit {
            depth,
            node,
            path: child_path(parent_path, node.name()),
        };
        let should_descend = node.is_folder() && descend(&visit);
        let path = visit.path.clone();
        visits.push(visit);

        if should_descend {
            walk_level(node.children(), Some(&path), depth + 1, descend, visits);
        }
    }
}

/// Finds the first node whose full path equals `path`.
///
/// Returns the node with its depth, or `None` when nothing resolves.
pub fn resolve<'a>(forest: &'a [TreeNode], path: &str) -> Option<(&'a TreeNode, usize)> {
    resolve_level(forest, None, 0, path)
}

fn resolve_level<'a>(
    nodes: &'a [TreeNode],
    parent_path: Option<&str>,
    depth: usize,
    path: &str,
) -> Option<(&'a TreeNode, usize)> {
    for node in nodes {
        let node_path = child_path(parent_path, node.name());
        if node_path == path {
            return Some((node, depth));
        }

        let is_ancestor = path
            .strip_prefix(node_path.as_str())
            .is_some_and(|rest| rest.starts_with(PATH_SEPARATOR));
        if is_ancestor {
            if let Some(found) = resolve_level(node.children(), Some(&node_path), depth + 1, path)
            {
                return Some(found);
            }
        }
    }

    None
}
