use std::fmt;

/// A collection of icons used throughout the terminal UI.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Icon {
    /// A check mark symbol (✓).
    Check,
    /// An expanded folder marker (▾).
    ChevronDown,
    /// A collapsed folder marker (▸).
    ChevronRight,
    /// A clock symbol (◷) for unfinished steps.
    Clock,
    /// A cross mark symbol (✗).
    Cross,
    /// A file symbol (▫).
    File,
    /// A folder symbol (▪).
    Folder,
    /// A git branch symbol (●).
    GitBranch,
    /// A status dot (●).
    StatusDot,
}

impl Icon {
    /// Returns the string representation of the icon.
    pub fn as_str(self) -> &'static str {
        match self {
            Icon::Check => "✓",
            Icon::ChevronDown => "▾",
            Icon::ChevronRight => "▸",
            Icon::Clock => "◷",
            Icon::Cross => "✗",
            Icon::File => "▫",
            Icon::Folder => "▪",
            Icon::GitBranch | Icon::StatusDot => "●",
        }
    }

    /// Returns the folder marker for the given expansion state.
    pub fn chevron(is_open: bool) -> Self {
        if is_open {
            Icon::ChevronDown
        } else {
            Icon::ChevronRight
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
