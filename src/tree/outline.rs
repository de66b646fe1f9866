//! Plain-text rendering of visible tree rows.

use super::view::{Disclosure, TreeRow};

/// Symbols used to draw a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icons {
    pub expanded: &'static str,
    pub collapsed: &'static str,
    pub folder: &'static str,
    pub file: &'static str,
}

impl Icons {
    pub const UNICODE: Icons = Icons {
        expanded: "▼",
        collapsed: "►",
        folder: "📁",
        file: "📄",
    };

    pub const ASCII: Icons = Icons {
        expanded: "v",
        collapsed: ">",
        folder: "[d]",
        file: "[f]",
    };

    pub fn new(ascii: bool) -> Self {
        if ascii {
            Self::ASCII
        } else {
            Self::UNICODE
        }
    }

    /// Disclosure marker; files get a blank of the same width.
    pub fn marker(&self, disclosure: Option<Disclosure>) -> &'static str {
        match disclosure {
            Some(Disclosure::Expanded) => self.expanded,
            Some(Disclosure::Collapsed) => self.collapsed,
            None => " ",
        }
    }

    pub fn kind(&self, is_folder: bool) -> &'static str {
        if is_folder {
            self.folder
        } else {
            self.file
        }
    }
}

impl Default for Icons {
    fn default() -> Self {
        Self::UNICODE
    }
}

/// Indentation for a row: two columns per level.
pub fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

/// Format a single row without trailing newline.
pub fn format_row(row: &TreeRow, icons: &Icons) -> String {
    format!(
        "{}{} {} {}",
        indent(row.depth),
        icons.marker(row.disclosure()),
        icons.kind(row.is_folder()),
        row.name
    )
}

/// Format rows as an indented outline, one row per line.
pub fn format_outline(rows: &[TreeRow], icons: &Icons) -> String {
    let mut output = String::new();
    for row in rows {
        output.push_str(&format_row(row, icons));
        output.push('\n');
    }
    output
}
