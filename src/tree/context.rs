//! Indentation context threaded through the recursive walk

/// Glyph before an entry that has later siblings.
pub const BRANCH: &str = "├── ";
/// Glyph before the last entry among its siblings.
pub const LAST_BRANCH: &str = "└── ";
/// Prefix segment under an ancestor that has later siblings.
pub const VERTICAL: &str = "│   ";
/// Prefix segment under an ancestor that was the last sibling.
pub const BLANK: &str = "    ";

/// Per-ancestor marker: does a vertical connector continue past it?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchMarker {
    Continue,
    End,
}

impl BranchMarker {
    pub fn for_last(is_last: bool) -> Self {
        if is_last {
            BranchMarker::End
        } else {
            BranchMarker::Continue
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            BranchMarker::Continue => VERTICAL,
            BranchMarker::End => BLANK,
        }
    }
}

/// Last-sibling state of every ancestor below the root.
///
/// A child never mutates its parent's context; it derives a new one with
/// [`IndentContext::child`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndentContext {
    markers: Vec<BranchMarker>,
}

impl IndentContext {
    /// Context of the root's direct children.
    pub fn root() -> Self {
        Self::default()
    }

    /// Context for the children of an entry printed under `self`.
    pub fn child(&self, is_last: bool) -> Self {
        let mut markers = Vec::with_capacity(self.markers.len() + 1);
        markers.extend_from_slice(&self.markers);
        markers.push(BranchMarker::for_last(is_last));
        Self { markers }
    }

    pub fn depth(&self) -> usize {
        self.markers.len()
    }

    pub fn markers(&self) -> &[BranchMarker] {
        &self.markers
    }

    /// Rendered prefix, without the entry's own branch glyph.
    pub fn prefix(&self) -> String {
        self.markers.iter().map(|m| m.as_str()).collect()
    }
}

/// Branch glyph for an entry.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { LAST_BRANCH } else { BRANCH }
}
