//! Boolean-as-text flags from the export format.
//!
//! The exporter writes booleans as `True`/`False`, and often leaves them out
//! entirely. Parsing keeps "missing" distinct so each field can apply its own
//! default instead of silently treating absence as `false`.

use crate::xml::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    True,
    False,
    Absent,
}

impl Flag {
    /// Only the exact text `True` is true; any other present value is false.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("True") => Self::True,
            Some(_) => Self::False,
            None => Self::Absent,
        }
    }

    /// Resolve to a bool, using `default` when the flag is absent.
    pub const fn unwrap_or(self, default: bool) -> bool {
        match self {
            Self::True => true,
            Self::False => false,
            Self::Absent => default,
        }
    }
}

/// Moderation flags of a single comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentFlags {
    pub approved: Flag,
    pub deleted: Flag,
}

impl CommentFlags {
    pub fn of(comment: &Element) -> Self {
        Self {
            approved: Flag::parse(comment.attr("approved")),
            deleted: Flag::parse(comment.attr("deleted")),
        }
    }
}
