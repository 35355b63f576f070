//! Shortcut strings like `#my_id.a_class.another_class`.

use std::fmt;

use crate::{MarkupError, Result};

/// What a shortcut segment was parsed as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Id,
    Class,
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentKind::Id => f.write_str("id"),
            SegmentKind::Class => f.write_str("class"),
        }
    }
}

/// Parsed form of a shortcut string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shortcut {
    pub id: Option<String>,
    pub classes: Vec<String>,
}

impl Shortcut {
    /// Parse a shortcut string.
    ///
    /// The input is split on `.`. If the first segment starts with `#` the
    /// rest of it is the id; every other non-empty segment is a class.
    pub fn parse(input: &str) -> Result<Self> {
        let mut segments = input.split('.');
        let mut shortcut = Shortcut::default();

        if let Some(first) = segments.next() {
            match first.strip_prefix('#') {
                Some(id) => shortcut.id = Some(check_segment(id, SegmentKind::Id)?),
                None => shortcut.push_class(first)?,
            }
        }
        for segment in segments {
            shortcut.push_class(segment)?;
        }

        Ok(shortcut)
    }

    fn push_class(&mut self, segment: &str) -> Result<()> {
        if !segment.is_empty() {
            self.classes.push(check_segment(segment, SegmentKind::Class)?);
        }
        Ok(())
    }
}

pub(crate) fn check_segment(name: &str, kind: SegmentKind) -> Result<String> {
    if name.contains([' ', '.', ',']) {
        tracing::debug!(segment = %name, %kind, "rejecting shortcut segment");
        return Err(MarkupError::InvalidShortcut {
            name: name.to_string(),
            kind,
        });
    }
    Ok(name.to_string())
}
