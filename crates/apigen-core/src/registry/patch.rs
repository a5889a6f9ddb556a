//! Idempotent single-line insertion at an anchor

use regex::Regex;
use std::fmt;

/// Where a line should be inserted
#[derive(Debug, Clone)]
pub enum Anchor {
    /// Right after the first occurrence of a literal marker, on a new line
    AfterMarker(String),
    /// At the end of the first regex match; the match should end with a newline
    AfterMatch(Regex),
    /// At the start of a named capture group of the first regex match
    BeforeGroup { pattern: Regex, group: &'static str },
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anchor::AfterMarker(marker) => write!(f, "marker `{}`", marker),
            Anchor::AfterMatch(re) => write!(f, "pattern `{}`", re.as_str()),
            Anchor::BeforeGroup { pattern, group } => {
                write!(f, "group `{}` of pattern `{}`", group, pattern.as_str())
            }
        }
    }
}

/// Result of a patch attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The line was inserted; holds the full new content
    Inserted(String),
    /// The line already occurs somewhere in the content
    AlreadyPresent,
    /// The anchor was not found; content is untouched
    AnchorMissing,
}

impl PatchOutcome {
    /// The content after the patch, falling back to the original when nothing changed
    pub fn into_content(self, original: &str) -> String {
        match self {
            PatchOutcome::Inserted(content) => content,
            PatchOutcome::AlreadyPresent | PatchOutcome::AnchorMissing => original.to_string(),
        }
    }
}

/// Insert `line` at `anchor`, unless the statement already appears anywhere in `content`
///
/// Presence is checked on `line` without its surrounding whitespace, so re-indented
/// copies still count. Everything outside the inserted line (and its newline) is
/// preserved byte for byte.
pub fn patch(content: &str, anchor: &Anchor, line: &str) -> PatchOutcome {
    if content.contains(line.trim()) {
        return PatchOutcome::AlreadyPresent;
    }

    let (offset, insertion) = match anchor {
        Anchor::AfterMarker(marker) => match content.find(marker.as_str()) {
            Some(pos) => (pos + marker.len(), format!("\n{}", line)),
            None => return PatchOutcome::AnchorMissing,
        },
        Anchor::AfterMatch(re) => match re.find(content) {
            Some(m) => (m.end(), format!("{}\n", line)),
            None => return PatchOutcome::AnchorMissing,
        },
        Anchor::BeforeGroup { pattern, group } => {
            match pattern.captures(content).and_then(|c| c.name(group)) {
                Some(m) => (m.start(), format!("{}\n", line)),
                None => return PatchOutcome::AnchorMissing,
            }
        }
    };

    let mut patched = String::with_capacity(content.len() + insertion.len());
    patched.push_str(&content[..offset]);
    patched.push_str(&insertion);
    patched.push_str(&content[offset..]);
    PatchOutcome::Inserted(patched)
}
