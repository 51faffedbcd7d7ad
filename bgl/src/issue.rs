// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;

use log::warn;

use crate::record_type::{tag_name, Scope};
use crate::Error;

/// The kind of a recoverable decoding problem.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum IssueKind {
    /// A record declared more bytes than its window holds.
    Truncated { declared: usize, available: usize },
    /// A field read exceeded the record window.
    OutOfBounds { needed: usize, available: usize },
    /// The tag isn't known in its scope.
    UnknownTag,
    /// The tag is known in its scope but not valid at this position.
    FormatOrderViolation,
    /// The file doesn't start with a BGL header.
    InvalidHeader { magic: u32 },
}

impl IssueKind {
    /// A short name of the kind used in summaries.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Truncated { .. } => "truncated",
            Self::OutOfBounds { .. } => "out of bounds",
            Self::UnknownTag => "unknown tag",
            Self::FormatOrderViolation => "format order violation",
            Self::InvalidHeader { .. } => "invalid header",
        }
    }
}

/// A problem found while decoding, with the position of the record.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Issue {
    /// Absolute offset of the record or field in the file.
    pub offset: usize,
    pub tag: u16,
    /// The scope in which the tag was read.
    pub scope: Scope,
    pub kind: IssueKind,
}

impl Issue {
    pub fn new(offset: usize, tag: u16, scope: Scope, kind: IssueKind) -> Self {
        Self {
            offset,
            tag,
            scope,
            kind,
        }
    }

    /// Creates the issue of a decoding error.
    ///
    /// Truncation errors carry their own tag, all other errors are attributed
    /// to `tag`.
    pub fn from_error(scope: Scope, tag: u16, error: &Error) -> Self {
        match *error {
            Error::Truncated {
                offset,
                tag,
                declared,
                available,
            } => Self::new(
                offset,
                tag,
                scope,
                IssueKind::Truncated {
                    declared,
                    available,
                },
            ),
            Error::OutOfBounds {
                offset,
                needed,
                available,
            } => Self::new(offset, tag, scope, IssueKind::OutOfBounds { needed, available }),
            Error::InvalidHeader { magic, .. } => {
                Self::new(0, tag, scope, IssueKind::InvalidHeader { magic })
            }
        }
    }

    /// The diagnostic name of the tag, empty if the tag is unknown.
    pub fn tag_name(&self) -> &'static str {
        tag_name(self.scope, self.tag)
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} record {:#06x}", self.scope, self.tag)?;

        let name = self.tag_name();
        if !name.is_empty() {
            write!(f, " ({name})")?;
        }

        write!(f, " at {:#x}: ", self.offset)?;

        match self.kind {
            IssueKind::Truncated {
                declared,
                available,
            } => write!(
                f,
                "declares {declared} byte but only {available} are available"
            ),
            IssueKind::OutOfBounds { needed, available } => write!(
                f,
                "needs {needed} byte but only {available} are left in the record"
            ),
            IssueKind::UnknownTag => f.write_str("unknown tag"),
            IssueKind::FormatOrderViolation => {
                f.write_str("not valid at this position, record skipped")
            }
            IssueKind::InvalidHeader { magic } => write!(f, "invalid magic {magic:#010x}"),
        }
    }
}

/// Collects decoding issues.
///
/// Every issue is logged as a warning once when it is pushed.
#[derive(Clone, Default, Debug)]
pub struct Issues {
    issues: Vec<Issue>,
}

impl Issues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds and logs the issue.
    pub fn push(&mut self, issue: Issue) {
        warn!("{issue}");
        self.issues.push(issue);
    }

    /// Adds and logs the issue of a decoding error.
    pub fn report(&mut self, scope: Scope, tag: u16, error: &Error) {
        self.push(Issue::from_error(scope, tag, error));
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter()
    }

    /// Moves all issues of `other` into this collection without logging them
    /// again.
    pub fn append(&mut self, other: &mut Issues) {
        self.issues.append(&mut other.issues);
    }

    pub fn into_vec(self) -> Vec<Issue> {
        self.issues
    }
}

impl<'a> IntoIterator for &'a Issues {
    type Item = &'a Issue;
    type IntoIter = std::slice::Iter<'a, Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_from_truncation_keeps_its_tag() {
        let error = Error::Truncated {
            offset: 0x40,
            tag: 0x04,
            declared: 80,
            available: 20,
        };
        let issue = Issue::from_error(Scope::Airport, 0x3c, &error);

        assert_eq!(issue.tag, 0x04);
        assert_eq!(issue.offset, 0x40);
        assert_eq!(issue.tag_name(), "RUNWAY");
        assert_eq!(
            issue.to_string(),
            "airport record 0x0004 (RUNWAY) at 0x40: declares 80 byte but only 20 are available"
        );
    }

    #[test]
    fn unknown_tags_are_displayed_without_name() {
        let issue = Issue::new(0x10, 0xbeef, Scope::TopLevel, IssueKind::UnknownTag);
        assert_eq!(issue.to_string(), "top-level record 0xbeef at 0x10: unknown tag");
    }

    #[test]
    fn collects_issues() {
        let mut issues = Issues::new();
        assert!(issues.is_empty());

        issues.push(Issue::new(0, 1, Scope::TopLevel, IssueKind::UnknownTag));
        let mut other = Issues::new();
        other.push(Issue::new(8, 2, Scope::TopLevel, IssueKind::UnknownTag));
        issues.append(&mut other);

        assert_eq!(issues.len(), 2);
        assert!(other.is_empty());
        assert_eq!(issues.iter().map(|i| i.tag).collect::<Vec<_>>(), vec![1, 2]);
    }
}
