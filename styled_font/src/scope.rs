// Copyright 2026 the Styled Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped default font configurations.

use core::fmt;

use smallvec::SmallVec;

use crate::config::FontConfig;
use crate::system::FontSystem;

/// Most view trees nest only a few font scopes, so this avoids heap
/// allocation in the common case.
const INLINE_SCOPES: usize = 4;

/// A stack of scoped default font configurations.
///
/// Rendering code threads one `FontScope` through its traversal. A scope
/// that wants to change the default for its subtree pushes an assignment on
/// entry and pops it on exit; text elements read [`current`](Self::current)
/// to resolve their effective configuration when they carry no explicit
/// one.
///
/// Pushing `None` is itself an assignment: it suppresses defaults from
/// enclosing scopes rather than falling through to them.
pub struct FontScope<S: FontSystem> {
    assignments: SmallVec<[Option<FontConfig<S>>; INLINE_SCOPES]>,
}

impl<S: FontSystem> FontScope<S> {
    /// Creates a scope with no default assigned.
    pub fn new() -> Self {
        Self {
            assignments: SmallVec::new(),
        }
    }

    /// Enters a scope that assigns the given default.
    ///
    /// Every push must be balanced with a [`pop`](Self::pop) when the scope
    /// is left.
    pub fn push(&mut self, config: Option<FontConfig<S>>) {
        self.assignments.push(config);
    }

    /// Leaves the innermost scope, restoring the enclosing assignment.
    pub fn pop(&mut self) {
        self.assignments.pop();
    }

    /// Returns the default configuration assigned by the innermost scope.
    ///
    /// Returns `None` when no scope has assigned a default, or when the
    /// innermost assignment explicitly cleared it.
    pub fn current(&self) -> Option<&FontConfig<S>> {
        self.assignments.last().and_then(Option::as_ref)
    }

    /// Returns the number of scopes currently entered.
    pub fn depth(&self) -> usize {
        self.assignments.len()
    }
}

impl<S: FontSystem> Default for FontScope<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: FontSystem> fmt::Debug for FontScope<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontScope")
            .field("assignments", &self.assignments)
            .finish()
    }
}
