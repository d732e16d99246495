// Copyright 2026 the Styled Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversion of resolved text into accessibility tree nodes.

use accesskit::{Node, Role};

use styled_font::FontSystem;

use crate::brush::Brush;
use crate::resolve::ResolvedText;

impl<S: FontSystem, B: Brush> ResolvedText<S, B> {
    /// Builds an accessibility node for this text with the given content.
    ///
    /// Elements marked as headings get [`Role::Heading`] and, when the
    /// heading has a numeric level, that level; everything else is a
    /// [`Role::Label`]. An accessibility label replaces nothing: the
    /// content stays the node value and the label is reported alongside it.
    pub fn to_access_node(&self, content: &str) -> Node {
        let role = if self.accessibility.heading().is_some() {
            Role::Heading
        } else {
            Role::Label
        };
        let mut node = Node::new(role);
        node.set_value(content);
        if let Some(label) = self.accessibility.label() {
            node.set_label(label);
        }
        if let Some(level) = self.accessibility.heading().and_then(|h| h.level()) {
            node.set_level(level);
        }
        node
    }
}
