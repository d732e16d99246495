// Copyright 2026 the Styled Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use styled_font::{FontSystem, FontWeight};

use crate::brush::Brush;

/// A single styling declaration on a text element.
///
/// Modifiers form an ordered declaration list: when the same property is
/// declared more than once, the last declaration wins.
pub enum TextModifier<S: FontSystem, B: Brush> {
    /// Replaces the font handle, bypassing any configuration.
    Font(Option<S::Font>),
    /// Overrides the font weight.
    FontWeight(Option<FontWeight>),
    /// The brush used to paint the text.
    Foreground(Option<B>),
    /// Bold text.
    Bold,
    /// Italic text.
    Italic,
    /// Fixed-width digits.
    MonospacedDigit,
    /// Underline decoration.
    Underline {
        /// Whether the decoration is drawn.
        active: bool,
        /// The brush for the decoration, or `None` for the text brush.
        brush: Option<B>,
    },
    /// Strikethrough decoration.
    Strikethrough {
        /// Whether the decoration is drawn.
        active: bool,
        /// The brush for the decoration, or `None` for the text brush.
        brush: Option<B>,
    },
    /// Spacing adjustment between specific glyph pairs.
    Kerning(f32),
    /// Uniform spacing adjustment between characters.
    Tracking(f32),
    /// Vertical offset of the text relative to its baseline.
    BaselineOffset(f32),
}

impl<S: FontSystem, B: Brush> Clone for TextModifier<S, B> {
    fn clone(&self) -> Self {
        match self {
            Self::Font(value) => Self::Font(value.clone()),
            Self::FontWeight(value) => Self::FontWeight(*value),
            Self::Foreground(value) => Self::Foreground(value.clone()),
            Self::Bold => Self::Bold,
            Self::Italic => Self::Italic,
            Self::MonospacedDigit => Self::MonospacedDigit,
            Self::Underline { active, brush } => Self::Underline {
                active: *active,
                brush: brush.clone(),
            },
            Self::Strikethrough { active, brush } => Self::Strikethrough {
                active: *active,
                brush: brush.clone(),
            },
            Self::Kerning(value) => Self::Kerning(*value),
            Self::Tracking(value) => Self::Tracking(*value),
            Self::BaselineOffset(value) => Self::BaselineOffset(*value),
        }
    }
}

impl<S: FontSystem, B: Brush> PartialEq for TextModifier<S, B> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Font(a), Self::Font(b)) => a == b,
            (Self::FontWeight(a), Self::FontWeight(b)) => a == b,
            (Self::Foreground(a), Self::Foreground(b)) => a == b,
            (Self::Bold, Self::Bold) => true,
            (Self::Italic, Self::Italic) => true,
            (Self::MonospacedDigit, Self::MonospacedDigit) => true,
            (
                Self::Underline { active, brush },
                Self::Underline {
                    active: other_active,
                    brush: other_brush,
                },
            ) => active == other_active && brush == other_brush,
            (
                Self::Strikethrough { active, brush },
                Self::Strikethrough {
                    active: other_active,
                    brush: other_brush,
                },
            ) => active == other_active && brush == other_brush,
            (Self::Kerning(a), Self::Kerning(b)) => a == b,
            (Self::Tracking(a), Self::Tracking(b)) => a == b,
            (Self::BaselineOffset(a), Self::BaselineOffset(b)) => a == b,
            _ => false,
        }
    }
}

impl<S: FontSystem, B: Brush> fmt::Debug for TextModifier<S, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Font(value) => f.debug_tuple("Font").field(value).finish(),
            Self::FontWeight(value) => f.debug_tuple("FontWeight").field(value).finish(),
            Self::Foreground(value) => f.debug_tuple("Foreground").field(value).finish(),
            Self::Bold => f.write_str("Bold"),
            Self::Italic => f.write_str("Italic"),
            Self::MonospacedDigit => f.write_str("MonospacedDigit"),
            Self::Underline { active, brush } => f
                .debug_struct("Underline")
                .field("active", active)
                .field("brush", brush)
                .finish(),
            Self::Strikethrough { active, brush } => f
                .debug_struct("Strikethrough")
                .field("active", active)
                .field("brush", brush)
                .finish(),
            Self::Kerning(value) => f.debug_tuple("Kerning").field(value).finish(),
            Self::Tracking(value) => f.debug_tuple("Tracking").field(value).finish(),
            Self::BaselineOffset(value) => f.debug_tuple("BaselineOffset").field(value).finish(),
        }
    }
}
