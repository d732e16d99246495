// Copyright 2026 the Styled Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolution of a label's effective styling.

use core::fmt;

#[cfg(feature = "libm")]
#[allow(unused_imports)]
use core_maths::CoreFloat;

use styled_font::{FontConfig, FontScope, FontSystem, FontWeight};

use crate::access::{AccessibilityProps, SpeechHints};
use crate::brush::Brush;
use crate::label::StyledLabel;
use crate::modifier::TextModifier;

/// Underline or strikethrough decoration on resolved text.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct ResolvedDecoration<B: Brush> {
    /// True if the decoration is drawn.
    pub enabled: bool,
    /// Brush for the decoration, or `None` for the text brush.
    pub brush: Option<B>,
}

/// The full set of styling parameters a host text view needs to display a
/// label.
///
/// Produced by [`StyledLabel::resolve`]; all spacing values are in the same
/// unit as the font size and default to zero when no configuration applies.
pub struct ResolvedText<S: FontSystem, B: Brush> {
    /// The font handle to render with, if any configuration applied.
    pub font: Option<S::Font>,
    /// Overridden font weight.
    pub font_weight: Option<FontWeight>,
    /// The brush used to paint the text.
    pub foreground: Option<B>,
    /// Bold text.
    pub bold: bool,
    /// Italic text.
    pub italic: bool,
    /// Fixed-width digits.
    pub monospaced_digit: bool,
    /// Underline decoration.
    pub underline: ResolvedDecoration<B>,
    /// Strikethrough decoration.
    pub strikethrough: ResolvedDecoration<B>,
    /// Spacing adjustment between specific glyph pairs.
    pub kerning: f32,
    /// Uniform spacing adjustment between characters.
    pub tracking: f32,
    /// Additional spacing between lines of a paragraph.
    pub line_spacing: f32,
    /// Extra padding above and below the text block.
    ///
    /// Line spacing is injected between lines only, which would otherwise
    /// shift the block relative to surrounding layout; half of the rounded
    /// spacing on each vertical side compensates for that.
    pub vertical_padding: f32,
    /// Vertical offset of the text relative to its baseline.
    pub baseline_offset: f32,
    /// Hints for speech synthesis.
    pub speech: SpeechHints,
    /// Accessibility information.
    pub accessibility: AccessibilityProps,
}

impl<S: FontSystem, B: Brush> ResolvedText<S, B> {
    fn from_configuration(system: &S, config: Option<&FontConfig<S>>) -> Self {
        let line_spacing = config.and_then(|config| config.line_spacing(system));
        Self {
            font: config.map(|config| config.font().clone()),
            font_weight: None,
            foreground: None,
            bold: false,
            italic: false,
            monospaced_digit: false,
            underline: ResolvedDecoration::default(),
            strikethrough: ResolvedDecoration::default(),
            kerning: config.and_then(|config| config.attributes().kerning()).unwrap_or(0.0),
            tracking: config.and_then(|config| config.attributes().tracking()).unwrap_or(0.0),
            line_spacing: line_spacing.unwrap_or(0.0),
            vertical_padding: line_spacing.map(|spacing| spacing.round() / 2.0).unwrap_or(0.0),
            baseline_offset: 0.0,
            speech: SpeechHints::new(),
            accessibility: AccessibilityProps::new(),
        }
    }

    /// Applies the specified modifier to this resolved text.
    pub fn apply(&mut self, modifier: TextModifier<S, B>) {
        use TextModifier::*;
        match modifier {
            Font(value) => self.font = value,
            FontWeight(value) => self.font_weight = value,
            Foreground(value) => self.foreground = value,
            Bold => self.bold = true,
            Italic => self.italic = true,
            MonospacedDigit => self.monospaced_digit = true,
            Underline { active, brush } => {
                self.underline.enabled = active;
                self.underline.brush = brush;
            }
            Strikethrough { active, brush } => {
                self.strikethrough.enabled = active;
                self.strikethrough.brush = brush;
            }
            Kerning(value) => self.kerning = value,
            Tracking(value) => self.tracking = value,
            BaselineOffset(value) => self.baseline_offset = value,
        }
    }
}

impl<S: FontSystem, B: Brush> StyledLabel<S, B> {
    /// Resolves the effective styling of this label.
    ///
    /// The effective configuration is the explicit assignment when one was
    /// made (including an explicit clear), otherwise `ambient`. The
    /// configuration supplies the font handle, kerning, tracking and the
    /// derived line spacing; the label's modifier declarations then apply
    /// on top, in order.
    pub fn resolve(&self, system: &S, ambient: Option<&FontConfig<S>>) -> ResolvedText<S, B> {
        let effective = match self.explicit_font() {
            Some(explicit) => explicit,
            None => ambient,
        };
        let mut resolved = ResolvedText::from_configuration(system, effective);
        for modifier in self.modifiers() {
            resolved.apply(modifier.clone());
        }
        resolved.speech = self.speech();
        resolved.accessibility = self.accessibility().clone();
        resolved
    }

    /// Resolves the effective styling of this label inside `scope`.
    ///
    /// Equivalent to [`resolve`](Self::resolve) with the scope's current
    /// assignment as the ambient configuration.
    pub fn resolve_in_scope(&self, system: &S, scope: &FontScope<S>) -> ResolvedText<S, B> {
        self.resolve(system, scope.current())
    }
}

impl<S: FontSystem, B: Brush> Clone for ResolvedText<S, B> {
    fn clone(&self) -> Self {
        Self {
            font: self.font.clone(),
            font_weight: self.font_weight,
            foreground: self.foreground.clone(),
            bold: self.bold,
            italic: self.italic,
            monospaced_digit: self.monospaced_digit,
            underline: self.underline.clone(),
            strikethrough: self.strikethrough.clone(),
            kerning: self.kerning,
            tracking: self.tracking,
            line_spacing: self.line_spacing,
            vertical_padding: self.vertical_padding,
            baseline_offset: self.baseline_offset,
            speech: self.speech,
            accessibility: self.accessibility.clone(),
        }
    }
}

impl<S: FontSystem, B: Brush> PartialEq for ResolvedText<S, B> {
    fn eq(&self, other: &Self) -> bool {
        self.font == other.font
            && self.font_weight == other.font_weight
            && self.foreground == other.foreground
            && self.bold == other.bold
            && self.italic == other.italic
            && self.monospaced_digit == other.monospaced_digit
            && self.underline == other.underline
            && self.strikethrough == other.strikethrough
            && self.kerning == other.kerning
            && self.tracking == other.tracking
            && self.line_spacing == other.line_spacing
            && self.vertical_padding == other.vertical_padding
            && self.baseline_offset == other.baseline_offset
            && self.speech == other.speech
            && self.accessibility == other.accessibility
    }
}

impl<S: FontSystem, B: Brush> fmt::Debug for ResolvedText<S, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedText")
            .field("font", &self.font)
            .field("font_weight", &self.font_weight)
            .field("foreground", &self.foreground)
            .field("bold", &self.bold)
            .field("italic", &self.italic)
            .field("monospaced_digit", &self.monospaced_digit)
            .field("underline", &self.underline)
            .field("strikethrough", &self.strikethrough)
            .field("kerning", &self.kerning)
            .field("tracking", &self.tracking)
            .field("line_spacing", &self.line_spacing)
            .field("vertical_padding", &self.vertical_padding)
            .field("baseline_offset", &self.baseline_offset)
            .field("speech", &self.speech)
            .field("accessibility", &self.accessibility)
            .finish()
    }
}
