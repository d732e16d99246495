// Copyright 2026 the Styled Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

use smallvec::SmallVec;
use styled_font::{FontConfig, FontSystem, FontWeight};

use crate::access::{AccessibilityProps, HeadingLevel, SpeechHints, TextContentType};
use crate::brush::Brush;
use crate::modifier::TextModifier;

/// Most labels carry only a handful of modifiers, so this avoids heap
/// allocation in the common case.
const INLINE_MODIFIERS: usize = 4;

/// A text element styled by a font configuration.
///
/// A label combines its content with an ordered list of styling
/// declarations and, optionally, an explicit [`FontConfig`]. Builder
/// methods consume and return the label, so styling reads as a chain:
///
/// ```
/// use styled_font_text::StyledLabel;
/// use styled_font::testing::TestFontSystem;
///
/// let label: StyledLabel<TestFontSystem, u32> =
///     StyledLabel::new("Dashboard").bold().tracking(0.2);
/// assert_eq!(label.modifiers().len(), 2);
/// ```
///
/// The explicit configuration distinguishes "never assigned" from
/// "explicitly cleared": a label whose configuration was cleared resolves
/// without a font even inside a scope that assigns a default.
pub struct StyledLabel<S: FontSystem, B: Brush> {
    content: String,
    modifiers: SmallVec<[TextModifier<S, B>; INLINE_MODIFIERS]>,
    font: Option<Option<FontConfig<S>>>,
    speech: SpeechHints,
    accessibility: AccessibilityProps,
}

impl<S: FontSystem, B: Brush> StyledLabel<S, B> {
    /// Creates a label with the given content and no styling.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            modifiers: SmallVec::new(),
            font: None,
            speech: SpeechHints::new(),
            accessibility: AccessibilityProps::new(),
        }
    }

    /// Returns the text content.
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the styling declarations, in authoring order.
    #[inline]
    pub fn modifiers(&self) -> &[TextModifier<S, B>] {
        &self.modifiers
    }

    /// Returns the explicit font configuration assignment.
    ///
    /// The outer `Option` is `None` when no assignment was made;
    /// `Some(None)` records an explicit clear.
    #[inline]
    pub fn explicit_font(&self) -> Option<Option<&FontConfig<S>>> {
        self.font.as_ref().map(Option::as_ref)
    }

    /// Returns the speech hints.
    #[inline]
    pub const fn speech(&self) -> SpeechHints {
        self.speech
    }

    /// Returns the accessibility properties.
    #[inline]
    pub fn accessibility(&self) -> &AccessibilityProps {
        &self.accessibility
    }

    /// Assigns a font configuration to this label.
    ///
    /// An explicit assignment always wins over a scoped default, and
    /// assigning `None` suppresses the scoped default entirely.
    pub fn attributed_font(mut self, config: Option<FontConfig<S>>) -> Self {
        self.font = Some(config);
        self
    }

    /// Appends an arbitrary styling declaration.
    pub fn push(mut self, modifier: TextModifier<S, B>) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Replaces the font handle, bypassing any configuration.
    pub fn font(self, font: Option<S::Font>) -> Self {
        self.push(TextModifier::Font(font))
    }

    /// Overrides the font weight.
    pub fn font_weight(self, weight: Option<FontWeight>) -> Self {
        self.push(TextModifier::FontWeight(weight))
    }

    /// Sets the brush used to paint the text.
    pub fn foreground(self, brush: Option<B>) -> Self {
        self.push(TextModifier::Foreground(brush))
    }

    /// Makes the text bold.
    pub fn bold(self) -> Self {
        self.push(TextModifier::Bold)
    }

    /// Makes the text italic.
    pub fn italic(self) -> Self {
        self.push(TextModifier::Italic)
    }

    /// Uses fixed-width digits.
    pub fn monospaced_digit(self) -> Self {
        self.push(TextModifier::MonospacedDigit)
    }

    /// Sets the underline decoration.
    pub fn underline(self, active: bool, brush: Option<B>) -> Self {
        self.push(TextModifier::Underline { active, brush })
    }

    /// Sets the strikethrough decoration.
    pub fn strikethrough(self, active: bool, brush: Option<B>) -> Self {
        self.push(TextModifier::Strikethrough { active, brush })
    }

    /// Sets the spacing adjustment between specific glyph pairs.
    pub fn kerning(self, kerning: f32) -> Self {
        self.push(TextModifier::Kerning(kerning))
    }

    /// Sets the uniform spacing adjustment between characters.
    pub fn tracking(self, tracking: f32) -> Self {
        self.push(TextModifier::Tracking(tracking))
    }

    /// Offsets the text vertically relative to its baseline.
    pub fn baseline_offset(self, offset: f32) -> Self {
        self.push(TextModifier::BaselineOffset(offset))
    }

    /// Sets whether punctuation is always spoken aloud.
    pub fn speech_always_includes_punctuation(mut self, value: bool) -> Self {
        self.speech = self.speech.with_always_includes_punctuation(value);
        self
    }

    /// Sets whether the text is spelled out character by character.
    pub fn speech_spells_out_characters(mut self, value: bool) -> Self {
        self.speech = self.speech.with_spells_out_characters(value);
        self
    }

    /// Sets a relative pitch adjustment for the spoken text.
    pub fn speech_adjusted_pitch(mut self, value: f64) -> Self {
        self.speech = self.speech.with_adjusted_pitch(value);
        self
    }

    /// Sets whether announcements are queued behind ongoing speech.
    pub fn speech_announcements_queued(mut self, value: bool) -> Self {
        self.speech = self.speech.with_announcements_queued(value);
        self
    }

    /// Sets the label spoken in place of the text content.
    pub fn accessibility_label(mut self, label: impl Into<String>) -> Self {
        self.accessibility = self.accessibility.with_label(label);
        self
    }

    /// Marks the element as a heading at the given level.
    pub fn accessibility_heading(mut self, level: HeadingLevel) -> Self {
        self.accessibility = self.accessibility.with_heading(level);
        self
    }

    /// Sets the kind of content the element contains.
    pub fn accessibility_text_content_type(mut self, content_type: TextContentType) -> Self {
        self.accessibility = self.accessibility.with_content_type(content_type);
        self
    }

    /// Joins several labels into one, attaching `config` as the explicit
    /// configuration of the result.
    ///
    /// Contents are concatenated in order and each label's declarations are
    /// carried over; the later labels' declarations win where they overlap.
    pub fn concatenate(labels: impl IntoIterator<Item = Self>, config: FontConfig<S>) -> Self {
        let mut content = String::new();
        let mut modifiers = SmallVec::new();
        for label in labels {
            content.push_str(&label.content);
            modifiers.extend(label.modifiers);
        }
        Self {
            content,
            modifiers,
            font: Some(Some(config)),
            speech: SpeechHints::new(),
            accessibility: AccessibilityProps::new(),
        }
    }
}

impl<S: FontSystem, B: Brush> From<&str> for StyledLabel<S, B> {
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}

impl<S: FontSystem, B: Brush> From<String> for StyledLabel<S, B> {
    fn from(content: String) -> Self {
        Self::new(content)
    }
}

impl<S: FontSystem, B: Brush> Clone for StyledLabel<S, B> {
    fn clone(&self) -> Self {
        Self {
            content: self.content.clone(),
            modifiers: self.modifiers.clone(),
            font: self.font.clone(),
            speech: self.speech,
            accessibility: self.accessibility.clone(),
        }
    }
}

impl<S: FontSystem, B: Brush> PartialEq for StyledLabel<S, B> {
    fn eq(&self, other: &Self) -> bool {
        self.content == other.content
            && self.modifiers == other.modifiers
            && self.font == other.font
    }
}

impl<S: FontSystem, B: Brush> fmt::Debug for StyledLabel<S, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyledLabel")
            .field("content", &self.content)
            .field("modifiers", &self.modifiers)
            .field("font", &self.font)
            .field("speech", &self.speech)
            .field("accessibility", &self.accessibility)
            .finish()
    }
}
