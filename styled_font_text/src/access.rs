// Copyright 2026 the Styled Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accessibility and speech information carried by text elements.
//!
//! Everything here is passed through to the host's assistive technology
//! integration unchanged; this crate attaches no semantics of its own.

use alloc::string::String;

/// Hints for speech synthesis of a text element.
///
/// Absent values defer to the host's defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpeechHints {
    always_includes_punctuation: Option<bool>,
    spells_out_characters: Option<bool>,
    adjusted_pitch: Option<f64>,
    announcements_queued: Option<bool>,
}

impl SpeechHints {
    /// Creates hints with every value absent.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether punctuation is always spoken aloud.
    #[inline]
    pub fn with_always_includes_punctuation(mut self, value: bool) -> Self {
        self.always_includes_punctuation = Some(value);
        self
    }

    /// Sets whether the text is spelled out character by character.
    #[inline]
    pub fn with_spells_out_characters(mut self, value: bool) -> Self {
        self.spells_out_characters = Some(value);
        self
    }

    /// Sets a relative pitch adjustment for the spoken text.
    #[inline]
    pub fn with_adjusted_pitch(mut self, value: f64) -> Self {
        self.adjusted_pitch = Some(value);
        self
    }

    /// Sets whether announcements are queued behind ongoing speech.
    #[inline]
    pub fn with_announcements_queued(mut self, value: bool) -> Self {
        self.announcements_queued = Some(value);
        self
    }

    /// Returns whether punctuation is always spoken aloud, if set.
    #[inline]
    pub const fn always_includes_punctuation(self) -> Option<bool> {
        self.always_includes_punctuation
    }

    /// Returns whether the text is spelled out character by character, if
    /// set.
    #[inline]
    pub const fn spells_out_characters(self) -> Option<bool> {
        self.spells_out_characters
    }

    /// Returns the relative pitch adjustment, if set.
    #[inline]
    pub const fn adjusted_pitch(self) -> Option<f64> {
        self.adjusted_pitch
    }

    /// Returns whether announcements are queued, if set.
    #[inline]
    pub const fn announcements_queued(self) -> Option<bool> {
        self.announcements_queued
    }
}

/// Heading level of a text element in the accessibility tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeadingLevel {
    /// Top level heading.
    H1,
    /// Second level heading.
    H2,
    /// Third level heading.
    H3,
    /// Fourth level heading.
    H4,
    /// Fifth level heading.
    H5,
    /// Sixth level heading.
    H6,
    /// A heading without a specific level.
    Unspecified,
}

impl HeadingLevel {
    /// Returns the numeric level, if the heading has one.
    pub const fn level(self) -> Option<usize> {
        Some(match self {
            Self::H1 => 1,
            Self::H2 => 2,
            Self::H3 => 3,
            Self::H4 => 4,
            Self::H5 => 5,
            Self::H6 => 6,
            Self::Unspecified => return None,
        })
    }
}

/// The kind of content a text element contains.
///
/// Assistive technologies use this to pick an appropriate presentation, for
/// example reading source code differently from narrative text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextContentType {
    /// Plain text.
    #[default]
    Plain,
    /// Console or terminal output.
    Console,
    /// File system paths.
    FileSystem,
    /// Conversational messages.
    Messaging,
    /// Long-form narrative text.
    Narrative,
    /// Source code.
    SourceCode,
    /// Tabular spreadsheet content.
    Spreadsheet,
    /// Word processing document content.
    WordProcessing,
}

/// Accessibility information attached to a text element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AccessibilityProps {
    label: Option<String>,
    heading: Option<HeadingLevel>,
    content_type: Option<TextContentType>,
}

impl AccessibilityProps {
    /// Creates properties with every value absent.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the label spoken in place of the text content.
    #[inline]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Marks the element as a heading at the given level.
    #[inline]
    pub fn with_heading(mut self, level: HeadingLevel) -> Self {
        self.heading = Some(level);
        self
    }

    /// Sets the kind of content the element contains.
    #[inline]
    pub fn with_content_type(mut self, content_type: TextContentType) -> Self {
        self.content_type = Some(content_type);
        self
    }

    /// Returns the label, if set.
    #[inline]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the heading level, if set.
    #[inline]
    pub const fn heading(&self) -> Option<HeadingLevel> {
        self.heading
    }

    /// Returns the content type, if set.
    #[inline]
    pub const fn content_type(&self) -> Option<TextContentType> {
        self.content_type
    }
}
