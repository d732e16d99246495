// Copyright 2026 the Styled Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typographic metrics and line spacing derivation.

/// Metrics information for a loaded font face.
///
/// All values are in the same unit as the font size.
#[derive(Copy, Clone, Default, Debug, PartialEq)]
pub struct FontMetrics {
    /// Typographic ascent.
    pub ascent: f32,
    /// Typographic descent.
    pub descent: f32,
    /// Typographic leading.
    pub leading: f32,
}

impl FontMetrics {
    /// Returns the natural line height of the face.
    ///
    /// This is the sum of ascent, descent and leading; no single metric
    /// defines it on its own.
    pub fn line_height(&self) -> f32 {
        self.ascent + self.descent + self.leading
    }
}

/// Computes the additional line spacing required so that a paragraph set in
/// a face with `metrics` renders with `line_height_multiple` times its
/// natural line height.
///
/// Returns `None` when the multiple does not increase the natural line
/// height: paragraph layout cannot represent a negative or zero spacing
/// adjustment, so multiples of 1.0 or below yield no adjustment at all.
///
/// # Example
/// ```
/// use styled_font::{line_spacing, FontMetrics};
///
/// let metrics = FontMetrics { ascent: 10.0, descent: 3.0, leading: 1.0 };
/// assert_eq!(line_spacing(metrics, 1.5), Some(7.0));
/// assert_eq!(line_spacing(metrics, 1.0), None);
/// assert_eq!(line_spacing(metrics, 0.8), None);
/// ```
pub fn line_spacing(metrics: FontMetrics, line_height_multiple: f32) -> Option<f32> {
    let natural = metrics.line_height();
    let custom = natural * line_height_multiple;
    if custom <= natural {
        return None;
    }
    Some(custom - natural)
}
