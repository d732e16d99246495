// Copyright 2026 the Styled Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Optional typographic attributes applied on top of a font face.
///
/// Each attribute is optional; absence means the host default is used. All
/// values are in the same unit as the font size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FontAttributes {
    kerning: Option<f32>,
    tracking: Option<f32>,
    line_height_multiple: Option<f32>,
}

impl FontAttributes {
    /// Creates attributes with every value absent.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the spacing adjustment between specific glyph pairs.
    #[inline]
    pub fn with_kerning(mut self, kerning: f32) -> Self {
        self.kerning = Some(kerning);
        self
    }

    /// Sets the uniform spacing adjustment between characters.
    #[inline]
    pub fn with_tracking(mut self, tracking: f32) -> Self {
        self.tracking = Some(tracking);
        self
    }

    /// Sets the desired line height as a multiple of the natural line
    /// height.
    ///
    /// Multiples of 1.0 or below produce no spacing adjustment; see
    /// [`line_spacing`](crate::line_spacing).
    #[inline]
    pub fn with_line_height_multiple(mut self, multiple: f32) -> Self {
        self.line_height_multiple = Some(multiple);
        self
    }

    /// Returns the kerning adjustment, if set.
    #[inline]
    pub const fn kerning(self) -> Option<f32> {
        self.kerning
    }

    /// Returns the tracking adjustment, if set.
    #[inline]
    pub const fn tracking(self) -> Option<f32> {
        self.tracking
    }

    /// Returns the line height multiple, if set.
    #[inline]
    pub const fn line_height_multiple(self) -> Option<f32> {
        self.line_height_multiple
    }
}
