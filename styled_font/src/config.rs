// Copyright 2026 the Styled Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::attributes::FontAttributes;
use crate::family::FontFamilyName;
use crate::font::{FontTransform, FontWeight, Leading};
use crate::metrics::line_spacing;
use crate::system::FontSystem;

/// A named font configuration.
///
/// A configuration fixes a family and size at construction and carries a
/// small set of optional typographic attributes. Two handles are derived
/// from the host when the configuration is created:
///
/// - the styled handle, which style transforms replace wholesale, and
/// - the metrics handle, which stays bound to the original face so that
///   line spacing derivation is independent of any transforms applied.
///
/// Configurations have value semantics: every transform returns a new
/// configuration and never mutates the receiver, so a configuration can be
/// shared freely across a view tree. Two configurations with identical
/// fields are interchangeable.
pub struct FontConfig<S: FontSystem> {
    family: FontFamilyName<'static>,
    size: f32,
    attributes: FontAttributes,
    font: S::Font,
    metrics_font: S::Font,
}

impl<S: FontSystem> FontConfig<S> {
    /// Creates a configuration for the given family at a fixed size.
    ///
    /// Family names the host cannot resolve degrade to the host's fallback
    /// face; this is not an error surfaced here. The size is fixed for the
    /// lifetime of the configuration.
    pub fn new(
        system: &mut S,
        family: FontFamilyName<'static>,
        size: f32,
        attributes: FontAttributes,
    ) -> Self {
        let font = system.load_font(&family, size);
        let metrics_font = font.clone();
        Self {
            family,
            size,
            attributes,
            font,
            metrics_font,
        }
    }

    /// Returns the font family this configuration was created with.
    #[inline]
    pub fn family(&self) -> &FontFamilyName<'static> {
        &self.family
    }

    /// Returns the point size this configuration was created with.
    #[inline]
    pub const fn size(&self) -> f32 {
        self.size
    }

    /// Returns the typographic attributes.
    #[inline]
    pub const fn attributes(&self) -> FontAttributes {
        self.attributes
    }

    /// Returns the styled font handle.
    #[inline]
    pub const fn font(&self) -> &S::Font {
        &self.font
    }

    /// Returns the handle used for metric queries.
    ///
    /// This handle is derived once at construction and is not affected by
    /// style transforms.
    #[inline]
    pub const fn metrics_font(&self) -> &S::Font {
        &self.metrics_font
    }

    /// Computes the additional line spacing requested by the line height
    /// multiple attribute.
    ///
    /// Returns `None` when the attribute is absent or when the multiple
    /// does not increase the natural line height of the face.
    pub fn line_spacing(&self, system: &S) -> Option<f32> {
        let multiple = self.attributes.line_height_multiple()?;
        line_spacing(system.font_metrics(&self.metrics_font), multiple)
    }

    fn transformed(&self, system: &mut S, transform: FontTransform) -> Self {
        Self {
            family: self.family.clone(),
            size: self.size,
            attributes: self.attributes,
            font: system.transform_font(&self.font, transform),
            metrics_font: self.metrics_font.clone(),
        }
    }

    /// Returns a configuration with an italicized face.
    pub fn italic(&self, system: &mut S) -> Self {
        self.transformed(system, FontTransform::Italic)
    }

    /// Returns a configuration with a bold face.
    pub fn bold(&self, system: &mut S) -> Self {
        self.transformed(system, FontTransform::Bold)
    }

    /// Returns a configuration with a face of the given weight.
    pub fn weight(&self, system: &mut S, weight: FontWeight) -> Self {
        self.transformed(system, FontTransform::Weight(weight))
    }

    /// Returns a configuration with small capitals for all letters.
    pub fn small_caps(&self, system: &mut S) -> Self {
        self.transformed(system, FontTransform::SmallCaps)
    }

    /// Returns a configuration with small capitals for lowercase letters.
    pub fn lowercase_small_caps(&self, system: &mut S) -> Self {
        self.transformed(system, FontTransform::LowercaseSmallCaps)
    }

    /// Returns a configuration with small capitals for uppercase letters.
    pub fn uppercase_small_caps(&self, system: &mut S) -> Self {
        self.transformed(system, FontTransform::UppercaseSmallCaps)
    }

    /// Returns a configuration with fixed-width digits.
    pub fn monospaced_digit(&self, system: &mut S) -> Self {
        self.transformed(system, FontTransform::MonospacedDigit)
    }

    /// Returns a configuration with a fixed-width variant of the face.
    pub fn monospaced(&self, system: &mut S) -> Self {
        self.transformed(system, FontTransform::Monospaced)
    }

    /// Returns a configuration with the given leading mode.
    pub fn leading(&self, system: &mut S, leading: Leading) -> Self {
        self.transformed(system, FontTransform::Leading(leading))
    }
}

impl<S: FontSystem> Clone for FontConfig<S> {
    fn clone(&self) -> Self {
        Self {
            family: self.family.clone(),
            size: self.size,
            attributes: self.attributes,
            font: self.font.clone(),
            metrics_font: self.metrics_font.clone(),
        }
    }
}

impl<S: FontSystem> PartialEq for FontConfig<S> {
    fn eq(&self, other: &Self) -> bool {
        self.family == other.family
            && self.size == other.size
            && self.attributes == other.attributes
            && self.font == other.font
            && self.metrics_font == other.metrics_font
    }
}

impl<S: FontSystem> fmt::Debug for FontConfig<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontConfig")
            .field("family", &self.family)
            .field("size", &self.size)
            .field("attributes", &self.attributes)
            .field("font", &self.font)
            .field("metrics_font", &self.metrics_font)
            .finish()
    }
}
