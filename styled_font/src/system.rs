// Copyright 2026 the Styled Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between this crate and a host font system.

use core::fmt;

use crate::family::FontFamilyName;
use crate::font::FontTransform;
use crate::metrics::FontMetrics;

/// Interface this crate requires from a host font system.
///
/// The host owns font loading, face derivation and metric queries; this
/// crate only describes which faces it wants. Implementations are expected
/// to be infallible in the sense of the platform conventions they wrap:
///
/// - [`load_font`](Self::load_font) resolves unknown family names to the
///   host's fallback face rather than failing.
/// - [`transform_font`](Self::transform_font) returns an equivalent handle
///   when a transform is unavailable.
///
/// Loading and transforming may allocate host resources and therefore take
/// `&mut self`; metric queries are read-only.
pub trait FontSystem {
    /// Concrete font handle type produced by this system.
    type Font: Clone + PartialEq + fmt::Debug;

    /// Loads a font face for the given family and size.
    fn load_font(&mut self, family: &FontFamilyName<'_>, size: f32) -> Self::Font;

    /// Returns a new handle with `transform` applied to `font`.
    fn transform_font(&mut self, font: &Self::Font, transform: FontTransform) -> Self::Font;

    /// Queries the typographic metrics of the given font.
    fn font_metrics(&self, font: &Self::Font) -> FontMetrics;
}
