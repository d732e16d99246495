// Copyright 2026 the Styled Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A deterministic font system for tests and examples.
//!
//! Real hosts wrap a platform font stack; this one answers every query from
//! an in-memory table so tests are reproducible without system fonts.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::family::FontFamilyName;
use crate::font::FontTransform;
use crate::metrics::FontMetrics;
use crate::system::FontSystem;

/// Font handle produced by [`TestFontSystem`].
///
/// The handle records the requested family and size plus every transform
/// applied to it, so tests can observe exactly how a configuration derived
/// its faces.
#[derive(Clone, Debug, PartialEq)]
pub struct TestFont {
    /// The family name the handle was loaded for.
    pub family: String,
    /// The size the handle was loaded at.
    pub size: f32,
    /// Transforms applied to this handle, in order.
    pub transforms: Vec<FontTransform>,
}

/// A font system backed by a fixed metrics table.
///
/// Families not present in the table resolve to the fallback metrics,
/// mirroring how real hosts degrade unknown family names to a fallback
/// face.
#[derive(Clone, Debug)]
pub struct TestFontSystem {
    families: Vec<(String, FontMetrics)>,
    fallback: FontMetrics,
}

impl TestFontSystem {
    /// Creates a system that answers every metrics query with `fallback`.
    pub fn new(fallback: FontMetrics) -> Self {
        Self {
            families: Vec::new(),
            fallback,
        }
    }

    /// Registers metrics for a named family.
    pub fn with_family(mut self, name: &str, metrics: FontMetrics) -> Self {
        self.families.push((name.to_string(), metrics));
        self
    }
}

impl FontSystem for TestFontSystem {
    type Font = TestFont;

    fn load_font(&mut self, family: &FontFamilyName<'_>, size: f32) -> Self::Font {
        TestFont {
            family: family.as_str().to_string(),
            size,
            transforms: Vec::new(),
        }
    }

    fn transform_font(&mut self, font: &Self::Font, transform: FontTransform) -> Self::Font {
        let mut font = font.clone();
        font.transforms.push(transform);
        font
    }

    fn font_metrics(&self, font: &Self::Font) -> FontMetrics {
        self.families
            .iter()
            .find(|(name, _)| *name == font.family)
            .map(|(_, metrics)| *metrics)
            .unwrap_or(self.fallback)
    }
}
