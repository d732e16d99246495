// Copyright 2026 the Styled Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font property types shared between configurations and the host system.

use core::fmt;

/// Visual weight class of a font, typically on a scale from 1.0 to 1000.0.
///
/// This uses an `f32` so that it can represent the full range of values
/// possible with variable fonts.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct FontWeight(f32);

impl FontWeight {
    /// Weight value of 100.
    pub const THIN: Self = Self(100.0);

    /// Weight value of 200.
    pub const EXTRA_LIGHT: Self = Self(200.0);

    /// Weight value of 300.
    pub const LIGHT: Self = Self(300.0);

    /// Weight value of 400. This is the default value.
    pub const NORMAL: Self = Self(400.0);

    /// Weight value of 500.
    pub const MEDIUM: Self = Self(500.0);

    /// Weight value of 600.
    pub const SEMI_BOLD: Self = Self(600.0);

    /// Weight value of 700.
    pub const BOLD: Self = Self(700.0);

    /// Weight value of 800.
    pub const EXTRA_BOLD: Self = Self(800.0);

    /// Weight value of 900.
    pub const BLACK: Self = Self(900.0);

    /// Creates a new weight value.
    pub const fn new(weight: f32) -> Self {
        Self(weight)
    }

    /// Returns the underlying weight value.
    pub const fn value(self) -> f32 {
        self.0
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Line leading mode of a font.
///
/// Hosts map these to whatever leading adjustment they support; a host
/// without such control may treat them as a no-op.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Leading {
    /// The font's default leading.
    #[default]
    Standard,
    /// Reduced leading.
    Tight,
    /// Increased leading.
    Loose,
}

/// A single style transform applied to a loaded font.
///
/// Each transform corresponds to one derived face the host can produce from
/// an existing one. A host that cannot honor a transform returns an
/// equivalent handle unchanged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FontTransform {
    /// Italicized face.
    Italic,
    /// Bold face.
    Bold,
    /// Face with the given weight.
    Weight(FontWeight),
    /// Face with lowercase letters replaced by small capitals.
    SmallCaps,
    /// Face with small capitals for lowercase letters only.
    LowercaseSmallCaps,
    /// Face with small capitals for uppercase letters only.
    UppercaseSmallCaps,
    /// Face with fixed-width digits.
    MonospacedDigit,
    /// Fixed-width variant of the face.
    Monospaced,
    /// Face with the given leading mode.
    Leading(Leading),
}
