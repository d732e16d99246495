// Copyright 2026 the Styled Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Trait for types that describe how text is painted.
///
/// This crate doesn't do any painting, so the actual content of a brush is
/// irrelevant to it; the trait only exists so that hosts can carry their own
/// color or paint type through styling. The default value is used when no
/// brush has been assigned.
pub trait Brush: Clone + PartialEq + Default + fmt::Debug {}

impl<T: Clone + PartialEq + Default + fmt::Debug> Brush for T {}
