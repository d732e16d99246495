// Copyright 2026 the Styled Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named font configurations with typographic attributes and scoped
//! defaults.
//!
//! This crate is a thin declarative layer over a host font system:
//!
//! - [`FontConfig`] fixes a family and size once and carries optional
//!   [`FontAttributes`] (kerning, tracking, line height multiple). Style
//!   transforms such as [`bold`](FontConfig::bold) and
//!   [`small_caps`](FontConfig::small_caps) return new configurations with
//!   a freshly derived face; the receiver is never mutated.
//! - [`line_spacing`] derives the additional paragraph spacing needed for a
//!   line height multiple from the face's natural metrics.
//! - [`FontScope`] threads a scoped default configuration through a render
//!   traversal, with inner assignments overriding outer ones.
//!
//! The host itself stays behind the [`FontSystem`] trait: loading faces,
//! deriving styled variants and reporting metrics are its job. This crate
//! never touches font data and performs no shaping or layout.
//!
//! ## Example
//!
//! ```
//! use styled_font::testing::TestFontSystem;
//! use styled_font::{FontAttributes, FontConfig, FontFamilyName, FontMetrics};
//!
//! let mut system = TestFontSystem::new(FontMetrics::default())
//!     .with_family("Jost", FontMetrics { ascent: 10.0, descent: 3.0, leading: 1.0 });
//!
//! let body = FontConfig::new(
//!     &mut system,
//!     FontFamilyName::named("Jost"),
//!     14.0,
//!     FontAttributes::new().with_tracking(0.2).with_line_height_multiple(1.5),
//! );
//!
//! // 1.5 × the natural line height of 14 adds 7 units of spacing.
//! assert_eq!(body.line_spacing(&system), Some(7.0));
//!
//! // Transforms derive a new configuration; `body` is unchanged.
//! let emphasis = body.bold(&mut system);
//! assert_eq!(emphasis.attributes(), body.attributes());
//! assert_ne!(emphasis.font(), body.font());
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

pub mod testing;

mod attributes;
mod config;
mod family;
mod font;
mod metrics;
mod scope;
mod system;

#[cfg(test)]
mod tests;

pub use attributes::FontAttributes;
pub use config::FontConfig;
pub use family::{FontFamilyName, GenericFamily, ParseFamilyError, ParseFamilyErrorKind};
pub use font::{FontTransform, FontWeight, Leading};
pub use metrics::{line_spacing, FontMetrics};
pub use scope::FontScope;
pub use system::FontSystem;
