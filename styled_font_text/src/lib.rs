// Copyright 2026 the Styled Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text elements styled by [`styled_font`] configurations.
//!
//! [`StyledLabel`] pairs text content with an ordered list of styling
//! declarations ([`TextModifier`]) and an optional explicit
//! [`FontConfig`](styled_font::FontConfig). At render time the label is
//! [resolved](StyledLabel::resolve) against the ambient configuration of
//! the enclosing scope:
//!
//! - an explicit assignment on the label always wins, even an explicit
//!   clear;
//! - otherwise the scoped default applies;
//! - with neither, the text renders with host defaults and zero spacing
//!   adjustments.
//!
//! The result is a [`ResolvedText`]: the complete set of parameters a host
//! text view needs, including the derived line spacing and the vertical
//! padding that compensates for it.
//!
//! ## Example
//!
//! ```
//! use styled_font::testing::TestFontSystem;
//! use styled_font::{FontAttributes, FontConfig, FontFamilyName, FontMetrics, FontScope};
//! use styled_font_text::StyledLabel;
//!
//! let mut system = TestFontSystem::new(FontMetrics::default())
//!     .with_family("Jost", FontMetrics { ascent: 10.0, descent: 3.0, leading: 1.0 });
//! let body = FontConfig::new(
//!     &mut system,
//!     FontFamilyName::named("Jost"),
//!     14.0,
//!     FontAttributes::new().with_line_height_multiple(1.5),
//! );
//!
//! let mut scope = FontScope::new();
//! scope.push(Some(body));
//!
//! let label: StyledLabel<_, u32> = StyledLabel::new("Hello, world!").bold();
//! let resolved = label.resolve_in_scope(&system, &scope);
//! assert!(resolved.bold);
//! assert_eq!(resolved.line_spacing, 7.0);
//! assert_eq!(resolved.vertical_padding, 3.5);
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
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

#[cfg(feature = "accesskit")]
mod accessibility;

mod access;
mod brush;
mod label;
mod modifier;
mod resolve;

#[cfg(test)]
mod tests;

pub use access::{AccessibilityProps, HeadingLevel, SpeechHints, TextContentType};
pub use brush::Brush;
pub use label::StyledLabel;
pub use modifier::TextModifier;
pub use resolve::{ResolvedDecoration, ResolvedText};
