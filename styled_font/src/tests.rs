// Copyright 2026 the Styled Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate alloc;

use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::testing::TestFontSystem;
use crate::{
    line_spacing, FontAttributes, FontConfig, FontFamilyName, FontMetrics, FontScope,
    FontTransform, FontWeight, Leading, ParseFamilyErrorKind,
};

fn metrics(ascent: f32, descent: f32, leading: f32) -> FontMetrics {
    FontMetrics {
        ascent,
        descent,
        leading,
    }
}

fn test_system() -> TestFontSystem {
    TestFontSystem::new(metrics(8.0, 2.0, 0.0)).with_family("Jost", metrics(10.0, 3.0, 1.0))
}

fn jost(system: &mut TestFontSystem, attributes: FontAttributes) -> FontConfig<TestFontSystem> {
    FontConfig::new(system, FontFamilyName::named("Jost"), 14.0, attributes)
}

#[test]
fn natural_line_height_sums_all_three_metrics() {
    assert_eq!(metrics(10.0, 3.0, 1.0).line_height(), 14.0);
    assert_eq!(metrics(7.5, 2.25, 0.0).line_height(), 9.75);
}

#[test]
fn line_spacing_is_absent_for_non_increasing_multiples() {
    let m = metrics(10.0, 3.0, 1.0);
    assert_eq!(line_spacing(m, 1.0), None);
    assert_eq!(line_spacing(m, 0.8), None);
    assert_eq!(line_spacing(m, 0.0), None);
    assert_eq!(line_spacing(metrics(7.5, 2.25, 1.25), 1.0), None);
}

#[test]
fn line_spacing_is_the_difference_to_the_custom_line_height() {
    // ascent 10 + descent 3 + leading 1 gives a natural line height of 14;
    // 1.5 × 14 = 21, so 7 units of spacing are added.
    let m = metrics(10.0, 3.0, 1.0);
    assert_eq!(line_spacing(m, 1.5), Some(7.0));
    assert_eq!(line_spacing(m, 2.0), Some(14.0));

    let m = metrics(8.0, 2.0, 0.0);
    assert_eq!(line_spacing(m, 1.25), Some(2.5));
}

#[test]
fn line_spacing_is_deterministic() {
    let m = metrics(11.3, 2.9, 0.4);
    assert_eq!(line_spacing(m, 1.37), line_spacing(m, 1.37));
}

#[test]
fn config_derives_styled_and_metrics_handles_from_the_same_face() {
    let mut system = test_system();
    let config = jost(&mut system, FontAttributes::new());
    assert_eq!(config.font(), config.metrics_font());
    assert_eq!(config.font().family, "Jost");
    assert_eq!(config.font().size, 14.0);
}

#[test]
fn transforms_produce_a_new_configuration_without_mutating_the_receiver() {
    let mut system = test_system();
    let attributes = FontAttributes::new().with_kerning(0.5);
    let config = jost(&mut system, attributes);
    let before = config.clone();

    let bold = config.bold(&mut system);

    assert_eq!(config, before);
    assert_eq!(bold.attributes(), config.attributes());
    assert_eq!(bold.family(), config.family());
    assert_eq!(bold.size(), config.size());
    assert_eq!(bold.font().transforms, [FontTransform::Bold]);
    assert!(config.font().transforms.is_empty());
}

#[test]
fn transforms_replace_the_styled_handle_wholesale() {
    let mut system = test_system();
    let config = jost(&mut system, FontAttributes::new());

    let styled = config
        .italic(&mut system)
        .weight(&mut system, FontWeight::SEMI_BOLD)
        .small_caps(&mut system)
        .leading(&mut system, Leading::Tight);

    assert_eq!(
        styled.font().transforms,
        [
            FontTransform::Italic,
            FontTransform::Weight(FontWeight::SEMI_BOLD),
            FontTransform::SmallCaps,
            FontTransform::Leading(Leading::Tight),
        ]
    );
}

#[test]
fn metrics_handle_is_independent_of_transforms() {
    let mut system = test_system();
    let attributes = FontAttributes::new().with_line_height_multiple(1.5);
    let config = jost(&mut system, attributes);

    let styled = config
        .bold(&mut system)
        .monospaced_digit(&mut system)
        .uppercase_small_caps(&mut system);

    assert!(styled.metrics_font().transforms.is_empty());
    assert_eq!(styled.line_spacing(&system), Some(7.0));
}

#[test]
fn config_line_spacing_uses_the_face_metrics() {
    let mut system = test_system();
    let config = jost(
        &mut system,
        FontAttributes::new().with_line_height_multiple(1.5),
    );
    assert_eq!(config.line_spacing(&system), Some(7.0));

    // Unknown families degrade to the fallback face.
    let other = FontConfig::new(
        &mut system,
        FontFamilyName::named("No Such Family"),
        14.0,
        FontAttributes::new().with_line_height_multiple(1.5),
    );
    assert_eq!(other.line_spacing(&system), Some(5.0));
}

#[test]
fn config_line_spacing_is_absent_without_the_attribute() {
    let mut system = test_system();
    let config = jost(&mut system, FontAttributes::new().with_kerning(1.0));
    assert_eq!(config.line_spacing(&system), None);

    let config = jost(
        &mut system,
        FontAttributes::new().with_line_height_multiple(1.0),
    );
    assert_eq!(config.line_spacing(&system), None);
}

#[test]
fn identical_configurations_are_interchangeable() {
    let mut system = test_system();
    let attributes = FontAttributes::new().with_tracking(0.2);
    let a = jost(&mut system, attributes);
    let b = jost(&mut system, attributes);
    assert_eq!(a, b);

    let c = jost(&mut system, FontAttributes::new());
    assert_ne!(a, c);
}

#[test]
fn attribute_builders_leave_other_attributes_absent() {
    let attributes = FontAttributes::new().with_tracking(0.25);
    assert_eq!(attributes.kerning(), None);
    assert_eq!(attributes.tracking(), Some(0.25));
    assert_eq!(attributes.line_height_multiple(), None);
}

#[test]
fn empty_scope_has_no_default() {
    let scope = FontScope::<TestFontSystem>::new();
    assert!(scope.current().is_none());
    assert_eq!(scope.depth(), 0);
}

#[test]
fn inner_scope_assignment_overrides_outer() {
    let mut system = test_system();
    let outer = jost(&mut system, FontAttributes::new());
    let inner = jost(&mut system, FontAttributes::new().with_kerning(1.0));

    let mut scope = FontScope::new();
    scope.push(Some(outer.clone()));
    assert_eq!(scope.current(), Some(&outer));

    scope.push(Some(inner.clone()));
    assert_eq!(scope.current(), Some(&inner));

    scope.pop();
    assert_eq!(scope.current(), Some(&outer));
}

#[test]
fn explicitly_cleared_scope_suppresses_outer_assignments() {
    let mut system = test_system();
    let outer = jost(&mut system, FontAttributes::new());

    let mut scope = FontScope::new();
    scope.push(Some(outer.clone()));
    scope.push(None);
    assert!(scope.current().is_none());

    scope.pop();
    assert_eq!(scope.current(), Some(&outer));
}

#[test]
fn family_parse_handles_named_generic_and_quoted() {
    assert_eq!(
        FontFamilyName::parse("Palatino Linotype"),
        Some(FontFamilyName::Named(Cow::Borrowed("Palatino Linotype")))
    );
    assert_eq!(
        FontFamilyName::parse("serif"),
        Some(FontFamilyName::Generic(crate::GenericFamily::Serif))
    );
    assert_eq!(
        FontFamilyName::parse("\"serif\""),
        Some(FontFamilyName::Named(Cow::Borrowed("serif")))
    );
}

#[test]
fn family_list_permits_trailing_comma() {
    let families: Result<Vec<_>, _> = FontFamilyName::parse_list("Arial, serif,").collect();
    let families = families.unwrap();
    assert_eq!(families.len(), 2);
    assert_eq!(families[1], FontFamilyName::Generic(crate::GenericFamily::Serif));
}

#[test]
fn family_list_rejects_empty_entries() {
    let mut iter = FontFamilyName::parse_list("Arial,,serif");
    assert!(iter.next().unwrap().is_ok());
    let err = iter.next().unwrap().unwrap_err();
    assert_eq!(err.kind(), ParseFamilyErrorKind::InvalidSyntax);
    assert!(iter.next().is_none());
}

#[test]
fn family_list_rejects_unterminated_strings() {
    let mut iter = FontFamilyName::parse_list("'Times New Roman");
    let err = iter.next().unwrap().unwrap_err();
    assert_eq!(err.kind(), ParseFamilyErrorKind::UnterminatedString);
    assert_eq!(err.byte_offset(), 0);
}
