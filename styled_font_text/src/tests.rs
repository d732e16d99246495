// Copyright 2026 the Styled Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate alloc;

use styled_font::testing::{TestFont, TestFontSystem};
use styled_font::{FontAttributes, FontConfig, FontFamilyName, FontMetrics, FontScope};

use crate::access::{HeadingLevel, TextContentType};
use crate::label::StyledLabel;

type Label = StyledLabel<TestFontSystem, u32>;

fn test_system() -> TestFontSystem {
    TestFontSystem::new(FontMetrics {
        ascent: 8.0,
        descent: 2.0,
        leading: 0.0,
    })
    .with_family(
        "Jost",
        FontMetrics {
            ascent: 10.0,
            descent: 3.0,
            leading: 1.0,
        },
    )
}

fn jost(system: &mut TestFontSystem, attributes: FontAttributes) -> FontConfig<TestFontSystem> {
    FontConfig::new(system, FontFamilyName::named("Jost"), 14.0, attributes)
}

#[test]
fn unstyled_label_resolves_to_host_defaults() {
    let system = test_system();
    let resolved = Label::new("plain").resolve(&system, None);
    assert!(resolved.font.is_none());
    assert_eq!(resolved.kerning, 0.0);
    assert_eq!(resolved.tracking, 0.0);
    assert_eq!(resolved.line_spacing, 0.0);
    assert_eq!(resolved.vertical_padding, 0.0);
    assert!(!resolved.bold);
    assert!(!resolved.underline.enabled);
}

#[test]
fn ambient_configuration_applies_without_an_explicit_one() {
    let mut system = test_system();
    let ambient = jost(&mut system, FontAttributes::new().with_kerning(2.0));
    let resolved = Label::new("body").resolve(&system, Some(&ambient));
    assert_eq!(resolved.font.as_ref(), Some(ambient.font()));
    assert_eq!(resolved.kerning, 2.0);
}

#[test]
fn explicit_assignment_wins_over_ambient() {
    let mut system = test_system();
    let ambient = jost(&mut system, FontAttributes::new());
    let explicit = jost(&mut system, FontAttributes::new().with_tracking(0.5)).bold(&mut system);

    let label = Label::new("title").attributed_font(Some(explicit.clone()));
    let resolved = label.resolve(&system, Some(&ambient));
    assert_eq!(resolved.font.as_ref(), Some(explicit.font()));
    assert_eq!(resolved.tracking, 0.5);
}

#[test]
fn explicit_clear_suppresses_the_ambient_configuration() {
    let mut system = test_system();
    let ambient = jost(&mut system, FontAttributes::new().with_kerning(2.0));

    let label = Label::new("reset").attributed_font(None);
    let resolved = label.resolve(&system, Some(&ambient));
    assert!(resolved.font.is_none());
    assert_eq!(resolved.kerning, 0.0);
}

#[test]
fn explicit_assignment_wins_at_any_scope_depth() {
    let mut system = test_system();
    let outer = jost(&mut system, FontAttributes::new());
    let inner = jost(&mut system, FontAttributes::new().with_kerning(1.0));
    let explicit = jost(&mut system, FontAttributes::new().with_kerning(9.0));

    let mut scope = FontScope::new();
    scope.push(Some(outer));
    scope.push(Some(inner.clone()));
    scope.push(Some(inner));

    let label = Label::new("deep").attributed_font(Some(explicit.clone()));
    let resolved = label.resolve_in_scope(&system, &scope);
    assert_eq!(resolved.kerning, 9.0);
    assert_eq!(resolved.font.as_ref(), Some(explicit.font()));
}

#[test]
fn resolve_in_scope_reads_the_innermost_assignment() {
    let mut system = test_system();
    let outer = jost(&mut system, FontAttributes::new().with_kerning(1.0));
    let inner = jost(&mut system, FontAttributes::new().with_kerning(4.0));

    let mut scope = FontScope::new();
    scope.push(Some(outer));
    scope.push(Some(inner));

    let resolved = Label::new("nested").resolve_in_scope(&system, &scope);
    assert_eq!(resolved.kerning, 4.0);

    scope.pop();
    let resolved = Label::new("nested").resolve_in_scope(&system, &scope);
    assert_eq!(resolved.kerning, 1.0);
}

#[test]
fn line_spacing_and_padding_come_from_the_line_height_multiple() {
    let mut system = test_system();
    // Natural line height 14 × 1.5 adds 7 units of spacing; half of the
    // rounded spacing pads each vertical side.
    let config = jost(
        &mut system,
        FontAttributes::new().with_line_height_multiple(1.5),
    );
    let resolved = Label::new("spaced").resolve(&system, Some(&config));
    assert_eq!(resolved.line_spacing, 7.0);
    assert_eq!(resolved.vertical_padding, 3.5);
}

#[test]
fn vertical_padding_halves_the_rounded_spacing() {
    let mut system = test_system()
        .with_family(
            "Wide",
            FontMetrics {
                ascent: 10.0,
                descent: 5.0,
                leading: 1.0,
            },
        );
    // Natural line height 16 × 1.4 adds about 6.4 units of spacing, which
    // rounds to 6 before halving.
    let config = FontConfig::new(
        &mut system,
        FontFamilyName::named("Wide"),
        16.0,
        FontAttributes::new().with_line_height_multiple(1.4),
    );
    let resolved = Label::new("padded").resolve(&system, Some(&config));
    assert!((resolved.line_spacing - 6.4).abs() < 1e-4);
    assert_eq!(resolved.vertical_padding, 3.0);
}

#[test]
fn multiples_at_or_below_one_produce_no_spacing_or_padding() {
    let mut system = test_system();
    let config = jost(
        &mut system,
        FontAttributes::new().with_line_height_multiple(1.0),
    );
    let resolved = Label::new("tight").resolve(&system, Some(&config));
    assert_eq!(resolved.line_spacing, 0.0);
    assert_eq!(resolved.vertical_padding, 0.0);
}

#[test]
fn modifiers_apply_over_the_configuration() {
    let mut system = test_system();
    let config = jost(
        &mut system,
        FontAttributes::new().with_kerning(2.0).with_tracking(0.25),
    );
    let label = Label::new("adjusted").kerning(5.0);
    let resolved = label.resolve(&system, Some(&config));
    assert_eq!(resolved.kerning, 5.0);
    assert_eq!(resolved.tracking, 0.25);
}

#[test]
fn last_declaration_wins_within_a_label() {
    let system = test_system();
    let label = Label::new("twice").kerning(1.0).kerning(3.0);
    let resolved = label.resolve(&system, None);
    assert_eq!(resolved.kerning, 3.0);

    let label = Label::new("twice")
        .foreground(Some(0xff_00_00))
        .foreground(None);
    let resolved = label.resolve(&system, None);
    assert_eq!(resolved.foreground, None);
}

#[test]
fn decoration_modifiers_carry_their_brush() {
    let system = test_system();
    let label = Label::new("marked")
        .underline(true, Some(0x00_00_ff))
        .strikethrough(true, None);
    let resolved = label.resolve(&system, None);
    assert!(resolved.underline.enabled);
    assert_eq!(resolved.underline.brush, Some(0x00_00_ff));
    assert!(resolved.strikethrough.enabled);
    assert_eq!(resolved.strikethrough.brush, None);
}

#[test]
fn style_flags_and_offsets_resolve() {
    let system = test_system();
    let label = Label::new("styled")
        .bold()
        .italic()
        .monospaced_digit()
        .baseline_offset(-1.5);
    let resolved = label.resolve(&system, None);
    assert!(resolved.bold);
    assert!(resolved.italic);
    assert!(resolved.monospaced_digit);
    assert_eq!(resolved.baseline_offset, -1.5);
}

#[test]
fn font_modifier_overrides_the_configuration_font() {
    let mut system = test_system();
    let config = jost(&mut system, FontAttributes::new());
    let other = TestFont {
        family: "Other".into(),
        size: 9.0,
        transforms: alloc::vec::Vec::new(),
    };

    let label = Label::new("switched").font(Some(other.clone()));
    let resolved = label.resolve(&system, Some(&config));
    assert_eq!(resolved.font, Some(other));
}

#[test]
fn speech_and_accessibility_hints_are_carried_through() {
    let system = test_system();
    let label = Label::new("§3.1 Results")
        .speech_always_includes_punctuation(true)
        .speech_adjusted_pitch(0.2)
        .accessibility_label("Section three point one, results")
        .accessibility_heading(HeadingLevel::H2)
        .accessibility_text_content_type(TextContentType::Narrative);

    let resolved = label.resolve(&system, None);
    assert_eq!(resolved.speech.always_includes_punctuation(), Some(true));
    assert_eq!(resolved.speech.adjusted_pitch(), Some(0.2));
    assert_eq!(resolved.speech.spells_out_characters(), None);
    assert_eq!(
        resolved.accessibility.label(),
        Some("Section three point one, results")
    );
    assert_eq!(resolved.accessibility.heading(), Some(HeadingLevel::H2));
    assert_eq!(
        resolved.accessibility.content_type(),
        Some(TextContentType::Narrative)
    );
}

#[test]
fn concatenate_joins_content_and_attaches_the_configuration() {
    let mut system = test_system();
    let config = jost(&mut system, FontAttributes::new().with_kerning(2.0));

    let joined = Label::concatenate(
        [
            Label::new("Hello, ").bold(),
            Label::new("world").italic(),
            Label::new("!"),
        ],
        config.clone(),
    );
    assert_eq!(joined.content(), "Hello, world!");
    assert_eq!(joined.explicit_font(), Some(Some(&config)));

    let resolved = joined.resolve(&system, None);
    assert_eq!(resolved.kerning, 2.0);
    assert!(resolved.bold);
    assert!(resolved.italic);
}

#[test]
fn labels_compare_by_content_and_styling() {
    let a = Label::new("same").bold();
    let b = Label::new("same").bold();
    assert_eq!(a, b);

    assert_ne!(Label::new("same"), Label::new("same").bold());
    assert_ne!(Label::new("one"), Label::new("two"));
}

#[cfg(feature = "accesskit")]
#[test]
fn resolved_headings_lower_to_heading_nodes() {
    use accesskit::Role;

    let system = test_system();
    let label = Label::new("Results")
        .accessibility_heading(HeadingLevel::H2)
        .accessibility_label("Results section");
    let resolved = label.resolve(&system, None);

    let node = resolved.to_access_node("Results");
    assert_eq!(node.role(), Role::Heading);
    assert_eq!(node.value(), Some("Results"));
    assert_eq!(node.label(), Some("Results section"));
    assert_eq!(node.level(), Some(2));
}

#[cfg(feature = "accesskit")]
#[test]
fn resolved_text_lowers_to_label_nodes() {
    use accesskit::Role;

    let system = test_system();
    let resolved = Label::new("plain").resolve(&system, None);
    let node = resolved.to_access_node("plain");
    assert_eq!(node.role(), Role::Label);
    assert_eq!(node.label(), None);
}
