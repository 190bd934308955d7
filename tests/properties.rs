//! Property tests for measurement, wrapping and centering.

mod common;

use common::{tenths_width, unit_width};
use pixel_width::{
    Component, DEFAULT_CHAT_WIDTH, Flattener, Padding, PixelWidthSource, SplitBoundary, Style,
    TextDecoration, WrapOptions, pixel_width,
};
use proptest::prelude::*;

/// A run of text, optionally bold, as a child component.
fn segment() -> impl Strategy<Value = Component> {
    ("[a-zA-Z0-9 .,!@]{0,12}", any::<bool>()).prop_map(|(text, bold)| {
        let component = Component::text(text);
        if bold { component.decoration(TextDecoration::BOLD, true) } else { component }
    })
}

fn styled_tree() -> impl Strategy<Value = Component> {
    prop::collection::vec(segment(), 0..6).prop_map(|children| Component::empty().children_from(children))
}

fn plain_lines(lines: &[Component]) -> String {
    let flattener = Flattener::basic();
    lines.iter().map(|line| flattener.plain_text(line)).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_width_is_non_negative(tree in styled_tree()) {
        let width = pixel_width().width(&tree, None);
        prop_assert!(width >= 0.0, "width {} should be non-negative", width);
    }

    #[test]
    fn prop_width_is_additive(left in "[a-z ]{0,20}", right in "[a-z ]{0,20}") {
        let source = pixel_width();
        let joined = source.width(&Component::text(format!("{left}{right}")), None);
        let parts = source.width(&Component::text(left.as_str()).append(Component::text(right.as_str())), None);
        prop_assert_eq!(joined, parts);
    }

    #[test]
    fn prop_bold_never_narrower(text in "[ -~]{0,40}") {
        let source = pixel_width();
        let plain = source.width_str(&text, &Style::empty(), None);
        let bold = source.width_str(&text, &Style::empty().bold(), None);
        prop_assert!(bold >= plain);
        prop_assert_eq!(bold - plain, text.chars().count() as f32);
    }

    #[test]
    fn prop_wrap_preserves_text(tree in styled_tree(), max_width in 5.0f32..120.0) {
        let lines = pixel_width().wrap(&tree, None, max_width).expect("positive width");
        prop_assert_eq!(plain_lines(&lines), Flattener::basic().plain_text(&tree));
    }

    #[test]
    fn prop_wrapped_lines_fit(text in "[a-z ]{0,80}", max_width in 1.0f32..30.0) {
        let source = PixelWidthSource::<()>::with_function(unit_width);
        let lines = source.wrap(&Component::text(text), None, max_width).expect("positive width");
        for line in &lines {
            let width = source.width(line, None);
            prop_assert!(width <= max_width, "line {:?} is {} wide, max {}", line, width, max_width);
        }
    }

    #[test]
    fn prop_wrap_is_idempotent(text in "[a-z ]{1,60}", max_width in 8.0f32..40.0) {
        let source = PixelWidthSource::<()>::with_function(unit_width);
        let lines = source.wrap(&Component::text(text), None, max_width).expect("positive width");
        for line in &lines {
            let rewrapped = source.wrap(line, None, max_width).expect("positive width");
            prop_assert_eq!(rewrapped, vec![line.clone()]);
        }
    }

    #[test]
    fn prop_fractional_lines_fit(text in "[a-z ]{0,80}", max_width in 0.3f32..4.0) {
        let source = PixelWidthSource::<()>::with_function(tenths_width);
        let lines = source.wrap(&Component::text(text), None, max_width).expect("positive width");
        for line in &lines {
            let width = source.width(line, None);
            prop_assert!(width <= max_width, "line {:?} is {} wide, max {}", line, width, max_width);
        }
    }

    #[test]
    fn prop_fractional_wrap_is_idempotent(text in "[a-z ]{1,60}", max_width in 0.3f32..4.0) {
        let source = PixelWidthSource::<()>::with_function(tenths_width);
        let lines = source.wrap(&Component::text(text), None, max_width).expect("positive width");
        for line in &lines {
            let rewrapped = source.wrap(line, None, max_width).expect("positive width");
            prop_assert_eq!(rewrapped, vec![line.clone()]);
        }
    }

    #[test]
    fn prop_everywhere_wraps_every_char(text in "[a-z]{1,40}", max_width in 1.0f32..10.0) {
        let source = PixelWidthSource::<()>::with_function(unit_width);
        let options = WrapOptions { max_width, split: SplitBoundary::Everywhere };
        let lines = source.wrap_with(&Component::text(text.as_str()), None, &options).expect("positive width");
        let per_line = max_width.floor() as usize;
        let expected = text.chars().count().div_ceil(per_line);
        prop_assert_eq!(lines.len(), expected);
    }

    #[test]
    fn prop_center_is_symmetric(text in "[A-Za-z ]{0,30}", unit in "[-=*~]{1,3}") {
        let source = pixel_width();
        let content = Component::text(text);
        let padding = Padding::new(unit);
        let centered = source.center(&content, None, &padding, DEFAULT_CHAT_WIDTH).expect("padding fits");

        let children = centered.children();
        prop_assert_eq!(children.len(), 3);
        let left = source.width(&children[0], None);
        let right = source.width(&children[2], None);
        prop_assert_eq!(left, right);
        prop_assert_eq!(left + source.width(&content, None) + right, source.width(&centered, None));
        prop_assert!(source.width(&centered, None) <= DEFAULT_CHAT_WIDTH);
    }

    #[test]
    fn prop_center_rejects_unbounded_goal(
        goal in prop_oneof![Just(f32::INFINITY), Just(f32::NAN), 1.0e7f32..1.0e30]
    ) {
        let result = pixel_width().center(&Component::text("WOW"), None, &Padding::new("-"), goal);
        prop_assert!(result.is_err(), "goal {} should be rejected", goal);
    }

    #[test]
    fn prop_center_fits_any_finite_goal(goal in 0u32..1_000_000) {
        let goal = goal as f32;
        let source = pixel_width();
        if let Ok(centered) = source.center(&Component::text("WOW"), None, &Padding::new("-"), goal) {
            prop_assert!(source.width(&centered, None) <= goal);
        }
    }
}
