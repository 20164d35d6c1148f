//! Property checks over arbitrary rule lists and inputs.

use proptest::prelude::*;
use spofity_forms::{Rule, Rules, ValidatedField};

/// A rule list described by (minimum length, message) pairs.
fn rules_strategy() -> impl Strategy<Value = Vec<(usize, String)>> {
    prop::collection::vec((0usize..8, "[a-z]{1,6}"), 0..5)
}

fn build_rules(layout: &[(usize, String)]) -> Rules {
    layout
        .iter()
        .map(|(min, message)| Rule::min_length(*min, message.clone()))
        .collect()
}

fn expected_error(layout: &[(usize, String)], value: &str) -> Option<String> {
    let len = value.chars().count();
    layout
        .iter()
        .find(|(min, _)| len < *min)
        .map(|(_, message)| message.clone())
}

proptest! {
    #[test]
    fn displayed_error_is_first_failing_rule(layout in rules_strategy(), value in "[a-z]{0,10}") {
        let mut field = ValidatedField::builder("f").rules(build_rules(&layout)).build();
        field.set_value(value.clone());
        field.mark_touched();
        prop_assert_eq!(field.display_error().map(str::to_string), expected_error(&layout, &value));
    }

    #[test]
    fn empty_rule_list_never_displays(value in ".{0,12}", touched in any::<bool>(), force in any::<bool>()) {
        let mut field = ValidatedField::builder("f").build();
        field.set_value(value);
        if touched {
            field.mark_touched();
        }
        field.set_force_show_error(force);
        prop_assert_eq!(field.display_error(), None);
    }

    #[test]
    fn nothing_displays_until_revealed(layout in rules_strategy(), values in prop::collection::vec("[a-z]{0,10}", 0..6)) {
        let mut field = ValidatedField::builder("f").rules(build_rules(&layout)).build();
        for value in values {
            field.set_value(value);
            prop_assert_eq!(field.display_error(), None);
        }
    }

    #[test]
    fn touched_never_reverts(layout in rules_strategy(), steps in prop::collection::vec(any::<(bool, bool)>(), 1..10)) {
        let mut field = ValidatedField::builder("f").rules(build_rules(&layout)).build();
        field.mark_touched();
        for (force, retouch) in steps {
            field.set_force_show_error(force);
            if retouch {
                field.mark_touched();
            }
            prop_assert!(field.is_touched());
            prop_assert!(field.is_revealed());
        }
    }

    #[test]
    fn revalidate_twice_agrees(layout in rules_strategy(), value in "[a-z]{0,10}") {
        let mut field = ValidatedField::builder("f")
            .rules(build_rules(&layout))
            .initial_value(value)
            .force_show_error(true)
            .build();
        let first = field.revalidate();
        let first_error = field.last_error().map(str::to_string);
        let second = field.revalidate();
        prop_assert_eq!(first, second);
        prop_assert_eq!(first_error.as_deref(), field.last_error());
    }
}
