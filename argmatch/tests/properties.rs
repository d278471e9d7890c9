use argmatch::{
    matcher::{any_of_type, closure},
    ArgType, ArgumentMatcher, ArgumentSpecification,
};
use proptest::prelude::*;

fn divisible_by(divisor: i64) -> ArgumentSpecification {
    ArgumentSpecification::new(
        ArgType::of::<i64>(),
        closure(move |value: &i64| value % divisor == 0),
    )
}

proptest! {
    #[test]
    fn compatible_values_follow_matcher(value in any::<i64>(), divisor in 1i64..16) {
        let spec = divisible_by(divisor);
        let matcher = closure(move |value: &i64| value % divisor == 0);

        prop_assert_eq!(matcher.is_satisfied_by(Some(&value)), spec.is_satisfied_by(Some(&value)));
    }

    #[test]
    fn incompatible_values_never_match(value in any::<i32>(), text in ".*") {
        let spec = ArgumentSpecification::new(ArgType::of::<i64>(), any_of_type(ArgType::object()));

        prop_assert!(!spec.is_satisfied_by(Some(&value)));
        prop_assert!(!spec.is_satisfied_by(Some(&text)));
    }

    #[test]
    fn panicking_matcher_never_escapes(value in any::<i64>()) {
        let spec = ArgumentSpecification::new(
            ArgType::of::<i64>(),
            closure(|value: &i64| {
                assert!(*value == i64::MIN, "unexpected value");

                true
            }),
        );

        prop_assert_eq!(value == i64::MIN, spec.is_satisfied_by(Some(&value)));
    }

    #[test]
    fn copy_accepts_exactly_compatible_values(value in any::<i64>(), other in any::<u32>()) {
        let copy = divisible_by(7).create_copy_matching_any_arg_of_type(ArgType::of::<i64>());

        prop_assert!(copy.is_satisfied_by(Some(&value)));
        prop_assert!(!copy.is_satisfied_by(Some(&other)));
    }

    #[test]
    fn formatting_differs_for_mismatches(value in any::<i64>()) {
        let spec = divisible_by(2);
        let formatted = spec.format_argument(Some(&value));

        if value % 2 == 0 {
            prop_assert_eq!(value.to_string(), formatted);
        } else {
            prop_assert_eq!(format!("*{value}*"), formatted);
        }
    }
}
