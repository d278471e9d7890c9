use super::{ArgType, Argument};

/// Returns `true` if the passed `argument` is compatible with the type `ty`.
///
/// An absent argument is compatible with any nullable type. A present argument
/// is compatible with the [`object`](ArgType::object) type and with the type
/// it actually has.
#[must_use]
pub fn is_compatible(argument: Option<&dyn Argument>, ty: &ArgType) -> bool {
    match (argument, ty.id()) {
        (None, _) => ty.is_nullable(),
        (Some(_), None) => true,
        (Some(argument), Some(id)) => argument.as_any().type_id() == id,
    }
}

#[cfg(test)]
mod tests {
    use super::is_compatible;
    use crate::types::{ArgType, Argument};

    #[test]
    fn present_values() {
        let value = 3i32;
        let arg: Option<&dyn Argument> = Some(&value);

        assert!(is_compatible(arg, &ArgType::of::<i32>()));
        assert!(is_compatible(arg, &ArgType::nullable::<i32>()));
        assert!(is_compatible(arg, &ArgType::object()));
        assert!(!is_compatible(arg, &ArgType::of::<i64>()));
        assert!(!is_compatible(arg, &ArgType::of::<String>()));
    }

    #[test]
    fn absent_values() {
        assert!(!is_compatible(None, &ArgType::of::<i32>()));
        assert!(is_compatible(None, &ArgType::nullable::<i32>()));
        assert!(is_compatible(None, &ArgType::object()));
    }
}
