use std::any::{type_name, Any, TypeId};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Runtime description of the type an argument is expected to have.
///
/// An [`ArgType`] is either a concrete type `T` (that may or may not accept an
/// absent value) or the top type [`ArgType::object()`] that every value is
/// compatible with.
#[derive(Debug, Clone, Copy)]
pub struct ArgType {
    kind: Kind,
    name: &'static str,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
enum Kind {
    Object,
    Value(TypeId),
    Nullable(TypeId),
}

impl ArgType {
    /// Type that only accepts present values of type `T`.
    #[must_use]
    pub fn of<T: Any>() -> Self {
        Self {
            kind: Kind::Value(TypeId::of::<T>()),
            name: type_name::<T>(),
        }
    }

    /// Type that accepts present values of type `T` and absent values.
    #[must_use]
    pub fn nullable<T: Any>() -> Self {
        Self {
            kind: Kind::Nullable(TypeId::of::<T>()),
            name: type_name::<T>(),
        }
    }

    /// The top type. Any value, present or not, is compatible with it.
    #[must_use]
    pub fn object() -> Self {
        Self {
            kind: Kind::Object,
            name: "Object",
        }
    }

    /// Returns `true` if an absent value is compatible with this type.
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        !matches!(self.kind, Kind::Value(_))
    }

    /// Returns `true` if this is the [`object`](Self::object) type.
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self.kind, Kind::Object)
    }

    /// Id of the concrete type, `None` for the [`object`](Self::object) type.
    #[must_use]
    pub fn id(&self) -> Option<TypeId> {
        match self.kind {
            Kind::Object => None,
            Kind::Value(id) | Kind::Nullable(id) => Some(id),
        }
    }

    /// Fully qualified name of the type as reported by [`type_name`].
    #[must_use]
    pub fn full_name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for ArgType {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for ArgType {}

impl Display for ArgType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut segment_start = 0;

        for (i, c) in self.name.char_indices() {
            if is_delimiter(c) {
                write_last_segment(f, &self.name[segment_start..i])?;
                write!(f, "{c}")?;
                segment_start = i + c.len_utf8();
            }
        }

        write_last_segment(f, &self.name[segment_start..])
    }
}

fn is_delimiter(c: char) -> bool {
    matches!(
        c,
        '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | '&' | '*' | ';'
    )
}

fn write_last_segment(f: &mut Formatter<'_>, path: &str) -> FmtResult {
    let name = path.rsplit("::").next().unwrap_or(path);

    write!(f, "{name}")
}
