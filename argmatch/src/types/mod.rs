//! The [`types`](self) module defines how arguments and their expected types
//! are represented at runtime.

pub mod arg_type;
pub mod argument;
pub mod compat;

pub use arg_type::ArgType;
pub use argument::{Argument, Literal};
pub use compat::is_compatible;
