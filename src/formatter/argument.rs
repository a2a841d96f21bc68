use std::fmt;

/// A single formatting argument, captured at the log-call boundary.
///
/// Arguments are a closed set of value kinds rather than boxed trait
/// objects, so capturing them never allocates for borrowed strings or
/// primitives. They live for the duration of one formatting call and are
/// never retained.
///
/// The [`log!`] family of macros builds these with `Argument::from`, so
/// callers rarely name this type directly.
///
/// [`log!`]: crate::log
#[derive(Debug, Clone, PartialEq)]
pub enum Argument<'a> {
    /// A borrowed string slice.
    Str(&'a str),
    /// An owned string.
    Owned(String),
    /// A single character.
    Char(char),
    /// A signed integer.
    Int(i64),
    /// An unsigned integer.
    Uint(u64),
    /// A floating-point number.
    Float(f64),
    /// A boolean.
    Bool(bool),
}

impl<'a> From<&'a str> for Argument<'a> {
    fn from(value: &'a str) -> Self {
        Argument::Str(value)
    }
}

impl<'a> From<&'a String> for Argument<'a> {
    fn from(value: &'a String) -> Self {
        Argument::Str(value.as_str())
    }
}

impl From<String> for Argument<'_> {
    fn from(value: String) -> Self {
        Argument::Owned(value)
    }
}

impl From<char> for Argument<'_> {
    fn from(value: char) -> Self {
        Argument::Char(value)
    }
}

impl From<bool> for Argument<'_> {
    fn from(value: bool) -> Self {
        Argument::Bool(value)
    }
}

impl From<f32> for Argument<'_> {
    fn from(value: f32) -> Self {
        Argument::Float(value.into())
    }
}

impl From<f64> for Argument<'_> {
    fn from(value: f64) -> Self {
        Argument::Float(value)
    }
}

macro_rules! impl_from_int {
    ($($int:ty)*) => {$(
        impl From<$int> for Argument<'_> {
            fn from(value: $int) -> Self {
                Argument::Int(value as i64)
            }
        }
    )*};
}

macro_rules! impl_from_uint {
    ($($uint:ty)*) => {$(
        impl From<$uint> for Argument<'_> {
            fn from(value: $uint) -> Self {
                Argument::Uint(value as u64)
            }
        }
    )*};
}

impl_from_int! { i8 i16 i32 i64 isize }
impl_from_uint! { u8 u16 u32 u64 usize }

impl fmt::Display for Argument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Argument::Str(value) => f.pad(value),
            Argument::Owned(value) => f.pad(value),
            Argument::Char(value) => value.fmt(f),
            Argument::Int(value) => value.fmt(f),
            Argument::Uint(value) => value.fmt(f),
            Argument::Float(value) => value.fmt(f),
            // Booleans print numerically unless a specifier asks for words
            Argument::Bool(value) => (*value as u8).fmt(f),
        }
    }
}
