//! Element rendering for `join` and `Display`.
//!
//! The rendering of an element type is picked at compile time through the
//! [`ElementString`] trait:
//!
//! 1. numeric primitives and `bool` use their built-in conversion;
//! 2. any other type may implement [`ElementString`] directly;
//! 3. types that only have `Display` opt in with
//!    [`impl_element_string_via_display!`](crate::impl_element_string_via_display).
//!
//! Strings are quoted with `"` and chars with `'`.

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use crate::DynamicArray;

/// Separator used by [`DynamicArray::joined`].
pub const DEFAULT_SEPARATOR: &str = ",";

/// Converts one element into the text used by `join` and `Display`.
pub trait ElementString {
    fn element_string(&self) -> String;
}

impl_element_string_via_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool,
);

impl ElementString for str {
    fn element_string(&self) -> String {
        format!("\"{}\"", self)
    }
}

impl ElementString for String {
    fn element_string(&self) -> String {
        self.as_str().element_string()
    }
}

impl ElementString for Cow<'_, str> {
    fn element_string(&self) -> String {
        self.as_ref().element_string()
    }
}

impl ElementString for char {
    fn element_string(&self) -> String {
        format!("'{}'", self)
    }
}

impl<T: ElementString + ?Sized> ElementString for &T {
    fn element_string(&self) -> String {
        (**self).element_string()
    }
}

impl<T: ElementString + ?Sized> ElementString for Box<T> {
    fn element_string(&self) -> String {
        (**self).element_string()
    }
}

impl<T: ElementString + ?Sized> ElementString for Rc<T> {
    fn element_string(&self) -> String {
        (**self).element_string()
    }
}

impl<T: ElementString + ?Sized> ElementString for Arc<T> {
    fn element_string(&self) -> String {
        (**self).element_string()
    }
}

impl<T: ElementString> ElementString for Option<T> {
    fn element_string(&self) -> String {
        match self {
            Some(value) => value.element_string(),
            None => String::from("null"),
        }
    }
}

impl<T: ElementString> ElementString for DynamicArray<T> {
    fn element_string(&self) -> String {
        self.to_string()
    }
}

impl<T: ElementString> DynamicArray<T> {
    /// Renders every element and concatenates them with `separator` between
    /// neighbours.
    pub fn join(&self, separator: &str) -> String {
        let mut out = String::new();
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            out.push_str(&value.element_string());
        }
        out
    }

    pub fn joined(&self) -> String {
        self.join(DEFAULT_SEPARATOR)
    }
}

/// `[ e0, e1, ..., en ]`; an empty array renders as `[  ]`.
impl<T: ElementString> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {} ]", self.join(", "))
    }
}
