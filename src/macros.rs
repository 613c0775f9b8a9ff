/// Creates a [`DynamicArray`](crate::DynamicArray) from a list of elements,
/// or `n` clones of one element.
///
/// ```
/// use dynarray::dynarray;
///
/// let a = dynarray![1, 2, 3];
/// assert_eq!(a.capacity(), 3);
///
/// let b = dynarray![0u8; 4];
/// assert_eq!(b.size(), 4);
/// ```
#[macro_export]
macro_rules! dynarray {
    () => {
        $crate::DynamicArray::new()
    };
    ($value:expr; $n:expr) => {
        $crate::DynamicArray::filled($n, $value)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::DynamicArray::from([$($value),+])
    };
}

/// Implements [`ElementString`](crate::ElementString) for types that already
/// implement `Display`, using their `Display` output.
///
/// ```
/// use core::fmt;
/// use dynarray::{dynarray, impl_element_string_via_display};
///
/// struct Celsius(f32);
///
/// impl fmt::Display for Celsius {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{}C", self.0)
///     }
/// }
///
/// impl_element_string_via_display!(Celsius);
///
/// assert_eq!(dynarray![Celsius(1.5), Celsius(-2.0)].join(" "), "1.5C -2C");
/// ```
#[macro_export]
macro_rules! impl_element_string_via_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::ElementString for $ty {
                fn element_string(&self) -> ::std::string::String {
                    ::std::string::ToString::to_string(self)
                }
            }
        )+
    };
}
