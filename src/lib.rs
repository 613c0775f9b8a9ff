//! A resizable array with O(1) removal from both ends, a functional API
//! and `[ a, b, c ]` formatting.
//!
//! ```
//! use dynarray::{dynarray, DynamicArray};
//!
//! let mut a = dynarray![1, 2, 3];
//! a.unshift(0);
//! assert_eq!(a.shift(), Ok(0));
//!
//! let doubled: DynamicArray<i32> = a.map(|x| x * 2);
//! assert_eq!(doubled.reduce(|acc, x| acc + x), Ok(12));
//! assert_eq!(doubled.to_string(), "[ 2, 4, 6 ]");
//! ```

#[macro_use]
mod macros;

mod dynamic_array;
mod error;
mod iter;
mod ops;
#[cfg(feature = "serde")]
mod serde_impl;
mod stringify;
mod transform;

pub use dynamic_array::{DynamicArray, GROWTH_FACTOR, MIN_CAPACITY};
pub use error::{ArrayError, Result};
pub use iter::IntoIter;
pub use stringify::{ElementString, DEFAULT_SEPARATOR};
