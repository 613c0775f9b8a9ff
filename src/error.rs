use thiserror::Error;

/// Failures reported by the checked operations of [`DynamicArray`](crate::DynamicArray).
///
/// Allocation failure is not represented here: it aborts through
/// `std::alloc::handle_alloc_error`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayError {
    /// `pop`, `shift` or a seedless `reduce` on an array with no elements.
    #[error("cannot {operation} an empty array")]
    EmptyContainer { operation: &'static str },

    /// A checked access or insert position outside the array.
    #[error("index {index} is out of range for array of size {size}")]
    IndexOutOfRange { index: isize, size: usize },
}

pub type Result<T> = core::result::Result<T, ArrayError>;
