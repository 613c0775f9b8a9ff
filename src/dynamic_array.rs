use core::alloc::Layout;
use core::fmt;
use core::marker::PhantomData;
use core::mem;
use core::ptr;

use log::{debug, trace};

use crate::error::{ArrayError, Result};

/// Smallest capacity an empty array grows to.
pub const MIN_CAPACITY: usize = 1;

/// Factor applied to the capacity when an append or a full prepend runs out of room.
pub const GROWTH_FACTOR: usize = 2;

/// A growable array with O(1) removal from both ends.
///
/// Live elements occupy the physical slots `[offset, length)` of a single
/// buffer of `capacity` slots. Removing from the front only advances
/// `offset`; the vacated slots are reclaimed by the next reallocation or
/// in-place compaction.
pub struct DynamicArray<T> {
    data: *mut T,
    offset: usize,
    length: usize,
    capacity: usize,
    _marker: PhantomData<T>,
}

impl<T> DynamicArray<T> {
    pub fn new() -> Self {
        Self {
            data: ptr::null_mut(),
            offset: 0,
            length: 0,
            capacity: 0,
            _marker: PhantomData,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        if capacity == 0 {
            return Self::new();
        }
        Self {
            data: Self::allocate(capacity),
            offset: 0,
            length: 0,
            capacity,
            _marker: PhantomData,
        }
    }

    pub fn from_size_with<F: FnMut() -> T>(size: usize, mut f: F) -> Self {
        let mut arr = Self::with_capacity(size);
        for _ in 0..size {
            arr.push(f());
        }
        arr
    }

    pub fn with_len(size: usize) -> Self
    where
        T: Default,
    {
        Self::from_size_with(size, T::default)
    }

    pub fn filled(size: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::from_size_with(size, || value.clone())
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.data().get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data_mut().get_mut(index)
    }

    pub fn at(&self, index: isize) -> Result<&T> {
        let i = self.checked_index(index)?;
        // SAFETY: checked_index guarantees i < size, so offset + i lies in
        // the initialised range [offset, length).
        unsafe { Ok(&*self.data.add(self.offset + i)) }
    }

    pub fn at_mut(&mut self, index: isize) -> Result<&mut T> {
        let i = self.checked_index(index)?;
        // SAFETY: as in `at`.
        unsafe { Ok(&mut *self.data.add(self.offset + i)) }
    }

    pub fn set(&mut self, index: isize, value: T) -> Result<()> {
        *self.at_mut(index)? = value;
        Ok(())
    }

    /// # Safety
    ///
    /// `index` must be less than `self.size()`.
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.size());
        &*self.data.add(self.offset + index)
    }

    /// # Safety
    ///
    /// `index` must be less than `self.size()`.
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.size());
        &mut *self.data.add(self.offset + index)
    }

    pub fn front(&self) -> Option<&T> {
        self.data().first()
    }

    pub fn back(&self) -> Option<&T> {
        self.data().last()
    }

    pub fn data(&self) -> &[T] {
        if self.is_empty() {
            &[]
        } else {
            // SAFETY: size > 0 implies data is non-null and the `size` slots
            // starting at offset are initialised.
            unsafe { core::slice::from_raw_parts(self.data.add(self.offset), self.size()) }
        }
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        if self.is_empty() {
            &mut []
        } else {
            // SAFETY: as in `data`; &mut self guarantees exclusivity.
            unsafe { core::slice::from_raw_parts_mut(self.data.add(self.offset), self.size()) }
        }
    }

    pub fn size(&self) -> usize {
        self.length - self.offset
    }

    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.length == self.offset
    }

    pub fn is_full(&self) -> bool {
        self.size() == self.capacity
    }

    pub fn reserve(&mut self, new_capacity: usize) {
        let target = new_capacity.max(self.size());
        if target == self.capacity && self.offset == 0 {
            return;
        }
        self.relocate(target, 0);
    }

    pub fn shrink_to_fit(&mut self) {
        self.reserve(self.size());
    }

    pub fn push(&mut self, value: T) {
        self.make_room_at_end(1);
        // SAFETY: make_room_at_end leaves length < capacity, so the slot is
        // in bounds and uninitialised.
        unsafe {
            ptr::write(self.data.add(self.length), value);
        }
        self.length += 1;
    }

    pub fn pop(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(ArrayError::EmptyContainer { operation: "pop" });
        }
        self.length -= 1;
        // SAFETY: the slot at the old length - 1 was initialised and is now
        // outside the live range, so reading it moves the value out.
        let value = unsafe { ptr::read(self.data.add(self.length)) };
        self.reset_if_empty();
        Ok(value)
    }

    pub fn unshift(&mut self, value: T) {
        if self.offset == 0 {
            let size = self.size();
            let new_capacity = if self.is_full() {
                self.grown_capacity()
            } else {
                size + 1
            };
            // Live elements go to the back so the free slots sit in front.
            self.relocate(new_capacity, new_capacity - size);
        }
        self.offset -= 1;
        // SAFETY: offset was > 0, so offset - 1 is a vacant in-bounds slot.
        unsafe {
            ptr::write(self.data.add(self.offset), value);
        }
    }

    pub fn shift(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(ArrayError::EmptyContainer { operation: "shift" });
        }
        // SAFETY: non-empty, so the slot at offset is initialised. Advancing
        // offset below takes it out of the live range.
        let value = unsafe { ptr::read(self.data.add(self.offset)) };
        self.offset += 1;
        self.reset_if_empty();
        Ok(value)
    }

    pub fn insert(&mut self, pos: usize, value: T) -> Result<()> {
        let size = self.size();
        if pos > size {
            return Err(Self::out_of_range(pos, size));
        }
        self.make_room_for(1);
        // SAFETY: make_room_for leaves at least one free slot past length.
        // The tail [pos, size) is moved one slot right, then the gap at pos
        // is written.
        unsafe {
            let at = self.data.add(self.offset + pos);
            ptr::copy(at, at.add(1), size - pos);
            ptr::write(at, value);
        }
        self.length += 1;
        Ok(())
    }

    // `iter` is only consumed once `pos` is known to be valid.
    pub fn insert_iter<I>(&mut self, pos: usize, iter: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        let size = self.size();
        if pos > size {
            return Err(Self::out_of_range(pos, size));
        }
        let mut incoming: DynamicArray<T> = iter.into_iter().collect();
        let count = incoming.size();
        if count == 0 {
            return Ok(());
        }
        self.make_room_for(count);
        // SAFETY: make_room_for leaves `count` free slots past length. The
        // tail is moved right by `count`, then the incoming elements are
        // moved into the gap. `incoming` is emptied without dropping so each
        // element keeps a single owner.
        unsafe {
            let at = self.data.add(self.offset + pos);
            ptr::copy(at, at.add(count), size - pos);
            ptr::copy_nonoverlapping(incoming.data.add(incoming.offset), at, count);
            incoming.offset = 0;
            incoming.length = 0;
        }
        self.length += count;
        Ok(())
    }

    pub fn insert_slice(&mut self, pos: usize, values: &[T]) -> Result<()>
    where
        T: Clone,
    {
        self.insert_iter(pos, values.iter().cloned())
    }

    pub fn remove(&mut self, pos: usize) -> Result<T> {
        let size = self.size();
        if pos >= size {
            return Err(Self::out_of_range(pos, size));
        }
        // SAFETY: pos < size, so the slot is initialised. After the read it
        // is treated as a hole and either the head or the tail is shifted
        // over it.
        let value = unsafe {
            let base = self.data.add(self.offset);
            let value = ptr::read(base.add(pos));
            // close the gap from the shorter side
            if pos < size - pos - 1 {
                ptr::copy(base, base.add(1), pos);
                self.offset += 1;
            } else {
                ptr::copy(base.add(pos + 1), base.add(pos), size - pos - 1);
                self.length -= 1;
            }
            value
        };
        self.reset_if_empty();
        Ok(value)
    }

    pub fn truncate(&mut self, len: usize) {
        let size = self.size();
        if len >= size {
            return;
        }
        // SAFETY: [offset + len, length) is initialised. The bookkeeping is
        // updated before dropping so a panicking destructor cannot cause a
        // double drop.
        unsafe {
            let tail = ptr::slice_from_raw_parts_mut(self.data.add(self.offset + len), size - len);
            self.length = self.offset + len;
            self.reset_if_empty();
            ptr::drop_in_place(tail);
        }
    }

    pub fn clear(&mut self) {
        self.truncate(0);
    }

    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data().iter()
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.data_mut().iter_mut()
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.data().contains(value)
    }

    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|e| e == value)
    }

    fn checked_index(&self, index: isize) -> Result<usize> {
        let size = self.size();
        match usize::try_from(index) {
            Ok(i) if i < size => Ok(i),
            _ => Err(ArrayError::IndexOutOfRange { index, size }),
        }
    }

    fn out_of_range(pos: usize, size: usize) -> ArrayError {
        ArrayError::IndexOutOfRange {
            index: isize::try_from(pos).unwrap_or(isize::MAX),
            size,
        }
    }

    fn grown_capacity(&self) -> usize {
        match self.capacity.checked_mul(GROWTH_FACTOR) {
            Some(cap) => cap.max(MIN_CAPACITY),
            None => capacity_overflow(),
        }
    }

    // Append growth: compacts in place when more than half the buffer's
    // front is vacant and the elements fit, otherwise grows to at least
    // GROWTH_FACTOR * capacity.
    pub(crate) fn make_room_at_end(&mut self, additional: usize) {
        if self.capacity - self.length >= additional {
            return;
        }
        let required = match self.size().checked_add(additional) {
            Some(n) => n,
            None => capacity_overflow(),
        };
        if self.offset > self.capacity / 2 && required <= self.capacity {
            self.relocate(self.capacity, 0);
        } else {
            self.relocate(required.max(self.grown_capacity()), 0);
        }
    }

    // Insert growth: compacts when the elements fit, else doubles the
    // required size.
    fn make_room_for(&mut self, additional: usize) {
        let size = self.size();
        let required = match size.checked_add(additional) {
            Some(n) => n,
            None => capacity_overflow(),
        };
        if self.offset + required <= self.capacity {
            return;
        }
        if required <= self.capacity {
            self.relocate(self.capacity, 0);
        } else {
            match required.checked_mul(GROWTH_FACTOR) {
                Some(cap) => self.relocate(cap, 0),
                None => capacity_overflow(),
            }
        }
    }

    // First live element lands on physical slot `lead`.
    fn relocate(&mut self, new_capacity: usize, lead: usize) {
        let size = self.size();
        debug_assert!(lead + size <= new_capacity);

        if new_capacity == self.capacity {
            debug!(
                "compacting {} elements within capacity {}: slot {} -> {}",
                size, self.capacity, self.offset, lead
            );
            if size > 0 {
                // SAFETY: both ranges lie inside the same allocation; copy
                // handles the overlap.
                unsafe {
                    ptr::copy(self.data.add(self.offset), self.data.add(lead), size);
                }
            }
        } else {
            trace!(
                "reallocating buffer: capacity {} -> {} ({} live elements)",
                self.capacity,
                new_capacity,
                size
            );
            let new_data = Self::allocate(new_capacity);
            // SAFETY: the old live range and the destination range are in
            // distinct allocations and both hold `size` slots. Elements are
            // moved, so the old buffer is freed without dropping them.
            unsafe {
                if size > 0 {
                    ptr::copy_nonoverlapping(self.data.add(self.offset), new_data.add(lead), size);
                }
                Self::deallocate(self.data, self.capacity);
            }
            self.data = new_data;
            self.capacity = new_capacity;
        }

        self.offset = lead;
        self.length = lead + size;
    }

    fn reset_if_empty(&mut self) {
        if self.offset == self.length {
            self.offset = 0;
            self.length = 0;
        }
    }

    fn layout(capacity: usize) -> Layout {
        match Layout::array::<T>(capacity) {
            Ok(layout) => layout,
            Err(_) => capacity_overflow(),
        }
    }

    fn allocate(capacity: usize) -> *mut T {
        if capacity == 0 {
            return ptr::null_mut();
        }
        let layout = Self::layout(capacity);
        if layout.size() == 0 {
            return ptr::NonNull::dangling().as_ptr();
        }
        // SAFETY: layout has a non-zero size.
        let data = unsafe { std::alloc::alloc(layout) as *mut T };
        if data.is_null() {
            std::alloc::handle_alloc_error(layout);
        }
        data
    }

    /// # Safety
    ///
    /// `data` must come from `allocate(capacity)` and hold no live elements.
    unsafe fn deallocate(data: *mut T, capacity: usize) {
        if data.is_null() || capacity == 0 {
            return;
        }
        let layout = Self::layout(capacity);
        if layout.size() != 0 {
            std::alloc::dealloc(data as *mut u8, layout);
        }
    }
}

#[cold]
pub(crate) fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut new_arr = Self::with_capacity(self.capacity);
        for value in self.iter() {
            new_arr.push(value.clone());
        }
        new_arr
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        self.clear();
        // SAFETY: clear() dropped every live element.
        unsafe { Self::deallocate(self.data, self.capacity) };
    }
}

impl<T> core::ops::Index<usize> for DynamicArray<T> {
    type Output = T;
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(value) => value,
            None => panic!("index {} out of range for array of size {}", index, self.size()),
        }
    }
}

impl<T> core::ops::IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let size = self.size();
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!("index {} out of range for array of size {}", index, size),
        }
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.data()
    }
}

impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.data_mut()
    }
}

impl<T> core::borrow::Borrow<[T]> for DynamicArray<T> {
    fn borrow(&self) -> &[T] {
        self.data()
    }
}

// SAFETY: DynamicArray<T> owns its buffer exclusively; sending it sends the
// elements, which is fine when T: Send.
unsafe impl<T: Send> Send for DynamicArray<T> {}

// SAFETY: &DynamicArray<T> only hands out &T; mutation requires &mut.
unsafe impl<T: Sync> Sync for DynamicArray<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn init_logging() {
        let _ = simple_logger::SimpleLogger::new().without_timestamps().init();
    }

    fn from_range(n: i32) -> DynamicArray<i32> {
        let mut arr = DynamicArray::new();
        for i in 0..n {
            arr.push(i);
        }
        arr
    }

    struct DropCounter {
        drops: Rc<Cell<usize>>,
    }

    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    #[test]
    fn default_construction() {
        let arr: DynamicArray<i32> = DynamicArray::new();
        assert_eq!(arr.size(), 0);
        assert_eq!(arr.capacity(), 0);
        assert!(arr.is_empty());
        assert!(arr.is_full());
    }

    #[test]
    fn sized_construction() {
        let arr: DynamicArray<i32> = DynamicArray::with_len(10);
        assert_eq!(arr.size(), 10);
        assert_eq!(arr.capacity(), 10);
        assert!(arr.iter().all(|&v| v == 0));
    }

    #[test]
    fn filled_construction() {
        let arr = DynamicArray::filled(2, 100);
        assert_eq!(arr.size(), 2);
        assert_eq!(arr.capacity(), 2);
        assert_eq!(arr[0], 100);
        assert_eq!(arr[1], 100);
    }

    #[test]
    fn with_capacity_is_empty() {
        let arr: DynamicArray<String> = DynamicArray::with_capacity(8);
        assert_eq!(arr.size(), 0);
        assert_eq!(arr.capacity(), 8);
    }

    #[test]
    fn push_triggers_doubling() {
        init_logging();
        let mut arr: DynamicArray<i32> = DynamicArray::new();
        arr.push(1);
        assert_eq!(arr.capacity(), 1);
        arr.push(2);
        assert_eq!(arr.capacity(), 2);
        arr.push(3);
        assert_eq!(arr.capacity(), 4);
        arr.push(4);
        arr.push(5);
        assert_eq!(arr.capacity(), 8);
        assert_eq!(arr.size(), 5);
        assert_eq!(arr.data(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn push_then_pop_is_lifo() {
        let mut arr = from_range(3);
        assert_eq!(arr.pop(), Ok(2));
        assert_eq!(arr.pop(), Ok(1));
        assert_eq!(arr.pop(), Ok(0));
        assert_eq!(arr.size(), 0);
        assert_eq!(
            arr.pop(),
            Err(ArrayError::EmptyContainer { operation: "pop" })
        );
    }

    #[test]
    fn unshift_then_shift_is_lifo() {
        let mut arr: DynamicArray<i32> = DynamicArray::new();
        arr.unshift(1);
        arr.unshift(2);
        arr.unshift(3);
        assert_eq!(arr.size(), 3);

        assert_eq!(arr.shift(), Ok(3));
        assert_eq!(arr.size(), 2);
        assert_eq!(arr[0], 2);
        assert_eq!(arr[1], 1);

        assert_eq!(arr.shift(), Ok(2));
        assert_eq!(arr[0], 1);
        assert_eq!(arr.shift(), Ok(1));
        assert!(arr.is_empty());
        assert_eq!(
            arr.shift(),
            Err(ArrayError::EmptyContainer { operation: "shift" })
        );
    }

    #[test]
    fn unshift_doubles_only_when_full() {
        let mut arr: DynamicArray<i32> = DynamicArray::new();
        arr.unshift(1);
        assert_eq!(arr.capacity(), 1);
        arr.unshift(2);
        assert_eq!(arr.capacity(), 2);
        arr.unshift(3);
        assert_eq!(arr.capacity(), 4);
        // one vacant leading slot remains, so this does not reallocate
        arr.unshift(4);
        assert_eq!(arr.capacity(), 4);
        assert_eq!(arr.data(), &[4, 3, 2, 1]);

        let mut arr: DynamicArray<i32> = DynamicArray::with_capacity(8);
        arr.push(1);
        arr.push(2);
        arr.push(3);
        arr.unshift(0);
        assert_eq!(arr.capacity(), 4);
        assert_eq!(arr.data(), &[0, 1, 2, 3]);
    }

    #[test]
    fn unshift_in_place_when_capacity_unchanged() {
        let mut arr: DynamicArray<i32> = DynamicArray::with_capacity(4);
        arr.push(1);
        arr.push(2);
        arr.push(3);
        arr.unshift(0);
        assert_eq!(arr.capacity(), 4);
        assert_eq!(arr.offset, 0);
        assert_eq!(arr.data(), &[0, 1, 2, 3]);
    }

    #[test]
    fn unshift_reuses_shifted_slots() {
        let mut arr = from_range(4);
        arr.shift().unwrap();
        let cap = arr.capacity();
        arr.unshift(-1);
        assert_eq!(arr.capacity(), cap);
        assert_eq!(arr.data(), &[-1, 1, 2, 3]);
    }

    #[test]
    fn shift_advances_offset_without_reallocating() {
        let mut arr = from_range(8);
        let cap = arr.capacity();
        arr.shift().unwrap();
        arr.shift().unwrap();
        assert_eq!(arr.offset, 2);
        assert_eq!(arr.capacity(), cap);
        assert_eq!(arr.front(), Some(&2));
        assert_eq!(arr[0], 2);
    }

    #[test]
    fn emptying_resets_offset() {
        let mut arr = from_range(2);
        arr.shift().unwrap();
        arr.shift().unwrap();
        assert_eq!(arr.offset, 0);
        assert_eq!(arr.length, 0);
    }

    #[test]
    fn push_compacts_when_front_mostly_vacant() {
        init_logging();
        let mut arr = from_range(8);
        for _ in 0..6 {
            arr.shift().unwrap();
        }
        arr.push(8);
        assert_eq!(arr.capacity(), 8);
        assert_eq!(arr.offset, 0);
        assert_eq!(arr.data(), &[6, 7, 8]);
    }

    #[test]
    fn push_grows_when_front_mostly_occupied() {
        let mut arr = from_range(8);
        arr.shift().unwrap();
        arr.push(8);
        assert_eq!(arr.capacity(), 16);
        assert_eq!(arr.offset, 0);
        assert_eq!(arr.data(), &[1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn batch_append_doubles_like_push() {
        let mut arr = DynamicArray::from([1, 2]);
        arr.make_room_at_end(1);
        assert_eq!(arr.capacity(), 4);
        arr.make_room_at_end(2);
        assert_eq!(arr.capacity(), 4);
        arr.make_room_at_end(10);
        assert_eq!(arr.capacity(), 12);
        assert_eq!(arr.data(), &[1, 2]);
    }

    #[test]
    fn batch_append_compacts_when_front_mostly_vacant() {
        let mut arr = from_range(8);
        for _ in 0..5 {
            arr.shift().unwrap();
        }
        arr.make_room_at_end(4);
        assert_eq!(arr.capacity(), 8);
        assert_eq!(arr.offset, 0);
        assert_eq!(arr.data(), &[5, 6, 7]);
    }

    proptest! {
        #[test]
        fn bookkeeping_stays_ordered(ops in prop::collection::vec((0u8..5, 0usize..6), 0..120)) {
            let mut arr: DynamicArray<usize> = DynamicArray::new();
            for (kind, n) in ops {
                match kind {
                    0 => arr.push(n),
                    1 => arr.unshift(n),
                    2 => { let _ = arr.shift(); }
                    3 => { let _ = arr.pop(); }
                    _ => arr.extend(0..n),
                }
                prop_assert!(arr.offset <= arr.length);
                prop_assert!(arr.length <= arr.capacity);
                prop_assert_eq!(arr.size(), arr.length - arr.offset);
            }
        }
    }

    #[test]
    fn at_valid_index() {
        let mut arr = DynamicArray::from([100, 200, 300]);
        assert_eq!(arr.at(0), Ok(&100));
        assert_eq!(arr.at(2), Ok(&300));
        *arr.at_mut(1).unwrap() = 999;
        assert_eq!(arr.at(1), Ok(&999));
        arr.set(0, 7).unwrap();
        assert_eq!(arr[0], 7);
    }

    #[test]
    fn at_out_of_range() {
        let mut arr = DynamicArray::from([1, 2, 3, 4, 5]);
        assert_eq!(
            arr.at(5),
            Err(ArrayError::IndexOutOfRange { index: 5, size: 5 })
        );
        assert_eq!(
            arr.at(-1),
            Err(ArrayError::IndexOutOfRange { index: -1, size: 5 })
        );
        assert!(arr.set(9, 0).is_err());
        let empty: DynamicArray<i32> = DynamicArray::new();
        assert!(empty.at(0).is_err());
    }

    #[test]
    fn at_respects_offset() {
        let mut arr = from_range(5);
        arr.shift().unwrap();
        assert_eq!(arr.at(0), Ok(&1));
        assert!(arr.at(4).is_err());
    }

    #[test]
    fn index_operator() {
        let mut arr = DynamicArray::from([10, 20]);
        assert_eq!(arr[0], 10);
        assert_eq!(arr[1], 20);
        arr[0] = 99;
        assert_eq!(arr[0], 99);
        assert_eq!(unsafe { *arr.get_unchecked(1) }, 20);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn index_operator_panics_past_end() {
        let arr = DynamicArray::from([1]);
        let _ = arr[1];
    }

    #[test]
    fn front_and_back() {
        let arr = DynamicArray::from([1, 2, 3]);
        assert_eq!(arr.front(), Some(&1));
        assert_eq!(arr.back(), Some(&3));
        let empty: DynamicArray<i32> = DynamicArray::new();
        assert!(empty.front().is_none());
        assert!(empty.back().is_none());
    }

    #[test]
    fn insert_middle() {
        let mut arr = DynamicArray::from([1, 2, 4]);
        arr.insert(2, 3).unwrap();
        assert_eq!(arr.size(), 4);
        assert_eq!(arr.data(), &[1, 2, 3, 4]);
        arr.insert(0, 0).unwrap();
        arr.insert(5, 5).unwrap();
        assert_eq!(arr.data(), &[0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn insert_grows_to_twice_required() {
        let mut arr = DynamicArray::from([1, 2, 3]);
        assert_eq!(arr.capacity(), 3);
        arr.insert(1, 9).unwrap();
        assert_eq!(arr.capacity(), 8);
    }

    #[test]
    fn insert_out_of_range() {
        let mut arr = DynamicArray::from([1, 2]);
        assert_eq!(
            arr.insert(3, 0),
            Err(ArrayError::IndexOutOfRange { index: 3, size: 2 })
        );
        assert_eq!(arr.data(), &[1, 2]);
    }

    #[test]
    fn insert_iter_preserves_order() {
        let mut arr = DynamicArray::from([1, 5]);
        arr.insert_iter(1, vec![2, 3, 4]).unwrap();
        assert_eq!(arr.data(), &[1, 2, 3, 4, 5]);
        arr.insert_slice(0, &[-1, 0]).unwrap();
        assert_eq!(arr.data(), &[-1, 0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn insert_iter_out_of_range_leaves_array_unchanged() {
        let mut arr = DynamicArray::from([1, 2]);
        assert!(arr.insert_iter(5, vec![3, 4]).is_err());
        assert_eq!(arr.data(), &[1, 2]);
        assert_eq!(arr.capacity(), 2);
    }

    #[test]
    fn insert_compacts_into_vacant_front() {
        let mut arr = from_range(4);
        arr.shift().unwrap();
        arr.shift().unwrap();
        arr.insert(1, 10).unwrap();
        assert_eq!(arr.capacity(), 4);
        assert_eq!(arr.data(), &[2, 10, 3]);
    }

    #[test]
    fn remove_from_either_half() {
        let mut arr = from_range(6);
        assert_eq!(arr.remove(1), Ok(1));
        assert_eq!(arr.data(), &[0, 2, 3, 4, 5]);
        assert_eq!(arr.remove(3), Ok(4));
        assert_eq!(arr.data(), &[0, 2, 3, 5]);
        assert!(arr.remove(4).is_err());
    }

    #[test]
    fn reserve_increases_capacity() {
        let mut arr: DynamicArray<i32> = DynamicArray::new();
        arr.reserve(10);
        assert_eq!(arr.capacity(), 10);
        assert_eq!(arr.size(), 0);
    }

    #[test]
    fn reserve_preserves_elements_and_resets_offset() {
        let mut arr = from_range(4);
        arr.shift().unwrap();
        arr.reserve(100);
        assert_eq!(arr.capacity(), 100);
        assert_eq!(arr.offset, 0);
        assert_eq!(arr.data(), &[1, 2, 3]);
    }

    #[test]
    fn reserve_never_drops_elements() {
        let mut arr = from_range(5);
        arr.reserve(2);
        assert_eq!(arr.capacity(), 5);
        assert_eq!(arr.size(), 5);
        arr.shrink_to_fit();
        assert_eq!(arr.capacity(), 5);
    }

    #[test]
    fn shrink_to_fit_on_empty_frees_buffer() {
        let mut arr = from_range(5);
        arr.clear();
        arr.shrink_to_fit();
        assert_eq!(arr.capacity(), 0);
        assert!(arr.data.is_null());
    }

    #[test]
    fn clear_resets_size_not_capacity() {
        let mut arr = from_range(3);
        let cap = arr.capacity();
        arr.clear();
        assert_eq!(arr.size(), 0);
        assert!(arr.is_empty());
        assert_eq!(arr.capacity(), cap);
    }

    #[test]
    fn truncate_keeps_prefix() {
        let mut arr = from_range(5);
        arr.truncate(2);
        assert_eq!(arr.data(), &[0, 1]);
        arr.truncate(10);
        assert_eq!(arr.size(), 2);
    }

    #[test]
    fn clone_is_deep() {
        let mut arr = from_range(3);
        let clone = arr.clone();
        assert_eq!(clone.size(), 3);
        assert_eq!(clone.capacity(), arr.capacity());
        arr[0] = 999;
        assert_eq!(clone[0], 0);
    }

    #[test]
    fn take_leaves_source_empty() {
        let mut arr = DynamicArray::filled(10, 5);
        let moved = arr.take();
        assert_eq!(moved.size(), 10);
        assert_eq!(moved.capacity(), 10);
        assert!(arr.is_empty());
        assert_eq!(arr.capacity(), 0);
    }

    #[test]
    fn swap_exchanges_contents() {
        let mut a = DynamicArray::from([1, 2, 3, 4, 5]);
        let mut b = DynamicArray::from([6, 7, 8, 9, 10]);
        a.swap(&mut b);
        assert_eq!(a[0], 6);
        assert_eq!(b[0], 1);
    }

    #[test]
    fn contains_and_index_of() {
        let arr = DynamicArray::from(["a", "b", "c"]);
        assert!(arr.contains(&"b"));
        assert_eq!(arr.index_of(&"c"), Some(2));
        assert_eq!(arr.index_of(&"z"), None);
    }

    #[test]
    fn non_trivial_type() {
        let mut arr: DynamicArray<String> = DynamicArray::new();
        arr.push("hello".to_string());
        arr.push("world".to_string());
        arr.unshift("say".to_string());
        assert_eq!(arr.size(), 3);
        assert_eq!(arr[0], "say");
        assert_eq!(arr.shift().unwrap(), "say");
        assert_eq!(arr.pop().unwrap(), "world");
        assert_eq!(arr.front().unwrap(), "hello");
    }

    #[test]
    fn drops_every_live_element_once() {
        let drops = Rc::new(Cell::new(0));
        {
            let mut arr = DynamicArray::new();
            for _ in 0..10 {
                arr.push(DropCounter { drops: Rc::clone(&drops) });
            }
            arr.unshift(DropCounter { drops: Rc::clone(&drops) });
            drop(arr.shift().unwrap());
            drop(arr.pop().unwrap());
            assert_eq!(drops.get(), 2);
            arr.remove(3).unwrap();
            assert_eq!(drops.get(), 3);
            arr.truncate(5);
            assert_eq!(drops.get(), 6);
        }
        assert_eq!(drops.get(), 11);
    }

    #[test]
    fn zero_sized_elements() {
        let mut arr: DynamicArray<()> = DynamicArray::new();
        for _ in 0..100 {
            arr.push(());
        }
        arr.unshift(());
        assert_eq!(arr.size(), 101);
        assert_eq!(arr.shift(), Ok(()));
        assert_eq!(arr.pop(), Ok(()));
        assert_eq!(arr.size(), 99);
    }

    #[test]
    fn debug_formats_like_a_slice() {
        let arr = DynamicArray::from([1, 2, 3]);
        assert_eq!(format!("{:?}", arr), "[1, 2, 3]");
    }

    #[test]
    fn empty_data_slice() {
        let arr: DynamicArray<i32> = DynamicArray::new();
        assert!(arr.data().is_empty());
    }
}
