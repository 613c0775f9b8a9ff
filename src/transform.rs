use crate::error::{ArrayError, Result};
use crate::DynamicArray;

impl<T> DynamicArray<T> {
    pub fn for_each<F: FnMut(&T)>(&self, f: F) {
        self.iter().for_each(f);
    }

    pub fn for_each_indexed<F: FnMut(&T, usize)>(&self, mut f: F) {
        for (i, value) in self.iter().enumerate() {
            f(value, i);
        }
    }

    pub fn map<U, F: FnMut(&T) -> U>(&self, f: F) -> DynamicArray<U> {
        self.iter().map(f).collect()
    }

    pub fn map_indexed<U, F: FnMut(&T, usize) -> U>(&self, mut f: F) -> DynamicArray<U> {
        self.iter().enumerate().map(|(i, value)| f(value, i)).collect()
    }

    pub fn fold<U, F: FnMut(U, &T) -> U>(&self, initial: U, f: F) -> U {
        self.iter().fold(initial, f)
    }

    pub fn fold_indexed<U, F: FnMut(U, &T, usize) -> U>(&self, initial: U, mut f: F) -> U {
        self.iter()
            .enumerate()
            .fold(initial, |acc, (i, value)| f(acc, value, i))
    }

    fn resolve_range(&self, begin: isize, end: isize) -> (usize, usize) {
        let size = self.size();
        let begin = normalize_index(begin, size);
        let end = normalize_index(end, size).max(begin);
        (begin, end)
    }
}

fn normalize_index(index: isize, size: usize) -> usize {
    if index < 0 {
        size.saturating_sub(index.unsigned_abs())
    } else {
        index.unsigned_abs().min(size)
    }
}

impl<T: Clone> DynamicArray<T> {
    pub fn filter<P: FnMut(&T) -> bool>(&self, mut pred: P) -> Self {
        self.iter().filter(|&value| pred(value)).cloned().collect()
    }

    pub fn filter_indexed<P: FnMut(&T, usize) -> bool>(&self, mut pred: P) -> Self {
        self.iter()
            .enumerate()
            .filter(|&(i, value)| pred(value, i))
            .map(|(_, value)| value.clone())
            .collect()
    }

    pub fn reduce<F: FnMut(T, &T) -> T>(&self, f: F) -> Result<T> {
        let (first, rest) = self.split_first_or_empty("reduce")?;
        Ok(rest.iter().fold(first.clone(), f))
    }

    // The index is that of the element folded in, starting at 1.
    pub fn reduce_indexed<F: FnMut(T, &T, usize) -> T>(&self, mut f: F) -> Result<T> {
        let (first, rest) = self.split_first_or_empty("reduce")?;
        Ok(rest
            .iter()
            .enumerate()
            .fold(first.clone(), |acc, (i, value)| f(acc, value, i + 1)))
    }

    pub fn reverse(&self) -> Self {
        self.iter().rev().cloned().collect()
    }

    /// Copies `[begin, end)`. Negative bounds count from the end; both are
    /// clamped, so this never fails.
    pub fn slice(&self, begin: isize, end: isize) -> Self {
        let (begin, end) = self.resolve_range(begin, end);
        DynamicArray::from(&self.data()[begin..end])
    }

    pub fn slice_from(&self, begin: isize) -> Self {
        let begin = normalize_index(begin, self.size());
        DynamicArray::from(&self.data()[begin..])
    }

    fn split_first_or_empty(&self, operation: &'static str) -> Result<(&T, &[T])> {
        self.data()
            .split_first()
            .ok_or(ArrayError::EmptyContainer { operation })
    }
}
