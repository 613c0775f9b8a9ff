use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use core::ops::{Add, AddAssign, Mul, MulAssign};

use crate::dynamic_array::capacity_overflow;
use crate::DynamicArray;

impl<T: Clone> Add<&DynamicArray<T>> for &DynamicArray<T> {
    type Output = DynamicArray<T>;

    fn add(self, rhs: &DynamicArray<T>) -> DynamicArray<T> {
        let mut out = DynamicArray::with_capacity(self.size() + rhs.size());
        out.extend(self.iter().cloned());
        out.extend(rhs.iter().cloned());
        out
    }
}

impl<T: Clone> Add<&DynamicArray<T>> for DynamicArray<T> {
    type Output = DynamicArray<T>;

    fn add(mut self, rhs: &DynamicArray<T>) -> DynamicArray<T> {
        self += rhs;
        self
    }
}

impl<T> Add for DynamicArray<T> {
    type Output = DynamicArray<T>;

    fn add(mut self, rhs: DynamicArray<T>) -> DynamicArray<T> {
        self += rhs;
        self
    }
}

impl<T: Clone> AddAssign<&DynamicArray<T>> for DynamicArray<T> {
    fn add_assign(&mut self, rhs: &DynamicArray<T>) {
        self.extend(rhs.iter().cloned());
    }
}

impl<T> AddAssign for DynamicArray<T> {
    fn add_assign(&mut self, rhs: DynamicArray<T>) {
        self.extend(rhs);
    }
}

impl<T: Clone> Mul<usize> for &DynamicArray<T> {
    type Output = DynamicArray<T>;

    fn mul(self, times: usize) -> DynamicArray<T> {
        let total = match self.size().checked_mul(times) {
            Some(total) => total,
            None => capacity_overflow(),
        };
        let mut out = DynamicArray::with_capacity(total);
        for _ in 0..times {
            out.extend(self.iter().cloned());
        }
        out
    }
}

impl<T: Clone> Mul<usize> for DynamicArray<T> {
    type Output = DynamicArray<T>;

    fn mul(self, times: usize) -> DynamicArray<T> {
        &self * times
    }
}

impl<T: Clone> MulAssign<usize> for DynamicArray<T> {
    fn mul_assign(&mut self, times: usize) {
        if times == 0 {
            self.clear();
            return;
        }
        let size = self.size();
        match size.checked_mul(times) {
            Some(total) => self.make_room_at_end(total - size),
            None => capacity_overflow(),
        }
        for _ in 1..times {
            for i in 0..size {
                let value = self[i].clone();
                self.push(value);
            }
        }
    }
}

impl<T, U> PartialEq<DynamicArray<U>> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &DynamicArray<U>) -> bool {
        self.data() == other.data()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T, U> PartialEq<[U]> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.data() == other
    }
}

impl<T, U> PartialEq<&[U]> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.data() == *other
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.data() == &other[..]
    }
}

impl<T, U> PartialEq<Vec<U>> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vec<U>) -> bool {
        self.data() == other.as_slice()
    }
}

impl<T: PartialOrd> PartialOrd for DynamicArray<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.data().partial_cmp(other.data())
    }
}

impl<T: Ord> Ord for DynamicArray<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.data().cmp(other.data())
    }
}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data().hash(state);
    }
}
