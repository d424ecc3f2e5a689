//! Growable array list.
//!
//! An `ArrayList<T>` keeps its elements in one exclusively owned buffer of
//! `capacity` slots. Slots `[0, len)` are occupied; every slot in
//! `[len, capacity)` is empty, including the one a removal just vacated.
//!
//! Capacity starts at [`INITIAL_CAPACITY`], doubles when an insert finds the
//! buffer full, and halves when a removal finds it at most a quarter full.
//! Shrinking stops once `len` is at or below the initial capacity, so the
//! buffer never drops under 16 slots and always holds a power-of-two
//! multiple of 16.

use std::fmt;

use strata_common::{CollectionError, Operation};

/// Slot count of a freshly created list. Also the shrink floor.
pub const INITIAL_CAPACITY: usize = 16;

/// Capacity multiplier applied when an insert finds the buffer full.
const GROW_FACTOR: usize = 2;

/// Capacity divisor applied when a removal finds the buffer too empty.
const SHRINK_DIVISOR: usize = 2;

/// A contiguous, index-addressed list with amortized O(1) append.
pub struct ArrayList<T> {
    slots: Box<[Option<T>]>,
    len: usize,
}

// ── Internal helpers ──────────────────────────────────────────────────

/// Allocate `capacity` empty slots, reporting allocator refusal as an error.
fn alloc_slots<T>(capacity: usize) -> Result<Box<[Option<T>]>, CollectionError> {
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(capacity)
        .map_err(|_| CollectionError::AllocationFailed {
            requested: capacity,
        })?;
    slots.resize_with(capacity, || None);
    Ok(slots.into_boxed_slice())
}

impl<T> ArrayList<T> {
    /// Create an empty list with [`INITIAL_CAPACITY`] slots.
    pub fn new() -> Self {
        Self {
            slots: (0..INITIAL_CAPACITY).map(|_| None).collect(),
            len: 0,
        }
    }

    /// Number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn is_full(&self) -> bool {
        self.len >= self.capacity()
    }

    fn is_too_empty(&self) -> bool {
        self.len <= self.capacity() / 4 && self.len > INITIAL_CAPACITY
    }

    fn grow(&mut self) -> Result<(), CollectionError> {
        let capacity = self
            .capacity()
            .checked_mul(GROW_FACTOR)
            .ok_or(CollectionError::AllocationFailed {
                requested: usize::MAX,
            })?;
        self.resize(capacity)
    }

    fn shrink(&mut self) -> Result<(), CollectionError> {
        self.resize(self.capacity() / SHRINK_DIVISOR)
    }

    /// Move the occupied slots into a fresh buffer of `capacity` slots.
    fn resize(&mut self, capacity: usize) -> Result<(), CollectionError> {
        debug_assert!(capacity >= self.len);
        let mut slots = alloc_slots(capacity)?;
        for (dst, src) in slots.iter_mut().zip(&mut self.slots[..self.len]) {
            *dst = src.take();
        }
        log::debug!(
            "list resized: capacity {} -> {} (len {})",
            self.capacity(),
            capacity,
            self.len
        );
        self.slots = slots;
        Ok(())
    }

    /// Overwrite the element at `index`.
    ///
    /// Fails unless `index < len`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), CollectionError> {
        if index >= self.len {
            return Err(CollectionError::out_of_range(Operation::Set, index, self.len));
        }
        self.slots[index] = Some(value);
        Ok(())
    }

    /// Append `value` at the end. Same as `insert(value, len)`.
    pub fn append(&mut self, value: T) -> Result<(), CollectionError> {
        self.insert(value, self.len)
    }

    /// Insert `value` at `index`, shifting later elements one slot right.
    ///
    /// `index == len` appends; anything past that fails. The buffer grows
    /// before the index is checked, so a rejected insert into a full list
    /// still leaves the larger buffer behind.
    pub fn insert(&mut self, value: T, index: usize) -> Result<(), CollectionError> {
        if self.is_full() {
            self.grow()?;
        }
        if index > self.len {
            return Err(CollectionError::out_of_range(
                Operation::Insert,
                index,
                self.len,
            ));
        }
        // Slot `len` is empty; rotating moves it down to `index`.
        self.slots[index..=self.len].rotate_right(1);
        self.slots[index] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the element at `index`, shifting later elements
    /// one slot left.
    ///
    /// The buffer shrinks before the index is checked. The slot vacated at
    /// the end of the list is left empty.
    pub fn remove(&mut self, index: usize) -> Result<T, CollectionError> {
        if self.is_too_empty() {
            self.shrink()?;
        }
        let len = self.len;
        let removed = self.slots[..len]
            .get_mut(index)
            .and_then(Option::take)
            .ok_or(CollectionError::out_of_range(Operation::Remove, index, len))?;
        // The emptied slot travels to `len - 1`.
        self.slots[index..len].rotate_left(1);
        self.len -= 1;
        Ok(removed)
    }

    /// Release the list and everything it holds.
    ///
    /// Dropping the list does the same; this exists for callers that want
    /// the end of the lifetime spelled out.
    pub fn delete(self) {
        drop(self);
    }
}

impl<T: Clone> ArrayList<T> {
    /// Return a copy of the element at `index`.
    ///
    /// Fails unless `index < len`. No reference into the buffer escapes, so
    /// later growth cannot leave a caller holding a stale element.
    pub fn get(&self, index: usize) -> Result<T, CollectionError> {
        self.slots[..self.len]
            .get(index)
            .and_then(Option::as_ref)
            .cloned()
            .ok_or(CollectionError::out_of_range(Operation::Get, index, self.len))
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.slots[..self.len].iter().flatten())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn list_of(values: &[i32]) -> ArrayList<i32> {
        let mut list = ArrayList::new();
        for &v in values {
            list.append(v).unwrap();
        }
        list
    }

    fn contents(list: &ArrayList<i32>) -> Vec<i32> {
        (0..list.len()).map(|i| list.get(i).unwrap()).collect()
    }

    fn assert_tail_cleared<T>(list: &ArrayList<T>) {
        assert!(
            list.slots[list.len..].iter().all(Option::is_none),
            "slots past len must be empty"
        );
    }

    #[test]
    fn test_list_new_is_empty() {
        let list: ArrayList<i32> = ArrayList::new();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert_eq!(list.capacity(), INITIAL_CAPACITY);
    }

    #[test]
    fn test_list_append_get() {
        let list = list_of(&[10, 20, 30]);
        assert_eq!(list.get(0), Ok(10));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_list_remove_last() {
        let mut list = list_of(&[10, 20, 30]);
        assert_eq!(list.remove(2), Ok(30));
        assert_eq!(contents(&list), vec![10, 20]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_list_remove_front_shifts_left() {
        let mut list = list_of(&[10, 20, 30]);
        assert_eq!(list.remove(0), Ok(10));
        assert_eq!(contents(&list), vec![20, 30]);
        assert_tail_cleared(&list);
    }

    #[test]
    fn test_list_remove_clears_vacated_slot() {
        let mut list = list_of(&[1, 2, 3, 4]);
        list.remove(1).unwrap();
        assert!(list.slots[3].is_none());
        assert_tail_cleared(&list);
    }

    #[test]
    fn test_list_set_then_get() {
        let mut list = list_of(&[1, 2, 3]);
        list.set(1, -1000).unwrap();
        assert_eq!(list.get(1), Ok(-1000));
        assert_eq!(contents(&list), vec![1, -1000, 3]);
    }

    #[test]
    fn test_list_set_out_of_range() {
        let mut list = list_of(&[1, 2, 3]);
        assert_eq!(
            list.set(3, 9),
            Err(CollectionError::out_of_range(Operation::Set, 3, 3))
        );
    }

    #[test]
    fn test_list_get_on_empty() {
        let list: ArrayList<i32> = ArrayList::new();
        assert_eq!(
            list.get(0),
            Err(CollectionError::out_of_range(Operation::Get, 0, 0))
        );
    }

    #[test]
    fn test_list_remove_out_of_range() {
        let mut list = list_of(&[1]);
        assert_eq!(
            list.remove(1),
            Err(CollectionError::out_of_range(Operation::Remove, 1, 1))
        );
        assert_eq!(contents(&list), vec![1]);
    }

    #[test]
    fn test_list_insert_boundary() {
        let mut list = list_of(&[1, 2]);
        assert_eq!(list.insert(3, 2), Ok(()));
        assert_eq!(
            list.insert(5, 4),
            Err(CollectionError::out_of_range(Operation::Insert, 4, 3))
        );
        assert_eq!(contents(&list), vec![1, 2, 3]);
    }

    #[test]
    fn test_list_insert_shifts_right() {
        let mut list = list_of(&[20]);
        list.insert(100, 1).unwrap();
        list.insert(500, 0).unwrap();
        assert_eq!(contents(&list), vec![500, 20, 100]);
    }

    #[test]
    fn test_list_growth_doubles() {
        let mut list = list_of(&[7, 8, 9]);
        for i in 0..1000 {
            list.append(i).unwrap();
            let cap = list.capacity();
            assert!(list.len() <= cap);
            assert_eq!(cap % INITIAL_CAPACITY, 0);
            assert!((cap / INITIAL_CAPACITY).is_power_of_two());
        }
        assert_eq!(list.len(), 1003);
        assert_eq!(list.capacity(), 1024);
        assert_eq!(list.get(1002), Ok(999));
    }

    #[test]
    fn test_list_rejected_insert_still_grows() {
        let mut list = list_of(&[0; 16]);
        assert_eq!(list.capacity(), 16);
        assert!(list.insert(1, 18).is_err());
        assert_eq!(list.capacity(), 32);
        assert_eq!(list.len(), 16);
    }

    #[test]
    fn test_list_shrink_never_below_initial() {
        let mut list = list_of(&[0; 1000]);
        while !list.is_empty() {
            list.remove(list.len() - 1).unwrap();
            assert!(list.capacity() >= INITIAL_CAPACITY);
            assert!(list.len() <= list.capacity());
            assert_tail_cleared(&list);
        }
        // Shrinking stops once len reaches 16, leaving 64 slots behind.
        assert_eq!(list.capacity(), 64);
    }

    #[test]
    fn test_list_shrink_hysteresis() {
        let mut list: ArrayList<i32> = (0..65).fold(ArrayList::new(), |mut l, v| {
            l.append(v).unwrap();
            l
        });
        assert_eq!(list.capacity(), 128);

        for _ in 0..33 {
            list.remove(list.len() - 1).unwrap();
        }
        assert_eq!((list.len(), list.capacity()), (32, 128));

        // Crossing the quarter-full threshold halves the buffer once.
        list.remove(list.len() - 1).unwrap();
        assert_eq!((list.len(), list.capacity()), (31, 64));

        for _ in 0..10 {
            list.append(0).unwrap();
            assert_eq!(list.capacity(), 64);
            list.remove(list.len() - 1).unwrap();
            assert_eq!(list.capacity(), 64);
        }
    }

    #[test]
    fn test_list_rejected_remove_still_shrinks() {
        let mut list = list_of(&[0; 65]);
        for _ in 0..33 {
            list.remove(0).unwrap();
        }
        assert_eq!((list.len(), list.capacity()), (32, 128));
        assert!(list.remove(100).is_err());
        assert_eq!((list.len(), list.capacity()), (32, 64));
    }

    #[test]
    fn test_list_owned_elements() {
        let mut list = ArrayList::new();
        list.append(String::from("a")).unwrap();
        list.append(String::from("c")).unwrap();
        list.insert(String::from("b"), 1).unwrap();
        assert_eq!(list.remove(0).unwrap(), "a");
        assert_eq!(list.get(1).unwrap(), "c");
        assert_eq!(format!("{list:?}"), r#"["b", "c"]"#);
    }

    #[test]
    fn test_list_drops_each_element_once() {
        struct Tracked(Rc<Cell<usize>>);
        impl Drop for Tracked {
            fn drop(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        let drops = Rc::new(Cell::new(0));
        let mut list = ArrayList::new();
        for _ in 0..40 {
            list.append(Tracked(drops.clone())).unwrap();
        }
        drop(list.remove(5).unwrap());
        assert_eq!(drops.get(), 1);
        list.delete();
        assert_eq!(drops.get(), 40);
    }

    #[test]
    fn test_list_debug_empty() {
        let list: ArrayList<i32> = ArrayList::default();
        assert_eq!(format!("{list:?}"), "[]");
    }
}
