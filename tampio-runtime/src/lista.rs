//! Shared sequence ("lista") with cons-style decomposition.
//!
//! A `Lista` is a handle: cloning it shares the same backing store, the way
//! generated code passes lists around by reference. `tail` is the only way to
//! derive a new list and always returns an independent copy.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use crate::value::RuntimeError;

// A list may hold a handle to itself. Every walk that descends into elements
// (printing, debug output, comparison) records the lists it is inside of, and
// a nested occurrence of one of those is not walked again.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum Walk {
    Display,
    Debug,
    Eq,
}

type WalkKey = (Walk, usize, usize);

thread_local! {
    static WALKING: RefCell<HashSet<WalkKey>> = RefCell::new(HashSet::new());
}

// RUST CONCEPT: Drop guard
// The key leaves the set when the walk ends, even if a formatter panics
struct WalkGuard(WalkKey);

impl Drop for WalkGuard {
    fn drop(&mut self) {
        let _ = WALKING.try_with(|walking| walking.borrow_mut().remove(&self.0));
    }
}

fn walk_once<R>(key: WalkKey, on_cycle: impl FnOnce() -> R, walk: impl FnOnce() -> R) -> R {
    let fresh = WALKING.with(|walking| walking.borrow_mut().insert(key));
    if !fresh {
        return on_cycle();
    }
    let _guard = WalkGuard(key);
    walk()
}

// RUST CONCEPT: Rc<RefCell<...>> for shared ownership with interior mutability
pub struct Lista<T> {
    items: Rc<RefCell<Vec<T>>>,
}

impl<T> Lista<T> {
    /// Empty list.
    pub fn new() -> Self {
        Lista {
            items: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Number of elements (`määrä`).
    pub fn size(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Appends in place (`lisätä`). Every holder of this handle sees the new element.
    pub fn append(&self, item: T) {
        self.items.borrow_mut().push(item);
    }

    /// Borrows the contents without copying them.
    ///
    /// The closure must not call back into a mutating method of the same list.
    pub fn with_elements<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        f(&self.items.borrow())
    }

    /// Replaces the element at `index`.
    pub fn set_at(&self, index: usize, item: T) -> Result<(), RuntimeError> {
        let mut items = self.items.borrow_mut();
        let len = items.len();
        match items.get_mut(index) {
            Some(slot) => {
                *slot = item;
                Ok(())
            }
            None => Err(RuntimeError::IndexOutOfBounds { index, len }),
        }
    }

    pub fn clear(&self) {
        self.items.borrow_mut().clear();
    }

    /// True when both handles share one backing store.
    pub fn same_list(&self, other: &Lista<T>) -> bool {
        Rc::ptr_eq(&self.items, &other.items)
    }

    fn address(&self) -> usize {
        Rc::as_ptr(&self.items) as usize
    }

    // Borrowed view for printing; a list already being printed on this
    // thread gets `on_cycle` instead of its elements
    pub(crate) fn with_elements_for_display<R>(
        &self,
        on_cycle: impl FnOnce() -> R,
        f: impl FnOnce(&[T]) -> R,
    ) -> R {
        walk_once((Walk::Display, self.address(), 0), on_cycle, || {
            f(&self.items.borrow())
        })
    }
}

impl<T: Clone> Lista<T> {
    /// Snapshot of the contents. Mutating the returned vector never affects the list.
    pub fn elements(&self) -> Vec<T> {
        self.items.borrow().clone()
    }

    /// First element (CAR), `None` when empty.
    pub fn head(&self) -> Option<T> {
        self.items.borrow().first().cloned()
    }

    // CDR: ( [a|b] -- b )
    // Always a new list, even for an empty source; the source is untouched
    pub fn tail(&self) -> Lista<T> {
        let items = self.items.borrow();
        let rest = items.get(1..).unwrap_or(&[]);
        Lista::from(rest.to_vec())
    }
}

impl<T: PartialEq> Lista<T> {
    /// First position of `item`, `None` when absent.
    pub fn position(&self, item: &T) -> Option<usize> {
        self.items.borrow().iter().position(|x| x == item)
    }

    /// First position of `item`, or `-1` when absent.
    pub fn index_of(&self, item: &T) -> i64 {
        match self.position(item) {
            Some(i) => i as i64,
            None => -1,
        }
    }
}

// Manual impl: cloning the handle must not require T: Clone
impl<T> Clone for Lista<T> {
    fn clone(&self) -> Self {
        Lista {
            items: Rc::clone(&self.items),
        }
    }
}

impl<T> Default for Lista<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Lista<T> {
    fn from(items: Vec<T>) -> Self {
        Lista {
            items: Rc::new(RefCell::new(items)),
        }
    }
}

impl<T> FromIterator<T> for Lista<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Lista::from(iter.into_iter().collect::<Vec<_>>())
    }
}

// Element-wise; a pair of lists already under comparison counts as equal,
// so two lists that each contain themselves compare without recursing forever
impl<T: PartialEq> PartialEq for Lista<T> {
    fn eq(&self, other: &Self) -> bool {
        walk_once(
            (Walk::Eq, self.address(), other.address()),
            || true,
            || *self.items.borrow() == *other.items.borrow(),
        )
    }
}

impl<T: fmt::Debug> fmt::Debug for Lista<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let walked = walk_once(
            (Walk::Debug, self.address(), 0),
            || None,
            || Some(write!(f, "Lista({:?})", self.items.borrow())),
        );
        walked.unwrap_or_else(|| write!(f, "Lista([...])"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    // [1, <itself>]
    fn self_containing(first: f64) -> Lista<Value> {
        let list = Lista::from(vec![Value::Number(first)]);
        list.append(Value::List(list.clone()));
        list
    }

    #[test]
    fn test_tail_twice() {
        let list = Lista::from(vec![1, 2, 3]);
        assert_eq!(list.tail().tail().elements(), vec![3]);
        // Source is untouched
        assert_eq!(list.elements(), vec![1, 2, 3]);
    }

    #[test]
    fn test_tail_of_empty_is_empty() {
        let list: Lista<i32> = Lista::new();
        let rest = list.tail();
        assert!(rest.is_empty());
        assert!(!rest.same_list(&list));
    }

    #[test]
    fn test_tail_is_independent() {
        let list = Lista::from(vec![1, 2, 3]);
        let rest = list.tail();
        rest.append(4);
        list.append(9);
        assert_eq!(rest.elements(), vec![2, 3, 4]);
        assert_eq!(list.elements(), vec![1, 2, 3, 9]);
    }

    #[test]
    fn test_index_of() {
        let list = Lista::from(vec![5, 7, 9]);
        assert_eq!(list.index_of(&7), 1);
        assert_eq!(list.index_of(&42), -1);
        assert_eq!(list.position(&5), Some(0));
    }

    #[test]
    fn test_index_of_first_match() {
        let list = Lista::from(vec!["a", "b", "a"]);
        assert_eq!(list.index_of(&"a"), 0);
    }

    #[test]
    fn test_append_then_index() {
        let list = Lista::from(vec![10, 20]);
        let k = list.size();
        list.append(30);
        assert_eq!(list.index_of(&30), k as i64);
        assert_eq!(list.size(), k + 1);
    }

    #[test]
    fn test_clones_share_storage() {
        let list = Lista::from(vec![1]);
        let alias = list.clone();
        alias.append(2);
        assert_eq!(list.size(), 2);
        assert!(list.same_list(&alias));
    }

    #[test]
    fn test_elements_is_snapshot() {
        let list = Lista::from(vec![1, 2]);
        let mut snapshot = list.elements();
        snapshot.push(3);
        assert_eq!(list.size(), 2);
    }

    #[test]
    fn test_head() {
        assert_eq!(Lista::from(vec![4, 5]).head(), Some(4));
        assert_eq!(Lista::<i32>::new().head(), None);
    }

    #[test]
    fn test_set_at_and_clear() {
        let list = Lista::from(vec![1, 2]);
        list.set_at(1, 8).unwrap();
        assert_eq!(list.elements(), vec![1, 8]);

        let result = list.set_at(5, 0);
        assert!(matches!(
            result,
            Err(RuntimeError::IndexOutOfBounds { index: 5, len: 2 })
        ));

        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn test_debug_self_containing_list() {
        let list = self_containing(1.0);
        assert_eq!(
            format!("{:?}", list),
            "Lista([Number(1.0), List(Lista([...]))])"
        );
        // The walk is over, so a second print is the same
        assert_eq!(format!("{:?}", list), format!("{:?}", list));
        list.clear();
    }

    #[test]
    fn test_eq_self_containing_lists() {
        let a = self_containing(1.0);
        let b = self_containing(1.0);
        let c = self_containing(2.0);

        assert_eq!(a, a.clone());
        assert_eq!(a, b);
        assert_ne!(a, c);

        for list in [a, b, c] {
            list.clear();
        }
    }

    #[test]
    fn test_eq_is_element_wise() {
        assert_eq!(Lista::from(vec![1, 2]), Lista::from(vec![1, 2]));
        assert_ne!(Lista::from(vec![1, 2]), Lista::from(vec![2, 1]));

        // NaN is never equal, not even within one list
        let nan = Lista::from(vec![f64::NAN]);
        assert_ne!(nan, nan.clone());
    }
}
