// Value cell ("muuttuja")
// A single shared slot that lets a callee overwrite the caller's variable

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::primitives::parse::parse_int;
use crate::prompt::{NUMBER_PROMPT, Prompt};

/// Field name that seeds a cell in `from_fields`.
pub const VALUE_KEY: &str = "arvo";

// RUST CONCEPT: Forth-style variable as Rc<RefCell<...>>
// Every clone is the same cell, so writes through one holder are seen by all.
// None is the unset state.
pub struct Muuttuja<T> {
    slot: Rc<RefCell<Option<T>>>,
}

impl<T> Muuttuja<T> {
    /// Unset cell.
    pub fn new() -> Self {
        Muuttuja {
            slot: Rc::new(RefCell::new(None)),
        }
    }

    pub fn with_value(value: T) -> Self {
        Muuttuja {
            slot: Rc::new(RefCell::new(Some(value))),
        }
    }

    /// Builds a cell from named fields; only `"arvo"` is recognized.
    ///
    /// Without that key the cell starts unset. Other fields are ignored.
    pub fn from_fields<K, I>(fields: I) -> Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, T)>,
    {
        let value = fields
            .into_iter()
            .find(|(key, _)| key.as_ref() == VALUE_KEY)
            .map(|(_, value)| value);
        Muuttuja {
            slot: Rc::new(RefCell::new(value)),
        }
    }

    pub fn is_set(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Overwrites the value.
    pub fn set(&self, value: T) {
        *self.slot.borrow_mut() = Some(value);
    }

    /// Back to the unset state.
    pub fn unset(&self) {
        *self.slot.borrow_mut() = None;
    }

    /// Removes and returns the value, leaving the cell unset.
    pub fn take(&self) -> Option<T> {
        self.slot.borrow_mut().take()
    }

    /// True when both handles refer to one cell.
    pub fn same_cell(&self, other: &Muuttuja<T>) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

impl<T: Clone> Muuttuja<T> {
    /// Current value (`arvo`).
    pub fn get(&self) -> Option<T> {
        self.slot.borrow().clone()
    }
}

impl<T: From<f64>> Muuttuja<T> {
    /// Asks for a number with the fixed prompt and stores it (`lukea luku`).
    pub fn prompt_read(&self, prompt: &mut dyn Prompt) {
        self.prompt_read_with_text(prompt, NUMBER_PROMPT);
    }

    // RUST CONCEPT: Parse failures are stored, not reported
    // The parsed answer always replaces the previous value, NaN included.
    pub fn prompt_read_with_text(&self, prompt: &mut dyn Prompt, text: &str) {
        let answer = prompt.ask(text);
        let number = parse_int(&answer);
        tracing::debug!(prompt = text, answer = %answer, number, "prompt read");
        self.set(T::from(number));
    }
}

// Manual impl: sharing the cell must not require T: Clone
impl<T> Clone for Muuttuja<T> {
    fn clone(&self) -> Self {
        Muuttuja {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T> Default for Muuttuja<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Muuttuja<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.slot.borrow() {
            Some(value) => write!(f, "Muuttuja({:?})", value),
            None => write!(f, "Muuttuja(<unset>)"),
        }
    }
}
