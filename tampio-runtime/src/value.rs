use std::fmt;
use std::rc::Rc;

use crate::lista::Lista;
use crate::page::ElementId;
use crate::primitives::to_string::to_text;

// RUST CONCEPT: One dynamic value type for slots generated code cannot type statically
// Numbers, text and lists are the source language's data; Element and Null are
// what a page lookup writes back into a cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),        // Host number (integers included)
    Text(Rc<str>),      // Immutable, ref counted text
    Boolean(bool),
    List(Lista<Value>), // Shared sequence
    Element(ElementId), // Handle to a page element
    Null,               // Absent marker
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Text(_) => "text",
            Value::Boolean(_) => "boolean",
            Value::List(_) => "list",
            Value::Element(_) => "element",
            Value::Null => "null",
        }
    }

    pub fn as_number(&self) -> Result<f64, RuntimeError> {
        match self {
            Value::Number(n) => Ok(*n),
            other => Err(RuntimeError::TypeError(format!(
                "expected number, got {}",
                other.type_name()
            ))),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s.into())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<Lista<Value>> for Value {
    fn from(list: Lista<Value>) -> Self {
        Value::List(list)
    }
}

// RUST CONCEPT: Display mirrors what the host prints when a value is written to the page
// Lists print comma separated, the way the host joins arrays: a null element
// and a list nested inside itself both print as nothing
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", to_text(*n)),
            Value::Text(s) => write!(f, "{}", s),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::List(list) => list.with_elements_for_display(
                || Ok(()),
                |items| {
                    for (i, item) in items.iter().enumerate() {
                        if i > 0 {
                            write!(f, ",")?;
                        }
                        if !item.is_null() {
                            write!(f, "{}", item)?;
                        }
                    }
                    Ok(())
                },
            ),
            Value::Element(id) => write!(f, "<{}>", id),
            Value::Null => write!(f, "null"),
        }
    }
}

#[derive(Debug)]
pub enum RuntimeError {
    TypeError(String),
    IndexOutOfBounds { index: usize, len: usize },
    UnknownElement(String),
    Output(String),
}

// RUST CONCEPT: Implementing traits for custom error types
impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::TypeError(msg) => write!(f, "Type error: {}", msg),
            RuntimeError::IndexOutOfBounds { index, len } => {
                write!(f, "Index {} out of bounds for list of size {}", index, len)
            }
            RuntimeError::UnknownElement(id) => write!(f, "Unknown element: {}", id),
            RuntimeError::Output(msg) => write!(f, "Output error: {}", msg),
        }
    }
}

impl std::error::Error for RuntimeError {}
