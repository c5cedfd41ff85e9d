//! Presentation surface for Tampio programs
//!
//! This module defines the `Page` trait that generated code writes to: plain
//! text output plus a small element model (lookup by identifier, content
//! append/clear, click bindings). The runtime never transforms what passes
//! through; a page forwards it to wherever the host displays things.
//!
//! `MemoryPage` keeps everything in memory and lets tests (or an embedding
//! UI loop) trigger clicks.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::muuttuja::Muuttuja;
use crate::value::{RuntimeError, Value};

/// Identifier of an element on a page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementId(Rc<str>);

impl ElementId {
    pub fn new(id: &str) -> Self {
        ElementId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Zero-argument action bound to a click.
pub type ClickAction = Box<dyn FnMut() -> Result<(), RuntimeError>>;

pub trait Page {
    /// Writes `text` verbatim.
    fn write_text(&mut self, text: &str) -> Result<(), RuntimeError>;

    /// Looks an element up by identifier.
    fn find_element(&self, id: &str) -> Option<ElementId>;

    fn append_content(&mut self, element: &ElementId, text: &str) -> Result<(), RuntimeError>;

    fn clear_content(&mut self, element: &ElementId) -> Result<(), RuntimeError>;

    /// Binds `action` to clicks on `element`. Earlier bindings stay in place.
    fn bind_click(&mut self, element: &ElementId, action: ClickAction) -> Result<(), RuntimeError>;

    /// Writes a value followed by a newline (`näyttää`).
    fn show(&mut self, value: &Value) -> Result<(), RuntimeError> {
        self.write_text(&format!("{}\n", value))
    }

    /// Stores the element, or `Value::Null` when there is none, into `cell`.
    fn find_element_into(&self, id: &str, cell: &Muuttuja<Value>) {
        let found = match self.find_element(id) {
            Some(element) => Value::Element(element),
            None => Value::Null,
        };
        cell.set(found);
    }
}

struct ElementState {
    content: String,
    on_click: Vec<ClickAction>,
}

/// In-memory page: a text buffer plus named elements.
#[derive(Default)]
pub struct MemoryPage {
    written: String,
    elements: HashMap<ElementId, ElementState>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an empty element (or returns the existing one).
    pub fn add_element(&mut self, id: &str) -> ElementId {
        let element = ElementId::new(id);
        self.elements
            .entry(element.clone())
            .or_insert_with(|| ElementState {
                content: String::new(),
                on_click: Vec::new(),
            });
        element
    }

    /// Everything written with `write_text` so far.
    pub fn written(&self) -> &str {
        &self.written
    }

    pub fn content(&self, element: &ElementId) -> Option<&str> {
        self.elements.get(element).map(|state| state.content.as_str())
    }

    /// Runs the actions bound to `element` in binding order.
    ///
    /// The first failing action stops the rest and its error is returned.
    pub fn click(&mut self, element: &ElementId) -> Result<(), RuntimeError> {
        let state = self.state_mut(element)?;
        tracing::debug!(element = %element, handlers = state.on_click.len(), "click");
        for action in state.on_click.iter_mut() {
            action()?;
        }
        Ok(())
    }

    fn state_mut(&mut self, element: &ElementId) -> Result<&mut ElementState, RuntimeError> {
        self.elements
            .get_mut(element)
            .ok_or_else(|| RuntimeError::UnknownElement(element.to_string()))
    }
}

impl Page for MemoryPage {
    fn write_text(&mut self, text: &str) -> Result<(), RuntimeError> {
        self.written.push_str(text);
        Ok(())
    }

    fn find_element(&self, id: &str) -> Option<ElementId> {
        let element = ElementId::new(id);
        self.elements.contains_key(&element).then_some(element)
    }

    fn append_content(&mut self, element: &ElementId, text: &str) -> Result<(), RuntimeError> {
        tracing::trace!(element = %element, text, "append content");
        self.state_mut(element)?.content.push_str(text);
        Ok(())
    }

    fn clear_content(&mut self, element: &ElementId) -> Result<(), RuntimeError> {
        self.state_mut(element)?.content.clear();
        Ok(())
    }

    fn bind_click(&mut self, element: &ElementId, action: ClickAction) -> Result<(), RuntimeError> {
        self.state_mut(element)?.on_click.push(action);
        Ok(())
    }
}
