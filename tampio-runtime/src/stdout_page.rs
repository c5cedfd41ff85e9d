//! Stdout page implementing `Page`
//!
//! A terminal has no elements: writes go to stdout, lookups find nothing and
//! element operations report the identifier as unknown.

use std::io::{self, Write};

use crate::page::{ClickAction, ElementId, Page};
use crate::value::RuntimeError;

pub struct StdoutPage;

impl StdoutPage {
    pub fn new() -> Self {
        StdoutPage
    }
}

impl Default for StdoutPage {
    fn default() -> Self {
        Self::new()
    }
}

impl Page for StdoutPage {
    fn write_text(&mut self, text: &str) -> Result<(), RuntimeError> {
        let mut stdout = io::stdout();
        stdout
            .write_all(text.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| RuntimeError::Output(e.to_string()))
    }

    fn find_element(&self, id: &str) -> Option<ElementId> {
        tracing::debug!(id, "element lookup on stdout page");
        None
    }

    fn append_content(&mut self, element: &ElementId, _text: &str) -> Result<(), RuntimeError> {
        Err(RuntimeError::UnknownElement(element.to_string()))
    }

    fn clear_content(&mut self, element: &ElementId) -> Result<(), RuntimeError> {
        Err(RuntimeError::UnknownElement(element.to_string()))
    }

    fn bind_click(&mut self, element: &ElementId, _action: ClickAction) -> Result<(), RuntimeError> {
        Err(RuntimeError::UnknownElement(element.to_string()))
    }
}
