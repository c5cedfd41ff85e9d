//! Desktop implementations of the host surfaces
//!
//! Each adapter is feature-gated so embedders that bring their own prompt or
//! clock do not pull in the terminal or calendar dependencies.

// System clock (chrono)
#[cfg(feature = "datetime")]
pub mod linux;

// Terminal prompt (editline)
#[cfg(feature = "console")]
pub mod stdio;
