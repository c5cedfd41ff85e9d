//! # Tampio Runtime
//!
//! Runtime support library for programs translated from the Tampio language
//! into Rust calls.
//!
//! The translator emits plain function and method calls; this crate supplies
//! the vocabulary those calls name. It does not parse or evaluate Tampio
//! itself.
//!
//! ## Features
//!
//! - **Numeric vocabulary**: elementary functions with host (IEEE) semantics,
//!   factorial, divisors and prime factors
//! - **Power protocol**: a one-shot handle taking its exponent from a name
//! - **Lista**: shared sequence with cons-style `tail`
//! - **Muuttuja**: shared value cell, fillable from an interactive prompt
//! - **Host surfaces**: prompt, page and clock traits with desktop adapters
//!   (`console` and `datetime` features)
//!
//! ## Example
//!
//! ```
//! use tampio_runtime::{Lista, Muuttuja, ScriptedPrompt, power, prime_factors, repeat_n_times};
//!
//! assert_eq!(power(2.0).call("3"), 16.0);
//! assert_eq!(prime_factors(12), vec![2, 3]);
//!
//! let list = Lista::from(vec![1, 2, 3]);
//! assert_eq!(list.tail().tail().elements(), vec![3]);
//!
//! let cell: Muuttuja<f64> = Muuttuja::new();
//! let mut prompt = ScriptedPrompt::new(["42"]);
//! cell.prompt_read(&mut prompt);
//! assert_eq!(cell.get(), Some(42.0));
//!
//! let mut count = 0;
//! repeat_n_times(3, || -> Result<(), ()> {
//!     count += 1;
//!     Ok(())
//! })
//! .unwrap();
//! assert_eq!(count, 3);
//! ```

// Public modules
pub mod value;
pub mod primitives;
pub mod lista;
pub mod muuttuja;
pub mod repeat;
pub mod prompt;
pub mod page;
pub mod time_source;
pub mod host;

#[cfg(feature = "console")]
pub mod stdout_page;

// Re-exports for convenience
pub use lista::Lista;
pub use muuttuja::Muuttuja;
pub use page::{ClickAction, ElementId, MemoryPage, Page};
pub use primitives::{
    PowerHandle, abs, cbrt, cos, cube, divisors, exp, factorial, factorial_exact, floor, ln,
    negate, parse_int, pow, power, predecessor, prime_factors, reciprocal, round, round_to, sign,
    sin, sqrt, square, successor, tan, to_text,
};
pub use prompt::{NUMBER_PROMPT, Prompt, ScriptedPrompt};
pub use repeat::repeat_n_times;
pub use time_source::{Clock, DateComponents, FixedClock, Moment};
pub use value::{RuntimeError, Value};

#[cfg(feature = "console")]
pub use host::stdio::StdioPrompt;
#[cfg(feature = "console")]
pub use stdout_page::StdoutPage;
#[cfg(feature = "datetime")]
pub use host::linux::{LinuxClock, moment_at};
