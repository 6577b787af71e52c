//! ANSI escape aware width measurement, padding and truncation for
//! terminal strings.
//!
//! Styled terminal text carries invisible `ESC [` control sequences, so
//! `str::len` overstates how many columns it occupies. This crate measures
//! and reshapes such strings by their *visible* width, which is what
//! fixed-width UI elements (progress bars, labels, columns) need:
//!
//! ```
//! let label = "\x1b[36mcompiling\x1b[0m";
//! assert_eq!(viswidth::visible_len(label), 9);
//! assert_eq!(viswidth::resize(label, 6), "\x1b[36mcom\x1b[0m...");
//! ```
//!
//! The high-level transforms live in [`width`]; the underlying
//! [`Scanner`]/[`Actor`] pair is exported for callers that need the raw
//! visible-or-escape classification stream.

mod actor;
mod enums;
mod scanner;
mod time;
mod transitions;
mod width;

pub use actor::Actor;
pub use scanner::Scanner;
pub use time::pretty_time;
pub use width::{pad_left, pad_right, resize, truncate, visible_len};
