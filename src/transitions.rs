//! Transition helpers for the escape-aware classifier.
//!
//! The scanner is driven by a table of state transitions covering the
//! `ESC [` control-sequence family. Each function in this module is
//! responsible for a specific classifier state: given an input character it
//! returns the next [`State`] and the [`Action`] the scanner should perform.
//! This keeps the classification logic table-driven and makes it
//! straightforward to audit coverage for the three cases that matter:
//! plain text, complete sequences, and false-positive introducers.

use crate::enums::{Action, State};

/// Escape introducer.
pub(crate) const ESC: char = '\u{1b}';

/// Second character of the control sequence introducer, `ESC [`.
pub(crate) const CSI_OPEN: char = '[';

/// Resolve the next state and action for a single character of input.
#[inline(always)]
pub(crate) const fn transit(state: State, c: char) -> (State, Action) {
    match state {
        State::Ground => ground(c),
        State::Escape => escape(c),
        State::Csi => csi(c),
    }
}

/// Ground state handling plain visible text.
#[inline(always)]
const fn ground(c: char) -> (State, Action) {
    use Action::*;
    use State::*;

    match c {
        ESC => (Escape, Hold),
        _ => (Ground, Print),
    }
}

/// ESC state waiting for the next character to confirm a control sequence.
///
/// Anything other than `[` rejects the introducer: the held ESC and the
/// current character are both committed as visible text.
#[inline(always)]
const fn escape(c: char) -> (State, Action) {
    use Action::*;
    use State::*;

    match c {
        CSI_OPEN => (Csi, Begin),
        _ => (Ground, Recover),
    }
}

/// CSI state consuming the sequence body until a final character.
///
/// The body has no fixed length; the sequence closes on the first character
/// in the final-byte range `@`-`~`.
#[inline(always)]
const fn csi(c: char) -> (State, Action) {
    use Action::*;
    use State::*;

    match c {
        '@'..='~' => (Ground, Dispatch),
        _ => (Csi, Put),
    }
}
