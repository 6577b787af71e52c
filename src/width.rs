//! Visible-width transforms over strings carrying ANSI escape sequences.
//!
//! Every transform here is a pure function: it measures with
//! [`visible_len`] first, returns the input untouched when no rewriting is
//! needed, and otherwise rebuilds the output in a single scan-and-emit pass
//! over the [`Scanner`]. Escape sequences are atomic with respect to every
//! transform: they are copied to the output verbatim and in order, and never
//! count against a width budget.

use log::debug;

use crate::actor::Actor;
use crate::scanner::Scanner;

const ELLIPSIS: &str = "...";

/// Counts characters that occupy a column when rendered.
#[derive(Default)]
struct VisibleCounter {
    count: usize,
}

impl Actor for VisibleCounter {
    fn visible(&mut self, _c: char) {
        self.count += 1;
    }

    fn escape(&mut self, _c: char) {}
}

/// Rebuilds a string under a visible-character budget.
///
/// Visible characters are copied only while the budget allows; escape
/// characters are always copied, so no sequence is ever split or dropped.
struct BudgetedEmitter {
    out: String,
    budget: usize,
    used: usize,
}

impl BudgetedEmitter {
    fn new(budget: usize, capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
            budget,
            used: 0,
        }
    }
}

impl Actor for BudgetedEmitter {
    fn visible(&mut self, c: char) {
        if self.used < self.budget {
            self.out.push(c);
            self.used += 1;
        }
    }

    fn escape(&mut self, c: char) {
        self.out.push(c);
    }
}

/// Number of columns `s` occupies when rendered, ignoring ANSI escape codes.
///
/// Unlike `str::len` or `chars().count()`, embedded escape sequences
/// contribute nothing. An ESC that does not introduce a sequence (no `[`
/// after it) is ordinary text and counts, as does the character that broke
/// the pattern.
#[must_use]
pub fn visible_len(s: &str) -> usize {
    let mut scanner = Scanner::new();
    let mut counter = VisibleCounter::default();
    scanner.advance(s, &mut counter);
    counter.count
}

/// Cuts `s` down to at most `budget` visible characters.
///
/// The flag reports whether anything was dropped. Every escape sequence of
/// the input survives in full, including sequences past the cutoff point; a
/// string that ends in a style reset keeps it, so truncation never leaks
/// styling into later terminal output.
#[must_use]
pub fn truncate(s: &str, budget: usize) -> (String, bool) {
    if visible_len(s) <= budget {
        return (s.to_owned(), false);
    }

    let mut scanner = Scanner::new();
    let mut emitter = BudgetedEmitter::new(budget, s.len());
    scanner.advance(s, &mut emitter);
    scanner.finish(&mut emitter);
    (emitter.out, true)
}

/// Pads the end of `s` with `pad` until it renders `width` columns wide.
///
/// Returns `s` unchanged when it already renders at least `width` columns;
/// padding never truncates. The pad character is appended outside the
/// escape grammar and is always visible.
#[must_use]
pub fn pad_right(s: &str, width: usize, pad: char) -> String {
    let len = visible_len(s);
    if len >= width {
        return s.to_owned();
    }

    let mut out = String::with_capacity(s.len() + (width - len));
    out.push_str(s);
    for _ in len..width {
        out.push(pad);
    }
    out
}

/// Pads the start of `s` with `pad` until it renders `width` columns wide.
///
/// Mirror of [`pad_right`]; see there for the contract.
#[must_use]
pub fn pad_left(s: &str, width: usize, pad: char) -> String {
    let len = visible_len(s);
    if len >= width {
        return s.to_owned();
    }

    let mut out = String::with_capacity(s.len() + (width - len));
    for _ in len..width {
        out.push(pad);
    }
    out.push_str(s);
    out
}

/// Forces `s` to exactly `width` visible characters.
///
/// Shorter strings are right-padded with spaces. Longer strings are
/// truncated on a visible-character budget and ellipsized with `"..."`, so
/// an escape sequence at the end of the string survives the cut. Widths
/// narrower than the ellipsis clip the marker itself (`".."`, `"."`, then
/// nothing), keeping the result at exactly `width` visible characters.
#[must_use]
pub fn resize(s: &str, width: usize) -> String {
    let len = visible_len(s);
    if len == width {
        return s.to_owned();
    }

    if len < width {
        return pad_right(s, width, ' ');
    }

    if width < ELLIPSIS.len() {
        debug!("resize target {width} is narrower than the ellipsis marker, clipping it");
    }

    let (mut out, _) = truncate(s, width.saturating_sub(ELLIPSIS.len()));
    out.push_str(&ELLIPSIS[..ELLIPSIS.len().min(width)]);
    out
}
