use crate::actor::Actor;
use crate::enums::{Action, State};
use crate::transitions::{self, ESC};

/// Escape-aware character classifier.
///
/// Drives the transition table in [`transitions`] over an input string and
/// performs the resulting actions against an [`Actor`]. The scanner holds no
/// buffered text; the only deferred decision is the introducer itself, which
/// is committed as escape-internal when `[` follows and as visible text
/// otherwise.
///
/// A sequence body with no final character consumes the remainder of the
/// input as escape-internal. That is defined behavior, not an error.
#[derive(Default)]
pub struct Scanner {
    state: State,
}

impl Scanner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies every character of `input` in order.
    ///
    /// May be called repeatedly to scan a string in pieces; classification
    /// state carries over between calls.
    pub fn advance<A: Actor>(&mut self, input: &str, actor: &mut A) {
        for c in input.chars() {
            let (next_state, action) = transitions::transit(self.state, c);
            Self::perform(action, c, actor);
            self.state = next_state;
        }
    }

    /// Flushes a held introducer at end of input and resets to ground.
    ///
    /// A trailing lone ESC never becomes visible text (there is no second
    /// character to reject the introducer), so it is delivered as
    /// escape-internal for consumers that rebuild output.
    pub fn finish<A: Actor>(&mut self, actor: &mut A) {
        if self.state == State::Escape {
            actor.escape(ESC);
        }
        self.state = State::Ground;
    }

    fn perform<A: Actor>(action: Action, c: char, actor: &mut A) {
        use Action::*;

        match action {
            Print => actor.visible(c),
            Hold => {},
            Begin => {
                actor.escape(ESC);
                actor.escape(c);
            },
            Recover => {
                actor.visible(ESC);
                actor.visible(c);
            },
            Put | Dispatch => actor.escape(c),
        }
    }
}
