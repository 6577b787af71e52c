//! Callbacks invoked by the escape-aware scanner.
//!
//! The [`Scanner`](crate::scanner::Scanner) walks through a string and
//! classifies every character as either visible text or part of an ANSI
//! escape sequence. Each classified character is handed over to an [`Actor`]
//! implementation that is responsible for counting, rebuilding output, or
//! whatever else the embedding code needs. Characters arrive in input order;
//! a false-positive introducer (an ESC not followed by `[`) is delivered as
//! two visible characters once the second character's role is known.

/// Consumer-facing interface for the character classes emitted by the
/// scanner.
pub trait Actor {
    /// Emits a character that occupies one column when rendered.
    fn visible(&mut self, c: char);

    /// Emits a character consumed by an escape sequence.
    ///
    /// This covers the introducer pair `ESC [`, every character of the
    /// sequence body, and the final character that closes the sequence.
    fn escape(&mut self, c: char);
}
