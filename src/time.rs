//! Duration rendering for progress-bar labels.

use std::time::Duration;

/// Renders `t` rounded down to whole seconds, or `"---"` when `t` is
/// exactly zero.
///
/// Units follow the `1h2m3s` form: the leading zero-valued units are
/// omitted, interior ones are kept (`"1h0m30s"`). A non-zero duration under
/// one second floors to `"0s"`; only an exactly-zero duration renders as
/// the placeholder.
#[must_use]
pub fn pretty_time(t: Duration) -> String {
    if t.is_zero() {
        return "---".to_owned();
    }

    let secs = t.as_secs();
    let (h, m, s) = (secs / 3600, secs % 3600 / 60, secs % 60);

    if h > 0 {
        format!("{h}h{m}m{s}s")
    } else if m > 0 {
        format!("{m}m{s}s")
    } else {
        format!("{s}s")
    }
}
