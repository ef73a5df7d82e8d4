//! Progress spinner shown while a network lookup is in flight.

use indicatif::{ProgressBar, ProgressStyle};

/// Start a ticking spinner for the lookup of `title`.
///
/// When `visible` is false the bar draws nowhere, so callers can treat
/// both cases the same and just `finish_and_clear()` it.
pub(crate) fn lookup_spinner(title: &str, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .expect("static pattern")
            .tick_chars("/-\\|"),
    );
    pb.set_message(format!("Looking up '{title}' on OMDb..."));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
