//! Progress reporting for long-running transforms.
//!
//! The engine reports progress as a percentage through a callback. This
//! reporter turns those callbacks into a single self-overwriting stderr line,
//! redrawing only when the whole-number percentage changes.

use std::io::{self, Write};

/// Stderr progress line for humanize and merge runs.
pub struct ProgressReporter {
    label: String,
    /// Whether to show output (disabled by --quiet)
    show_output: bool,
    /// Last whole percentage drawn, if any
    last_drawn: Option<u32>,
}

impl ProgressReporter {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            show_output: true,
            last_drawn: None,
        }
    }

    /// Create a progress reporter with output disabled.
    pub fn quiet(label: impl Into<String>) -> Self {
        Self {
            show_output: false,
            ..Self::new(label)
        }
    }

    /// Announce the run.
    pub fn start(&self, items: usize, unit: &str) {
        if self.show_output {
            eprintln!("{}", self.heading(Some((items, unit))));
        }
    }

    /// Announce a run whose progress is not counted in items.
    pub fn begin(&self) {
        if self.show_output {
            eprintln!("{}", self.heading(None));
        }
    }

    fn heading(&self, count: Option<(usize, &str)>) -> String {
        match count {
            Some((items, unit)) => format!("{} ({})", self.label, format_count(items, unit)),
            None => format!("{}...", self.label),
        }
    }

    /// Feed one percentage report from the engine.
    ///
    /// Returns true if the line was redrawn.
    pub fn update(&mut self, percent: f64) -> bool {
        let whole = percent.clamp(0.0, 100.0).floor() as u32;
        if self.last_drawn == Some(whole) {
            return false;
        }
        self.last_drawn = Some(whole);

        if self.show_output {
            eprint!("\r  [{:>3}%] {}", whole, self.label);
            let _ = io::stderr().flush();
        }
        true
    }

    /// Clear the progress line and print a closing message.
    pub fn finish(&self, message: &str) {
        if self.show_output {
            self.clear_line();
            eprintln!("{}", message);
        }
    }

    /// Clear the progress line without a message (cancel or error).
    pub fn abandon(&self) {
        if self.show_output {
            self.clear_line();
        }
    }

    fn clear_line(&self) {
        if self.last_drawn.is_some() {
            eprint!("\r{:width$}\r", "", width = self.label.len() + 10);
        }
    }

    /// Last whole percentage seen.
    pub fn last_percent(&self) -> Option<u32> {
        self.last_drawn
    }
}

/// "1 command", "1,204 commands".
pub fn format_count(count: usize, unit: &str) -> String {
    let digits = count.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{} {}{}", grouped, unit, if count == 1 { "" } else { "s" })
}
