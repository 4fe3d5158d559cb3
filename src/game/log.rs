//! In-process match log.
//!
//! The engine records what happens during a match (starts, turn changes,
//! plays, mana) as categorised entries. Entries are filtered by verbosity
//! when they are recorded and can be captured in memory, echoed to stdout,
//! or both. The buffer is an `im::Vector`, so cloning a `GameLog` for a
//! snapshot is cheap.

use im::Vector;
use serde::{Deserialize, Serialize};

/// How much the engine reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum VerbosityLevel {
    /// Nothing is recorded.
    Silent = 0,
    /// Match start and first position only.
    Minimal = 1,
    /// Turns, positions, plays and activations (default).
    #[default]
    Normal = 2,
    /// Every phase and step, plus mana generation.
    Verbose = 3,
}

/// Where recorded entries go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OutputMode {
    /// Capture only to the in-memory buffer (default).
    #[default]
    Memory,
    /// Print only to stdout.
    Stdout,
    /// Both stdout and the in-memory buffer.
    Both,
}

/// A single recorded entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: VerbosityLevel,
    pub message: String,
    /// e.g. "turn", "play", "mana"
    pub category: &'static str,
}

#[derive(Debug, Clone, Default)]
pub struct GameLog {
    verbosity: VerbosityLevel,
    output_mode: OutputMode,
    entries: Vector<LogEntry>,
}

impl GameLog {
    #[must_use]
    pub fn new(verbosity: VerbosityLevel, output_mode: OutputMode) -> Self {
        Self {
            verbosity,
            output_mode,
            entries: Vector::new(),
        }
    }

    #[must_use]
    pub fn verbosity(&self) -> VerbosityLevel {
        self.verbosity
    }

    pub fn set_verbosity(&mut self, verbosity: VerbosityLevel) {
        self.verbosity = verbosity;
    }

    #[must_use]
    pub fn output_mode(&self) -> OutputMode {
        self.output_mode
    }

    pub fn set_output_mode(&mut self, mode: OutputMode) {
        self.output_mode = mode;
    }

    /// Record a message if the current verbosity allows it.
    pub fn record(&mut self, level: VerbosityLevel, category: &'static str, message: impl Into<String>) {
        if level == VerbosityLevel::Silent || level > self.verbosity {
            return;
        }

        let message = message.into();
        if matches!(self.output_mode, OutputMode::Stdout | OutputMode::Both) {
            if level == VerbosityLevel::Minimal {
                println!("{}", message);
            } else {
                println!("  {}", message);
            }
        }
        if matches!(self.output_mode, OutputMode::Memory | OutputMode::Both) {
            self.entries.push_back(LogEntry {
                level,
                message,
                category,
            });
        }
    }

    #[inline]
    pub fn minimal(&mut self, category: &'static str, message: impl Into<String>) {
        self.record(VerbosityLevel::Minimal, category, message);
    }

    #[inline]
    pub fn normal(&mut self, category: &'static str, message: impl Into<String>) {
        self.record(VerbosityLevel::Normal, category, message);
    }

    #[inline]
    pub fn verbose(&mut self, category: &'static str, message: impl Into<String>) {
        self.record(VerbosityLevel::Verbose, category, message);
    }

    /// Captured entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &Vector<LogEntry> {
        &self.entries
    }

    /// Captured entries of one category.
    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a LogEntry> + 'a {
        self.entries.iter().filter(move |e| e.category == category)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_filters_entries() {
        let mut log = GameLog::new(VerbosityLevel::Normal, OutputMode::Memory);

        log.minimal("match", "started");
        log.normal("turn", "turn 2");
        log.verbose("step", "upkeep");

        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0].message, "started");
        assert_eq!(log.entries()[1].category, "turn");
    }

    #[test]
    fn test_silent_records_nothing() {
        let mut log = GameLog::new(VerbosityLevel::Silent, OutputMode::Memory);

        log.minimal("match", "started");

        assert!(log.is_empty());
    }

    #[test]
    fn test_stdout_only_skips_buffer() {
        let mut log = GameLog::new(VerbosityLevel::Verbose, OutputMode::Stdout);

        log.normal("play", "played a land");

        assert!(log.is_empty());
    }

    #[test]
    fn test_settings_change_mid_match() {
        let mut log = GameLog::new(VerbosityLevel::Minimal, OutputMode::Stdout);
        log.normal("turn", "dropped");

        log.set_verbosity(VerbosityLevel::Verbose);
        log.set_output_mode(OutputMode::Memory);
        log.verbose("step", "upkeep");

        assert_eq!(log.verbosity(), VerbosityLevel::Verbose);
        assert_eq!(log.output_mode(), OutputMode::Memory);
        assert_eq!(log.len(), 1);
        assert_eq!(log.entries()[0].message, "upkeep");
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut log = GameLog::default();
        log.normal("turn", "one");
        let snapshot = log.clone();

        log.normal("turn", "two");

        assert_eq!(snapshot.len(), 1);
        assert_eq!(log.in_category("turn").count(), 2);
    }
}
