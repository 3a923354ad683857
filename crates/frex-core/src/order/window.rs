//! Bounded lookahead scans over a line sequence.

use super::lines::LineSequence;
use super::rules::LineRecognizer;

/// Maximum number of lines a single scan looks at.
pub const WINDOW_SIZE: usize = 4;

/// Forward-only cursor that scans a bounded window for recognizable lines.
#[derive(Debug, Clone)]
pub struct WindowScanner<'a> {
    lines: LineSequence<'a>,
    cursor: usize,
    width: usize,
}

impl<'a> WindowScanner<'a> {
    /// Create a scanner positioned at the first line.
    pub fn new(lines: LineSequence<'a>) -> Self {
        Self {
            lines,
            cursor: 0,
            width: WINDOW_SIZE,
        }
    }

    /// Set the window width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    /// Current cursor position.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// True once the cursor has passed the last line.
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.lines.len()
    }

    /// Look at up to `width` lines from the cursor for one the recognizer accepts.
    ///
    /// On a match the cursor moves just past the matched line. Otherwise it
    /// stays where it was.
    pub fn scan<R>(&mut self, recognizer: &R) -> Option<&'a str>
    where
        R: LineRecognizer + ?Sized,
    {
        let end = self.cursor.saturating_add(self.width).min(self.lines.len());
        for i in self.cursor..end {
            let line = self.lines.get(i)?;
            if recognizer.matches(line) {
                self.cursor = i + 1;
                return Some(line);
            }
        }
        None
    }

    /// Advance the cursor by one line.
    pub fn step(&mut self) {
        self.cursor += 1;
    }
}
