//! Anchor lookup and fixed-offset reads over a line sequence.

use tracing::trace;

/// A borrowed, immutable, 0-indexed sequence of document lines.
#[derive(Debug, Clone, Copy)]
pub struct LineSequence<'a> {
    lines: &'a [String],
}

/// A located label line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor<'a> {
    /// Label that was searched for.
    pub label: &'a str,
    /// Index of the matching line.
    pub index: usize,
    /// Full text of the matching line.
    pub line: &'a str,
}

impl<'a> Anchor<'a> {
    /// Text following the first `": "` on the anchor line itself.
    ///
    /// Used for labels that carry their value inline, e.g.
    /// `Contactperson: John Doe`.
    pub fn inline_value(&self) -> Option<&'a str> {
        self.line.split_once(": ").map(|(_, rest)| rest)
    }
}

impl<'a> LineSequence<'a> {
    pub fn new(lines: &'a [String]) -> Self {
        Self { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn as_slice(&self) -> &'a [String] {
        self.lines
    }

    /// First index whose line satisfies `predicate(line, index)`.
    pub fn find_index<F>(&self, predicate: F) -> Option<usize>
    where
        F: Fn(&str, usize) -> bool,
    {
        self.lines
            .iter()
            .enumerate()
            .find(|(i, line)| predicate(line, *i))
            .map(|(i, _)| i)
    }

    /// Locate the first line equal to `label`.
    pub fn anchor(&self, label: &'a str) -> Option<Anchor<'a>> {
        let found = self.find_index(|line, _| line == label);
        if found.is_none() {
            trace!("anchor {:?} not found", label);
        }
        found.map(|index| Anchor {
            label,
            index,
            line: self.lines[index].as_str(),
        })
    }

    /// Locate the first line starting with `prefix`.
    pub fn prefix_anchor(&self, prefix: &'a str) -> Option<Anchor<'a>> {
        let found = self.find_index(|line, _| line.starts_with(prefix));
        if found.is_none() {
            trace!("prefix anchor {:?} not found", prefix);
        }
        found.map(|index| Anchor {
            label: prefix,
            index,
            line: self.lines[index].as_str(),
        })
    }

    /// Value at a fixed offset after an anchor; `None` when out of range.
    pub fn value_at(&self, anchor: &Anchor<'_>, offset: usize) -> Option<&'a str> {
        let value = anchor.index.checked_add(offset).and_then(|i| self.get(i));
        if value.is_none() {
            trace!("no line {} after {:?} at {}", offset, anchor.label, anchor.index);
        }
        value
    }

    /// Lines strictly between two anchors.
    ///
    /// Empty when either anchor is missing or `end` does not follow `start`.
    pub fn between(&self, start: Option<&Anchor<'_>>, end: Option<&Anchor<'_>>) -> LineSequence<'a> {
        match (start, end) {
            (Some(start), Some(end)) if end.index > start.index => LineSequence {
                lines: &self.lines[start.index + 1..end.index],
            },
            _ => LineSequence { lines: &[] },
        }
    }
}
