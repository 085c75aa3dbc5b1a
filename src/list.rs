use super::types::{Direction, Record};
use std::collections::VecDeque;

/// Records kept in the order they will be reported in. Only `insert_ordered` keeps the
/// list sorted; `insert_front` and `insert_back` place records unconditionally.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct OrderedList {
    records: VecDeque<Record>,
}

impl OrderedList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn insert_front(&mut self, record: Record) {
        self.records.push_front(record);
    }

    pub fn insert_back(&mut self, record: Record) {
        self.records.push_back(record);
    }

    /// Insert `record` before the first element it precedes in `direction`, or at the
    /// tail if there is none.
    pub fn insert_ordered(&mut self, record: Record, direction: Direction) {
        let index = self
            .records
            .iter()
            .position(|current| record.precedes(current, direction))
            .unwrap_or(self.records.len());

        self.records.insert(index, record);
    }

    pub fn peek_front(&self) -> Option<&Record> {
        self.records.front()
    }

    pub fn remove_front(&mut self) -> Option<Record> {
        self.records.pop_front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Run `action` on each record from the head, handing it `sink` every time. Visits at
    /// most `limit` records, or all of them when `limit` is 0. Stops at the first error.
    pub fn for_each<S, E, F>(&self, limit: usize, sink: &mut S, mut action: F) -> Result<(), E>
    where
        F: FnMut(&Record, &mut S) -> Result<(), E>,
    {
        let limit = if limit == 0 { self.records.len() } else { limit };

        for record in self.records.iter().take(limit) {
            action(record, sink)?;
        }

        Ok(())
    }
}
