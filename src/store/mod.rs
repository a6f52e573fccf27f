//! In-memory latency record store
//!
//! Records are kept in insertion order and addressed by position. Every
//! operation checks bounds before touching the underlying vector, so a bad
//! index never panics and never leaves the store partially modified.

use crate::error::{AppError, Result};
use crate::models::LatencyRecord;
use std::iter::{Enumerate, FusedIterator};
use std::slice;

/// Ordered, index-addressed collection of latency records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<LatencyRecord>,
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the end of the store
    pub fn add(&mut self, record: LatencyRecord) {
        self.records.push(record);
    }

    /// Get the record at `index`
    ///
    /// Returns [`AppError::IndexOutOfRange`] when `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&LatencyRecord> {
        self.records
            .get(index)
            .ok_or_else(|| AppError::index_out_of_range(index, self.records.len()))
    }

    /// Overwrite the record at `index`; returns false and changes nothing if out of range
    pub fn replace(&mut self, index: usize, record: LatencyRecord) -> bool {
        match self.records.get_mut(index) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// Delete the record at `index`, shifting later records down by one
    pub fn remove(&mut self, index: usize) -> bool {
        if index < self.records.len() {
            self.records.remove(index);
            true
        } else {
            false
        }
    }

    /// Iterate `(index, record)` pairs in insertion order
    ///
    /// The iterator borrows the store and can be cloned to restart a listing.
    pub fn list_all(&self) -> Records<'_> {
        Records {
            inner: self.records.iter().enumerate(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Iterator over a store's `(index, record)` pairs
#[derive(Debug, Clone)]
pub struct Records<'a> {
    inner: Enumerate<slice::Iter<'a, LatencyRecord>>,
}

impl<'a> Iterator for Records<'a> {
    type Item = (usize, &'a LatencyRecord);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Records<'_> {}

impl FusedIterator for Records<'_> {}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = (usize, &'a LatencyRecord);
    type IntoIter = Records<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.list_all()
    }
}
