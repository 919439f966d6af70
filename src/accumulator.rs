//! Per-query scratch state.
//!
//! An object spanning several cells shows up once per cell during a query.
//! [`QueryScratch`] remembers which candidates were already tested so each is
//! tested, and reported, at most once.
//!
//! A scratch is owned by the caller and lent to one query at a time through
//! the `*_with` query methods. Keeping one per thread (or per system) lets
//! concurrent readers share an index behind `&` without sharing scratch.

use std::hash::Hash;

use rustc_hash::FxHashSet;

/// Deduplicating result accumulator, reusable across queries.
#[derive(Clone, Debug)]
pub struct QueryScratch<H> {
    /// Candidates tested by the current query
    seen: FxHashSet<H>,
    /// Candidates that passed the exact test, in discovery order
    hits: Vec<H>,
}

impl<H> Default for QueryScratch<H> {
    fn default() -> Self {
        Self {
            seen: FxHashSet::default(),
            hits: Vec::new(),
        }
    }
}

impl<H: Copy + Eq + Hash> QueryScratch<H> {
    /// Creates an empty scratch
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scratch sized for `capacity` candidates per query
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            seen: FxHashSet::with_capacity_and_hasher(capacity, Default::default()),
            hits: Vec::with_capacity(capacity),
        }
    }

    /// Resets the accumulator at the start of a query
    #[inline]
    pub(crate) fn begin(&mut self) {
        self.seen.clear();
        self.hits.clear();
    }

    /// Tests `candidate` unless it was already tested this query.
    ///
    /// Candidates passing `test` are accumulated.
    #[inline]
    pub(crate) fn offer(&mut self, candidate: H, test: impl FnOnce(&H) -> bool) {
        if !self.seen.insert(candidate) {
            return;
        }
        if test(&candidate) {
            self.hits.push(candidate);
        }
    }

    /// Marks `candidate` as tested without accepting it
    #[inline]
    pub(crate) fn exclude(&mut self, candidate: H) {
        let _ = self.seen.insert(candidate);
    }

    /// Moves accumulated hits into `results`, returning how many were moved
    pub(crate) fn drain_into(&mut self, results: &mut Vec<H>) -> usize {
        let count = self.hits.len();
        results.append(&mut self.hits);
        count
    }

    /// Number of candidates tested by the last query
    pub fn tested(&self) -> usize {
        self.seen.len()
    }
}
